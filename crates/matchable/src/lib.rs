//! Closed, named sets of singleton variants.
//!
//! A *matchable* type is declared once with [`matchable!`] (or split into
//! [`declare_matchable!`] and [`define_matchable!`]) and gets:
//! - lookup by name, by declared identifier and by ordinal ([`Matchable`])
//! - iteration in declaration order and in name order
//! - identity comparison, ordinal order and name order ([`VariantExt`], [`ByName`])
//! - exhaustive dispatch, statically through the generated `Kind` enum or at
//!   runtime through a [`Dispatcher`]
//! - per-variant containers ([`VariantMap`], [`VariantSet`])
//!
//! ```rust,ignore
//! use matchable::prelude::*;
//!
//! matchable::matchable! {
//!     pub Status: u16 {
//!         success_bng_ = 200,
//!         timed_spc_out = 408,
//!     }
//! }
//!
//! assert_eq!(Status::timed_spc_out.name(), "timed out");
//! assert_eq!(Status::variant("success!"), Ok(Status::success_bng_));
//! ```
//!
//! Code that only stores or compares variants can depend on `matchable-fwd`
//! instead, which this crate re-exports.
//!
//! # Features
//!
//! - `by-index` (default): ordinal accessors and ordinal ordering. Name-based
//!   lookup, ordering and dispatch work without it.

mod descriptor;
pub mod dispatch;
mod error;
pub mod escape;
mod macros;
pub mod registry;
mod traits;
pub mod variant_map;

pub use descriptor::Descriptor;
pub use dispatch::{Dispatcher, DispatcherBuilder};
pub use error::{DeclareError, Error, LookupError, MatchError};
pub use matchable_fwd::{CatalogError, MatchableType, TypeInfo, VariantRef, catalog, declare_matchable};
pub use registry::{Neighbors, Registry, RegistryBuilder, Variants, VariantsByName};
pub use traits::{ByName, Matchable, VariantExt};
pub use variant_map::{VariantMap, VariantSet};

/// Common imports for working with matchable types.
pub mod prelude {
	pub use crate::{ByName, Dispatcher, Matchable, MatchableType, VariantExt, VariantRef};
}

#[doc(hidden)]
pub mod __private {
	pub use matchable_fwd::TypeReg;
	pub use matchable_fwd::__private::inventory;
	pub use paste;
}
