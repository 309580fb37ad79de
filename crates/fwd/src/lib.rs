//! Forward declarations for matchable types.
//!
//! This crate is the lightweight half of a matchable type. It carries:
//! - [`MatchableType`]: the identity of a declared type (its name)
//! - [`VariantRef`]: a copyable handle to one variant of a type
//! - [`declare_matchable!`]: declares a type's identity without its variants
//! - [`catalog`]: the process-wide, type-erased view of populated types
//!
//! Code that only stores, passes or compares variants should depend on this
//! crate alone. Enumerating variants, building one from a name, and matching
//! over the variant set need the full definition from the `matchable` crate.
//!
//! ```rust,ignore
//! matchable_fwd::declare_matchable! {
//!     /// Days of the week.
//!     pub DayOfWeek
//! }
//!
//! pub struct Meeting {
//!     pub day: matchable_fwd::VariantRef<DayOfWeek>,
//! }
//! ```
//!
//! Without the full definition there is nothing to enumerate:
//!
//! ```compile_fail
//! matchable_fwd::declare_matchable!(pub DayOfWeek);
//!
//! let _days = DayOfWeek::variants();
//! ```

pub mod catalog;
mod variant;

pub use catalog::{CatalogError, TypeInfo, TypeReg};
pub use variant::VariantRef;

/// Identity of a declared matchable type.
///
/// Implemented by [`declare_matchable!`]; the name is unique per variant set
/// across the process (see [`catalog`]).
pub trait MatchableType: 'static {
	/// The declared type name.
	const NAME: &'static str;
}

/// Declares the identity of a matchable type without materializing its variants.
///
/// Expands to an uninhabited marker type implementing [`MatchableType`]. The
/// variants are attached later by `matchable::define_matchable!`, usually in a
/// different module.
#[macro_export]
macro_rules! declare_matchable {
	($(#[$attr:meta])* $vis:vis $name:ident $(;)?) => {
		$(#[$attr])*
		$vis enum $name {}

		impl $crate::MatchableType for $name {
			const NAME: &'static str = stringify!($name);
		}
	};
}

#[doc(hidden)]
pub mod __private {
	use std::sync::Arc;

	pub use inventory;

	use crate::catalog::{CatalogError, TypeInfo};

	/// Catalog registration, reserved for full definitions.
	pub fn register(info: TypeInfo) -> Result<Arc<TypeInfo>, CatalogError> {
		crate::catalog::register(info)
	}
}
