//! The full-definition surface of a matchable type.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use matchable_fwd::{MatchableType, VariantRef};

use crate::descriptor::Descriptor;
use crate::dispatch::Dispatcher;
use crate::error::{DeclareError, LookupError};
use crate::registry::{Neighbors, Registry, Variants, VariantsByName};

/// A matchable type whose variants are materialized.
///
/// Implemented by [`define_matchable!`](crate::define_matchable). Only the
/// three required methods are generated; everything else is derived from the
/// registry.
pub trait Matchable: MatchableType + Sized {
	/// Data attached to each variant at declaration.
	type Payload: Send + Sync + 'static;

	/// Native fieldless enum with one variant per declared identifier. Matching
	/// on it with `match` is checked for exhaustiveness by the compiler.
	type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

	/// Returns the registry, populating it on first use.
	///
	/// Population runs once per process; concurrent first callers block until
	/// it completes and all observe the same result.
	fn try_registry() -> Result<&'static Registry<Self, Self::Payload>, DeclareError>;

	fn kind_of(variant: VariantRef<Self>) -> Self::Kind;

	fn from_kind(kind: Self::Kind) -> VariantRef<Self>;

	/// Returns the registry.
	///
	/// # Panics
	///
	/// Panics if the declaration was rejected. Use [`Matchable::try_registry`]
	/// to handle that case.
	fn registry() -> &'static Registry<Self, Self::Payload> {
		match Self::try_registry() {
			Ok(registry) => registry,
			Err(error) => panic!("{error}"),
		}
	}

	/// Looks up a variant by display name.
	///
	/// A rejected declaration is reported as [`LookupError::Declare`].
	fn variant(name: &str) -> Result<VariantRef<Self>, LookupError> {
		Self::try_registry()?.get(name)
	}

	/// Looks up a variant by declaration position.
	#[cfg(feature = "by-index")]
	fn variant_at(ordinal: usize) -> Result<VariantRef<Self>, LookupError> {
		Self::try_registry()?.at(ordinal)
	}

	/// Looks up a variant by declared identifier.
	fn from_identifier(identifier: &str) -> Result<VariantRef<Self>, LookupError> {
		Self::try_registry()?.get_by_identifier(identifier)
	}

	/// All variants in declaration order.
	///
	/// # Panics
	///
	/// Panics if the declaration was rejected, as do [`Matchable::variants_by_name`],
	/// [`Matchable::variant_count`] and [`Matchable::neighbors`].
	fn variants() -> Variants<Self> {
		Self::registry().iter()
	}

	/// All variants in lexicographic name order.
	fn variants_by_name() -> VariantsByName<'static, Self> {
		Self::registry().iter_by_name()
	}

	fn variant_count() -> usize {
		Self::registry().len()
	}

	/// See [`Registry::neighbors`].
	fn neighbors(name: &str) -> Neighbors<Self> {
		Self::registry().neighbors(name)
	}
}

/// Operations on a variant handle that need the full definition.
///
/// # Panics
///
/// Every method that reads the descriptor panics if the declaration of `M`
/// was rejected. [`VariantRef::try_name`] is the non-panicking way to name a
/// handle of a type that may have been rejected.
pub trait VariantExt<M: Matchable>: Copy {
	fn descriptor(self) -> &'static Descriptor<M::Payload>;

	/// Display name.
	fn name(self) -> &'static str {
		self.descriptor().name()
	}

	/// Identifier as declared.
	fn identifier(self) -> &'static str {
		self.descriptor().identifier()
	}

	fn payload(self) -> &'static M::Payload {
		self.descriptor().payload()
	}

	fn kind(self) -> M::Kind;

	/// Position in name order.
	fn name_rank(self) -> usize {
		self.descriptor().name_rank()
	}

	/// True if this variant's name sorts before `other`'s.
	fn lt_by_name(self, other: Self) -> bool {
		self.name_rank() < other.name_rank()
	}

	fn cmp_by_name(self, other: Self) -> Ordering {
		self.name_rank().cmp(&other.name_rank())
	}

	/// True if this variant is any of `candidates`.
	fn is_one_of(self, candidates: &[Self]) -> bool;

	/// Runs the handler `dispatcher` selects for this variant.
	fn dispatch<A, R>(self, dispatcher: &Dispatcher<M, A, R>, args: A) -> R;
}

impl<M: Matchable> VariantExt<M> for VariantRef<M> {
	#[inline]
	fn descriptor(self) -> &'static Descriptor<M::Payload> {
		M::registry().descriptor(self)
	}

	#[inline]
	fn kind(self) -> M::Kind {
		M::kind_of(self)
	}

	fn is_one_of(self, candidates: &[Self]) -> bool {
		candidates.contains(&self)
	}

	#[inline]
	fn dispatch<A, R>(self, dispatcher: &Dispatcher<M, A, R>, args: A) -> R {
		dispatcher.dispatch(self, args)
	}
}

/// Orders a variant handle by name instead of declaration position.
///
/// ```rust,ignore
/// let mut days: Vec<_> = DayOfWeek::variants().map(ByName).collect();
/// days.sort();
/// ```
pub struct ByName<M: Matchable>(pub VariantRef<M>);

impl<M: Matchable> ByName<M> {
	#[inline]
	pub fn into_inner(self) -> VariantRef<M> {
		self.0
	}
}

impl<M: Matchable> Clone for ByName<M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M: Matchable> Copy for ByName<M> {}

impl<M: Matchable> PartialEq for ByName<M> {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl<M: Matchable> Eq for ByName<M> {}

impl<M: Matchable> PartialOrd for ByName<M> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<M: Matchable> Ord for ByName<M> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.cmp_by_name(other.0)
	}
}

impl<M: Matchable> Hash for ByName<M> {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl<M: Matchable> Debug for ByName<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("ByName").field(&self.0.name()).finish()
	}
}

impl<M: Matchable> From<VariantRef<M>> for ByName<M> {
	fn from(variant: VariantRef<M>) -> Self {
		Self(variant)
	}
}
