use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::MatchableType;
use crate::catalog::{self, CatalogError};

/// Typed handle to one variant of matchable type `M`.
///
/// Zero-cost wrapper around the variant's ordinal. Two handles are equal iff
/// they name the same variant of the same type; payloads never take part.
/// Handles are only minted by the full definition of `M` (its associated
/// constants and registry lookups), or by the [`catalog`] once `M` is
/// populated.
pub struct VariantRef<M: MatchableType> {
	ordinal: u32,
	marker: PhantomData<fn() -> M>,
}

impl<M: MatchableType> VariantRef<M> {
	#[doc(hidden)]
	#[inline]
	pub const fn __from_ordinal(ordinal: u32) -> Self {
		Self {
			ordinal,
			marker: PhantomData,
		}
	}

	#[doc(hidden)]
	#[inline]
	pub const fn __ordinal(self) -> usize {
		self.ordinal as usize
	}

	/// Returns the name of the matchable type this variant belongs to.
	#[inline]
	pub fn type_name(self) -> &'static str {
		M::NAME
	}

	/// Returns the 0-based declaration position of this variant.
	#[cfg(feature = "by-index")]
	#[inline]
	pub const fn ordinal(self) -> usize {
		self.ordinal as usize
	}

	/// Returns true if this variant was declared before `other`.
	#[cfg(feature = "by-index")]
	#[inline]
	pub fn lt_by_index(self, other: Self) -> bool {
		self.ordinal < other.ordinal
	}

	/// Resolves the variant name through the catalog.
	///
	/// Fails with [`CatalogError::NotPopulated`] when the full definition of
	/// `M` has not been linked in and populated, and with
	/// [`CatalogError::DuplicateTypeName`] when another type owns `M`'s name.
	pub fn try_name(self) -> Result<Arc<str>, CatalogError> {
		let info = catalog::info_of::<M>()?;
		info.variant_name(self.__ordinal())
			.cloned()
			.ok_or(CatalogError::OrdinalOutOfRange {
				type_name: M::NAME,
				ordinal: self.__ordinal(),
				len: info.len(),
			})
	}
}

impl<M: MatchableType> Copy for VariantRef<M> {}

impl<M: MatchableType> Clone for VariantRef<M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M: MatchableType> PartialEq for VariantRef<M> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.ordinal == other.ordinal
	}
}

impl<M: MatchableType> Eq for VariantRef<M> {}

impl<M: MatchableType> Hash for VariantRef<M> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.ordinal.hash(state);
	}
}

#[cfg(feature = "by-index")]
impl<M: MatchableType> PartialOrd for VariantRef<M> {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(feature = "by-index")]
impl<M: MatchableType> Ord for VariantRef<M> {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.ordinal.cmp(&other.ordinal)
	}
}

impl<M: MatchableType> fmt::Debug for VariantRef<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}#{}", M::NAME, self.ordinal)
	}
}

impl<M: MatchableType> fmt::Display for VariantRef<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.try_name() {
			Ok(name) => f.write_str(&name),
			Err(_) => write!(f, "{}#{}", M::NAME, self.ordinal),
		}
	}
}
