//! Per-type variant registry.
//!
//! A [`Registry`] is built once per matchable type by [`RegistryBuilder`] and
//! is immutable afterwards. It owns the [`Descriptor`]s in declaration order
//! and indexes them by display name, by declared identifier and by
//! lexicographic name rank.

mod build;

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;
use std::sync::Arc;

pub use build::RegistryBuilder;
use matchable_fwd::{MatchableType, TypeInfo, VariantRef};
use rustc_hash::FxHashMap as HashMap;

use crate::descriptor::Descriptor;
use crate::error::LookupError;

/// Populated, read-only lookup structure for matchable type `M`.
pub struct Registry<M: MatchableType, P = ()> {
	descriptors: Box<[Descriptor<P>]>,
	by_name: HashMap<Box<str>, u32>,
	by_identifier: HashMap<Box<str>, u32>,
	/// Ordinals sorted by name.
	by_name_order: Box<[u32]>,
	info: Arc<TypeInfo>,
	marker: PhantomData<fn() -> M>,
}

impl<M: MatchableType, P> Registry<M, P> {
	/// Starts a registry for `M`.
	pub fn builder() -> RegistryBuilder<M, P> {
		RegistryBuilder::new()
	}

	/// Number of variants. Always at least one.
	#[inline]
	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	/// Always false: empty declarations are rejected.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	/// Looks up a variant by display name.
	pub fn get(&self, name: &str) -> Result<VariantRef<M>, LookupError> {
		self.by_name
			.get(name)
			.map(|&ordinal| VariantRef::__from_ordinal(ordinal))
			.ok_or_else(|| unknown::<M>(name))
	}

	/// Looks up a variant by its declared identifier (`timed_spc_out`, not
	/// `timed out`).
	pub fn get_by_identifier(&self, identifier: &str) -> Result<VariantRef<M>, LookupError> {
		self.by_identifier
			.get(identifier)
			.map(|&ordinal| VariantRef::__from_ordinal(ordinal))
			.ok_or_else(|| unknown::<M>(identifier))
	}

	/// Looks up a variant by declaration position.
	#[cfg(feature = "by-index")]
	pub fn at(&self, ordinal: usize) -> Result<VariantRef<M>, LookupError> {
		if ordinal >= self.len() {
			return Err(LookupError::OrdinalOutOfRange {
				type_name: M::NAME,
				ordinal,
				len: self.len(),
			});
		}
		Ok(VariantRef::__from_ordinal(ordinal as u32))
	}

	/// Returns the variant at `rank` in name order.
	pub fn at_name_rank(&self, rank: usize) -> Option<VariantRef<M>> {
		self.by_name_order
			.get(rank)
			.map(|&ordinal| VariantRef::__from_ordinal(ordinal))
	}

	/// Iterates all variants in declaration order.
	#[inline]
	pub fn iter(&self) -> Variants<M> {
		Variants {
			range: 0..self.len() as u32,
			marker: PhantomData,
		}
	}

	/// Iterates all variants in lexicographic name order.
	#[inline]
	pub fn iter_by_name(&self) -> VariantsByName<'_, M> {
		VariantsByName {
			inner: self.by_name_order.iter(),
			marker: PhantomData,
		}
	}

	/// Returns the descriptor `variant` refers to.
	///
	/// # Panics
	///
	/// Panics if `variant` was not minted for this registry. Handles obtained
	/// through `M`'s own accessors always are.
	#[inline]
	pub fn descriptor(&self, variant: VariantRef<M>) -> &Descriptor<P> {
		&self.descriptors[variant.__ordinal()]
	}

	/// All descriptors in declaration order.
	#[inline]
	pub fn descriptors(&self) -> &[Descriptor<P>] {
		&self.descriptors
	}

	/// Finds where `name` falls in name order.
	///
	/// `exact` is the variant called `name`, if any. `below` and `above` are
	/// the closest variants sorting strictly before and after `name`.
	pub fn neighbors(&self, name: &str) -> Neighbors<M> {
		let order = &self.by_name_order;
		let split = order.partition_point(|&ordinal| &*self.descriptors[ordinal as usize].name < name);
		let handle = |idx: usize| order.get(idx).map(|&ordinal| VariantRef::__from_ordinal(ordinal));

		let below = split.checked_sub(1).and_then(handle);
		let exact = order
			.get(split)
			.filter(|&&ordinal| &*self.descriptors[ordinal as usize].name == name)
			.map(|&ordinal| VariantRef::__from_ordinal(ordinal));
		let above = if exact.is_some() { handle(split + 1) } else { handle(split) };

		Neighbors { below, exact, above }
	}

	/// Type-erased view shared with the catalog.
	#[inline]
	pub fn type_info(&self) -> &Arc<TypeInfo> {
		&self.info
	}
}

impl<M: MatchableType, P: std::fmt::Debug> std::fmt::Debug for Registry<M, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("type_name", &M::NAME)
			.field("descriptors", &self.descriptors)
			.finish()
	}
}

impl<'a, M: MatchableType, P> IntoIterator for &'a Registry<M, P> {
	type Item = VariantRef<M>;
	type IntoIter = Variants<M>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn unknown<M: MatchableType>(name: &str) -> LookupError {
	LookupError::UnknownVariantName {
		type_name: M::NAME,
		name: name.to_string(),
	}
}

/// Result of [`Registry::neighbors`].
pub struct Neighbors<M: MatchableType> {
	pub below: Option<VariantRef<M>>,
	pub exact: Option<VariantRef<M>>,
	pub above: Option<VariantRef<M>>,
}

// Manual impls: derives would bound the uninhabited marker `M`.
impl<M: MatchableType> Clone for Neighbors<M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M: MatchableType> Copy for Neighbors<M> {}

impl<M: MatchableType> PartialEq for Neighbors<M> {
	fn eq(&self, other: &Self) -> bool {
		self.below == other.below && self.exact == other.exact && self.above == other.above
	}
}

impl<M: MatchableType> Eq for Neighbors<M> {}

impl<M: MatchableType> std::fmt::Debug for Neighbors<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Neighbors")
			.field("below", &self.below)
			.field("exact", &self.exact)
			.field("above", &self.above)
			.finish()
	}
}

/// Variants in declaration order. Restartable by cloning.
pub struct Variants<M: MatchableType> {
	range: Range<u32>,
	marker: PhantomData<fn() -> M>,
}

impl<M: MatchableType> Clone for Variants<M> {
	fn clone(&self) -> Self {
		Self {
			range: self.range.clone(),
			marker: PhantomData,
		}
	}
}

impl<M: MatchableType> std::fmt::Debug for Variants<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Variants")
			.field("type_name", &M::NAME)
			.field("range", &self.range)
			.finish()
	}
}

impl<M: MatchableType> Iterator for Variants<M> {
	type Item = VariantRef<M>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.range.next().map(VariantRef::__from_ordinal)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.range.size_hint()
	}
}

impl<M: MatchableType> DoubleEndedIterator for Variants<M> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.range.next_back().map(VariantRef::__from_ordinal)
	}
}

impl<M: MatchableType> ExactSizeIterator for Variants<M> {}
impl<M: MatchableType> FusedIterator for Variants<M> {}

/// Variants in lexicographic name order.
pub struct VariantsByName<'a, M: MatchableType> {
	inner: std::slice::Iter<'a, u32>,
	marker: PhantomData<fn() -> M>,
}

impl<M: MatchableType> Clone for VariantsByName<'_, M> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			marker: PhantomData,
		}
	}
}

impl<M: MatchableType> std::fmt::Debug for VariantsByName<'_, M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.clone()).finish()
	}
}

impl<M: MatchableType> Iterator for VariantsByName<'_, M> {
	type Item = VariantRef<M>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|&ordinal| VariantRef::__from_ordinal(ordinal))
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<M: MatchableType> DoubleEndedIterator for VariantsByName<'_, M> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|&ordinal| VariantRef::__from_ordinal(ordinal))
	}
}

impl<M: MatchableType> ExactSizeIterator for VariantsByName<'_, M> {}
impl<M: MatchableType> FusedIterator for VariantsByName<'_, M> {}

#[cfg(test)]
mod tests;
