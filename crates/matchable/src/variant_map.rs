//! Containers keyed by the variants of one matchable type.
//!
//! [`VariantMap`] holds an optional value per variant, for per-variant data
//! that is computed or changed at runtime rather than fixed at declaration.
//! [`VariantSet`] is a bitset over the variants.

use std::fmt;
use std::iter::FusedIterator;

use matchable_fwd::VariantRef;

use crate::traits::{Matchable, VariantExt};

/// Map from variants of `M` to values of `T`, stored in declaration order.
pub struct VariantMap<M: Matchable, T> {
	slots: Box<[Option<T>]>,
	len: usize,
	marker: std::marker::PhantomData<fn() -> M>,
}

impl<M: Matchable, T> VariantMap<M, T> {
	/// Creates an empty map.
	///
	/// # Panics
	///
	/// Panics if the declaration of `M` was rejected.
	pub fn new() -> Self {
		Self {
			slots: (0..M::variant_count()).map(|_| None).collect(),
			len: 0,
			marker: std::marker::PhantomData,
		}
	}

	/// Sets the value for `variant`, returning the previous one.
	pub fn insert(&mut self, variant: VariantRef<M>, value: T) -> Option<T> {
		let old = self.slots[variant.__ordinal()].replace(value);
		if old.is_none() {
			self.len += 1;
		}
		old
	}

	pub fn remove(&mut self, variant: VariantRef<M>) -> Option<T> {
		let old = self.slots[variant.__ordinal()].take();
		if old.is_some() {
			self.len -= 1;
		}
		old
	}

	#[inline]
	pub fn get(&self, variant: VariantRef<M>) -> Option<&T> {
		self.slots[variant.__ordinal()].as_ref()
	}

	#[inline]
	pub fn get_mut(&mut self, variant: VariantRef<M>) -> Option<&mut T> {
		self.slots[variant.__ordinal()].as_mut()
	}

	/// Returns the value for `variant`, or `default` when unset.
	pub fn get_or<'a>(&'a self, variant: VariantRef<M>, default: &'a T) -> &'a T {
		self.get(variant).unwrap_or(default)
	}

	#[inline]
	pub fn contains(&self, variant: VariantRef<M>) -> bool {
		self.slots[variant.__ordinal()].is_some()
	}

	/// Number of variants with a value.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn clear(&mut self) {
		self.slots.iter_mut().for_each(|slot| *slot = None);
		self.len = 0;
	}

	/// Variants with a value, in declaration order.
	pub fn keys(&self) -> impl Iterator<Item = VariantRef<M>> + '_ {
		self.iter().map(|(variant, _)| variant)
	}

	/// Values, in declaration order of their variants.
	pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
		self.iter().map(|(_, value)| value)
	}

	/// Entries in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (VariantRef<M>, &T)> + '_ {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(ordinal, slot)| slot.as_ref().map(|value| (VariantRef::__from_ordinal(ordinal as u32), value)))
	}
}

impl<M: Matchable, T> Default for VariantMap<M, T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Matchable, T: Clone> Clone for VariantMap<M, T> {
	fn clone(&self) -> Self {
		Self {
			slots: self.slots.clone(),
			len: self.len,
			marker: std::marker::PhantomData,
		}
	}
}

impl<M: Matchable, T: PartialEq> PartialEq for VariantMap<M, T> {
	fn eq(&self, other: &Self) -> bool {
		self.slots == other.slots
	}
}

impl<M: Matchable, T: Eq> Eq for VariantMap<M, T> {}

impl<M: Matchable, T: fmt::Debug> fmt::Debug for VariantMap<M, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.iter().map(|(variant, value)| (variant.name(), value)))
			.finish()
	}
}

impl<M: Matchable, T> FromIterator<(VariantRef<M>, T)> for VariantMap<M, T> {
	fn from_iter<I: IntoIterator<Item = (VariantRef<M>, T)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<M: Matchable, T> Extend<(VariantRef<M>, T)> for VariantMap<M, T> {
	fn extend<I: IntoIterator<Item = (VariantRef<M>, T)>>(&mut self, iter: I) {
		for (variant, value) in iter {
			self.insert(variant, value);
		}
	}
}

impl<M: Matchable, T> std::ops::Index<VariantRef<M>> for VariantMap<M, T> {
	type Output = T;

	/// # Panics
	///
	/// Panics if `variant` has no value.
	fn index(&self, variant: VariantRef<M>) -> &T {
		match self.get(variant) {
			Some(value) => value,
			None => panic!("{}: no value for {}", M::NAME, variant.name()),
		}
	}
}

const BITS: usize = u64::BITS as usize;

/// Set of variants of `M`.
pub struct VariantSet<M: Matchable> {
	words: Box<[u64]>,
	marker: std::marker::PhantomData<fn() -> M>,
}

impl<M: Matchable> VariantSet<M> {
	/// Creates an empty set.
	///
	/// # Panics
	///
	/// Panics if the declaration of `M` was rejected.
	pub fn new() -> Self {
		Self {
			words: vec![0; M::variant_count().div_ceil(BITS)].into_boxed_slice(),
			marker: std::marker::PhantomData,
		}
	}

	/// Creates a set holding every variant.
	pub fn all() -> Self {
		M::variants().collect()
	}

	/// Adds `variant`. Returns true if it was not already present.
	pub fn insert(&mut self, variant: VariantRef<M>) -> bool {
		let (word, bit) = locate(variant);
		let added = self.words[word] & bit == 0;
		self.words[word] |= bit;
		added
	}

	/// Removes `variant`. Returns true if it was present.
	pub fn remove(&mut self, variant: VariantRef<M>) -> bool {
		let (word, bit) = locate(variant);
		let present = self.words[word] & bit != 0;
		self.words[word] &= !bit;
		present
	}

	#[inline]
	pub fn contains(&self, variant: VariantRef<M>) -> bool {
		let (word, bit) = locate(variant);
		self.words[word] & bit != 0
	}

	pub fn len(&self) -> usize {
		self.words.iter().map(|word| word.count_ones() as usize).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.words.iter().all(|&word| word == 0)
	}

	pub fn clear(&mut self) {
		self.words.iter_mut().for_each(|word| *word = 0);
	}

	/// Members in declaration order.
	pub fn iter(&self) -> SetIter<'_, M> {
		SetIter {
			words: &self.words,
			word: 0,
			current: self.words.first().copied().unwrap_or(0),
			marker: std::marker::PhantomData,
		}
	}
}

fn locate<M: Matchable>(variant: VariantRef<M>) -> (usize, u64) {
	let ordinal = variant.__ordinal();
	(ordinal / BITS, 1 << (ordinal % BITS))
}

impl<M: Matchable> Default for VariantSet<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Matchable> Clone for VariantSet<M> {
	fn clone(&self) -> Self {
		Self {
			words: self.words.clone(),
			marker: std::marker::PhantomData,
		}
	}
}

impl<M: Matchable> PartialEq for VariantSet<M> {
	fn eq(&self, other: &Self) -> bool {
		self.words == other.words
	}
}

impl<M: Matchable> Eq for VariantSet<M> {}

impl<M: Matchable> fmt::Debug for VariantSet<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter().map(|variant| variant.name())).finish()
	}
}

impl<M: Matchable> FromIterator<VariantRef<M>> for VariantSet<M> {
	fn from_iter<I: IntoIterator<Item = VariantRef<M>>>(iter: I) -> Self {
		let mut set = Self::new();
		set.extend(iter);
		set
	}
}

impl<M: Matchable> Extend<VariantRef<M>> for VariantSet<M> {
	fn extend<I: IntoIterator<Item = VariantRef<M>>>(&mut self, iter: I) {
		for variant in iter {
			self.insert(variant);
		}
	}
}

impl<'a, M: Matchable> IntoIterator for &'a VariantSet<M> {
	type Item = VariantRef<M>;
	type IntoIter = SetIter<'a, M>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over a [`VariantSet`].
pub struct SetIter<'a, M: Matchable> {
	words: &'a [u64],
	word: usize,
	current: u64,
	marker: std::marker::PhantomData<fn() -> M>,
}

impl<M: Matchable> Iterator for SetIter<'_, M> {
	type Item = VariantRef<M>;

	fn next(&mut self) -> Option<Self::Item> {
		while self.current == 0 {
			self.word += 1;
			self.current = *self.words.get(self.word)?;
		}
		let bit = self.current.trailing_zeros() as usize;
		self.current &= self.current - 1;
		Some(VariantRef::__from_ordinal((self.word * BITS + bit) as u32))
	}
}

impl<M: Matchable> FusedIterator for SetIter<'_, M> {}
