use std::marker::PhantomData;
use std::sync::Arc;

use matchable_fwd::__private::register;
use matchable_fwd::{MatchableType, TypeInfo};
use rustc_hash::FxHashMap as HashMap;

use super::Registry;
use crate::descriptor::Descriptor;
use crate::error::DeclareError;
use crate::escape;

struct Pending<P> {
	identifier: Box<str>,
	name: Box<str>,
	payload: P,
}

/// Builder for a [`Registry`].
///
/// Variants receive ordinals in the order they are added.
pub struct RegistryBuilder<M: MatchableType, P = ()> {
	pending: Vec<Pending<P>>,
	marker: PhantomData<fn() -> M>,
}

impl<M: MatchableType, P> Default for RegistryBuilder<M, P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: MatchableType, P> RegistryBuilder<M, P> {
	pub fn new() -> Self {
		Self {
			pending: Vec::new(),
			marker: PhantomData,
		}
	}

	/// Returns the number of variants added so far.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true if no variants have been added.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Adds a variant by declared identifier. Its display name is the
	/// unescaped identifier.
	pub fn variant(mut self, identifier: &str, payload: P) -> Self {
		self.pending.push(Pending {
			identifier: identifier.into(),
			name: escape::unescape_identifier(identifier).into(),
			payload,
		});
		self
	}

	/// Adds a variant by display name, taken verbatim.
	///
	/// The identifier is the escaped name when one exists, otherwise the name
	/// itself.
	pub fn named(mut self, name: &str, payload: P) -> Self {
		let identifier = escape::escape_identifier(name).unwrap_or_else(|| name.to_string());
		self.pending.push(Pending {
			identifier: identifier.into(),
			name: name.into(),
			payload,
		});
		self
	}

	/// Builds the registry without touching the catalog.
	pub fn build(self) -> Result<Registry<M, P>, DeclareError> {
		if self.pending.is_empty() {
			return Err(DeclareError::EmptyVariantSet { type_name: M::NAME });
		}

		let len = self.pending.len();
		let mut by_name = HashMap::with_capacity_and_hasher(len, Default::default());
		let mut by_identifier = HashMap::with_capacity_and_hasher(len, Default::default());

		for (ordinal, pending) in self.pending.iter().enumerate() {
			if pending.name.is_empty() {
				return Err(DeclareError::EmptyVariantName {
					type_name: M::NAME,
					ordinal,
				});
			}
			if by_name.insert(pending.name.clone(), ordinal as u32).is_some() {
				return Err(duplicate::<M>(&pending.name));
			}
			if by_identifier
				.insert(pending.identifier.clone(), ordinal as u32)
				.is_some()
			{
				return Err(duplicate::<M>(&pending.identifier));
			}
		}

		let mut by_name_order: Box<[u32]> = (0..len as u32).collect();
		by_name_order.sort_unstable_by(|&a, &b| self.pending[a as usize].name.cmp(&self.pending[b as usize].name));

		let mut name_ranks = vec![0u32; len];
		for (rank, &ordinal) in by_name_order.iter().enumerate() {
			name_ranks[ordinal as usize] = rank as u32;
		}

		let info = Arc::new(TypeInfo::new::<M>(
			self.pending.iter().map(|p| Arc::<str>::from(&*p.name)),
		)?);

		let descriptors = self
			.pending
			.into_iter()
			.zip(name_ranks)
			.enumerate()
			.map(|(ordinal, (pending, name_rank))| Descriptor {
				name: pending.name,
				identifier: pending.identifier,
				ordinal: ordinal as u32,
				name_rank,
				payload: pending.payload,
			})
			.collect();

		Ok(Registry {
			descriptors,
			by_name,
			by_identifier,
			by_name_order,
			info,
			marker: PhantomData,
		})
	}

	/// Builds the registry and registers `M` in the process-wide catalog.
	///
	/// Fails with [`DeclareError::DuplicateTypeName`] when the name is already
	/// registered by another type, or by `M` with a different variant set.
	pub fn declare(self) -> Result<Registry<M, P>, DeclareError> {
		let result = self.build().and_then(|mut registry| {
			registry.info = register(TypeInfo::clone(&registry.info))?;
			Ok(registry)
		});

		match &result {
			Ok(registry) => {
				tracing::debug!(type_name = M::NAME, variants = registry.len(), "populated matchable registry");
			}
			Err(error) => {
				tracing::error!(type_name = M::NAME, %error, "matchable declaration rejected");
			}
		}
		result
	}
}

impl<M: MatchableType, P: Default> RegistryBuilder<M, P> {
	/// Adds several variants by declared identifier, each with a default payload.
	pub fn variants<I, S>(mut self, identifiers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for identifier in identifiers {
			self = self.variant(identifier.as_ref(), P::default());
		}
		self
	}
}

fn duplicate<M: MatchableType>(name: &str) -> DeclareError {
	DeclareError::DuplicateVariantName {
		type_name: M::NAME,
		name: name.to_string(),
	}
}
