//! Process-wide catalog of populated matchable types.
//!
//! The catalog is the type-erased, name-keyed view of every matchable type
//! whose full definition has run its population step. It lets code that only
//! holds forward declarations resolve names at runtime, and it is where
//! conflicting declarations of one type name are rejected.
//!
//! Each entry records the Rust type that owns its name. Two marker types
//! declared under the same name in different modules never share an entry:
//! the first to populate owns the name and the other is rejected.
//!
//! Full definitions also submit a [`TypeReg`] through `inventory`. A lookup
//! for a type that is linked but not yet populated runs that type's
//! population step first; [`populate_all`] runs every one of them eagerly.

use std::any::TypeId;
use std::collections::hash_map::Entry;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{MatchableType, VariantRef};

/// Errors reported by catalog registration and resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	/// The name is owned by another type, or registered with a different
	/// variant set.
	#[error("matchable {type_name}: name already declared by another definition")]
	DuplicateTypeName { type_name: &'static str },
	/// No full definition of the type has been populated.
	#[error("matchable {type_name}: not populated (full definition not linked)")]
	NotPopulated { type_name: &'static str },
	/// A variant set must not be empty.
	#[error("matchable {type_name}: declares no variants")]
	EmptyVariantSet { type_name: &'static str },
	#[error("matchable {type_name}: variant {ordinal} has an empty name")]
	EmptyVariantName { type_name: &'static str, ordinal: usize },
	#[error("matchable {type_name}: variant name {name:?} declared more than once")]
	DuplicateVariantName { type_name: &'static str, name: String },
	/// The type is populated but has no variant with this name.
	#[error("matchable {type_name}: unknown variant name {name:?}")]
	UnknownVariantName { type_name: &'static str, name: String },
	/// The ordinal is not below the number of variants.
	#[error("matchable {type_name}: ordinal {ordinal} out of range (len {len})")]
	OrdinalOutOfRange {
		type_name: &'static str,
		ordinal: usize,
		len: usize,
	},
}

impl CatalogError {
	/// Returns the name of the type the error concerns.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::DuplicateTypeName { type_name }
			| Self::NotPopulated { type_name }
			| Self::EmptyVariantSet { type_name }
			| Self::EmptyVariantName { type_name, .. }
			| Self::DuplicateVariantName { type_name, .. }
			| Self::UnknownVariantName { type_name, .. }
			| Self::OrdinalOutOfRange { type_name, .. } => type_name,
		}
	}
}

/// Type-erased description of a populated matchable type.
///
/// Always holds a valid variant set: at least one variant, every name
/// non-empty and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
	name: &'static str,
	owner: TypeId,
	variants: Arc<[Arc<str>]>,
	by_name: FxHashMap<Arc<str>, u32>,
}

impl TypeInfo {
	/// Describes `M` from its variant names in declaration order.
	pub fn new<M: MatchableType>(variants: impl IntoIterator<Item = impl Into<Arc<str>>>) -> Result<Self, CatalogError> {
		let variants: Arc<[Arc<str>]> = variants.into_iter().map(Into::into).collect();
		if variants.is_empty() {
			return Err(CatalogError::EmptyVariantSet { type_name: M::NAME });
		}

		let mut by_name = FxHashMap::with_capacity_and_hasher(variants.len(), Default::default());
		for (ordinal, name) in variants.iter().enumerate() {
			if name.is_empty() {
				return Err(CatalogError::EmptyVariantName {
					type_name: M::NAME,
					ordinal,
				});
			}
			if by_name.insert(name.clone(), ordinal as u32).is_some() {
				return Err(CatalogError::DuplicateVariantName {
					type_name: M::NAME,
					name: name.to_string(),
				});
			}
		}

		Ok(Self {
			name: M::NAME,
			owner: TypeId::of::<M>(),
			variants,
			by_name,
		})
	}

	/// Returns the type name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the variant names in declaration order.
	pub fn variants(&self) -> &[Arc<str>] {
		&self.variants
	}

	/// Returns the name of the variant at `ordinal`.
	pub fn variant_name(&self, ordinal: usize) -> Option<&Arc<str>> {
		self.variants.get(ordinal)
	}

	/// Returns the declaration position of the variant called `name`.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.by_name.get(name).map(|&ordinal| ordinal as usize)
	}

	/// Returns the number of variants.
	pub fn len(&self) -> usize {
		self.variants.len()
	}

	/// Returns false: a description has at least one variant.
	pub fn is_empty(&self) -> bool {
		self.variants.is_empty()
	}

	/// Returns true if this entry describes `M` itself rather than another
	/// type declared under the same name.
	pub fn is_owned_by<M: MatchableType>(&self) -> bool {
		self.owner == TypeId::of::<M>()
	}
}

/// Link-time registration of a full definition's population step.
///
/// Submitted by `matchable::define_matchable!`; collected with `inventory`.
pub struct TypeReg {
	name: &'static str,
	owner: fn() -> TypeId,
	populate: fn(),
}

impl TypeReg {
	/// Creates a registration for the type called `name`, whose marker type
	/// is identified by `owner`.
	pub const fn new(name: &'static str, owner: fn() -> TypeId, populate: fn()) -> Self {
		Self { name, owner, populate }
	}

	/// Returns the registered type name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Runs the population step. Idempotent.
	pub fn populate(&self) {
		(self.populate)()
	}
}

inventory::collect!(TypeReg);

static CATALOG: LazyLock<RwLock<FxHashMap<&'static str, Arc<TypeInfo>>>> = LazyLock::new(Default::default);

/// Registers a populated type.
///
/// Registering the same type with the same variant set again returns the
/// existing entry. A different variant set, or a different type under the
/// same name, fails with [`CatalogError::DuplicateTypeName`].
pub(crate) fn register(info: TypeInfo) -> Result<Arc<TypeInfo>, CatalogError> {
	let mut types = CATALOG.write();
	match types.entry(info.name) {
		Entry::Occupied(existing) => {
			let existing = existing.get();
			if existing.owner == info.owner && existing.variants == info.variants {
				Ok(existing.clone())
			} else {
				Err(CatalogError::DuplicateTypeName {
					type_name: info.name,
				})
			}
		}
		Entry::Vacant(slot) => Ok(slot.insert(Arc::new(info)).clone()),
	}
}

/// Returns true if `type_name` has been populated. Never triggers population.
pub fn is_populated(type_name: &str) -> bool {
	CATALOG.read().contains_key(type_name)
}

/// Looks up a type by name, populating it first if it is linked but not yet
/// populated.
pub fn lookup(type_name: &str) -> Option<Arc<TypeInfo>> {
	if let Some(info) = CATALOG.read().get(type_name) {
		return Some(info.clone());
	}

	populate_linked(type_name, None);
	CATALOG.read().get(type_name).cloned()
}

/// Returns the catalog entry for `M`, populating `M` first if it is linked.
///
/// Fails with [`CatalogError::DuplicateTypeName`] when the name is owned by
/// another type, so a rejected declaration never resolves against the
/// accepted one.
pub fn info_of<M: MatchableType>() -> Result<Arc<TypeInfo>, CatalogError> {
	let cached = CATALOG.read().get(M::NAME).cloned();
	let info = match cached {
		Some(info) => info,
		None => {
			populate_linked(M::NAME, Some(TypeId::of::<M>()));
			let populated = CATALOG.read().get(M::NAME).cloned();
			populated.ok_or(CatalogError::NotPopulated { type_name: M::NAME })?
		}
	};

	if info.is_owned_by::<M>() {
		Ok(info)
	} else {
		Err(CatalogError::DuplicateTypeName { type_name: M::NAME })
	}
}

/// Resolves a variant of `M` by name.
pub fn resolve<M: MatchableType>(name: &str) -> Result<VariantRef<M>, CatalogError> {
	let info = info_of::<M>()?;
	info.position(name)
		.map(|ordinal| VariantRef::__from_ordinal(ordinal as u32))
		.ok_or_else(|| CatalogError::UnknownVariantName {
			type_name: M::NAME,
			name: name.to_string(),
		})
}

/// Resolves a variant of `M` by ordinal.
#[cfg(feature = "by-index")]
pub fn resolve_at<M: MatchableType>(ordinal: usize) -> Result<VariantRef<M>, CatalogError> {
	let info = info_of::<M>()?;
	if ordinal >= info.len() {
		return Err(CatalogError::OrdinalOutOfRange {
			type_name: M::NAME,
			ordinal,
			len: info.len(),
		});
	}
	Ok(VariantRef::__from_ordinal(ordinal as u32))
}

/// Returns the names of all populated or linked types, sorted.
pub fn declared_types() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = CATALOG.read().keys().copied().collect();
	names.extend(inventory::iter::<TypeReg>.into_iter().map(TypeReg::name));
	names.sort_unstable();
	names.dedup();
	names
}

/// Runs the population step of every linked type. Returns how many were run.
pub fn populate_all() -> usize {
	let mut count = 0;
	for reg in inventory::iter::<TypeReg> {
		reg.populate();
		count += 1;
	}
	tracing::debug!(count, "populated all linked matchable types");
	count
}

fn populate_linked(type_name: &str, owner: Option<TypeId>) {
	for reg in inventory::iter::<TypeReg> {
		if reg.name == type_name && owner.is_none_or(|owner| (reg.owner)() == owner) {
			tracing::trace!(type_name, "populating linked matchable type");
			reg.populate();
		}
	}
}

#[cfg(test)]
mod tests;
