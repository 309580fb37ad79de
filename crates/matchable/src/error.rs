//! Error types for declaration, lookup and match construction.

use matchable_fwd::CatalogError;

/// A declaration was rejected. No registry is left behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclareError {
	#[error("matchable {type_name}: declares no variants")]
	EmptyVariantSet { type_name: &'static str },
	#[error("matchable {type_name}: variant {ordinal} has an empty name")]
	EmptyVariantName { type_name: &'static str, ordinal: usize },
	#[error("matchable {type_name}: variant name {name:?} declared more than once")]
	DuplicateVariantName { type_name: &'static str, name: String },
	#[error("matchable {type_name}: name already declared by another definition")]
	DuplicateTypeName { type_name: &'static str },
	/// Any other catalog failure during registration.
	#[error(transparent)]
	Catalog(CatalogError),
}

impl From<CatalogError> for DeclareError {
	fn from(error: CatalogError) -> Self {
		match error {
			CatalogError::EmptyVariantSet { type_name } => Self::EmptyVariantSet { type_name },
			CatalogError::EmptyVariantName { type_name, ordinal } => Self::EmptyVariantName { type_name, ordinal },
			CatalogError::DuplicateVariantName { type_name, name } => Self::DuplicateVariantName { type_name, name },
			CatalogError::DuplicateTypeName { type_name } => Self::DuplicateTypeName { type_name },
			other => Self::Catalog(other),
		}
	}
}

/// A runtime lookup found no matching variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	/// The type's declaration was rejected, so it has no variants to look up.
	#[error(transparent)]
	Declare(#[from] DeclareError),
	#[error("matchable {type_name}: unknown variant name {name:?}")]
	UnknownVariantName { type_name: &'static str, name: String },
	#[error("matchable {type_name}: ordinal {ordinal} out of range (len {len})")]
	OrdinalOutOfRange {
		type_name: &'static str,
		ordinal: usize,
		len: usize,
	},
}

/// A dispatcher could not be constructed from the supplied handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
	#[error("matchable {type_name}: match is missing handlers for {}", .missing.join(", "))]
	IncompleteMatch {
		type_name: &'static str,
		missing: Vec<String>,
	},
	#[error("matchable {type_name}: handler given for unknown variant name {name:?}")]
	UnknownVariantName { type_name: &'static str, name: String },
	#[error("matchable {type_name}: more than one handler given for {name:?}")]
	DuplicateHandler { type_name: &'static str, name: String },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Declare(#[from] DeclareError),
	#[error(transparent)]
	Lookup(#[from] LookupError),
	#[error(transparent)]
	Match(#[from] MatchError),
	#[error(transparent)]
	Catalog(#[from] CatalogError),
}

impl DeclareError {
	/// Returns the name of the type whose declaration was rejected.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::EmptyVariantSet { type_name }
			| Self::EmptyVariantName { type_name, .. }
			| Self::DuplicateVariantName { type_name, .. }
			| Self::DuplicateTypeName { type_name } => type_name,
			Self::Catalog(error) => error.type_name(),
		}
	}
}
