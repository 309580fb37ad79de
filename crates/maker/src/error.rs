use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while collecting or rendering declarations.
#[derive(Debug, Error)]
pub enum MakerError {
	#[error("nothing to write: no matchable types declared")]
	NoContent,
	#[error("matchable {type_name}: declares no variants")]
	EmptyVariantSet { type_name: String },
	#[error("{name:?} cannot be expressed as a Rust identifier")]
	UnrepresentableName { name: String },
	#[error("matchable {type_name}: no variant named {variant:?}")]
	UnknownVariant { type_name: String, variant: String },
	#[error("matchable {type_name}: variant payloads given without a payload type")]
	MissingPayloadType { type_name: String },
	#[error("failed to write {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to format declarations: {0}")]
	Format(#[from] std::fmt::Error),
	#[error("failed to read declarations: {0}")]
	Read(#[from] std::io::Error),
	#[error("failed to parse declarations: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for maker operations.
pub type Result<T> = std::result::Result<T, MakerError>;
