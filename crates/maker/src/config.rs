//! TOML form of maker input.
//!
//! ```toml
//! [[matchable]]
//! name = "Status"
//! payload = "u16"
//! variants = ["success!", { name = "timed out", payload = "408" }]
//! ```

use serde::Deserialize;

/// Top-level declarations file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MakerConfig {
	#[serde(default, rename = "matchable")]
	pub matchables: Vec<MatchableConfig>,
}

/// One matchable type.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchableConfig {
	pub name: String,
	/// Payload type, as Rust source.
	#[serde(default)]
	pub payload: Option<String>,
	#[serde(default)]
	pub variants: Vec<VariantConfig>,
}

/// A variant, either a bare display name or a table with a payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariantConfig {
	Name(String),
	Detailed {
		name: String,
		/// Payload expression, as Rust source.
		#[serde(default)]
		payload: Option<String>,
	},
}

impl VariantConfig {
	pub fn name(&self) -> &str {
		match self {
			Self::Name(name) | Self::Detailed { name, .. } => name,
		}
	}

	pub fn payload(&self) -> Option<&str> {
		match self {
			Self::Name(_) => None,
			Self::Detailed { payload, .. } => payload.as_deref(),
		}
	}
}
