//! Generates matchable declarations as Rust source.
//!
//! Intended for build scripts: collect types programmatically or from a TOML
//! file, then write the forward and full artifacts into `OUT_DIR` and
//! `include!` them.
//!
//! ```rust,ignore
//! // build.rs
//! let maker = matchable_maker::MatchableMaker::from_path("matchables.toml")?;
//! let out = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
//! maker.save_as(out.join("matchables_fwd.rs"), Artifact::Forward)?;
//! maker.save_as(out.join("matchables.rs"), Artifact::Full)?;
//!
//! // src/lib.rs
//! mod fwd { include!(concat!(env!("OUT_DIR"), "/matchables_fwd.rs")); }
//! mod full { use super::fwd::*; include!(concat!(env!("OUT_DIR"), "/matchables.rs")); }
//! ```

mod config;
mod error;
mod render;
mod spec;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use config::{MakerConfig, MatchableConfig, VariantConfig};
pub use error::{MakerError, Result};
pub use render::Artifact;
pub use spec::{MatchableSpec, VariantSpec};

/// Collects matchable types and renders them. Types render sorted by name.
#[derive(Debug, Clone, Default)]
pub struct MatchableMaker {
	matchables: BTreeMap<String, MatchableSpec>,
}

impl MatchableMaker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the type called `name`, creating it if needed.
	pub fn grab(&mut self, name: &str) -> &mut MatchableSpec {
		self.matchables
			.entry(name.to_string())
			.or_insert_with(|| MatchableSpec::new(name))
	}

	pub fn get(&self, name: &str) -> Option<&MatchableSpec> {
		self.matchables.get(name)
	}

	pub fn len(&self) -> usize {
		self.matchables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matchables.is_empty()
	}

	/// Renders every collected type.
	pub fn render(&self, artifact: Artifact) -> Result<String> {
		render::render(self.matchables.values(), artifact)
	}

	/// Renders and writes `artifact` to `path`.
	///
	/// The file is left untouched when its contents would not change, so
	/// build scripts do not trigger needless rebuilds.
	pub fn save_as(&self, path: impl AsRef<Path>, artifact: Artifact) -> Result<()> {
		let path = path.as_ref();
		let source = self.render(artifact)?;

		if fs::read_to_string(path).is_ok_and(|existing| existing == source) {
			tracing::trace!(path = %path.display(), %artifact, "matchable declarations unchanged");
			return Ok(());
		}

		fs::write(path, &source).map_err(|source| MakerError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), %artifact, types = self.len(), "wrote matchable declarations");
		Ok(())
	}

	/// Builds a maker from parsed configuration.
	pub fn from_config(config: MakerConfig) -> Result<Self> {
		let mut maker = Self::new();
		for matchable in config.matchables {
			let spec = maker.grab(&matchable.name);
			if let Some(ty) = &matchable.payload {
				spec.set_payload_type(ty);
			}
			for variant in &matchable.variants {
				spec.add_variant(variant.name());
				if let Some(expr) = variant.payload() {
					spec.set_payload(variant.name(), expr)?;
				}
			}
		}
		Ok(maker)
	}

	/// Parses declarations from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: MakerConfig = toml::from_str(source)?;
		Self::from_config(config)
	}

	/// Reads declarations from a TOML file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let source = fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}
}
