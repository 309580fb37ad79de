use std::fmt::Write as _;

use matchable::escape::escape_identifier;

use crate::error::{MakerError, Result};
use crate::spec::MatchableSpec;

/// Which half of a declaration to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
	/// `matchable_fwd::declare_matchable!` invocations: type identity only.
	Forward,
	/// `matchable::define_matchable!` invocations: the variants. The forward
	/// declarations must be in scope where this is included.
	Full,
}

impl std::fmt::Display for Artifact {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Forward => f.write_str("forward"),
			Self::Full => f.write_str("full"),
		}
	}
}

const HEADER: &str = "// @generated by matchable-maker. Do not edit.\n";

pub(crate) fn render<'a>(specs: impl IntoIterator<Item = &'a MatchableSpec>, artifact: Artifact) -> Result<String> {
	let mut out = String::from(HEADER);
	let mut any = false;

	for spec in specs {
		any = true;
		check_type_name(spec.name())?;
		if spec.variants().is_empty() {
			return Err(MakerError::EmptyVariantSet {
				type_name: spec.name().to_string(),
			});
		}

		out.push('\n');
		match artifact {
			Artifact::Forward => {
				writeln!(out, "matchable_fwd::declare_matchable!(pub {});", spec.name())?;
			}
			Artifact::Full => render_full(&mut out, spec)?,
		}
	}

	if !any {
		return Err(MakerError::NoContent);
	}
	Ok(out)
}

fn render_full(out: &mut String, spec: &MatchableSpec) -> Result<()> {
	let has_payloads = spec.variants().iter().any(|v| v.payload().is_some());
	match spec.payload_type() {
		Some(ty) => writeln!(out, "matchable::define_matchable! {{\n\tpub {}: {ty} {{", spec.name())?,
		None if has_payloads => {
			return Err(MakerError::MissingPayloadType {
				type_name: spec.name().to_string(),
			});
		}
		None => writeln!(out, "matchable::define_matchable! {{\n\tpub {} {{", spec.name())?,
	}

	for variant in spec.variants() {
		let identifier = escape_identifier(variant.name()).ok_or_else(|| MakerError::UnrepresentableName {
			name: variant.name().to_string(),
		})?;
		match variant.payload() {
			Some(expr) => writeln!(out, "\t\t{identifier} = {expr},")?,
			None => writeln!(out, "\t\t{identifier},")?,
		}
	}

	out.push_str("\t}\n}\n");
	Ok(())
}

/// Type names are emitted verbatim and must already be plain identifiers.
fn check_type_name(name: &str) -> Result<()> {
	if escape_identifier(name).as_deref() == Some(name) {
		Ok(())
	} else {
		Err(MakerError::UnrepresentableName { name: name.to_string() })
	}
}
