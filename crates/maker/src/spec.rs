use crate::error::{MakerError, Result};

/// One variant collected by the maker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
	name: String,
	payload: Option<String>,
}

impl VariantSpec {
	/// Display name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Payload expression, as Rust source.
	pub fn payload(&self) -> Option<&str> {
		self.payload.as_deref()
	}
}

/// A matchable type being assembled for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchableSpec {
	name: String,
	payload_type: Option<String>,
	variants: Vec<VariantSpec>,
}

impl MatchableSpec {
	pub(crate) fn new(name: &str) -> Self {
		Self {
			name: name.to_string(),
			payload_type: None,
			variants: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Appends a variant by display name. Returns false if it already exists.
	pub fn add_variant(&mut self, name: &str) -> bool {
		if self.variants.iter().any(|v| v.name == name) {
			return false;
		}
		self.variants.push(VariantSpec {
			name: name.to_string(),
			payload: None,
		});
		true
	}

	/// Sets the payload type, as Rust source (`u16`, `&'static str`).
	pub fn set_payload_type(&mut self, ty: &str) {
		self.payload_type = Some(ty.to_string());
	}

	/// Sets the payload expression of `variant`, as Rust source.
	pub fn set_payload(&mut self, variant: &str, expr: &str) -> Result<()> {
		let Some(spec) = self.variants.iter_mut().find(|v| v.name == variant) else {
			return Err(MakerError::UnknownVariant {
				type_name: self.name.clone(),
				variant: variant.to_string(),
			});
		};
		spec.payload = Some(expr.to_string());
		Ok(())
	}

	pub fn payload_type(&self) -> Option<&str> {
		self.payload_type.as_deref()
	}

	/// Variants in declaration order.
	pub fn variants(&self) -> &[VariantSpec] {
		&self.variants
	}
}
