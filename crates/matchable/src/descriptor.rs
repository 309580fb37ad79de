/// Identity of one variant, owned by its type's registry.
///
/// Exactly one descriptor exists per variant. Handles ([`VariantRef`]) resolve
/// to it through [`Registry::descriptor`].
///
/// [`VariantRef`]: matchable_fwd::VariantRef
/// [`Registry::descriptor`]: crate::Registry::descriptor
#[derive(Debug)]
pub struct Descriptor<P = ()> {
	pub(crate) name: Box<str>,
	pub(crate) identifier: Box<str>,
	#[cfg_attr(not(feature = "by-index"), allow(dead_code))]
	pub(crate) ordinal: u32,
	pub(crate) name_rank: u32,
	pub(crate) payload: P,
}

impl<P> Descriptor<P> {
	/// Display name, unique within the type.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Identifier as declared, before unescaping.
	#[inline]
	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	/// 0-based declaration position.
	#[cfg(feature = "by-index")]
	#[inline]
	pub fn ordinal(&self) -> usize {
		self.ordinal as usize
	}

	/// Position in the lexicographic order of names.
	#[inline]
	pub fn name_rank(&self) -> usize {
		self.name_rank as usize
	}

	#[inline]
	pub fn payload(&self) -> &P {
		&self.payload
	}
}
