//! Declaration macros.

/// Declares a matchable type and defines its variants in one place.
///
/// ```rust,ignore
/// matchable::matchable! {
///     /// Units of time, in seconds.
///     pub Unit: f64 {
///         Second = 1.0,
///         Minute = 60.0,
///         Hour = 3600.0,
///     }
/// }
///
/// assert_eq!(*Unit::Minute.payload(), 60.0);
/// assert_eq!(Unit::variant("Hour"), Ok(Unit::Hour));
/// ```
///
/// The payload type defaults to `()`, and a missing payload expression to
/// `Default::default()`. See [`define_matchable!`] for what is generated.
#[macro_export]
macro_rules! matchable {
	(
		$(#[$attr:meta])*
		$vis:vis $name:ident $(: $payload:ty)? {
			$( $(#[$vattr:meta])* $variant:ident $(= $value:expr)? ),+ $(,)?
		}
	) => {
		$crate::declare_matchable! {
			$(#[$attr])*
			$vis $name
		}

		$crate::define_matchable! {
			$vis $name $(: $payload)? {
				$( $(#[$vattr])* $variant $(= $value)? ),+
			}
		}
	};
}

/// Materializes the variants of a type declared with [`declare_matchable!`].
///
/// Must be invoked in the crate that declares the type, with the type name
/// in scope. Generates:
/// - `<Name>Kind`: a fieldless enum with one variant per identifier, for
///   compiler-checked `match`
/// - one associated const per variant (`Name::Variant`), resolved without a
///   runtime lookup
/// - `impl Matchable for Name`, populating the registry on first use
/// - a link-time registration so the catalog can populate the type lazily
///
/// Identifiers are unescaped into display names (`timed_spc_out` is
/// `timed out`, `esc_17` is `17`). Payload expressions run inside the
/// population step.
///
/// [`declare_matchable!`]: crate::declare_matchable
#[macro_export]
macro_rules! define_matchable {
	(
		$vis:vis $name:ident $(: $payload:ty)? {
			$( $(#[$vattr:meta])* $variant:ident $(= $value:expr)? ),+ $(,)?
		}
	) => {
		$crate::__private::paste::paste! {
			#[allow(non_camel_case_types)]
			#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
			$vis enum [<$name Kind>] {
				$( $variant, )+
			}

			#[allow(non_upper_case_globals)]
			impl $name {
				$(
					$(#[$vattr])*
					$vis const $variant: $crate::VariantRef<$name> =
						$crate::VariantRef::__from_ordinal([<$name Kind>]::$variant as u32);
				)+
			}

			impl $crate::Matchable for $name {
				type Payload = $crate::__matchable_payload_ty!($($payload)?);
				type Kind = [<$name Kind>];

				fn try_registry() -> ::core::result::Result<
					&'static $crate::Registry<Self, Self::Payload>,
					$crate::DeclareError,
				> {
					static REGISTRY: ::std::sync::OnceLock<
						::core::result::Result<
							$crate::Registry<$name, <$name as $crate::Matchable>::Payload>,
							$crate::DeclareError,
						>,
					> = ::std::sync::OnceLock::new();

					REGISTRY
						.get_or_init(|| {
							$crate::Registry::builder()
								$( .variant(stringify!($variant), $crate::__matchable_payload!($($value)?)) )+
								.declare()
						})
						.as_ref()
						.map_err(::core::clone::Clone::clone)
				}

				fn kind_of(variant: $crate::VariantRef<Self>) -> Self::Kind {
					const KINDS: &[[<$name Kind>]] = &[$( [<$name Kind>]::$variant ),+];
					KINDS[variant.__ordinal()]
				}

				fn from_kind(kind: Self::Kind) -> $crate::VariantRef<Self> {
					$crate::VariantRef::__from_ordinal(kind as u32)
				}
			}
		}

		const _: () = {
			fn populate() {
				let _ = <$name as $crate::Matchable>::try_registry();
			}

			$crate::__private::inventory::submit! {
				$crate::__private::TypeReg::new(
					stringify!($name),
					::core::any::TypeId::of::<$name>,
					populate,
				)
			}
		};
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __matchable_payload_ty {
	() => { () };
	($payload:ty) => { $payload };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __matchable_payload {
	() => { ::core::default::Default::default() };
	($value:expr) => { $value };
}
