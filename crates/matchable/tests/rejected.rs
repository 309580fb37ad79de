//! Declarations that are rejected at population time.

mod common;

use matchable::prelude::*;
use matchable::{CatalogError, DeclareError, LookupError, catalog, matchable};

mod light {
	use super::matchable;

	matchable! {
		pub Shade {
			Light,
			Dark,
		}
	}
}

mod paint {
	use super::matchable;

	// Same type name, different variant set.
	matchable! {
		pub Shade {
			Light,
			Dim,
			Dark,
		}
	}
}

matchable! {
	// Both identifiers display as "a b".
	pub Clash {
		a_spc_b,
		esc_a_spc_b,
	}
}

#[test]
fn test_conflicting_type_name_rejected() {
	common::init_tracing();

	// Only this test touches `Shade`, so the population order is fixed.
	let first = light::Shade::try_registry();
	let second = paint::Shade::try_registry();

	assert_eq!(first.map(|registry| registry.len()), Ok(2));
	assert_eq!(second.unwrap_err(), DeclareError::DuplicateTypeName { type_name: "Shade" });

	// The rejection is permanent and leaves no registry behind.
	assert!(paint::Shade::try_registry().is_err());
	assert!(std::panic::catch_unwind(paint::Shade::registry).is_err());

	// Lookups on the rejected type fail with the declaration error.
	let rejected = LookupError::Declare(DeclareError::DuplicateTypeName { type_name: "Shade" });
	assert_eq!(paint::Shade::variant("Dim"), Err(rejected.clone()));
	assert_eq!(paint::Shade::from_identifier("Dark"), Err(rejected));

	// Its handles never resolve against the accepted declaration.
	let not_owner = CatalogError::DuplicateTypeName { type_name: "Shade" };
	assert_eq!(paint::Shade::Dim.try_name(), Err(not_owner.clone()));
	assert_eq!(paint::Shade::Dim.to_string(), "Shade#1");
	assert_eq!(catalog::resolve::<paint::Shade>("Dark"), Err(not_owner.clone()));
	assert_eq!(catalog::info_of::<paint::Shade>(), Err(not_owner));

	// The catalog keeps the accepted declaration.
	let info = catalog::lookup("Shade").unwrap();
	assert_eq!(info.variants().len(), 2);
	assert!(info.is_owned_by::<light::Shade>());
	assert_eq!(light::Shade::Dark.name(), "Dark");
	assert_eq!(light::Shade::Light.to_string(), "Light");
	assert_eq!(catalog::resolve::<light::Shade>("Dark"), Ok(light::Shade::Dark));
}

#[test]
fn test_duplicate_display_name_rejected() {
	common::init_tracing();

	let err = Clash::try_registry().unwrap_err();
	assert_eq!(
		err,
		DeclareError::DuplicateVariantName {
			type_name: "Clash",
			name: "a b".to_string(),
		}
	);
	assert_eq!(err.type_name(), "Clash");
	assert_eq!(Clash::variant("a b"), Err(LookupError::Declare(err)));
	assert!(catalog::lookup("Clash").is_none());
}
