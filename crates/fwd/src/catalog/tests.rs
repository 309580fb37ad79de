use super::*;

crate::declare_matchable!(CatalogFruit);
crate::declare_matchable!(CatalogClash);
crate::declare_matchable!(CatalogInfo);
crate::declare_matchable!(CatalogUnpopulated);
crate::declare_matchable!(CatalogAardvark);
crate::declare_matchable!(CatalogHollow);

mod first {
	crate::declare_matchable!(pub CatalogTwin);
}

mod second {
	crate::declare_matchable!(pub CatalogTwin);
}

fn populate_fruit() -> Arc<TypeInfo> {
	register(TypeInfo::new::<CatalogFruit>(["apple", "banana", "cherry"]).unwrap()).unwrap()
}

#[test]
fn test_register_is_idempotent_for_same_set() {
	let first = populate_fruit();
	let second = populate_fruit();
	assert!(Arc::ptr_eq(&first, &second));
	assert!(is_populated("CatalogFruit"));
}

#[test]
fn test_register_rejects_different_set() {
	register(TypeInfo::new::<CatalogClash>(["one", "two"]).unwrap()).unwrap();
	let err = register(TypeInfo::new::<CatalogClash>(["one", "three"]).unwrap()).unwrap_err();
	assert_eq!(
		err,
		CatalogError::DuplicateTypeName {
			type_name: "CatalogClash"
		}
	);

	// The first entry survives the rejected registration.
	let info = lookup("CatalogClash").unwrap();
	assert_eq!(info.position("two"), Some(1));
	assert_eq!(info.position("three"), None);
}

#[test]
fn test_same_name_different_type() {
	register(TypeInfo::new::<first::CatalogTwin>(["Light", "Dark"]).unwrap()).unwrap();

	// Same name and same set, but another marker type.
	let err = register(TypeInfo::new::<second::CatalogTwin>(["Light", "Dark"]).unwrap()).unwrap_err();
	assert_eq!(err.type_name(), "CatalogTwin");

	assert!(info_of::<first::CatalogTwin>().is_ok());
	assert_eq!(
		info_of::<second::CatalogTwin>(),
		Err(CatalogError::DuplicateTypeName {
			type_name: "CatalogTwin"
		})
	);
	assert_eq!(
		resolve::<second::CatalogTwin>("Dark"),
		Err(CatalogError::DuplicateTypeName {
			type_name: "CatalogTwin"
		})
	);
	assert_eq!(resolve::<first::CatalogTwin>("Dark").map(|v| v.__ordinal()), Ok(1));
}

#[test]
fn test_type_info_positions() {
	let info = TypeInfo::new::<CatalogInfo>(["x", "y"]).unwrap();
	assert_eq!(info.name(), "CatalogInfo");
	assert_eq!(info.len(), 2);
	assert!(!info.is_empty());
	assert!(info.is_owned_by::<CatalogInfo>());
	assert!(!info.is_owned_by::<CatalogFruit>());
	assert_eq!(info.variant_name(1).map(|n| &**n), Some("y"));
	assert_eq!(info.variant_name(2), None);
	assert_eq!(info.position("x"), Some(0));
}

#[test]
fn test_type_info_rejects_invalid_sets() {
	assert_eq!(
		TypeInfo::new::<CatalogHollow>(Vec::<&str>::new()),
		Err(CatalogError::EmptyVariantSet {
			type_name: "CatalogHollow"
		})
	);
	assert_eq!(
		TypeInfo::new::<CatalogHollow>(["a", "b", "a"]),
		Err(CatalogError::DuplicateVariantName {
			type_name: "CatalogHollow",
			name: "a".to_string(),
		})
	);
	assert_eq!(
		TypeInfo::new::<CatalogHollow>(["a", ""]),
		Err(CatalogError::EmptyVariantName {
			type_name: "CatalogHollow",
			ordinal: 1,
		})
	);
	assert!(!is_populated("CatalogHollow"));
}

#[test]
fn test_resolve_by_name() {
	populate_fruit();
	let banana = resolve::<CatalogFruit>("banana").unwrap();
	assert_eq!(banana.__ordinal(), 1);
	assert_eq!(
		resolve::<CatalogFruit>("durian"),
		Err(CatalogError::UnknownVariantName {
			type_name: "CatalogFruit",
			name: "durian".to_string(),
		})
	);
}

#[cfg(feature = "by-index")]
#[test]
fn test_resolve_by_ordinal() {
	populate_fruit();
	assert_eq!(resolve_at::<CatalogFruit>(2).unwrap().ordinal(), 2);
	assert_eq!(
		resolve_at::<CatalogFruit>(3),
		Err(CatalogError::OrdinalOutOfRange {
			type_name: "CatalogFruit",
			ordinal: 3,
			len: 3,
		})
	);
}

#[test]
fn test_unpopulated_type() {
	assert!(!is_populated("CatalogUnpopulated"));
	assert!(lookup("CatalogUnpopulated").is_none());
	assert_eq!(
		resolve::<CatalogUnpopulated>("anything"),
		Err(CatalogError::NotPopulated {
			type_name: "CatalogUnpopulated",
		})
	);
}

#[test]
fn test_declared_types_sorted() {
	populate_fruit();
	register(TypeInfo::new::<CatalogAardvark>(["a"]).unwrap()).unwrap();
	let names = declared_types();
	assert!(names.contains(&"CatalogFruit"));
	assert!(names.contains(&"CatalogAardvark"));
	assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_populate_all_without_linked_types() {
	// No full definitions are linked into this crate's test binary.
	assert_eq!(populate_all(), 0);
}
