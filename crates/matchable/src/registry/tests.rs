use matchable_fwd::declare_matchable;
use proptest::prelude::*;

use super::*;
use crate::error::DeclareError;

declare_matchable!(Rgb);
declare_matchable!(Weekday);
declare_matchable!(Nothing);
declare_matchable!(RegistryTestsDeclared);

fn rgb() -> Registry<Rgb> {
	Registry::builder()
		.variants(["Red", "Green", "Blue"])
		.build()
		.unwrap()
}

#[test]
fn test_lookup_by_name() {
	let reg = rgb();
	assert_eq!(reg.get("Green").unwrap().__ordinal(), 1);
	assert_eq!(
		reg.get("Purple"),
		Err(LookupError::UnknownVariantName {
			type_name: "Rgb",
			name: "Purple".to_string(),
		})
	);
}

#[cfg(feature = "by-index")]
#[test]
fn test_lookup_by_ordinal() {
	let reg = rgb();
	assert_eq!(reg.descriptor(reg.at(2).unwrap()).name(), "Blue");
	assert_eq!(
		reg.at(3),
		Err(LookupError::OrdinalOutOfRange {
			type_name: "Rgb",
			ordinal: 3,
			len: 3,
		})
	);
}

#[test]
fn test_declaration_order_iteration() {
	let reg = rgb();
	let names: Vec<_> = reg.iter().map(|v| reg.descriptor(v).name()).collect();
	assert_eq!(names, ["Red", "Green", "Blue"]);
	assert_eq!(reg.iter().len(), 3);
	assert_eq!(reg.iter().rev().next(), reg.get("Blue").ok());

	// Restartable: a fresh iterator yields the same sequence.
	let again: Vec<_> = (&reg).into_iter().collect();
	assert_eq!(again, reg.iter().collect::<Vec<_>>());
}

#[test]
fn test_name_order_iteration() {
	let reg = rgb();
	let names: Vec<_> = reg.iter_by_name().map(|v| reg.descriptor(v).name()).collect();
	assert_eq!(names, ["Blue", "Green", "Red"]);

	let ranks: Vec<_> = reg.descriptors().iter().map(Descriptor::name_rank).collect();
	assert_eq!(ranks, [2, 1, 0]);
	assert_eq!(reg.at_name_rank(0), reg.get("Blue").ok());
	assert_eq!(reg.at_name_rank(3), None);
}

#[test]
fn test_identifiers_are_unescaped() {
	let reg: Registry<Weekday> = Registry::builder()
		.variants(["Monday", "esc_2nd_spc_day", "day_spc_off_bng_"])
		.build()
		.unwrap();

	let second = reg.get("2nd day").unwrap();
	assert_eq!(reg.descriptor(second).identifier(), "esc_2nd_spc_day");
	assert_eq!(reg.get_by_identifier("day_spc_off_bng_"), reg.get("day off!"));
	assert!(reg.get_by_identifier("day off!").is_err());
}

#[test]
fn test_named_takes_name_verbatim() {
	let reg: Registry<Weekday, u8> = Registry::builder()
		.named("timed out", 1)
		.named("17", 2)
		.build()
		.unwrap();

	let timed_out = reg.descriptor(reg.get("timed out").unwrap());
	assert_eq!(timed_out.identifier(), "timed_spc_out");
	assert_eq!(*timed_out.payload(), 1);
	assert_eq!(reg.get_by_identifier("esc_17"), reg.get("17"));
}

#[test]
fn test_neighbors() {
	let reg = rgb();
	let blue = reg.get("Blue").ok();
	let green = reg.get("Green").ok();
	let red = reg.get("Red").ok();

	let exact = reg.neighbors("Green");
	assert_eq!((exact.below, exact.exact, exact.above), (blue, green, red));

	let between = reg.neighbors("Gold");
	assert_eq!((between.below, between.exact, between.above), (blue, None, green));

	let first = reg.neighbors("Aqua");
	assert_eq!((first.below, first.exact, first.above), (None, None, blue));

	let past_end = reg.neighbors("Yellow");
	assert_eq!((past_end.below, past_end.exact, past_end.above), (red, None, None));

	let last = reg.neighbors("Red");
	assert_eq!((last.below, last.exact, last.above), (green, red, None));
}

#[test]
fn test_empty_variant_set_rejected() {
	let err = Registry::<Nothing>::builder().build().unwrap_err();
	assert_eq!(err, DeclareError::EmptyVariantSet { type_name: "Nothing" });
}

#[test]
fn test_duplicate_variant_name_rejected() {
	let err = Registry::<Rgb>::builder()
		.variants(["Red", "Green", "Red"])
		.build()
		.unwrap_err();
	assert_eq!(
		err,
		DeclareError::DuplicateVariantName {
			type_name: "Rgb",
			name: "Red".to_string(),
		}
	);

	// Distinct identifiers that unescape to the same name.
	let err = Registry::<Rgb>::builder()
		.variants(["a_spc_b"])
		.named("a b", ())
		.build()
		.unwrap_err();
	assert!(matches!(err, DeclareError::DuplicateVariantName { .. }));
}

#[test]
fn test_empty_variant_name_rejected() {
	let err = Registry::<Rgb>::builder()
		.variants(["Red", "esc_"])
		.build()
		.unwrap_err();
	assert_eq!(
		err,
		DeclareError::EmptyVariantName {
			type_name: "Rgb",
			ordinal: 1,
		}
	);
}

#[test]
fn test_declare_registers_type_info() {
	let reg: Registry<RegistryTestsDeclared> = Registry::builder()
		.variants(["one", "two"])
		.declare()
		.unwrap();
	let info = matchable_fwd::catalog::lookup("RegistryTestsDeclared").unwrap();
	assert!(Arc::ptr_eq(reg.type_info(), &info));

	let err = Registry::<RegistryTestsDeclared>::builder()
		.variants(["one", "three"])
		.declare()
		.unwrap_err();
	assert_eq!(
		err,
		DeclareError::DuplicateTypeName {
			type_name: "RegistryTestsDeclared"
		}
	);
}

proptest! {
	#[test]
	fn prop_lookup_round_trip(names in prop::collection::btree_set("[a-z]{1,8}", 1..24)) {
		// BTreeSet gives unique names; shuffle them into declaration order.
		let mut declared: Vec<String> = names.into_iter().collect();
		declared.reverse();

		let reg: Registry<Weekday> = Registry::builder().variants(&declared).build().unwrap();
		prop_assert_eq!(reg.len(), declared.len());

		for (ordinal, variant) in reg.iter().enumerate() {
			let descriptor = reg.descriptor(variant);
			prop_assert_eq!(variant.__ordinal(), ordinal);
			prop_assert_eq!(descriptor.name(), declared[ordinal].as_str());
			prop_assert_eq!(reg.get(descriptor.name()), Ok(variant));
		}

		let by_name: Vec<&str> = reg.iter_by_name().map(|v| reg.descriptor(v).name()).collect();
		let mut sorted: Vec<&str> = declared.iter().map(String::as_str).collect();
		sorted.sort_unstable();
		prop_assert_eq!(by_name, sorted);
	}
}
