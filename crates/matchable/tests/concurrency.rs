//! First-use population under contention.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use matchable::prelude::*;
use matchable::{VariantSet, matchable};

matchable! {
	pub Planet: f64 {
		Mercury = 0.39,
		Venus = 0.72,
		Earth = 1.0,
		Mars = 1.52,
		Jupiter = 5.2,
		Saturn = 9.54,
		Uranus = 19.2,
		Neptune = 30.06,
	}
}

const THREADS: usize = 16;

#[test]
fn test_concurrent_first_use_populates_once() {
	common::init_tracing();

	let barrier = Arc::new(Barrier::new(THREADS));
	let handles: Vec<_> = (0..THREADS)
		.map(|i| {
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				// Half the threads go through the catalog, half through the type.
				if i % 2 == 0 {
					let _ = matchable::catalog::lookup("Planet");
				}
				let registry = Planet::try_registry().expect("declaration accepted");
				let names: Vec<&'static str> = Planet::variants().map(|p| p.name()).collect();
				(registry as *const _ as usize, names)
			})
		})
		.collect();

	let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
	let (first_ptr, first_names) = &results[0];
	assert_eq!(first_names.len(), 8);
	for (ptr, names) in &results {
		assert_eq!(ptr, first_ptr);
		assert_eq!(names, first_names);
	}
}

#[test]
fn test_handles_cross_threads() {
	let outer = Planet::variant("Mars").unwrap();
	let inner = thread::spawn(move || {
		let mut seen = VariantSet::<Planet>::new();
		seen.insert(outer);
		seen.insert(Planet::Earth);
		(outer.name(), seen)
	})
	.join()
	.unwrap();

	assert_eq!(inner.0, "Mars");
	assert!(inner.1.contains(Planet::Mars));
	assert_eq!(inner.1.len(), 2);
}
