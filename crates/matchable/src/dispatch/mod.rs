//! Exhaustive dispatch over the variants of a matchable type.
//!
//! A [`Dispatcher`] holds one handler per variant. It is assembled with a
//! [`DispatcherBuilder`], which rejects handler sets that name unknown
//! variants, cover a variant twice, or leave variants uncovered without a
//! fallback. Once built, dispatch is a slot lookup by ordinal.
//!
//! When the variants are known statically, prefer matching on
//! [`Matchable::Kind`] with `match`, which the compiler checks for
//! exhaustiveness. A dispatcher is for handler sets assembled at runtime.
//!
//! Loop flow control uses `R = ControlFlow<B>`:
//!
//! ```rust,ignore
//! let step = Dispatcher::<Token, (), ControlFlow<()>>::builder()
//!     .on("end", |_, _, ()| ControlFlow::Break(()))
//!     .fallback(|_, _, ()| ControlFlow::Continue(()))
//!     .build()?;
//! for token in tokens {
//!     if token.dispatch(&step, ()).is_break() {
//!         break;
//!     }
//! }
//! ```

use std::sync::Arc;

use matchable_fwd::VariantRef;

use crate::error::MatchError;
use crate::registry::Registry;
use crate::traits::Matchable;

type Handler<M, A, R> = Arc<dyn Fn(VariantRef<M>, &<M as Matchable>::Payload, A) -> R + Send + Sync>;

enum Target<M: Matchable> {
	Name(String),
	Variant(VariantRef<M>),
}

/// Builder for a [`Dispatcher`].
pub struct DispatcherBuilder<M: Matchable, A = (), R = ()> {
	handlers: Vec<(Target<M>, Handler<M, A, R>)>,
	fallback: Option<Handler<M, A, R>>,
}

impl<M: Matchable, A, R> Default for DispatcherBuilder<M, A, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Matchable, A, R> DispatcherBuilder<M, A, R> {
	pub fn new() -> Self {
		Self {
			handlers: Vec::new(),
			fallback: None,
		}
	}

	/// Handles the variant with display name `name`.
	pub fn on<F>(mut self, name: impl Into<String>, handler: F) -> Self
	where
		F: Fn(VariantRef<M>, &M::Payload, A) -> R + Send + Sync + 'static,
	{
		let handler: Handler<M, A, R> = Arc::new(handler);
		self.handlers.push((Target::Name(name.into()), handler));
		self
	}

	/// Handles `variant`.
	pub fn on_variant<F>(mut self, variant: VariantRef<M>, handler: F) -> Self
	where
		F: Fn(VariantRef<M>, &M::Payload, A) -> R + Send + Sync + 'static,
	{
		let handler: Handler<M, A, R> = Arc::new(handler);
		self.handlers.push((Target::Variant(variant), handler));
		self
	}

	/// Handles every variant without an explicit handler. A later call
	/// replaces an earlier one.
	pub fn fallback<F>(mut self, handler: F) -> Self
	where
		F: Fn(VariantRef<M>, &M::Payload, A) -> R + Send + Sync + 'static,
	{
		self.fallback = Some(Arc::new(handler));
		self
	}

	/// Checks the handler set and builds the dispatcher.
	///
	/// Errors are reported in this order: the first handler naming an unknown
	/// variant, then the first variant handled twice, then every uncovered
	/// variant (in declaration order) when there is no fallback.
	///
	/// # Panics
	///
	/// Panics if the declaration of `M` was rejected (see
	/// [`Matchable::registry`]).
	pub fn build(self) -> Result<Dispatcher<M, A, R>, MatchError> {
		let registry = M::registry();

		let mut resolved = Vec::with_capacity(self.handlers.len());
		for (target, handler) in self.handlers {
			let variant = match target {
				Target::Variant(variant) => variant,
				Target::Name(name) => registry.get(&name).map_err(|_| MatchError::UnknownVariantName {
					type_name: M::NAME,
					name,
				})?,
			};
			resolved.push((variant, handler));
		}

		let mut slots: Vec<Option<Handler<M, A, R>>> = (0..registry.len()).map(|_| None).collect();
		for (variant, handler) in resolved {
			let slot = &mut slots[variant.__ordinal()];
			if slot.is_some() {
				return Err(MatchError::DuplicateHandler {
					type_name: M::NAME,
					name: registry.descriptor(variant).name().to_string(),
				});
			}
			*slot = Some(handler);
		}

		let slots: Box<[Handler<M, A, R>]> = match self.fallback {
			Some(fallback) => slots
				.into_iter()
				.map(|slot| slot.unwrap_or_else(|| fallback.clone()))
				.collect(),
			None => {
				let missing: Vec<String> = registry
					.iter()
					.filter(|variant| slots[variant.__ordinal()].is_none())
					.map(|variant| registry.descriptor(variant).name().to_string())
					.collect();
				if !missing.is_empty() {
					return Err(MatchError::IncompleteMatch {
						type_name: M::NAME,
						missing,
					});
				}
				slots.into_iter().flatten().collect()
			}
		};

		Ok(Dispatcher { registry, slots })
	}
}

/// Checked handler set for matchable type `M`.
///
/// Handlers receive the variant, its payload and the caller's arguments.
pub struct Dispatcher<M: Matchable, A = (), R = ()> {
	registry: &'static Registry<M, M::Payload>,
	slots: Box<[Handler<M, A, R>]>,
}

impl<M: Matchable, A, R> Dispatcher<M, A, R> {
	pub fn builder() -> DispatcherBuilder<M, A, R> {
		DispatcherBuilder::new()
	}

	/// Invokes the handler for `variant` and returns its result.
	#[inline]
	pub fn dispatch(&self, variant: VariantRef<M>, args: A) -> R {
		let payload = self.registry.descriptor(variant).payload();
		(self.slots[variant.__ordinal()])(variant, payload, args)
	}
}

impl<M: Matchable, A, R> Clone for Dispatcher<M, A, R> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry,
			slots: self.slots.clone(),
		}
	}
}

impl<M: Matchable, A, R> std::fmt::Debug for Dispatcher<M, A, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dispatcher")
			.field("type_name", &M::NAME)
			.field("handlers", &self.slots.len())
			.finish()
	}
}
