//! Process-wide particle store shared by every mounted particle canvas.
//!
//! The application root creates one [`ParticleStore`] and provides it through
//! the Leptos context. Each screen's canvas drives the same store, so tab
//! switches keep the particles that are already in motion.
//!
//! All access happens on the UI thread, so the store is a plain
//! `Rc<RefCell<_>>` without locking. A host that simulates and renders on
//! different threads would need a mutex around populate/step/read instead.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::field::{PARTICLE_COUNT, ParticleField};
use super::theme::Color;
use super::types::{Particle, Viewport};

/// Viewport change (in either dimension) that forces a fresh population.
pub const RESIZE_THRESHOLD: f64 = 50.0;

struct StoreInner {
	field: ParticleField,
	/// Viewport recorded at the last population.
	populated_at: Option<Viewport>,
	rng: SmallRng,
}

/// Shared handle to the particle field. Cloning shares the same particles.
#[derive(Clone)]
pub struct ParticleStore {
	inner: Rc<RefCell<StoreInner>>,
}

impl Default for ParticleStore {
	fn default() -> Self {
		Self::new()
	}
}

impl ParticleStore {
	/// Empty store seeded from OS entropy.
	pub fn new() -> Self {
		Self::from_rng(SmallRng::from_entropy())
	}

	/// Empty store with a reproducible random sequence.
	pub fn seeded(seed: u64) -> Self {
		Self::from_rng(SmallRng::seed_from_u64(seed))
	}

	fn from_rng(rng: SmallRng) -> Self {
		Self {
			inner: Rc::new(RefCell::new(StoreInner {
				field: ParticleField::new(),
				populated_at: None,
				rng,
			})),
		}
	}

	/// First display of a surface. Populates only if nothing is running yet.
	///
	/// Returns whether a population happened.
	pub fn appear(&self, viewport: Viewport, palette: &[Color]) -> bool {
		if !self.inner.borrow().field.is_empty() {
			debug!("lifeportal: particle surface mounted, reusing running field");
			return false;
		}
		self.populate(viewport, palette);
		true
	}

	/// Viewport changed. Re-populates from scratch when either dimension moved
	/// more than [`RESIZE_THRESHOLD`] since the last population.
	///
	/// Returns whether a population happened.
	pub fn resize(&self, viewport: Viewport, palette: &[Color]) -> bool {
		let stale = match self.inner.borrow().populated_at {
			Some(previous) => viewport.differs_by_more_than(&previous, RESIZE_THRESHOLD),
			None => true,
		};
		if stale {
			self.populate(viewport, palette);
		}
		stale
	}

	/// Advance the shared field by one tick. Returns how many headings drifted.
	pub fn tick(&self, viewport: Viewport) -> usize {
		let mut guard = self.inner.borrow_mut();
		let StoreInner { field, rng, .. } = &mut *guard;
		let drifted = field.step(viewport, rng);
		// Runs every tick, so stays below the default console level.
		trace!("lifeportal: tick moved {} particles, {} drifted", field.len(), drifted);
		drifted
	}

	/// Read the current particles, in creation order.
	pub fn with_particles<T>(&self, f: impl FnOnce(&[Particle]) -> T) -> T {
		f(self.inner.borrow().field.particles())
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.inner.borrow().field.len()
	}

	/// True until the first population.
	pub fn is_empty(&self) -> bool {
		self.inner.borrow().field.is_empty()
	}

	/// Viewport of the last population, if any.
	pub fn populated_viewport(&self) -> Option<Viewport> {
		self.inner.borrow().populated_at
	}

	fn populate(&self, viewport: Viewport, palette: &[Color]) {
		let mut guard = self.inner.borrow_mut();
		let StoreInner {
			field,
			populated_at,
			rng,
		} = &mut *guard;
		field.populate(viewport, palette, PARTICLE_COUNT, rng);
		*populated_at = Some(viewport);
		info!(
			"lifeportal: populated {} particles for {}x{}",
			field.len(),
			viewport.width,
			viewport.height
		);
	}
}

/// Context wrapper. The store is not `Send`, so it lives in local arena storage.
type StoreSlot = StoredValue<ParticleStore, LocalStorage>;

/// Make `store` reachable from every descendant component.
pub fn provide_particle_store(store: ParticleStore) {
	provide_context::<StoreSlot>(StoredValue::new_local(store));
}

/// The store provided by an ancestor, if any.
pub fn use_particle_store() -> Option<ParticleStore> {
	use_context::<StoreSlot>().and_then(|slot| slot.try_get_value())
}
