//! Ambient particle background.
//!
//! A fixed population of softly colored points drifts behind every screen:
//! - [`ParticleField`] holds the particles and advances them one tick at a time
//! - [`ParticleStore`] shares one field across all mounted screens
//! - [`ParticleCanvas`] populates on first display or large resizes, steps at
//!   20 ticks per second, and draws with additive-style blending
//!
//! # Example
//!
//! ```ignore
//! use lifeportal::components::particle_field::{ParticleCanvas, ParticleStore, provide_particle_store};
//!
//! provide_particle_store(ParticleStore::new());
//!
//! view! {
//!     <div style="position: relative;">
//!         <ParticleCanvas />
//!     </div>
//! }
//! ```

mod component;
mod field;
mod render;
mod store;
pub mod theme;
mod types;

pub use component::{ParticleCanvas, TICK_INTERVAL};
pub use field::{FieldState, PARTICLE_COUNT, ParticleConfig, ParticleField};
pub use store::{ParticleStore, RESIZE_THRESHOLD, provide_particle_store, use_particle_store};
pub use theme::{AccentColor, AppColors, Color};
pub use types::{Particle, Viewport};
