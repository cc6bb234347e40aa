//! Particle population and per-tick simulation.
//!
//! The field owns the particle collection and nothing else. Randomness is
//! always supplied by the caller so the simulation can be replayed from a seed.

use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

use super::theme::Color;
use super::types::{Particle, Viewport};

/// Particles created per population.
pub const PARTICLE_COUNT: usize = 30;

/// Tunable ranges for freshly created particles and heading drift.
#[derive(Clone, Debug)]
pub struct ParticleConfig {
	/// Smallest diameter.
	pub size_min: f64,
	/// Largest diameter.
	pub size_max: f64,
	/// Faintest draw alpha.
	pub opacity_min: f64,
	/// Strongest draw alpha.
	pub opacity_max: f64,
	/// Slowest per-tick distance.
	pub speed_min: f64,
	/// Fastest per-tick distance.
	pub speed_max: f64,
	/// Chance per particle per tick that the heading drifts.
	pub perturb_chance: f64,
	/// Largest heading change (radians, either sign) of a single drift.
	pub perturb_max: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			size_min: 2.0,
			size_max: 5.0,
			opacity_min: 0.1,
			opacity_max: 0.3,
			speed_min: 0.1,
			speed_max: 0.5,
			perturb_chance: 0.05,
			perturb_max: 0.2,
		}
	}
}

/// Whether the field has been populated yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
	/// No particles yet, or the last population produced none.
	Empty,
	/// At least one particle is live.
	Populated,
}

/// The current particle collection plus the transition that advances it.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
	config: ParticleConfig,
	next_id: u64,
}

impl ParticleField {
	/// Empty field with the default ranges.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty field sampling from `config`.
	pub fn with_config(config: ParticleConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> FieldState {
		if self.particles.is_empty() {
			FieldState::Empty
		} else {
			FieldState::Populated
		}
	}

	/// True before the first population.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Particles in creation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access, mainly for tests and tooling.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Replace every particle with `count` new ones scattered across `viewport`.
	///
	/// Colors are drawn uniformly from `palette` as it is right now; later
	/// palette changes only apply to the next population. A non-positive
	/// dimension collapses that coordinate to 0. An empty palette leaves the
	/// field empty.
	pub fn populate<R: Rng + ?Sized>(
		&mut self,
		viewport: Viewport,
		palette: &[Color],
		count: usize,
		rng: &mut R,
	) {
		self.particles.clear();
		if palette.is_empty() {
			return;
		}
		self.particles.reserve(count);

		let cfg = &self.config;
		for _ in 0..count {
			let Some(&color) = palette.choose(rng) else {
				break;
			};
			let particle = Particle {
				id: self.next_id,
				x: sample_span(rng, viewport.width),
				y: sample_span(rng, viewport.height),
				size: rng.gen_range(cfg.size_min..=cfg.size_max),
				opacity: rng.gen_range(cfg.opacity_min..=cfg.opacity_max),
				speed: rng.gen_range(cfg.speed_min..=cfg.speed_max),
				direction: rng.gen_range(0.0..TAU),
				color,
			};
			self.next_id += 1;
			self.particles.push(particle);
		}
	}

	/// Advance every particle by one tick, wrapping at `viewport`.
	///
	/// Returns how many headings drifted this tick. No-op on an empty field.
	pub fn step<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> usize {
		let cfg = &self.config;
		let mut drifted = 0;
		for p in &mut self.particles {
			if p.advance(viewport, cfg, rng) {
				drifted += 1;
			}
		}
		drifted
	}
}

impl Particle {
	/// Move one tick along the current heading, maybe drift the heading, then wrap.
	///
	/// The heading drift only affects the next tick's displacement. Wrapping
	/// triggers on strict inequality, so a particle may rest exactly on a bound.
	/// Returns whether the heading drifted.
	pub fn advance<R: Rng + ?Sized>(
		&mut self,
		viewport: Viewport,
		config: &ParticleConfig,
		rng: &mut R,
	) -> bool {
		let mut x = self.x + self.speed * self.direction.cos();
		let mut y = self.y + self.speed * self.direction.sin();

		let drifted = rng.gen_bool(config.perturb_chance);
		if drifted {
			self.direction += rng.gen_range(-config.perturb_max..=config.perturb_max);
		}

		if x < 0.0 {
			x = viewport.width;
		} else if x > viewport.width {
			x = 0.0;
		}
		if y < 0.0 {
			y = viewport.height;
		} else if y > viewport.height {
			y = 0.0;
		}

		self.x = x;
		self.y = y;
		drifted
	}
}

/// Uniform in `[0, max)`, or 0 when the span is empty or not a number.
fn sample_span<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
	if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 }
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const RED: Color = Color::rgb(255, 0, 0);

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	fn single(viewport: Viewport, x: f64, y: f64, direction: f64, speed: f64) -> ParticleField {
		let mut field = ParticleField::new();
		field.populate(viewport, &[RED], 1, &mut rng());
		let p = &mut field.particles_mut()[0];
		p.x = x;
		p.y = y;
		p.direction = direction;
		p.speed = speed;
		field
	}

	#[test]
	fn starts_empty_and_step_is_noop() {
		let mut field = ParticleField::new();
		assert_eq!(field.state(), FieldState::Empty);
		assert_eq!(field.step(Viewport::new(100.0, 100.0), &mut rng()), 0);
		assert!(field.is_empty());
	}

	#[test]
	fn populate_places_particles_within_viewport_and_ranges() {
		let viewport = Viewport::new(390.0, 844.0);
		let palette = [RED, Color::WHITE];
		let mut field = ParticleField::new();
		field.populate(viewport, &palette, PARTICLE_COUNT, &mut rng());

		assert_eq!(field.state(), FieldState::Populated);
		assert_eq!(field.len(), PARTICLE_COUNT);
		for p in field.particles() {
			assert!((0.0..viewport.width).contains(&p.x));
			assert!((0.0..viewport.height).contains(&p.y));
			assert!((2.0..=5.0).contains(&p.size));
			assert!((0.1..=0.3).contains(&p.opacity));
			assert!((0.1..=0.5).contains(&p.speed));
			assert!((0.0..TAU).contains(&p.direction));
			assert!(palette.contains(&p.color));
		}
	}

	#[test]
	fn ids_are_unique_across_populations() {
		let viewport = Viewport::new(100.0, 100.0);
		let mut field = ParticleField::new();
		let mut r = rng();
		field.populate(viewport, &[RED], 3, &mut r);
		let first: Vec<u64> = field.particles().iter().map(|p| p.id).collect();
		field.populate(viewport, &[RED], 3, &mut r);
		assert!(field.particles().iter().all(|p| !first.contains(&p.id)));
	}

	#[test]
	fn repopulate_replaces_instead_of_accumulating() {
		let viewport = Viewport::new(200.0, 200.0);
		let mut field = ParticleField::new();
		let mut r = rng();
		field.populate(viewport, &[RED], 30, &mut r);
		field.populate(viewport, &[Color::WHITE], 5, &mut r);
		assert_eq!(field.len(), 5);
		assert!(field.particles().iter().all(|p| p.color == Color::WHITE));
	}

	#[test]
	fn zero_count_leaves_field_empty() {
		let mut field = ParticleField::new();
		field.populate(Viewport::new(10.0, 10.0), &[RED], 0, &mut rng());
		assert_eq!(field.state(), FieldState::Empty);
	}

	#[test]
	fn degenerate_viewport_collapses_to_origin() {
		let mut field = ParticleField::new();
		let mut r = rng();
		field.populate(Viewport::new(0.0, -20.0), &[RED], 4, &mut r);
		assert_eq!(field.len(), 4);
		assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
		field.step(Viewport::new(0.0, -20.0), &mut r);
		assert_eq!(field.len(), 4);
	}

	#[test]
	fn empty_palette_yields_empty_field() {
		let mut field = ParticleField::new();
		field.populate(Viewport::new(10.0, 10.0), &[], 10, &mut rng());
		assert!(field.is_empty());
	}

	#[test]
	fn step_wraps_past_right_edge_to_zero() {
		let viewport = Viewport::new(100.0, 100.0);
		let mut field = single(viewport, 99.9, 50.0, 0.0, 0.5);
		field.step(viewport, &mut rng());
		let p = &field.particles()[0];
		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 50.0);
	}

	#[test]
	fn step_wraps_past_left_and_top_edges_to_far_bound() {
		let viewport = Viewport::new(100.0, 80.0);
		let mut field = single(viewport, 0.1, 0.1, 1.25 * std::f64::consts::PI, 0.5);
		field.step(viewport, &mut rng());
		let p = &field.particles()[0];
		assert_eq!(p.x, 100.0);
		assert_eq!(p.y, 80.0);
	}

	#[test]
	fn step_wraps_past_bottom_edge_to_zero() {
		let viewport = Viewport::new(100.0, 80.0);
		let mut field = single(viewport, 40.0, 79.8, std::f64::consts::FRAC_PI_2, 0.4);
		field.step(viewport, &mut rng());
		let p = &field.particles()[0];
		assert_eq!(p.y, 0.0);
		assert!((p.x - 40.0).abs() < 1e-9);
	}

	#[test]
	fn step_inside_bounds_moves_without_wrapping() {
		let viewport = Viewport::new(100.0, 100.0);
		let mut field = single(viewport, 99.5, 50.0, 0.0, 0.5);
		field.step(viewport, &mut rng());
		// Lands exactly on the bound, which is not a wrap.
		assert_eq!(field.particles()[0].x, 100.0);

		let mut field = single(viewport, 10.0, 20.0, 0.3, 0.4);
		let (dx, dy) = (0.4 * 0.3_f64.cos(), 0.4 * 0.3_f64.sin());
		field.step(viewport, &mut rng());
		let p = &field.particles()[0];
		assert!((p.x - (10.0 + dx)).abs() < 1e-12);
		assert!((p.y - (20.0 + dy)).abs() < 1e-12);
	}

	#[test]
	fn step_keeps_particles_in_bounds_and_count_fixed() {
		let viewport = Viewport::new(320.0, 480.0);
		let mut field = ParticleField::new();
		let mut r = rng();
		field.populate(viewport, &[RED], PARTICLE_COUNT, &mut r);
		for _ in 0..5_000 {
			field.step(viewport, &mut r);
			assert_eq!(field.len(), PARTICLE_COUNT);
		}
		for p in field.particles() {
			assert!((0.0..=viewport.width).contains(&p.x));
			assert!((0.0..=viewport.height).contains(&p.y));
		}
	}

	#[test]
	fn custom_config_controls_sampling_and_drift() {
		let config = ParticleConfig {
			size_min: 8.0,
			size_max: 9.0,
			opacity_min: 0.9,
			opacity_max: 1.0,
			speed_min: 2.0,
			speed_max: 2.0,
			perturb_chance: 1.0,
			perturb_max: 0.01,
		};
		let viewport = Viewport::new(300.0, 300.0);
		let mut field = ParticleField::with_config(config);
		let mut r = rng();
		field.populate(viewport, &[RED], 10, &mut r);
		for p in field.particles() {
			assert!((8.0..=9.0).contains(&p.size));
			assert!((0.9..=1.0).contains(&p.opacity));
			assert_eq!(p.speed, 2.0);
		}

		let before: Vec<f64> = field.particles().iter().map(|p| p.direction).collect();
		assert_eq!(field.step(viewport, &mut r), 10);
		for (p, old) in field.particles().iter().zip(before) {
			let delta = p.direction - old;
			assert!(delta.abs() <= 0.01, "drift {delta}");
		}

		let mut still = ParticleField::with_config(ParticleConfig {
			perturb_chance: 0.0,
			..ParticleConfig::default()
		});
		still.populate(viewport, &[RED], 10, &mut r);
		for _ in 0..100 {
			assert_eq!(still.step(viewport, &mut r), 0);
		}
	}

	#[test]
	fn heading_drifts_about_five_percent_of_ticks_within_limits() {
		const TICKS: usize = 100_000;
		let viewport = Viewport::new(500.0, 500.0);
		let config = ParticleConfig::default();
		let mut field = single(viewport, 250.0, 250.0, 1.0, 0.3);
		let mut r = rng();

		let mut drifts = 0;
		for _ in 0..TICKS {
			let p = &mut field.particles_mut()[0];
			let before = p.direction;
			if p.advance(viewport, &config, &mut r) {
				drifts += 1;
				let delta = p.direction - before;
				assert!(delta.abs() <= config.perturb_max + 1e-12, "drift {delta}");
			} else {
				assert_eq!(p.direction, before);
			}
		}

		// Four standard deviations of Binomial(100_000, 0.05) is about 276.
		let expected = TICKS as f64 * config.perturb_chance;
		let sd = (expected * (1.0 - config.perturb_chance)).sqrt();
		assert!(
			(drifts as f64 - expected).abs() < 4.0 * sd,
			"{drifts} drifts out of {TICKS}"
		);
	}
}
