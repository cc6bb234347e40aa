//! Geometry and particle value types shared by the field and the renderer.

use super::theme::Color;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// True when either dimension moved by strictly more than `threshold`.
	pub fn differs_by_more_than(&self, other: &Viewport, threshold: f64) -> bool {
		(self.width - other.width).abs() > threshold
			|| (self.height - other.height).abs() > threshold
	}
}

/// A single drifting particle.
///
/// Everything except position and heading is fixed when the particle is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Render key. Never used for equality or ordering decisions.
	pub id: u64,
	/// Position, kept inside the viewport by wrapping.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Diameter.
	pub size: f64,
	/// Draw alpha.
	pub opacity: f64,
	/// Distance travelled per tick.
	pub speed: f64,
	/// Heading in radians. Accumulates perturbations and is never normalized.
	pub direction: f64,
	/// Drawn at `opacity` regardless of its own alpha.
	pub color: Color,
}
