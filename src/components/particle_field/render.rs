//! Canvas rendering for the particle background.
//!
//! The canvas is cleared every frame and sits behind the screen content, so
//! only the particles themselves are drawn. They are composited with `screen`
//! blending so overlaps brighten instead of hiding each other.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::types::{Particle, Viewport};

/// Composite operation used while drawing particles.
const BLEND_MODE: &str = "screen";

/// Renders the given particles onto a cleared canvas.
pub fn render(ctx: &CanvasRenderingContext2d, viewport: Viewport, particles: &[Particle]) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

	ctx.save();
	let _ = ctx.set_global_composite_operation(BLEND_MODE);
	for p in particles {
		draw_particle(ctx, p);
	}
	ctx.restore();
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) {
	ctx.set_fill_style_str(&p.color.with_alpha(p.opacity).to_css());
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.size / 2.0, 0.0, PI * 2.0);
	ctx.fill();
}
