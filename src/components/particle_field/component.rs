//! Leptos component that drives and draws the shared particle field.
//!
//! Every screen mounts its own canvas, but all of them step the one
//! [`ParticleStore`] from context. A fixed-rate interval steps the field and
//! repaints in the same callback, so each mutation is visible on the very
//! next frame. The interval and the resize listener are released when the
//! canvas unmounts.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use super::store::{ParticleStore, use_particle_store};
use super::theme::{AccentColor, Color, particle_palette};
use super::types::Viewport;

/// Time between simulation steps (20 ticks per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Fallback size when neither the parent nor the window report one.
const FALLBACK_VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

/// Full-bleed particle background for the enclosing, relatively positioned element.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let accent = use_context::<RwSignal<AccentColor>>();
	let store = use_particle_store().unwrap_or_else(|| {
		warn!("lifeportal: no particle store in context, using a private one");
		ParticleStore::new()
	});

	// Theme is read once per population, never tracked.
	let palette_now = move || -> Vec<Color> {
		particle_palette(accent.map(|a| a.get_untracked()).unwrap_or_default())
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("lifeportal: canvas 2d context unavailable");
			return;
		};

		let viewport = Rc::new(Cell::new(measure(&canvas)));
		apply_size(&canvas, viewport.get());
		store.appear(viewport.get(), &palette_now());
		store.with_particles(|ps| render::render(&ctx, viewport.get(), ps));

		let (store_tick, viewport_tick) = (store.clone(), viewport.clone());
		let interval = set_interval_with_handle(
			move || {
				let vp = viewport_tick.get();
				store_tick.tick(vp);
				store_tick.with_particles(|ps| render::render(&ctx, vp, ps));
			},
			TICK_INTERVAL,
		)
		.map_err(|e| warn!("lifeportal: failed to start particle timer: {:?}", e))
		.ok();

		let store_resize = store.clone();
		let listener = window_event_listener(ev::resize, move |_| {
			let vp = measure(&canvas);
			if vp == viewport.get() {
				return;
			}
			apply_size(&canvas, vp);
			viewport.set(vp);
			store_resize.resize(vp, &palette_now());
		});

		on_cleanup(move || {
			if let Some(handle) = interval {
				handle.clear();
			}
			listener.remove();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="position: absolute; inset: 0; display: block; pointer-events: none;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Size of the parent element, or the window when the parent has no layout yet.
fn measure(canvas: &HtmlCanvasElement) -> Viewport {
	let parent = canvas
		.parent_element()
		.map(|p| Viewport::new(p.client_width() as f64, p.client_height() as f64))
		.filter(|vp| vp.width > 0.0 && vp.height > 0.0);
	parent.unwrap_or_else(|| {
		let Some(win) = web_sys::window() else {
			return FALLBACK_VIEWPORT;
		};
		let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
			v.ok().and_then(|v| v.as_f64())
		};
		match (dimension(win.inner_width()), dimension(win.inner_height())) {
			(Some(width), Some(height)) => Viewport::new(width, height),
			_ => FALLBACK_VIEWPORT,
		}
	})
}

fn apply_size(canvas: &HtmlCanvasElement, viewport: Viewport) {
	canvas.set_width(viewport.width.max(0.0) as u32);
	canvas.set_height(viewport.height.max(0.0) as u32);
}
