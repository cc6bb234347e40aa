//! lifeportal: personal life tracking with an ambient particle background.
//!
//! This crate provides a WASM app with a profile screen, four goal categories,
//! JSON export and an accent color picker. Every screen draws the same shared,
//! slowly drifting particle field behind its content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulls in the `js` entropy backend used by `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod data;

use components::particle_field::{AppColors, ParticleStore, provide_particle_store};
use components::screens::{AppearanceScreen, CategoryScreen, ExportScreen, ProfileScreen, Tab};
use data::BrowserStorage;
use data::storage::load_accent;

pub use components::particle_field::ParticleCanvas;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("lifeportal: logging initialized");
}

/// Main application component.
///
/// Owns the process-wide particle store and the accent color, provides both
/// through context, and switches between screens.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	provide_particle_store(ParticleStore::new());
	let accent = RwSignal::new(load_accent(&BrowserStorage));
	provide_context(accent);

	let tab = RwSignal::new(Tab::Profile);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="LifePortal" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<nav
			class="tab-bar"
			style=format!(
				"display: flex; gap: 4px; overflow-x: auto; padding: 8px; background: {};",
				AppColors::BACKGROUND.to_css()
			)
		>
			{Tab::ALL
				.into_iter()
				.map(|t| {
					view! {
						<button
							on:click=move |_| tab.set(t)
							style=move || format!(
								"padding: 6px 12px; border: none; border-radius: 8px; color: white; background: {};",
								if tab.get() == t {
									accent.get().color().to_css()
								} else {
									"transparent".to_string()
								}
							)
						>
							{t.label()}
						</button>
					}
				})
				.collect_view()}
		</nav>

		<main>
			{move || match tab.get() {
				Tab::Profile => view! { <ProfileScreen /> }.into_any(),
				Tab::Goals(category) => view! { <CategoryScreen category=category /> }.into_any(),
				Tab::Appearance => view! { <AppearanceScreen /> }.into_any(),
				Tab::Export => view! { <ExportScreen /> }.into_any(),
			}}
		</main>
	}
}
