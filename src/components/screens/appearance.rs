use leptos::ev;
use leptos::prelude::*;
use log::info;

use super::{ScreenFrame, use_accent};
use crate::components::particle_field::{AccentColor, AppColors};
use crate::data::BrowserStorage;
use crate::data::storage::save_accent;

/// Accent color picker with a live preview. Applying persists the choice.
///
/// Running particles keep their colors; the new accent is used the next time
/// the particle field is populated.
#[component]
pub fn AppearanceScreen() -> impl IntoView {
	let accent = use_accent();
	let selected = RwSignal::new(accent.get_untracked());

	let apply = move |_: ev::MouseEvent| {
		let choice = selected.get_untracked();
		save_accent(&BrowserStorage, choice);
		accent.set(choice);
		info!("lifeportal: accent color set to {}", choice.name());
	};

	view! {
		<ScreenFrame>
			<h1 style="font-family: serif; font-size: 28px;">"Appearance Settings"</h1>
			<p style="opacity: 0.7;">"Choose an accent color for your LifePortal experience"</p>

			<div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; margin: 20px 0;">
				{AccentColor::ALL
					.into_iter()
					.map(|option| view! { <ColorOptionButton option=option selected=selected /> })
					.collect_view()}
			</div>

			<div
				class="preview"
				style=format!(
					"padding: 20px; border-radius: 16px; text-align: center; background: {};",
					AppColors::CARD.with_alpha(0.6).to_css()
				)
			>
				<h3>"Preview"</h3>
				<div style=move || format!(
					"display: inline-block; padding: 12px 30px; border-radius: 10px; background: {};",
					selected.get().color().to_css()
				)>"Button"</div>
				<progress
					value="0.7"
					style=move || format!("display: block; margin: 12px auto; accent-color: {};", selected.get().color().to_css())
				/>
			</div>

			<button
				on:click=apply
				style=move || format!(
					"margin-top: 24px; padding: 12px 30px; border: none; border-radius: 10px; color: white; background: {};",
					selected.get().color().to_css()
				)
			>
				"Apply Changes"
			</button>
		</ScreenFrame>
	}
}

#[component]
fn ColorOptionButton(option: AccentColor, selected: RwSignal<AccentColor>) -> impl IntoView {
	let is_selected = move || selected.get() == option;
	let color = option.color();

	view! {
		<button
			on:click=move |_| selected.set(option)
			style=move || format!(
				"padding: 8px 4px; border: none; border-radius: 12px; color: white; background: {};",
				if is_selected() { color.with_alpha(0.15).to_css() } else { "transparent".to_string() }
			)
		>
			<div style=move || format!(
				"width: 60px; height: 60px; margin: 0 auto; border-radius: 50%; background: {}; outline: {};",
				color.to_css(),
				if is_selected() { "2px solid white" } else { "none" }
			)>
				{move || if is_selected() { "✓" } else { "" }}
			</div>
			<span style=move || if is_selected() { "opacity: 1;" } else { "opacity: 0.7;" }>
				{option.name()}
			</span>
		</button>
	}
}
