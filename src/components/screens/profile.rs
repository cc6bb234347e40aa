use chrono::Utc;
use leptos::ev;
use leptos::prelude::*;
use log::info;

use super::{ScreenFrame, format_date_display, format_date_input, parse_date_input, use_accent};
use crate::data::storage::{load_profile, save_profile};
use crate::data::{BrowserStorage, ProfileData};

const INPUT_STYLE: &str = "display: block; width: 100%; margin: 6px 0; padding: 8px; \
	border-radius: 8px; border: 1px solid gray; background: white; color: black;";

/// Name, nickname, birth date and the birth-to-death life bar.
#[component]
pub fn ProfileScreen() -> impl IntoView {
	let accent = use_accent();
	let profile = RwSignal::new(load_profile(&BrowserStorage, Utc::now()));
	let editing = RwSignal::new(false);

	let toggle_edit = move |_: ev::MouseEvent| {
		if editing.get_untracked() {
			save_profile(&BrowserStorage, &profile.get_untracked());
			info!("lifeportal: profile saved");
		}
		editing.update(|e| *e = !*e);
	};

	let progress_pct = move || profile.with(|p| p.life_progress(Utc::now()) * 100.0);
	let age = move || profile.with(|p| p.age_on(Utc::now()));

	view! {
		<ScreenFrame>
			<h1 style="font-family: serif; font-size: 32px;">"Profile"</h1>
			<ProfileImage profile=profile editing=editing />
			<Show
				when=move || editing.get()
				fallback=move || {
					view! {
						<div>
							<h2>{move || profile.with(|p| p.full_name.clone())}</h2>
							<p style="opacity: 0.7;">{move || profile.with(|p| p.nickname.clone())}</p>
							<p style="opacity: 0.7;">
								{move || profile.with(|p| format_date_display(p.birth_date))}
							</p>
						</div>
					}
				}
			>
				<ProfileForm profile=profile />
			</Show>
			<button
				on:click=toggle_edit
				style=move || format!(
					"margin-top: 12px; padding: 8px 16px; border: none; border-radius: 8px; color: white; background: {};",
					accent.get().color().to_css()
				)
			>
				{move || if editing.get() { "Save" } else { "Edit" }}
			</button>

			<div class="life-bar" style="margin-top: 32px; padding: 12px; border: 1px solid rgba(128, 128, 128, 0.4); border-radius: 12px;">
				<p style="font-size: 12px; opacity: 0.6;">{move || format!("AGE {}", age())}</p>
				<div style="position: relative; height: 2px; background: gray;">
					<div style=move || format!(
						"position: absolute; left: 0; top: 0; height: 2px; width: {}%; background: {};",
						progress_pct(),
						accent.get().color().to_css()
					) />
				</div>
				<div style="display: flex; justify-content: space-between; font-size: 8px; opacity: 0.2;">
					<span>"BIRTH"</span>
					<span>"DEATH"</span>
				</div>
			</div>
		</ScreenFrame>
	}
}

const IMAGE_FRAME: &str = "width: 120px; height: 120px; border-radius: 20px; \
	border: 1px solid rgba(128, 128, 128, 0.4); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.4);";

/// Saved picture or a placeholder. Removal is persisted on the next save.
#[component]
fn ProfileImage(profile: RwSignal<ProfileData>, editing: RwSignal<bool>) -> impl IntoView {
	let src = move || profile.with(ProfileData::image_src);
	let remove = move |_: ev::MouseEvent| {
		profile.update(|p| {
			p.remove_image();
		});
	};

	view! {
		<div class="profile-image" style="margin: 12px 0;">
			{move || match src() {
				Some(src) => {
					view! {
						<img
							src=src
							alt="Profile"
							style=format!("{IMAGE_FRAME} object-fit: cover;")
						/>
					}
						.into_any()
				}
				None => {
					view! {
						<div style=format!(
							"{IMAGE_FRAME} display: flex; align-items: center; justify-content: center; \
							font-size: 56px; background: rgba(128, 128, 128, 0.2);"
						)>"👤"</div>
					}
						.into_any()
				}
			}}
			<Show when=move || editing.get() && src().is_some()>
				<button
					on:click=remove
					style="display: block; margin-top: 6px; background: none; border: none; color: tomato;"
				>
					"Remove Image"
				</button>
			</Show>
		</div>
	}
}

#[component]
fn ProfileForm(profile: RwSignal<ProfileData>) -> impl IntoView {
	view! {
		<div>
			<input
				type="text"
				placeholder="Full name"
				style=INPUT_STYLE
				prop:value=move || profile.with(|p| p.full_name.clone())
				on:input=move |ev| profile.update(|p| p.full_name = event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Nickname"
				style=INPUT_STYLE
				prop:value=move || profile.with(|p| p.nickname.clone())
				on:input=move |ev| profile.update(|p| p.nickname = event_target_value(&ev))
			/>
			<input
				type="date"
				style=INPUT_STYLE
				prop:value=move || profile.with(|p| format_date_input(p.birth_date))
				on:change=move |ev| {
					if let Some(date) = parse_date_input(&event_target_value(&ev)) {
						profile.update(|p| p.birth_date = date);
					}
				}
			/>
		</div>
	}
}
