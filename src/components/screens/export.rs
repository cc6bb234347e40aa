use leptos::ev;
use leptos::prelude::*;
use log::warn;

use super::{ScreenFrame, use_accent};
use crate::data::BrowserStorage;
use crate::data::export::export_to_download;

const INCLUDED: [&str; 5] = [
	"Profile Information",
	"Personal Goals",
	"Health Objectives",
	"Professional Goals",
	"Future Aspirations",
];

/// Explains what an export contains and downloads it as JSON.
#[component]
pub fn ExportScreen() -> impl IntoView {
	let accent = use_accent();
	let status = RwSignal::new(None::<String>);

	let export = move |_: ev::MouseEvent| match export_to_download(&BrowserStorage) {
		Ok(()) => status.set(Some("Export ready.".to_string())),
		Err(e) => {
			warn!("lifeportal: {}", e);
			status.set(Some(e.to_string()));
		}
	};

	view! {
		<ScreenFrame>
			<h1 style="font-family: serif; font-size: 28px;">"Export Your Life Data"</h1>
			<p style="opacity: 0.7;">
				"This will export all your personal information, goals, and settings as a JSON file that you can save and import later."
			</p>
			<h3>"Your data includes:"</h3>
			<ul>{INCLUDED.into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}</ul>
			<button
				on:click=export
				style=move || format!(
					"padding: 12px 30px; border: none; border-radius: 10px; color: white; background: {};",
					accent.get().color().to_css()
				)
			>
				"Export Data"
			</button>
			<p style="opacity: 0.7;">{move || status.get()}</p>
		</ScreenFrame>
	}
}
