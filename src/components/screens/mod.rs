//! App screens. Each one mounts its own particle canvas behind its content.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;

mod appearance;
mod category;
mod export;
mod profile;

pub use appearance::AppearanceScreen;
pub use category::CategoryScreen;
pub use export::ExportScreen;
pub use profile::ProfileScreen;

use super::particle_field::{AccentColor, AppColors, ParticleCanvas};
use crate::data::Category;

/// Top-level navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
	/// Profile and life bar.
	Profile,
	/// One goal list per category.
	Goals(Category),
	/// Accent picker.
	Appearance,
	/// JSON export.
	Export,
}

impl Tab {
	/// Tab bar order.
	pub const ALL: [Tab; 7] = [
		Tab::Profile,
		Tab::Goals(Category::Personal),
		Tab::Goals(Category::Health),
		Tab::Goals(Category::Professional),
		Tab::Goals(Category::Future),
		Tab::Appearance,
		Tab::Export,
	];

	/// Text shown on the tab or option.
	pub fn label(self) -> &'static str {
		match self {
			Tab::Profile => "Profile",
			Tab::Goals(category) => category.title(),
			Tab::Appearance => "Appearance",
			Tab::Export => "Export",
		}
	}
}

/// The app-wide accent signal, or a default one outside the app root.
pub fn use_accent() -> RwSignal<AccentColor> {
	use_context::<RwSignal<AccentColor>>().unwrap_or_else(|| RwSignal::new(AccentColor::default()))
}

/// Shared screen frame: gradient background, particles, then content on top.
#[component]
fn ScreenFrame(children: Children) -> impl IntoView {
	let background = format!(
		"position: relative; min-height: 100vh; overflow: hidden; color: white; \
		 background: linear-gradient({}, {});",
		AppColors::BACKGROUND.to_css(),
		AppColors::BACKGROUND_SECONDARY.to_css()
	);
	view! {
		<section class="screen" style=background>
			<ParticleCanvas />
			<div class="screen-content" style="position: relative; z-index: 1; padding: 16px;">
				{children()}
			</div>
		</section>
	}
}

/// Parses the `YYYY-MM-DD` value of an `<input type="date">` as midnight UTC.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
	NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
		.ok()
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.map(|dt| dt.and_utc())
}

/// Formats a date for an `<input type="date">`.
pub fn format_date_input(date: DateTime<Utc>) -> String {
	date.format("%Y-%m-%d").to_string()
}

/// Medium-length display date, e.g. `Apr 19, 2025`.
pub fn format_date_display(date: DateTime<Utc>) -> String {
	date.format("%b %-d, %Y").to_string()
}
