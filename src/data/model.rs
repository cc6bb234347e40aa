//! User records: profile, goal categories and their items.
//!
//! Field names serialize in camelCase so stored values and exports keep the
//! same shape across app versions.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::components::particle_field::Color;

/// Importance of a goal, stored as 1..=3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
	/// Default for items saved without a priority.
	#[default]
	Low,
	/// Shown in yellow.
	Medium,
	/// Shown in red.
	High,
}

impl Priority {
	/// Options in ascending order.
	pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

	/// Text shown on the tab or option.
	pub fn label(self) -> &'static str {
		match self {
			Priority::Low => "Low",
			Priority::Medium => "Medium",
			Priority::High => "High",
		}
	}

	/// Badge color shown next to an item.
	pub fn color(self) -> Color {
		match self {
			Priority::Low => Color::rgba(0, 122, 255, 0.8),
			Priority::Medium => Color::rgba(255, 204, 0, 0.8),
			Priority::High => Color::rgba(255, 59, 48, 0.8),
		}
	}
}

impl From<Priority> for u8 {
	fn from(priority: Priority) -> Self {
		match priority {
			Priority::Low => 1,
			Priority::Medium => 2,
			Priority::High => 3,
		}
	}
}

impl TryFrom<u8> for Priority {
	type Error = String;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Priority::Low),
			2 => Ok(Priority::Medium),
			3 => Ok(Priority::High),
			other => Err(format!("priority must be 1, 2 or 3, got {other}")),
		}
	}
}

/// One goal within a category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
	/// Stable identity used by toggle and delete.
	pub id: Uuid,
	/// Short name shown on the card.
	pub title: String,
	/// Free text, may be empty.
	pub description: String,
	/// Target date.
	pub date: DateTime<Utc>,
	/// Checked off. Missing in older data means open.
	#[serde(default)]
	pub is_completed: bool,
	/// Missing in older data means low.
	#[serde(default)]
	pub priority: Priority,
}

impl CategoryItem {
	/// Open item with a fresh id.
	pub fn new(
		title: impl Into<String>,
		description: impl Into<String>,
		date: DateTime<Utc>,
		priority: Priority,
	) -> Self {
		Self {
			id: Uuid::new_v4(),
			title: title.into(),
			description: description.into(),
			date,
			is_completed: false,
			priority,
		}
	}
}

/// The four goal lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Personal goals.
	Personal,
	/// Health objectives.
	Health,
	/// Career goals.
	Professional,
	/// Long-range plans.
	Future,
}

impl Category {
	/// Navigation order.
	pub const ALL: [Category; 4] = [
		Category::Personal,
		Category::Health,
		Category::Professional,
		Category::Future,
	];

	/// Display title, also used in log messages.
	pub fn title(self) -> &'static str {
		match self {
			Category::Personal => "Personal",
			Category::Health => "Health",
			Category::Professional => "Professional",
			Category::Future => "Future",
		}
	}

	/// Key the item list is persisted under.
	pub fn storage_key(self) -> &'static str {
		match self {
			Category::Personal => "personalItems",
			Category::Health => "healthItems",
			Category::Professional => "professionalItems",
			Category::Future => "futureItems",
		}
	}

	/// One-line blurb under the title.
	pub fn description(self) -> &'static str {
		match self {
			Category::Personal => {
				"Track your personal development goals, relationships, hobbies, and personal projects."
			}
			Category::Health => {
				"Monitor your physical and mental health goals, fitness milestones, and wellness objectives."
			}
			Category::Professional => {
				"Manage your career objectives, skills development, and professional achievements."
			}
			Category::Future => "Plan your long-term aspirations, life vision, and legacy goals.",
		}
	}

	/// Emoji shown on the empty list.
	pub fn icon(self) -> &'static str {
		match self {
			Category::Personal => "👤",
			Category::Health => "❤",
			Category::Professional => "💼",
			Category::Future => "⌛",
		}
	}
}

/// Appends a new, not yet completed item and returns its id.
pub fn add_item(
	items: &mut Vec<CategoryItem>,
	title: impl Into<String>,
	description: impl Into<String>,
	date: DateTime<Utc>,
	priority: Priority,
) -> Uuid {
	let item = CategoryItem::new(title, description, date, priority);
	let id = item.id;
	items.push(item);
	id
}

/// Flips completion of the item with `id`. Returns false if no item matched.
pub fn toggle_completion(items: &mut [CategoryItem], id: Uuid) -> bool {
	match items.iter_mut().find(|item| item.id == id) {
		Some(item) => {
			item.is_completed = !item.is_completed;
			true
		}
		None => false,
	}
}

/// Removes the item with `id`. Returns false if no item matched.
pub fn delete_item(items: &mut Vec<CategoryItem>, id: Uuid) -> bool {
	let before = items.len();
	items.retain(|item| item.id != id);
	items.len() != before
}

/// Profile fields shown on the main screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
	/// Shown as the heading.
	pub full_name: String,
	/// Shown under the name.
	pub nickname: String,
	/// Drives age and the life bar.
	pub birth_date: DateTime<Utc>,
	/// Encoded image, either a data URL or bare base64 JPEG.
	pub profile_image: Option<String>,
}

/// Lifespan the birth-to-death bar is scaled to.
const LIFE_BAR_YEARS: f64 = 100.0;

impl ProfileData {
	/// Whole years between the birth date and `on`; 0 for future birth dates.
	pub fn age_on(&self, on: DateTime<Utc>) -> u32 {
		let (birth, today) = (self.birth_date.date_naive(), on.date_naive());
		if today <= birth {
			return 0;
		}
		let mut years = today.year() - birth.year();
		if (today.month(), today.day()) < (birth.month(), birth.day()) {
			years -= 1;
		}
		years.max(0) as u32
	}

	/// Position on the life bar in `[0, 1]`.
	pub fn life_progress(&self, on: DateTime<Utc>) -> f64 {
		(self.age_on(on) as f64 / LIFE_BAR_YEARS).clamp(0.0, 1.0)
	}

	/// Image source usable by an `<img>` tag.
	///
	/// A stored data URL is used as-is; bare base64 is assumed to be JPEG.
	/// Blank data counts as no image.
	pub fn image_src(&self) -> Option<String> {
		let raw = self.profile_image.as_deref()?.trim();
		if raw.is_empty() {
			None
		} else if raw.starts_with("data:") {
			Some(raw.to_owned())
		} else {
			Some(format!("data:image/jpeg;base64,{raw}"))
		}
	}

	/// Drop the profile image. Returns whether there was one.
	pub fn remove_image(&mut self) -> bool {
		self.profile_image.take().is_some()
	}
}

/// Every category's items, keyed by category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
	/// Personal goals.
	pub personal: Vec<CategoryItem>,
	/// Health objectives.
	pub health: Vec<CategoryItem>,
	/// Career goals.
	pub professional: Vec<CategoryItem>,
	/// Long-range plans.
	pub future: Vec<CategoryItem>,
}

impl CategoryData {
	/// Items for one category.
	pub fn items(&self, category: Category) -> &[CategoryItem] {
		match category {
			Category::Personal => &self.personal,
			Category::Health => &self.health,
			Category::Professional => &self.professional,
			Category::Future => &self.future,
		}
	}

	/// Mutable items for one category.
	pub fn items_mut(&mut self, category: Category) -> &mut Vec<CategoryItem> {
		match category {
			Category::Personal => &mut self.personal,
			Category::Health => &mut self.health,
			Category::Professional => &mut self.professional,
			Category::Future => &mut self.future,
		}
	}
}

/// Full export document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifePortalData {
	/// Profile as saved.
	pub profile_data: ProfileData,
	/// Every goal list as saved.
	pub category_data: CategoryData,
	/// When the export was generated.
	pub export_date: DateTime<Utc>,
	/// Crate version that wrote the file.
	pub app_version: String,
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
		Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
	}

	fn profile(birth: DateTime<Utc>) -> ProfileData {
		ProfileData {
			full_name: "Sam Doe".into(),
			nickname: "Sam".into(),
			birth_date: birth,
			profile_image: None,
		}
	}

	#[test]
	fn add_toggle_delete_by_id() {
		let mut items = Vec::new();
		let first = add_item(&mut items, "Run", "5k", at(2025, 5, 1), Priority::High);
		let second = add_item(&mut items, "Read", "", at(2025, 6, 1), Priority::Low);
		assert_eq!(items.len(), 2);
		assert!(!items[0].is_completed);

		assert!(toggle_completion(&mut items, first));
		assert!(items[0].is_completed);
		assert!(toggle_completion(&mut items, first));
		assert!(!items[0].is_completed);

		assert!(delete_item(&mut items, first));
		assert!(!delete_item(&mut items, first));
		assert!(!toggle_completion(&mut items, first));
		assert_eq!(items.len(), 1);
		assert_eq!(items[0].id, second);
	}

	#[test]
	fn item_json_uses_camel_case_and_numeric_priority() {
		let item = CategoryItem::new("Ship", "v2", at(2025, 4, 19), Priority::Medium);
		let json = serde_json::to_value(&item).unwrap();
		assert_eq!(json["isCompleted"], false);
		assert_eq!(json["priority"], 2);
		assert_eq!(json["date"], "2025-04-19T12:00:00Z");
	}

	#[test]
	fn item_json_defaults_missing_flags() {
		let json = r#"{
			"id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
			"title": "Stretch",
			"description": "",
			"date": "2025-01-02T03:04:05Z"
		}"#;
		let item: CategoryItem = serde_json::from_str(json).unwrap();
		assert!(!item.is_completed);
		assert_eq!(item.priority, Priority::Low);
	}

	#[test]
	fn out_of_range_priority_is_rejected() {
		assert!(serde_json::from_str::<Priority>("4").is_err());
		assert_eq!(serde_json::from_str::<Priority>("3").unwrap(), Priority::High);
	}

	#[test]
	fn storage_keys_are_distinct() {
		let keys: std::collections::HashSet<_> =
			Category::ALL.iter().map(|c| c.storage_key()).collect();
		assert_eq!(keys.len(), Category::ALL.len());
	}

	#[test]
	fn age_counts_completed_birthdays() {
		let p = profile(at(1990, 6, 15));
		assert_eq!(p.age_on(at(2025, 6, 14)), 34);
		assert_eq!(p.age_on(at(2025, 6, 15)), 35);
		assert_eq!(p.age_on(at(1980, 1, 1)), 0);
	}

	#[test]
	fn life_progress_is_clamped() {
		assert_eq!(profile(at(2000, 1, 1)).life_progress(at(2050, 1, 1)), 0.5);
		assert_eq!(profile(at(1900, 1, 1)).life_progress(at(2025, 1, 1)), 1.0);
		assert_eq!(profile(at(2030, 1, 1)).life_progress(at(2025, 1, 1)), 0.0);
	}
	#[test]
	fn image_src_wraps_bare_base64_and_keeps_data_urls() {
		let mut p = profile(at(1990, 1, 1));
		assert_eq!(p.image_src(), None);

		p.profile_image = Some("   ".into());
		assert_eq!(p.image_src(), None);

		p.profile_image = Some("/9j/4AAQ".into());
		assert_eq!(p.image_src().as_deref(), Some("data:image/jpeg;base64,/9j/4AAQ"));

		p.profile_image = Some("data:image/png;base64,iVBOR".into());
		assert_eq!(p.image_src().as_deref(), Some("data:image/png;base64,iVBOR"));
	}

	#[test]
	fn removing_the_image_reports_whether_one_existed() {
		let mut p = profile(at(1990, 1, 1));
		p.profile_image = Some("/9j/4AAQ".into());
		assert!(p.remove_image());
		assert_eq!(p.profile_image, None);
		assert!(!p.remove_image());
	}
}
