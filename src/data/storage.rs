//! Key-value persistence for profile fields, goal lists and the accent color.
//!
//! The browser backend wraps `window.localStorage`; an in-memory backend
//! stands in for tests. Values are plain strings, with item lists stored as
//! JSON arrays.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::warn;

use super::model::{Category, CategoryData, CategoryItem, ProfileData};
use crate::components::particle_field::AccentColor;

/// Full name key.
pub const KEY_FULL_NAME: &str = "fullName";
/// Nickname key.
pub const KEY_NICKNAME: &str = "nickname";
/// Birth date key, stored as RFC 3339.
pub const KEY_BIRTH_DATE: &str = "birthDate";
/// Profile picture key.
pub const KEY_PROFILE_IMAGE: &str = "profileImageData";
/// Accent key, stored as `#RRGGBB`.
pub const KEY_ACCENT_COLOR: &str = "accentColorHex";

/// Minimal string key-value store.
pub trait KeyValueStore {
	/// Value under `key`, if any.
	fn get(&self, key: &str) -> Option<String>;
	/// Store `value` under `key`.
	fn set(&self, key: &str, value: &str);
	/// Delete `key`. Missing keys are ignored.
	fn remove(&self, key: &str);
}

/// `window.localStorage`. Unavailable storage reads as empty and drops writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window().and_then(|w| w.local_storage().ok().flatten())
	}
}

impl KeyValueStore for BrowserStorage {
	fn get(&self, key: &str) -> Option<String> {
		Self::storage().and_then(|s| s.get_item(key).ok().flatten())
	}

	fn set(&self, key: &str, value: &str) {
		match Self::storage() {
			Some(s) => {
				if s.set_item(key, value).is_err() {
					warn!("lifeportal: failed to write `{}` to local storage", key);
				}
			}
			None => warn!("lifeportal: local storage unavailable, `{}` not saved", key),
		}
	}

	fn remove(&self, key: &str) {
		if let Some(s) = Self::storage() {
			let _ = s.remove_item(key);
		}
	}
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
	}

	fn remove(&self, key: &str) {
		self.values.borrow_mut().remove(key);
	}
}

/// Items saved for `category`. Missing or unreadable data reads as an empty list.
pub fn load_items(store: &impl KeyValueStore, category: Category) -> Vec<CategoryItem> {
	let Some(raw) = store.get(category.storage_key()) else {
		return Vec::new();
	};
	if raw.trim().is_empty() {
		return Vec::new();
	}
	serde_json::from_str(&raw).unwrap_or_else(|e| {
		warn!(
			"lifeportal: could not decode {} items, starting empty: {}",
			category.title(),
			e
		);
		Vec::new()
	})
}

/// Replace the saved list for `category`.
pub fn save_items(store: &impl KeyValueStore, category: Category, items: &[CategoryItem]) {
	match serde_json::to_string(items) {
		Ok(json) => store.set(category.storage_key(), &json),
		Err(e) => warn!("lifeportal: could not encode {} items: {}", category.title(), e),
	}
}

/// Every category's saved list.
pub fn load_all_items(store: &impl KeyValueStore) -> CategoryData {
	let mut data = CategoryData::default();
	for category in Category::ALL {
		*data.items_mut(category) = load_items(store, category);
	}
	data
}

/// Saved profile. A missing or unparseable birth date defaults to `now`.
pub fn load_profile(store: &impl KeyValueStore, now: DateTime<Utc>) -> ProfileData {
	let birth_date = store
		.get(KEY_BIRTH_DATE)
		.and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
		.map(|date| date.with_timezone(&Utc))
		.unwrap_or(now);

	ProfileData {
		full_name: store.get(KEY_FULL_NAME).unwrap_or_default(),
		nickname: store.get(KEY_NICKNAME).unwrap_or_default(),
		birth_date,
		profile_image: store.get(KEY_PROFILE_IMAGE),
	}
}

/// Writes every profile key. A missing image removes the stored one.
pub fn save_profile(store: &impl KeyValueStore, profile: &ProfileData) {
	store.set(KEY_FULL_NAME, &profile.full_name);
	store.set(KEY_NICKNAME, &profile.nickname);
	store.set(KEY_BIRTH_DATE, &profile.birth_date.to_rfc3339());
	match &profile.profile_image {
		Some(image) => store.set(KEY_PROFILE_IMAGE, image),
		None => store.remove(KEY_PROFILE_IMAGE),
	}
}

/// Saved accent, teal when unset or unknown.
pub fn load_accent(store: &impl KeyValueStore) -> AccentColor {
	store
		.get(KEY_ACCENT_COLOR)
		.map(|hex| AccentColor::from_hex(&hex))
		.unwrap_or_default()
}

/// Persist the accent as its hex value.
pub fn save_accent(store: &impl KeyValueStore, accent: AccentColor) {
	store.set(KEY_ACCENT_COLOR, accent.hex());
}
