//! JSON export of everything the user has entered.

use chrono::{DateTime, Utc};
use log::info;
use wasm_bindgen::JsCast;

use super::ExportError;
use super::model::LifePortalData;
use super::storage::{KeyValueStore, load_all_items, load_profile};

/// File name offered for the download.
pub const EXPORT_FILE_NAME: &str = "LifePortalData.json";

/// Gathers profile and all goal lists into one export document.
pub fn collect(store: &impl KeyValueStore, now: DateTime<Utc>) -> LifePortalData {
	LifePortalData {
		profile_data: load_profile(store, now),
		category_data: load_all_items(store),
		export_date: now,
		app_version: env!("CARGO_PKG_VERSION").to_string(),
	}
}

/// Pretty-printed JSON for `data`.
pub fn to_json(data: &LifePortalData) -> Result<String, ExportError> {
	Ok(serde_json::to_string_pretty(data)?)
}

/// Collects, encodes and downloads the export in one go.
pub fn export_to_download(store: &impl KeyValueStore) -> Result<(), ExportError> {
	let data = collect(store, Utc::now());
	let json = to_json(&data)?;
	download_json(EXPORT_FILE_NAME, &json)?;
	info!("lifeportal: exported {} bytes", json.len());
	Ok(())
}

/// Offers `json` to the browser as a file download.
pub fn download_json(filename: &str, json: &str) -> Result<(), ExportError> {
	let window = web_sys::window().ok_or(ExportError::Browser("no window".into()))?;
	let document = window
		.document()
		.ok_or(ExportError::Browser("no document".into()))?;

	let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(json));
	let blob = web_sys::Blob::new_with_str_sequence(&parts)
		.map_err(|_| ExportError::Browser("blob: failed to create".into()))?;
	let url = web_sys::Url::create_object_url_with_blob(&blob)
		.map_err(|_| ExportError::Browser("url: create_object_url failed".into()))?;

	let anchor = document
		.create_element("a")
		.map_err(|_| ExportError::Browser("document: create_element failed".into()))?
		.dyn_into::<web_sys::HtmlAnchorElement>()
		.map_err(|_| ExportError::Browser("document: anchor cast failed".into()))?;
	anchor.set_href(&url);
	anchor.set_download(filename);
	anchor.click();

	let _ = web_sys::Url::revoke_object_url(&url);
	Ok(())
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;
	use crate::data::model::{Category, Priority, add_item};
	use crate::data::storage::{MemoryStorage, save_items};

	#[test]
	fn export_document_has_expected_shape() {
		let now = Utc.with_ymd_and_hms(2025, 4, 19, 8, 0, 0).unwrap();
		let store = MemoryStorage::default();
		store.set("fullName", "Alex Kim");
		let mut items = Vec::new();
		add_item(&mut items, "Promotion", "", now, Priority::Medium);
		save_items(&store, Category::Professional, &items);

		let data = collect(&store, now);
		assert_eq!(data.app_version, env!("CARGO_PKG_VERSION"));

		let json = to_json(&data).unwrap();
		assert!(json.contains('\n'), "export should be pretty printed");
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["profileData"]["fullName"], "Alex Kim");
		assert_eq!(value["exportDate"], "2025-04-19T08:00:00Z");
		assert_eq!(
			value["categoryData"]["professional"][0]["title"],
			"Promotion"
		);
		assert_eq!(value["categoryData"]["personal"], serde_json::json!([]));

		let back: LifePortalData = serde_json::from_str(&json).unwrap();
		assert_eq!(back, data);
	}
}
