//! User data: records, persistence and export.

use std::fmt;

pub mod export;
pub mod model;
pub mod storage;

pub use model::{Category, CategoryData, CategoryItem, LifePortalData, Priority, ProfileData};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};

/// Errors that can occur while exporting user data.
#[derive(Debug)]
pub enum ExportError {
	/// The export document could not be encoded.
	Encode(serde_json::Error),
	/// A browser API needed for the download was unavailable or failed.
	Browser(String),
}

impl fmt::Display for ExportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExportError::Encode(e) => write!(f, "Failed to encode export: {}", e),
			ExportError::Browser(msg) => write!(f, "Failed to download export: {}", msg),
		}
	}
}

impl std::error::Error for ExportError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ExportError::Encode(e) => Some(e),
			ExportError::Browser(_) => None,
		}
	}
}

impl From<serde_json::Error> for ExportError {
	fn from(e: serde_json::Error) -> Self {
		ExportError::Encode(e)
	}
}
