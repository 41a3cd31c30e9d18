//! List table settings
//!
//! Defaults for texts, element ids and page size. Settings can be built in
//! code or loaded from a TOML document; missing keys fall back to the
//! defaults.
//!
//! ```toml
//! no_items_text = "No courses found."
//! search_button_text = "Search Courses"
//! per_page = 50
//! ```

use crate::error::{ListTableError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`ListTable`](crate::ListTable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTableSettings {
	/// Prefix for the singular/plural labels derived from the table token
	pub label_prefix: String,
	/// Text shown when the table has no rows
	pub no_items_text: String,
	/// Label of the search submit button
	pub search_button_text: String,
	/// Base id of the search input (`-search-input` is appended)
	pub search_input_id: String,
	/// Query parameter holding the search term
	pub search_param: String,
	/// Default page size
	pub per_page: usize,
}

impl Default for ListTableSettings {
	fn default() -> Self {
		Self {
			label_prefix: "wp_list_table_".to_string(),
			no_items_text: "No items found.".to_string(),
			search_button_text: "Search Users".to_string(),
			search_input_id: "search_id".to_string(),
			search_param: "s".to_string(),
			per_page: 20,
		}
	}
}

impl ListTableSettings {
	/// Parses and validates settings from a TOML string
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_list_table::ListTableSettings;
	///
	/// let settings = ListTableSettings::from_toml_str("per_page = 5").unwrap();
	/// assert_eq!(settings.per_page, 5);
	/// assert_eq!(settings.no_items_text, "No items found.");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Loading list table settings");
		Self::from_toml_str(&source)
	}

	/// Checks invariants that deserialization cannot express
	pub fn validate(&self) -> Result<()> {
		if self.per_page == 0 {
			return Err(ListTableError::InvalidSettings(
				"per_page must be greater than zero".to_string(),
			));
		}
		if self.search_param.is_empty() {
			return Err(ListTableError::InvalidSettings(
				"search_param must not be empty".to_string(),
			));
		}
		Ok(())
	}
}
