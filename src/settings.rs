//! Table defaults
//!
//! Every table starts from a [`TableSettings`] value. The defaults match a
//! server that answers with `{"results": [...], "count": N}` and does the
//! filtering, sorting and paging itself.
//!
//! Settings can be kept in TOML; any key left out keeps its default:
//!
//! ```toml
//! data_key = "items"
//! server_paging = false
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to the model, data source and grid of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Identity field of the client model.
	pub id_field: String,
	/// Response member holding the records.
	pub data_key: String,
	/// Response member holding the total record count.
	pub total_key: String,
	/// Let the server filter.
	pub server_filtering: bool,
	/// Let the server sort.
	pub server_sorting: bool,
	/// Let the server page.
	pub server_paging: bool,
	/// Allow a third click on a header to clear sorting.
	pub allow_unsort: bool,
	/// CSS class of the trailing actions cell.
	pub actions_class: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			id_field: "id".to_string(),
			data_key: "results".to_string(),
			total_key: "count".to_string(),
			server_filtering: true,
			server_sorting: true,
			server_paging: true,
			allow_unsort: false,
			actions_class: "tableActions".to_string(),
		}
	}
}

impl TableSettings {
	/// Parses settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use kendo_table::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("data_key = \"items\"").unwrap();
	/// assert_eq!(settings.data_key, "items");
	/// assert_eq!(settings.total_key, "count");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "loading table settings");
		Self::from_toml_str(&source)
	}
}
