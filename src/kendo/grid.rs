//! Grid widget descriptor

use crate::js::{JsObject, JsValue, json_string};
use crate::options::Options;
use serde_json::Value;

/// Keys the grid manages itself.
pub const MANAGED_KEYS: &[&str] = &["dataSource", "sortable", "columns", "rowTemplate"];

/// Configuration of the grid widget bound to one DOM element.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
	selector: String,
	sortable: Options,
	columns: Vec<Options>,
	extra: Options,
}

impl Grid {
	/// Creates a grid bound to the jQuery `selector`.
	pub fn new(selector: impl Into<String>) -> Self {
		Self {
			selector: selector.into(),
			sortable: Options::new(),
			columns: Vec::new(),
			extra: Options::new(),
		}
	}

	/// Returns the element selector.
	pub fn selector(&self) -> &str {
		&self.selector
	}

	/// Replaces the sortable options.
	pub fn set_sortable(&mut self, sortable: Options) {
		self.sortable = sortable;
	}

	/// Appends a column option fragment.
	pub fn add_column(&mut self, options: Options) {
		self.columns.push(options);
	}

	/// Returns the column option fragments in order.
	pub fn columns(&self) -> &[Options] {
		&self.columns
	}

	/// Sets an additional grid option such as `pageable`.
	///
	/// Returns `false` and leaves the descriptor untouched when `key` is
	/// managed by the grid itself.
	pub fn set_option(&mut self, key: impl Into<String>, value: Value) -> bool {
		let key = key.into();
		if MANAGED_KEYS.contains(&key.as_str()) {
			return false;
		}
		self.extra.insert(key, value);
		true
	}

	/// Builds the widget configuration object.
	pub fn config(&self, data_source: JsValue, row_template: &str) -> JsObject {
		let columns = self
			.columns
			.iter()
			.cloned()
			.map(Value::Object)
			.collect::<Vec<_>>();

		let mut config = JsObject::new()
			.with("dataSource", data_source)
			.with("sortable", self.sortable.clone())
			.with("columns", Value::Array(columns))
			.with("rowTemplate", row_template);
		for (key, value) in &self.extra {
			config.insert(key.as_str(), value.clone());
		}
		config
	}

	/// Renders the widget initialization statement.
	pub fn to_js(&self, data_source: JsValue, row_template: &str) -> String {
		format!(
			"$({}).kendoGrid({});",
			json_string(&self.selector),
			self.config(data_source, row_template)
		)
	}
}
