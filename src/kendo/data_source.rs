//! Data source descriptor

use super::Model;
use crate::js::{JsObject, JsValue};
use crate::options::Options;
use crate::settings::TableSettings;
use serde_json::Value;

/// Keys the data source manages itself.
pub const MANAGED_KEYS: &[&str] = &[
	"schema",
	"transport",
	"serverFiltering",
	"serverSorting",
	"serverPaging",
];

/// How the grid fetches, pages, sorts and filters its records.
///
/// Rendered as `new kendo.data.DataSource(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
	data_key: String,
	total_key: String,
	server_filtering: bool,
	server_sorting: bool,
	server_paging: bool,
	transport: Options,
	extra: Options,
}

impl DataSource {
	/// Creates a data source from table settings.
	pub fn new(settings: &TableSettings) -> Self {
		Self {
			data_key: settings.data_key.clone(),
			total_key: settings.total_key.clone(),
			server_filtering: settings.server_filtering,
			server_sorting: settings.server_sorting,
			server_paging: settings.server_paging,
			transport: Options::new(),
			extra: Options::new(),
		}
	}

	/// Registers a transport operation (`read`, `update`, `destroy`, ...).
	///
	/// Transports accumulate; adding a kind again replaces that kind only.
	pub fn add_transport(&mut self, kind: impl Into<String>, options: Options) {
		self.transport.insert(kind.into(), Value::Object(options));
	}

	/// Returns the registered transports.
	pub fn transport(&self) -> &Options {
		&self.transport
	}

	/// Sets an additional data source option such as `pageSize`.
	///
	/// Returns `false` and leaves the descriptor untouched when `key` is
	/// managed by the data source itself.
	pub fn set_option(&mut self, key: impl Into<String>, value: Value) -> bool {
		let key = key.into();
		if MANAGED_KEYS.contains(&key.as_str()) {
			return false;
		}
		self.extra.insert(key, value);
		true
	}

	/// Server-side filtering, sorting and paging flags, in that order.
	pub fn server_flags(&self) -> (bool, bool, bool) {
		(
			self.server_filtering,
			self.server_sorting,
			self.server_paging,
		)
	}

	/// Renders the data source expression with `model` as its schema model.
	pub fn to_js(&self, model: &Model) -> JsValue {
		let schema = JsObject::new()
			.with("model", model.to_js())
			.with("data", self.data_key.as_str())
			.with("total", self.total_key.as_str());

		let mut config = JsObject::new()
			.with("schema", schema)
			.with("serverFiltering", self.server_filtering)
			.with("serverSorting", self.server_sorting)
			.with("serverPaging", self.server_paging);
		if !self.transport.is_empty() {
			config.insert("transport", self.transport.clone());
		}
		for (key, value) in &self.extra {
			config.insert(key.as_str(), value.clone());
		}

		JsValue::expr(format!("new kendo.data.DataSource({})", config))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn opts(value: Value) -> Options {
		value.as_object().cloned().unwrap_or_default()
	}

	#[test]
	fn test_default_rendering() {
		let data_source = DataSource::new(&TableSettings::default());
		assert_eq!(
			data_source.to_js(&Model::new("id")).to_string(),
			r#"new kendo.data.DataSource({"schema":{"model":kendo.data.Model.define({"id":"id","fields":{}}),"data":"results","total":"count"},"serverFiltering":true,"serverSorting":true,"serverPaging":true})"#
		);
	}

	#[test]
	fn test_transports_accumulate() {
		let mut data_source = DataSource::new(&TableSettings::default());
		data_source.add_transport("read", opts(json!({"url": "/users"})));
		data_source.add_transport("destroy", opts(json!({"url": "/users/delete"})));
		data_source.add_transport("read", opts(json!({"url": "/people"})));

		let transport = data_source.transport();
		assert_eq!(transport.len(), 2);
		assert_eq!(transport["read"]["url"], "/people");
		assert_eq!(
			transport.keys().collect::<Vec<_>>(),
			vec!["read", "destroy"]
		);
	}

	#[test]
	fn test_managed_keys_are_not_overridden() {
		let mut data_source = DataSource::new(&TableSettings::default());
		assert!(!data_source.set_option("serverPaging", json!(false)));
		assert!(data_source.set_option("pageSize", json!(20)));

		let rendered = data_source.to_js(&Model::new("id")).to_string();
		assert!(rendered.contains(r#""serverPaging":true"#));
		assert!(rendered.ends_with(r#""pageSize":20})"#));
	}
}
