//! Client-side data model

use crate::js::JsValue;
use crate::options::Options;
use serde_json::Value;

/// Schema of one data record, rendered as `kendo.data.Model.define(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	id: String,
	fields: Options,
}

impl Model {
	/// Creates a model whose identity field is `id`.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			fields: Options::new(),
		}
	}

	/// Returns the identity field.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Adds or replaces the definition of `name`.
	///
	/// Returns `true` when an earlier definition was replaced.
	pub fn add_field(&mut self, name: impl Into<String>, options: Options) -> bool {
		self.fields
			.insert(name.into(), Value::Object(options))
			.is_some()
	}

	/// Returns the definition of `name`.
	pub fn field(&self, name: &str) -> Option<&Options> {
		self.fields.get(name).and_then(Value::as_object)
	}

	/// Returns the field names in insertion order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Renders the model definition expression.
	pub fn to_js(&self) -> JsValue {
		let mut definition = Options::new();
		definition.insert("id".to_string(), Value::String(self.id.clone()));
		definition.insert("fields".to_string(), Value::Object(self.fields.clone()));
		JsValue::expr(format!(
			"kendo.data.Model.define({})",
			JsValue::from(definition)
		))
	}
}
