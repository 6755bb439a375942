//! Structured JavaScript values for widget configuration
//!
//! Kendo configuration is mostly plain JSON, but a few members are
//! JavaScript expressions (`kendo.data.Model.define(...)`,
//! `new kendo.data.DataSource(...)`, callback functions). [`JsValue`] keeps
//! both in one tree so the whole configuration is serialized in a single pass.
//!
//! Every `</` inside serialized JSON is written as `<\/`, which keeps the
//! output safe to inline in a `<script>` element.

use serde_json::Value;
use std::fmt;

/// A JavaScript value: JSON data, a raw expression, or a container of both.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
	/// Plain JSON data.
	Json(Value),
	/// A raw JavaScript expression, written verbatim.
	Expr(String),
	/// An object literal whose members may be expressions.
	Object(JsObject),
	/// An array literal whose items may be expressions.
	Array(Vec<JsValue>),
}

impl JsValue {
	/// Creates a raw expression value.
	pub fn expr(code: impl Into<String>) -> Self {
		Self::Expr(code.into())
	}
}

impl From<Value> for JsValue {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

impl From<JsObject> for JsValue {
	fn from(object: JsObject) -> Self {
		Self::Object(object)
	}
}

impl From<serde_json::Map<String, Value>> for JsValue {
	fn from(map: serde_json::Map<String, Value>) -> Self {
		Self::Json(Value::Object(map))
	}
}

impl From<&str> for JsValue {
	fn from(s: &str) -> Self {
		Self::Json(Value::String(s.to_string()))
	}
}

impl From<String> for JsValue {
	fn from(s: String) -> Self {
		Self::Json(Value::String(s))
	}
}

impl From<bool> for JsValue {
	fn from(b: bool) -> Self {
		Self::Json(Value::Bool(b))
	}
}

impl fmt::Display for JsValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Json(value) => f.write_str(&script_safe(value.to_string())),
			Self::Expr(code) => f.write_str(code),
			Self::Object(object) => fmt::Display::fmt(object, f),
			Self::Array(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					fmt::Display::fmt(item, f)?;
				}
				f.write_str("]")
			}
		}
	}
}

/// An ordered JavaScript object literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
	entries: Vec<(String, JsValue)>,
}

impl JsObject {
	/// Creates an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a member, replacing an existing one in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<JsValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the member stored under `key`.
	pub fn get(&self, key: &str) -> Option<&JsValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// Returns whether a member is stored under `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Returns the member keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the object has no members.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for JsObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (i, (key, value)) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}
			write!(f, "{}:{}", json_string(key), value)?;
		}
		f.write_str("}")
	}
}

/// Serializes a string as a script-safe JSON string literal.
///
/// # Examples
///
/// ```
/// use kendo_table::js::json_string;
///
/// assert_eq!(json_string("a\"b"), r#""a\"b""#);
/// assert_eq!(json_string("<td></td>"), r#""<td><\/td>""#);
/// ```
pub fn json_string(s: &str) -> String {
	script_safe(Value::String(s.to_string()).to_string())
}

/// Rewrites sequences that end or confuse an inline `<script>` element
fn script_safe(json: String) -> String {
	if !json.contains(['<', '\u{2028}', '\u{2029}']) {
		return json;
	}
	json.replace("</", "<\\/")
		.replace("<!--", "<\\!--")
		.replace('\u{2028}', "\\u2028")
		.replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_object_keeps_insertion_order() {
		let object = JsObject::new()
			.with("zeta", true)
			.with("alpha", json!(1))
			.with("mid", "x");
		assert_eq!(object.to_string(), r#"{"zeta":true,"alpha":1,"mid":"x"}"#);
	}

	#[test]
	fn test_insert_replaces_in_place() {
		let mut object = JsObject::new().with("a", json!(1)).with("b", json!(2));
		object.insert("a", json!(3));
		assert_eq!(object.len(), 2);
		assert_eq!(object.to_string(), r#"{"a":3,"b":2}"#);
	}

	#[test]
	fn test_expression_written_verbatim() {
		let object = JsObject::new().with("model", JsValue::expr("kendo.data.Model.define({})"));
		assert_eq!(object.to_string(), r#"{"model":kendo.data.Model.define({})}"#);
	}

	#[test]
	fn test_array_of_mixed_values() {
		let value = JsValue::Array(vec![
			JsValue::from(json!({"field": "name"})),
			JsValue::expr("fn"),
		]);
		assert_eq!(value.to_string(), r#"[{"field":"name"},fn]"#);
	}

	#[test]
	fn test_closing_tags_are_escaped() {
		let value = JsValue::from(json!({"rowTemplate": "<tr></tr>"}));
		assert_eq!(value.to_string(), r#"{"rowTemplate":"<tr><\/tr>"}"#);
	}

	#[test]
	fn test_comment_openers_are_escaped() {
		assert_eq!(json_string("<!-- x -->"), r#""<\!-- x -->""#);
	}

	#[test]
	fn test_line_separators_are_escaped() {
		assert_eq!(json_string("a\u{2028}b\u{2029}c"), r#""a\u2028b\u2029c""#);
		let value = JsValue::from(json!({"title": "x\u{2028}"}));
		assert_eq!(value.to_string(), r#"{"title":"x\u2028"}"#);
	}
}
