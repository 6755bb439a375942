//! Options bags passed to columns and actions

use crate::error::{Result, TableError};
use serde_json::Value;

/// Configuration bag for a column or an action.
///
/// Keys keep their insertion order, which is the order they are serialized in.
pub type Options = serde_json::Map<String, Value>;

/// Converts a JSON value into an options bag.
///
/// `null` yields an empty bag; any other non-object value is rejected.
///
/// # Examples
///
/// ```
/// use kendo_table::options::from_value;
/// use serde_json::json;
///
/// let options = from_value(json!({"width": 120})).unwrap();
/// assert_eq!(options["width"], 120);
///
/// assert!(from_value(json!(null)).unwrap().is_empty());
/// assert!(from_value(json!([1, 2])).is_err());
/// ```
pub fn from_value(value: Value) -> Result<Options> {
	match value {
		Value::Null => Ok(Options::new()),
		Value::Object(map) => Ok(map),
		other => Err(TableError::InvalidOptions(format!(
			"expected an object, got {}",
			json_type(&other)
		))),
	}
}

/// Reads a required, non-empty string option.
pub(crate) fn required_str(options: &Options, key: &'static str, context: &str) -> Result<String> {
	match optional_str(options, key)? {
		Some(value) if !value.is_empty() => Ok(value),
		_ => Err(TableError::MissingOption {
			option: key,
			context: context.to_string(),
		}),
	}
}

/// Reads an optional string option, rejecting values of another JSON type.
pub(crate) fn optional_str(options: &Options, key: &str) -> Result<Option<String>> {
	match options.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(other) => Err(TableError::InvalidOptions(format!(
			"option '{}' must be a string, got {}",
			key,
			json_type(other)
		))),
	}
}

/// Copies the listed keys, when present, from one bag into another.
pub(crate) fn copy_keys(from: &Options, to: &mut Options, keys: &[&str]) {
	for key in keys {
		if let Some(value) = from.get(*key) {
			to.insert((*key).to_string(), value.clone());
		}
	}
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
