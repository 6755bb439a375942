//! Built-in typed columns
//!
//! Numbers, currency amounts and dates are parsed by the client model and
//! formatted in the cell with `kendo.toString`, or `kendo.format` when the
//! format carries text around its placeholder. Booleans render as a pair of
//! labels.

use super::base::{BaseColumn, Column};
use crate::error::Result;
use crate::js::json_string;
use crate::options::{Options, optional_str};
use serde_json::Value;

/// A column whose value is formatted with a Kendo format string
///
/// The `format` option takes the widget column form (`{0:n2}`) or a bare
/// pattern (`yyyy-MM-dd`). A composite format such as `{0:n2} kg` is applied
/// whole in the row template.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedColumn {
	base: BaseColumn,
	model_type: &'static str,
	type_class: &'static str,
	format: String,
}

impl FormattedColumn {
	fn build(
		options: Options,
		model_type: &'static str,
		type_class: &'static str,
		default_format: &str,
	) -> Result<Self> {
		let format = optional_str(&options, "format")?.unwrap_or_else(|| default_format.to_string());
		Ok(Self {
			base: BaseColumn::new(options)?,
			model_type,
			type_class,
			format,
		})
	}

	/// Numeric column, `{0:n}` by default
	pub fn number(options: Options) -> Result<Self> {
		Self::build(options, "number", "number", "{0:n}")
	}

	/// Currency column, `{0:c}` by default
	pub fn currency(options: Options) -> Result<Self> {
		Self::build(options, "number", "currency", "{0:c}")
	}

	/// Date column, `{0:d}` by default
	pub fn date(options: Options) -> Result<Self> {
		Self::build(options, "date", "date", "{0:d}")
	}

	/// Returns the widget column format
	pub fn format(&self) -> &str {
		&self.format
	}

	/// Returns the bare pattern (`n2` for `{0:n2}`)
	///
	/// `None` when the format is composite.
	pub fn pattern(&self) -> Option<&str> {
		match self
			.format
			.strip_prefix("{0:")
			.and_then(|rest| rest.strip_suffix('}'))
		{
			Some(inner) if !inner.contains(['{', '}']) => Some(inner),
			Some(_) => None,
			None if self.format.contains(['{', '}']) => None,
			None => Some(self.format.as_str()),
		}
	}
}

impl Column for FormattedColumn {
	fn field(&self) -> &str {
		self.base.field()
	}

	fn title(&self) -> &str {
		self.base.title()
	}

	fn model_options(&self) -> Options {
		self.base.model_options_typed(self.model_type)
	}

	fn column_options(&self) -> Options {
		let mut options = self.base.column_options_base();
		options.insert("format".to_string(), Value::String(self.format.clone()));
		options
	}

	fn row_fragment(&self) -> String {
		let content = match self.pattern() {
			Some(pattern) => format!(
				"#: kendo.toString({}, {}) #",
				self.base.field(),
				template_string(pattern)
			),
			None => format!(
				"#: kendo.format({}, {}) #",
				template_string(&self.format),
				self.base.field()
			),
		};
		self.base.cell(Some(self.type_class), &content)
	}
}

/// A column showing one of two labels
///
/// Labels come from `true_text` and `false_text` (`Yes` / `No` by default).
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanColumn {
	base: BaseColumn,
	true_text: String,
	false_text: String,
}

impl BooleanColumn {
	/// Creates a boolean column from its options bag
	pub fn new(options: Options) -> Result<Self> {
		let true_text = optional_str(&options, "true_text")?.unwrap_or_else(|| "Yes".to_string());
		let false_text = optional_str(&options, "false_text")?.unwrap_or_else(|| "No".to_string());
		Ok(Self {
			base: BaseColumn::new(options)?,
			true_text,
			false_text,
		})
	}
}

impl Column for BooleanColumn {
	fn field(&self) -> &str {
		self.base.field()
	}

	fn title(&self) -> &str {
		self.base.title()
	}

	fn model_options(&self) -> Options {
		self.base.model_options_typed("boolean")
	}

	fn column_options(&self) -> Options {
		self.base.column_options_base()
	}

	fn row_fragment(&self) -> String {
		let content = format!(
			"#: {} ? {} : {} #",
			self.base.field(),
			template_string(&self.true_text),
			template_string(&self.false_text)
		);
		self.base.cell(Some("boolean"), &content)
	}
}

/// String literal for use inside a `#: ... #` template expression
fn template_string(s: &str) -> String {
	json_string(s).replace('#', "\\#")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::from_value;
	use rstest::rstest;
	use serde_json::json;

	fn opts(value: Value) -> Options {
		from_value(value).unwrap()
	}

	#[rstest]
	#[case::number(FormattedColumn::number, "number", "{0:n}", r#"<td class="number">#: kendo.toString(age, "n") #</td>"#)]
	#[case::currency(FormattedColumn::currency, "number", "{0:c}", r#"<td class="currency">#: kendo.toString(age, "c") #</td>"#)]
	#[case::date(FormattedColumn::date, "date", "{0:d}", r#"<td class="date">#: kendo.toString(age, "d") #</td>"#)]
	fn test_formatted_defaults(
		#[case] build: fn(Options) -> Result<FormattedColumn>,
		#[case] model_type: &str,
		#[case] format: &str,
		#[case] fragment: &str,
	) {
		let column = build(opts(json!({"field": "age", "title": "Age"}))).unwrap();
		assert_eq!(column.model_options()["type"], model_type);
		assert_eq!(column.column_options()["format"], format);
		assert_eq!(column.row_fragment(), fragment);
	}

	#[test]
	fn test_custom_format_drives_template() {
		let column = FormattedColumn::number(opts(json!({
			"field": "price",
			"title": "Price",
			"format": "{0:n2}",
		})))
		.unwrap();
		assert_eq!(column.pattern(), Some("n2"));
		assert_eq!(
			column.row_fragment(),
			r#"<td class="number">#: kendo.toString(price, "n2") #</td>"#
		);
	}

	#[test]
	fn test_bare_format_pattern() {
		let column = FormattedColumn::date(opts(json!({
			"field": "created",
			"title": "Created",
			"format": "yyyy-MM-dd",
		})))
		.unwrap();
		assert_eq!(column.pattern(), Some("yyyy-MM-dd"));
		assert_eq!(
			column.row_fragment(),
			r#"<td class="date">#: kendo.toString(created, "yyyy-MM-dd") #</td>"#
		);
	}

	#[test]
	fn test_composite_format_uses_kendo_format() {
		let column = FormattedColumn::number(opts(json!({
			"field": "weight",
			"title": "Weight",
			"format": "{0:n2} kg",
		})))
		.unwrap();
		assert_eq!(column.pattern(), None);
		assert_eq!(column.column_options()["format"], "{0:n2} kg");
		assert_eq!(
			column.row_fragment(),
			r#"<td class="number">#: kendo.format("{0:n2} kg", weight) #</td>"#
		);
	}

	#[test]
	fn test_sharp_in_pattern_is_escaped() {
		let column = FormattedColumn::number(opts(json!({
			"field": "total",
			"title": "Total",
			"format": "{0:#,##0.00}",
		})))
		.unwrap();
		assert_eq!(column.pattern(), Some("#,##0.00"));
		assert_eq!(
			column.row_fragment(),
			r#"<td class="number">#: kendo.toString(total, "\#,\#\#0.00") #</td>"#
		);
	}

	#[test]
	fn test_boolean_labels() {
		let column = BooleanColumn::new(opts(json!({
			"field": "active",
			"title": "Active",
			"true_text": "on",
		})))
		.unwrap();
		assert_eq!(column.model_options()["type"], "boolean");
		assert_eq!(
			column.row_fragment(),
			r#"<td class="boolean">#: active ? "on" : "No" #</td>"#
		);
	}

	#[test]
	fn test_boolean_labels_escape_sharp() {
		let column = BooleanColumn::new(opts(json!({
			"field": "flagged",
			"title": "Flagged",
			"true_text": "#1",
			"false_text": "-",
		})))
		.unwrap();
		assert_eq!(
			column.row_fragment(),
			r#"<td class="boolean">#: flagged ? "\#1" : "-" #</td>"#
		);
	}
}
