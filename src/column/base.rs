//! Base column trait and implementation

use crate::error::{Result, TableError};
use crate::escape::html_escape;
use crate::options::{Options, copy_keys, optional_str, required_str};
use serde_json::Value;
use std::fmt::{self, Debug};

/// Column option keys forwarded to the widget column fragment.
const COLUMN_KEYS: &[&str] = &[
	"width",
	"sortable",
	"filterable",
	"hidden",
	"attributes",
	"headerAttributes",
];

/// Column option keys forwarded to the model field fragment.
const MODEL_KEYS: &[&str] = &["nullable", "editable", "defaultValue", "validation"];

/// Trait for grid column definitions
///
/// Each column is responsible for:
/// - Providing its field name and header title
/// - Describing its field for the client data model
/// - Describing its display options for the grid widget
/// - Rendering its cell for the row template
/// - Contributing any extra script the cell needs
pub trait Column: Debug + Send + Sync {
	/// Returns the record field this column displays
	fn field(&self) -> &str;

	/// Returns the header title
	fn title(&self) -> &str;

	/// Returns the model field fragment (type coercion and validation hints)
	fn model_options(&self) -> Options;

	/// Returns the widget column fragment (field, title, format, width, ...)
	fn column_options(&self) -> Options;

	/// Returns the `<td>` template fragment for the row template
	fn row_fragment(&self) -> String;

	/// Returns script appended after the widget initialization
	///
	/// Default: empty string
	fn script(&self) -> String {
		String::new()
	}
}

impl fmt::Display for dyn Column + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.row_fragment())
	}
}

/// The default column: a plain, HTML-encoded text cell
///
/// # Example
///
/// ```rust
/// use kendo_table::column::{BaseColumn, Column};
/// use kendo_table::options::from_value;
/// use serde_json::json;
///
/// let column = BaseColumn::new(from_value(json!({
///     "field": "name",
///     "title": "User Name",
///     "width": 200,
/// })).unwrap()).unwrap();
///
/// assert_eq!(column.row_fragment(), "<td>#: name #</td>");
/// assert_eq!(column.column_options()["width"], 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColumn {
	field: String,
	title: String,
	css_class: Option<String>,
	template: Option<String>,
	options: Options,
}

impl BaseColumn {
	/// Creates a column from its options bag
	///
	/// `field` must be a non-empty identifier path (`name`, `address.city`)
	/// and `title` a string. `class` adds a cell class and `template` replaces
	/// the cell content.
	pub fn new(options: Options) -> Result<Self> {
		let field = required_str(&options, "field", "column")?;
		if !is_field_path(&field) {
			return Err(TableError::InvalidOptions(format!(
				"column field '{}' is not an identifier path",
				field
			)));
		}
		let title = optional_str(&options, "title")?.ok_or_else(|| TableError::MissingOption {
			option: "title",
			context: format!("column '{}'", field),
		})?;
		let css_class = optional_str(&options, "class")?;
		let template = optional_str(&options, "template")?;

		Ok(Self {
			field,
			title,
			css_class,
			template,
			options,
		})
	}

	/// Returns the options bag the column was built from
	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Model fragment with the given client type
	pub(crate) fn model_options_typed(&self, model_type: &str) -> Options {
		let mut options = Options::new();
		options.insert("type".to_string(), Value::String(model_type.to_string()));
		copy_keys(&self.options, &mut options, MODEL_KEYS);
		options
	}

	/// Widget column fragment: field and title first, then forwarded keys
	pub(crate) fn column_options_base(&self) -> Options {
		let mut options = Options::new();
		options.insert("field".to_string(), Value::String(self.field.clone()));
		options.insert("title".to_string(), Value::String(self.title.clone()));
		copy_keys(&self.options, &mut options, COLUMN_KEYS);
		options
	}

	/// Renders a cell, honouring the `class` and `template` options
	pub(crate) fn cell(&self, type_class: Option<&str>, content: &str) -> String {
		let content = self.template.as_deref().unwrap_or(content);
		let classes = [type_class, self.css_class.as_deref()]
			.into_iter()
			.flatten()
			.filter(|c| !c.is_empty())
			.collect::<Vec<_>>()
			.join(" ");

		if classes.is_empty() {
			format!("<td>{}</td>", content)
		} else {
			format!("<td class=\"{}\">{}</td>", html_escape(&classes), content)
		}
	}
}

impl Column for BaseColumn {
	fn field(&self) -> &str {
		&self.field
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn model_options(&self) -> Options {
		self.model_options_typed("string")
	}

	fn column_options(&self) -> Options {
		self.column_options_base()
	}

	fn row_fragment(&self) -> String {
		self.cell(None, &format!("#: {} #", self.field))
	}
}

/// Whether `field` can be read as a record member inside a template expression
fn is_field_path(field: &str) -> bool {
	field.split('.').all(|segment| {
		let mut chars = segment.chars();
		chars
			.next()
			.is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
			&& chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
	})
}
