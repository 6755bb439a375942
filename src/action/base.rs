//! Base action trait and implementation

use crate::error::Result;
use crate::escape::html_escape;
use crate::options::{Options, optional_str};
use std::fmt::{self, Debug};

/// Class carried by every built-in action link.
pub const ACTION_CLASS: &str = "tableAction";

/// Trait for row actions
///
/// Actions of a table share one trailing cell; each contributes a fragment of
/// that cell and, optionally, script appended after the widget initialization.
pub trait Action: Debug + Send + Sync {
	/// Returns the fragment placed inside the actions cell
	fn row_fragment(&self) -> String;

	/// Returns script appended after the widget initialization
	///
	/// Default: empty string
	fn script(&self) -> String {
		String::new()
	}
}

impl fmt::Display for dyn Action + '_ {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.row_fragment())
	}
}

/// A link rendered for every row
///
/// Options: `url` (default `#`, may contain Kendo template markers such as
/// `#: id #`), `text`, `title`, `class` and `icon`.
///
/// # Example
///
/// ```rust
/// use kendo_table::action::{Action, BaseAction};
/// use kendo_table::options::from_value;
/// use serde_json::json;
///
/// let action = BaseAction::new(from_value(json!({
///     "url": "/users/view/#: id #",
///     "text": "View",
/// })).unwrap()).unwrap();
///
/// assert_eq!(
///     action.row_fragment(),
///     r#"<a href="/users/view/#: id #" class="tableAction">View</a>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseAction {
	url: String,
	text: String,
	title: Option<String>,
	classes: Vec<String>,
	icon: Option<String>,
	attributes: Vec<(String, String)>,
}

impl BaseAction {
	/// Creates a link action from its options bag
	pub fn new(options: Options) -> Result<Self> {
		Self::build(&options, None, "")
	}

	/// Creates a link action carrying a type class
	pub(crate) fn typed(options: &Options, type_class: &str, default_text: &str) -> Result<Self> {
		Self::build(options, Some(type_class), default_text)
	}

	fn build(options: &Options, type_class: Option<&str>, default_text: &str) -> Result<Self> {
		let url = optional_str(options, "url")?
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| "#".to_string());
		let mut classes = vec![ACTION_CLASS.to_string()];
		classes.extend(type_class.map(str::to_string));
		classes.extend(optional_str(options, "class")?.filter(|c| !c.is_empty()));

		Ok(Self {
			url,
			text: optional_str(options, "text")?.unwrap_or_else(|| default_text.to_string()),
			title: optional_str(options, "title")?,
			classes,
			icon: optional_str(options, "icon")?,
			attributes: Vec::new(),
		})
	}

	/// Adds an extra attribute to the link
	pub(crate) fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attributes.push((name.to_string(), value.into()));
		self
	}

	/// Returns the link target
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Returns the CSS classes of the link
	pub fn classes(&self) -> &[String] {
		&self.classes
	}
}

impl Action for BaseAction {
	fn row_fragment(&self) -> String {
		let mut html = format!(
			"<a href=\"{}\" class=\"{}\"",
			html_escape(&self.url),
			html_escape(&self.classes.join(" "))
		);
		if let Some(title) = &self.title {
			html.push_str(&format!(" title=\"{}\"", html_escape(title)));
		}
		for (name, value) in &self.attributes {
			html.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
		}
		html.push('>');
		if let Some(icon) = &self.icon {
			html.push_str(&format!("<span class=\"{}\"></span>", html_escape(icon)));
		}
		html.push_str(&html_escape(&self.text));
		html.push_str("</a>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::from_value;
	use serde_json::json;

	#[test]
	fn test_default_link() {
		let action = BaseAction::new(Options::new()).unwrap();
		assert_eq!(action.url(), "#");
		assert_eq!(action.row_fragment(), r##"<a href="#" class="tableAction"></a>"##);
		assert_eq!(action.script(), "");
	}

	#[test]
	fn test_full_link() {
		let action = BaseAction::new(
			from_value(json!({
				"url": "/orders/#: id #/print",
				"text": "Print",
				"title": "Print \"order\"",
				"class": "print",
				"icon": "k-icon k-i-print",
			}))
			.unwrap(),
		)
		.unwrap();

		assert_eq!(
			action.row_fragment(),
			concat!(
				r#"<a href="/orders/#: id #/print" class="tableAction print" title="Print &quot;order&quot;">"#,
				r#"<span class="k-icon k-i-print"></span>Print</a>"#
			)
		);
	}

	#[test]
	fn test_text_is_escaped() {
		let action = BaseAction::new(from_value(json!({"text": "<b>x</b>"})).unwrap()).unwrap();
		assert!(action.row_fragment().contains("&lt;b&gt;x&lt;/b&gt;"));
	}
}
