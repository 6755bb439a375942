//! Built-in edit and delete actions

use super::base::{ACTION_CLASS, Action, BaseAction};
use crate::error::Result;
use crate::js::json_string;
use crate::options::{Options, optional_str};

/// Namespaced click event used by the delete confirmation handler.
const DELETE_EVENT: &str = "click.kendoTableDelete";

/// Link to the edit page of a row
#[derive(Debug, Clone, PartialEq)]
pub struct EditAction {
	link: BaseAction,
}

impl EditAction {
	/// Creates an edit action from its options bag
	pub fn new(options: Options) -> Result<Self> {
		Ok(Self {
			link: BaseAction::typed(&options, "edit", "Edit")?,
		})
	}
}

impl Action for EditAction {
	fn row_fragment(&self) -> String {
		self.link.row_fragment()
	}
}

/// Link that deletes a row after the user confirms
///
/// The confirmation text comes from `confirm` (default `Are you sure?`) and is
/// carried in a `data-confirm` attribute. The script binds one delegated
/// handler; it is unbound first, so including the script more than once on a
/// page leaves a single handler.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteAction {
	link: BaseAction,
}

impl DeleteAction {
	/// Creates a delete action from its options bag
	pub fn new(options: Options) -> Result<Self> {
		let confirm =
			optional_str(&options, "confirm")?.unwrap_or_else(|| "Are you sure?".to_string());
		let link = BaseAction::typed(&options, "delete", "Delete")?
			.with_attribute("data-confirm", confirm);
		Ok(Self { link })
	}
}

impl Action for DeleteAction {
	fn row_fragment(&self) -> String {
		self.link.row_fragment()
	}

	fn script(&self) -> String {
		let selector = json_string(&format!("a.{}.delete", ACTION_CLASS));
		let event = json_string(DELETE_EVENT);
		format!(
			"$(document).off({event}, {selector}).on({event}, {selector}, function (e) {{ if (!confirm($(this).data(\"confirm\"))) {{ e.preventDefault(); }} }});"
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TableError;
	use crate::options::from_value;
	use serde_json::json;

	#[test]
	fn test_edit_and_delete_default_to_placeholder_url() {
		let edit = EditAction::new(Options::new()).unwrap();
		assert_eq!(
			edit.row_fragment(),
			r##"<a href="#" class="tableAction edit">Edit</a>"##
		);

		let delete = DeleteAction::new(from_value(json!({"url": ""})).unwrap()).unwrap();
		assert_eq!(
			delete.row_fragment(),
			r##"<a href="#" class="tableAction delete" data-confirm="Are you sure?">Delete</a>"##
		);
	}

	#[test]
	fn test_url_must_be_string() {
		let err = EditAction::new(from_value(json!({"url": 3})).unwrap()).unwrap_err();
		assert!(matches!(err, TableError::InvalidOptions(_)));
	}

	#[test]
	fn test_edit_fragment() {
		let action = EditAction::new(from_value(json!({"url": "/users/edit/#: id #"})).unwrap()).unwrap();
		assert_eq!(
			action.row_fragment(),
			r#"<a href="/users/edit/#: id #" class="tableAction edit">Edit</a>"#
		);
		assert_eq!(action.script(), "");
	}

	#[test]
	fn test_delete_fragment_and_script() {
		let action = DeleteAction::new(
			from_value(json!({"url": "/users/delete/#: id #", "confirm": "Delete user?"})).unwrap(),
		)
		.unwrap();

		assert_eq!(
			action.row_fragment(),
			r#"<a href="/users/delete/#: id #" class="tableAction delete" data-confirm="Delete user?">Delete</a>"#
		);
		assert_eq!(
			action.script(),
			r#"$(document).off("click.kendoTableDelete", "a.tableAction.delete").on("click.kendoTableDelete", "a.tableAction.delete", function (e) { if (!confirm($(this).data("confirm"))) { e.preventDefault(); } });"#
		);
	}
}
