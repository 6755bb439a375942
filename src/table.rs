//! Grid table builder

use crate::action::Action;
use crate::column::Column;
use crate::error::{Result, TableError};
use crate::escape::html_escape;
use crate::kendo::{DataSource, Grid, Model};
use crate::options::{Options, from_value};
use crate::registry::{DEFAULT_TYPE, TypeRegistry};
use crate::settings::TableSettings;
use serde_json::Value;
use std::sync::Arc;

/// Title used for columns without a header text.
pub const DEFAULT_TITLE: &str = "&nbsp;";

/// Opening of every row; the widget fills in the record uid.
pub const ROW_OPEN: &str = "<tr data-uid=\"#: uid #\">";

/// Closing of every row.
pub const ROW_CLOSE: &str = "</tr>";

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A Kendo UI grid described column by column
///
/// A table is configured with [`add_column`](Self::add_column),
/// [`add_action`](Self::add_action) and [`add_transport`](Self::add_transport),
/// then rendered with [`html`](Self::html) and [`script`](Self::script).
/// Rendering takes `&self` and can be repeated; the output only changes when
/// the configuration does.
///
/// ```mermaid
/// graph TD
///     T[Table] --> M[Model]
///     T --> D[DataSource]
///     T --> G[Grid]
///     T --> C[Columns]
///     T --> A[Actions]
///     D -->|schema| M
///     G -->|dataSource| D
///     C -->|model fields| M
///     C -->|column options| G
///     C -->|cells| R[Row template]
///     A -->|actions cell| R
///     R -->|rowTemplate| G
/// ```
///
/// # Example
///
/// ```rust
/// use kendo_table::Table;
/// use serde_json::json;
///
/// let mut table = Table::new("users");
/// table
///     .add_transport("read", json!({"url": "/users.json"}))?
///     .add_column("name", "Name")?
///     .add_column_with("age", "Age", Some("number"), json!(null))?
///     .add_action_with(Some("delete"), json!({"url": "/users/delete/#: id #"}))?;
///
/// assert_eq!(table.html(), r#"<div id="users"></div>"#);
/// assert!(table.script().starts_with(r##"$("#users").kendoGrid({"##));
/// # Ok::<(), kendo_table::TableError>(())
/// ```
#[derive(Debug)]
pub struct Table {
	id: String,
	settings: TableSettings,
	registry: Arc<TypeRegistry>,
	model: Model,
	data_source: DataSource,
	grid: Grid,
	columns: Vec<Box<dyn Column>>,
	actions: Vec<Box<dyn Action>>,
}

impl Table {
	/// Creates a table with default settings and the built-in types
	pub fn new(id: impl Into<String>) -> Self {
		Self::with_settings(id, TableSettings::default())
	}

	/// Creates a table with the given settings and the built-in types
	pub fn with_settings(id: impl Into<String>, settings: TableSettings) -> Self {
		Self::with_registry(id, settings, Arc::new(TypeRegistry::new()))
	}

	/// Creates a table resolving column and action types through `registry`
	pub fn with_registry(
		id: impl Into<String>,
		settings: TableSettings,
		registry: Arc<TypeRegistry>,
	) -> Self {
		let id = id.into();
		let model = Model::new(settings.id_field.as_str());
		let data_source = DataSource::new(&settings);

		let mut grid = Grid::new(format!("#{}", id));
		let mut sortable = Options::new();
		sortable.insert("allowUnsort".to_string(), Value::Bool(settings.allow_unsort));
		grid.set_sortable(sortable);

		Self {
			id,
			settings,
			registry,
			model,
			data_source,
			grid,
			columns: Vec::new(),
			actions: Vec::new(),
		}
	}

	/// Returns the DOM id of the table container
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the settings the table was created with
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Returns the client data model
	pub fn model(&self) -> &Model {
		&self.model
	}

	/// Returns the data source descriptor
	pub fn data_source(&self) -> &DataSource {
		&self.data_source
	}

	/// Returns the grid descriptor
	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	/// Returns the columns in insertion order
	pub fn columns(&self) -> &[Box<dyn Column>] {
		&self.columns
	}

	/// Returns the actions in insertion order
	pub fn actions(&self) -> &[Box<dyn Action>] {
		&self.actions
	}

	/// Registers a data source transport (`read`, `update`, `destroy`, ...)
	///
	/// Transports accumulate; adding the same kind again replaces it.
	pub fn add_transport(&mut self, kind: &str, options: Value) -> Result<&mut Self> {
		let options = from_value(options)?;
		tracing::debug!(table = %self.id, kind, "adding transport");
		self.data_source.add_transport(kind, options);
		Ok(self)
	}

	/// Adds a plain text column
	pub fn add_column(&mut self, field: &str, title: &str) -> Result<&mut Self> {
		self.add_column_with(field, title, None, Value::Null)
	}

	/// Adds a column of the given type
	///
	/// `type_name` defaults to `"base"`. `field` and `title` are merged into
	/// `options`, replacing any values already there.
	///
	/// # Errors
	///
	/// - [`TableError::InvalidType`] if the type cannot be resolved
	/// - [`TableError::MissingOption`] if `field` is empty
	/// - [`TableError::InvalidOptions`] if `options` is not an object, or a
	///   built-in column gets a `field` that is not an identifier path
	pub fn add_column_with(
		&mut self,
		field: &str,
		title: &str,
		type_name: Option<&str>,
		options: Value,
	) -> Result<&mut Self> {
		let constructor = self.registry.resolve_column(type_name)?;

		if field.is_empty() {
			return Err(TableError::MissingOption {
				option: "field",
				context: format!("column of table '{}'", self.id),
			});
		}

		let mut options = from_value(options)?;
		options.insert("field".to_string(), Value::String(field.to_string()));
		options.insert("title".to_string(), Value::String(title.to_string()));

		let column = constructor.build(options)?;

		tracing::debug!(
			table = %self.id,
			field,
			type_name = type_name.unwrap_or(DEFAULT_TYPE),
			"adding column"
		);
		if self.model.add_field(field, column.model_options()) {
			tracing::warn!(table = %self.id, field, "column field added more than once");
		}
		self.grid.add_column(column.column_options());
		self.columns.push(column);

		Ok(self)
	}

	/// Adds an action with no options
	pub fn add_action(&mut self, type_name: Option<&str>) -> Result<&mut Self> {
		self.add_action_with(type_name, Value::Null)
	}

	/// Adds an action of the given type
	///
	/// # Errors
	///
	/// - [`TableError::InvalidType`] if the type cannot be resolved
	/// - [`TableError::MissingOption`] if the action lacks a required option
	/// - [`TableError::InvalidOptions`] if `options` is not an object
	pub fn add_action_with(&mut self, type_name: Option<&str>, options: Value) -> Result<&mut Self> {
		let constructor = self.registry.resolve_action(type_name)?;
		let action = constructor.build(from_value(options)?)?;

		tracing::debug!(
			table = %self.id,
			type_name = type_name.unwrap_or(DEFAULT_TYPE),
			"adding action"
		);
		self.actions.push(action);

		Ok(self)
	}

	/// Sets an extra grid option such as `pageable` or `height`
	///
	/// Options the builder manages (`dataSource`, `sortable`, `columns`,
	/// `rowTemplate`) are left untouched.
	pub fn set_grid_option(&mut self, key: &str, value: Value) -> &mut Self {
		if !self.grid.set_option(key, value) {
			tracing::warn!(table = %self.id, key, "ignoring managed grid option");
		}
		self
	}

	/// Sets an extra data source option such as `pageSize`
	///
	/// Options the builder manages (`schema`, `transport` and the server
	/// flags) are left untouched.
	pub fn set_data_source_option(&mut self, key: &str, value: Value) -> &mut Self {
		if !self.data_source.set_option(key, value) {
			tracing::warn!(table = %self.id, key, "ignoring managed data source option");
		}
		self
	}

	/// Returns the container element the widget renders into
	pub fn html(&self) -> String {
		format!("<div id=\"{}\"></div>", html_escape(&self.id))
	}

	/// Assembles the row template
	///
	/// Cells follow column order. When the table has actions, one trailing
	/// cell holds all of them in insertion order.
	pub fn row_template(&self) -> String {
		let mut row = String::from(ROW_OPEN);

		for column in &self.columns {
			row.push_str(&column.row_fragment());
		}

		if !self.actions.is_empty() {
			row.push_str(&format!(
				"<td class=\"{}\">",
				html_escape(&self.settings.actions_class)
			));
			for action in &self.actions {
				row.push_str(&action.row_fragment());
			}
			row.push_str("</td>");
		}

		row.push_str(ROW_CLOSE);
		row
	}

	/// Returns the widget initialization script
	///
	/// The grid statement comes first, followed by the script of every column
	/// and then of every action, each in insertion order.
	pub fn script(&self) -> String {
		let row_template = self.row_template();
		let mut script = self
			.grid
			.to_js(self.data_source.to_js(&self.model), &row_template);

		for column in &self.columns {
			script.push_str(&column.script());
		}
		for action in &self.actions {
			script.push_str(&action.script());
		}

		script
	}
}
