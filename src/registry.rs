//! Column and action type resolution
//!
//! Tables name column and action types with short strings. A name resolves in
//! two tiers:
//!
//! 1. factories registered by the caller, matched exactly;
//! 2. built-in types, matched case-insensitively.
//!
//! A missing name means `"base"`. Anything else is
//! [`TableError::InvalidType`].
//!
//! # Examples
//!
//! ```rust
//! use kendo_table::column::{BaseColumn, Column};
//! use kendo_table::registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_column("email", |options| {
//!         Ok(Box::new(BaseColumn::new(options)?) as Box<dyn Column>)
//!     })
//!     .unwrap();
//!
//! assert!(registry.resolve_column(Some("email")).unwrap().is_custom());
//! assert!(!registry.resolve_column(Some("Number")).unwrap().is_custom());
//! assert!(registry.resolve_column(Some("sparkline")).is_err());
//! ```

use crate::action::{Action, BaseAction, DeleteAction, EditAction};
use crate::column::{BaseColumn, BooleanColumn, Column, FormattedColumn};
use crate::error::{Result, TableError, TypeKind};
use crate::options::Options;
use std::collections::HashMap;
use std::fmt;

/// Type name used when none is given.
pub const DEFAULT_TYPE: &str = "base";

/// Caller-supplied factory producing values of `T`.
pub type Factory<T> = Box<dyn Fn(Options) -> Result<Box<T>> + Send + Sync>;

/// Constructor of a built-in type.
pub type Builtin<T> = fn(Options) -> Result<Box<T>>;

/// Custom column factory.
pub type ColumnFactory = Factory<dyn Column>;

/// Custom action factory.
pub type ActionFactory = Factory<dyn Action>;

const BUILTIN_COLUMNS: &[(&str, Builtin<dyn Column>)] = &[
	("base", base_column),
	("number", number_column),
	("currency", currency_column),
	("date", date_column),
	("boolean", boolean_column),
];

const BUILTIN_ACTIONS: &[(&str, Builtin<dyn Action>)] = &[
	("base", base_action),
	("edit", edit_action),
	("delete", delete_action),
];

fn base_column(options: Options) -> Result<Box<dyn Column>> {
	Ok(Box::new(BaseColumn::new(options)?))
}

fn number_column(options: Options) -> Result<Box<dyn Column>> {
	Ok(Box::new(FormattedColumn::number(options)?))
}

fn currency_column(options: Options) -> Result<Box<dyn Column>> {
	Ok(Box::new(FormattedColumn::currency(options)?))
}

fn date_column(options: Options) -> Result<Box<dyn Column>> {
	Ok(Box::new(FormattedColumn::date(options)?))
}

fn boolean_column(options: Options) -> Result<Box<dyn Column>> {
	Ok(Box::new(BooleanColumn::new(options)?))
}

fn base_action(options: Options) -> Result<Box<dyn Action>> {
	Ok(Box::new(BaseAction::new(options)?))
}

fn edit_action(options: Options) -> Result<Box<dyn Action>> {
	Ok(Box::new(EditAction::new(options)?))
}

fn delete_action(options: Options) -> Result<Box<dyn Action>> {
	Ok(Box::new(DeleteAction::new(options)?))
}

/// A resolved constructor
pub enum Constructor<'a, T: ?Sized> {
	/// A built-in type.
	Builtin(Builtin<T>),
	/// A factory registered by the caller.
	Custom(&'a (dyn Fn(Options) -> Result<Box<T>> + Send + Sync)),
}

impl<T: ?Sized> Constructor<'_, T> {
	/// Builds an instance from its options bag
	pub fn build(&self, options: Options) -> Result<Box<T>> {
		match self {
			Self::Builtin(build) => build(options),
			Self::Custom(build) => build(options),
		}
	}

	/// Returns whether the constructor was registered by the caller
	pub fn is_custom(&self) -> bool {
		matches!(self, Self::Custom(_))
	}
}

impl<T: ?Sized> fmt::Debug for Constructor<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Builtin(_) => f.write_str("Constructor::Builtin"),
			Self::Custom(_) => f.write_str("Constructor::Custom"),
		}
	}
}

/// Factories of one kind: custom ones by exact name, built-ins by short name
struct Factories<T: ?Sized + 'static> {
	kind: TypeKind,
	custom: HashMap<String, Factory<T>>,
	builtins: &'static [(&'static str, Builtin<T>)],
}

impl<T: ?Sized + 'static> Factories<T> {
	fn new(kind: TypeKind, builtins: &'static [(&'static str, Builtin<T>)]) -> Self {
		Self {
			kind,
			custom: HashMap::new(),
			builtins,
		}
	}

	fn register(&mut self, name: &str, factory: Factory<T>) -> Result<()> {
		if name.is_empty() {
			return Err(self.invalid(name));
		}
		if self.custom.contains_key(name) {
			return Err(TableError::AlreadyRegistered {
				kind: self.kind,
				name: name.to_string(),
			});
		}
		self.custom.insert(name.to_string(), factory);
		Ok(())
	}

	fn builtin(&self, name: &str) -> Option<Builtin<T>> {
		self.builtins
			.iter()
			.find(|(builtin, _)| builtin.eq_ignore_ascii_case(name))
			.map(|(_, build)| *build)
	}

	fn resolve(&self, type_name: Option<&str>) -> Result<Constructor<'_, T>> {
		let Some(name) = type_name else {
			return self
				.builtin(DEFAULT_TYPE)
				.map(Constructor::Builtin)
				.ok_or_else(|| self.invalid(DEFAULT_TYPE));
		};

		if let Some(factory) = self.custom.get(name) {
			tracing::debug!(kind = %self.kind, name, "resolved custom type");
			return Ok(Constructor::Custom(factory.as_ref()));
		}

		match self.builtin(name) {
			Some(build) => Ok(Constructor::Builtin(build)),
			None => Err(self.invalid(name)),
		}
	}

	fn invalid(&self, name: &str) -> TableError {
		TableError::InvalidType {
			kind: self.kind,
			name: name.to_string(),
		}
	}

	fn names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.custom.keys().cloned().collect();
		names.sort();
		names
	}
}

/// Registry of column and action types available to tables
///
/// A registry is read-only once built and can be shared between tables
/// through an `Arc`.
pub struct TypeRegistry {
	columns: Factories<dyn Column>,
	actions: Factories<dyn Action>,
}

impl TypeRegistry {
	/// Creates a registry holding only the built-in types
	pub fn new() -> Self {
		Self {
			columns: Factories::new(TypeKind::Column, BUILTIN_COLUMNS),
			actions: Factories::new(TypeKind::Action, BUILTIN_ACTIONS),
		}
	}

	/// Registers a custom column type
	///
	/// Custom names take precedence over built-in names. Registering a name
	/// twice fails with [`TableError::AlreadyRegistered`].
	pub fn register_column<F>(&mut self, name: &str, factory: F) -> Result<()>
	where
		F: Fn(Options) -> Result<Box<dyn Column>> + Send + Sync + 'static,
	{
		self.columns.register(name, Box::new(factory))
	}

	/// Registers a custom action type
	pub fn register_action<F>(&mut self, name: &str, factory: F) -> Result<()>
	where
		F: Fn(Options) -> Result<Box<dyn Action>> + Send + Sync + 'static,
	{
		self.actions.register(name, Box::new(factory))
	}

	/// Resolves a column type name
	pub fn resolve_column(&self, type_name: Option<&str>) -> Result<Constructor<'_, dyn Column>> {
		self.columns.resolve(type_name)
	}

	/// Resolves an action type name
	pub fn resolve_action(&self, type_name: Option<&str>) -> Result<Constructor<'_, dyn Action>> {
		self.actions.resolve(type_name)
	}

	/// Returns the custom column type names, sorted
	pub fn custom_columns(&self) -> Vec<String> {
		self.columns.names()
	}

	/// Returns the custom action type names, sorted
	pub fn custom_actions(&self) -> Vec<String> {
		self.actions.names()
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("custom_columns", &self.custom_columns())
			.field("custom_actions", &self.custom_actions())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::from_value;
	use rstest::rstest;
	use serde_json::json;

	fn column_options() -> Options {
		from_value(json!({"field": "age", "title": "Age"})).unwrap()
	}

	#[rstest]
	#[case(None, "<td>#: age #</td>")]
	#[case(Some("base"), "<td>#: age #</td>")]
	#[case(Some("number"), r#"<td class="number">#: kendo.toString(age, "n") #</td>"#)]
	#[case(Some("Number"), r#"<td class="number">#: kendo.toString(age, "n") #</td>"#)]
	#[case(Some("CURRENCY"), r#"<td class="currency">#: kendo.toString(age, "c") #</td>"#)]
	#[case(Some("date"), r#"<td class="date">#: kendo.toString(age, "d") #</td>"#)]
	#[case(Some("boolean"), r#"<td class="boolean">#: age ? "Yes" : "No" #</td>"#)]
	fn test_builtin_columns(#[case] type_name: Option<&str>, #[case] fragment: &str) {
		let registry = TypeRegistry::new();
		let constructor = registry.resolve_column(type_name).unwrap();
		assert!(!constructor.is_custom());
		assert_eq!(constructor.build(column_options()).unwrap().row_fragment(), fragment);
	}

	#[rstest]
	#[case(None)]
	#[case(Some("base"))]
	#[case(Some("Edit"))]
	#[case(Some("delete"))]
	fn test_builtin_actions_resolve(#[case] type_name: Option<&str>) {
		let registry = TypeRegistry::new();
		assert!(registry.resolve_action(type_name).is_ok());
	}

	#[test]
	fn test_unknown_type_is_invalid() {
		let registry = TypeRegistry::new();
		let err = registry.resolve_column(Some("unknown-type")).unwrap_err();
		assert!(matches!(
			err,
			TableError::InvalidType {
				kind: TypeKind::Column,
				ref name,
			} if name == "unknown-type"
		));

		let err = registry.resolve_action(Some("archive")).unwrap_err();
		assert_eq!(err.to_string(), "invalid action type: archive");
	}

	#[test]
	fn test_custom_shadows_builtin() {
		let mut registry = TypeRegistry::new();
		registry
			.register_column("number", |options| {
				Ok(Box::new(BaseColumn::new(options)?) as Box<dyn Column>)
			})
			.unwrap();

		let constructor = registry.resolve_column(Some("number")).unwrap();
		assert!(constructor.is_custom());
		assert_eq!(
			constructor.build(column_options()).unwrap().row_fragment(),
			"<td>#: age #</td>"
		);

		// Custom names match exactly; other spellings still reach the built-in.
		assert!(!registry.resolve_column(Some("Number")).unwrap().is_custom());
	}

	#[test]
	fn test_none_ignores_custom_base() {
		let mut registry = TypeRegistry::new();
		registry
			.register_action("base", |_| Err(TableError::InvalidOptions("custom".to_string())))
			.unwrap();

		assert!(!registry.resolve_action(None).unwrap().is_custom());
		assert!(registry.resolve_action(Some("base")).unwrap().is_custom());
	}

	#[test]
	fn test_duplicate_registration_fails() {
		let mut registry = TypeRegistry::new();
		let factory = |options: Options| -> Result<Box<dyn Action>> {
			Ok(Box::new(BaseAction::new(options)?))
		};
		registry.register_action("view", factory).unwrap();

		let err = registry.register_action("view", factory).unwrap_err();
		assert!(matches!(
			err,
			TableError::AlreadyRegistered {
				kind: TypeKind::Action,
				..
			}
		));
		assert_eq!(registry.custom_actions(), vec!["view".to_string()]);
	}
}
