//! Table builder error types.

use thiserror::Error;

/// Result type for table builder operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// The kind of pluggable type being resolved or registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
	/// A grid column.
	Column,
	/// A row action.
	Action,
}

impl std::fmt::Display for TypeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Column => write!(f, "column"),
			Self::Action => write!(f, "action"),
		}
	}
}

/// Table builder errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// The requested column or action type is neither registered nor built in.
	#[error("invalid {kind} type: {name}")]
	InvalidType {
		/// Whether a column or an action was requested.
		kind: TypeKind,
		/// The requested type name.
		name: String,
	},

	/// A required construction option is absent or empty.
	#[error("missing required option '{option}' for {context}")]
	MissingOption {
		/// Option key.
		option: &'static str,
		/// What was being constructed.
		context: String,
	},

	/// The options bag is malformed.
	#[error("invalid options: {0}")]
	InvalidOptions(String),

	/// A custom type name was registered twice.
	#[error("{kind} type already registered: {name}")]
	AlreadyRegistered {
		/// Whether a column or an action was registered.
		kind: TypeKind,
		/// The duplicated type name.
		name: String,
	},

	/// Settings could not be parsed.
	#[error("configuration error: {0}")]
	Config(String),

	/// IO error while reading settings.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for TableError {
	fn from(err: toml::de::Error) -> Self {
		Self::Config(err.to_string())
	}
}
