//! Kendo UI Grid builder
//!
//! This crate assembles the configuration of a Kendo UI Grid from a
//! declarative description: callers add columns, row actions and data source
//! transports, then take the HTML container and the initialization script.
//! Rendering, sorting, paging and filtering happen in the Kendo runtime.
//!
//! # Features
//!
//! - **Table Definition**: fluent builder over columns, actions and transports
//! - **Column Types**: `base`, `number`, `currency`, `date` and `boolean`
//! - **Row Actions**: `base`, `edit` and `delete` links in a shared actions cell
//! - **Custom Types**: caller-registered column and action factories
//! - **Settings**: table defaults loadable from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Table] --> B[TypeRegistry]
//!     B --> C[Column types]
//!     B --> D[Action types]
//!     A --> E[Model]
//!     A --> F[DataSource]
//!     A --> G[Grid]
//!     A --> H[Row template]
//!     G --> I[Initialization script]
//! ```
//!
//! # Example
//!
//! ```rust
//! use kendo_table::Table;
//! use serde_json::json;
//!
//! let mut table = Table::new("grid1");
//! table
//!     .add_column("name", "Name")?
//!     .add_column_with("age", "Age", Some("number"), json!(null))?
//!     .add_action_with(Some("delete"), json!({"url": "/people/delete/#: id #"}))?;
//!
//! assert_eq!(table.html(), r#"<div id="grid1"></div>"#);
//! assert!(table.row_template().contains(r#"<td class="tableActions">"#));
//! # Ok::<(), kendo_table::TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod column;
pub mod error;
pub mod escape;
pub mod js;
pub mod kendo;
pub mod options;
pub mod registry;
pub mod settings;
pub mod table;

// Re-exports for convenience
pub use action::Action;
pub use column::Column;
pub use error::{Result, TableError, TypeKind};
pub use options::Options;
pub use registry::TypeRegistry;
pub use settings::TableSettings;
pub use table::{DEFAULT_TITLE, Table};
