//! Column types for grid tables

pub mod base;
pub mod typed;

pub use base::{BaseColumn, Column};
pub use typed::{BooleanColumn, FormattedColumn};
