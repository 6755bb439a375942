//! Kendo UI widget descriptors
//!
//! [`Model`], [`DataSource`] and [`Grid`] hold the configuration the table
//! builder accumulates. Each renders itself into a [`JsValue`](crate::js::JsValue)
//! or a statement; the table composes them when producing its script.

pub mod data_source;
pub mod grid;
pub mod model;

pub use data_source::DataSource;
pub use grid::Grid;
pub use model::Model;
