//! Row actions for grid tables

pub mod base;
pub mod crud;

pub use base::{ACTION_CLASS, Action, BaseAction};
pub use crud::{DeleteAction, EditAction};
