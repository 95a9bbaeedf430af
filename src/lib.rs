//! Data table whose columns can be reordered by dragging their headers.
//!
//! The column order is the only state a drop changes; rows are never touched
//! and each cell keeps reading the same field through its column accessor.

pub mod config;
pub mod data;
pub mod dnd;
pub mod error;
pub mod logging;
pub mod table;
pub mod ui;

pub use error::{TableError, TableResult};
