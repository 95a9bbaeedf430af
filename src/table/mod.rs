//! Headless table: column definitions, the authoritative column order and the
//! per-render derivation of headers and rows.

pub mod column;
pub mod controller;
pub mod instance;
pub mod model;
pub mod position;
pub mod reorder;

pub use column::{CellValue, ColumnDef, ColumnId};
pub use controller::TableController;
pub use instance::{Header, HeaderGroup, TableInstance};
pub use model::{ColumnModel, OrderSubscriber, RedrawFlag};
pub use position::PositionIndexMap;
pub use reorder::reorder_columns;
