//! Terminal presentation: layout, header styling, the ratatui renderer, the
//! interactive app and the plain-text classic output.

pub mod classic;
pub mod column_widths;
pub mod header_style;
pub mod layout;
pub mod render_context;
pub mod table_renderer;
pub mod tui_app;

pub use layout::TableLayout;
pub use tui_app::{run_tui, TableApp};
