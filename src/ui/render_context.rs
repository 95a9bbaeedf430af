// Snapshot of everything the table renderer draws in one frame

use crate::dnd::controller::HeaderDragState;
use crate::dnd::interaction::ColumnDragInteraction;
use crate::dnd::manager::DragDropManager;
use crate::table::column::ColumnId;
use crate::table::instance::{Header, RowModel};
use crate::ui::column_widths::calculate_column_widths;

/// One header cell as it should be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub column_id: ColumnId,
    pub label: String,
    pub state: HeaderDragState,
    pub opacity: f32,
}

/// Floating label that follows the pointer during a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPreview {
    pub label: String,
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone)]
pub struct TableRenderContext {
    // ========== Columns ==========
    /// Headers in visual order
    pub headers: Vec<HeaderView>,

    /// Column widths in visual order (matching headers)
    pub column_widths: Vec<u16>,

    // ========== Rows ==========
    /// Cell text, outer vec is rows, inner vec follows header order
    pub data_rows: Vec<Vec<String>>,

    // ========== Display ==========
    pub title: String,
    pub show_row_numbers: bool,
    pub column_spacing: u16,
    pub drag_preview: Option<DragPreview>,
}

impl TableRenderContext {
    pub fn row_count(&self) -> usize {
        self.data_rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_rows.is_empty()
    }
}

/// Builder for TableRenderContext
pub struct TableRenderContextBuilder {
    context: TableRenderContext,
    handle: &'static str,
}

impl Default for TableRenderContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderContextBuilder {
    pub fn new() -> Self {
        Self {
            context: TableRenderContext {
                headers: Vec::new(),
                column_widths: Vec::new(),
                data_rows: Vec::new(),
                title: String::new(),
                show_row_numbers: false,
                column_spacing: 1,
                drag_preview: None,
            },
            handle: "",
        }
    }

    /// Prefix every header label with a drag handle
    pub fn handle(mut self, handle: &'static str) -> Self {
        self.handle = handle;
        self
    }

    pub fn headers(mut self, headers: &[Header], interaction: &ColumnDragInteraction) -> Self {
        self.context.headers = headers
            .iter()
            .map(|header| {
                let controller = interaction.controller(&header.column_id);
                HeaderView {
                    column_id: header.column_id.clone(),
                    label: header.label.clone(),
                    state: controller.map(|c| c.state()).unwrap_or_default(),
                    opacity: controller.map(|c| c.opacity()).unwrap_or(1.0),
                }
            })
            .collect();
        self
    }

    pub fn rows<R>(mut self, row_model: &RowModel<'_, R>) -> Self {
        self.context.data_rows = row_model
            .rows
            .iter()
            .map(|row| row.visible_cells().iter().map(|c| c.text.clone()).collect())
            .collect();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.context.title = title.into();
        self
    }

    pub fn display_options(mut self, show_row_numbers: bool, column_spacing: u16) -> Self {
        self.context.show_row_numbers = show_row_numbers;
        self.context.column_spacing = column_spacing;
        self
    }

    /// Show a preview of the dragged header at the pointer, if a drag is active
    pub fn drag_preview(mut self, dnd: &DragDropManager, enabled: bool) -> Self {
        if !enabled {
            return self;
        }
        self.context.drag_preview = match (dnd.dragged_item(), dnd.pointer()) {
            (Some(item), Some((x, y))) => self
                .context
                .headers
                .iter()
                .find(|h| h.column_id == item.id)
                .map(|h| DragPreview {
                    label: format!("{}{}", self.handle, h.label),
                    x,
                    y,
                }),
            _ => None,
        };
        self
    }

    pub fn build(mut self) -> TableRenderContext {
        let handle = self.handle;
        for header in &mut self.context.headers {
            header.label = format!("{}{}", handle, header.label);
        }
        let labels: Vec<String> = self.context.headers.iter().map(|h| h.label.clone()).collect();
        self.context.column_widths = calculate_column_widths(&labels, &self.context.data_rows);
        self.context
    }
}
