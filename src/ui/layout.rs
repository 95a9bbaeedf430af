//! Screen geometry of the table.
//!
//! Header regions double as drag sources and drop targets, so they are
//! computed with the same constraints, flex mode and spacing the `Table`
//! widget uses when it draws.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::table::column::ColumnId;
use crate::ui::render_context::TableRenderContext;

/// Width of the optional row number column
pub const ROW_NUMBER_WIDTH: u16 = 5;
const HEADER_HEIGHT: u16 = 1;
const HEADER_BOTTOM_MARGIN: u16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    /// Header cell regions in visual order
    pub header_cells: Vec<(ColumnId, Rect)>,
    /// Area below the header where rows (or the empty state) go
    pub body: Rect,
}

impl TableLayout {
    pub fn compute(area: Rect, ctx: &TableRenderContext) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return Self::default();
        }

        let constraints = column_constraints(ctx);
        let columns = Layout::horizontal(constraints)
            .flex(Flex::Start)
            .spacing(ctx.column_spacing)
            .split(Rect::new(inner.x, inner.y, inner.width, HEADER_HEIGHT));

        let skip = usize::from(ctx.show_row_numbers);
        let header_cells = ctx
            .headers
            .iter()
            .zip(columns.iter().skip(skip))
            .filter(|(_, rect)| rect.width > 0)
            .map(|(header, rect)| (header.column_id.clone(), *rect))
            .collect();

        let chrome = HEADER_HEIGHT + HEADER_BOTTOM_MARGIN;
        let body = Rect::new(
            inner.x,
            inner.y.saturating_add(chrome.min(inner.height)),
            inner.width,
            inner.height.saturating_sub(chrome),
        );

        Self { header_cells, body }
    }
}

/// Constraints shared by the layout and the table widget
pub fn column_constraints(ctx: &TableRenderContext) -> Vec<Constraint> {
    let mut widths = Vec::with_capacity(ctx.column_widths.len() + 1);
    if ctx.show_row_numbers {
        widths.push(Constraint::Length(ROW_NUMBER_WIDTH));
    }
    widths.extend(ctx.column_widths.iter().map(|&w| Constraint::Length(w)));
    widths
}

pub fn header_height() -> u16 {
    HEADER_HEIGHT
}

pub fn header_bottom_margin() -> u16 {
    HEADER_BOTTOM_MARGIN
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
