// Pure table rendering function that depends only on TableRenderContext

use ratatui::{
    layout::{Alignment, Flex, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::ui::header_style::HeaderStyler;
use crate::ui::layout::{column_constraints, header_bottom_margin, header_height, TableLayout};
use crate::ui::render_context::{DragPreview, TableRenderContext};

pub const EMPTY_MESSAGE: &str = "No results.";

/// Render the table and return the geometry that was drawn, so header
/// regions can be registered for drag and drop.
pub fn render_table(
    f: &mut Frame,
    area: Rect,
    ctx: &TableRenderContext,
    styler: &HeaderStyler,
) -> TableLayout {
    let layout = TableLayout::compute(area, ctx);

    let title = if ctx.title.is_empty() {
        format!("{} rows", ctx.row_count())
    } else {
        format!("{} ({} rows)", ctx.title, ctx.row_count())
    };

    let table = Table::new(build_data_rows(ctx), column_constraints(ctx))
        .header(build_header_row(ctx, styler))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styler.border_style())
                .title(title),
        )
        .column_spacing(ctx.column_spacing)
        .flex(Flex::Start);

    f.render_widget(table, area);

    // Empty state spans the whole row
    if ctx.is_empty() && layout.body.height > 0 {
        let message = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(message, Rect { height: 1, ..layout.body });
    }

    if let Some(preview) = &ctx.drag_preview {
        render_drag_preview(f, preview, styler);
    }

    layout
}

fn build_header_row(ctx: &TableRenderContext, styler: &HeaderStyler) -> Row<'static> {
    let mut cells: Vec<Cell> = Vec::with_capacity(ctx.column_count() + 1);

    if ctx.show_row_numbers {
        cells.push(Cell::from("#").style(styler.header_style(Default::default(), 1.0)));
    }

    cells.extend(ctx.headers.iter().map(|header| {
        Cell::from(header.label.clone()).style(styler.header_style(header.state, header.opacity))
    }));

    Row::new(cells)
        .height(header_height())
        .bottom_margin(header_bottom_margin())
}

fn build_data_rows(ctx: &TableRenderContext) -> Vec<Row<'static>> {
    ctx.data_rows
        .iter()
        .enumerate()
        .map(|(row_idx, row_data)| {
            let mut cells: Vec<Cell> = Vec::with_capacity(row_data.len() + 1);
            if ctx.show_row_numbers {
                cells.push(
                    Cell::from((row_idx + 1).to_string())
                        .style(Style::default().fg(Color::DarkGray)),
                );
            }
            cells.extend(row_data.iter().map(|value| Cell::from(value.clone())));
            Row::new(cells)
        })
        .collect()
}

/// Floating label next to the pointer, kept inside the frame
fn render_drag_preview(f: &mut Frame, preview: &DragPreview, styler: &HeaderStyler) {
    let frame = f.area();
    let width = (preview.label.chars().count() as u16 + 2).min(frame.width);
    if width == 0 || frame.height == 0 {
        return;
    }

    let max_x = frame.x + frame.width - width;
    let x = preview.x.saturating_add(1).min(max_x);
    let y = preview.y.saturating_add(1).min(frame.y + frame.height - 1);
    let rect = Rect::new(x, y, width, 1);

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(format!(" {} ", preview.label)).style(styler.preview_style()),
        rect,
    );
}
