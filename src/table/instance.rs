//! Per-render derivation of headers and rows from the current column order.
//!
//! A `TableInstance` is built for one render pass and thrown away afterwards;
//! nothing derived here outlives the order it was built from.

use crate::table::column::{CellContext, ColumnId};
use crate::table::model::ColumnModel;

/// One header cell of a header group
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub id: String,
    pub column_id: ColumnId,
    /// Visual position within the group
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderGroup {
    pub id: String,
    pub headers: Vec<Header>,
}

/// One rendered body cell, bound to its column through the accessor
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: String,
    pub column_id: ColumnId,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Row<'a, R> {
    pub id: String,
    pub index: usize,
    pub original: &'a R,
    cells: Vec<Cell>,
}

impl<'a, R> Row<'a, R> {
    /// Cells in the current column order
    pub fn visible_cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, column_id: &ColumnId) -> Option<&Cell> {
        self.cells.iter().find(|c| &c.column_id == column_id)
    }
}

#[derive(Debug, Clone)]
pub struct RowModel<'a, R> {
    pub rows: Vec<Row<'a, R>>,
}

impl<'a, R> RowModel<'a, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

pub struct TableInstance<'a, R> {
    model: &'a ColumnModel<R>,
    data: &'a [R],
}

impl<'a, R> TableInstance<'a, R> {
    pub fn new(model: &'a ColumnModel<R>, data: &'a [R]) -> Self {
        Self { model, data }
    }

    /// Flat tables have a single header group
    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        let headers = self
            .model
            .order()
            .iter()
            .enumerate()
            .map(|(index, column)| Header {
                id: column.id().to_string(),
                column_id: column.id().clone(),
                index,
                label: column.render_header(index),
            })
            .collect();

        vec![HeaderGroup {
            id: "0".to_string(),
            headers,
        }]
    }

    /// Headers of the (single) group, in current order
    pub fn headers(&self) -> Vec<Header> {
        self.header_groups()
            .into_iter()
            .next()
            .map(|group| group.headers)
            .unwrap_or_default()
    }

    pub fn row_model(&self) -> RowModel<'a, R> {
        let model = self.model;
        let rows = self
            .data
            .iter()
            .enumerate()
            .map(|(index, original)| {
                let row_id = index.to_string();
                let cells = model
                    .order()
                    .iter()
                    .map(|column| {
                        let value = column.value(original);
                        let ctx = CellContext {
                            row: original,
                            row_index: index,
                            column_id: column.id(),
                            value: &value,
                        };
                        Cell {
                            id: format!("{}_{}", row_id, column.id()),
                            column_id: column.id().clone(),
                            text: column.cell_renderer().render(&ctx),
                        }
                    })
                    .collect();
                Row {
                    id: row_id,
                    index,
                    original,
                    cells,
                }
            })
            .collect();

        RowModel { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::ColumnDef;

    struct Pair {
        left: &'static str,
        right: i64,
    }

    fn model() -> ColumnModel<Pair> {
        ColumnModel::new(vec![
            ColumnDef::accessor("left", |p: &Pair| p.left.into()).header("Left"),
            ColumnDef::accessor("right", |p: &Pair| p.right.into()).header("Right"),
        ])
        .unwrap()
    }

    #[test]
    fn test_headers_follow_model_order() {
        let mut model = model();
        let data: Vec<Pair> = Vec::new();

        let labels: Vec<String> = TableInstance::new(&model, &data)
            .headers()
            .into_iter()
            .map(|h| h.label)
            .collect();
        assert_eq!(labels, vec!["Left", "Right"]);

        let swapped: Vec<_> = model.order().iter().rev().cloned().collect();
        model.set_order(swapped).unwrap();

        let headers = TableInstance::new(&model, &data).headers();
        assert_eq!(headers[0].column_id, "right");
        assert_eq!(headers[0].index, 0);
        assert_eq!(headers[1].label, "Left");
    }

    #[test]
    fn test_row_cells_bound_by_accessor() {
        let model = model();
        let data = vec![Pair { left: "x", right: 7 }];

        let rows = TableInstance::new(&model, &data).row_model();
        assert_eq!(rows.len(), 1);

        let row = &rows.rows[0];
        assert_eq!(row.id, "0");
        let texts: Vec<&str> = row.visible_cells().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "7"]);
        assert_eq!(row.cell(&"right".into()).map(|c| c.id.as_str()), Some("0_right"));
    }
}
