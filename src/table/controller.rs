use tracing::info;

use crate::error::TableResult;
use crate::table::column::{ColumnDef, ColumnId};
use crate::table::instance::TableInstance;
use crate::table::model::{ColumnModel, OrderSubscriber, RedrawFlag};

/// Owns the column order and the rows of one table, and tells the view when
/// it has to redraw.
pub struct TableController<R> {
    model: ColumnModel<R>,
    rows: Vec<R>,
    initial_order: Vec<ColumnDef<R>>,
    redraw: RedrawFlag,
}

impl<R> TableController<R> {
    pub fn new(columns: Vec<ColumnDef<R>>, rows: Vec<R>) -> TableResult<Self> {
        let initial_order = columns.clone();
        let mut model = ColumnModel::new(columns)?;
        let redraw = RedrawFlag::new();
        model.subscribe(Box::new(redraw.clone()));
        // First frame always draws
        redraw.mark();

        Ok(Self {
            model,
            rows,
            initial_order,
            redraw,
        })
    }

    pub fn order(&self) -> &[ColumnDef<R>] {
        self.model.order()
    }

    pub fn set_order(&mut self, new_order: Vec<ColumnDef<R>>) -> TableResult<()> {
        self.model.set_order(new_order)
    }

    /// Put the columns back in the order the table was built with
    pub fn reset_order(&mut self) -> TableResult<()> {
        info!(target: "table", "Resetting column order");
        self.model.set_order(self.initial_order.clone())
    }

    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.model.ids()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn OrderSubscriber>) {
        self.model.subscribe(subscriber);
    }

    /// Number of committed order replacements
    pub fn mutation_count(&self) -> u64 {
        self.model.revision()
    }

    /// Derive headers and rows for one render pass
    pub fn instance(&self) -> TableInstance<'_, R> {
        TableInstance::new(&self.model, &self.rows)
    }

    pub fn redraw_flag(&self) -> &RedrawFlag {
        &self.redraw
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_set()
    }
}
