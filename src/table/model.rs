use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, info};

use crate::error::{TableError, TableResult};
use crate::table::column::{ColumnDef, ColumnId};

/// Components that need to know when the column order was replaced
pub trait OrderSubscriber {
    /// Called after every successful `set_order`
    fn on_order_changed(&mut self, order: &[ColumnId], revision: u64);

    /// Subscriber name for debugging
    fn name(&self) -> &str;
}

/// Render trigger shared between the model and whoever draws the table
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag {
    dirty: Rc<Cell<bool>>,
}

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw was requested and clears the request
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn is_set(&self) -> bool {
        self.dirty.get()
    }
}

impl OrderSubscriber for RedrawFlag {
    fn on_order_changed(&mut self, _order: &[ColumnId], _revision: u64) {
        self.mark();
    }

    fn name(&self) -> &str {
        "RedrawFlag"
    }
}

/// Authoritative column order. The only mutation is whole-sequence
/// replacement through [`ColumnModel::set_order`].
pub struct ColumnModel<R> {
    columns: Vec<ColumnDef<R>>,
    revision: u64,
    subscribers: Vec<Box<dyn OrderSubscriber>>,
}

impl<R> ColumnModel<R> {
    pub fn new(columns: Vec<ColumnDef<R>>) -> TableResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.id()) {
                return Err(TableError::DuplicateColumn(column.id().clone()));
            }
        }

        Ok(Self {
            columns,
            revision: 0,
            subscribers: Vec::new(),
        })
    }

    /// Current order, by reference
    pub fn order(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of successful `set_order` calls so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn OrderSubscriber>) {
        info!(target: "table", "ColumnModel: adding subscriber {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    /// Replace the whole order. `new_order` must hold exactly the current
    /// identities; anything else is rejected and the order is left as it was.
    pub fn set_order(&mut self, new_order: Vec<ColumnDef<R>>) -> TableResult<()> {
        self.check_permutation(&new_order)?;

        self.columns = new_order;
        self.revision += 1;

        let ids = self.ids();
        debug!(target: "table", "Column order replaced (revision {}): {:?}", self.revision, ids);
        for subscriber in &mut self.subscribers {
            subscriber.on_order_changed(&ids, self.revision);
        }
        Ok(())
    }

    fn check_permutation(&self, new_order: &[ColumnDef<R>]) -> TableResult<()> {
        if new_order.len() != self.columns.len() {
            return Err(TableError::NotAPermutation {
                reason: format!(
                    "expected {} columns, got {}",
                    self.columns.len(),
                    new_order.len()
                ),
            });
        }

        let current: HashSet<&ColumnId> = self.columns.iter().map(|c| c.id()).collect();
        let mut seen = HashSet::with_capacity(new_order.len());
        for column in new_order {
            if !current.contains(column.id()) {
                return Err(TableError::NotAPermutation {
                    reason: format!("column '{}' is not part of this table", column.id()),
                });
            }
            if !seen.insert(column.id()) {
                return Err(TableError::NotAPermutation {
                    reason: format!("column '{}' appears more than once", column.id()),
                });
            }
        }
        Ok(())
    }
}
