use tracing::{debug, info};

use crate::error::TableResult;
use crate::table::column::ColumnId;
use crate::table::controller::TableController;
use crate::table::position::PositionIndexMap;
use crate::table::reorder::reorder_columns;

/// Opacity of a header while it is the active drag source
pub const DRAGGING_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderDragState {
    #[default]
    Idle,
    /// This header is the active drag source
    Dragging,
    /// A drag from another header is hovering over this one
    DropArmed,
}

/// Result of a committed drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub column: ColumnId,
    pub target: ColumnId,
    pub from: usize,
    pub to: usize,
}

impl DropOutcome {
    /// Dropping a column onto itself leaves the order as it was
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Drag state of one rendered header cell.
///
/// Holds nothing but transient interaction state; the order itself lives in
/// the [`TableController`].
#[derive(Debug, Clone)]
pub struct HeaderDragController {
    column_id: ColumnId,
    state: HeaderDragState,
}

impl HeaderDragController {
    pub fn new(column_id: ColumnId) -> Self {
        Self {
            column_id,
            state: HeaderDragState::Idle,
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    pub fn state(&self) -> HeaderDragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == HeaderDragState::Dragging
    }

    pub fn is_drop_armed(&self) -> bool {
        self.state == HeaderDragState::DropArmed
    }

    pub fn opacity(&self) -> f32 {
        if self.is_dragging() {
            DRAGGING_OPACITY
        } else {
            1.0
        }
    }

    pub fn on_drag_start(&mut self) {
        self.transition(HeaderDragState::Dragging);
    }

    pub fn on_drag_end(&mut self) {
        if self.state == HeaderDragState::Dragging {
            self.transition(HeaderDragState::Idle);
        }
    }

    pub fn on_drag_enter(&mut self, dragged: &ColumnId) {
        if dragged != &self.column_id && self.state == HeaderDragState::Idle {
            self.transition(HeaderDragState::DropArmed);
        }
    }

    pub fn on_drag_leave(&mut self) {
        if self.state == HeaderDragState::DropArmed {
            self.transition(HeaderDragState::Idle);
        }
    }

    /// Move `dragged` to this header's position and commit the new order.
    ///
    /// `positions` must come from the header order of the current render.
    /// Exactly one `set_order` happens on success, including when a column
    /// is dropped onto itself.
    pub fn on_drop<R>(
        &mut self,
        dragged: &ColumnId,
        positions: &PositionIndexMap,
        table: &mut TableController<R>,
    ) -> TableResult<DropOutcome> {
        self.on_drag_leave();

        let from = positions.position_of(dragged)?;
        let to = positions.position_of(&self.column_id)?;

        let reordered = reorder_columns(table.order(), from, to)?;
        table.set_order(reordered)?;

        info!(target: "dnd", "Moved column {} from {} to {} (onto {})", dragged, from, to, self.column_id);
        Ok(DropOutcome {
            column: dragged.clone(),
            target: self.column_id.clone(),
            from,
            to,
        })
    }

    fn transition(&mut self, next: HeaderDragState) {
        if self.state != next {
            debug!(target: "dnd", "Header {}: {:?} -> {:?}", self.column_id, self.state, next);
            self.state = next;
        }
    }
}
