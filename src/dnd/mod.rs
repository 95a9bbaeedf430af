//! Drag-and-drop for column headers: a small pointer-driven manager, the
//! per-header state machine and the glue that routes one into the other.

pub mod controller;
pub mod events;
pub mod interaction;
pub mod manager;

pub use controller::{DropOutcome, HeaderDragController, HeaderDragState, DRAGGING_OPACITY};
pub use events::{DndEvent, DragItem, DragSource, DropTarget, ItemType};
pub use interaction::{ColumnDragInteraction, InteractionOutcome};
pub use manager::DragDropManager;
