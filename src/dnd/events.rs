use std::fmt;

use ratatui::layout::Rect;

use crate::table::column::ColumnId;

/// Tag that decides which drop targets accept which drag items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemType(&'static str);

impl ItemType {
    pub const COLUMN: ItemType = ItemType("column");

    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Payload carried for the whole duration of a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    pub item_type: ItemType,
    pub id: ColumnId,
}

impl DragItem {
    pub fn column(id: ColumnId) -> Self {
        Self {
            item_type: ItemType::COLUMN,
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub id: ColumnId,
    pub item: DragItem,
    pub region: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub id: ColumnId,
    pub accept: ItemType,
    pub region: Rect,
}

/// Notifications produced by the drag-and-drop manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DndEvent {
    DragStart { source: ColumnId, item: DragItem },
    DragEnter { target: ColumnId, item: DragItem },
    DragLeave { target: ColumnId, item: DragItem },
    Drop { target: ColumnId, item: DragItem },
    /// Always the last event of a drag; `dropped` is false when the pointer
    /// was released outside every accepting target or the drag was cancelled
    DragEnd {
        source: ColumnId,
        item: DragItem,
        dropped: bool,
    },
}

pub(crate) fn region_contains(region: &Rect, x: u16, y: u16) -> bool {
    x >= region.x
        && y >= region.y
        && (x as u32) < region.x as u32 + region.width as u32
        && (y as u32) < region.y as u32 + region.height as u32
}
