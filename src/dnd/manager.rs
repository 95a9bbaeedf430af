use tracing::{debug, trace, warn};

use crate::dnd::events::{region_contains, DndEvent, DragItem, DragSource, DropTarget};
use crate::table::column::ColumnId;

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragPhase {
    Idle,
    /// Button is down on a source but the pointer has not moved yet
    Pressed {
        source: ColumnId,
        item: DragItem,
        origin: (u16, u16),
    },
    Dragging {
        source: ColumnId,
        item: DragItem,
        hovered: Option<ColumnId>,
        pointer: (u16, u16),
    },
}

/// Turns raw pointer input into drag-and-drop notifications.
///
/// Sources and targets are registered by the render pass and replaced on
/// every render. At most one drag is in flight at a time.
#[derive(Debug)]
pub struct DragDropManager {
    sources: Vec<DragSource>,
    targets: Vec<DropTarget>,
    phase: DragPhase,
}

impl Default for DragDropManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DragDropManager {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            targets: Vec::new(),
            phase: DragPhase::Idle,
        }
    }

    /// Drop all registrations ahead of a new render pass
    pub fn begin_registration(&mut self) {
        self.sources.clear();
        self.targets.clear();
    }

    pub fn register_source(&mut self, source: DragSource) {
        self.sources.push(source);
    }

    pub fn register_target(&mut self, target: DropTarget) {
        self.targets.push(target);
    }

    pub fn sources(&self) -> &[DragSource] {
        &self.sources
    }

    pub fn targets(&self) -> &[DropTarget] {
        &self.targets
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The item being dragged, once the drag has actually started
    pub fn dragged_item(&self) -> Option<&DragItem> {
        match &self.phase {
            DragPhase::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn hovered_target(&self) -> Option<&ColumnId> {
        match &self.phase {
            DragPhase::Dragging { hovered, .. } => hovered.as_ref(),
            _ => None,
        }
    }

    /// Last pointer position of the active drag
    pub fn pointer(&self) -> Option<(u16, u16)> {
        match &self.phase {
            DragPhase::Dragging { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, x: u16, y: u16) -> Vec<DndEvent> {
        match &self.phase {
            DragPhase::Dragging { .. } => {
                warn!(target: "dnd", "Pointer down at ({}, {}) while a drag is in flight, ignoring", x, y);
                return Vec::new();
            }
            // The release of the earlier press never arrived
            DragPhase::Pressed { source, .. } => {
                debug!(target: "dnd", "Discarding stale press on {}", source);
                self.phase = DragPhase::Idle;
            }
            DragPhase::Idle => {}
        }

        // Last registered is drawn on top
        if let Some(source) = self
            .sources
            .iter()
            .rev()
            .find(|s| region_contains(&s.region, x, y))
        {
            debug!(target: "dnd", "Pressed on source {} at ({}, {})", source.id, x, y);
            self.phase = DragPhase::Pressed {
                source: source.id.clone(),
                item: source.item.clone(),
                origin: (x, y),
            };
        }
        Vec::new()
    }

    pub fn pointer_move(&mut self, x: u16, y: u16) -> Vec<DndEvent> {
        let mut events = Vec::new();

        let started = match &self.phase {
            DragPhase::Pressed { origin, .. } if *origin == (x, y) => return events,
            DragPhase::Pressed { source, item, .. } => Some((source.clone(), item.clone())),
            _ => None,
        };

        if let Some((source, item)) = started {
            debug!(target: "dnd", "Drag started on {}", source);
            events.push(DndEvent::DragStart {
                source: source.clone(),
                item: item.clone(),
            });
            self.phase = DragPhase::Dragging {
                source,
                item,
                hovered: None,
                pointer: (x, y),
            };
        }

        if self.is_dragging() {
            self.update_hover(x, y, &mut events);
        }
        events
    }

    pub fn pointer_up(&mut self, x: u16, y: u16) -> Vec<DndEvent> {
        let mut events = Vec::new();
        if !self.is_dragging() {
            if let DragPhase::Pressed { source, .. } = &self.phase {
                trace!(target: "dnd", "Released {} without moving, no drag", source);
            }
            self.phase = DragPhase::Idle;
            return events;
        }

        self.update_hover(x, y, &mut events);

        if let DragPhase::Dragging {
            source,
            item,
            hovered,
            ..
        } = std::mem::replace(&mut self.phase, DragPhase::Idle)
        {
            let dropped = hovered.is_some();
            if let Some(target) = hovered {
                debug!(target: "dnd", "Dropped {} on {}", item.id, target);
                events.push(DndEvent::Drop {
                    target,
                    item: item.clone(),
                });
            } else {
                debug!(target: "dnd", "Released {} outside every drop target", item.id);
            }
            events.push(DndEvent::DragEnd {
                source,
                item,
                dropped,
            });
        }
        events
    }

    /// Abort the current drag without dropping
    pub fn cancel(&mut self) -> Vec<DndEvent> {
        let mut events = Vec::new();
        match std::mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Dragging {
                source,
                item,
                hovered,
                ..
            } => {
                debug!(target: "dnd", "Drag of {} cancelled", item.id);
                if let Some(target) = hovered {
                    events.push(DndEvent::DragLeave {
                        target,
                        item: item.clone(),
                    });
                }
                events.push(DndEvent::DragEnd {
                    source,
                    item,
                    dropped: false,
                });
            }
            DragPhase::Pressed { .. } | DragPhase::Idle => {}
        }
        events
    }

    fn target_at(&self, item: &DragItem, x: u16, y: u16) -> Option<ColumnId> {
        self.targets
            .iter()
            .rev()
            .find(|t| t.accept == item.item_type && region_contains(&t.region, x, y))
            .map(|t| t.id.clone())
    }

    fn update_hover(&mut self, x: u16, y: u16, events: &mut Vec<DndEvent>) {
        let next = match &self.phase {
            DragPhase::Dragging { item, .. } => self.target_at(item, x, y),
            _ => return,
        };

        if let DragPhase::Dragging {
            item,
            hovered,
            pointer,
            ..
        } = &mut self.phase
        {
            *pointer = (x, y);
            if *hovered == next {
                return;
            }
            if let Some(previous) = hovered.take() {
                trace!(target: "dnd", "Drag left {}", previous);
                events.push(DndEvent::DragLeave {
                    target: previous,
                    item: item.clone(),
                });
            }
            if let Some(entered) = next {
                trace!(target: "dnd", "Drag entered {}", entered);
                events.push(DndEvent::DragEnter {
                    target: entered.clone(),
                    item: item.clone(),
                });
                *hovered = Some(entered);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::events::ItemType;
    use ratatui::layout::Rect;

    fn manager() -> DragDropManager {
        let mut dnd = DragDropManager::new();
        for (i, id) in ["a", "b", "c"].into_iter().enumerate() {
            let region = Rect::new(i as u16 * 10, 0, 10, 1);
            dnd.register_source(DragSource {
                id: id.into(),
                item: DragItem::column(id.into()),
                region,
            });
            dnd.register_target(DropTarget {
                id: id.into(),
                accept: ItemType::COLUMN,
                region,
            });
        }
        dnd
    }

    #[test]
    fn test_click_without_move_is_not_a_drag() {
        let mut dnd = manager();
        assert!(dnd.pointer_down(1, 0).is_empty());
        assert!(dnd.pointer_up(1, 0).is_empty());
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_full_drag_sequence() {
        let mut dnd = manager();
        dnd.pointer_down(1, 0);

        let events = dnd.pointer_move(2, 0);
        assert_eq!(
            events,
            vec![
                DndEvent::DragStart {
                    source: "a".into(),
                    item: DragItem::column("a".into())
                },
                DndEvent::DragEnter {
                    target: "a".into(),
                    item: DragItem::column("a".into())
                },
            ]
        );

        let events = dnd.pointer_move(15, 0);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], DndEvent::DragLeave { target, .. } if target == &ColumnId::from("a")));
        assert!(matches!(&events[1], DndEvent::DragEnter { target, .. } if target == &ColumnId::from("b")));
        assert_eq!(dnd.hovered_target(), Some(&ColumnId::from("b")));
        assert_eq!(dnd.pointer(), Some((15, 0)));

        let events = dnd.pointer_up(25, 0);
        assert_eq!(
            events,
            vec![
                DndEvent::DragLeave {
                    target: "b".into(),
                    item: DragItem::column("a".into())
                },
                DndEvent::DragEnter {
                    target: "c".into(),
                    item: DragItem::column("a".into())
                },
                DndEvent::Drop {
                    target: "c".into(),
                    item: DragItem::column("a".into())
                },
                DndEvent::DragEnd {
                    source: "a".into(),
                    item: DragItem::column("a".into()),
                    dropped: true
                },
            ]
        );
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_release_outside_targets() {
        let mut dnd = manager();
        dnd.pointer_down(12, 0);
        dnd.pointer_move(13, 0);

        let events = dnd.pointer_up(12, 5);
        assert_eq!(
            events.last(),
            Some(&DndEvent::DragEnd {
                source: "b".into(),
                item: DragItem::column("b".into()),
                dropped: false
            })
        );
        assert!(!events.iter().any(|e| matches!(e, DndEvent::Drop { .. })));
    }

    #[test]
    fn test_press_without_release_is_replaced_by_next_press() {
        let mut dnd = manager();
        dnd.pointer_down(1, 0);
        // Button released outside the window: no pointer_up
        dnd.pointer_down(21, 0);

        let events = dnd.pointer_move(22, 0);
        assert_eq!(
            events.first(),
            Some(&DndEvent::DragStart {
                source: "c".into(),
                item: DragItem::column("c".into())
            })
        );
        assert_eq!(dnd.dragged_item().map(|i| i.id.as_str()), Some("c"));
    }

    #[test]
    fn test_stale_press_cleared_by_press_outside_sources() {
        let mut dnd = manager();
        dnd.pointer_down(1, 0);
        dnd.pointer_down(5, 7);

        assert!(dnd.pointer_move(6, 7).is_empty());
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_second_press_ignored_while_dragging() {
        let mut dnd = manager();
        dnd.pointer_down(1, 0);
        dnd.pointer_move(2, 0);
        dnd.pointer_down(21, 0);
        assert_eq!(dnd.dragged_item().map(|i| i.id.as_str()), Some("a"));
    }

    #[test]
    fn test_cancel_leaves_hovered_target() {
        let mut dnd = manager();
        dnd.pointer_down(1, 0);
        dnd.pointer_move(11, 0);

        let events = dnd.cancel();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], DndEvent::DragLeave { target, .. } if target == &ColumnId::from("b")));
        assert!(matches!(&events[1], DndEvent::DragEnd { dropped: false, .. }));
        assert!(dnd.cancel().is_empty());
    }

    #[test]
    fn test_targets_filter_by_item_type() {
        let mut dnd = manager();
        dnd.begin_registration();
        dnd.register_source(DragSource {
            id: "a".into(),
            item: DragItem::column("a".into()),
            region: Rect::new(0, 0, 10, 1),
        });
        dnd.register_target(DropTarget {
            id: "row".into(),
            accept: ItemType::new("row"),
            region: Rect::new(10, 0, 10, 1),
        });

        dnd.pointer_down(1, 0);
        dnd.pointer_move(12, 0);
        assert_eq!(dnd.hovered_target(), None);
    }
}
