use std::collections::HashMap;

use tracing::{debug, error};

use crate::dnd::controller::{DropOutcome, HeaderDragController, HeaderDragState};
use crate::dnd::events::{DndEvent, DragItem, DragSource, DropTarget, ItemType};
use crate::dnd::manager::DragDropManager;
use crate::error::{TableError, TableResult};
use crate::table::column::ColumnId;
use crate::table::controller::TableController;
use crate::table::instance::Header;
use crate::table::position::PositionIndexMap;
use ratatui::layout::Rect;

/// What a batch of drag-and-drop notifications amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    DragStarted(ColumnId),
    Dropped(DropOutcome),
    /// The drag ended without landing on a target
    Cancelled(ColumnId),
}

/// The per-header drag controllers of one table, keyed by column identity so
/// their state survives re-renders that move the header around.
#[derive(Debug, Default)]
pub struct ColumnDragInteraction {
    controllers: HashMap<ColumnId, HeaderDragController>,
}

impl ColumnDragInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every rendered header has a controller, and forget headers
    /// that are no longer rendered
    pub fn sync(&mut self, headers: &[Header]) {
        self.controllers
            .retain(|id, _| headers.iter().any(|h| &h.column_id == id));
        for header in headers {
            self.controllers
                .entry(header.column_id.clone())
                .or_insert_with(|| HeaderDragController::new(header.column_id.clone()));
        }
    }

    pub fn controller(&self, id: &ColumnId) -> Option<&HeaderDragController> {
        self.controllers.get(id)
    }

    pub fn state_of(&self, id: &ColumnId) -> HeaderDragState {
        self.controllers
            .get(id)
            .map(|c| c.state())
            .unwrap_or_default()
    }

    /// Register each header as a drag source and its cell as a drop target.
    /// `regions` pairs each header with the screen area it was drawn in.
    pub fn register(&self, dnd: &mut DragDropManager, regions: &[(ColumnId, Rect)]) {
        dnd.begin_registration();
        for (id, region) in regions {
            dnd.register_source(DragSource {
                id: id.clone(),
                item: DragItem::column(id.clone()),
                region: *region,
            });
            dnd.register_target(DropTarget {
                id: id.clone(),
                accept: ItemType::COLUMN,
                region: *region,
            });
        }
    }

    /// Route notifications to the header controllers.
    ///
    /// Every event is applied even if a drop fails, so no header is left in a
    /// drag state; the first failure is returned afterwards.
    pub fn apply<R>(
        &mut self,
        events: Vec<DndEvent>,
        positions: &PositionIndexMap,
        table: &mut TableController<R>,
    ) -> TableResult<Vec<InteractionOutcome>> {
        let mut outcomes = Vec::new();
        let mut failure: Option<TableError> = None;

        for event in events {
            debug!(target: "dnd", "Applying {:?}", event);
            let result = match event {
                DndEvent::DragStart { source, .. } => self.with(&source, |c| {
                    c.on_drag_start();
                    Ok(Some(InteractionOutcome::DragStarted(source.clone())))
                }),
                DndEvent::DragEnter { target, item } => self.with(&target, |c| {
                    c.on_drag_enter(&item.id);
                    Ok(None)
                }),
                DndEvent::DragLeave { target, .. } => self.with(&target, |c| {
                    c.on_drag_leave();
                    Ok(None)
                }),
                DndEvent::Drop { target, item } => self.with(&target, |c| {
                    c.on_drop(&item.id, positions, table)
                        .map(|outcome| Some(InteractionOutcome::Dropped(outcome)))
                }),
                DndEvent::DragEnd {
                    source, dropped, ..
                } => self.with(&source, |c| {
                    c.on_drag_end();
                    Ok((!dropped).then(|| InteractionOutcome::Cancelled(source.clone())))
                }),
            };

            match result {
                Ok(Some(outcome)) => outcomes.push(outcome),
                Ok(None) => {}
                Err(e) => {
                    error!(target: "dnd", "Drag interaction failed: {}", e);
                    failure.get_or_insert(e);
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(outcomes),
        }
    }

    fn with<T>(
        &mut self,
        id: &ColumnId,
        f: impl FnOnce(&mut HeaderDragController) -> TableResult<T>,
    ) -> TableResult<T> {
        let controller = self
            .controllers
            .get_mut(id)
            .ok_or_else(|| TableError::UnknownColumn(id.clone()))?;
        f(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::{CellValue, ColumnDef};

    fn table() -> TableController<()> {
        let columns = ["a", "b", "c"]
            .into_iter()
            .map(|id| ColumnDef::accessor(id, |_: &()| CellValue::Null))
            .collect();
        TableController::new(columns, Vec::new()).unwrap()
    }

    #[test]
    fn test_sync_tracks_rendered_headers() {
        let table = table();
        let mut interaction = ColumnDragInteraction::new();
        interaction.sync(&table.instance().headers());

        assert!(interaction.controller(&"a".into()).is_some());
        assert_eq!(interaction.state_of(&"c".into()), HeaderDragState::Idle);
        assert!(interaction.controller(&"z".into()).is_none());
    }

    #[test]
    fn test_event_for_unknown_header_fails_fast() {
        let mut table = table();
        let mut interaction = ColumnDragInteraction::new();
        let headers = table.instance().headers();
        interaction.sync(&headers);
        let positions = PositionIndexMap::from_headers(&headers);

        let result = interaction.apply(
            vec![DndEvent::DragStart {
                source: "ghost".into(),
                item: DragItem::column("ghost".into()),
            }],
            &positions,
            &mut table,
        );
        assert_eq!(result, Err(TableError::UnknownColumn("ghost".into())));
    }

    #[test]
    fn test_failed_drop_still_ends_drag() {
        let mut table = table();
        let mut interaction = ColumnDragInteraction::new();
        let headers = table.instance().headers();
        interaction.sync(&headers);
        // Stale map that does not know column "a"
        let positions = PositionIndexMap::from_ids(&[ColumnId::from("b"), ColumnId::from("c")]);

        let item = DragItem::column("a".into());
        let result = interaction.apply(
            vec![
                DndEvent::DragStart {
                    source: "a".into(),
                    item: item.clone(),
                },
                DndEvent::Drop {
                    target: "c".into(),
                    item: item.clone(),
                },
                DndEvent::DragEnd {
                    source: "a".into(),
                    item,
                    dropped: true,
                },
            ],
            &positions,
            &mut table,
        );

        assert!(result.is_err());
        assert_eq!(interaction.state_of(&"a".into()), HeaderDragState::Idle);
        assert_eq!(table.mutation_count(), 0);
    }
}
