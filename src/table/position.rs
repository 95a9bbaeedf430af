use std::collections::HashMap;

use crate::error::{TableError, TableResult};
use crate::table::column::ColumnId;
use crate::table::instance::Header;

/// Column identity -> current visual index, built fresh from one render's
/// header order. Never keep one of these past the render that produced it.
#[derive(Debug, Clone, Default)]
pub struct PositionIndexMap {
    positions: HashMap<ColumnId, usize>,
}

impl PositionIndexMap {
    pub fn from_headers(headers: &[Header]) -> Self {
        Self::from_ids(headers.iter().map(|h| &h.column_id))
    }

    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a ColumnId>) -> Self {
        let positions = ids
            .into_iter()
            .enumerate()
            .map(|(index, id)| (id.clone(), index))
            .collect();
        Self { positions }
    }

    pub fn position_of(&self, id: &ColumnId) -> TableResult<usize> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| TableError::UnknownColumn(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_order() {
        let ids: Vec<ColumnId> = ["b", "a", "c"].into_iter().map(ColumnId::from).collect();
        let map = PositionIndexMap::from_ids(&ids);

        assert_eq!(map.len(), 3);
        assert_eq!(map.position_of(&"b".into()).unwrap(), 0);
        assert_eq!(map.position_of(&"c".into()).unwrap(), 2);
    }

    #[test]
    fn test_unknown_identity_fails() {
        let map = PositionIndexMap::default();
        assert!(map.is_empty());
        assert_eq!(
            map.position_of(&"ghost".into()),
            Err(TableError::UnknownColumn("ghost".into()))
        );
    }
}
