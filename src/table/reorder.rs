use crate::error::{TableError, TableResult};

/// Move the element at `dragged_index` so that it lands at `target_index`.
///
/// Works on a copy: the element is removed first and then inserted at
/// `target_index` in the one-shorter list, so moving an element onto itself
/// gives back the original sequence.
pub fn reorder_columns<T: Clone>(
    columns: &[T],
    dragged_index: usize,
    target_index: usize,
) -> TableResult<Vec<T>> {
    let len = columns.len();
    for index in [dragged_index, target_index] {
        if index >= len {
            return Err(TableError::PositionOutOfRange { index, len });
        }
    }

    let mut reordered = columns.to_vec();
    let dragged = reordered.remove(dragged_index);
    reordered.insert(target_index, dragged);
    Ok(reordered)
}
