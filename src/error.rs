use thiserror::Error;

use crate::table::column::ColumnId;

/// Errors raised when a caller breaks one of the column-order invariants.
///
/// None of these are recoverable at runtime: they mean the caller handed the
/// table an order or an identity that does not belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column '{0}' is defined more than once")]
    DuplicateColumn(ColumnId),

    #[error("new column order is not a permutation of the current one: {reason}")]
    NotAPermutation { reason: String },

    #[error("column '{0}' is not part of the current header order")]
    UnknownColumn(ColumnId),

    #[error("column position {index} is out of range for {len} columns")]
    PositionOutOfRange { index: usize, len: usize },
}

pub type TableResult<T> = std::result::Result<T, TableError>;
