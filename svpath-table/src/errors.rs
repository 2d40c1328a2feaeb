use thiserror::Error;

use crate::columns::ColumnId;

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Column `{0}` cannot be sorted")]
    UnsortableColumn(ColumnId),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Page size {size} is not one of {options:?}")]
    InvalidPageSize { size: usize, options: Vec<usize> },

    #[error("No colour configured for clinical significance `{0}`")]
    MissingColour(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
