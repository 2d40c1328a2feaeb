use std::io;
use thiserror::Error;

use svpath_core::{ChromosomeId, PathogenicityLevel};

/// Error type for svpath-io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The underlying tab separated reader failed.
    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// A summary count cell is not a non-negative integer.
    #[error("Malformed count for chromosome {chromosome}, level `{level}`: {value:?}")]
    MalformedCount {
        chromosome: ChromosomeId,
        level: PathogenicityLevel,
        value: String,
    },

    /// A required column is missing from the header row.
    #[error("Missing column `{0}`")]
    MissingColumn(String),

    /// The same chromosome appears twice in one summary table.
    #[error("Chromosome {0} appears more than once")]
    DuplicateChromosome(ChromosomeId),

    /// A position cell could not be parsed.
    #[error("Invalid position on line {line}: {value:?}")]
    InvalidPosition { line: u64, value: String },

    /// A similarity cell is not a percentage.
    #[error("Invalid similarity on line {line}: {value:?} (expected a number within [0, 100])")]
    InvalidSimilarity { line: u64, value: String },

    /// Could not open the input.
    #[error("Can't read file: {0}")]
    FileReadError(String),

    /// A background load task panicked or was cancelled.
    #[error("Load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias for svpath-io operations.
pub type Result<T> = std::result::Result<T, IoError>;
