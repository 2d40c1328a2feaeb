use thiserror::Error;

use svpath_core::{ChromosomeId, PathogenicityLevel};

#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("No count for level `{level}` on chromosome {chromosome}")]
    MissingCount {
        chromosome: ChromosomeId,
        level: PathogenicityLevel,
    },
    #[error("Level `{0}` listed more than once in the stacking order")]
    DuplicateCategory(PathogenicityLevel),
    #[error("No colour configured for level `{0}`")]
    MissingColour(PathogenicityLevel),
}
