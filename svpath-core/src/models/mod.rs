pub mod chromosome;
pub mod filter;
pub mod match_record;
pub mod pathogenicity;
pub mod summary;

// re-export for cleaner imports
pub use self::chromosome::ChromosomeId;
pub use self::filter::FilterState;
pub use self::match_record::MatchRecord;
pub use self::pathogenicity::{LevelSet, PathogenicityLevel, Significance};
pub use self::summary::{ChromosomeSummaryRow, SummaryTable};
