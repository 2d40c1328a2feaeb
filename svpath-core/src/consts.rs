/// Sentinel category used by the legend and the genome track for variants without a ClinVar match.
pub const NO_MATCH_LABEL: &str = "No match";

pub const CHROMOSOME_COLUMN: &str = "Chromosome";

/// Alpha applied to significance badges in the match table.
pub const SIGNIFICANCE_BADGE_ALPHA: f64 = 0.75;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 30];
pub const DEFAULT_PAGE_SIZE: usize = 10;
