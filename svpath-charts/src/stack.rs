//! Stacking of per-chromosome counts.
//!
//! For each chromosome the active levels are laid out bottom to top in the order
//! given, each level occupying `[cumulative, cumulative + count]`. A level that is
//! not active is not part of the stack at all, so deselecting a level lowers the
//! column totals (and with them the shared vertical scale), not just its colour.

use serde::Serialize;

use svpath_core::{ChromosomeId, ChromosomeSummaryRow, PathogenicityLevel};

use crate::errors::ChartError;

/// One level's slice of a stacked column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackedSegment {
    pub chromosome: ChromosomeId,
    pub level: PathogenicityLevel,
    pub interval_low: u64,
    pub interval_high: u64,
}

impl StackedSegment {
    pub fn count(&self) -> u64 {
        self.interval_high - self.interval_low
    }

    pub fn is_empty(&self) -> bool {
        self.interval_high == self.interval_low
    }
}

/// All segments of one chromosome, contiguous from 0 to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackedColumn {
    pub chromosome: ChromosomeId,
    pub segments: Vec<StackedSegment>,
    pub total: u64,
}

///
/// Stack each row over `categories`.
///
/// # Arguments
/// - rows: summary rows, one per chromosome
/// - categories: the levels to stack, bottom first; must not repeat
///
/// # Errors
/// [`ChartError::MissingCount`] when a row has no count for a level in `categories`.
/// A missing count is never read as zero, since that would understate the total
/// every column is scaled against.
///
pub fn aggregate(
    rows: &[ChromosomeSummaryRow],
    categories: &[PathogenicityLevel],
) -> Result<Vec<StackedColumn>, ChartError> {
    for (idx, level) in categories.iter().enumerate() {
        if categories[..idx].contains(level) {
            return Err(ChartError::DuplicateCategory(*level));
        }
    }

    rows.iter()
        .map(|row| {
            let mut cumulative = 0u64;
            let mut segments = Vec::with_capacity(categories.len());

            for level in categories {
                let count = row.count(*level).ok_or(ChartError::MissingCount {
                    chromosome: row.chromosome,
                    level: *level,
                })?;
                segments.push(StackedSegment {
                    chromosome: row.chromosome,
                    level: *level,
                    interval_low: cumulative,
                    interval_high: cumulative + count,
                });
                cumulative += count;
            }

            Ok(StackedColumn {
                chromosome: row.chromosome,
                segments,
                total: cumulative,
            })
        })
        .collect()
}

/// Tallest column over the stacked levels, 0 when there are no columns.
pub fn max_total(columns: &[StackedColumn]) -> u64 {
    columns.iter().map(|c| c.total).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use PathogenicityLevel::*;

    #[fixture]
    fn chromosome_five() -> ChromosomeSummaryRow {
        ChromosomeSummaryRow::new("5".parse().unwrap())
            .with_count(UncertainSignificance, 2)
            .with_count(Benign, 0)
            .with_count(LikelyPathogenic, 1)
            .with_count(Pathogenic, 3)
    }

    fn intervals(column: &StackedColumn) -> Vec<(u64, u64)> {
        column
            .segments
            .iter()
            .map(|s| (s.interval_low, s.interval_high))
            .collect()
    }

    #[rstest]
    fn test_all_levels_stack_contiguously(chromosome_five: ChromosomeSummaryRow) {
        let columns = aggregate(&[chromosome_five], &PathogenicityLevel::ALL).unwrap();

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].total, 6);
        assert_eq!(intervals(&columns[0]), vec![(0, 2), (2, 2), (2, 3), (3, 6)]);
        assert!(max_total(&columns) >= 6);
    }

    #[rstest]
    fn test_deselected_levels_leave_the_stack(chromosome_five: ChromosomeSummaryRow) {
        let columns = aggregate(&[chromosome_five], &[UncertainSignificance, Pathogenic]).unwrap();

        assert_eq!(columns[0].total, 5);
        assert_eq!(intervals(&columns[0]), vec![(0, 2), (2, 5)]);
        let levels: Vec<PathogenicityLevel> = columns[0].segments.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![UncertainSignificance, Pathogenic]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![Benign])]
    #[case(vec![Benign, Pathogenic])]
    #[case(vec![UncertainSignificance, Benign, LikelyPathogenic, Pathogenic])]
    fn test_total_is_sum_of_active_counts(#[case] active: Vec<PathogenicityLevel>) {
        let rows: Vec<ChromosomeSummaryRow> = ["1", "2", "X"]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let i = i as u64;
                ChromosomeSummaryRow::new(c.parse().unwrap())
                    .with_count(UncertainSignificance, 10 + i)
                    .with_count(Benign, 20 * i)
                    .with_count(LikelyPathogenic, 3)
                    .with_count(Pathogenic, 7 * i + 1)
            })
            .collect();

        let columns = aggregate(&rows, &active).unwrap();

        for (row, column) in rows.iter().zip(&columns) {
            let expected: u64 = active.iter().map(|l| row.count(*l).unwrap()).sum();
            let stacked: u64 = column.segments.iter().map(|s| s.count()).sum();
            assert_eq!(stacked, expected);
            assert_eq!(column.total, expected);

            for pair in column.segments.windows(2) {
                assert_eq!(pair[0].interval_high, pair[1].interval_low);
            }
            if let Some(first) = column.segments.first() {
                assert_eq!(first.interval_low, 0);
            }
        }
    }

    #[rstest]
    fn test_missing_count_is_an_error() {
        let row = ChromosomeSummaryRow::new(ChromosomeId::Y).with_count(Benign, 4);

        assert_eq!(aggregate(std::slice::from_ref(&row), &[Benign]).unwrap()[0].total, 4);
        assert_eq!(
            aggregate(&[row], &[Benign, Pathogenic]),
            Err(ChartError::MissingCount {
                chromosome: ChromosomeId::Y,
                level: Pathogenic
            })
        );
    }

    #[rstest]
    fn test_duplicate_category_is_rejected(chromosome_five: ChromosomeSummaryRow) {
        let result = aggregate(&[chromosome_five], &[Benign, Pathogenic, Benign]);
        assert_eq!(result, Err(ChartError::DuplicateCategory(Benign)));
    }

    #[rstest]
    fn test_max_total_of_nothing_is_zero() {
        assert_eq!(max_total(&[]), 0);
    }
}
