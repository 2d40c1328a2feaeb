use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ChromosomeId, PathogenicityLevel};

///
/// Per-chromosome variant counts for one dataset (ClinVar totals, match totals).
///
/// A level missing from `counts` means the source table had no value for it. That
/// is only an error once the level is stacked; see `svpath-charts`.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeSummaryRow {
    pub chromosome: ChromosomeId,
    pub counts: BTreeMap<PathogenicityLevel, u64>,
}

impl ChromosomeSummaryRow {
    pub fn new(chromosome: ChromosomeId) -> Self {
        ChromosomeSummaryRow {
            chromosome,
            counts: BTreeMap::new(),
        }
    }

    pub fn with_count(mut self, level: PathogenicityLevel, count: u64) -> Self {
        self.counts.insert(level, count);
        self
    }

    pub fn count(&self, level: PathogenicityLevel) -> Option<u64> {
        self.counts.get(&level).copied()
    }
}

///
/// A loaded chromosome summary dataset. Rows are kept in chromosome order, one per chromosome.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<ChromosomeSummaryRow>,
}

impl SummaryTable {
    pub fn new(mut rows: Vec<ChromosomeSummaryRow>) -> Self {
        rows.sort_by_key(|row| row.chromosome);
        SummaryTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, chromosome: ChromosomeId) -> Option<&ChromosomeSummaryRow> {
        self.rows
            .binary_search_by_key(&chromosome, |row| row.chromosome)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    pub fn chromosomes(&self) -> Vec<ChromosomeId> {
        self.rows.iter().map(|row| row.chromosome).collect()
    }
}
