use serde::{Deserialize, Serialize};

use crate::models::{ChromosomeId, LevelSet, MatchRecord, Significance};

///
/// The selection shared by every view: an optional chromosome and the active levels.
///
/// The two axes are independent and combine with a logical AND.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_chromosome: Option<ChromosomeId>,
    pub selected_levels: LevelSet,
}

impl FilterState {
    pub fn new(selected_chromosome: Option<ChromosomeId>, selected_levels: LevelSet) -> Self {
        FilterState {
            selected_chromosome,
            selected_levels,
        }
    }

    pub fn admits_chromosome(&self, chromosome: ChromosomeId) -> bool {
        self.selected_chromosome
            .is_none_or(|selected| selected == chromosome)
    }

    ///
    /// Whether a significance value passes the level filter.
    ///
    /// Values outside the configured levels cannot be selected individually. They
    /// stay visible while the level filter is not narrowing (every level active) and
    /// disappear as soon as the user restricts the levels.
    ///
    pub fn admits_significance(&self, significance: &Significance) -> bool {
        match significance {
            Significance::Known(level) => self.selected_levels.contains(*level),
            Significance::Unmapped(_) => self.selected_levels.is_full(),
        }
    }

    pub fn admits(&self, record: &MatchRecord) -> bool {
        self.admits_chromosome(record.chromosome)
            && self.admits_significance(&record.clinical_significance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathogenicityLevel;

    use rstest::rstest;

    #[rstest]
    fn test_default_admits_everything() {
        let filter = FilterState::default();
        assert!(filter.admits_chromosome(ChromosomeId::Y));
        assert!(filter.admits_significance(&Significance::from("Benign")));
        assert!(filter.admits_significance(&Significance::from("not provided")));
    }

    #[rstest]
    fn test_narrowed_levels_hide_unmapped() {
        let filter = FilterState::new(None, vec![PathogenicityLevel::Pathogenic].into());
        assert!(filter.admits_significance(&Significance::from("Pathogenic")));
        assert!(!filter.admits_significance(&Significance::from("Benign")));
        assert!(!filter.admits_significance(&Significance::from("risk factor")));
    }

    #[rstest]
    fn test_empty_level_set_admits_nothing() {
        let filter = FilterState::new(None, LevelSet::empty());
        for level in PathogenicityLevel::ALL {
            assert!(!filter.admits_significance(&Significance::Known(level)));
        }
    }
}
