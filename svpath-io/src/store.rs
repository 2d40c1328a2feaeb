use std::sync::Arc;

use log::info;

use svpath_core::{MatchRecord, SummaryTable};

///
/// Summary and match datasets exactly as loaded.
///
/// Records are immutable once stored and shared behind [`Arc`], so views can hold on
/// to a dataset across a reload without copying it. The store does no
/// transformation of its own.
///
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    summaries: Vec<(String, Arc<SummaryTable>)>,
    matches: Arc<Vec<MatchRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a summary dataset under `title`, replacing any previous dataset with that title.
    pub fn insert_summary(&mut self, title: &str, table: SummaryTable) -> Arc<SummaryTable> {
        let table = Arc::new(table);
        match self.summaries.iter_mut().find(|(t, _)| t == title) {
            Some((_, existing)) => *existing = Arc::clone(&table),
            None => self.summaries.push((title.to_string(), Arc::clone(&table))),
        }
        info!("Stored summary dataset {:?} ({} rows)", title, table.len());
        table
    }

    pub fn summary(&self, title: &str) -> Option<Arc<SummaryTable>> {
        self.summaries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, table)| Arc::clone(table))
    }

    /// Titles in insertion order.
    pub fn summary_titles(&self) -> impl Iterator<Item = &str> {
        self.summaries.iter().map(|(title, _)| title.as_str())
    }

    pub fn set_matches(&mut self, records: Vec<MatchRecord>) {
        info!("Stored {} match records", records.len());
        self.matches = Arc::new(records);
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn shared_matches(&self) -> Arc<Vec<MatchRecord>> {
        Arc::clone(&self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use svpath_core::{ChromosomeId, ChromosomeSummaryRow};

    #[rstest]
    fn test_insert_replaces_by_title() {
        let mut store = RecordStore::new();
        store.insert_summary("ClinVar Variants", SummaryTable::default());
        store.insert_summary("HG002 Matches", SummaryTable::default());
        store.insert_summary(
            "ClinVar Variants",
            SummaryTable::new(vec![ChromosomeSummaryRow::new(ChromosomeId::X)]),
        );

        let titles: Vec<&str> = store.summary_titles().collect();
        assert_eq!(titles, vec!["ClinVar Variants", "HG002 Matches"]);
        assert_eq!(store.summary("ClinVar Variants").unwrap().len(), 1);
        assert!(store.summary("Unknown").is_none());
    }

    #[rstest]
    fn test_shared_matches_survive_replacement() {
        let mut store = RecordStore::new();
        let before = store.shared_matches();
        store.set_matches(Vec::new());
        assert!(before.is_empty());
        assert!(store.matches().is_empty());
    }
}
