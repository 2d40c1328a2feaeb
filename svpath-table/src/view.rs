use serde::Serialize;

use svpath_core::{FilterState, MatchRecord};

use crate::state::TableViewState;

/// One page of filtered, sorted match records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    pub rows: Vec<MatchRecord>,
    /// Rows passing the filter, over all pages.
    pub total_rows: usize,
    pub total_pages: usize,
    /// Zero-based, clamped to the existing pages.
    pub page_index: usize,
    pub page_size: usize,
}

impl TablePage {
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    /// `Page 1 of 3`; an empty table reads `Page 1 of 0`.
    pub fn position_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.total_pages)
    }
}

///
/// Filter, sort and paginate `records`.
///
/// A record is kept when it lies on the selected chromosome (or none is selected)
/// and its significance passes the level filter. Sorting is stable, so rows that
/// compare equal keep their input order in both directions.
///
pub fn view(records: &[MatchRecord], filter: &FilterState, state: &TableViewState) -> TablePage {
    let mut kept: Vec<&MatchRecord> = records.iter().filter(|r| filter.admits(r)).collect();

    if let Some(sort) = state.sort() {
        if sort.descending {
            kept.sort_by(|a, b| sort.column.compare(b, a));
        } else {
            kept.sort_by(|a, b| sort.column.compare(a, b));
        }
    }

    let total_rows = kept.len();
    let total_pages = state.total_pages(total_rows);
    let page_index = state.page_index().min(total_pages.saturating_sub(1));

    let rows = kept
        .into_iter()
        .skip(page_index * state.page_size())
        .take(state.page_size())
        .cloned()
        .collect();

    TablePage {
        rows,
        total_rows,
        total_pages,
        page_index,
        page_size: state.page_size(),
    }
}
