use std::sync::Arc;

use log::warn;
use serde::Serialize;

use svpath_core::{DashboardConfig, FilterState, MatchRecord};
use svpath_table::{
    render_row, view, Cell, ColumnId, SortState, TableColumns, TablePage, TableViewState,
};

use crate::errors::Result;
use crate::filter::{FilterChange, FilterObserver};
use crate::views::ViewStatus;

/// The current page of the match table, with its cells rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableViewOutput {
    pub headers: Vec<&'static str>,
    pub sort: Option<SortState>,
    pub page: TablePage,
    pub cells: Vec<Vec<Cell>>,
}

#[derive(Debug)]
pub struct TableView {
    config: Arc<DashboardConfig>,
    columns: TableColumns,
    state: TableViewState,
    records: Option<Arc<Vec<MatchRecord>>>,
    load_error: Option<String>,
    status: ViewStatus<TableViewOutput>,
}

impl TableView {
    pub fn new(config: Arc<DashboardConfig>) -> Result<Self> {
        let state = TableViewState::try_from(config.as_ref())?;
        Ok(TableView {
            config,
            columns: TableColumns::standard(),
            state,
            records: None,
            load_error: None,
            status: ViewStatus::Loading,
        })
    }

    pub fn status(&self) -> &ViewStatus<TableViewOutput> {
        &self.status
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn columns(&self) -> &TableColumns {
        &self.columns
    }

    pub fn set_records(&mut self, records: Arc<Vec<MatchRecord>>, filter: &FilterState) {
        self.records = Some(records);
        self.load_error = None;
        self.state.reset_page();
        self.refresh(filter);
    }

    pub fn fail(&mut self, message: String) {
        warn!("Match table failed: {}", message);
        self.load_error = Some(message.clone());
        self.status = ViewStatus::Failed(message);
    }

    pub fn refresh(&mut self, filter: &FilterState) {
        if let Some(message) = &self.load_error {
            self.status = ViewStatus::Failed(message.clone());
            return;
        }
        let Some(records) = &self.records else {
            self.status = ViewStatus::Loading;
            return;
        };

        let page = view(records, filter, &self.state);
        let cells = page
            .rows
            .iter()
            .map(|record| render_row(record, &self.columns, &self.config.colours))
            .collect::<svpath_table::Result<Vec<Vec<Cell>>>>();

        self.status = cells
            .map(|cells| TableViewOutput {
                headers: self.columns.headers(),
                sort: self.state.sort(),
                page,
                cells,
            })
            .into();
    }

    fn total_pages(&self) -> usize {
        self.status.ready().map(|out| out.page.total_pages).unwrap_or(0)
    }

    pub fn toggle_sort(&mut self, column: ColumnId, filter: &FilterState) -> Result<()> {
        self.state.toggle_sort(column)?;
        self.refresh(filter);
        Ok(())
    }

    pub fn set_page_size(&mut self, size: usize, filter: &FilterState) -> Result<()> {
        self.state.set_page_size(size)?;
        self.refresh(filter);
        Ok(())
    }

    pub fn first_page(&mut self, filter: &FilterState) {
        self.state.first_page();
        self.refresh(filter);
    }

    pub fn previous_page(&mut self, filter: &FilterState) {
        self.state.previous_page();
        self.refresh(filter);
    }

    pub fn next_page(&mut self, filter: &FilterState) {
        let total = self.total_pages();
        self.state.next_page(total);
        self.refresh(filter);
    }

    pub fn last_page(&mut self, filter: &FilterState) {
        let total = self.total_pages();
        self.state.last_page(total);
        self.refresh(filter);
    }

    /// Jump to a page numbered from 1; returns `false` if there is no such page.
    pub fn go_to_page(&mut self, one_based: usize, filter: &FilterState) -> bool {
        let total = self.total_pages();
        let moved = self.state.go_to_page(one_based, total);
        if moved {
            self.refresh(filter);
        }
        moved
    }
}

impl FilterObserver for TableView {
    fn on_filter_change(&mut self, change: &FilterChange) {
        self.state.reset_page();
        self.refresh(&change.current);
    }
}
