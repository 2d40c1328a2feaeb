use std::sync::Arc;

use log::{info, warn};

use svpath_core::colours::LegendEntry;
use svpath_core::{
    ChromosomeId, DashboardConfig, FilterState, LevelSet, MatchRecord, PathogenicityLevel,
    SummaryTable,
};
use svpath_io::{IoError, RecordStore};
use svpath_table::ColumnId;

use crate::errors::{DashboardError, Result};
use crate::filter::{FilterAction, FilterChange, FilterObserver, FilterStore};
use crate::loads::{LoadOutcome, LoadSlot, LoadTag, LoadTracker};
use crate::views::{ChartView, TableView, TrackNavigator, TrackView};

///
/// Composes the chart, table and track views over one shared filter.
///
/// Every filter action goes through [`Dashboard::dispatch`], which re-derives all
/// views before returning: charts re-stack and rescale, the table re-filters and
/// goes back to its first page, the track rebuilds its colours and pans to the
/// selected chromosome. A view that fails (bad data, missing colour) shows its error
/// while the other views keep working.
///
pub struct Dashboard {
    config: Arc<DashboardConfig>,
    store: RecordStore,
    filter: FilterStore,
    loads: LoadTracker,
    charts: Vec<ChartView>,
    table: TableView,
    track: TrackView,
    listeners: Vec<Box<dyn FnMut(&FilterChange)>>,
}

impl Dashboard {
    ///
    /// # Arguments
    /// - config: colours, page sizes, chart and track layout
    /// - chart_titles: one stacked bar chart per summary dataset, in display order
    /// - navigator: pan/zoom control of the genome-track renderer
    ///
    pub fn new(
        config: DashboardConfig,
        chart_titles: &[&str],
        navigator: Box<dyn TrackNavigator>,
    ) -> Result<Self> {
        let config = Arc::new(config);
        let filter = FilterStore::new();

        let charts = chart_titles
            .iter()
            .map(|title| ChartView::new(title, Arc::clone(&config)))
            .collect();
        let table = TableView::new(Arc::clone(&config))?;
        let track = TrackView::new(Arc::clone(&config), navigator, filter.state());

        Ok(Dashboard {
            config,
            store: RecordStore::new(),
            filter,
            loads: LoadTracker::new(),
            charts,
            table,
            track,
            listeners: Vec::new(),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn generation(&self) -> u64 {
        self.filter.generation()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Listen to filter changes from outside the dashboard. Listeners are called in
    /// subscription order, after every view has been re-derived.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FilterChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: FilterAction) -> Option<FilterChange> {
        let change = self.filter.apply(action)?;

        for chart in self.charts.iter_mut() {
            chart.on_filter_change(&change);
        }
        self.table.on_filter_change(&change);
        self.track.on_filter_change(&change);

        for listener in self.listeners.iter_mut() {
            listener(&change);
        }

        Some(change)
    }

    pub fn select_chromosome(&mut self, chromosome: Option<ChromosomeId>) -> Option<FilterChange> {
        self.dispatch(FilterAction::SelectChromosome(chromosome))
    }

    pub fn toggle_level(&mut self, level: PathogenicityLevel) -> Option<FilterChange> {
        self.dispatch(FilterAction::ToggleLevel(level))
    }

    pub fn set_levels(&mut self, levels: LevelSet) -> Option<FilterChange> {
        self.dispatch(FilterAction::SetLevels(levels))
    }

    pub fn charts(&self) -> &[ChartView] {
        &self.charts
    }

    pub fn chart(&self, title: &str) -> Result<&ChartView> {
        self.charts
            .iter()
            .find(|c| c.title() == title)
            .ok_or_else(|| DashboardError::UnknownChart(title.to_string()))
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn track(&self) -> &TrackView {
        &self.track
    }

    /// Colour legend: the "no match" entry, then the levels in severity order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.config.colours.legend()
    }

    pub fn toggle_sort(&mut self, column: ColumnId) -> Result<()> {
        self.table.toggle_sort(column, self.filter.state())
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.table.set_page_size(size, self.filter.state())
    }

    pub fn first_page(&mut self) {
        self.table.first_page(self.filter.state());
    }

    pub fn previous_page(&mut self) {
        self.table.previous_page(self.filter.state());
    }

    pub fn next_page(&mut self) {
        self.table.next_page(self.filter.state());
    }

    pub fn last_page(&mut self) {
        self.table.last_page(self.filter.state());
    }

    pub fn go_to_page(&mut self, one_based: usize) -> bool {
        self.table.go_to_page(one_based, self.filter.state())
    }

    ///
    /// Issue a load for `slot`.
    ///
    /// Set `scoped` when what is loaded is narrowed to the selected chromosome; its
    /// result is then dropped if another chromosome (or none) is selected before it
    /// arrives.
    ///
    pub fn begin_load(&mut self, slot: LoadSlot, scoped: bool) -> LoadTag {
        let selected = self.filter.state().selected_chromosome;
        self.loads.issue(slot, selected, scoped)
    }

    fn accept(&self, tag: &LoadTag) -> bool {
        let selected = self.filter.state().selected_chromosome;
        let current = self.loads.is_current(tag, selected);
        if !current {
            warn!(
                "Discarding stale load #{} for {:?} (issued for chromosome {:?}, now {:?})",
                tag.id,
                tag.slot,
                tag.chromosome.map(|c| c.label()),
                selected.map(|c| c.label())
            );
        }
        current
    }

    pub fn complete_summary_load(
        &mut self,
        tag: LoadTag,
        result: std::result::Result<SummaryTable, IoError>,
    ) -> LoadOutcome {
        let LoadSlot::Summary(title) = &tag.slot else {
            warn!("Load #{} is not a summary load", tag.id);
            return LoadOutcome::Stale;
        };
        if !self.accept(&tag) {
            return LoadOutcome::Stale;
        }

        let chart = self.charts.iter_mut().find(|c| c.title() == title);
        match result {
            Ok(table) => {
                let table = self.store.insert_summary(title, table);
                if let Some(chart) = chart {
                    chart.set_table(table, self.filter.state());
                }
                LoadOutcome::Applied
            }
            Err(e) => {
                let message = e.to_string();
                if let Some(chart) = chart {
                    chart.fail(message.clone());
                }
                LoadOutcome::Failed(message)
            }
        }
    }

    pub fn complete_match_load(
        &mut self,
        tag: LoadTag,
        result: std::result::Result<Vec<MatchRecord>, IoError>,
    ) -> LoadOutcome {
        if tag.slot != LoadSlot::Matches {
            warn!("Load #{} is not a match load", tag.id);
            return LoadOutcome::Stale;
        }
        if !self.accept(&tag) {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(records) => {
                self.store.set_matches(records);
                self.table
                    .set_records(self.store.shared_matches(), self.filter.state());
                info!("Match table ready ({} records)", self.store.matches().len());
                LoadOutcome::Applied
            }
            Err(e) => {
                let message = e.to_string();
                self.table.fail(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }
}
