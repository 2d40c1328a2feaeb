use std::sync::Arc;

use log::warn;

use svpath_charts::{build_chart_geometry, ChartGeometry};
use svpath_core::{DashboardConfig, FilterState, SummaryTable};

use crate::filter::{FilterChange, FilterObserver};
use crate::views::ViewStatus;

/// A stacked bar chart over one summary dataset.
#[derive(Debug)]
pub struct ChartView {
    title: String,
    config: Arc<DashboardConfig>,
    table: Option<Arc<SummaryTable>>,
    load_error: Option<String>,
    status: ViewStatus<ChartGeometry>,
}

impl ChartView {
    pub fn new(title: &str, config: Arc<DashboardConfig>) -> Self {
        ChartView {
            title: title.to_string(),
            config,
            table: None,
            load_error: None,
            status: ViewStatus::Loading,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> &ViewStatus<ChartGeometry> {
        &self.status
    }

    pub fn set_table(&mut self, table: Arc<SummaryTable>, filter: &FilterState) {
        self.table = Some(table);
        self.load_error = None;
        self.refresh(filter);
    }

    /// Put the chart into its error state until the next successful load.
    pub fn fail(&mut self, message: String) {
        warn!("Chart '{}' failed: {}", self.title, message);
        self.load_error = Some(message.clone());
        self.status = ViewStatus::Failed(message);
    }

    pub fn refresh(&mut self, filter: &FilterState) {
        if let Some(message) = &self.load_error {
            self.status = ViewStatus::Failed(message.clone());
            return;
        }
        let Some(table) = &self.table else {
            self.status = ViewStatus::Loading;
            return;
        };

        let geometry = build_chart_geometry(
            &self.title,
            table,
            filter,
            &self.config.chart,
            &self.config.colours,
        );
        if let Err(e) = &geometry {
            warn!("Can't lay out chart '{}': {}", self.title, e);
        }
        self.status = geometry.into();
    }
}

impl FilterObserver for ChartView {
    fn on_filter_change(&mut self, change: &FilterChange) {
        self.refresh(&change.current);
    }
}
