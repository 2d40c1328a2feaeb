//! The three views composed by the dashboard.
//!
//! Each view keeps only what it derives from the shared filter, never the filter
//! itself, and reports its own failures without affecting the others.
pub mod chart;
pub mod table;
pub mod track;

use serde::Serialize;

pub use chart::ChartView;
pub use table::{TableView, TableViewOutput};
pub use track::{LogNavigator, TrackNavigator, TrackView};

/// What a view currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ViewStatus<T> {
    /// The view's dataset has not arrived yet.
    Loading,
    Ready(T),
    /// Loading or deriving failed; the message is shown in place of the view.
    Failed(String),
}

impl<T> ViewStatus<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewStatus::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewStatus::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ViewStatus<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ViewStatus::Ready(value),
            Err(e) => ViewStatus::Failed(e.to_string()),
        }
    }
}
