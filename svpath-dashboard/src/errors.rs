use thiserror::Error;

use svpath_charts::ChartError;
use svpath_core::CoreError;
use svpath_table::TableError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No chart titled `{0}`")]
    UnknownChart(String),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
