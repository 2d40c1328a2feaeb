//! # svpath-core
//!
//! Shared models for the structural-variant pathogenicity dashboard.
//!
//! Everything the chart, table and track views agree on lives here:
//!
//! - [`ChromosomeId`]: the 24 nuclear chromosomes in their fixed `1..22, X, Y` order
//! - [`PathogenicityLevel`] and [`LevelSet`]: the severity ordered categories and the
//!   normalized subset of them that is currently active
//! - [`FilterState`]: the single piece of cross-view state
//! - [`ChromosomeSummaryRow`] / [`SummaryTable`] and [`MatchRecord`]: records as loaded
//! - [`ColourMap`] and [`DashboardConfig`]: colour and layout configuration
//!
//! None of these types know how to render anything. They are consumed by
//! `svpath-charts`, `svpath-table` and `svpath-dashboard`.
pub mod colours;
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use colours::{ColourMap, Rgb};
pub use config::{ChartConfig, DashboardConfig, TrackConfig};
pub use errors::{CoreError, Result};
pub use models::*;
