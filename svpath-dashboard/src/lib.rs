//! # svpath-dashboard
//!
//! Cross-view coordination for the structural-variant pathogenicity dashboard.
//!
//! A [`Dashboard`] owns the datasets, the single shared
//! [`FilterState`](svpath_core::FilterState) (inside a [`FilterStore`]) and three kinds
//! of views derived from them:
//!
//! - [`ChartView`]: stacked bar chart per summary dataset
//! - [`TableView`]: filtered, sorted, paginated match table
//! - [`TrackView`]: declarative genome-track spec plus renderer navigation
//!
//! Datasets arrive asynchronously. Each load is tagged when issued and checked when
//! it completes, so a result that was overtaken by a newer load or filter change is
//! dropped instead of overwriting fresher state.
//!
//! ```no_run
//! use svpath_core::DashboardConfig;
//! use svpath_dashboard::{Dashboard, LoadSlot, LogNavigator};
//! use svpath_io::read_summary_table_from_path;
//! use std::path::Path;
//!
//! let mut dashboard = Dashboard::new(
//!     DashboardConfig::default(),
//!     &["ClinVar Variants"],
//!     Box::new(LogNavigator),
//! )
//! .unwrap();
//!
//! let tag = dashboard.begin_load(LoadSlot::Summary("ClinVar Variants".to_string()), false);
//! let table = read_summary_table_from_path(Path::new("clinvar_counts_by_chromosome.tsv"));
//! dashboard.complete_summary_load(tag, table);
//!
//! dashboard.select_chromosome(Some("5".parse().unwrap()));
//! ```
pub mod composer;
pub mod errors;
pub mod filter;
pub mod loads;
pub mod track_spec;
pub mod views;

// re-exports
pub use composer::Dashboard;
pub use errors::{DashboardError, Result};
pub use filter::{FilterAction, FilterChange, FilterObserver, FilterStore};
pub use loads::{LoadOutcome, LoadSlot, LoadTag, LoadTracker};
pub use track_spec::{build_track_spec, significance_colours, TrackSpec};
pub use views::{
    ChartView, LogNavigator, TableView, TableViewOutput, TrackNavigator, TrackView, ViewStatus,
};
