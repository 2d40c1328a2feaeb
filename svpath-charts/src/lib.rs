//! Stacked bar charts of variant counts per chromosome.
//!
//! This crate turns a [`SummaryTable`](svpath_core::SummaryTable) and the shared
//! [`FilterState`](svpath_core::FilterState) into pixel geometry:
//!
//! - [`stack`]: cumulative intervals per chromosome over the active levels
//! - [`scales`]: band scale over chromosomes, linear scale over counts, axis ticks
//! - [`highlight`]: which edges of which segments outline the selected chromosome
//! - [`geometry`]: everything above combined into one serialisable [`ChartGeometry`]
//!
//! # Example
//!
//! ```no_run
//! use svpath_charts::build_chart_geometry;
//! use svpath_core::{DashboardConfig, FilterState};
//! use svpath_io::read_summary_table_from_path;
//! use std::path::Path;
//!
//! let table = read_summary_table_from_path(Path::new("counts.tsv")).unwrap();
//! let config = DashboardConfig::default();
//! let chart = build_chart_geometry(
//!     "ClinVar Variants",
//!     &table,
//!     &FilterState::default(),
//!     &config.chart,
//!     &config.colours,
//! )
//! .unwrap();
//! println!("tallest column: {}", chart.max_total);
//! ```

pub mod errors;
pub mod geometry;
pub mod highlight;
pub mod scales;
pub mod stack;

// re-exports
pub use errors::ChartError;
pub use geometry::{build_chart_geometry, AxisTick, BarColumn, BarRect, ChartGeometry};
pub use highlight::{resolve_highlight, BorderSpec};
pub use scales::{compute_scales, Band, BandScale, ChartBounds, LinearScale, Scales};
pub use stack::{aggregate, max_total, StackedColumn, StackedSegment};
