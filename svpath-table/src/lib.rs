//! # svpath-table
//!
//! The match table: which rows pass the shared [`FilterState`](svpath_core::FilterState),
//! in which order, on which page, and how their cells are presented.
//!
//! Column behaviour is fixed per [`ColumnId`] when the [`TableColumns`] are built. The
//! chromosome column sorts in karyotype order and the clinical significance column in
//! severity order, never by string comparison.
//!
//! ```
//! use svpath_core::{FilterState, DashboardConfig};
//! use svpath_table::{view, ColumnId, TableViewState};
//!
//! let mut state = TableViewState::try_from(&DashboardConfig::default()).unwrap();
//! state.toggle_sort(ColumnId::Chromosome).unwrap();
//!
//! let page = view(&[], &FilterState::default(), &state);
//! assert!(page.is_empty());
//! ```
pub mod cells;
pub mod columns;
pub mod errors;
pub mod state;
pub mod view;

// re-exports
pub use cells::{render_row, row_text, Cell};
pub use columns::{CellRenderer, ColumnId, ColumnSpec, SortKind, TableColumns};
pub use errors::{Result, TableError};
pub use state::{SortState, TableViewState};
pub use view::{view, TablePage};
