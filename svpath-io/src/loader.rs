//! Asynchronous dataset loading.
//!
//! Parsing runs on tokio's blocking pool so the caller's event loop keeps
//! processing filter transitions while a large table is read. Whether a finished
//! load is still wanted is decided by the caller (see `svpath-dashboard`), not here.

use std::path::PathBuf;

use tokio::task;

use svpath_core::{ChromosomeId, MatchRecord, SummaryTable};

use crate::error::Result;
use crate::tsv::{read_match_table_from_path, read_summary_table_from_path};

/// Load a summary table in the background.
pub async fn load_summary_table(path: PathBuf) -> Result<SummaryTable> {
    task::spawn_blocking(move || read_summary_table_from_path(&path)).await?
}

/// Load match records in the background, optionally narrowed to one chromosome.
pub async fn load_match_table(
    path: PathBuf,
    chromosome: Option<ChromosomeId>,
) -> Result<Vec<MatchRecord>> {
    task::spawn_blocking(move || read_match_table_from_path(&path, chromosome)).await?
}
