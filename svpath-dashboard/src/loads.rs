//! Tagging of asynchronous dataset loads.
//!
//! Every load is issued with a [`LoadTag`]. When the result arrives the tag decides
//! whether it may still be applied: a newer load for the same slot supersedes it,
//! and a load narrowed to the chromosome selected at its time is void once another
//! chromosome (or none) is selected. Level changes never void a load.

use fxhash::FxHashMap;
use serde::Serialize;

use svpath_core::ChromosomeId;

/// Which dataset a load fills.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum LoadSlot {
    /// The summary dataset behind the chart with this title.
    Summary(String),
    Matches,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadTag {
    pub id: u64,
    pub slot: LoadSlot,
    /// Chromosome selected when the load was issued.
    pub chromosome: Option<ChromosomeId>,
    /// The load was narrowed to `chromosome`.
    pub scoped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadOutcome {
    Applied,
    /// Superseded by a newer load or by a filter change; nothing was changed.
    Stale,
    /// The load failed; the affected view shows the message.
    Failed(String),
}

/// The latest load issued per slot.
#[derive(Debug, Default)]
pub struct LoadTracker {
    next_id: u64,
    latest: FxHashMap<LoadSlot, u64>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(
        &mut self,
        slot: LoadSlot,
        chromosome: Option<ChromosomeId>,
        scoped: bool,
    ) -> LoadTag {
        self.next_id += 1;
        self.latest.insert(slot.clone(), self.next_id);
        LoadTag {
            id: self.next_id,
            slot,
            chromosome,
            scoped,
        }
    }

    /// Whether `tag` may be applied while `selected` is the selected chromosome.
    pub fn is_current(&self, tag: &LoadTag, selected: Option<ChromosomeId>) -> bool {
        let latest = self.latest.get(&tag.slot) == Some(&tag.id);
        latest && (!tag.scoped || tag.chromosome == selected)
    }
}
