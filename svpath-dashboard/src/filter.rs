//! The observable filter state shared by every view.
//!
//! [`FilterStore`] owns the only [`FilterState`] in a dashboard. It is changed through
//! [`FilterStore::apply`] alone, and every effective change is stamped with a new
//! generation and announced to the subscribers in subscription order.

use std::fmt;

use log::debug;

use svpath_core::{ChromosomeId, FilterState, LevelSet, PathogenicityLevel};

/// A user action on the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the selected chromosome; `None` clears the selection.
    SelectChromosome(Option<ChromosomeId>),
    /// Add or remove one level.
    ToggleLevel(PathogenicityLevel),
    /// Replace the whole level set.
    SetLevels(LevelSet),
    /// Back to no chromosome and every level.
    Reset,
}

/// An effective transition of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChange {
    pub previous: FilterState,
    pub current: FilterState,
    /// Generation of `current`; increases by one per effective change.
    pub generation: u64,
}

impl FilterChange {
    pub fn chromosome_changed(&self) -> bool {
        self.previous.selected_chromosome != self.current.selected_chromosome
    }

    pub fn levels_changed(&self) -> bool {
        self.previous.selected_levels != self.current.selected_levels
    }
}

/// Something that re-derives its output whenever the filter changes.
pub trait FilterObserver {
    fn on_filter_change(&mut self, change: &FilterChange);
}

type Listener = Box<dyn FnMut(&FilterChange)>;

#[derive(Default)]
pub struct FilterStore {
    state: FilterState,
    generation: u64,
    listeners: Vec<Listener>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FilterState) -> Self {
        FilterStore {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Register a listener called after every effective change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FilterChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    ///
    /// Apply one action.
    ///
    /// Returns the transition, or `None` when the action leaves the state as it was
    /// (selecting the chromosome that is already selected, for example). Nothing is
    /// announced and the generation is kept in that case.
    ///
    pub fn apply(&mut self, action: FilterAction) -> Option<FilterChange> {
        let previous = self.state;
        let mut next = previous;

        match action {
            FilterAction::SelectChromosome(chromosome) => next.selected_chromosome = chromosome,
            FilterAction::ToggleLevel(level) => {
                next.selected_levels.toggle(level);
            }
            FilterAction::SetLevels(levels) => next.selected_levels = levels,
            FilterAction::Reset => next = FilterState::default(),
        }

        if next == previous {
            debug!("Filter unchanged by {:?}", action);
            return None;
        }

        self.state = next;
        self.generation += 1;

        let change = FilterChange {
            previous,
            current: next,
            generation: self.generation,
        };
        debug!(
            "Filter generation {}: chromosome {:?}, levels [{}]",
            self.generation,
            next.selected_chromosome.map(|c| c.label()),
            next.selected_levels
        );

        for listener in self.listeners.iter_mut() {
            listener(&change);
        }

        Some(change)
    }

    pub fn select_chromosome(&mut self, chromosome: Option<ChromosomeId>) -> Option<FilterChange> {
        self.apply(FilterAction::SelectChromosome(chromosome))
    }

    pub fn toggle_level(&mut self, level: PathogenicityLevel) -> Option<FilterChange> {
        self.apply(FilterAction::ToggleLevel(level))
    }

    pub fn set_levels(&mut self, levels: LevelSet) -> Option<FilterChange> {
        self.apply(FilterAction::SetLevels(levels))
    }
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use PathogenicityLevel::*;

    #[rstest]
    fn test_toggle_round_trip_restores_order() {
        let mut store = FilterStore::new();
        let original = store.state().selected_levels;

        store.toggle_level(Benign);
        store.toggle_level(UncertainSignificance);
        assert_eq!(store.state().selected_levels.to_vec(), vec![LikelyPathogenic, Pathogenic]);

        // re-enabled in the opposite order, still severity ordered
        store.toggle_level(Benign);
        store.toggle_level(UncertainSignificance);
        assert_eq!(store.state().selected_levels, original);
        assert_eq!(
            store.state().selected_levels.to_vec(),
            vec![UncertainSignificance, Benign, LikelyPathogenic, Pathogenic]
        );
    }

    #[rstest]
    fn test_toggle_leaves_other_levels() {
        let mut store = FilterStore::new();
        store.set_levels(vec![Benign, Pathogenic].into());
        store.toggle_level(LikelyPathogenic);
        assert_eq!(
            store.state().selected_levels.to_vec(),
            vec![Benign, LikelyPathogenic, Pathogenic]
        );
    }

    #[rstest]
    fn test_generation_counts_effective_changes() {
        let mut store = FilterStore::new();
        let five = Some("5".parse().unwrap());

        let change = store.select_chromosome(five).unwrap();
        assert_eq!(change.generation, 1);
        assert!(change.chromosome_changed());
        assert!(!change.levels_changed());

        assert_eq!(store.select_chromosome(five), None);
        assert_eq!(store.generation(), 1);

        store.apply(FilterAction::Reset);
        assert_eq!(store.generation(), 2);
        assert_eq!(*store.state(), FilterState::default());
    }

    #[rstest]
    fn test_listeners_see_every_change() {
        let seen: Rc<RefCell<Vec<u64>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = FilterStore::new();

        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(change.generation));

        store.toggle_level(Benign);
        store.select_chromosome(Some(ChromosomeId::X));
        store.select_chromosome(Some(ChromosomeId::X));
        store.select_chromosome(None);

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_empty_levels_are_legal() {
        let mut store = FilterStore::new();
        store.set_levels(LevelSet::empty());
        assert!(store.state().selected_levels.is_empty());
    }
}
