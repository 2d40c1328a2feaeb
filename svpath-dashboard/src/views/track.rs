use std::sync::Arc;

use log::{debug, warn};

use svpath_core::{DashboardConfig, FilterState};

use crate::filter::{FilterChange, FilterObserver};
use crate::track_spec::{build_track_spec, TrackSpec};
use crate::views::ViewStatus;

///
/// Pan and zoom control of an external genome-track renderer.
///
/// `chromosome` is the assembly label of the chromosome, e.g. `chr5`.
///
pub trait TrackNavigator {
    fn zoom_to(&mut self, track_id: &str, chromosome: &str);
    fn zoom_to_extent(&mut self, track_id: &str);
}

/// Navigator for headless use: records nothing, logs every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl TrackNavigator for LogNavigator {
    fn zoom_to(&mut self, track_id: &str, chromosome: &str) {
        debug!("Track '{}': zoom to {}", track_id, chromosome);
    }

    fn zoom_to_extent(&mut self, track_id: &str) {
        debug!("Track '{}': zoom to full extent", track_id);
    }
}

/// The genome-track view: its declarative spec plus navigation of the live renderer.
pub struct TrackView {
    config: Arc<DashboardConfig>,
    navigator: Box<dyn TrackNavigator>,
    status: ViewStatus<TrackSpec>,
}

impl TrackView {
    pub fn new(
        config: Arc<DashboardConfig>,
        navigator: Box<dyn TrackNavigator>,
        filter: &FilterState,
    ) -> Self {
        let mut view = TrackView {
            config,
            navigator,
            status: ViewStatus::Loading,
        };
        view.rebuild(filter);
        view
    }

    pub fn status(&self) -> &ViewStatus<TrackSpec> {
        &self.status
    }

    fn rebuild(&mut self, filter: &FilterState) {
        let spec = build_track_spec(
            &filter.selected_levels,
            &self.config.colours,
            &self.config.track,
            filter.selected_chromosome,
        );
        if let Err(e) = &spec {
            warn!("Can't build track spec: {}", e);
        }
        self.status = spec.into();
    }

    fn navigate(&mut self, filter: &FilterState) {
        let track_id = &self.config.track.track_id;
        match filter.selected_chromosome {
            Some(chromosome) => self.navigator.zoom_to(track_id, &chromosome.ucsc_label()),
            None => self.navigator.zoom_to_extent(track_id),
        }
    }
}

impl FilterObserver for TrackView {
    fn on_filter_change(&mut self, change: &FilterChange) {
        if change.chromosome_changed() {
            self.navigate(&change.current);
        }
        self.rebuild(&change.current);
    }
}
