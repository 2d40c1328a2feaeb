//! Integration tests: datasets loaded from tests/data, filter actions propagated
//! to every view.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use pretty_assertions::assert_eq;

use svpath_core::{ChromosomeId, DashboardConfig, LevelSet, PathogenicityLevel};
use svpath_dashboard::{
    Dashboard, FilterAction, LoadOutcome, LoadSlot, TrackNavigator, ViewStatus,
};
use svpath_io::{load_match_table, load_summary_table};
use svpath_table::{Cell, ColumnId};

const CLINVAR: &str = "ClinVar Variants";
const MATCHES: &str = "HG002 Matches";

#[derive(Clone, Default)]
struct RecordingNavigator {
    calls: Rc<RefCell<Vec<String>>>,
}

impl TrackNavigator for RecordingNavigator {
    fn zoom_to(&mut self, track_id: &str, chromosome: &str) {
        self.calls
            .borrow_mut()
            .push(format!("zoom_to {} {}", track_id, chromosome));
    }

    fn zoom_to_extent(&mut self, track_id: &str) {
        self.calls
            .borrow_mut()
            .push(format!("zoom_to_extent {}", track_id));
    }
}

fn data(name: &str) -> PathBuf {
    Path::new("../tests/data").join(name)
}

fn config() -> DashboardConfig {
    DashboardConfig::try_from(data("dashboard.toml").as_path()).unwrap()
}

async fn loaded_dashboard(navigator: RecordingNavigator) -> Dashboard {
    let mut dashboard = Dashboard::new(config(), &[CLINVAR, MATCHES], Box::new(navigator)).unwrap();

    let tag = dashboard.begin_load(LoadSlot::Summary(CLINVAR.to_string()), false);
    let table = load_summary_table(data("clinvar_counts_by_chromosome.tsv")).await;
    assert_eq!(dashboard.complete_summary_load(tag, table), LoadOutcome::Applied);

    let tag = dashboard.begin_load(LoadSlot::Summary(MATCHES.to_string()), false);
    let table = load_summary_table(data("hg002_matches_counts_by_chromosome.tsv")).await;
    assert_eq!(dashboard.complete_summary_load(tag, table), LoadOutcome::Applied);

    let tag = dashboard.begin_load(LoadSlot::Matches, false);
    let records = load_match_table(data("allmatched_clean.tsv"), None).await;
    assert_eq!(dashboard.complete_match_load(tag, records), LoadOutcome::Applied);

    dashboard
}

fn five() -> ChromosomeId {
    "5".parse().unwrap()
}

#[tokio::test]
async fn test_views_start_from_the_unfiltered_state() {
    let dashboard = loaded_dashboard(RecordingNavigator::default()).await;

    let clinvar = dashboard.chart(CLINVAR).unwrap().status().ready().unwrap();
    assert_eq!(clinvar.columns.len(), 24);
    assert_eq!(clinvar.max_total, 1073);
    let column = clinvar.columns.iter().find(|c| c.chromosome == five()).unwrap();
    assert_eq!(column.total, 6);

    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.total_rows, 12);
    assert_eq!(table.page.rows.len(), 2);
    assert_eq!(table.page.total_pages, 6);
    assert_eq!(table.headers[0], "Chr");
}

#[tokio::test]
async fn test_missing_counts_fail_only_their_chart() {
    let mut dashboard = loaded_dashboard(RecordingNavigator::default()).await;

    // chromosome Y of the match summary has no Likely pathogenic or Pathogenic count
    assert!(dashboard.chart(MATCHES).unwrap().status().is_failed());
    assert!(dashboard.chart(CLINVAR).unwrap().status().ready().is_some());
    assert!(dashboard.table().status().ready().is_some());

    dashboard.set_levels(
        vec![
            PathogenicityLevel::UncertainSignificance,
            PathogenicityLevel::Benign,
        ]
        .into(),
    );

    let matches = dashboard.chart(MATCHES).unwrap().status().ready().unwrap();
    assert_eq!(matches.max_total, 17);
    assert_eq!(
        matches.active_levels,
        vec![
            PathogenicityLevel::UncertainSignificance,
            PathogenicityLevel::Benign
        ]
    );
}

#[tokio::test]
async fn test_selection_reaches_every_view() {
    let navigator = RecordingNavigator::default();
    let calls = Rc::clone(&navigator.calls);
    let mut dashboard = loaded_dashboard(navigator).await;

    dashboard.last_page();
    assert_eq!(dashboard.table().state().page_index(), 5);

    dashboard.select_chromosome(Some(five()));
    dashboard.set_levels(vec![PathogenicityLevel::Pathogenic].into());

    // table: only chromosome 5 Pathogenic rows, back on the first page
    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.page_index, 0);
    assert_eq!(table.page.total_rows, 2);
    assert!(table.page.rows.iter().all(|r| r.chromosome == five()));
    assert!(matches!(
        &table.cells[0][3],
        Cell::Significance { label, unmapped: false, .. } if label == "Pathogenic"
    ));

    // charts: the chromosome 5 column is outlined and the scale follows Pathogenic alone
    let clinvar = dashboard.chart(CLINVAR).unwrap().status().ready().unwrap();
    assert_eq!(clinvar.max_total, 383);
    let selected: Vec<ChromosomeId> = clinvar
        .columns
        .iter()
        .filter(|c| c.selected)
        .map(|c| c.chromosome)
        .collect();
    assert_eq!(selected, vec![five()]);
    let outlined = clinvar
        .columns
        .iter()
        .find(|c| c.selected)
        .unwrap()
        .rects
        .iter()
        .filter(|r| r.border.is_some())
        .count();
    assert_eq!(outlined, 1);

    // track: colours restricted to Pathogenic and the renderer zoomed to chr5
    let spec = serde_json::to_value(dashboard.track().status().ready().unwrap()).unwrap();
    assert_eq!(
        spec["views"][1]["tracks"][0]["color"]["domain"],
        serde_json::json!(["Pathogenic"])
    );
    assert_eq!(spec["views"][1]["tracks"][0]["x"]["domain"]["chromosome"], "5");
    assert_eq!(*calls.borrow(), vec!["zoom_to detail chr5".to_string()]);

    dashboard.dispatch(FilterAction::Reset);
    assert_eq!(
        *calls.borrow(),
        vec![
            "zoom_to detail chr5".to_string(),
            "zoom_to_extent detail".to_string()
        ]
    );
    assert_eq!(dashboard.filter().selected_levels, LevelSet::all());
}

#[tokio::test]
async fn test_listeners_run_after_views_refresh() {
    let navigator = RecordingNavigator::default();
    let calls = Rc::clone(&navigator.calls);
    let mut dashboard = loaded_dashboard(navigator).await;

    let sink = Rc::clone(&calls);
    dashboard.subscribe(move |change| {
        sink.borrow_mut()
            .push(format!("listener generation {}", change.generation));
    });

    dashboard.select_chromosome(Some(five()));
    dashboard.select_chromosome(Some(five()));

    assert_eq!(
        *calls.borrow(),
        vec![
            "zoom_to detail chr5".to_string(),
            "listener generation 1".to_string()
        ]
    );
}

#[tokio::test]
async fn test_stale_scoped_load_is_discarded() {
    let mut dashboard = loaded_dashboard(RecordingNavigator::default()).await;

    dashboard.select_chromosome(Some(ChromosomeId::X));
    let for_x = dashboard.begin_load(LoadSlot::Matches, true);

    // the user moves on before the narrowed load arrives
    dashboard.select_chromosome(Some(five()));
    let for_five = dashboard.begin_load(LoadSlot::Matches, true);

    let five_records = load_match_table(data("allmatched_clean.tsv"), Some(five())).await;
    assert_eq!(
        dashboard.complete_match_load(for_five, five_records),
        LoadOutcome::Applied
    );

    let x_records = load_match_table(data("allmatched_clean.tsv"), Some(ChromosomeId::X)).await;
    assert_eq!(
        dashboard.complete_match_load(for_x, x_records),
        LoadOutcome::Stale
    );

    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.total_rows, 5);
    assert_eq!(dashboard.store().matches().len(), 5);
}

#[tokio::test]
async fn test_scoped_load_survives_level_changes() {
    let mut dashboard = loaded_dashboard(RecordingNavigator::default()).await;

    dashboard.select_chromosome(Some(ChromosomeId::X));
    let for_x = dashboard.begin_load(LoadSlot::Matches, true);
    let x_records = load_match_table(data("allmatched_clean.tsv"), Some(ChromosomeId::X)).await;
    assert_eq!(
        dashboard.complete_match_load(for_x, x_records),
        LoadOutcome::Applied
    );

    dashboard.select_chromosome(Some(five()));
    let for_five = dashboard.begin_load(LoadSlot::Matches, true);

    // levels do not narrow the fetch, so the chromosome 5 load still applies
    dashboard.toggle_level(PathogenicityLevel::Benign);

    let five_records = load_match_table(data("allmatched_clean.tsv"), Some(five())).await;
    assert_eq!(
        dashboard.complete_match_load(for_five, five_records),
        LoadOutcome::Applied
    );
    assert_eq!(dashboard.store().matches().len(), 5);

    // Pathogenic twice and Likely pathogenic once; Benign is off, the unmapped row hidden
    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.total_rows, 3);
    assert!(table.page.rows.iter().all(|r| r.chromosome == five()));
}

#[tokio::test]
async fn test_failed_load_is_reported_on_its_view() {
    let mut dashboard = Dashboard::new(
        config(),
        &[CLINVAR],
        Box::new(RecordingNavigator::default()),
    )
    .unwrap();
    assert!(dashboard.chart(CLINVAR).unwrap().status().is_loading());

    let tag = dashboard.begin_load(LoadSlot::Summary(CLINVAR.to_string()), false);
    let table = load_summary_table(data("malformed_counts.tsv")).await;
    let outcome = dashboard.complete_summary_load(tag, table);

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert!(matches!(
        dashboard.chart(CLINVAR).unwrap().status(),
        ViewStatus::Failed(message) if message.contains("Malformed count")
    ));
    assert!(dashboard.table().status().is_loading());
}

#[tokio::test]
async fn test_table_controls() {
    let mut dashboard = loaded_dashboard(RecordingNavigator::default()).await;

    dashboard.toggle_sort(ColumnId::Similarity).unwrap();
    dashboard.toggle_sort(ColumnId::Similarity).unwrap();
    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.rows[0].similarity, 100.0);

    assert!(dashboard.toggle_sort(ColumnId::Gene).is_err());
    assert!(dashboard.set_page_size(7).is_err());

    dashboard.set_page_size(5).unwrap();
    assert!(dashboard.go_to_page(3));
    assert!(!dashboard.go_to_page(4));
    let table = dashboard.table().status().ready().unwrap();
    assert_eq!(table.page.position_label(), "Page 3 of 3");

    dashboard.previous_page();
    dashboard.first_page();
    dashboard.next_page();
    assert_eq!(dashboard.table().state().page_index(), 1);
}

#[tokio::test]
async fn test_legend_order() {
    let dashboard = loaded_dashboard(RecordingNavigator::default()).await;
    let labels: Vec<String> = dashboard.legend().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "No match",
            "Uncertain significance",
            "Benign",
            "Likely pathogenic",
            "Pathogenic"
        ]
    );
}
