use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ArgMatches;

use svpath_dashboard::{Dashboard, LoadOutcome, LoadSlot, LogNavigator, ViewStatus};
use svpath_io::load_summary_table;

use crate::common::{load_config, parse_chromosome, parse_levels, runtime, write_json};

pub fn run_chart(matches: &ArgMatches) -> Result<()> {
    let summary = matches
        .get_one::<String>("summary")
        .expect("A summary table is required");
    let title = matches
        .get_one::<String>("title")
        .expect("title has a default");

    let config = load_config(matches)?;
    let chromosome = parse_chromosome(matches)?;
    let levels = parse_levels(matches)?;

    let mut dashboard = Dashboard::new(config, &[title.as_str()], Box::new(LogNavigator))?;
    dashboard.select_chromosome(chromosome);
    dashboard.set_levels(levels);

    let tag = dashboard.begin_load(LoadSlot::Summary(title.clone()), false);
    let table = runtime()?.block_on(load_summary_table(PathBuf::from(summary)));
    if let LoadOutcome::Failed(message) = dashboard.complete_summary_load(tag, table) {
        bail!("Failed to load {}: {}", summary, message);
    }

    match dashboard.chart(title)?.status() {
        ViewStatus::Ready(geometry) => write_json(matches, geometry),
        ViewStatus::Failed(message) => bail!("Can't draw '{}': {}", title, message),
        ViewStatus::Loading => bail!("'{}' has no data", title),
    }
}
