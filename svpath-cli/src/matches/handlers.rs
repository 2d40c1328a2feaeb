use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;

use svpath_dashboard::{
    Dashboard, LoadOutcome, LoadSlot, LogNavigator, TableViewOutput, ViewStatus,
};
use svpath_io::load_match_table;
use svpath_table::{row_text, ColumnId, TableColumns};

use crate::common::{
    load_config, open_output, parse_chromosome, parse_levels, runtime, write_json,
};

fn write_tsv(matches: &ArgMatches, output: &TableViewOutput, columns: &TableColumns) -> Result<()> {
    let mut out = open_output(matches)?;
    writeln!(out, "{}", output.headers.join("\t"))?;
    for record in &output.page.rows {
        writeln!(out, "{}", row_text(record, columns).join("\t"))?;
    }
    out.flush()?;
    Ok(())
}

pub fn run_matches(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("matches")
        .expect("A match table is required");
    let page = *matches.get_one::<usize>("page").expect("page has a default");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let config = load_config(matches)?;
    let chromosome = parse_chromosome(matches)?;
    let levels = parse_levels(matches)?;

    let mut dashboard = Dashboard::new(config, &[], Box::new(LogNavigator))?;
    dashboard.select_chromosome(chromosome);
    dashboard.set_levels(levels);

    // narrowed to the selected chromosome at load time, like the dashboard does
    let tag = dashboard.begin_load(LoadSlot::Matches, chromosome.is_some());
    let records = runtime()?.block_on(load_match_table(PathBuf::from(path), chromosome));
    if let LoadOutcome::Failed(message) = dashboard.complete_match_load(tag, records) {
        bail!("Failed to load {}: {}", path, message);
    }

    if let Some(size) = matches.get_one::<usize>("page-size") {
        dashboard.set_page_size(*size)?;
    }
    if let Some(column) = matches.get_one::<String>("sort") {
        let column = column.parse::<ColumnId>()?;
        dashboard.toggle_sort(column)?;
        if matches.get_flag("desc") {
            dashboard.toggle_sort(column)?;
        }
    }
    if page > 1 && !dashboard.go_to_page(page) {
        bail!("There is no page {}", page);
    }

    let output = match dashboard.table().status() {
        ViewStatus::Ready(output) => output,
        ViewStatus::Failed(message) => bail!("Can't show the match table: {}", message),
        ViewStatus::Loading => bail!("The match table has no data"),
    };

    match format.as_str() {
        "tsv" => write_tsv(matches, output, dashboard.table().columns())
            .context("Failed to write match table"),
        _ => write_json(matches, output),
    }
}
