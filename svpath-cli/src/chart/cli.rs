use clap::{Arg, Command};

use crate::common::{chrom_arg, config_arg, levels_arg, output_arg};

pub const CHART_CMD: &str = "chart";

pub fn create_chart_cli() -> Command {
    Command::new(CHART_CMD)
        .about("Lay out the stacked per-chromosome bar chart of a summary table as JSON.")
        .arg(
            Arg::new("summary")
                .long("summary")
                .short('s')
                .required(true)
                .help("Per-chromosome counts (TSV, optionally gzipped)"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .default_value("ClinVar Variants")
                .help("Chart title"),
        )
        .arg(chrom_arg())
        .arg(levels_arg())
        .arg(config_arg())
        .arg(output_arg())
}
