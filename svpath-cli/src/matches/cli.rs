use clap::{Arg, ArgAction, Command, value_parser};

use crate::common::{chrom_arg, config_arg, levels_arg, output_arg};

pub const MATCHES_CMD: &str = "matches";

pub fn create_matches_cli() -> Command {
    Command::new(MATCHES_CMD)
        .about("Filter, sort and paginate the match table; prints one page.")
        .arg(
            Arg::new("matches")
                .long("matches")
                .short('m')
                .required(true)
                .help("Cleaned match table (TSV, optionally gzipped)"),
        )
        .arg(chrom_arg())
        .arg(levels_arg())
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Column to sort by: chr, position, type, significance or similarity"),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .action(ArgAction::SetTrue)
                .requires("sort")
                .help("Sort descending"),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .short('p')
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Page to print, numbered from 1"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_parser(value_parser!(usize))
                .help("Rows per page; must be one of the configured options"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["json", "tsv"])
                .default_value("json")
                .help("Output format"),
        )
        .arg(config_arg())
        .arg(output_arg())
}
