use anyhow::{Context, Result};
use clap::ArgMatches;

use svpath_core::utils::get_dynamic_reader_w_stdin;
use svpath_io::prep::{clean_matches, count_variants};

use crate::common::open_output;

pub fn run_count_variants(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("An input table is required");

    let reader = get_dynamic_reader_w_stdin(input)?;
    let writer = open_output(matches)?;
    count_variants(reader, writer).with_context(|| format!("Failed to count variants in {}", input))
}

pub fn run_clean_matches(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("An input table is required");

    let reader = get_dynamic_reader_w_stdin(input)?;
    let writer = open_output(matches)?;
    clean_matches(reader, writer).with_context(|| format!("Failed to clean matches in {}", input))
}
