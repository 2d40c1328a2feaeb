use anyhow::Result;
use clap::ArgMatches;

use svpath_dashboard::build_track_spec;

use crate::common::{load_config, parse_chromosome, parse_levels, write_json};

pub fn run_track_spec(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let chromosome = parse_chromosome(matches)?;
    let levels = parse_levels(matches)?;

    let spec = build_track_spec(&levels, &config.colours, &config.track, chromosome)?;
    write_json(matches, &spec)
}
