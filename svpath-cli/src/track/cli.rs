use clap::Command;

use crate::common::{chrom_arg, config_arg, levels_arg, output_arg};

pub const TRACK_SPEC_CMD: &str = "track-spec";

pub fn create_track_cli() -> Command {
    Command::new(TRACK_SPEC_CMD)
        .about("Print the genome-track spec (circular overview and linked detail view) as JSON.")
        .arg(chrom_arg())
        .arg(levels_arg())
        .arg(config_arg())
        .arg(output_arg())
}
