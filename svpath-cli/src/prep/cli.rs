use clap::{Arg, Command};

use crate::common::output_arg;

pub const PREP_CMD: &str = "prep";
pub const COUNT_VARIANTS_CMD: &str = "count-variants";
pub const CLEAN_MATCHES_CMD: &str = "clean-matches";

pub fn create_prep_cli() -> Command {
    Command::new(PREP_CMD)
        .about("Prepare the dashboard input tables.")
        .subcommand_required(true)
        .subcommand(
            Command::new(COUNT_VARIANTS_CMD)
                .about("Pivot a ClinVar variant table (TSV) into counts per chromosome and clinical significance.")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .help("ClinVar variant table, or '-' for stdin"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new(CLEAN_MATCHES_CMD)
                .about("Trim a raw match table (CSV) to the displayed columns, sorted by chromosome.")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .help("Raw match table, or '-' for stdin"),
                )
                .arg(output_arg()),
        )
}
