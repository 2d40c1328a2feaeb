mod common;

mod chart {
    pub mod cli;
    pub mod handlers;
}
mod matches {
    pub mod cli;
    pub mod handlers;
}
mod prep {
    pub mod cli;
    pub mod handlers;
}
mod track {
    pub mod cli;
    pub mod handlers;
}

use std::io::Write;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Builder;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "svpath";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("svpath developers")
        .about("Per-chromosome pathogenicity charts, match tables and genome-track specs for structural-variant matches against ClinVar.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages"),
        )
        .subcommand(chart::cli::create_chart_cli())
        .subcommand(matches::cli::create_matches_cli())
        .subcommand(track::cli::create_track_cli())
        .subcommand(prep::cli::create_prep_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // CHART GEOMETRY
        //
        Some((chart::cli::CHART_CMD, matches)) => {
            chart::handlers::run_chart(matches)?;
        }

        //
        // MATCH TABLE
        //
        Some((matches::cli::MATCHES_CMD, matches)) => {
            matches::handlers::run_matches(matches)?;
        }

        //
        // GENOME TRACK SPEC
        //
        Some((track::cli::TRACK_SPEC_CMD, matches)) => {
            track::handlers::run_track_spec(matches)?;
        }

        //
        // DATA PREPARATION
        //
        Some((prep::cli::PREP_CMD, matches)) => match matches.subcommand() {
            Some((prep::cli::COUNT_VARIANTS_CMD, matches)) => {
                prep::handlers::run_count_variants(matches)?;
            }
            Some((prep::cli::CLEAN_MATCHES_CMD, matches)) => {
                prep::handlers::run_clean_matches(matches)?;
            }
            _ => unreachable!("prep subcommand not found"),
        },

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
