use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};

use svpath_core::{ChromosomeId, DashboardConfig, LevelSet};

pub fn chrom_arg() -> Arg {
    Arg::new("chrom")
        .long("chrom")
        .short('c')
        .help("Selected chromosome (1-22, X, Y; an optional chr prefix is accepted)")
}

pub fn levels_arg() -> Arg {
    Arg::new("levels")
        .long("levels")
        .short('l')
        .help("Comma separated active levels, e.g. 'Benign,Pathogenic' (default: all)")
}

pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .help("Dashboard config (TOML); defaults are used when omitted")
}

pub fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Write to this file instead of stdout")
}

pub fn parse_chromosome(matches: &ArgMatches) -> Result<Option<ChromosomeId>> {
    matches
        .get_one::<String>("chrom")
        .map(|raw| {
            raw.parse::<ChromosomeId>()
                .with_context(|| format!("Invalid --chrom: {}", raw))
        })
        .transpose()
}

pub fn parse_levels(matches: &ArgMatches) -> Result<LevelSet> {
    match matches.get_one::<String>("levels") {
        Some(raw) => raw
            .parse::<LevelSet>()
            .with_context(|| format!("Invalid --levels: {}", raw)),
        None => Ok(LevelSet::all()),
    }
}

pub fn load_config(matches: &ArgMatches) -> Result<DashboardConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => DashboardConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path)),
        None => Ok(DashboardConfig::default()),
    }
}

/// Stdout, or the file named by `--output`.
pub fn open_output(matches: &ArgMatches) -> Result<Box<dyn Write>> {
    match matches.get_one::<String>("output") {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create output: {}", path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

pub fn write_json<T: serde::Serialize>(matches: &ArgMatches, value: &T) -> Result<()> {
    let mut out = open_output(matches)?;
    let json = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Current-thread runtime for the dataset loads of one command.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start async runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Command;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use svpath_core::PathogenicityLevel;

    fn parse(args: &[&str]) -> ArgMatches {
        Command::new("test")
            .arg(chrom_arg())
            .arg(levels_arg())
            .arg(config_arg())
            .get_matches_from(args.iter().copied())
    }

    #[rstest]
    fn test_defaults() {
        let matches = parse(&["test"]);
        assert_eq!(parse_chromosome(&matches).unwrap(), None);
        assert_eq!(parse_levels(&matches).unwrap(), LevelSet::all());
        assert_eq!(load_config(&matches).unwrap(), DashboardConfig::default());
    }

    #[rstest]
    fn test_filter_args() {
        let matches = parse(&["test", "--chrom", "chrX", "--levels", "Pathogenic,Benign"]);
        assert_eq!(parse_chromosome(&matches).unwrap(), Some(ChromosomeId::X));
        assert_eq!(
            parse_levels(&matches).unwrap().to_vec(),
            vec![PathogenicityLevel::Benign, PathogenicityLevel::Pathogenic]
        );
    }

    #[rstest]
    #[case(&["test", "--chrom", "MT"])]
    #[case(&["test", "--levels", "Benign,Harmless"])]
    fn test_invalid_filter_args(#[case] args: &[&str]) {
        let matches = parse(args);
        assert!(parse_chromosome(&matches).is_err() || parse_levels(&matches).is_err());
    }

    #[rstest]
    fn test_config_file() {
        let matches = parse(&["test", "--config", "../tests/data/dashboard.toml"]);
        let config = load_config(&matches).unwrap();
        assert_eq!(config.default_page_size, 2);
    }
}
