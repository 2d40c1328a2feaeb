use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use fxhash::FxHashSet;
use log::{debug, info};
use serde::Deserialize;

use svpath_core::consts::CHROMOSOME_COLUMN;
use svpath_core::utils::get_dynamic_reader;
use svpath_core::{
    ChromosomeId, ChromosomeSummaryRow, MatchRecord, PathogenicityLevel, Significance,
    SummaryTable,
};

use crate::error::{IoError, Result};

fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

///
/// Parse a count cell. Integral values written as floats (`12.0`, as emitted by a
/// pivot over sparse data) are accepted; anything else is rejected.
///
fn parse_count(raw: &str) -> Option<u64> {
    if let Ok(count) = raw.parse::<u64>() {
        return Some(count);
    }
    let (whole, fraction) = raw.split_once('.')?;
    if !whole.is_empty() && fraction.bytes().all(|b| b == b'0') {
        whole.parse::<u64>().ok()
    } else {
        None
    }
}

///
/// Read a per-chromosome summary table.
///
/// The header must contain a `Chromosome` column; each level label found in the
/// header becomes a count column. Rows on chromosomes outside `1..22, X, Y` are
/// dropped. Empty cells are recorded as absent; any other non-integer cell fails the
/// whole table with [`IoError::MalformedCount`].
///
pub fn read_summary_table<R: Read>(reader: R) -> Result<SummaryTable> {
    let mut rdr = tsv_reader(reader);
    let headers = rdr.headers()?.clone();

    let chrom_idx = find_column(&headers, CHROMOSOME_COLUMN)
        .ok_or_else(|| IoError::MissingColumn(CHROMOSOME_COLUMN.to_string()))?;

    let level_columns: Vec<(PathogenicityLevel, usize)> = PathogenicityLevel::ALL
        .into_iter()
        .filter_map(|level| find_column(&headers, level.label()).map(|idx| (level, idx)))
        .collect();

    let mut seen: FxHashSet<ChromosomeId> = FxHashSet::default();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let raw_chrom = record.get(chrom_idx).unwrap_or_default();

        let chromosome = match raw_chrom.parse::<ChromosomeId>() {
            Ok(chromosome) => chromosome,
            Err(_) => {
                debug!("Dropping summary row for non-nuclear chromosome {:?}", raw_chrom);
                continue;
            }
        };

        if !seen.insert(chromosome) {
            return Err(IoError::DuplicateChromosome(chromosome));
        }

        let mut row = ChromosomeSummaryRow::new(chromosome);
        for (level, idx) in &level_columns {
            let cell = record.get(*idx).unwrap_or_default().trim();
            if cell.is_empty() {
                continue;
            }
            let count = parse_count(cell).ok_or_else(|| IoError::MalformedCount {
                chromosome,
                level: *level,
                value: cell.to_string(),
            })?;
            row.counts.insert(*level, count);
        }
        rows.push(row);
    }

    Ok(SummaryTable::new(rows))
}

#[derive(Debug, Deserialize)]
struct RawMatchRow {
    #[serde(rename = "CHROM")]
    chrom: String,
    #[serde(rename = "POS")]
    pos: String,
    #[serde(rename = "END", default)]
    end: Option<String>,
    #[serde(rename = "SVTYPE", alias = "Type")]
    sv_type: String,
    #[serde(rename = "ClinicalSignificance")]
    clinical_significance: String,
    #[serde(rename = "Similarity")]
    similarity: String,
    #[serde(rename = "AlleleID", alias = "#AlleleID", default)]
    allele_id: String,
    #[serde(rename = "PhenotypeList", default)]
    phenotype_list: String,
    #[serde(rename = "HGNC_ID", default)]
    hgnc_id: String,
}

/// Split a cleaned phenotype list; `-` stands for "no informative phenotype".
pub fn split_phenotypes(raw: &str) -> Vec<String> {
    if raw.trim() == "-" {
        return Vec::new();
    }
    raw.split([';', '|'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_position(raw: &str, line: u64) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| IoError::InvalidPosition {
            line,
            value: raw.to_string(),
        })
}

impl RawMatchRow {
    fn into_record(self, chromosome: ChromosomeId, line: u64) -> Result<MatchRecord> {
        let position = parse_position(&self.pos, line)?;
        let end = match self.end.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_position(raw, line)?),
        };

        let similarity = self
            .similarity
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| (0.0..=100.0).contains(s))
            .ok_or_else(|| IoError::InvalidSimilarity {
                line,
                value: self.similarity.clone(),
            })?;

        let clinical_significance = Significance::from(self.clinical_significance.as_str());
        if clinical_significance.is_unmapped() {
            debug!(
                "Line {}: significance {:?} has no configured level",
                line,
                clinical_significance.label()
            );
        }

        Ok(MatchRecord {
            chromosome,
            position,
            end,
            sv_type: self.sv_type,
            clinical_significance,
            similarity,
            allele_id: self.allele_id,
            phenotypes: split_phenotypes(&self.phenotype_list),
            gene: self.hgnc_id,
        })
    }
}

///
/// Read a match detail table.
///
/// When `chromosome` is given, only rows on that chromosome are kept. Rows on
/// non-nuclear chromosomes are always dropped.
///
pub fn read_match_table<R: Read>(
    reader: R,
    chromosome: Option<ChromosomeId>,
) -> Result<Vec<MatchRecord>> {
    let mut rdr = tsv_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawMatchRow = record.deserialize(Some(&headers))?;

        let Ok(chrom) = raw.chrom.parse::<ChromosomeId>() else {
            debug!("Line {}: dropping match on chromosome {:?}", line, raw.chrom);
            continue;
        };
        if chromosome.is_some_and(|wanted| wanted != chrom) {
            continue;
        }

        records.push(raw.into_record(chrom, line)?);
    }

    Ok(records)
}

fn open(path: &Path) -> Result<BufReader<Box<dyn Read + Send>>> {
    get_dynamic_reader(path).map_err(|e| IoError::FileReadError(format!("{:#}", e)))
}

/// Read a summary table from a `.tsv` or `.tsv.gz` file.
pub fn read_summary_table_from_path(path: &Path) -> Result<SummaryTable> {
    let table = read_summary_table(open(path)?)?;
    info!("Loaded {} chromosome summary rows from {:?}", table.len(), path);
    Ok(table)
}

/// Read a match table from a `.tsv` or `.tsv.gz` file.
pub fn read_match_table_from_path(
    path: &Path,
    chromosome: Option<ChromosomeId>,
) -> Result<Vec<MatchRecord>> {
    let records = read_match_table(open(path)?, chromosome)?;
    info!("Loaded {} match records from {:?}", records.len(), path);
    Ok(records)
}
