//! Data preparation for the dashboard inputs.
//!
//! - [`count_variants`]: pivot a raw ClinVar variant table into per-chromosome counts
//! - [`clean_matches`]: trim a raw match table to the displayed columns
//!
use std::collections::BTreeSet;
use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use fxhash::FxHashMap;
use log::info;

use svpath_core::consts::CHROMOSOME_COLUMN;
use svpath_core::ChromosomeId;

use crate::error::{IoError, Result};

const SIGNIFICANCE_COLUMN: &str = "ClinicalSignificance";

/// Columns kept by [`clean_matches`], in output order.
pub const MATCH_COLUMNS: [&str; 9] = [
    "CHROM",
    "POS",
    "END",
    "SVTYPE",
    "ClinicalSignificance",
    "Similarity",
    "AlleleID",
    "PhenotypeList",
    "HGNC_ID",
];

const UNINFORMATIVE_PHENOTYPES: [&str; 3] = ["not specified", "not provided", "see cases"];

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IoError::MissingColumn(name.to_string()))
}

/// Order chromosome labels: nuclear chromosomes in karyotype order, anything else after, lexically.
fn chromosome_sort_key(label: &str) -> (usize, String) {
    match label.parse::<ChromosomeId>() {
        Ok(chrom) => (chrom.rank(), String::new()),
        Err(_) => (usize::MAX, label.to_string()),
    }
}

///
/// Count variants per chromosome and clinical significance.
///
/// Reads a tab separated ClinVar export with (at least) `Chromosome` and
/// `ClinicalSignificance` columns and writes one row per chromosome with one column
/// per observed significance class. Combinations without variants are left empty.
///
pub fn count_variants<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut rdr = ReaderBuilder::new().delimiter(b'\t').from_reader(reader);
    let headers = rdr.headers()?.clone();
    let chrom_idx = column_index(&headers, CHROMOSOME_COLUMN)?;
    let sig_idx = column_index(&headers, SIGNIFICANCE_COLUMN)?;

    let mut counts: FxHashMap<((usize, String), String), u64> = FxHashMap::default();
    let mut chromosomes: BTreeSet<(usize, String)> = BTreeSet::new();
    let mut classes: BTreeSet<String> = BTreeSet::new();
    let mut labels: FxHashMap<(usize, String), String> = FxHashMap::default();

    let mut n_variants = 0u64;
    for record in rdr.records() {
        let record = record?;
        let chrom = record.get(chrom_idx).unwrap_or_default().to_string();
        let class = record.get(sig_idx).unwrap_or_default().to_string();

        let key = chromosome_sort_key(&chrom);
        labels.entry(key.clone()).or_insert(chrom);
        chromosomes.insert(key.clone());
        classes.insert(class.clone());

        *counts.entry((key, class)).or_default() += 1;
        n_variants += 1;
    }

    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    let mut header = vec![CHROMOSOME_COLUMN.to_string()];
    header.extend(classes.iter().cloned());
    wtr.write_record(&header)?;

    for key in &chromosomes {
        let mut row = vec![labels[key].clone()];
        for class in &classes {
            row.push(
                counts
                    .get(&(key.clone(), class.clone()))
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            );
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    info!(
        "Counted {} variants over {} chromosomes and {} significance classes",
        n_variants,
        chromosomes.len(),
        classes.len()
    );
    Ok(())
}

///
/// Drop uninformative phenotype entries (`not specified`, `not provided`, `see cases`)
/// and rejoin the rest with `;`. Returns `-` when nothing informative remains.
///
pub fn clean_phenotypes(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .split([';', '|'])
        .filter(|p| !p.is_empty())
        .filter(|p| {
            let lower = p.to_lowercase();
            !UNINFORMATIVE_PHENOTYPES.contains(&lower.as_str())
        })
        .collect();

    if kept.is_empty() {
        "-".to_string()
    } else {
        kept.join(";")
    }
}

fn round_similarity(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) => format!("{}", (value * 100.0).round() / 100.0),
        Err(_) => raw.to_string(),
    }
}

///
/// Clean a raw comma separated match table into the tab separated match detail table.
///
/// Keeps [`MATCH_COLUMNS`], rounds `Similarity` to two decimals, cleans
/// `PhenotypeList` and orders rows by chromosome (stable within a chromosome).
///
pub fn clean_matches<R: Read, W: Write>(reader: R, writer: W) -> Result<()> {
    let mut rdr = ReaderBuilder::new().delimiter(b',').from_reader(reader);
    let headers = rdr.headers()?.clone();
    let indices = MATCH_COLUMNS
        .iter()
        .map(|name| column_index(&headers, name))
        .collect::<Result<Vec<usize>>>()?;

    let chrom_pos = 0;
    let similarity_pos = MATCH_COLUMNS
        .iter()
        .position(|c| *c == "Similarity")
        .unwrap_or_default();
    let phenotype_pos = MATCH_COLUMNS
        .iter()
        .position(|c| *c == "PhenotypeList")
        .unwrap_or_default();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<String> = indices
            .iter()
            .map(|idx| record.get(*idx).unwrap_or_default().to_string())
            .collect();
        row[similarity_pos] = round_similarity(&row[similarity_pos]);
        row[phenotype_pos] = clean_phenotypes(&row[phenotype_pos]);
        rows.push(row);
    }

    rows.sort_by_cached_key(|row| chromosome_sort_key(&row[chrom_pos]));

    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    wtr.write_record(MATCH_COLUMNS)?;
    for row in &rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    info!("Cleaned {} match rows", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Cri-du-chat syndrome;not provided", "Cri-du-chat syndrome")]
    #[case("not specified|Not Provided", "-")]
    #[case("A|B;C", "A;B;C")]
    #[case("See cases", "-")]
    fn test_clean_phenotypes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_phenotypes(raw), expected);
    }

    #[rstest]
    #[case("97.3456", "97.35")]
    #[case("40", "40")]
    #[case("n/a", "n/a")]
    fn test_round_similarity(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(round_similarity(raw), expected);
    }

    #[rstest]
    fn test_count_variants_pivots() {
        let input = "AlleleID\tChromosome\tClinicalSignificance\n\
                     1\t10\tBenign\n\
                     2\t2\tPathogenic\n\
                     3\t2\tPathogenic\n\
                     4\tMT\tBenign\n\
                     5\t2\tBenign\n";
        let mut out = Vec::new();
        count_variants(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Chromosome\tBenign\tPathogenic\n2\t1\t2\n10\t1\t\nMT\t1\t\n"
        );
    }

    #[rstest]
    fn test_count_variants_output_reads_back() {
        let input = "Chromosome\tClinicalSignificance\n5\tPathogenic\n5\tBenign\nX\tPathogenic\n";
        let mut out = Vec::new();
        count_variants(input.as_bytes(), &mut out).unwrap();

        let table = crate::tsv::read_summary_table(out.as_slice()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table
                .row(ChromosomeId::X)
                .unwrap()
                .count(svpath_core::PathogenicityLevel::Benign),
            None
        );
    }

    #[rstest]
    fn test_clean_matches_keeps_columns_and_sorts() {
        let input = "CHROM,POS,END,SVTYPE,ClinicalSignificance,Similarity,AlleleID,PhenotypeList,HGNC_ID,ALT\n\
                     X,10,20,Deletion,Benign,50.123,1,not provided,HGNC:1,ACGT\n\
                     10,30,40,Insertion,Pathogenic,99.999,2,Disease A|see cases,HGNC:2,A\n\
                     2,50,60,Deletion,Benign,12,3,Disease B,HGNC:3,C\n";
        let mut out = Vec::new();
        clean_matches(input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "CHROM\tPOS\tEND\tSVTYPE\tClinicalSignificance\tSimilarity\tAlleleID\tPhenotypeList\tHGNC_ID"
        );
        assert_eq!(lines[1], "2\t50\t60\tDeletion\tBenign\t12\t3\tDisease B\tHGNC:3");
        assert_eq!(lines[2], "10\t30\t40\tInsertion\tPathogenic\t100\t2\tDisease A\tHGNC:2");
        assert_eq!(lines[3], "X\t10\t20\tDeletion\tBenign\t50.12\t1\t-\tHGNC:1");
    }

    #[rstest]
    fn test_clean_matches_missing_column() {
        let result = clean_matches("CHROM,POS\n1,2\n".as_bytes(), Vec::new());
        assert!(matches!(result, Err(IoError::MissingColumn(_))));
    }
}
