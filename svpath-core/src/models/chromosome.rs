use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const AUTOSOMES: u8 = 22;
const CHROMOSOME_COUNT: u8 = 24;

///
/// One of the 24 nuclear chromosomes.
///
/// Ordering follows the karyotype: `1 < 2 < ... < 22 < X < Y`. The label `"10"`
/// therefore sorts after `"2"`, unlike a string comparison.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChromosomeId(u8);

impl ChromosomeId {
    pub const X: ChromosomeId = ChromosomeId(AUTOSOMES);
    pub const Y: ChromosomeId = ChromosomeId(AUTOSOMES + 1);

    /// Build an autosome from its number (1-22).
    pub fn autosome(number: u8) -> Option<Self> {
        (1..=AUTOSOMES)
            .contains(&number)
            .then(|| ChromosomeId(number - 1))
    }

    /// Position in the fixed `1..22, X, Y` sequence, starting at 0.
    pub fn rank(&self) -> usize {
        self.0 as usize
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        (rank < CHROMOSOME_COUNT as usize).then(|| ChromosomeId(rank as u8))
    }

    /// All chromosomes in display order.
    pub fn all() -> impl ExactSizeIterator<Item = ChromosomeId> + Clone {
        (0..CHROMOSOME_COUNT).map(ChromosomeId)
    }

    /// Label without prefix: `"1"`, `"22"`, `"X"`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Label as used by genome assemblies: `"chr5"`, `"chrX"`.
    pub fn ucsc_label(&self) -> String {
        format!("chr{}", self)
    }
}

impl Display for ChromosomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            n if n < AUTOSOMES => write!(f, "{}", n + 1),
            n if n == AUTOSOMES => write!(f, "X"),
            _ => write!(f, "Y"),
        }
    }
}

impl FromStr for ChromosomeId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix("chr")
            .or_else(|| trimmed.strip_prefix("Chr"))
            .or_else(|| trimmed.strip_prefix("CHR"))
            .unwrap_or(trimmed);

        match bare {
            "X" | "x" => Ok(ChromosomeId::X),
            "Y" | "y" => Ok(ChromosomeId::Y),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse::<u8>()
                .ok()
                .and_then(ChromosomeId::autosome)
                .ok_or_else(|| CoreError::UnknownChromosome(s.to_string())),
            _ => Err(CoreError::UnknownChromosome(s.to_string())),
        }
    }
}

impl TryFrom<String> for ChromosomeId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChromosomeId> for String {
    fn from(value: ChromosomeId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1", 0)]
    #[case("22", 21)]
    #[case("X", 22)]
    #[case("Y", 23)]
    #[case("chr7", 6)]
    #[case("chrx", 22)]
    fn test_parse_rank(#[case] label: &str, #[case] rank: usize) {
        let chrom: ChromosomeId = label.parse().unwrap();
        assert_eq!(chrom.rank(), rank);
    }

    #[rstest]
    #[case("MT")]
    #[case("0")]
    #[case("23")]
    #[case("")]
    #[case("chrUn_gl000220")]
    fn test_parse_rejects_non_nuclear(#[case] label: &str) {
        assert!(label.parse::<ChromosomeId>().is_err());
    }

    #[rstest]
    fn test_karyotype_order_is_not_lexical() {
        let mut chroms: Vec<ChromosomeId> = ["10", "2", "1", "X", "Y"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        chroms.sort();

        let labels: Vec<String> = chroms.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["1", "2", "10", "X", "Y"]);
    }

    #[rstest]
    fn test_all_has_24_in_order() {
        let all: Vec<String> = ChromosomeId::all().map(|c| c.to_string()).collect();
        assert_eq!(all.len(), 24);
        assert_eq!(all.first().unwrap(), "1");
        assert_eq!(all[21], "22");
        assert_eq!(all.last().unwrap(), "Y");
    }

    #[rstest]
    fn test_ucsc_label() {
        assert_eq!(ChromosomeId::X.ucsc_label(), "chrX");
        assert_eq!(ChromosomeId::autosome(5).unwrap().ucsc_label(), "chr5");
    }
}
