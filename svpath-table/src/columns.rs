use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use svpath_core::MatchRecord;

use crate::errors::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Chromosome,
    Position,
    SvType,
    ClinicalSignificance,
    Similarity,
    AlleleId,
    Phenotypes,
    Gene,
}

/// How a column orders its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortKind {
    Lexical,
    Numeric,
    /// Rank in the `1..22, X, Y` sequence.
    OrdinalChromosome,
    /// Rank in the severity sequence; unmapped values last.
    OrdinalSeverity,
    Unsortable,
}

/// How a column's cells are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellRenderer {
    Plain,
    /// Label on a badge in the level's colour.
    Significance,
    /// Horizontal bar as wide as the percentage.
    Similarity,
}

impl ColumnId {
    pub const ALL: [ColumnId; 8] = [
        ColumnId::Chromosome,
        ColumnId::Position,
        ColumnId::SvType,
        ColumnId::ClinicalSignificance,
        ColumnId::Similarity,
        ColumnId::AlleleId,
        ColumnId::Phenotypes,
        ColumnId::Gene,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ColumnId::Chromosome => "Chr",
            ColumnId::Position => "Position",
            ColumnId::SvType => "Type",
            ColumnId::ClinicalSignificance => "Clinical Significance",
            ColumnId::Similarity => "Similarity",
            ColumnId::AlleleId => "Allele ID",
            ColumnId::Phenotypes => "Associated Phenotypes",
            ColumnId::Gene => "Gene",
        }
    }

    pub fn sort_kind(&self) -> SortKind {
        match self {
            ColumnId::Chromosome => SortKind::OrdinalChromosome,
            ColumnId::Position | ColumnId::Similarity => SortKind::Numeric,
            ColumnId::SvType => SortKind::Lexical,
            ColumnId::ClinicalSignificance => SortKind::OrdinalSeverity,
            ColumnId::AlleleId | ColumnId::Phenotypes | ColumnId::Gene => SortKind::Unsortable,
        }
    }

    pub fn renderer(&self) -> CellRenderer {
        match self {
            ColumnId::ClinicalSignificance => CellRenderer::Significance,
            ColumnId::Similarity => CellRenderer::Similarity,
            _ => CellRenderer::Plain,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_kind() != SortKind::Unsortable
    }

    ///
    /// Ascending order of two records on this column. Unsortable columns treat every
    /// pair as equal.
    ///
    pub fn compare(&self, a: &MatchRecord, b: &MatchRecord) -> Ordering {
        match self {
            ColumnId::Chromosome => a.chromosome.cmp(&b.chromosome),
            ColumnId::Position => a.position.cmp(&b.position),
            ColumnId::SvType => a.sv_type.cmp(&b.sv_type),
            ColumnId::ClinicalSignificance => a
                .clinical_significance
                .rank()
                .cmp(&b.clinical_significance.rank()),
            ColumnId::Similarity => a.similarity.total_cmp(&b.similarity),
            ColumnId::AlleleId | ColumnId::Phenotypes | ColumnId::Gene => Ordering::Equal,
        }
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

impl FromStr for ColumnId {
    type Err = TableError;

    /// Accepts the header, the snake case id or the source table column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace([' ', '_'], "");
        let id = match needle.as_str() {
            "chr" | "chrom" | "chromosome" => ColumnId::Chromosome,
            "pos" | "position" => ColumnId::Position,
            "type" | "svtype" => ColumnId::SvType,
            "clinicalsignificance" | "significance" => ColumnId::ClinicalSignificance,
            "similarity" => ColumnId::Similarity,
            "alleleid" => ColumnId::AlleleId,
            "associatedphenotypes" | "phenotypes" | "phenotypelist" => ColumnId::Phenotypes,
            "gene" | "hgncid" => ColumnId::Gene,
            _ => return Err(TableError::UnknownColumn(s.to_string())),
        };
        Ok(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub header: &'static str,
    pub sort: SortKind,
    pub renderer: CellRenderer,
}

impl From<ColumnId> for ColumnSpec {
    fn from(id: ColumnId) -> Self {
        ColumnSpec {
            id,
            header: id.header(),
            sort: id.sort_kind(),
            renderer: id.renderer(),
        }
    }
}

/// The ordered column set of a match table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumns {
    columns: Vec<ColumnSpec>,
}

impl TableColumns {
    /// Chr, Position, Type, Clinical Significance, Similarity, Allele ID, Associated Phenotypes, Gene.
    pub fn standard() -> Self {
        TableColumns {
            columns: ColumnId::ALL.iter().map(|id| ColumnSpec::from(*id)).collect(),
        }
    }

    pub fn get(&self, id: ColumnId) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for TableColumns {
    fn default() -> Self {
        TableColumns::standard()
    }
}
