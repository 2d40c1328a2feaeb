use log::debug;
use serde::Serialize;

use svpath_core::consts::SIGNIFICANCE_BADGE_ALPHA;
use svpath_core::{ColourMap, MatchRecord, Significance};

use crate::columns::{CellRenderer, ColumnId, TableColumns};
use crate::errors::{Result, TableError};

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text {
        value: String,
    },
    Significance {
        label: String,
        /// `rgba(r, g, b, a)` badge colour; absent for unmapped values.
        background: Option<String>,
        unmapped: bool,
    },
    Similarity {
        value: f64,
        /// Bar width as a CSS percentage.
        width: String,
    },
}

fn text(record: &MatchRecord, column: ColumnId) -> String {
    match column {
        ColumnId::Chromosome => record.chromosome.label(),
        ColumnId::Position => record.position.to_string(),
        ColumnId::SvType => record.sv_type.clone(),
        ColumnId::ClinicalSignificance => record.clinical_significance.to_string(),
        ColumnId::Similarity => record.similarity.to_string(),
        ColumnId::AlleleId => record.allele_id.clone(),
        ColumnId::Phenotypes => {
            if record.phenotypes.is_empty() {
                "-".to_string()
            } else {
                record.phenotypes.join("; ")
            }
        }
        ColumnId::Gene => record.gene.clone(),
    }
}

fn significance_cell(significance: &Significance, colours: &ColourMap) -> Result<Cell> {
    match significance {
        Significance::Known(level) => {
            let colour = colours
                .level(*level)
                .map_err(|_| TableError::MissingColour(level.label().to_string()))?;
            Ok(Cell::Significance {
                label: level.label().to_string(),
                background: Some(colour.rgba(SIGNIFICANCE_BADGE_ALPHA)),
                unmapped: false,
            })
        }
        Significance::Unmapped(raw) => {
            debug!("No level for clinical significance '{}'", raw);
            Ok(Cell::Significance {
                label: raw.clone(),
                background: None,
                unmapped: true,
            })
        }
    }
}

///
/// Render one record across `columns`.
///
/// # Errors
/// [`TableError::MissingColour`] when a known level has no configured colour.
///
pub fn render_row(
    record: &MatchRecord,
    columns: &TableColumns,
    colours: &ColourMap,
) -> Result<Vec<Cell>> {
    columns
        .iter()
        .map(|spec| match spec.renderer {
            CellRenderer::Plain => Ok(Cell::Text {
                value: text(record, spec.id),
            }),
            CellRenderer::Significance => {
                significance_cell(&record.clinical_significance, colours)
            }
            CellRenderer::Similarity => Ok(Cell::Similarity {
                value: record.similarity,
                width: format!("{}%", record.similarity),
            }),
        })
        .collect()
}

/// Plain text of one record across `columns`, for tabular output.
pub fn row_text(record: &MatchRecord, columns: &TableColumns) -> Vec<String> {
    columns.iter().map(|spec| text(record, spec.id)).collect()
}
