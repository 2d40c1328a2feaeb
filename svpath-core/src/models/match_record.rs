use serde::{Deserialize, Serialize};

use crate::models::{ChromosomeId, Significance};

///
/// One structural-variant match between a sample call and a ClinVar record.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub chromosome: ChromosomeId,
    pub position: u64,
    /// End coordinate, when the source table carries one.
    pub end: Option<u64>,
    pub sv_type: String,
    pub clinical_significance: Significance,
    /// Sequence similarity in percent, within `[0, 100]`.
    pub similarity: f64,
    pub allele_id: String,
    pub phenotypes: Vec<String>,
    /// HGNC identifier of the affected gene.
    pub gene: String,
}
