use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

///
/// Clinical significance categories in severity order.
///
/// The declaration order is the stacking order of the bar charts, the colour
/// domain order of the genome track and the sort rank of the match table. It must
/// never be replaced by an alphabetical order.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PathogenicityLevel {
    UncertainSignificance,
    Benign,
    LikelyPathogenic,
    Pathogenic,
}

impl PathogenicityLevel {
    pub const ALL: [PathogenicityLevel; 4] = [
        PathogenicityLevel::UncertainSignificance,
        PathogenicityLevel::Benign,
        PathogenicityLevel::LikelyPathogenic,
        PathogenicityLevel::Pathogenic,
    ];

    /// Severity rank, 0 for the first level.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Label as it appears in ClinVar exports and column headers.
    pub fn label(&self) -> &'static str {
        match self {
            PathogenicityLevel::UncertainSignificance => "Uncertain significance",
            PathogenicityLevel::Benign => "Benign",
            PathogenicityLevel::LikelyPathogenic => "Likely pathogenic",
            PathogenicityLevel::Pathogenic => "Pathogenic",
        }
    }

    fn bit(&self) -> u8 {
        1 << self.rank()
    }
}

impl Display for PathogenicityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PathogenicityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PathogenicityLevel::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownLevel(s.to_string()))
    }
}

impl TryFrom<String> for PathogenicityLevel {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PathogenicityLevel> for String {
    fn from(value: PathogenicityLevel) -> Self {
        value.label().to_string()
    }
}

///
/// A subset of [`PathogenicityLevel`] that always iterates in severity order.
///
/// Insertion order is not remembered, so toggling a level off and on again
/// restores exactly the previous set.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<PathogenicityLevel>", into = "Vec<PathogenicityLevel>")]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    pub fn all() -> Self {
        PathogenicityLevel::ALL.into_iter().collect()
    }

    pub fn empty() -> Self {
        LevelSet { bits: 0 }
    }

    pub fn contains(&self, level: PathogenicityLevel) -> bool {
        self.bits & level.bit() != 0
    }

    pub fn insert(&mut self, level: PathogenicityLevel) {
        self.bits |= level.bit();
    }

    pub fn remove(&mut self, level: PathogenicityLevel) {
        self.bits &= !level.bit();
    }

    /// Flip membership of `level`. Returns `true` if the level is now active.
    pub fn toggle(&mut self, level: PathogenicityLevel) -> bool {
        self.bits ^= level.bit();
        self.contains(level)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True when every level is active, i.e. the set does not narrow anything.
    pub fn is_full(&self) -> bool {
        *self == LevelSet::all()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = PathogenicityLevel> + '_ {
        PathogenicityLevel::ALL
            .into_iter()
            .filter(move |level| self.contains(*level))
    }

    pub fn to_vec(&self) -> Vec<PathogenicityLevel> {
        self.iter().collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|level| level.label()).collect()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        LevelSet::all()
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(","))
    }
}

impl FromIterator<PathogenicityLevel> for LevelSet {
    fn from_iter<T: IntoIterator<Item = PathogenicityLevel>>(iter: T) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl From<Vec<PathogenicityLevel>> for LevelSet {
    fn from(value: Vec<PathogenicityLevel>) -> Self {
        value.into_iter().collect()
    }
}

impl From<LevelSet> for Vec<PathogenicityLevel> {
    fn from(value: LevelSet) -> Self {
        value.to_vec()
    }
}

impl FromStr for LevelSet {
    type Err = CoreError;

    /// Parse a comma separated list of level labels. An empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(PathogenicityLevel::from_str)
            .collect()
    }
}

///
/// Clinical significance as found on a match record.
///
/// ClinVar uses many more classes than the four configured levels
/// (`Conflicting interpretations of pathogenicity`, `Pathogenic/Likely pathogenic`, ...).
/// Those are kept verbatim as [`Significance::Unmapped`] so they can be shown with an
/// explicit marker; they rank after every known level.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Significance {
    Known(PathogenicityLevel),
    Unmapped(String),
}

impl Significance {
    pub fn level(&self) -> Option<PathogenicityLevel> {
        match self {
            Significance::Known(level) => Some(*level),
            Significance::Unmapped(_) => None,
        }
    }

    /// Severity rank; unmapped values share the rank after the last level.
    pub fn rank(&self) -> usize {
        match self {
            Significance::Known(level) => level.rank(),
            Significance::Unmapped(_) => PathogenicityLevel::ALL.len(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Significance::Known(level) => level.label(),
            Significance::Unmapped(raw) => raw.as_str(),
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, Significance::Unmapped(_))
    }
}

impl From<&str> for Significance {
    fn from(value: &str) -> Self {
        match value.parse::<PathogenicityLevel>() {
            Ok(level) => Significance::Known(level),
            Err(_) => Significance::Unmapped(value.trim().to_string()),
        }
    }
}

impl From<String> for Significance {
    fn from(value: String) -> Self {
        Significance::from(value.as_str())
    }
}

impl From<Significance> for String {
    fn from(value: Significance) -> Self {
        value.label().to_string()
    }
}

impl From<PathogenicityLevel> for Significance {
    fn from(value: PathogenicityLevel) -> Self {
        Significance::Known(value)
    }
}

impl Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
