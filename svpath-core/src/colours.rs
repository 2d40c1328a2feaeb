use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::NO_MATCH_LABEL;
use crate::errors::{CoreError, Result};
use crate::models::{LevelSet, PathogenicityLevel};

///
/// An opaque RGB colour parsed from a `#rrggbb` hex string.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` form, as used for the significance badges of the match table.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl FromStr for Rgb {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(());
        }

        let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|_| ());
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub colour: String,
}

///
/// Category label to colour lookup, shared by charts, table badges, legend and track.
///
/// Lookups ignore ASCII case so `Likely Pathogenic` and `Likely pathogenic` resolve to
/// the same entry. A category without an entry is an error at the call site, never a
/// silent fallback colour.
///
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct ColourMap {
    // lower-cased label -> (label as configured, colour)
    entries: BTreeMap<String, (String, Rgb)>,
}

impl ColourMap {
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        for (category, hex) in pairs {
            let category: String = category.into();
            let colour = hex
                .as_ref()
                .parse::<Rgb>()
                .map_err(|_| CoreError::InvalidColour {
                    category: category.clone(),
                    value: hex.as_ref().to_string(),
                })?;
            entries.insert(category.to_ascii_lowercase(), (category, colour));
        }
        Ok(ColourMap { entries })
    }

    pub fn get(&self, category: &str) -> Option<Rgb> {
        self.entries
            .get(&category.trim().to_ascii_lowercase())
            .map(|(_, colour)| *colour)
    }

    pub fn require(&self, category: &str) -> Result<Rgb> {
        self.get(category)
            .ok_or_else(|| CoreError::MissingColour(category.to_string()))
    }

    pub fn level(&self, level: PathogenicityLevel) -> Result<Rgb> {
        self.require(level.label())
    }

    /// Colours of the active levels, in severity order.
    pub fn levels(&self, levels: &LevelSet) -> Result<Vec<Rgb>> {
        levels.iter().map(|level| self.level(level)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Entries for the legend: the "no match" sentinel first, then the levels in
    /// severity order, then any other configured category alphabetically.
    ///
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.entries.len());
        ordered.push(NO_MATCH_LABEL);
        ordered.extend(PathogenicityLevel::ALL.iter().map(|level| level.label()));

        let mut legend: Vec<LegendEntry> = ordered
            .iter()
            .filter_map(|label| self.entries.get(&label.to_ascii_lowercase()))
            .map(|(label, colour)| LegendEntry {
                label: label.clone(),
                colour: colour.to_hex(),
            })
            .collect();

        let known: Vec<String> = ordered.iter().map(|l| l.to_ascii_lowercase()).collect();
        legend.extend(
            self.entries
                .iter()
                .filter(|(key, _)| !known.contains(key))
                .map(|(_, (label, colour))| LegendEntry {
                    label: label.clone(),
                    colour: colour.to_hex(),
                }),
        );

        legend
    }
}

impl TryFrom<BTreeMap<String, String>> for ColourMap {
    type Error = CoreError;

    fn try_from(value: BTreeMap<String, String>) -> Result<Self> {
        ColourMap::from_pairs(value)
    }
}

impl Default for ColourMap {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        let defaults = [
            (NO_MATCH_LABEL, Rgb { r: 0x81, g: 0x85, b: 0x89 }),
            ("Uncertain significance", Rgb { r: 0x00, g: 0x92, b: 0xd0 }),
            ("Benign", Rgb { r: 0x4d, g: 0xac, b: 0x26 }),
            ("Likely pathogenic", Rgb { r: 0xeb, g: 0x95, b: 0xdf }),
            ("Pathogenic", Rgb { r: 0xd0, g: 0x1c, b: 0x8b }),
        ];
        for (label, colour) in defaults {
            entries.insert(label.to_ascii_lowercase(), (label.to_string(), colour));
        }
        ColourMap { entries }
    }
}
