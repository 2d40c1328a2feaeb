use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::colours::ColourMap;
use crate::consts::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::errors::{CoreError, Result};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 25.0,
            right: 5.0,
            bottom: 35.0,
            left: 50.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Fraction of each band step left empty, applied inside and outside the bands.
    pub padding: f64,
    pub margins: Margins,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 540.0,
            height: 224.0,
            padding: 0.1,
            margins: Margins::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackConfig {
    pub track_id: String,
    pub linking_id: String,
    pub width: f64,
    pub assembly: String,
    pub matches_url: String,
    pub all_variants_url: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        TrackConfig {
            track_id: "detail".to_string(),
            linking_id: "detail-1".to_string(),
            width: 756.0,
            assembly: "hg19".to_string(),
            matches_url: "https://raw.githubusercontent.com/armtsf/tmp/main/allmatched.csv"
                .to_string(),
            all_variants_url: "https://raw.githubusercontent.com/armtsf/tmp/main/all_hg.csv"
                .to_string(),
        }
    }
}

///
/// Everything configurable about the dashboard. Every field falls back to the
/// defaults of the published HG002 dashboard, so an empty TOML file is valid.
///
/// A `[colours]` table replaces the default colours as a whole, so it must name
/// every level that is ever stacked or drawn.
///
/// ```toml
/// page_size_options = [10, 25, 50]
/// default_page_size = 25
///
/// [colours]
/// "No match" = "#818589"
/// "Uncertain significance" = "#0092D0"
/// Benign = "#4dac26"
/// "Likely pathogenic" = "#eb95df"
/// Pathogenic = "#d01c8b"
///
/// [chart]
/// padding = 0.15
/// ```
///
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub colours: ColourMap,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    pub chart: ChartConfig,
    pub track: TrackConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            colours: ColourMap::default(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            chart: ChartConfig::default(),
            track: TrackConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(CoreError::InvalidConfig(
                "page_size_options must be non-empty positive integers".to_string(),
            ));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(CoreError::InvalidPageSize(self.default_page_size));
        }
        if !(0.0..1.0).contains(&self.chart.padding) {
            return Err(CoreError::InvalidConfig(format!(
                "chart padding must be within [0, 1), got {}",
                self.chart.padding
            )));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for DashboardConfig {
    type Error = CoreError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        DashboardConfig::from_toml_str(&toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathogenicityLevel;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn test_empty_config_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.page_size_options, vec![10, 20, 30]);
    }

    #[rstest]
    fn test_partial_config_overrides() {
        let config = DashboardConfig::from_toml_str(
            r##"
            page_size_options = [5, 50]
            default_page_size = 5

            [colours]
            Pathogenic = "#ff0000"

            [chart]
            padding = 0.15
            "##,
        )
        .unwrap();

        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.chart.padding, 0.15);
        assert_eq!(config.chart.margins.left, 50.0);
        assert_eq!(
            config.colours.level(PathogenicityLevel::Pathogenic).unwrap().to_hex(),
            "#ff0000"
        );
        assert!(config.colours.level(PathogenicityLevel::Benign).is_err());
    }

    #[rstest]
    fn test_complete_colour_table_covers_every_level() {
        let config = DashboardConfig::from_toml_str(
            r##"
            [colours]
            "No match" = "#818589"
            "Uncertain significance" = "#0092D0"
            Benign = "#4dac26"
            "Likely pathogenic" = "#eb95df"
            Pathogenic = "#d01c8b"
            "##,
        )
        .unwrap();

        for level in PathogenicityLevel::ALL {
            assert!(config.colours.level(level).is_ok(), "{} has no colour", level);
        }
        assert_eq!(config.colours.legend().len(), 5);
    }

    #[rstest]
    fn test_default_page_size_must_be_an_option() {
        let result = DashboardConfig::from_toml_str("default_page_size = 15");
        assert!(matches!(result, Err(CoreError::InvalidPageSize(15))));
    }

    #[rstest]
    fn test_bad_colour_is_a_config_error() {
        let result = DashboardConfig::from_toml_str("[colours]\nBenign = \"green\"");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_try_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[track]\nlinking_id = \"zoom-link\"").unwrap();

        let config = DashboardConfig::try_from(file.path()).unwrap();
        assert_eq!(config.track.linking_id, "zoom-link");
        assert_eq!(config.track.track_id, "detail");
    }
}
