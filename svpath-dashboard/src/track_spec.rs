//! Declarative spec for the genome-track renderer.
//!
//! The renderer draws a circular genome overview of the matched events above a
//! linear detail view. This module only builds the spec as data; it never talks to
//! a renderer.

use serde::Serialize;

use svpath_core::config::TrackConfig;
use svpath_core::{ChromosomeId, ColourMap, LevelSet};

use crate::errors::Result;

const SIGNIFICANCE_FIELD: &str = "ClinicalSignificance";
const CHROMOSOME_FIELD: &str = "CHROM";
const SV_TYPE_FIELD: &str = "SVTYPE";
const DELETION: &str = "Deletion";
const INSERTION: &str = "Insertion";
const OVERVIEW_TRACK_WIDTH: f64 = 700.0;
const DETAIL_TRACK_HEIGHT: f64 = 150.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSpec {
    pub arrangement: String,
    pub views: Vec<ViewSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSpec {
    #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
    pub tracks: Vec<TrackItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSpec {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub chromosome_field: String,
    pub genomic_fields: Vec<String>,
}

impl DataSpec {
    fn csv(url: &str) -> Self {
        DataSpec {
            url: url.to_string(),
            kind: "csv".to_string(),
            chromosome_field: CHROMOSOME_FIELD.to_string(),
            genomic_fields: vec!["POS".to_string(), "END".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTransform {
    #[serde(rename = "type")]
    pub kind: String,
    pub field: String,
    pub one_of: Vec<String>,
    pub not: bool,
}

impl FilterTransform {
    fn sv_type(types: &[&str], not: bool) -> Self {
        FilterTransform {
            kind: "filter".to_string(),
            field: SV_TYPE_FIELD.to_string(),
            one_of: types.iter().map(|t| t.to_string()).collect(),
            not,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomicDomain {
    pub chromosome: String,
}

/// A nominal colour encoding: `domain[i]` is drawn in `range[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColourEncoding {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub domain: Vec<String>,
    pub range: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEncoding {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<GenomicDomain>,
}

impl PositionEncoding {
    fn genomic(field: &str) -> Self {
        PositionEncoding {
            field: field.to_string(),
            kind: "genomic".to_string(),
            linking_id: None,
            domain: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Constant {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueEncoding {
    pub value: Constant,
}

impl ValueEncoding {
    fn text(value: &str) -> Self {
        ValueEncoding {
            value: Constant::Text(value.to_string()),
        }
    }

    fn number(value: f64) -> Self {
        ValueEncoding {
            value: Constant::Number(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StrokeEncoding {
    Constant(ValueEncoding),
    Colour(ColourEncoding),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_transform: Vec<FilterTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColourEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<PositionEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xe: Option<PositionEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<ValueEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<TrackItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

///
/// Colour encoding of the clinical significance field over `levels`.
///
/// The domain lists the active levels in severity order and the range their colours
/// in the same order.
///
pub fn significance_colours(levels: &LevelSet, colours: &ColourMap) -> Result<ColourEncoding> {
    let range = colours
        .levels(levels)?
        .iter()
        .map(|rgb| rgb.to_hex())
        .collect();

    Ok(ColourEncoding {
        field: SIGNIFICANCE_FIELD.to_string(),
        kind: "nominal".to_string(),
        domain: levels.labels().into_iter().map(String::from).collect(),
        range,
    })
}

fn overview(colour: &ColourEncoding, config: &TrackConfig) -> ViewSpec {
    let deletions = TrackItem {
        data: Some(DataSpec::csv(&config.matches_url)),
        data_transform: vec![FilterTransform::sv_type(&[DELETION], false)],
        mark: Some("rect".to_string()),
        color: Some(colour.clone()),
        x: Some(PositionEncoding::genomic("POS")),
        stroke: Some(StrokeEncoding::Constant(ValueEncoding::text("lightgray"))),
        stroke_width: Some(ValueEncoding::number(0.1)),
        width: Some(OVERVIEW_TRACK_WIDTH),
        height: Some(10.0),
        ..TrackItem::default()
    };

    let all_variants = TrackItem {
        data: Some(DataSpec::csv(&config.all_variants_url)),
        mark: Some("rect".to_string()),
        color: Some(ColourEncoding {
            field: "TYPE".to_string(),
            kind: "nominal".to_string(),
            domain: vec!["DEL".to_string(), "INS".to_string()],
            range: vec!["#bdbdbd".to_string(), "#636363".to_string()],
        }),
        x: Some(PositionEncoding::genomic("POS")),
        stroke: Some(StrokeEncoding::Constant(ValueEncoding::text("gray"))),
        stroke_width: Some(ValueEncoding::number(0.1)),
        width: Some(OVERVIEW_TRACK_WIDTH),
        height: Some(30.0),
        ..TrackItem::default()
    };

    let events = TrackItem {
        data: Some(DataSpec::csv(&config.matches_url)),
        data_transform: vec![FilterTransform::sv_type(&[DELETION], true)],
        mark: Some("rect".to_string()),
        color: Some(colour.clone()),
        x: Some(PositionEncoding::genomic("POS")),
        stroke: Some(StrokeEncoding::Constant(ValueEncoding::text("lightgray"))),
        stroke_width: Some(ValueEncoding::number(1.0)),
        ..TrackItem::default()
    };

    let links = TrackItem {
        data: Some(DataSpec::csv(&config.matches_url)),
        data_transform: vec![FilterTransform::sv_type(&[DELETION, INSERTION], true)],
        mark: Some("withinLink".to_string()),
        x: Some(PositionEncoding::genomic("POS")),
        xe: Some(PositionEncoding::genomic("END")),
        stroke: Some(StrokeEncoding::Colour(colour.clone())),
        stroke_width: Some(ValueEncoding::number(1.0)),
        ..TrackItem::default()
    };

    ViewSpec {
        is_static: Some(true),
        layout: Some("circular".to_string()),
        alignment: Some("stack".to_string()),
        spacing: Some(1.0),
        center_radius: Some(0.3),
        assembly: Some(config.assembly.clone()),
        tracks: vec![
            deletions,
            all_variants,
            TrackItem {
                alignment: Some("overlay".to_string()),
                tracks: vec![events, links],
                width: Some(OVERVIEW_TRACK_WIDTH),
                height: Some(30.0),
                ..TrackItem::default()
            },
        ],
    }
}

fn detail(
    colour: &ColourEncoding,
    config: &TrackConfig,
    selected: Option<ChromosomeId>,
) -> ViewSpec {
    let x = PositionEncoding {
        linking_id: Some(config.linking_id.clone()),
        domain: selected.map(|chrom| GenomicDomain {
            chromosome: chrom.label(),
        }),
        ..PositionEncoding::genomic("POS")
    };

    ViewSpec {
        layout: Some("linear".to_string()),
        assembly: Some(config.assembly.clone()),
        tracks: vec![TrackItem {
            id: Some(config.track_id.clone()),
            data: Some(DataSpec::csv(&config.matches_url)),
            mark: Some("rect".to_string()),
            color: Some(colour.clone()),
            x: Some(x),
            xe: Some(PositionEncoding::genomic("END")),
            stroke: Some(StrokeEncoding::Constant(ValueEncoding::text("black"))),
            stroke_width: Some(ValueEncoding::number(0.3)),
            width: Some(config.width),
            height: Some(DETAIL_TRACK_HEIGHT),
            ..TrackItem::default()
        }],
        ..ViewSpec::default()
    }
}

///
/// Build the track spec for the current filter.
///
/// # Arguments
/// - active_levels: levels to colour; the colour encodings list exactly these
/// - colours: colour per level
/// - config: data urls, detail track id, linking id and width
/// - selected: chromosome the detail view opens on, if any
///
/// # Errors
/// A missing colour for an active level.
///
pub fn build_track_spec(
    active_levels: &LevelSet,
    colours: &ColourMap,
    config: &TrackConfig,
    selected: Option<ChromosomeId>,
) -> Result<TrackSpec> {
    let colour = significance_colours(active_levels, colours)?;

    Ok(TrackSpec {
        arrangement: "vertical".to_string(),
        views: vec![
            overview(&colour, config),
            detail(&colour, config, selected),
        ],
    })
}
