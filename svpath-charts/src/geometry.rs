use log::debug;
use serde::Serialize;

use svpath_core::config::ChartConfig;
use svpath_core::{ChromosomeId, ColourMap, FilterState, PathogenicityLevel, SummaryTable};

use crate::errors::ChartError;
use crate::highlight::{resolve_highlight, BorderSpec};
use crate::scales::{compute_scales, ChartBounds};
use crate::stack::{aggregate, max_total};

const Y_TICK_COUNT: usize = 10;
const X_AXIS_TITLE: &str = "Chromosome";
const Y_AXIS_TITLE: &str = "# of Variants";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRect {
    pub level: PathogenicityLevel,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub border: Option<BorderSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarColumn {
    pub chromosome: ChromosomeId,
    pub total: u64,
    pub selected: bool,
    /// Bottom to top; empty segments have no rectangle.
    pub rects: Vec<BarRect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

///
/// Everything needed to draw one stacked bar chart for the current filter.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub max_total: u64,
    pub active_levels: Vec<PathogenicityLevel>,
    pub columns: Vec<BarColumn>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl ChartGeometry {
    /// No bar has any height, either because no level is active or nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.rects.is_empty())
    }
}

fn level_fills(
    levels: &[PathogenicityLevel],
    colours: &ColourMap,
) -> Result<Vec<(PathogenicityLevel, String)>, ChartError> {
    levels
        .iter()
        .map(|level| {
            colours
                .level(*level)
                .map(|rgb| (*level, rgb.to_hex()))
                .map_err(|_| ChartError::MissingColour(*level))
        })
        .collect()
}

///
/// Lay out a stacked bar chart of `table` under `filter`.
///
/// Only the levels in `filter.selected_levels` are stacked, in severity order, and
/// the vertical scale is fitted to the tallest of those stacks. The column of the
/// selected chromosome, if any, is outlined.
///
/// # Arguments
/// - title: chart heading
/// - table: per-chromosome counts
/// - filter: current selection
/// - config: canvas size, margins and band padding
/// - colours: fill colour per level; every active level needs one
///
pub fn build_chart_geometry(
    title: &str,
    table: &SummaryTable,
    filter: &FilterState,
    config: &ChartConfig,
    colours: &ColourMap,
) -> Result<ChartGeometry, ChartError> {
    let active = filter.selected_levels.to_vec();
    let fills = level_fills(&active, colours)?;

    let stacked = aggregate(&table.rows, &active)?;
    let max = max_total(&stacked);

    let bounds = ChartBounds::from(config);
    let scales = compute_scales(ChromosomeId::all().collect(), max, &bounds, config.padding);

    let mut columns = Vec::with_capacity(stacked.len());
    for column in &stacked {
        let Some(band) = scales.x.band(column.chromosome) else {
            continue;
        };
        let selected = filter.selected_chromosome == Some(column.chromosome);
        let borders = resolve_highlight(&column.segments, selected);

        let rects = column
            .segments
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                let fill = fills
                    .iter()
                    .find(|(level, _)| *level == s.level)
                    .map(|(_, hex)| hex.clone())
                    .ok_or(ChartError::MissingColour(s.level))?;
                let top = scales.y.apply(s.interval_high);
                let bottom = scales.y.apply(s.interval_low);
                Ok(BarRect {
                    level: s.level,
                    x: band.start,
                    y: top,
                    width: band.width,
                    height: bottom - top,
                    fill,
                    border: borders.iter().find(|b| b.level == s.level).copied(),
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        columns.push(BarColumn {
            chromosome: column.chromosome,
            total: column.total,
            selected,
            rects,
        });
    }

    let x_ticks = scales
        .x
        .domain()
        .iter()
        .filter_map(|chrom| {
            scales.x.band(*chrom).map(|band| AxisTick {
                label: chrom.label(),
                position: band.start + band.width / 2.0,
            })
        })
        .collect();

    let y_ticks = scales
        .y
        .ticks(Y_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            label: value.to_string(),
            position: scales.y.apply(value),
        })
        .collect();

    debug!(
        "Laid out '{}': {} columns, levels [{}], max total {}",
        title,
        columns.len(),
        filter.selected_levels,
        max
    );

    Ok(ChartGeometry {
        title: title.to_string(),
        width: config.width,
        height: config.height,
        max_total: max,
        active_levels: active,
        columns,
        x_ticks,
        y_ticks,
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
    })
}
