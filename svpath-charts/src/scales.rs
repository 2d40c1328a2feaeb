use serde::Serialize;

use svpath_core::config::{ChartConfig, Margins};
use svpath_core::ChromosomeId;

/// Canvas size and margins; the plot area is what remains inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl ChartBounds {
    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margins.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margins.bottom
    }
}

impl From<&ChartConfig> for ChartBounds {
    fn from(config: &ChartConfig) -> Self {
        ChartBounds {
            width: config.width,
            height: config.height,
            margins: config.margins,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub start: f64,
    pub width: f64,
}

///
/// Equal-width, padded horizontal slots over an ordered list of chromosomes.
///
/// The same padding fraction is used between bands and at both ends, and the
/// bands are centred in the range.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<ChromosomeId>,
    offset: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<ChromosomeId>, range: (f64, f64), padding: f64) -> Self {
        let (start, stop) = range;
        let n = domain.len() as f64;
        let span = stop - start;

        let step = span / (n - padding + 2.0 * padding).max(1.0);
        let offset = start + (span - step * (n - padding)) * 0.5;

        BandScale {
            domain,
            offset,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn band(&self, chromosome: ChromosomeId) -> Option<Band> {
        self.domain
            .iter()
            .position(|c| *c == chromosome)
            .map(|idx| Band {
                start: self.offset + self.step * idx as f64,
                width: self.bandwidth,
            })
    }

    /// Distance between the starts of two adjacent bands.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[ChromosomeId] {
        &self.domain
    }
}

///
/// Linear map from a count in `[0, max]` to a pixel row in `[bottom, top]`.
///
/// Pixel rows grow downward, so 0 maps to the bottom of the plot. With `max = 0`
/// the range collapses to the bottom row.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    max: u64,
    bottom: f64,
    top: f64,
}

impl LinearScale {
    pub fn new(max: u64, bottom: f64, top: f64) -> Self {
        LinearScale { max, bottom, top }
    }

    pub fn apply(&self, value: u64) -> f64 {
        if self.max == 0 {
            return self.bottom;
        }
        self.bottom + (value as f64 / self.max as f64) * (self.top - self.bottom)
    }

    pub fn domain_max(&self) -> u64 {
        self.max
    }

    ///
    /// Roughly `count` evenly spaced integer ticks within `[0, max]`, on a step of
    /// 1, 2 or 5 times a power of ten.
    ///
    pub fn ticks(&self, count: usize) -> Vec<u64> {
        if self.max == 0 || count == 0 {
            return vec![0];
        }
        let step = tick_increment(self.max, count);
        (0..=self.max / step).map(|k| k * step).collect()
    }
}

fn tick_increment(max: u64, count: usize) -> u64 {
    let raw = max as f64 / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // counts are integral, so never step by less than one
    ((factor * 10f64.powf(power)).round() as u64).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: BandScale,
    pub y: LinearScale,
}

///
/// Scales for one chart.
///
/// # Arguments
/// - chromosomes: the band domain, in display order
/// - max_total: tallest column over the currently active levels
/// - bounds: canvas size and margins
/// - padding: band padding fraction
///
pub fn compute_scales(
    chromosomes: Vec<ChromosomeId>,
    max_total: u64,
    bounds: &ChartBounds,
    padding: f64,
) -> Scales {
    Scales {
        x: BandScale::new(chromosomes, (bounds.plot_left(), bounds.plot_right()), padding),
        y: LinearScale::new(max_total, bounds.plot_bottom(), bounds.plot_top()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[fixture]
    fn bounds() -> ChartBounds {
        ChartBounds::from(&ChartConfig::default())
    }

    #[rstest]
    fn test_band_scale_covers_plot_area(bounds: ChartBounds) {
        let scale = BandScale::new(
            ChromosomeId::all().collect(),
            (bounds.plot_left(), bounds.plot_right()),
            0.1,
        );

        let span = bounds.plot_right() - bounds.plot_left();
        assert!(close(scale.step(), span / (24.0 + 0.1)));
        assert!(close(scale.bandwidth(), scale.step() * 0.9));

        let first = scale.band("1".parse().unwrap()).unwrap();
        let last = scale.band(ChromosomeId::Y).unwrap();
        // outer padding is symmetric
        let left_gap = first.start - bounds.plot_left();
        let right_gap = bounds.plot_right() - (last.start + last.width);
        assert!(close(left_gap, right_gap));
        assert!(close(left_gap, scale.step() * 0.1));
    }

    #[rstest]
    fn test_bands_follow_domain_order() {
        let scale = BandScale::new(ChromosomeId::all().collect(), (0.0, 240.0), 0.0);
        let two = scale.band("2".parse().unwrap()).unwrap();
        let ten = scale.band("10".parse().unwrap()).unwrap();
        let x = scale.band(ChromosomeId::X).unwrap();

        assert!(close(two.start, 10.0));
        assert!(close(ten.start, 90.0));
        assert!(close(x.start, 220.0));
        assert!(two.start < ten.start && ten.start < x.start);
    }

    #[rstest]
    fn test_band_outside_domain() {
        let scale = BandScale::new(vec![ChromosomeId::X], (0.0, 100.0), 0.1);
        assert_eq!(scale.band(ChromosomeId::Y), None);
    }

    #[rstest]
    fn test_linear_scale_is_inverted(bounds: ChartBounds) {
        let scale = LinearScale::new(6, bounds.plot_bottom(), bounds.plot_top());
        assert!(close(scale.apply(0), bounds.plot_bottom()));
        assert!(close(scale.apply(6), bounds.plot_top()));
        assert!(scale.apply(3) < scale.apply(2));
    }

    #[rstest]
    fn test_zero_domain_collapses_to_bottom(bounds: ChartBounds) {
        let scale = LinearScale::new(0, bounds.plot_bottom(), bounds.plot_top());
        assert!(close(scale.apply(0), bounds.plot_bottom()));
        assert!(close(scale.apply(10), bounds.plot_bottom()));
        assert_eq!(scale.ticks(10), vec![0]);
    }

    #[rstest]
    #[case(6, 10, vec![0, 1, 2, 3, 4, 5, 6])]
    #[case(100, 10, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100])]
    #[case(437, 10, vec![0, 50, 100, 150, 200, 250, 300, 350, 400])]
    #[case(2, 10, vec![0, 1, 2])]
    #[case(1234, 5, vec![0, 200, 400, 600, 800, 1000, 1200])]
    fn test_ticks(#[case] max: u64, #[case] count: usize, #[case] expected: Vec<u64>) {
        let scale = LinearScale::new(max, 200.0, 0.0);
        assert_eq!(scale.ticks(count), expected);
    }

    #[rstest]
    fn test_compute_scales(bounds: ChartBounds) {
        let scales = compute_scales(ChromosomeId::all().collect(), 40, &bounds, 0.1);
        assert_eq!(scales.x.domain().len(), 24);
        assert_eq!(scales.y.domain_max(), 40);
    }
}
