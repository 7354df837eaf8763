// File: crates/heatmap-core/src/scale.rs
// Summary: Year (X, linear), month (Y, band) and variance (color, sequential) scales.

use crate::color::{ColorRamp, Rgb};
use crate::config::ChartConfig;
use crate::dataset::{Dataset, Extents};
use crate::grid;

/// Continuous linear mapping; values outside the domain extrapolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `x` in the domain as a fraction; a collapsed domain maps everything to 0.5.
    #[inline]
    fn normalize(&self, x: f64) -> f64 {
        let (a, b) = self.domain;
        let span = b - a;
        if span == 0.0 { 0.5 } else { (x - a) / span }
    }

    #[inline]
    pub fn map(&self, x: f64) -> f64 {
        let t = self.normalize(x);
        let (r0, r1) = self.range;
        r0 * (1.0 - t) + r1 * t
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }
}

/// Discrete keys `0..len` mapped onto equal contiguous bands (no padding, centered).
/// A range given high-to-low assigns key 0 to the band nearest `range.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    len: u32,
    range: (f64, f64),
    step: f64,
    starts: Vec<f64>,
}

impl BandScale {
    pub fn new(len: u32, range: (f64, f64)) -> Self {
        let (r0, r1) = range;
        let reverse = r1 < r0;
        let (mut start, stop) = if reverse { (r1, r0) } else { (r0, r1) };
        let n = len as f64;
        let step = (stop - start) / n.max(1.0);
        start += (stop - start - step * n) * 0.5;
        let mut starts: Vec<f64> = (0..len).map(|i| start + step * i as f64).collect();
        if reverse {
            starts.reverse();
        }
        Self { len, range, step, starts }
    }

    /// Band start for `key`, or `None` for keys outside the domain.
    #[inline]
    pub fn map(&self, key: u32) -> Option<f64> {
        self.starts.get(key as usize).copied()
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> std::ops::Range<u32> {
        0..self.len
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Continuous value → color through a ramp. No clamping here; the ramp clamps `t`.
#[derive(Clone, Debug)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    ramp: ColorRamp,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), ramp: ColorRamp) -> Self {
        Self { domain, ramp }
    }

    /// Position of `v` along the ramp (0 at `domain.0`, 1 at `domain.1`).
    #[inline]
    pub fn t(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 { 0.5 } else { (v - d0) / (d1 - d0) }
    }

    #[inline]
    pub fn map(&self, v: f64) -> Rgb {
        self.ramp.at(self.t(v))
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }
}

/// The three scales shared by cells, axes and legend.
#[derive(Clone, Debug)]
pub struct HeatmapScales {
    pub x: LinearScale,
    pub y: BandScale,
    pub color: SequentialScale,
}

impl HeatmapScales {
    pub fn new(extents: Extents, cfg: &ChartConfig) -> Self {
        let w = cfg.width as f64;
        let h = cfg.height as f64;
        let p = cfg.padding as f64;
        let x = LinearScale::new((extents.year_min as f64, extents.year_max as f64), (p, w - p));
        let y = BandScale::new(12, (h - p, p));
        // max first: the hottest variance sits at t = 0, the red end of RdYlBu
        let color = SequentialScale::new((extents.variance_max, extents.variance_min), ColorRamp::rd_yl_bu());
        Self { x, y, color }
    }

    /// Scales over the dataset extrema; an empty dataset collapses every domain to zero.
    pub fn from_dataset(ds: &Dataset, cfg: &ChartConfig) -> Self {
        let extents = ds.extents().unwrap_or(Extents {
            year_min: 0,
            year_max: 0,
            variance_min: 0.0,
            variance_max: 0.0,
        });
        Self::new(extents, cfg)
    }

    /// Pixel width of one year.
    pub fn cell_width(&self) -> f64 {
        self.x.map(2.0) - self.x.map(1.0)
    }

    /// Thickness of one month band.
    pub fn cell_height(&self) -> f64 {
        match (self.y.map(0), self.y.map(1)) {
            (Some(a), Some(b)) => a - b,
            _ => self.y.bandwidth(),
        }
    }
}
