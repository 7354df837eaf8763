// File: crates/heatmap-core/src/legend.rs
// Summary: Legend strip of equal-width swatches sampled from the color scale.

use crate::color::Rgb;
use crate::scale::SequentialScale;
use crate::types::LEGEND_ID;

#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub id: &'static str,
    pub width: f64,
    pub height: f64,
    pub swatches: Vec<Swatch>,
}

impl Legend {
    /// `samples` nice values over the color domain, laid out left to right in domain order.
    pub fn build(color: &SequentialScale, samples: usize, width: f64, height: f64, swatch_height: f64) -> Self {
        let values = color.ticks(samples);
        let w = if values.is_empty() { 0.0 } else { width / values.len() as f64 };
        let swatches = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Swatch { value: v, x: i as f64 * w, y: 0.0, width: w, height: swatch_height, fill: color.map(v) })
            .collect();
        Self { id: LEGEND_ID, width, height, swatches }
    }

    pub fn total_width(&self) -> f64 {
        self.swatches.iter().map(|s| s.width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRamp;

    #[test]
    fn six_swatches_fill_the_strip() {
        let color = SequentialScale::new((5.228, -6.976), ColorRamp::rd_yl_bu());
        let legend = Legend::build(&color, 6, 300.0, 40.0, 20.0);
        assert_eq!(legend.swatches.len(), 6);
        assert!((legend.total_width() - 300.0).abs() <= 1.0);
        assert_eq!(legend.swatches[1].x, 50.0);
        // descending values: warmest swatch first
        assert_eq!(legend.swatches[0].value, 4.0);
        assert!(legend.swatches[0].fill.r > legend.swatches[5].fill.r);
    }
}
