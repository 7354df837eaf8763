// File: crates/heatmap-core/src/axis.rs
// Summary: Axis layout (orientation, transform, ticks, domain path) for the year and month axes.

use crate::format::{format_integer, format_number};
use crate::geometry::Translate;
use crate::scale::{BandScale, LinearScale};
use crate::types::{month_name, X_AXIS_ID, Y_AXIS_ID};

pub const TICK_SIZE_INNER: f64 = 6.0;
pub const TICK_SIZE_OUTER: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift so 1px strokes land on pixel centers.
pub const CRISP_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

impl Orient {
    /// +1 for axes whose ticks grow down/right, -1 otherwise.
    pub fn k(self) -> f64 {
        match self {
            Orient::Bottom => 1.0,
            Orient::Left => -1.0,
        }
    }

    pub fn text_anchor(self) -> &'static str {
        match self {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        }
    }

    pub fn text_dy(self) -> &'static str {
        match self {
            Orient::Bottom => "0.71em",
            Orient::Left => "0.32em",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis, in the axis group's coordinate space.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub id: &'static str,
    pub orient: Orient,
    pub transform: Translate,
    /// Scale range with the crisp offset applied.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl AxisLayout {
    /// Bottom axis over the year scale with integer labels.
    pub fn bottom(x: &LinearScale, count: usize, transform: Translate) -> Self {
        let ticks = x
            .ticks(count)
            .into_iter()
            .map(|v| Tick { value: v, position: x.map(v) + CRISP_OFFSET, label: format_integer(v) })
            .collect();
        Self {
            id: X_AXIS_ID,
            orient: Orient::Bottom,
            transform,
            range: (x.range.0 + CRISP_OFFSET, x.range.1 + CRISP_OFFSET),
            ticks,
        }
    }

    /// Left axis with one tick per month band, centered on the band.
    pub fn left(y: &BandScale, transform: Translate) -> Self {
        let center = y.bandwidth() / 2.0;
        let ticks = y
            .domain()
            .filter_map(|k| {
                let start = y.map(k)?;
                Some(Tick {
                    value: k as f64,
                    position: start + center,
                    label: month_name(k).unwrap_or_default().to_string(),
                })
            })
            .collect();
        let (r0, r1) = y.range();
        Self {
            id: Y_AXIS_ID,
            orient: Orient::Left,
            transform,
            range: (r0 + CRISP_OFFSET, r1 + CRISP_OFFSET),
            ticks,
        }
    }

    /// Distance from the axis line to the label anchor.
    pub fn label_spacing(&self) -> f64 {
        TICK_SIZE_INNER.max(0.0) + TICK_PADDING
    }

    /// SVG path data for the axis line with its outer ticks.
    pub fn domain_path(&self) -> String {
        let k = self.orient.k();
        let outer = format_number(k * TICK_SIZE_OUTER);
        let (r0, r1) = (format_number(self.range.0), format_number(self.range.1));
        let off = format_number(CRISP_OFFSET);
        match self.orient {
            Orient::Bottom => format!("M{r0},{outer}V{off}H{r1}V{outer}"),
            Orient::Left => format!("M{outer},{r0}H{off}V{r1}H{outer}"),
        }
    }
}
