// File: crates/heatmap-core/src/chart.rs
// Summary: Heat map construction: scales → cells, axes and legend as a renderer-agnostic scene.

use log::debug;

use crate::axis::AxisLayout;
use crate::color::Rgb;
use crate::config::ChartConfig;
use crate::dataset::{Dataset, MonthRecord};
use crate::format::format_number;
use crate::geometry::{Point, RectF, Translate};
use crate::legend::Legend;
use crate::scale::HeatmapScales;
use crate::types::CHART_ID;

/// One drawn rectangle and the record behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub record: MonthRecord,
    pub x: f64,
    /// `None` when the month falls outside the 12 bands.
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    /// Zero-based month (`month - 1`).
    pub data_month: i64,
    pub data_year: i32,
    /// Absolute temperature (base + variance).
    pub data_temp: f64,
}

impl Cell {
    pub const CLASS: &'static str = "cell";

    pub fn rect(&self) -> Option<RectF> {
        self.y.map(|y| RectF::from_ltwh(self.x, y, self.width, self.height))
    }

    /// Inspectable attributes in document order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("class", Self::CLASS.to_string()), ("x", format_number(self.x))];
        if let Some(y) = self.y {
            out.push(("y", format_number(y)));
        }
        out.extend([
            ("width", format_number(self.width)),
            ("height", format_number(self.height)),
            ("data-month", self.data_month.to_string()),
            ("data-year", self.data_year.to_string()),
            ("data-temp", format_number(self.data_temp)),
            ("fill", self.fill.to_string()),
        ]);
        out
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attributes().into_iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }
}

/// Main chart surface: cells plus both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub id: &'static str,
    pub width: f64,
    pub height: f64,
    pub cells: Vec<Cell>,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
}

impl ChartScene {
    /// Topmost cell under `p`; later cells paint over earlier ones.
    pub fn cell_at(&self, p: Point) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .rev()
            .find(|(_, c)| c.rect().is_some_and(|r| r.contains(p)))
            .map(|(i, _)| i)
    }
}

/// Everything drawn for one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    pub base_temperature: f64,
    pub chart: ChartScene,
    pub legend: Legend,
}

impl Heatmap {
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.chart.cells.get(index)
    }
}

/// Builds a [`Heatmap`] from a borrowed dataset.
pub struct HeatmapChart<'a> {
    pub dataset: &'a Dataset,
    pub config: ChartConfig,
    pub scales: HeatmapScales,
}

impl<'a> HeatmapChart<'a> {
    pub fn new(dataset: &'a Dataset, config: ChartConfig) -> Self {
        let scales = HeatmapScales::from_dataset(dataset, &config);
        Self { dataset, config, scales }
    }

    pub fn render(&self) -> Heatmap {
        let cells = draw_cells(self.dataset, &self.scales);
        let (x_axis, y_axis) = draw_axes(&self.scales, &self.config);
        let legend = draw_legend(&self.scales, &self.config);
        debug!(
            "scene: {} cells, {} year ticks, {} legend swatches",
            cells.len(),
            x_axis.ticks.len(),
            legend.swatches.len()
        );
        Heatmap {
            base_temperature: self.dataset.base_temperature,
            chart: ChartScene {
                id: CHART_ID,
                width: self.config.width as f64,
                height: self.config.height as f64,
                cells,
                x_axis,
                y_axis,
            },
            legend,
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_cells(ds: &Dataset, scales: &HeatmapScales) -> Vec<Cell> {
    let width = scales.cell_width();
    let height = scales.cell_height();
    ds.monthly_variance
        .iter()
        .map(|r| Cell {
            record: *r,
            x: scales.x.map(r.year as f64),
            y: scales.y.map(r.month_index()),
            width,
            height,
            fill: scales.color.map(r.variance),
            data_month: r.month as i64 - 1,
            data_year: r.year,
            data_temp: r.temperature(ds.base_temperature),
        })
        .collect()
}

fn draw_axes(scales: &HeatmapScales, cfg: &ChartConfig) -> (AxisLayout, AxisLayout) {
    let h = cfg.height as f64;
    let p = cfg.padding as f64;
    let x_axis = AxisLayout::bottom(&scales.x, cfg.x_ticks, Translate::new(0.0, h - p));
    let y_axis = AxisLayout::left(&scales.y, Translate::new(p, 0.0));
    (x_axis, y_axis)
}

fn draw_legend(scales: &HeatmapScales, cfg: &ChartConfig) -> Legend {
    Legend::build(
        &scales.color,
        cfg.legend_samples,
        cfg.legend_width as f64,
        cfg.legend_height as f64,
        cfg.legend_swatch_height as f64,
    )
}
