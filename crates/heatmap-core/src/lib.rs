// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, scales, scene construction and tooltip state.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod legend;
pub mod loader;
pub mod scale;
pub mod svg;
pub mod tooltip;
pub mod types;

pub use axis::{AxisLayout, Orient, Tick};
pub use chart::{Cell, ChartScene, Heatmap, HeatmapChart};
pub use color::{ColorRamp, Rgb};
pub use config::{ChartConfig, TooltipConfig};
pub use dataset::{Dataset, Extents, MonthRecord};
pub use geometry::{Point, RectF, Translate};
pub use hover::{CellListener, HoverTracker, PointerEvent};
pub use legend::{Legend, Swatch};
pub use loader::{load, DataSource, LoadError, Loader, DEFAULT_URL};
pub use scale::{BandScale, HeatmapScales, LinearScale, SequentialScale};
pub use tooltip::{Tooltip, TooltipState};
