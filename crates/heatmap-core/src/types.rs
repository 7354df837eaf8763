// File: crates/heatmap-core/src/types.rs
// Summary: Shared constants (surface sizes, paddings, month names) and element ids.

/// Default chart surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default chart surface height in pixels.
pub const HEIGHT: u32 = 500;
/// Default padding around the cell grid, in pixels.
pub const PADDING: u32 = 60;

/// Month labels indexed by zero-based band.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const CHART_ID: &str = "chart";
pub const LEGEND_ID: &str = "legend";
pub const TOOLTIP_ID: &str = "tooltip";
pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";

/// Month name for a zero-based band index.
pub fn month_name(index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(index as usize).copied()
}
