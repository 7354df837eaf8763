// File: crates/heatmap-core/src/config.rs
// Summary: Chart dimensions, legend layout and tooltip timing with env/JSON overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{HEIGHT, PADDING, WIDTH};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Space between the surface edge and the cell grid on every side.
    pub padding: u32,
    /// Suggested tick count for the year axis.
    pub x_ticks: usize,
    pub legend_width: u32,
    pub legend_height: u32,
    pub legend_swatch_height: u32,
    /// Number of color samples requested for the legend.
    pub legend_samples: usize,
    pub tooltip: TooltipConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipConfig {
    pub show_ms: u64,
    pub hide_ms: u64,
    pub visible_opacity: f64,
    /// Added to the pointer's vertical coordinate.
    pub offset_y: f64,
}

impl TooltipConfig {
    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.show_ms)
    }

    pub fn hide_duration(&self) -> Duration {
        Duration::from_millis(self.hide_ms)
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { show_ms: 200, hide_ms: 500, visible_opacity: 0.9, offset_y: -28.0 }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            x_ticks: 10,
            legend_width: 300,
            legend_height: 40,
            legend_swatch_height: 20,
            legend_samples: 6,
            tooltip: TooltipConfig::default(),
        }
    }
}

fn parsed_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, fallback: T) -> T {
    lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

impl ChartConfig {
    /// Defaults overridden by `HEATMAP_WIDTH`, `HEATMAP_HEIGHT` and `HEATMAP_PADDING`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `HEATMAP_*` overrides from `lookup`, then validate the result.
    /// Unparsable values are ignored.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cfg = Self {
            width: parsed_or(&lookup, "HEATMAP_WIDTH", self.width),
            height: parsed_or(&lookup, "HEATMAP_HEIGHT", self.height),
            padding: parsed_or(&lookup, "HEATMAP_PADDING", self.padding),
            ..self
        };
        cfg.validate().context("invalid HEATMAP_* override")?;
        Ok(cfg)
    }

    /// Partial JSON document; missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text).context("parsing chart config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.padding.saturating_mul(2) >= self.width || self.padding.saturating_mul(2) >= self.height {
            anyhow::bail!("padding {} leaves no room in a {}x{} chart", self.padding, self.width, self.height);
        }
        if self.legend_samples == 0 {
            anyhow::bail!("legend needs at least one sample");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_layout() {
        let c = ChartConfig::default();
        assert_eq!((c.width, c.height, c.padding), (1000, 500, 60));
        assert_eq!((c.legend_width, c.legend_height, c.legend_samples), (300, 40, 6));
        assert_eq!(c.tooltip.show_duration(), Duration::from_millis(200));
        assert_eq!(c.tooltip.hide_duration(), Duration::from_millis(500));
        assert_eq!(c.tooltip.visible_opacity, 0.9);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = ChartConfig::from_json_str(r#"{"width": 1200, "tooltip": {"hide_ms": 250}}"#).unwrap();
        assert_eq!(c.width, 1200);
        assert_eq!(c.height, 500);
        assert_eq!(c.tooltip.hide_ms, 250);
        assert_eq!(c.tooltip.show_ms, 200);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_padding() {
        assert!(ChartConfig::from_json_str(r#"{"widht": 10}"#).is_err());
        assert!(ChartConfig::from_json_str(r#"{"padding": 300}"#).is_err());
    }

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let c = ChartConfig::default()
            .with_overrides(vars(&[("HEATMAP_WIDTH", " 1200 "), ("HEATMAP_HEIGHT", "tall")]))
            .unwrap();
        assert_eq!((c.width, c.height, c.padding), (1200, 500, 60));
    }

    #[test]
    fn overrides_are_validated() {
        let err = ChartConfig::default().with_overrides(vars(&[("HEATMAP_PADDING", "600")])).unwrap_err();
        assert!(format!("{err:#}").contains("padding 600"), "got {err:#}");
        assert!(ChartConfig::default().with_overrides(vars(&[("HEATMAP_WIDTH", "100")])).is_err());
    }
}
