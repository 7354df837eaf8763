// File: crates/demo/src/main.rs
// Summary: Demo loads the monthly temperature dataset and renders the heat map to SVG and PNG.
// Usage: heatmap-demo [source] [out_dir]
// - source: URL or JSON file path (falls back to HEATMAP_SOURCE, then the upstream URL)
// - out_dir: defaults to target/out

use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::Logger;
use heatmap_core::{load, svg, ChartConfig, DataSource, HeatmapChart};
use heatmap_render_skia::{theme, RenderOptions, SkiaRenderer};
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut args = std::env::args().skip(1);
    let source = DataSource::from_args_or_env(args.next());
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));

    let config = match std::env::var("HEATMAP_CONFIG") {
        Ok(path) => ChartConfig::from_json_file(&path)
            .with_context(|| format!("loading chart config '{path}'"))?
            .with_env()?,
        Err(_) => ChartConfig::from_env()?,
    };

    let dataset = load(&source)
        .await
        .with_context(|| format!("failed to load dataset from {}", source.describe()))?;
    println!("Loaded {} monthly records (base {}°C)", dataset.len(), dataset.base_temperature);
    if dataset.is_empty() {
        warn!("dataset is empty; axes will collapse to a single point");
    }

    let heatmap = HeatmapChart::new(&dataset, config).render();
    info!("built {} cells, {} legend swatches", heatmap.chart.cells.len(), heatmap.legend.swatches.len());

    let chart_path = out_dir.join("heatmap.svg");
    svg::save(&svg::chart_document(&heatmap.chart), &chart_path)?;
    println!("Wrote {}", chart_path.display());

    let legend_path = out_dir.join("legend.svg");
    svg::save(&svg::legend_document(&heatmap.legend), &legend_path)?;
    println!("Wrote {}", legend_path.display());

    let opts = RenderOptions {
        theme: std::env::var("HEATMAP_THEME").map(|name| theme::find(&name)).unwrap_or_default(),
        ..RenderOptions::default()
    };
    let png_path = out_dir.join("heatmap.png");
    SkiaRenderer::new()
        .render_to_png(&heatmap, &opts, &png_path)
        .with_context(|| format!("rendering {}", png_path.display()))?;
    println!("Wrote {}", png_path.display());

    Ok(())
}
