// File: crates/heatmap-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, cell pixels and the tooltip overlay.

use std::time::Duration;

use heatmap_core::{ChartConfig, Dataset, Heatmap, HeatmapChart, Point, Tooltip};
use heatmap_render_skia::{RenderOptions, SkiaRenderer, TooltipOverlay};

fn heatmap() -> (Dataset, Heatmap) {
    let ds = Dataset::from_json_str(include_str!("../../heatmap-core/tests/data/sample.json")).expect("fixture");
    let hm = HeatmapChart::new(&ds, ChartConfig::default()).render();
    (ds, hm)
}

fn quiet() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() } // avoid font variance
}

fn pixel(px: &[u8], stride: usize, x: f64, y: f64) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let (_, hm) = heatmap();
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&hm, None, &quiet()).expect("rgba render");
    assert_eq!((w, h), (1000, 540));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    // white background, opaque
    assert_eq!(pixel(&px, stride, 2.0, 2.0), [255, 255, 255, 255]);
}

#[test]
fn legend_can_be_left_out() {
    let (_, hm) = heatmap();
    let opts = RenderOptions { include_legend: false, ..quiet() };
    let (_, w, h, _) = SkiaRenderer::new().render_to_rgba8(&hm, None, &opts).expect("rgba render");
    assert_eq!((w, h), (1000, 500));
}

#[test]
fn cell_centers_carry_their_fill() {
    let (_, hm) = heatmap();
    let (px, _, _, stride) = SkiaRenderer::new().render_to_rgba8(&hm, None, &quiet()).expect("rgba render");
    for cell in hm.chart.cells.iter().filter(|c| c.record.year == 1900) {
        let r = cell.rect().expect("placed");
        let c = Point::new(r.left + r.width / 2.0, r.top + r.height / 2.0);
        assert_eq!(pixel(&px, stride, c.x, c.y), [cell.fill.r, cell.fill.g, cell.fill.b, 255], "month {}", cell.record.month);
    }
}

#[test]
fn legend_swatches_drawn_under_chart() {
    let (_, hm) = heatmap();
    let (px, _, _, stride) = SkiaRenderer::new().render_to_rgba8(&hm, None, &quiet()).expect("rgba render");
    let (lx, ly) = SkiaRenderer::legend_origin(&hm);
    let s = &hm.legend.swatches[0];
    let x = lx as f64 + s.x + s.width / 2.0;
    let y = ly as f64 + s.y + s.height / 2.0;
    assert_eq!(pixel(&px, stride, x, y), [s.fill.r, s.fill.g, s.fill.b, 255]);
}

#[test]
fn tooltip_overlay_follows_opacity() {
    let (ds, hm) = heatmap();
    let renderer = SkiaRenderer::new();
    let opts = quiet();
    let (plain, _, _, stride) = renderer.render_to_rgba8(&hm, None, &opts).expect("plain");

    let mut tip = Tooltip::default();
    tip.show(&ds.monthly_variance[0], ds.base_temperature, Point::new(300.0, 200.0), Duration::ZERO);

    // not yet faded in: nothing visible
    let at_start = TooltipOverlay { tooltip: &tip, now: Duration::ZERO };
    let (px0, ..) = renderer.render_to_rgba8(&hm, Some(at_start), &opts).expect("t=0");
    assert_eq!(px0, plain);

    let settled = TooltipOverlay { tooltip: &tip, now: Duration::from_secs(1) };
    let (px1, ..) = renderer.render_to_rgba8(&hm, Some(settled), &opts).expect("t=1s");
    let p = tip.position();
    // inside the left padding of the box
    assert_ne!(pixel(&px1, stride, p.x + 3.0, p.y + 8.0), pixel(&plain, stride, p.x + 3.0, p.y + 8.0));
}

#[test]
fn png_bytes_have_signature() {
    let (_, hm) = heatmap();
    let bytes = SkiaRenderer::new().render_to_png_bytes(&hm, &quiet()).expect("png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 540));
}

#[test]
fn scale_factor_multiplies_surface() {
    let (_, hm) = heatmap();
    let opts = RenderOptions { scale: 2.0, ..quiet() };
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&hm, None, &opts).expect("rgba render");
    assert_eq!((w, h), (2000, 1080));
    let cell = &hm.chart.cells[0];
    let r = cell.rect().expect("placed");
    let (cx, cy) = ((r.left + r.width / 2.0) * 2.0, (r.top + r.height / 2.0) * 2.0);
    assert_eq!(pixel(&px, stride, cx, cy), [cell.fill.r, cell.fill.g, cell.fill.b, 255]);
}
