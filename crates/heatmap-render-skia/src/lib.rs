// File: crates/heatmap-render-skia/src/lib.rs
// Summary: Headless rasterization of heat map scenes using Skia CPU raster surfaces.
// Notes:
// - Layout comes entirely from heatmap-core; this crate only paints it.
// - The legend is stacked under the chart; the tooltip is painted last, on top.

pub mod text;
pub mod theme;

use std::time::Duration;

use anyhow::{anyhow, Result};
use log::debug;
use skia_safe as skia;

use heatmap_core::axis::{AxisLayout, Orient, CRISP_OFFSET, TICK_SIZE_INNER, TICK_SIZE_OUTER};
use heatmap_core::{ChartScene, Heatmap, Legend, Rgb, Tooltip};

pub use text::{Anchor, TextShaper};
pub use theme::Theme;

const AXIS_FONT_SIZE: f32 = 10.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_LINE_HEIGHT: f32 = 16.0;
const TOOLTIP_PADDING: f32 = 6.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Axis tick labels; off for pixel-stable snapshots.
    pub draw_labels: bool,
    pub include_legend: bool,
    /// Device pixels per layout unit (HiDPI).
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true, include_legend: true, scale: 1.0 }
    }
}

/// Tooltip to overlay, sampled at `now`.
#[derive(Clone, Copy)]
pub struct TooltipOverlay<'a> {
    pub tooltip: &'a Tooltip,
    pub now: Duration,
}

fn to_skia(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Surface size for `heatmap` under `opts` (legend stacked below the chart).
    pub fn surface_size(heatmap: &Heatmap, opts: &RenderOptions) -> (i32, i32) {
        let w = heatmap.chart.width.max(if opts.include_legend { heatmap.legend.width } else { 0.0 });
        let h = heatmap.chart.height + if opts.include_legend { heatmap.legend.height } else { 0.0 };
        let s = opts.scale.max(0.1) as f64;
        ((w * s).ceil() as i32, (h * s).ceil() as i32)
    }

    /// Legend origin inside the surface: left-aligned with the cell grid, under the chart.
    pub fn legend_origin(heatmap: &Heatmap) -> (f32, f32) {
        (heatmap.chart.y_axis.transform.dx as f32, heatmap.chart.height as f32)
    }

    fn paint(&self, canvas: &skia::Canvas, heatmap: &Heatmap, overlay: Option<TooltipOverlay<'_>>, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        canvas.save();
        canvas.scale((opts.scale.max(0.1), opts.scale.max(0.1)));
        draw_cells(canvas, &heatmap.chart);
        self.draw_axis(canvas, &heatmap.chart.x_axis, opts);
        self.draw_axis(canvas, &heatmap.chart.y_axis, opts);
        if opts.include_legend {
            let (lx, ly) = Self::legend_origin(heatmap);
            canvas.save();
            canvas.translate((lx, ly));
            draw_legend(canvas, &heatmap.legend);
            canvas.restore();
        }
        if let Some(o) = overlay {
            self.draw_tooltip(canvas, o, opts);
        }
        canvas.restore();
    }

    fn raster(&self, heatmap: &Heatmap, overlay: Option<TooltipOverlay<'_>>, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = Self::surface_size(heatmap, opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), heatmap, overlay, opts);
        debug!("rasterized {} cells into {}x{}", heatmap.chart.cells.len(), w, h);
        Ok(surface)
    }

    /// Render to tightly packed RGBA8 pixels. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        heatmap: &Heatmap,
        overlay: Option<TooltipOverlay<'_>>,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(heatmap, overlay, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(anyhow!("reading back {w}x{h} pixels failed"));
        }
        Ok((px, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, heatmap: &Heatmap, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(heatmap, None, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the heat map to a PNG at `output_png_path`.
    pub fn render_to_png(&self, heatmap: &Heatmap, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(heatmap, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &AxisLayout, opts: &RenderOptions) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(opts.theme.axis_line);

        let k = axis.orient.k() as f32;
        let outer = k * TICK_SIZE_OUTER as f32;
        let inner = k * TICK_SIZE_INNER as f32;
        let off = CRISP_OFFSET as f32;
        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);

        canvas.save();
        canvas.translate((axis.transform.dx as f32, axis.transform.dy as f32));

        let mut path = skia::Path::new();
        match axis.orient {
            Orient::Bottom => {
                path.move_to((r0, outer));
                path.line_to((r0, off));
                path.line_to((r1, off));
                path.line_to((r1, outer));
            }
            Orient::Left => {
                path.move_to((outer, r0));
                path.line_to((off, r0));
                path.line_to((off, r1));
                path.line_to((outer, r1));
            }
        }
        canvas.draw_path(&path, &stroke);

        let spacing = k * axis.label_spacing() as f32;
        for tick in &axis.ticks {
            let pos = tick.position as f32;
            match axis.orient {
                Orient::Bottom => {
                    canvas.draw_line((pos, 0.0), (pos, inner), &stroke);
                    if opts.draw_labels {
                        self.text.draw(canvas, &tick.label, pos, spacing, AXIS_FONT_SIZE, opts.theme.axis_label, Anchor::Middle);
                    }
                }
                Orient::Left => {
                    canvas.draw_line((0.0, pos), (inner, pos), &stroke);
                    if opts.draw_labels {
                        self.text.draw_centered_v(canvas, &tick.label, spacing, pos, AXIS_FONT_SIZE, opts.theme.axis_label, Anchor::End);
                    }
                }
            }
        }
        canvas.restore();
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, overlay: TooltipOverlay<'_>, opts: &RenderOptions) {
        let opacity = overlay.tooltip.opacity_at(overlay.now);
        if opacity <= 0.0 {
            return;
        }
        let lines: Vec<&str> = overlay.tooltip.lines().collect();
        if lines.is_empty() {
            return;
        }
        let text_w = lines
            .iter()
            .map(|l| self.text.measure_width(l, TOOLTIP_FONT_SIZE))
            .fold(0.0f32, f32::max);
        let pos = overlay.tooltip.position();
        let rect = skia::Rect::from_xywh(
            pos.x as f32,
            pos.y as f32,
            text_w + TOOLTIP_PADDING * 2.0,
            lines.len() as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0,
        );

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme::with_opacity(opts.theme.tooltip_background, opacity));
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme::with_opacity(opts.theme.tooltip_border, opacity));
        canvas.draw_round_rect(rect, 4.0, 4.0, &border);

        let color = theme::with_opacity(opts.theme.tooltip_text, opacity);
        for (i, line) in lines.iter().enumerate() {
            let top = rect.top + TOOLTIP_PADDING + i as f32 * TOOLTIP_LINE_HEIGHT;
            self.text.draw(canvas, line, rect.left + TOOLTIP_PADDING, top, TOOLTIP_FONT_SIZE, color, Anchor::Start);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_cells(canvas: &skia::Canvas, scene: &ChartScene) {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    for cell in &scene.cells {
        // cells without a month band have no position
        let Some(r) = cell.rect() else { continue };
        paint.set_color(to_skia(cell.fill));
        canvas.draw_rect(
            skia::Rect::from_xywh(r.left as f32, r.top as f32, r.width as f32, r.height as f32),
            &paint,
        );
    }
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend) {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    for s in &legend.swatches {
        paint.set_color(to_skia(s.fill));
        canvas.draw_rect(skia::Rect::from_xywh(s.x as f32, s.y as f32, s.width as f32, s.height as f32), &paint);
    }
}
