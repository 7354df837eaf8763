// File: crates/window-demo/src/main.rs
// Summary: Windowed heat map rendered to RGBA (CPU) and blitted with winit + softbuffer.
// Controls: hover a cell for its tooltip, T toggles light/dark, Esc quits.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use flexi_logger::Logger;
use heatmap_core::{load, CellListener, ChartConfig, DataSource, Heatmap, HeatmapChart, HoverTracker, Point, Tooltip};
use heatmap_render_skia::{RenderOptions, SkiaRenderer, Theme, TooltipOverlay};
use log::{debug, error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let source = DataSource::from_args_or_env(std::env::args().nth(1));
    let config = ChartConfig::from_env()?;
    let tooltip_config = config.tooltip.clone();

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let dataset = runtime
        .block_on(load(&source))
        .with_context(|| format!("failed to load dataset from {}", source.describe()))?;
    drop(runtime);

    let heatmap = HeatmapChart::new(&dataset, config).render();
    info!("{} cells ready", heatmap.chart.cells.len());

    let renderer = SkiaRenderer::new();
    let mut opts = RenderOptions::default();
    let (w, h) = SkiaRenderer::surface_size(&heatmap, &opts);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Monthly Global Land-Surface Temperature")
        .with_inner_size(PhysicalSize::new(w as u32, h as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let start = Instant::now();
    let mut tracker = HoverTracker::new();
    let mut tooltip = Tooltip::new(tooltip_config);
    let mut last_pointer = Point::default();

    event_loop.run(move |event, _, control_flow| {
        let now = start.elapsed();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    let at = Point::new(position.x, position.y);
                    last_pointer = at;
                    for evt in tracker.pointer_moved(&heatmap.chart, at) {
                        debug!("{evt:?}");
                        tooltip.handle_event(&evt, &heatmap, now);
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    if let Some(evt) = tracker.pointer_left(last_pointer) {
                        tooltip.handle_event(&evt, &heatmap, now);
                    }
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::T => {
                        opts.theme = if opts.theme.name == "dark" { Theme::light() } else { Theme::dark() };
                        window.request_redraw();
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                if tooltip.is_animating(now) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&mut surface, &renderer, &heatmap, &tooltip, now, &opts) {
                    error!("draw failed: {e:#}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }
        if *control_flow != ControlFlow::Exit {
            *control_flow = if tooltip.is_animating(now) { ControlFlow::Poll } else { ControlFlow::Wait };
        }
    });
}

fn draw(
    surface: &mut softbuffer::Surface,
    renderer: &SkiaRenderer,
    heatmap: &Heatmap,
    tooltip: &Tooltip,
    now: Duration,
    opts: &RenderOptions,
) -> Result<()> {
    let overlay = TooltipOverlay { tooltip, now };
    let (rgba, w, h, _) = renderer.render_to_rgba8(heatmap, Some(overlay), opts)?;
    let (nw, nh) = NonZeroU32::new(w as u32)
        .zip(NonZeroU32::new(h as u32))
        .ok_or_else(|| anyhow!("empty frame {w}x{h}"))?;
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    // softbuffer wants 0x00RRGGBB
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
