// File: crates/heatmap-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshot harness with bless flow.
// Behavior:
// - Renders the sample heat map to a PNG file without labels.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use heatmap_core::{ChartConfig, Dataset, HeatmapChart};
use heatmap_render_skia::{RenderOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let ds = Dataset::from_json_str(include_str!("../../heatmap-core/tests/data/sample.json")).expect("fixture");
    let hm = HeatmapChart::new(&ds, ChartConfig::default()).render();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let tmp = tempfile::tempdir().expect("tmp dir");
    let path = tmp.path().join("heatmap.png");
    SkiaRenderer::new().render_to_png(&hm, &opts, &path).expect("render to tmp");
    std::fs::read(path).expect("read tmp png")
}

#[test]
fn golden_heatmap_png() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("heatmap.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
