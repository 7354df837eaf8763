// File: crates/heatmap-core/src/svg.rs
// Summary: SVG documents for the chart and legend scenes (cells keep their data-* attributes).

use std::path::Path;

use anyhow::{Context, Result};
use ::svg::node::element::{Group, Line, Path as PathElement, Rectangle, Text};
use ::svg::Document;

use crate::axis::{AxisLayout, Orient, TICK_SIZE_INNER};
use crate::chart::ChartScene;
use crate::format::format_number;
use crate::legend::Legend;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn surface(id: &str, width: f64, height: f64) -> Document {
    Document::new()
        .set("xmlns", SVG_NS)
        .set("id", id)
        .set("width", format_number(width))
        .set("height", format_number(height))
}

/// d3-axis structure: a `path.domain` followed by one `g.tick` (line + label) per tick.
pub fn axis_group(axis: &AxisLayout) -> Group {
    let t = axis.transform;
    let mut group = Group::new()
        .set("id", axis.id)
        .set("transform", format!("translate({}, {})", format_number(t.dx), format_number(t.dy)))
        .set("fill", "none")
        .set("font-size", "10")
        .set("font-family", "sans-serif")
        .set("text-anchor", axis.orient.text_anchor())
        .add(PathElement::new().set("class", "domain").set("stroke", "currentColor").set("d", axis.domain_path()));

    let k = axis.orient.k();
    let inner = format_number(k * TICK_SIZE_INNER);
    let spacing = format_number(k * axis.label_spacing());
    for tick in &axis.ticks {
        let pos = format_number(tick.position);
        let line = Line::new().set("stroke", "currentColor");
        let label = Text::new(tick.label.as_str()).set("fill", "currentColor").set("dy", axis.orient.text_dy());
        let (translate, line, label) = match axis.orient {
            Orient::Bottom => (format!("translate({pos},0)"), line.set("y2", inner.as_str()), label.set("y", spacing.as_str())),
            Orient::Left => (format!("translate(0,{pos})"), line.set("x2", inner.as_str()), label.set("x", spacing.as_str())),
        };
        group = group.add(
            Group::new()
                .set("class", "tick")
                .set("opacity", "1")
                .set("transform", translate)
                .add(line)
                .add(label),
        );
    }
    group
}

pub fn chart_document(scene: &ChartScene) -> Document {
    let doc = scene.cells.iter().fold(surface(scene.id, scene.width, scene.height), |doc, cell| {
        let rect = cell.attributes().into_iter().fold(Rectangle::new(), |rect, (k, v)| rect.set(k, v));
        doc.add(rect)
    });
    doc.add(axis_group(&scene.x_axis)).add(axis_group(&scene.y_axis))
}

pub fn legend_document(legend: &Legend) -> Document {
    legend.swatches.iter().fold(surface(legend.id, legend.width, legend.height), |doc, s| {
        doc.add(
            Rectangle::new()
                .set("class", "legend-item")
                .set("x", format_number(s.x))
                .set("y", format_number(s.y))
                .set("width", format_number(s.width))
                .set("height", format_number(s.height))
                .set("fill", s.fill.to_string()),
        )
    })
}

pub fn chart_svg(scene: &ChartScene) -> String {
    chart_document(scene).to_string()
}

pub fn legend_svg(legend: &Legend) -> String {
    legend_document(legend).to_string()
}

/// Write an SVG document, creating parent directories as needed.
pub fn save(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    ::svg::save(path, document).with_context(|| format!("writing {}", path.display()))
}
