//! SVG output
//!
//! Writes the same primitives as the rasteriser, one element each, so the
//! output stays a faithful vector copy of the scene.

use crate::scene::Scene;
use latticeplot_core::to_hex;
use std::fmt::Write;

/// Serialize a scene as a standalone SVG document
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_scene(&mut out, scene);
    out
}

fn write_scene(out: &mut String, scene: &Scene) -> std::fmt::Result {
    writeln!(out, "<?xml version='1.0' encoding='utf-8'?>")?;
    writeln!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
        w = scene.width,
        h = scene.height
    )?;
    writeln!(
        out,
        "<rect width='100%' height='100%' fill='{}' />",
        to_hex(scene.background)
    )?;

    for segment in &scene.segments {
        writeln!(
            out,
            "<line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='1' />",
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            to_hex(segment.color)
        )?;
    }

    for marker in &scene.markers {
        writeln!(
            out,
            "<circle cx='{:.2}' cy='{:.2}' r='{:.2}' fill='{}' />",
            marker.at.x,
            marker.at.y,
            marker.radius,
            to_hex(marker.color)
        )?;
    }

    for label in &scene.labels {
        // text is positioned by its baseline; the cap height sits above it
        writeln!(
            out,
            "<text x='{:.2}' y='{:.2}' font-family='sans-serif' font-size='{:.2}' text-anchor='middle' fill='{}'>{}</text>",
            label.center_x,
            label.top + label.size,
            label.size / 0.7,
            to_hex(label.color),
            escape(&label.text)
        )?;
    }

    writeln!(out, "</svg>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
