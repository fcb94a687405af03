//! SVG backend: serializes a display list into an SVG document.
//!
//! The document's pixel dimensions equal the logical canvas size, so raster
//! output is a 1:1 rendering of entity coordinates. Writing into a `String`
//! through `fmt::Write` cannot fail, so this module is infallible; parse
//! and raster errors belong to [`crate::export`].

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::fmt::Write;

use crate::render::{Anchor, DisplayList, DrawCmd, Stroke};

/// Serialize a display list to a standalone SVG document.
#[must_use]
pub fn document(list: &DisplayList) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = list.width,
        h = list.height,
    );
    for cmd in &list.cmds {
        write_cmd(&mut out, cmd);
    }
    out.push_str("</svg>\n");
    out
}

fn write_cmd(out: &mut String, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Rect { rect, fill, stroke } => {
            let _ = writeln!(
                out,
                "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\"{}/>",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                paint_attrs(fill.as_deref(), stroke.as_ref()),
            );
        }
        DrawCmd::Circle { center, radius, fill, stroke } => {
            let _ = writeln!(
                out,
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\"{}/>",
                center.x,
                center.y,
                radius,
                paint_attrs(fill.as_deref(), stroke.as_ref()),
            );
        }
        DrawCmd::Polygon { points, fill, stroke } => {
            let mut list = String::new();
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    list.push(' ');
                }
                let _ = write!(list, "{:.1},{:.1}", p.x, p.y);
            }
            let _ = writeln!(
                out,
                "  <polygon points=\"{list}\"{}/>",
                paint_attrs(fill.as_deref(), stroke.as_ref()),
            );
        }
        DrawCmd::Line { from, to, stroke } => {
            let _ = writeln!(
                out,
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"{}/>",
                from.x,
                from.y,
                to.x,
                to.y,
                paint_attrs(None, Some(stroke)),
            );
        }
        DrawCmd::Text { at, content, size, color, anchor, bold } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let weight = if *bold { " font-weight=\"bold\"" } else { "" };
            let _ = writeln!(
                out,
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"{size}\" \
                 fill=\"{color}\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\"{weight}>{}</text>",
                at.x,
                at.y,
                escape_xml(content),
            );
        }
    }
}

fn paint_attrs(fill: Option<&str>, stroke: Option<&Stroke>) -> String {
    let mut attrs = String::new();
    match fill {
        Some(color) => {
            let _ = write!(attrs, " fill=\"{color}\"");
        }
        None => attrs.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = stroke {
        let _ = write!(attrs, " stroke=\"{}\" stroke-width=\"{}\"", stroke.color, stroke.width);
    }
    attrs
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
