//! Rendering: turns a document snapshot into a display list.
//!
//! `draw` is a pure function of `(doc, ui, mode)` — it mutates nothing and
//! is idempotent on a snapshot, so the host can re-run it after every
//! mutation without diffing. The resulting [`DisplayList`] is replayed to
//! SVG by [`crate::svg`] and rasterized by [`crate::export`].
//!
//! Z-order per frame is fixed: background (plus layer bands in architecture
//! mode), then relationship lines, then entities in creation order, with
//! the selected entity's stroke restyled during its own draw. A
//! relationship whose endpoint is missing is skipped silently; the cascade
//! in [`crate::doc::DocStore::delete`] makes that transient at worst.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FILL, DEFAULT_STROKE, DETAIL_FONT_SIZE,
    ENTITY_STROKE_WIDTH, LABEL_FONT_SIZE, LAYER_BAND_TINTS, SELECTION_STROKE,
    SELECTION_STROKE_WIDTH, TABLE_HEADER_FILL, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
    TABLE_ROW_TINT, TEXT_COLOR,
};
use crate::doc::{DocStore, Entity, EntityBody, Layer, ShapeKind};
use crate::engine::CanvasMode;
use crate::geom::{Point, Rect};
use crate::input::UiState;

/// Stroke style for an outline or line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// CSS color string.
    pub color: String,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: &str, width: f64) -> Self {
        Self { color: color.to_owned(), width }
    }
}

/// Horizontal text anchoring relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One drawing primitive. Colors are CSS color strings; text is vertically
/// centered on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        at: Point,
        content: String,
        size: f64,
        color: String,
        anchor: Anchor,
        bold: bool,
    },
}

/// A full frame's draw commands for the fixed-size surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub cmds: Vec<DrawCmd>,
}

/// Draw the full scene for one frame.
#[must_use]
pub fn draw(doc: &DocStore, ui: &UiState, mode: CanvasMode) -> DisplayList {
    let mut cmds = Vec::new();

    cmds.push(DrawCmd::Rect {
        rect: Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        fill: Some("#FFFFFF".to_owned()),
        stroke: None,
    });

    if mode.has_layer_bands() {
        draw_layer_bands(&mut cmds);
    }

    for relationship in doc.relationships() {
        // Skip silently when an endpoint is missing; never halt the frame.
        let (Some(from), Some(to)) = (doc.get(relationship.from), doc.get(relationship.to)) else {
            continue;
        };
        draw_relationship(&mut cmds, from, to, relationship.cardinality.label());
    }

    for entity in doc.ordered() {
        draw_entity(&mut cmds, entity, ui.selected == Some(entity.id));
    }

    DisplayList { width: CANVAS_WIDTH, height: CANVAS_HEIGHT, cmds }
}

// =============================================================
// Background
// =============================================================

fn draw_layer_bands(cmds: &mut Vec<DrawCmd>) {
    let band_height = CANVAS_HEIGHT / Layer::ALL.len() as f64;
    for (i, layer) in Layer::ALL.iter().enumerate() {
        let top = band_height * i as f64;
        cmds.push(DrawCmd::Rect {
            rect: Rect::new(0.0, top, CANVAS_WIDTH, band_height),
            fill: Some(LAYER_BAND_TINTS[i % 2].to_owned()),
            stroke: None,
        });
        cmds.push(DrawCmd::Text {
            at: Point::new(8.0, top + 14.0),
            content: layer.title().to_owned(),
            size: DETAIL_FONT_SIZE,
            color: "#9CA3AF".to_owned(),
            anchor: Anchor::Start,
            bold: true,
        });
    }
}

// =============================================================
// Relationships
// =============================================================

fn draw_relationship(cmds: &mut Vec<DrawCmd>, from: &Entity, to: &Entity, label: &str) {
    let a = from.bounds().bottom_center();
    let b = to.bounds().top_center();
    cmds.push(DrawCmd::Line {
        from: a,
        to: b,
        stroke: Stroke::new(DEFAULT_STROKE, ENTITY_STROKE_WIDTH),
    });
    cmds.push(DrawCmd::Text {
        at: Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
        content: label.to_owned(),
        size: DETAIL_FONT_SIZE,
        color: TEXT_COLOR.to_owned(),
        anchor: Anchor::Middle,
        bold: false,
    });
}

// =============================================================
// Entity dispatch
// =============================================================

fn draw_entity(cmds: &mut Vec<DrawCmd>, entity: &Entity, selected: bool) {
    let stroke = |custom: Option<&String>| {
        if selected {
            Stroke::new(SELECTION_STROKE, SELECTION_STROKE_WIDTH)
        } else {
            Stroke::new(custom.map_or(DEFAULT_STROKE, String::as_str), ENTITY_STROKE_WIDTH)
        }
    };

    match &entity.body {
        EntityBody::Shape { shape, label, stroke: custom_stroke, fill, .. } => {
            let bounds = entity.bounds();
            let fill = Some(fill.clone().unwrap_or_else(|| DEFAULT_FILL.to_owned()));
            match shape {
                ShapeKind::Rectangle => {
                    cmds.push(DrawCmd::Rect {
                        rect: bounds,
                        fill,
                        stroke: Some(stroke(custom_stroke.as_ref())),
                    });
                }
                ShapeKind::Circle => {
                    cmds.push(DrawCmd::Circle {
                        center: bounds.center(),
                        radius: bounds.width / 2.0,
                        fill,
                        stroke: Some(stroke(custom_stroke.as_ref())),
                    });
                }
                ShapeKind::Diamond => {
                    cmds.push(DrawCmd::Polygon {
                        points: diamond_points(bounds),
                        fill,
                        stroke: Some(stroke(custom_stroke.as_ref())),
                    });
                }
                ShapeKind::Text => {
                    // No body fill; selection shows as an outline box.
                    if selected {
                        cmds.push(DrawCmd::Rect {
                            rect: bounds,
                            fill: None,
                            stroke: Some(stroke(custom_stroke.as_ref())),
                        });
                    }
                }
            }
            if let Some(label) = label {
                if !label.is_empty() {
                    cmds.push(centered_label(bounds, label));
                }
            }
        }
        EntityBody::Line { end_x, end_y, stroke: custom_stroke } => {
            cmds.push(DrawCmd::Line {
                from: Point::new(entity.x, entity.y),
                to: Point::new(*end_x, *end_y),
                stroke: stroke(custom_stroke.as_ref()),
            });
        }
        EntityBody::Table { name, width, attributes } => {
            draw_table(cmds, entity, name, *width, attributes, stroke(None));
        }
        EntityBody::Component { layer, label, color, .. } => {
            let bounds = entity.bounds();
            cmds.push(DrawCmd::Rect {
                rect: bounds,
                fill: Some(color.clone().unwrap_or_else(|| layer.default_color().to_owned())),
                stroke: Some(stroke(None)),
            });
            if !label.is_empty() {
                cmds.push(centered_label(bounds, label));
            }
        }
    }
}

/// Four-point closed path through the midpoints of each bounding-box edge.
fn diamond_points(bounds: Rect) -> Vec<Point> {
    let center = bounds.center();
    vec![
        Point::new(center.x, bounds.y),
        Point::new(bounds.x + bounds.width, center.y),
        Point::new(center.x, bounds.y + bounds.height),
        Point::new(bounds.x, center.y),
    ]
}

fn centered_label(bounds: Rect, label: &str) -> DrawCmd {
    DrawCmd::Text {
        at: bounds.center(),
        content: label.to_owned(),
        size: LABEL_FONT_SIZE,
        color: TEXT_COLOR.to_owned(),
        anchor: Anchor::Middle,
        bold: false,
    }
}

// =============================================================
// Tables
// =============================================================

fn draw_table(
    cmds: &mut Vec<DrawCmd>,
    entity: &Entity,
    name: &str,
    width: f64,
    attributes: &[crate::doc::Attribute],
    stroke: Stroke,
) {
    let bounds = entity.bounds();

    // Body band (under the rows so row tints sit on white).
    cmds.push(DrawCmd::Rect {
        rect: bounds,
        fill: Some("#FFFFFF".to_owned()),
        stroke: None,
    });

    // Header band with bold centered title.
    let header = Rect::new(entity.x, entity.y, width, TABLE_HEADER_HEIGHT);
    cmds.push(DrawCmd::Rect {
        rect: header,
        fill: Some(TABLE_HEADER_FILL.to_owned()),
        stroke: None,
    });
    cmds.push(DrawCmd::Text {
        at: header.center(),
        content: name.to_owned(),
        size: LABEL_FONT_SIZE,
        color: "#FFFFFF".to_owned(),
        anchor: Anchor::Middle,
        bold: true,
    });

    for (i, attribute) in attributes.iter().enumerate() {
        let row_top = entity.y + TABLE_HEADER_HEIGHT + TABLE_ROW_HEIGHT * i as f64;
        if i % 2 == 1 {
            cmds.push(DrawCmd::Rect {
                rect: Rect::new(entity.x, row_top, width, TABLE_ROW_HEIGHT),
                fill: Some(TABLE_ROW_TINT.to_owned()),
                stroke: None,
            });
        }

        let mid = row_top + TABLE_ROW_HEIGHT / 2.0;
        let mut name_x = entity.x + 6.0;
        if attribute.primary_key || attribute.foreign_key {
            let (glyph, color) = if attribute.primary_key {
                ("PK", "#D97706")
            } else {
                ("FK", "#6B7280")
            };
            cmds.push(DrawCmd::Text {
                at: Point::new(name_x, mid),
                content: glyph.to_owned(),
                size: DETAIL_FONT_SIZE - 2.0,
                color: color.to_owned(),
                anchor: Anchor::Start,
                bold: true,
            });
            name_x += 18.0;
        }
        cmds.push(DrawCmd::Text {
            at: Point::new(name_x, mid),
            content: attribute.name.clone(),
            size: DETAIL_FONT_SIZE,
            color: TEXT_COLOR.to_owned(),
            anchor: Anchor::Start,
            bold: attribute.primary_key,
        });
        cmds.push(DrawCmd::Text {
            at: Point::new(entity.x + width - 6.0, mid),
            content: attribute.data_type.clone(),
            size: DETAIL_FONT_SIZE,
            color: "#6B7280".to_owned(),
            anchor: Anchor::End,
            bold: false,
        });
    }

    // Outline on top of bands and rows.
    cmds.push(DrawCmd::Rect { rect: bounds, fill: None, stroke: Some(stroke) });
}
