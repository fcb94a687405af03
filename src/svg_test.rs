use super::*;
use crate::geom::{Point, Rect};

fn list_of(cmds: Vec<DrawCmd>) -> DisplayList {
    DisplayList { width: 400.0, height: 500.0, cmds }
}

// =============================================================
// Document shell
// =============================================================

#[test]
fn document_declares_canvas_dimensions() {
    let svg = document(&list_of(vec![]));
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("width=\"400\""));
    assert!(svg.contains("height=\"500\""));
    assert!(svg.contains("viewBox=\"0 0 400 500\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

// =============================================================
// Elements
// =============================================================

#[test]
fn rect_emits_position_and_paint() {
    let svg = document(&list_of(vec![DrawCmd::Rect {
        rect: Rect::new(10.0, 20.0, 100.0, 80.0),
        fill: Some("#FFFFFF".to_owned()),
        stroke: Some(Stroke::new("#374151", 1.5)),
    }]));
    assert!(svg.contains("<rect x=\"10.0\" y=\"20.0\" width=\"100.0\" height=\"80.0\""));
    assert!(svg.contains("fill=\"#FFFFFF\""));
    assert!(svg.contains("stroke=\"#374151\" stroke-width=\"1.5\""));
}

#[test]
fn missing_fill_is_explicit_none() {
    let svg = document(&list_of(vec![DrawCmd::Rect {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        fill: None,
        stroke: Some(Stroke::new("#1E90FF", 3.0)),
    }]));
    assert!(svg.contains("fill=\"none\""));
}

#[test]
fn circle_emits_center_and_radius() {
    let svg = document(&list_of(vec![DrawCmd::Circle {
        center: Point::new(100.0, 100.0),
        radius: 40.0,
        fill: None,
        stroke: None,
    }]));
    assert!(svg.contains("<circle cx=\"100.0\" cy=\"100.0\" r=\"40.0\""));
}

#[test]
fn polygon_joins_points_with_spaces() {
    let svg = document(&list_of(vec![DrawCmd::Polygon {
        points: vec![Point::new(50.0, 0.0), Point::new(100.0, 40.0), Point::new(50.0, 80.0)],
        fill: None,
        stroke: None,
    }]));
    assert!(svg.contains("points=\"50.0,0.0 100.0,40.0 50.0,80.0\""));
}

#[test]
fn line_emits_both_endpoints() {
    let svg = document(&list_of(vec![DrawCmd::Line {
        from: Point::new(1.0, 2.0),
        to: Point::new(3.0, 4.0),
        stroke: Stroke::new("#374151", 1.5),
    }]));
    assert!(svg.contains("x1=\"1.0\" y1=\"2.0\" x2=\"3.0\" y2=\"4.0\""));
    assert!(svg.contains("fill=\"none\""));
}

#[test]
fn text_carries_anchor_and_weight() {
    let svg = document(&list_of(vec![DrawCmd::Text {
        at: Point::new(75.0, 15.0),
        content: "Users".to_owned(),
        size: 12.0,
        color: "#FFFFFF".to_owned(),
        anchor: Anchor::Middle,
        bold: true,
    }]));
    assert!(svg.contains("text-anchor=\"middle\""));
    assert!(svg.contains("font-weight=\"bold\""));
    assert!(svg.contains(">Users</text>"));
}

#[test]
fn text_content_is_escaped() {
    let svg = document(&list_of(vec![DrawCmd::Text {
        at: Point::new(0.0, 0.0),
        content: "a < b & \"c\"".to_owned(),
        size: 12.0,
        color: "#000".to_owned(),
        anchor: Anchor::Start,
        bold: false,
    }]));
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
    assert!(!svg.contains("a < b"));
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn same_list_serializes_identically() {
    let list = list_of(vec![
        DrawCmd::Rect {
            rect: Rect::new(0.0, 0.0, 400.0, 500.0),
            fill: Some("#FFFFFF".to_owned()),
            stroke: None,
        },
        DrawCmd::Circle {
            center: Point::new(100.0, 100.0),
            radius: 40.0,
            fill: Some("rgba(59, 130, 246, 0.15)".to_owned()),
            stroke: Some(Stroke::new("#374151", 1.5)),
        },
    ]);
    assert_eq!(document(&list), document(&list));
}
