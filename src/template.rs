//! Template catalog: named presets that fully replace the canvas contents.
//!
//! Each [`CanvasMode`] carries a fixed catalog, always starting with a
//! blank preset. Presets are trusted bundled data built in code; they share
//! the serde schema of live entities, so a catalog entry serializes to the
//! same `{name, entities, relationships}` JSON the engine would emit.
//! Loading is an atomic replacement — see [`crate::doc::DocStore::replace_all`].

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use serde::{Deserialize, Serialize};

use crate::doc::{
    Attribute, Cardinality, Entity, EntityBody, Layer, Relationship, ShapeKind,
};
use crate::engine::CanvasMode;

/// A named, bundled preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub entities: Vec<Entity>,
    pub relationships: Vec<Relationship>,
}

/// The fixed catalog for a canvas mode.
#[must_use]
pub fn catalog(mode: CanvasMode) -> Vec<Template> {
    match mode {
        CanvasMode::Shapes => vec![blank(), flowchart()],
        CanvasMode::Erd => vec![blank(), ecommerce(), blog()],
        CanvasMode::Architecture => vec![blank(), three_tier()],
    }
}

fn blank() -> Template {
    Template { name: "Blank Canvas".to_owned(), entities: vec![], relationships: vec![] }
}

// =============================================================
// Builders
// =============================================================

fn shape(id: u64, kind: ShapeKind, x: f64, y: f64, w: f64, h: f64, label: &str) -> Entity {
    Entity {
        id,
        x,
        y,
        body: EntityBody::Shape {
            shape: kind,
            width: w,
            height: h,
            label: Some(label.to_owned()),
            stroke: None,
            fill: None,
        },
    }
}

fn line(id: u64, x: f64, y: f64, end_x: f64, end_y: f64) -> Entity {
    Entity { id, x, y, body: EntityBody::Line { end_x, end_y, stroke: None } }
}

fn table(id: u64, name: &str, x: f64, y: f64, attributes: Vec<Attribute>) -> Entity {
    Entity {
        id,
        x,
        y,
        body: EntityBody::Table { name: name.to_owned(), width: 150.0, attributes },
    }
}

fn component(id: u64, layer: Layer, x: f64, y: f64, label: &str) -> Entity {
    Entity {
        id,
        x,
        y,
        body: EntityBody::Component {
            layer,
            width: 140.0,
            height: 50.0,
            label: label.to_owned(),
            color: None,
        },
    }
}

fn relationship(id: u64, from: u64, to: u64, cardinality: Cardinality) -> Relationship {
    Relationship { id, from, to, cardinality }
}

// =============================================================
// Shapes presets
// =============================================================

fn flowchart() -> Template {
    Template {
        name: "Flowchart".to_owned(),
        entities: vec![
            shape(1, ShapeKind::Circle, 160.0, 20.0, 80.0, 80.0, "Start"),
            line(2, 200.0, 100.0, 200.0, 140.0),
            shape(3, ShapeKind::Rectangle, 150.0, 140.0, 100.0, 60.0, "Process"),
            line(4, 200.0, 200.0, 200.0, 240.0),
            shape(5, ShapeKind::Diamond, 140.0, 240.0, 120.0, 80.0, "Valid?"),
            line(6, 200.0, 320.0, 200.0, 360.0),
            shape(7, ShapeKind::Rectangle, 150.0, 360.0, 100.0, 60.0, "Done"),
            shape(8, ShapeKind::Text, 210.0, 325.0, 50.0, 20.0, "yes"),
        ],
        relationships: vec![],
    }
}

// =============================================================
// ERD presets
// =============================================================

fn ecommerce() -> Template {
    Template {
        name: "E-commerce".to_owned(),
        entities: vec![
            table(
                1,
                "Users",
                50.0,
                50.0,
                vec![
                    Attribute::primary("id", "INT"),
                    Attribute::new("name", "VARCHAR"),
                    Attribute::new("email", "VARCHAR"),
                ],
            ),
            table(
                2,
                "Orders",
                50.0,
                220.0,
                vec![
                    Attribute::primary("id", "INT"),
                    Attribute::foreign("user_id", "INT"),
                    Attribute::new("total", "DECIMAL"),
                ],
            ),
            table(
                3,
                "Products",
                220.0,
                360.0,
                vec![
                    Attribute::primary("id", "INT"),
                    Attribute::new("title", "VARCHAR"),
                    Attribute::new("price", "DECIMAL"),
                ],
            ),
        ],
        relationships: vec![
            relationship(4, 1, 2, Cardinality::OneToMany),
            relationship(5, 2, 3, Cardinality::ManyToMany),
        ],
    }
}

fn blog() -> Template {
    Template {
        name: "Blog".to_owned(),
        entities: vec![
            table(
                1,
                "Authors",
                50.0,
                50.0,
                vec![Attribute::primary("id", "INT"), Attribute::new("name", "VARCHAR")],
            ),
            table(
                2,
                "Posts",
                50.0,
                200.0,
                vec![
                    Attribute::primary("id", "INT"),
                    Attribute::foreign("author_id", "INT"),
                    Attribute::new("title", "VARCHAR"),
                    Attribute::new("body", "TEXT"),
                ],
            ),
            table(
                3,
                "Comments",
                220.0,
                360.0,
                vec![
                    Attribute::primary("id", "INT"),
                    Attribute::foreign("post_id", "INT"),
                    Attribute::new("body", "TEXT"),
                ],
            ),
        ],
        relationships: vec![
            relationship(4, 1, 2, Cardinality::OneToMany),
            relationship(5, 2, 3, Cardinality::OneToMany),
        ],
    }
}

// =============================================================
// Architecture presets
// =============================================================

fn three_tier() -> Template {
    Template {
        name: "Three-Tier Web App".to_owned(),
        entities: vec![
            component(1, Layer::Business, 30.0, 35.0, "Order Management"),
            component(2, Layer::Business, 220.0, 35.0, "Billing"),
            component(3, Layer::Application, 30.0, 160.0, "Web Frontend"),
            component(4, Layer::Application, 220.0, 160.0, "REST API"),
            component(5, Layer::Data, 120.0, 285.0, "Orders Database"),
            component(6, Layer::Technology, 30.0, 410.0, "Kubernetes"),
            component(7, Layer::Technology, 220.0, 410.0, "PostgreSQL"),
        ],
        relationships: vec![],
    }
}
