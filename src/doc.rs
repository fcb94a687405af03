//! Document model: canvas entities, relationships, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! canvas (`Entity`, `EntityBody`), the typed links between tables
//! (`Relationship`), and the runtime store that owns all live state
//! (`DocStore`).
//!
//! Mutations flow into this layer from the interaction engine and from
//! template loading. The renderer reads from `DocStore` via `ordered` to
//! determine draw order. Ids come from a monotonically increasing counter
//! and are never reused within a session, so creation order is recoverable
//! by sorting on id.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CIRCLE_DEFAULT_DIAMETER, COMPONENT_DEFAULT_HEIGHT, COMPONENT_DEFAULT_WIDTH,
    DIAMOND_DEFAULT_HEIGHT, DIAMOND_DEFAULT_WIDTH, LINE_DEFAULT_RUN, RECT_DEFAULT_HEIGHT,
    RECT_DEFAULT_WIDTH, TABLE_DEFAULT_WIDTH, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
    TEXT_DEFAULT_HEIGHT, TEXT_DEFAULT_WIDTH,
};
use crate::geom::{Point, Rect};

/// Unique identifier for a canvas entity.
pub type EntityId = u64;

/// Unique identifier for a relationship. Drawn from the same counter as
/// entity ids, so the two never collide.
pub type RelationshipId = u64;

/// Plain shape kinds sharing a common bounding-box body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Diamond,
    Text,
}

/// Enterprise-architecture layer a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Business,
    Application,
    Data,
    Technology,
}

impl Layer {
    /// All layers, top band first.
    pub const ALL: [Self; 4] = [Self::Business, Self::Application, Self::Data, Self::Technology];

    /// Human-readable band label.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Application => "Application",
            Self::Data => "Data",
            Self::Technology => "Technology",
        }
    }

    /// Default component fill for this layer, used when no override is set.
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Business => "#FDE68A",
            Self::Application => "#BFDBFE",
            Self::Data => "#BBF7D0",
            Self::Technology => "#E5E7EB",
        }
    }
}

/// One column of a table entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Column name.
    pub name: String,
    /// Display label for the column's data type (e.g. `"VARCHAR"`).
    pub data_type: String,
    /// Whether this column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether this column references another table.
    #[serde(default)]
    pub foreign_key: bool,
}

impl Attribute {
    #[must_use]
    pub fn new(name: &str, data_type: &str) -> Self {
        Self {
            name: name.to_owned(),
            data_type: data_type.to_owned(),
            primary_key: false,
            foreign_key: false,
        }
    }

    #[must_use]
    pub fn primary(name: &str, data_type: &str) -> Self {
        Self { primary_key: true, ..Self::new(name, data_type) }
    }

    #[must_use]
    pub fn foreign(name: &str, data_type: &str) -> Self {
        Self { foreign_key: true, ..Self::new(name, data_type) }
    }
}

/// Kind-specific payload of an entity.
///
/// Lines store their second endpoint absolutely in `end_x`/`end_y`; a move
/// translates both endpoints together, so a dragged line keeps its length
/// and angle. Tables never store a height: it is derived from the attribute
/// count at draw and hit-test time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityBody {
    /// A plain bounding-box shape.
    Shape {
        shape: ShapeKind,
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
    },
    /// A straight segment from the entity's `x,y` to `end_x,end_y`.
    Line {
        end_x: f64,
        end_y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
    },
    /// An ERD table with an ordered column list.
    Table {
        name: String,
        width: f64,
        attributes: Vec<Attribute>,
    },
    /// A layered architecture component.
    Component {
        layer: Layer,
        width: f64,
        height: f64,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

/// A positioned visual object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// Left edge of the bounding box (start point for lines).
    pub x: f64,
    /// Top edge of the bounding box (start point for lines).
    pub y: f64,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub body: EntityBody,
}

impl Entity {
    /// The entity's bounding box. Table height is derived from the
    /// attribute count; a line's box is the tight bounds of its endpoints.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match &self.body {
            EntityBody::Shape { width, height, .. }
            | EntityBody::Component { width, height, .. } => {
                Rect::new(self.x, self.y, *width, *height)
            }
            EntityBody::Line { end_x, end_y, .. } => {
                Rect::from_points(Point::new(self.x, self.y), Point::new(*end_x, *end_y))
            }
            EntityBody::Table { width, attributes, .. } => {
                Rect::new(self.x, self.y, *width, table_height(attributes.len()))
            }
        }
    }
}

/// Derived table height: header band plus one row per attribute.
#[must_use]
pub fn table_height(rows: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let rows = rows as f64;
    TABLE_HEADER_HEIGHT + rows * TABLE_ROW_HEIGHT
}

/// What a creation tool places on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateKind {
    Rectangle,
    Circle,
    Diamond,
    Text,
    Line,
    Table,
    Component(Layer),
}

/// Relationship cardinality between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    #[serde(rename = "1:1")]
    OneToOne,
    #[serde(rename = "1:N")]
    OneToMany,
    #[serde(rename = "N:M")]
    ManyToMany,
}

impl Cardinality {
    /// Label drawn at the relationship line's midpoint.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneToOne => "1:1",
            Self::OneToMany => "1:N",
            Self::ManyToMany => "N:M",
        }
    }
}

/// A directed, typed link between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier for this relationship.
    pub id: RelationshipId,
    /// Source entity id.
    pub from: EntityId,
    /// Target entity id.
    pub to: EntityId,
    /// Cardinality of the link.
    pub cardinality: Cardinality,
}

/// In-memory store of entities and relationships.
///
/// Deleting an entity cascades deletion of every relationship referencing
/// it in the same mutation; no operation leaves a relationship pointing at
/// a missing entity.
pub struct DocStore {
    entities: HashMap<EntityId, Entity>,
    relationships: Vec<Relationship>,
    next_id: u64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { entities: HashMap::new(), relationships: Vec::new(), next_id: 1 }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create an entity with kind-specific defaults centered on `at`,
    /// returning its fresh id.
    pub fn create(&mut self, kind: CreateKind, at: Point) -> EntityId {
        let id = self.alloc_id();
        let (x, y, body) = spawn_body(kind, at);
        self.entities.insert(id, Entity { id, x, y, body });
        id
    }

    /// Insert a fully-formed entity, e.g. while assembling a preset. The id
    /// counter is bumped past the entity's id so it is never handed out again.
    pub fn insert(&mut self, entity: Entity) {
        self.next_id = self.next_id.max(entity.id + 1);
        self.entities.insert(entity.id, entity);
    }

    /// Return a reference to an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Translate an entity by a delta. Only position fields change; for a
    /// line both endpoints move together. Unknown ids are a no-op.
    pub fn translate(&mut self, id: EntityId, dx: f64, dy: f64) -> bool {
        let Some(entity) = self.entities.get_mut(&id) else {
            return false;
        };
        entity.x += dx;
        entity.y += dy;
        if let EntityBody::Line { end_x, end_y, .. } = &mut entity.body {
            *end_x += dx;
            *end_y += dy;
        }
        true
    }

    /// Place an entity's anchor at an absolute position. Unknown ids are a
    /// no-op.
    pub fn move_to(&mut self, id: EntityId, x: f64, y: f64) -> bool {
        let Some(entity) = self.entities.get(&id) else {
            return false;
        };
        let (dx, dy) = (x - entity.x, y - entity.y);
        self.translate(id, dx, dy)
    }

    /// Remove an entity and every relationship referencing it. Unknown ids
    /// are a no-op.
    pub fn delete(&mut self, id: EntityId) -> bool {
        if self.entities.remove(&id).is_none() {
            return false;
        }
        let before = self.relationships.len();
        self.relationships.retain(|r| r.from != id && r.to != id);
        let cascaded = before - self.relationships.len();
        if cascaded > 0 {
            tracing::debug!(id, cascaded, "entity deleted with cascading relationships");
        }
        true
    }

    /// Atomic full replacement of all entities and relationships, used by
    /// template loading. The id counter advances past every installed id so
    /// ids stay session-unique. Presets are trusted bundled data; endpoint
    /// integrity is only asserted in development builds.
    pub fn replace_all(&mut self, entities: Vec<Entity>, relationships: Vec<Relationship>) {
        debug_assert!(
            relationships.iter().all(|r| {
                entities.iter().any(|e| e.id == r.from) && entities.iter().any(|e| e.id == r.to)
            }),
            "preset relationship references a missing entity",
        );
        self.entities.clear();
        self.relationships.clear();
        for entity in entities {
            self.insert(entity);
        }
        for relationship in relationships {
            self.next_id = self.next_id.max(relationship.id + 1);
            self.relationships.push(relationship);
        }
    }

    /// Link two present entities. Returns `None` if either endpoint is
    /// missing.
    pub fn add_relationship(
        &mut self,
        from: EntityId,
        to: EntityId,
        cardinality: Cardinality,
    ) -> Option<RelationshipId> {
        if !self.entities.contains_key(&from) || !self.entities.contains_key(&to) {
            return None;
        }
        let id = self.alloc_id();
        self.relationships.push(Relationship { id, from, to, cardinality });
        Some(id)
    }

    /// All relationships in insertion order.
    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Install a relationship without endpoint checks, simulating the
    /// transient mid-frame state a renderer can observe.
    #[cfg(test)]
    pub(crate) fn inject_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// All entities in creation (id) order, for draw order and hit-testing.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Entity> {
        let mut entities: Vec<&Entity> = self.entities.values().collect();
        entities.sort_by_key(|e| e.id);
        entities
    }

    /// Number of entities currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind-specific creation defaults: the anchor position and body for a new
/// entity centered on the creation point.
fn spawn_body(kind: CreateKind, at: Point) -> (f64, f64, EntityBody) {
    let shape = |kind: ShapeKind, w: f64, h: f64, label: Option<&str>| EntityBody::Shape {
        shape: kind,
        width: w,
        height: h,
        label: label.map(str::to_owned),
        stroke: None,
        fill: None,
    };
    match kind {
        CreateKind::Rectangle => (
            at.x - RECT_DEFAULT_WIDTH / 2.0,
            at.y - RECT_DEFAULT_HEIGHT / 2.0,
            shape(ShapeKind::Rectangle, RECT_DEFAULT_WIDTH, RECT_DEFAULT_HEIGHT, None),
        ),
        CreateKind::Circle => (
            at.x - CIRCLE_DEFAULT_DIAMETER / 2.0,
            at.y - CIRCLE_DEFAULT_DIAMETER / 2.0,
            shape(ShapeKind::Circle, CIRCLE_DEFAULT_DIAMETER, CIRCLE_DEFAULT_DIAMETER, None),
        ),
        CreateKind::Diamond => (
            at.x - DIAMOND_DEFAULT_WIDTH / 2.0,
            at.y - DIAMOND_DEFAULT_HEIGHT / 2.0,
            shape(ShapeKind::Diamond, DIAMOND_DEFAULT_WIDTH, DIAMOND_DEFAULT_HEIGHT, None),
        ),
        CreateKind::Text => (
            at.x - TEXT_DEFAULT_WIDTH / 2.0,
            at.y - TEXT_DEFAULT_HEIGHT / 2.0,
            shape(ShapeKind::Text, TEXT_DEFAULT_WIDTH, TEXT_DEFAULT_HEIGHT, Some("Text")),
        ),
        CreateKind::Line => (
            at.x,
            at.y,
            EntityBody::Line { end_x: at.x + LINE_DEFAULT_RUN, end_y: at.y, stroke: None },
        ),
        CreateKind::Table => (
            at.x - TABLE_DEFAULT_WIDTH / 2.0,
            at.y - table_height(2) / 2.0,
            EntityBody::Table {
                name: "Table".to_owned(),
                width: TABLE_DEFAULT_WIDTH,
                attributes: vec![
                    Attribute::primary("id", "INT"),
                    Attribute::new("name", "VARCHAR"),
                ],
            },
        ),
        CreateKind::Component(layer) => (
            at.x - COMPONENT_DEFAULT_WIDTH / 2.0,
            at.y - COMPONENT_DEFAULT_HEIGHT / 2.0,
            EntityBody::Component {
                layer,
                width: COMPONENT_DEFAULT_WIDTH,
                height: COMPONENT_DEFAULT_HEIGHT,
                label: "Component".to_owned(),
                color: None,
            },
        ),
    }
}
