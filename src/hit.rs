//! Hit-testing: resolving which entity lies under a pointer coordinate.
//!
//! Input points are already in canvas-local space (the host subtracts the
//! surface's on-page offset before calling in). Containment is a
//! bounding-box test for every kind except circles, which use Euclidean
//! distance to the center, and lines, which get a thin synthetic box around
//! the segment's bounds so they remain clickable.
//!
//! Tie-break: the last-created entity wins. `hit_test` walks creation order
//! in reverse, so picking agrees with draw order (later entities render on
//! top) and a freshly placed entity is always the one found under the
//! creation point.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::LINE_HIT_SLOP;
use crate::doc::{DocStore, Entity, EntityBody, EntityId, ShapeKind};
use crate::geom::Point;

/// The topmost entity under `p`, or `None` over empty canvas.
#[must_use]
pub fn hit_test(p: Point, doc: &DocStore) -> Option<EntityId> {
    doc.ordered().iter().rev().find(|e| contains(e, p)).map(|e| e.id)
}

/// Per-kind containment test.
#[must_use]
pub fn contains(entity: &Entity, p: Point) -> bool {
    match &entity.body {
        EntityBody::Shape { shape: ShapeKind::Circle, width, .. } => {
            let center = entity.bounds().center();
            let radius = width / 2.0;
            let (dx, dy) = (p.x - center.x, p.y - center.y);
            dx * dx + dy * dy <= radius * radius
        }
        EntityBody::Line { .. } => entity.bounds().inflate(LINE_HIT_SLOP).contains(p),
        _ => entity.bounds().contains(p),
    }
}
