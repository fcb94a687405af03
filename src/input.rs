//! Input model: tools, placement policy, and the pointer gesture machine.
//!
//! `Tool` captures the user's intent at pointer-down time: select, or place
//! an entity of a given kind. `Gesture` is the active pointer interaction
//! being tracked between pointer-down and pointer-up, carrying the grab
//! offset needed to keep a dragged entity pinned under the pointer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{CreateKind, EntityId};
use crate::geom::Vec2;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place an entity of the given kind on pointer-down.
    Create(CreateKind),
}

/// What happens to the active creation tool after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPolicy {
    /// One placement per tool pick; the tool snaps back to `Select`.
    RevertToSelect,
    /// The tool stays armed and keeps placing until switched explicitly.
    Sticky,
}

/// The active pointer gesture.
///
/// `Pressed` is the window between pointer-down on an entity and the first
/// pointer-move; it promotes to `Dragging` as soon as the pointer moves with
/// the button still down. `grab` is the offset from the entity's anchor to
/// the pointer at press time, so dragging sets the absolute position to
/// `pointer - grab` without the entity jumping under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// Button down on an entity, not yet moved.
    Pressed { id: EntityId, grab: Vec2 },
    /// Entity following the pointer.
    Dragging { id: EntityId, grab: Vec2 },
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the selected entity, if any. At most one entity is
    /// selected at a time.
    pub selected: Option<EntityId>,
}
