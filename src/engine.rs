//! Top-level engine: pointer events in, document mutations and actions out.
//!
//! `Engine` owns the document store, the UI state (tool + selection), and
//! the pointer gesture machine, parameterized by a [`CanvasMode`] that
//! supplies everything the three original tools differed on: which kinds
//! exist, whether a creation tool stays armed after placing, whether the
//! background draws layer bands, the export filename, and the preset
//! catalog.
//!
//! Every handler returns the [`Action`]s the host should process; a
//! [`Action::RenderNeeded`] means the host redraws synchronously via
//! [`Engine::scene`]. All handling is single-threaded and non-blocking.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::doc::{CreateKind, DocStore, Entity, EntityId};
use crate::export::{self, ExportError};
use crate::geom::Point;
use crate::hit;
use crate::input::{Gesture, PlacementPolicy, Tool, UiState};
use crate::render::{self, DisplayList};
use crate::template::{self, Template};

/// Which of the three canvas tools this engine instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    /// Generic shape diagrammer.
    Shapes,
    /// Entity-relationship designer.
    Erd,
    /// Layered enterprise-architecture modeler.
    Architecture,
}

impl CanvasMode {
    /// What happens to a creation tool after a placement. The architecture
    /// modeler keeps placing components of the chosen layer until the user
    /// switches tools; the other two snap back to selection.
    #[must_use]
    pub fn placement_policy(self) -> PlacementPolicy {
        match self {
            Self::Shapes | Self::Erd => PlacementPolicy::RevertToSelect,
            Self::Architecture => PlacementPolicy::Sticky,
        }
    }

    /// Whether the background draws the four alternating layer bands.
    #[must_use]
    pub fn has_layer_bands(self) -> bool {
        self == Self::Architecture
    }

    /// Fixed download filename for PNG export.
    #[must_use]
    pub fn export_filename(self) -> &'static str {
        match self {
            Self::Shapes => "diagram.png",
            Self::Erd => "erd-diagram.png",
            Self::Architecture => "architecture-diagram.png",
        }
    }

    /// The bundled preset catalog for this mode.
    #[must_use]
    pub fn templates(self) -> Vec<Template> {
        template::catalog(self)
    }
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new entity was placed.
    EntityCreated(EntityId),
    /// An entity moved to a new absolute position.
    EntityMoved { id: EntityId, x: f64, y: f64 },
    /// An entity (and any relationships referencing it) was removed.
    EntityDeleted { id: EntityId },
    /// The selection changed.
    SelectionChanged(Option<EntityId>),
    /// A preset replaced the whole document.
    TemplateLoaded,
    /// The host should redraw the surface.
    RenderNeeded,
}

/// The canvas engine for one tool instance.
pub struct Engine {
    pub doc: DocStore,
    pub ui: UiState,
    gesture: Gesture,
    mode: CanvasMode,
}

impl Engine {
    #[must_use]
    pub fn new(mode: CanvasMode) -> Self {
        Self { doc: DocStore::new(), ui: UiState::default(), gesture: Gesture::Idle, mode }
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    /// The currently selected entity, if any.
    #[must_use]
    pub fn selection(&self) -> Option<EntityId> {
        self.ui.selected
    }

    /// The active pointer gesture.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.doc.get(id)
    }

    // --- Tool ---

    /// Set the active tool. Does not disturb the current selection.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    // --- Pointer events ---

    /// Pointer-down at a canvas-local point.
    pub fn on_pointer_down(&mut self, at: Point) -> Vec<Action> {
        match self.ui.tool {
            Tool::Create(kind) => self.place(kind, at),
            Tool::Select => self.press(at),
        }
    }

    fn place(&mut self, kind: CreateKind, at: Point) -> Vec<Action> {
        let id = self.doc.create(kind, at);
        tracing::debug!(id, ?kind, "entity placed");
        let mut actions = vec![Action::EntityCreated(id)];
        if self.ui.selected != Some(id) {
            self.ui.selected = Some(id);
            actions.push(Action::SelectionChanged(Some(id)));
        }
        if self.mode.placement_policy() == PlacementPolicy::RevertToSelect {
            self.ui.tool = Tool::Select;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn press(&mut self, at: Point) -> Vec<Action> {
        match hit::hit_test(at, &self.doc) {
            Some(id) => {
                // Entities never vanish between the hit test and here.
                let entity = self.doc.get(id).map(|e| Point::new(e.x, e.y));
                let Some(anchor) = entity else {
                    return Vec::new();
                };
                self.gesture = Gesture::Pressed { id, grab: at - anchor };
                if self.ui.selected == Some(id) {
                    vec![Action::RenderNeeded]
                } else {
                    self.ui.selected = Some(id);
                    vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]
                }
            }
            None => {
                self.gesture = Gesture::Idle;
                if self.ui.selected.is_some() {
                    self.ui.selected = None;
                    vec![Action::SelectionChanged(None), Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Pointer-move with the button still down. Promotes a press to a drag
    /// and keeps the dragged entity pinned under the pointer.
    pub fn on_pointer_move(&mut self, at: Point) -> Vec<Action> {
        let (id, grab) = match self.gesture {
            Gesture::Pressed { id, grab } | Gesture::Dragging { id, grab } => (id, grab),
            Gesture::Idle => return Vec::new(),
        };
        self.gesture = Gesture::Dragging { id, grab };

        let target = at - grab;
        if !self.doc.move_to(id, target.x, target.y) {
            return Vec::new();
        }
        vec![Action::EntityMoved { id, x: target.x, y: target.y }, Action::RenderNeeded]
    }

    /// Pointer-up: the gesture ends, the entity stays where it was dragged,
    /// and the selection is retained.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// The pointer left the surface mid-gesture; same outcome as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        let was_dragging = matches!(self.gesture, Gesture::Dragging { .. });
        self.gesture = Gesture::Idle;
        if was_dragging {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Explicit actions ---

    /// Delete the selected entity, cascading its relationships. With no
    /// selection this is a no-op.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected else {
            return Vec::new();
        };
        self.ui.selected = None;
        self.gesture = Gesture::Idle;
        if !self.doc.delete(id) {
            return Vec::new();
        }
        vec![
            Action::EntityDeleted { id },
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ]
    }

    /// Atomically replace the document with a preset. Selection and any
    /// in-flight gesture are cleared; presets never merge.
    pub fn load_template(&mut self, template: &Template) -> Vec<Action> {
        tracing::debug!(
            name = template.name.as_str(),
            entities = template.entities.len(),
            "loading template",
        );
        self.doc.replace_all(template.entities.clone(), template.relationships.clone());
        self.gesture = Gesture::Idle;
        let mut actions = Vec::new();
        if self.ui.selected.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::TemplateLoaded);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Rendering and export ---

    /// The current frame's draw commands.
    #[must_use]
    pub fn scene(&self) -> DisplayList {
        render::draw(&self.doc, &self.ui, self.mode)
    }

    /// Export the current scene as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] when rasterization fails; hosts treat
    /// export as best-effort and may simply drop the error.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::to_png(&self.scene())
    }

    /// Download filename for this mode's PNG export.
    #[must_use]
    pub fn export_filename(&self) -> &'static str {
        self.mode.export_filename()
    }
}
