//! Diagram canvas engine for the lab-management tools.
//!
//! One parameterized engine backs the three canvas tools that previously
//! carried near-identical implementations: the generic shape diagrammer,
//! the entity-relationship designer, and the layered enterprise-architecture
//! modeler. The host page owns canvas placement and navigation; it wires
//! pointer events into [`engine::Engine`], processes the returned
//! [`engine::Action`]s, and redraws via [`engine::Engine::scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine: gesture machine and mode policy |
//! | [`doc`] | In-memory document store and entity types |
//! | [`geom`] | Point/rect primitives in canvas space |
//! | [`input`] | Tools, placement policy, and gesture state |
//! | [`hit`] | Hit-testing against entities |
//! | [`render`] | Snapshot → display-list renderer |
//! | [`svg`] | Display list → SVG serialization |
//! | [`export`] | SVG → PNG rasterization |
//! | [`template`] | Bundled preset catalog per mode |
//! | [`consts`] | Shared numeric constants and colors |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod svg;
pub mod template;
