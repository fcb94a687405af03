//! Shared numeric constants and default colors for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Logical canvas width in pixels. Entity coordinates live in this space.
pub const CANVAS_WIDTH: f64 = 400.0;

/// Logical canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 500.0;

// ── Creation defaults ───────────────────────────────────────────

/// Default footprint of a new rectangle, centered on the creation point.
pub const RECT_DEFAULT_WIDTH: f64 = 100.0;
pub const RECT_DEFAULT_HEIGHT: f64 = 80.0;

/// Default diameter of a new circle.
pub const CIRCLE_DEFAULT_DIAMETER: f64 = 80.0;

/// Default footprint of a new diamond.
pub const DIAMOND_DEFAULT_WIDTH: f64 = 100.0;
pub const DIAMOND_DEFAULT_HEIGHT: f64 = 80.0;

/// Default footprint of a new text shape.
pub const TEXT_DEFAULT_WIDTH: f64 = 100.0;
pub const TEXT_DEFAULT_HEIGHT: f64 = 30.0;

/// Horizontal run of a new line, from the creation point rightwards.
pub const LINE_DEFAULT_RUN: f64 = 80.0;

/// Default width of a new table.
pub const TABLE_DEFAULT_WIDTH: f64 = 150.0;

/// Default footprint of a new layered component.
pub const COMPONENT_DEFAULT_WIDTH: f64 = 140.0;
pub const COMPONENT_DEFAULT_HEIGHT: f64 = 50.0;

// ── Table geometry ──────────────────────────────────────────────

/// Height of a table's header band.
pub const TABLE_HEADER_HEIGHT: f64 = 30.0;

/// Height of one attribute row. Table height is always derived as
/// `TABLE_HEADER_HEIGHT + rows * TABLE_ROW_HEIGHT`, never stored.
pub const TABLE_ROW_HEIGHT: f64 = 24.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-thickness of the synthetic hit box around a line segment.
pub const LINE_HIT_SLOP: f64 = 4.0;

// ── Rendering ───────────────────────────────────────────────────

/// Stroke color applied to the selected entity.
pub const SELECTION_STROKE: &str = "#1E90FF";

/// Stroke width applied to the selected entity.
pub const SELECTION_STROKE_WIDTH: f64 = 3.0;

/// Stroke width for unselected entities.
pub const ENTITY_STROKE_WIDTH: f64 = 1.5;

/// Default stroke color when an entity carries none.
pub const DEFAULT_STROKE: &str = "#374151";

/// Default translucent fill for plain shapes.
pub const DEFAULT_FILL: &str = "rgba(59, 130, 246, 0.15)";

/// Table header band fill.
pub const TABLE_HEADER_FILL: &str = "#3B82F6";

/// Tint applied to every other attribute row.
pub const TABLE_ROW_TINT: &str = "#F3F4F6";

/// Alternating background stripes for architecture layer bands.
pub const LAYER_BAND_TINTS: [&str; 2] = ["#F9FAFB", "#EFF1F4"];

/// Label font size for shapes and components.
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Font size for table attribute rows and cardinality labels.
pub const DETAIL_FONT_SIZE: f64 = 11.0;

/// Default label/text color.
pub const TEXT_COLOR: &str = "#1F2937";
