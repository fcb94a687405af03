//! Raster export: renders a display list to PNG bytes.
//!
//! The pipeline is display list → SVG → `usvg` tree → `tiny_skia` pixmap →
//! PNG encoding. Export is read-only with respect to the document, and the
//! whole pipeline is deterministic, so consecutive exports of an unchanged
//! scene produce byte-identical output. Hosts treat export as best-effort:
//! an [`ExportError`] is surfaced, never a panic.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use resvg::usvg;
use thiserror::Error;
use tiny_skia::{Pixmap, Transform};

use crate::render::DisplayList;
use crate::svg;

/// Why a PNG export failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The generated SVG did not parse back; indicates a renderer bug.
    #[error("failed to parse rendered SVG: {0}")]
    Svg(String),
    /// The raster surface could not be allocated.
    #[error("failed to allocate {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Rasterize a display list to PNG bytes at 1:1 scale.
///
/// # Errors
///
/// Returns an [`ExportError`] if the surface cannot be allocated or the
/// intermediate SVG fails to parse or encode.
pub fn to_png(list: &DisplayList) -> Result<Vec<u8>, ExportError> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (list.width.ceil() as u32, list.height.ceil() as u32);

    let document = svg::document(list);
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&document, &options)
        .map_err(|e| ExportError::Svg(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let bytes = pixmap.encode_png().map_err(|e| ExportError::Encode(e.to_string()))?;
    tracing::debug!(width, height, bytes = bytes.len(), "exported canvas to PNG");
    Ok(bytes)
}
