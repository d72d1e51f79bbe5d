use crate::scene::shapes::glyph::GlyphCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Polygon(PolygonCmd),
    Glyph(GlyphCmd),
    /// Start an offscreen layer. Commands up to the matching `PopLayer` are
    /// composited into it, and blend modes other than `SrcOver` only affect
    /// pixels inside that layer.
    PushLayer,
    /// Composite the most recent layer onto its parent with `SrcOver`.
    PopLayer,
}

