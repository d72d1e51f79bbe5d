pub(crate) mod glyph;
pub(crate) mod polygon;
pub(crate) mod rect;

pub use glyph::{GlyphCmd, GlyphKey, GlyphKind};
pub use polygon::PolygonCmd;
pub use rect::RectCmd;
