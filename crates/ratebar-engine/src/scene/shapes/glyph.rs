use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Host-assigned handle of a decoded glyph asset.
///
/// The engine never owns image or vector data; renderers resolve the key
/// against whatever asset store the host keeps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GlyphKey(pub u64);

/// Which asset family a [`GlyphKey`] belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GlyphKind {
    /// Raster image, scaled to the destination rect.
    Bitmap,
    /// Vector document, rasterized at the destination size.
    Vector,
}

/// Glyph draw payload.
///
/// `tint`, when present, replaces the glyph's color while keeping its
/// coverage (a `SrcIn` color filter).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCmd {
    pub key: GlyphKey,
    pub kind: GlyphKind,
    pub rect: Rect,
    pub tint: Option<Color>,
}

impl DrawList {
    /// Records a glyph scaled into `rect`.
    #[inline]
    pub fn push_glyph(
        &mut self,
        z: ZIndex,
        key: GlyphKey,
        kind: GlyphKind,
        rect: Rect,
        tint: Option<Color>,
    ) {
        self.push(z, DrawCmd::Glyph(GlyphCmd { key, kind, rect, tint }));
    }
}

