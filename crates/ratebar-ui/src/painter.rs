use ratebar_engine::coords::{Rect, Vec2};
use ratebar_engine::paint::{BlendMode, Color, Paint};
use ratebar_engine::scene::shapes::{GlyphKey, GlyphKind};
use ratebar_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API.
///
/// Every call records one command with the next z value, so commands keep the
/// order they were issued in.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, scale: f32) -> Self {
        Self { draw_list, scale, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Rectangle with an arbitrary paint and blend mode.
    ///
    /// `BlendMode::SrcIn` only makes sense inside a layer; see [`push_layer`](Self::push_layer).
    pub fn fill_rect_with(&mut self, rect: Rect, paint: impl Into<Paint>, blend: BlendMode) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into(), blend);
    }

    /// Filled closed polygon.
    pub fn fill_polygon(&mut self, points: Vec<Vec2>, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_polygon(z, points, paint.into());
    }

    /// Host-resolved glyph asset scaled into `rect`, optionally tinted.
    pub fn glyph(&mut self, key: GlyphKey, kind: GlyphKind, rect: Rect, tint: Option<Color>) {
        let z = self.next_z();
        self.draw_list.push_glyph(z, key, kind, rect, tint);
    }

    // ── layers ────────────────────────────────────────────────────────────

    /// Opens an isolated compositing layer. Must be paired with [`pop_layer`](Self::pop_layer).
    pub fn push_layer(&mut self) {
        let z = self.next_z();
        self.draw_list.push_layer(z);
    }

    /// Composites the most recent layer onto what lies beneath it.
    pub fn pop_layer(&mut self) {
        let z = self.next_z();
        self.draw_list.pop_layer(z);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
