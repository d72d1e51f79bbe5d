use crate::coords::Rect;
use crate::paint::{BlendMode, Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
    pub blend: BlendMode,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint, blend: BlendMode) -> Self {
        Self { rect, paint, blend }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint, blend: BlendMode) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint, blend)));
    }

    /// Records a solid, normally blended rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Paint::Solid(color), BlendMode::SrcOver);
    }
}
