use ratebar_engine::coords::Vec2;
use ratebar_engine::time::FrameTime;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Per-frame context made available to [`Widget::measure`],
/// [`Widget::on_event`] and [`Widget::on_frame`].
///
/// [`Widget::measure`]: crate::widget::Widget::measure
/// [`Widget::on_event`]: crate::widget::Widget::on_event
/// [`Widget::on_frame`]: crate::widget::Widget::on_frame
#[derive(Debug, Clone, Copy)]
pub struct LayoutCtx {
    /// Physical-to-logical pixel ratio.
    pub scale: f32,
    /// Timing of the frame being built. Widgets that animate key off `frame.now`.
    pub frame: FrameTime,
}

impl LayoutCtx {
    #[inline]
    pub fn new(frame: FrameTime) -> Self {
        Self { scale: 1.0, frame }
    }
}
