use std::cell::Cell;
use std::time::Instant;

use ratebar_engine::coords::{Rect, Vec2};
use ratebar_engine::paint::Color;
use ratebar_engine::time::FrameTime;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::glyph::GlyphPair;
use crate::painter::Painter;
use crate::rating::{
    resolve_layout, ItemLayout, RatingBarConfig, RatingError, RatingFrame, RatingMotionController,
    RatingPaint, ShimmerEffect, ShimmerState, TickStatus,
};
use crate::widget::Widget;

/// An interactive row of rating items with fractional fill.
///
/// Tap an item to commit a rating (animated when the config says so), or drag
/// across the row for immediate feedback. The bar is drawn at the top-left of
/// the rect it is given and measures `total_width × item_extent`.
///
/// # Example
/// ```rust,ignore
/// let config = RatingBarConfig::builder()
///     .item_count(5)
///     .interval(RatingInterval::Half)
///     .spacing(4.0)
///     .build()?;
/// RatingBar::new(config, GlyphPair::stars(), 3.5)?
///     .shimmer(ShimmerEffect::default())
///     .on_rating_change(|v| log::info!("rating: {v}"))
///     .on_rating_change_finished(|v| log::info!("committed: {v}"))
/// ```
pub struct RatingBar {
    controller: RatingMotionController,
    glyphs: GlyphPair,
    shimmer: Option<ShimmerState>,
    empty_tint: Option<Color>,
    filled_tint: Option<Color>,
    mounted_at: Instant,
    /// Time of the latest frame; shimmer phase is sampled at this instant.
    now: Instant,
    /// Resolved by `measure`, read by events and paint of the same frame.
    layout: Cell<ItemLayout>,
    on_draw: Option<Box<dyn Fn(&RatingFrame)>>,
}

impl RatingBar {
    /// Mounts a bar now at `quantize(rating)`.
    pub fn new(
        config: RatingBarConfig,
        glyphs: GlyphPair,
        rating: f32,
    ) -> Result<Self, RatingError> {
        Self::mounted_at(config, glyphs, rating, Instant::now())
    }

    /// Mounts a bar at an explicit instant. Hosts that drive a `FrameClock`
    /// pass its baseline so the intro animation and shimmer share its timeline.
    pub fn mounted_at(
        config: RatingBarConfig,
        glyphs: GlyphPair,
        rating: f32,
        now: Instant,
    ) -> Result<Self, RatingError> {
        let layout = ItemLayout::empty(config.item_count());
        let controller = RatingMotionController::new(config, rating, now)?;
        Ok(Self {
            controller,
            glyphs,
            shimmer: None,
            empty_tint: None,
            filled_tint: None,
            mounted_at: now,
            now,
            layout: Cell::new(layout),
            on_draw: None,
        })
    }

    pub fn shimmer(mut self, effect: ShimmerEffect) -> Self {
        self.shimmer = Some(ShimmerState::new(effect, self.mounted_at));
        self
    }
    pub fn empty_tint(mut self, c: Color) -> Self { self.empty_tint = Some(c); self }
    pub fn filled_tint(mut self, c: Color) -> Self { self.filled_tint = Some(c); self }
    pub fn on_rating_change(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.controller.on_rating_change(f);
        self
    }
    pub fn on_rating_change_finished(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.controller.on_rating_change_finished(f);
        self
    }
    /// Called from `paint` with the draw parameters of every frame.
    pub fn on_draw(mut self, f: impl Fn(&RatingFrame) + 'static) -> Self {
        self.on_draw = Some(Box::new(f));
        self
    }

    /// Host-driven rating change; animates per the configured strategy.
    pub fn set_rating(&mut self, rating: f32, now: Instant) {
        self.controller.set_input_rating(rating, now);
    }

    /// Value currently drawn.
    #[inline]
    pub fn rating(&self) -> f32 {
        self.controller.displayed()
    }

    /// Committed value the bar is moving toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.controller.target()
    }

    #[inline]
    pub fn controller(&self) -> &RatingMotionController {
        &self.controller
    }

    /// Layout resolved by the latest `measure`.
    #[inline]
    pub fn layout(&self) -> ItemLayout {
        self.layout.get()
    }

    /// Draw parameters for the current state.
    pub fn frame(&self) -> RatingFrame {
        let phase = self.shimmer.as_ref().map(|s| s.phase_at(self.now));
        let geometry = self.layout.get().fill(self.controller.displayed());
        RatingFrame { geometry, shimmer: phase }
    }

    fn bar_rect(&self, rect: Rect) -> Rect {
        Rect::from_origin_size(rect.origin, self.layout.get().size())
    }
}

impl Widget for RatingBar {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let config = self.controller.config();
        let layout = resolve_layout(
            config.item_extent(),
            self.glyphs.intrinsic_size(),
            constraints,
            config.item_count(),
            config.spacing(),
        );
        self.layout.set(layout);
        constraints.constrain(layout.size())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let frame = self.frame();
        if let Some(f) = &self.on_draw {
            f(&frame);
        }
        let paint = RatingPaint {
            glyphs: &self.glyphs,
            empty_tint: self.empty_tint,
            filled_tint: self.filled_tint,
            shimmer: self.shimmer.as_ref().map(ShimmerState::effect),
        };
        // Glyphs and shimmer bands never spill outside the rect the parent gave us.
        painter.push_clip(rect);
        paint.paint(painter, rect.origin, &frame);
        painter.pop_clip();
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.controller.set_layout(self.layout.get());
        let bar = self.bar_rect(rect);
        let local = |x: f32| x - bar.origin.x;

        match event {
            UiEvent::Click { pos } if bar.contains(*pos) => {
                self.controller.on_tap_release(local(pos.x), ctx.frame.now).into()
            }
            // The press point is where the drag really began; the first
            // `Drag` only arrives once the pointer has left the slop.
            UiEvent::Drag { pos, start } if bar.contains(*start) => {
                if !self.controller.is_dragging()
                    && !self.controller.on_pointer_down(local(start.x))
                {
                    return EventResult::Ignored;
                }
                self.controller.on_pointer_move(local(pos.x)).into()
            }
            UiEvent::DragEnd { start, .. } if bar.contains(*start) => {
                self.controller.on_pointer_up().into()
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_frame(&mut self, time: &FrameTime) {
        self.now = time.now;
        self.controller.set_layout(self.layout.get());
        if let TickStatus::Finished(v) = self.controller.tick(time.now) {
            log::trace!("rating transition settled at {v}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::{RateChangeStrategy, RatingInterval};
    use ratebar_engine::scene::DrawList;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn instant_config() -> RatingBarConfig {
        RatingBarConfig::builder()
            .item_extent(40.0)
            .allow_zero(true)
            .transition(RateChangeStrategy::Instant)
            .build()
            .unwrap()
    }

    fn ctx(now: Instant) -> LayoutCtx {
        LayoutCtx::new(FrameTime::at(now))
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measures_total_width_by_extent() {
        let t0 = Instant::now();
        let bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 0.0, t0).unwrap();
        let size = bar.measure(Constraints::unbounded(), &ctx(t0));
        assert_eq!(size, Vec2::new(200.0, 40.0));
        assert_eq!(bar.layout(), ItemLayout::new(40.0, 0.0, 5));
    }

    #[test]
    fn intrinsic_size_used_without_explicit_extent() {
        let t0 = Instant::now();
        let config = RatingBarConfig::builder().spacing(2.0).build().unwrap();
        let bar = RatingBar::mounted_at(config, GlyphPair::stars(), 0.0, t0).unwrap();
        // Painter stars are 24×24.
        let size = bar.measure(Constraints::unbounded(), &ctx(t0));
        assert_eq!(size, Vec2::new(24.0 * 5.0 + 2.0 * 4.0, 24.0));
    }

    #[test]
    fn narrow_container_shrinks_items() {
        let t0 = Instant::now();
        let bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 0.0, t0).unwrap();
        let size = bar.measure(Constraints::loose(Vec2::new(100.0, 100.0)), &ctx(t0));
        assert_eq!(size, Vec2::new(100.0, 20.0));
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn click_sets_rating_relative_to_rect() {
        let t0 = Instant::now();
        let mut bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 0.0, t0).unwrap();
        let _ = bar.measure(Constraints::unbounded(), &ctx(t0));
        let rect = Rect::new(100.0, 50.0, 300.0, 40.0);

        let r = bar.on_event(&UiEvent::Click { pos: Vec2::new(190.0, 60.0) }, rect, &ctx(t0));
        assert!(r.is_consumed());
        assert_eq!(bar.rating(), 2.5);

        // Outside the bar's own extent, even though inside `rect`.
        let r = bar.on_event(&UiEvent::Click { pos: Vec2::new(350.0, 60.0) }, rect, &ctx(t0));
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(bar.rating(), 2.5);
    }

    #[test]
    fn drag_starts_at_press_point() {
        let t0 = Instant::now();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let c = changes.clone();
        let mut bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 0.0, t0)
            .unwrap()
            .on_rating_change(move |v| c.borrow_mut().push(v));
        let _ = bar.measure(Constraints::unbounded(), &ctx(t0));
        let rect = Rect::new(0.0, 0.0, 200.0, 40.0);

        let start = Vec2::new(90.0, 10.0);
        bar.on_event(&UiEvent::Drag { pos: Vec2::new(130.0, 10.0), start }, rect, &ctx(t0));
        bar.on_event(&UiEvent::DragEnd { pos: Vec2::new(130.0, 10.0), start }, rect, &ctx(t0));
        assert_eq!(*changes.borrow(), vec![2.5, 3.5]);
        assert!(!bar.controller().is_dragging());
    }

    #[test]
    fn events_before_measure_are_ignored() {
        let t0 = Instant::now();
        let mut bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 0.0, t0).unwrap();
        let r = bar.on_event(
            &UiEvent::Click { pos: Vec2::new(10.0, 10.0) },
            Rect::new(0.0, 0.0, 200.0, 40.0),
            &ctx(t0),
        );
        assert_eq!(r, EventResult::Ignored);
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn animated_mount_advances_on_frame() {
        let t0 = Instant::now();
        let config = RatingBarConfig::builder()
            .item_extent(40.0)
            .interval(RatingInterval::Full)
            .build()
            .unwrap();
        let mut bar = RatingBar::mounted_at(config, GlyphPair::stars(), 4.0, t0).unwrap();
        assert_eq!(bar.rating(), 0.0);
        bar.on_frame(&FrameTime::at(t0 + Duration::from_millis(150)));
        assert_eq!(bar.rating(), 2.0);
        bar.on_frame(&FrameTime::at(t0 + Duration::from_millis(300)));
        assert_eq!(bar.rating(), 4.0);
        assert_eq!(bar.target(), 4.0);
    }

    #[test]
    fn set_rating_mid_transition_retargets_from_current_value() {
        let t0 = Instant::now();
        let config = RatingBarConfig::builder()
            .item_extent(40.0)
            .interval(RatingInterval::Full)
            .animate_initial_value(false)
            .build()
            .unwrap();
        let mut bar = RatingBar::mounted_at(config, GlyphPair::stars(), 1.0, t0).unwrap();
        let _ = bar.measure(Constraints::unbounded(), &ctx(t0));

        bar.set_rating(5.0, t0);
        bar.on_frame(&FrameTime::at(t0 + Duration::from_millis(150)));
        assert_eq!(bar.rating(), 3.0);

        bar.set_rating(2.0, t0 + Duration::from_millis(150));
        assert_eq!(bar.target(), 2.0);
        bar.on_frame(&FrameTime::at(t0 + Duration::from_millis(300)));
        assert_eq!(bar.rating(), 2.5);

        bar.on_frame(&FrameTime::at(t0 + Duration::from_millis(450)));
        assert_eq!(bar.rating(), 2.0);
        assert!(!bar.controller().is_animating());
        assert_eq!(bar.frame().geometry.filled_width, 80.0);
    }

    #[test]
    fn paint_reports_frame_and_draws_layer() {
        let t0 = Instant::now();
        let seen = Rc::new(RefCell::new(None));
        let s = seen.clone();
        let bar = RatingBar::mounted_at(instant_config(), GlyphPair::stars(), 3.0, t0)
            .unwrap()
            .shimmer(ShimmerEffect::default())
            .on_draw(move |f| *s.borrow_mut() = Some(f.clone()));
        let _ = bar.measure(Constraints::unbounded(), &ctx(t0));

        let rect = Rect::new(0.0, 0.0, 200.0, 40.0);
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, 1.0);
            bar.paint(&mut p, rect);
        }
        let frame = seen.borrow().clone().unwrap();
        assert_eq!(frame.geometry.filled_width, 120.0);
        assert_eq!(frame.shimmer.and_then(|p| p.fill_progress), Some(0.0));
        assert!(!list.is_empty());
        assert_eq!(list.layer_depth(), 0);
        assert!(list.items().iter().all(|i| i.clip_rect == Some(rect)));
    }
}
