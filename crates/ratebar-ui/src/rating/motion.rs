//! The stateful core of a rating bar: displayed vs. target rating, the
//! transition between them, and pointer-driven changes.
//!
//! All mutation goes through `&mut self`, and time is always passed in by the
//! caller, so the controller never reads a clock on its own.

use std::time::{Duration, Instant};

use super::config::{RateChangeStrategy, RatingBarConfig};
use super::easing::Easing;
use super::error::RatingError;
use super::fill::RatingFrame;
use super::geometry::ItemLayout;
use super::shimmer::ShimmerPhase;

/// Token identifying one transition. Starting a new transition invalidates
/// every earlier id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MotionState {
    /// Resting at a rating.
    Idle(f32),
    /// Interpolating `from → to` starting at `start`.
    Transitioning {
        from: f32,
        to: f32,
        start: Instant,
        duration: Duration,
        easing: Easing,
        id: TransitionId,
    },
}

/// Outcome of one [`RatingMotionController::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickStatus {
    /// Nothing in flight.
    Idle,
    /// Still moving; carries the new displayed value.
    Animating(f32),
    /// Reached the target on this tick.
    Finished(f32),
}

impl TickStatus {
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, TickStatus::Animating(_))
    }
}

/// Owns the motion state of one rating bar.
pub struct RatingMotionController {
    config: RatingBarConfig,
    layout: ItemLayout,
    state: MotionState,
    displayed: f32,
    target: f32,
    last_id: u64,
    dragging: bool,
    /// Fired for every pointer-driven change, during drags and on tap.
    on_change: Option<Box<dyn FnMut(f32)>>,
    /// Fired once at the end of each gesture.
    on_finished: Option<Box<dyn FnMut(f32)>>,
}

impl RatingMotionController {
    /// Creates a controller resting at `quantize(initial)`.
    ///
    /// With an animated strategy and `animate_initial_value`, the bar starts at
    /// `0` and transitions to the initial rating from `now` instead.
    pub fn new(config: RatingBarConfig, initial: f32, now: Instant) -> Result<Self, RatingError> {
        config.validate()?;
        let q = config.quantize(initial);
        let mut controller = Self {
            layout: ItemLayout::empty(config.item_count()),
            state: MotionState::Idle(q),
            displayed: q,
            target: q,
            last_id: 0,
            dragging: false,
            on_change: None,
            on_finished: None,
            config,
        };
        if controller.config.animate_initial_value()
            && controller.config.transition().is_animated()
            && q != 0.0
        {
            controller.displayed = 0.0;
            controller.state = MotionState::Idle(0.0);
            controller.begin_transition(q, now);
        }
        Ok(controller)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RatingBarConfig {
        &self.config
    }

    #[inline]
    pub fn layout(&self) -> ItemLayout {
        self.layout
    }

    /// Value currently rendered; lags `target` during a transition.
    #[inline]
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Committed, quantized value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, MotionState::Transitioning { .. })
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Id of the transition in flight, if any.
    pub fn transition_id(&self) -> Option<TransitionId> {
        match self.state {
            MotionState::Transitioning { id, .. } => Some(id),
            MotionState::Idle(_) => None,
        }
    }

    // ── setup ─────────────────────────────────────────────────────────────

    /// Updates the geometry pointer positions are mapped against.
    pub fn set_layout(&mut self, layout: ItemLayout) {
        self.layout = layout;
    }

    pub fn on_rating_change(&mut self, f: impl FnMut(f32) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    pub fn on_rating_change_finished(&mut self, f: impl FnMut(f32) + 'static) {
        self.on_finished = Some(Box::new(f));
    }

    // ── value changes ─────────────────────────────────────────────────────

    /// Quantizes `raw` with this bar's interval, zero rule and range.
    #[inline]
    pub fn quantize(&self, raw: f32) -> f32 {
        self.config.quantize(raw)
    }

    /// Host-driven rating change. Animates or jumps per the configured
    /// strategy; no callbacks fire.
    pub fn set_input_rating(&mut self, raw: f32, now: Instant) {
        let q = self.quantize(raw);
        self.begin_transition(q, now);
    }

    /// Jumps to `quantize(raw)`, abandoning any transition.
    pub fn snap_to(&mut self, raw: f32) {
        let q = self.quantize(raw);
        self.settle(q);
    }

    /// Advances the transition in flight to `now`.
    pub fn tick(&mut self, now: Instant) -> TickStatus {
        let MotionState::Transitioning { from, to, start, duration, easing, .. } = self.state
        else {
            return TickStatus::Idle;
        };

        let f = if duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(start).as_secs_f64() / duration.as_secs_f64())
                .clamp(0.0, 1.0) as f32
        };

        if f >= 1.0 {
            self.settle(to);
            return TickStatus::Finished(to);
        }

        let value = easing.apply(f) * (to - from) + from;
        self.displayed = value.clamp(0.0, self.config.item_count() as f32);
        TickStatus::Animating(self.displayed)
    }

    /// Completes transition `id` immediately. Returns `false` and changes
    /// nothing when `id` has been superseded or cancelled.
    pub fn finish_transition(&mut self, id: TransitionId) -> bool {
        match self.state {
            MotionState::Transitioning { to, id: current, .. } if current == id => {
                self.settle(to);
                true
            }
            _ => {
                log::trace!("ignoring completion of stale transition {id:?}");
                false
            }
        }
    }

    /// Stops where the bar currently is; the displayed value becomes the target.
    pub fn cancel(&mut self) {
        if self.is_animating() {
            let here = self.displayed;
            self.settle(here);
        }
    }

    // ── pointer input ─────────────────────────────────────────────────────
    //
    // `x` is local to the bar's left edge. Handlers return whether the event
    // was accepted.

    /// Drag start. Snaps to the touched rating and reports it.
    pub fn on_pointer_down(&mut self, x: f32) -> bool {
        if !self.config.gesture_mode().allows_drag() || self.layout.is_degenerate() {
            return false;
        }
        self.dragging = true;
        self.apply_drag(x);
        true
    }

    /// Drag update. Snaps to the touched rating and reports it.
    pub fn on_pointer_move(&mut self, x: f32) -> bool {
        if !self.config.gesture_mode().allows_drag() || self.layout.is_degenerate() {
            return false;
        }
        self.dragging = true;
        self.apply_drag(x);
        true
    }

    /// Drag end. Reports the committed rating if a drag was active.
    pub fn on_pointer_up(&mut self) -> bool {
        if !std::mem::take(&mut self.dragging) {
            return false;
        }
        let target = self.target;
        if let Some(f) = &mut self.on_finished {
            f(target);
        }
        true
    }

    /// Tap on the bar. Reports the new rating as both changed and finished,
    /// then animates (or jumps) to it.
    pub fn on_tap_release(&mut self, x: f32, now: Instant) -> bool {
        if !self.config.gesture_mode().allows_press() || self.layout.is_degenerate() {
            return false;
        }
        self.dragging = false;
        let q = self.rating_at(x);
        if let Some(f) = &mut self.on_change {
            f(q);
        }
        if let Some(f) = &mut self.on_finished {
            f(q);
        }
        self.begin_transition(q, now);
        true
    }

    // ── output ────────────────────────────────────────────────────────────

    /// Draw parameters for the current displayed value.
    pub fn frame(&self, shimmer: Option<ShimmerPhase>) -> RatingFrame {
        RatingFrame { geometry: self.layout.fill(self.displayed), shimmer }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn rating_at(&self, x: f32) -> f32 {
        let raw = self.layout.position_to_rating(x);
        let q = self.quantize(raw);
        log::trace!("pointer x={x} -> raw {raw} -> {q}");
        q
    }

    fn apply_drag(&mut self, x: f32) {
        let q = self.rating_at(x);
        self.settle(q);
        if let Some(f) = &mut self.on_change {
            f(q);
        }
    }

    fn settle(&mut self, value: f32) {
        self.displayed = value;
        self.target = value;
        self.state = MotionState::Idle(value);
    }

    /// Moves toward `to` per the configured strategy, superseding any
    /// transition in flight.
    fn begin_transition(&mut self, to: f32, now: Instant) {
        match self.config.transition() {
            RateChangeStrategy::Animated { easing, duration }
                if to != self.displayed && !duration.is_zero() =>
            {
                self.last_id += 1;
                self.target = to;
                self.state = MotionState::Transitioning {
                    from: self.displayed,
                    to,
                    start: now,
                    duration,
                    easing,
                    id: TransitionId(self.last_id),
                };
            }
            _ => self.settle(to),
        }
    }
}

impl std::fmt::Debug for RatingMotionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RatingMotionController")
            .field("state", &self.state)
            .field("displayed", &self.displayed)
            .field("target", &self.target)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}
