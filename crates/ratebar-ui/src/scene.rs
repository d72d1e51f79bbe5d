use ratebar_engine::coords::{Rect, Vec2};
use ratebar_engine::scene::DrawList;
use ratebar_engine::time::FrameTime;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

/// Pointer travel, in logical pixels, before a press turns into a drag.
pub const DRAG_SLOP: f32 = 4.0;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from your platform's pointer state each frame. Press,
/// click and drag transitions are derived by [`UiScene`] from consecutive
/// snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
}

impl UiInput {
    #[inline]
    pub fn hover(pos: Vec2) -> Self {
        Self { mouse_pos: pos, mouse_pressed: false }
    }

    #[inline]
    pub fn pressed(pos: Vec2) -> Self {
        Self { mouse_pos: pos, mouse_pressed: true }
    }
}

/// Primary-button press being tracked across frames.
#[derive(Debug, Clone, Copy)]
struct PressState {
    start: Vec2,
    dragging: bool,
}

impl PressState {
    /// Past the slop once, a press stays a drag until release.
    fn update(&mut self, pos: Vec2) -> bool {
        if !self.dragging {
            let d = pos - self.start;
            self.dragging = d.x.hypot(d.y) >= DRAG_SLOP;
        }
        self.dragging
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns state shared across frames: the `DrawList`
/// populated each frame and the pointer press being tracked.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root: Element = RatingBar::new(config, GlyphPair::stars(), 3.5)?.into();
///
/// // In your frame callback:
/// let time = clock.tick();
/// let draw_list = ui.frame_ref(&mut root, viewport, &UiInput { mouse_pos, mouse_pressed }, time);
/// renderer.render(draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame_ref`](Self::frame_ref) call.
    pub draw_list: DrawList,
    press: Option<PressState>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while the primary button is held past the drag slop.
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragging)
    }

    /// Runs one frame for a root widget that persists across frames.
    ///
    /// Order: `on_frame`, measure, pointer events, paint. Events therefore see
    /// this frame's layout, and paint sees the state the events left behind.
    #[must_use]
    pub fn frame_ref(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
        time: FrameTime,
    ) -> &mut DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx::new(time);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── time ──────────────────────────────────────────────────────────
        root.on_frame(&time);

        // ── measure ───────────────────────────────────────────────────────
        // The root always occupies the full viewport; the pass lets it
        // resolve its internal layout.
        let _ = root.measure(Constraints::loose(viewport), &ctx);

        // ── events ────────────────────────────────────────────────────────
        for event in self.pointer_events(input) {
            root.on_event(&event, rect, &ctx);
        }

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, ctx.scale);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }

    /// Derives this frame's pointer events from the press tracked so far.
    fn pointer_events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let mut events = vec![UiEvent::Hover { pos }];

        if input.mouse_pressed {
            let press = self.press.get_or_insert(PressState { start: pos, dragging: false });
            if press.update(pos) {
                events.push(UiEvent::Drag { pos, start: press.start });
            }
        } else if let Some(press) = self.press.take() {
            events.push(if press.dragging {
                UiEvent::DragEnd { pos, start: press.start }
            } else {
                UiEvent::Click { pos }
            });
        }

        events
    }
}
