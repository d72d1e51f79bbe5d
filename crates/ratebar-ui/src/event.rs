use ratebar_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed and released at `pos` without dragging.
    Click { pos: Vec2 },
    /// Pointer moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `pos` is the current cursor position; `start` is where the press began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a drag.
    ///
    /// `pos` is where the button was released; `start` is where the drag began.
    /// Unlike `Click`, this fires even when `pos` is outside the widget; use
    /// `rect.contains(start)` to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl From<bool> for EventResult {
    #[inline]
    fn from(consumed: bool) -> Self {
        if consumed { EventResult::Consumed } else { EventResult::Ignored }
    }
}
