//! Pointer ↔ rating mapping and item placement.
//!
//! Items are square: `extent` is both the width and the height of one item.
//! Positions are local to the bar, `x = 0` at the left edge of the first item.

use std::ops::Range;

use ratebar_engine::coords::Vec2;

use crate::constraints::Constraints;

/// Resolved placement of the items of one bar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ItemLayout {
    pub extent: f32,
    pub spacing: f32,
    pub item_count: usize,
}

impl ItemLayout {
    /// Non-finite or negative lengths are clamped to zero.
    pub fn new(extent: f32, spacing: f32, item_count: usize) -> Self {
        Self {
            extent: non_negative(extent),
            spacing: non_negative(spacing),
            item_count,
        }
    }

    /// A layout with nothing to hit or draw.
    pub const fn empty(item_count: usize) -> Self {
        Self { extent: 0.0, spacing: 0.0, item_count }
    }

    /// `true` when items have no area; pointer input is ignored in that state.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.extent <= 0.0 || self.item_count == 0
    }

    /// Distance between the left edges of neighbouring items.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.extent + self.spacing
    }

    #[inline]
    pub fn item_origin(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Width of all items plus the gaps between them.
    pub fn total_width(&self) -> f32 {
        match self.item_count {
            0 => 0.0,
            n => self.extent * n as f32 + self.spacing * (n - 1) as f32,
        }
    }

    /// Size the bar occupies.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.total_width(), self.extent)
    }

    pub fn intervals(&self) -> Vec<Range<f32>> {
        item_intervals(self.extent, self.spacing, self.item_count)
    }

    pub fn position_to_rating(&self, x: f32) -> f32 {
        position_to_rating(x, self.extent, self.spacing, self.item_count)
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Half-open `[start, end)` range covered by each item; gaps are excluded.
pub fn item_intervals(item_width: f32, spacing: f32, item_count: usize) -> Vec<Range<f32>> {
    (0..item_count)
        .map(|i| {
            let start = i as f32 * (item_width + spacing);
            start..start + item_width
        })
        .collect()
}

/// Raw (unquantized) rating under pointer position `x`.
///
/// Inside item `i` the rating is `i` plus the fraction of the item covered.
/// In a gap, or outside the bar, the rating is the number of items whose
/// stride begins at or before `x` (so a gap resolves to the item just passed).
/// The result is clamped to `[0, item_count]`; a zero-width item maps
/// everything to `0`.
pub fn position_to_rating(x: f32, item_width: f32, spacing: f32, item_count: usize) -> f32 {
    if item_width <= 0.0 || item_count == 0 || x.is_nan() {
        return 0.0;
    }
    let max = item_count as f32;
    let stride = item_width + spacing;

    let inside = (0..item_count).find_map(|i| {
        let start = i as f32 * stride;
        (start..start + item_width)
            .contains(&x)
            .then(|| i as f32 + (x - start) / item_width)
    });

    let rating = inside.unwrap_or_else(|| (1.0 + x / stride).floor().min(max));
    rating.clamp(0.0, max)
}

/// Resolves item extent and spacing for the space a parent offers.
///
/// - Width comes from `explicit_extent` or the glyph's intrinsic width; in a
///   bounded container it is capped at `max.x / item_count` so the row never
///   overflows.
/// - Height comes from the same source, capped by a bounded `max.y`, and never
///   exceeds the width. That height is the square item extent.
/// - Spacing is clamped to `[0, max(0, max.x − extent·item_count)]`.
///
/// A container too small for even one item yields a zero extent rather than
/// an error.
pub fn resolve_layout(
    explicit_extent: Option<f32>,
    intrinsic: Vec2,
    constraints: Constraints,
    item_count: usize,
    spacing: f32,
) -> ItemLayout {
    let n = item_count.max(1) as f32;
    let bounded_w = constraints.max.x.is_finite();
    let bounded_h = constraints.max.y.is_finite();

    let base_w = non_negative(explicit_extent.unwrap_or(intrinsic.x));
    let width = if bounded_w {
        base_w.min(non_negative(constraints.max.x) / n)
    } else {
        base_w
    };

    let base_h = non_negative(explicit_extent.unwrap_or(intrinsic.y));
    let height = if bounded_h { base_h.min(non_negative(constraints.max.y)) } else { base_h };
    let extent = height.min(width);

    let spacing = if bounded_w {
        let room = (constraints.max.x - extent * n).max(0.0);
        non_negative(spacing).min(room)
    } else {
        non_negative(spacing)
    };

    if extent <= 0.0 {
        log::debug!(
            "rating bar has no room for items (max {:?}, intrinsic {:?}); drawing a sliver",
            constraints.max,
            intrinsic
        );
    }

    ItemLayout::new(extent, spacing, item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── item_intervals ────────────────────────────────────────────────────

    #[test]
    fn intervals_skip_gaps() {
        let iv = item_intervals(40.0, 10.0, 3);
        assert_eq!(iv, vec![0.0..40.0, 50.0..90.0, 100.0..140.0]);
    }

    // ── position_to_rating ────────────────────────────────────────────────

    #[test]
    fn position_inside_item_is_fractional() {
        assert_eq!(position_to_rating(100.0, 40.0, 0.0, 5), 2.5);
        assert_eq!(position_to_rating(0.0, 40.0, 0.0, 5), 0.0);
        assert!(approx(position_to_rating(2.0, 40.0, 0.0, 5), 0.05));
    }

    #[test]
    fn position_in_gap_claims_passed_item() {
        // Gap between item 0 (0..40) and item 1 (50..90).
        assert_eq!(position_to_rating(45.0, 40.0, 10.0, 5), 1.0);
        assert_eq!(position_to_rating(95.0, 40.0, 10.0, 5), 2.0);
    }

    #[test]
    fn position_outside_bar_is_clamped() {
        assert_eq!(position_to_rating(-12.0, 40.0, 0.0, 5), 0.0);
        assert_eq!(position_to_rating(200.0, 40.0, 0.0, 5), 5.0);
        assert_eq!(position_to_rating(10_000.0, 40.0, 8.0, 5), 5.0);
    }

    #[test]
    fn position_on_degenerate_layout_is_zero() {
        assert_eq!(position_to_rating(30.0, 0.0, 0.0, 5), 0.0);
        assert_eq!(position_to_rating(f32::NAN, 40.0, 0.0, 5), 0.0);
    }

    #[test]
    fn position_is_monotonic_along_the_bar() {
        let layout = ItemLayout::new(24.0, 6.0, 5);
        let mut prev = 0.0;
        for i in 0..=150 {
            let r = layout.position_to_rating(i as f32);
            assert!(r >= prev, "x={i}: {prev} -> {r}");
            prev = r;
        }
    }

    // ── ItemLayout ────────────────────────────────────────────────────────

    #[test]
    fn layout_total_width_and_origins() {
        let l = ItemLayout::new(40.0, 10.0, 5);
        assert_eq!(l.total_width(), 240.0);
        assert_eq!(l.item_origin(3), 150.0);
        assert_eq!(l.size(), Vec2::new(240.0, 40.0));
    }

    #[test]
    fn layout_sanitizes_lengths() {
        let l = ItemLayout::new(-3.0, f32::NAN, 5);
        assert_eq!(l.extent, 0.0);
        assert_eq!(l.spacing, 0.0);
        assert!(l.is_degenerate());
    }

    // ── resolve_layout ────────────────────────────────────────────────────

    #[test]
    fn resolve_uses_intrinsic_when_unbounded() {
        let l = resolve_layout(None, Vec2::new(24.0, 24.0), Constraints::unbounded(), 5, 4.0);
        assert_eq!(l, ItemLayout::new(24.0, 4.0, 5));
    }

    #[test]
    fn resolve_explicit_extent_overrides_intrinsic() {
        let l = resolve_layout(Some(32.0), Vec2::new(24.0, 24.0), Constraints::unbounded(), 5, 0.0);
        assert_eq!(l.extent, 32.0);
    }

    #[test]
    fn resolve_caps_width_to_container_share() {
        let c = Constraints::loose(Vec2::new(100.0, 200.0));
        let l = resolve_layout(Some(40.0), Vec2::zero(), c, 5, 10.0);
        assert_eq!(l.extent, 20.0);
        // 5 items fill the whole width, no room left for gaps.
        assert_eq!(l.spacing, 0.0);
    }

    #[test]
    fn resolve_caps_extent_to_height() {
        let c = Constraints::loose(Vec2::new(500.0, 18.0));
        let l = resolve_layout(None, Vec2::new(24.0, 24.0), c, 5, 0.0);
        assert_eq!(l.extent, 18.0);
    }

    #[test]
    fn resolve_clamps_spacing_to_leftover_room() {
        let c = Constraints::loose(Vec2::new(130.0, 40.0));
        let l = resolve_layout(Some(20.0), Vec2::zero(), c, 5, 50.0);
        assert_eq!(l.spacing, 30.0);
    }

    #[test]
    fn resolve_tiny_container_degrades_to_zero() {
        let c = Constraints::loose(Vec2::new(0.0, 0.0));
        let l = resolve_layout(Some(24.0), Vec2::zero(), c, 5, 4.0);
        assert!(l.is_degenerate());
        assert_eq!(l.spacing, 0.0);
    }
}
