use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Gradient with `colors` distributed evenly over `[0, 1]`, padded at the
    /// ends.
    ///
    /// A single color yields a flat two-stop gradient. Returns `None` for an
    /// empty color list.
    pub fn evenly_spaced(start: Vec2, end: Vec2, colors: &[Color]) -> Option<Self> {
        let stops = match colors {
            [] => return None,
            [only] => vec![ColorStop::new(0.0, *only), ColorStop::new(1.0, *only)],
            many => {
                let last = (many.len() - 1) as f32;
                many.iter()
                    .enumerate()
                    .map(|(i, c)| ColorStop::new(i as f32 / last, *c))
                    .collect()
            }
        };
        Some(Self::new(start, end, stops, SpreadMode::Pad))
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_three_colors() {
        let c = Color::amber();
        let g = LinearGradient::evenly_spaced(
            Vec2::splat(-40.0),
            Vec2::zero(),
            &[c.with_alpha(0.9), c.with_alpha(0.3), c.with_alpha(0.9)],
        )
        .unwrap();
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.spread, SpreadMode::Pad);
        assert!(g.is_valid());
    }

    #[test]
    fn evenly_spaced_single_color_is_flat() {
        let g = LinearGradient::evenly_spaced(Vec2::zero(), Vec2::splat(1.0), &[Color::amber()])
            .unwrap();
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, g.stops[1].color);
    }

    #[test]
    fn evenly_spaced_empty_is_none() {
        assert!(LinearGradient::evenly_spaced(Vec2::zero(), Vec2::splat(1.0), &[]).is_none());
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g =
            LinearGradient::evenly_spaced(Vec2::zero(), Vec2::zero(), &[Color::amber()]).unwrap();
        assert!(!g.is_valid());
    }
}
