/// Transition curve mapping linear progress `t ∈ [0, 1]` to eased progress.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    /// Standard curve, `cubic-bezier(0.4, 0.0, 0.2, 1.0)`.
    FastOutSlowIn,
    /// Decelerate, `cubic-bezier(0.0, 0.0, 0.2, 1.0)`.
    LinearOutSlowIn,
    /// Accelerate, `cubic-bezier(0.4, 0.0, 1.0, 1.0)`.
    FastOutLinearIn,
    /// Custom cubic Bézier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    ///
    /// `x1` and `x2` should stay within `[0, 1]` so the curve is a function of `t`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Eased progress for linear progress `t`. Input is clamped to `[0, 1]`,
    /// and the endpoints map exactly to `0` and `1`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

/// One axis of a cubic Bézier with fixed endpoints 0 and 1.
#[inline]
fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Solves `x(s) = t` by bisection, then evaluates `y(s)`.
///
/// x(s) is monotonic for control x-coordinates in `[0, 1]`, so bisection
/// always converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    const TOLERANCE: f32 = 1e-6;
    const MAX_STEPS: usize = 40;

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut s = t;
    for _ in 0..MAX_STEPS {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < TOLERANCE {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in CURVES {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::FastOutSlowIn.apply(-3.0), 0.0);
        assert_eq!(Easing::FastOutSlowIn.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
    }

    #[test]
    fn curves_are_monotonic() {
        for e in CURVES {
            let mut prev = 0.0;
            for i in 1..=50 {
                let v = e.apply(i as f32 / 50.0);
                assert!(v > prev, "{e:?} not increasing at step {i}: {prev} -> {v}");
                prev = v;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_is_ahead_of_linear_past_midpoint() {
        // The standard curve decelerates: by 60% time it is well past 60% distance.
        assert!(Easing::FastOutSlowIn.apply(0.6) > 0.75);
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let e = Easing::CubicBezier { x1: 1.0 / 3.0, y1: 1.0 / 3.0, x2: 2.0 / 3.0, y2: 2.0 / 3.0 };
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-4);
        }
    }
}
