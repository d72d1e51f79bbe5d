//! Shimmer overlay: a gradient band sweeping across the bar.
//!
//! Progress is a pure function of elapsed time, so any number of bars can
//! shimmer independently without a shared clock.

use std::time::{Duration, Instant};

use ratebar_engine::coords::Vec2;
use ratebar_engine::paint::Color;

use super::easing::Easing;

/// What happens when a shimmer loop reaches its end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RepeatMode {
    /// Play forward, then backward (0 → 1 → 0 …).
    Reverse,
    /// Jump back to the start (0 → 1, 0 → 1 …).
    Restart,
}

/// One free-running loop.
///
/// `duration` is the length of a single 0 → 1 ramp. With
/// [`RepeatMode::Reverse`] a full up-and-down cycle therefore takes
/// `2 × duration`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoopSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl LoopSpec {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    pub fn new(duration: Duration, repeat: RepeatMode) -> Self {
        Self { duration, easing: Easing::FastOutSlowIn, repeat }
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for LoopSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, RepeatMode::Reverse)
    }
}

/// Loop progress in `[0, 1]` after `elapsed` time. A zero-length loop sits at `1`.
pub fn oscillate(looping: &LoopSpec, elapsed: Duration) -> f32 {
    let period = looping.duration.as_secs_f64();
    if period <= 0.0 {
        return 1.0;
    }
    let cycles = elapsed.as_secs_f64() / period;
    let ramp = match looping.repeat {
        RepeatMode::Restart => cycles.fract(),
        RepeatMode::Reverse => {
            let pos = cycles % 2.0;
            if pos <= 1.0 { pos } else { 2.0 - pos }
        }
    };
    looping.easing.apply(ramp as f32)
}

/// Default fill gradient: the rating color at .9 / .3 / .9 alpha.
fn glint_colors(color: Color) -> Vec<Color> {
    vec![color.with_alpha(0.9), color.with_alpha(0.3), color.with_alpha(0.9)]
}

/// Shimmer over the filled region.
#[derive(Debug, Clone, PartialEq)]
pub struct FillShimmer {
    pub colors: Vec<Color>,
    pub loop_spec: LoopSpec,
    /// Redraw the empty glyphs over the band so only the glyph background
    /// glows.
    pub solid_border: bool,
}

impl FillShimmer {
    /// Fill shimmer built from a single color's alpha ramp.
    pub fn from_color(color: Color) -> Self {
        Self { colors: glint_colors(color), ..Self::default() }
    }
}

impl Default for FillShimmer {
    fn default() -> Self {
        Self {
            colors: glint_colors(Color::amber()),
            loop_spec: LoopSpec::default(),
            solid_border: false,
        }
    }
}

/// Shimmer over the empty-glyph silhouettes of the whole bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderShimmer {
    pub colors: Vec<Color>,
    pub loop_spec: LoopSpec,
}

impl BorderShimmer {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            loop_spec: LoopSpec::new(LoopSpec::DEFAULT_DURATION, RepeatMode::Restart),
        }
    }
}

/// Fill and border shimmer, each optional and clocked independently.
#[derive(Debug, Clone, PartialEq)]
pub struct ShimmerEffect {
    pub fill: Option<FillShimmer>,
    pub border: Option<BorderShimmer>,
}

impl Default for ShimmerEffect {
    fn default() -> Self {
        Self { fill: Some(FillShimmer::default()), border: None }
    }
}

impl ShimmerEffect {
    pub fn phase(&self, elapsed: Duration) -> ShimmerPhase {
        ShimmerPhase {
            fill_progress: self.fill.as_ref().map(|f| oscillate(&f.loop_spec, elapsed)),
            border_progress: self.border.as_ref().map(|b| oscillate(&b.loop_spec, elapsed)),
        }
    }
}

/// Per-frame shimmer progress. Never stored beyond the frame it was computed for.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShimmerPhase {
    pub fill_progress: Option<f32>,
    pub border_progress: Option<f32>,
}

/// A shimmer effect anchored to the instant its widget was mounted.
#[derive(Debug, Clone)]
pub struct ShimmerState {
    effect: ShimmerEffect,
    origin: Instant,
}

impl ShimmerState {
    pub fn new(effect: ShimmerEffect, origin: Instant) -> Self {
        Self { effect, origin }
    }

    #[inline]
    pub fn effect(&self) -> &ShimmerEffect {
        &self.effect
    }

    pub fn phase_at(&self, now: Instant) -> ShimmerPhase {
        self.effect.phase(now.saturating_duration_since(self.origin))
    }
}

/// Gradient axis of a shimmer band, local to the bar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientBand {
    pub start: Vec2,
    pub end: Vec2,
}

impl GradientBand {
    /// Diagonal band one item wide whose trailing edge sits at `sweep · progress`.
    pub fn sweep(sweep: f32, item_extent: f32, progress: f32) -> Self {
        let head = sweep * progress;
        Self { start: Vec2::splat(head - item_extent), end: Vec2::splat(head) }
    }

    #[must_use]
    pub fn translate(self, offset: Vec2) -> Self {
        Self { start: self.start + offset, end: self.end + offset }
    }
}

/// Band for the fill shimmer; sweeps over the filled region only.
#[inline]
pub fn fill_band(filled_width: f32, item_extent: f32, progress: f32) -> GradientBand {
    GradientBand::sweep(filled_width, item_extent, progress)
}

/// Band for the border shimmer; sweeps over the whole bar.
#[inline]
pub fn border_band(total_width: f32, item_extent: f32, progress: f32) -> GradientBand {
    GradientBand::sweep(total_width, item_extent, progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn linear(repeat: RepeatMode) -> LoopSpec {
        LoopSpec::new(ms(1000), repeat).easing(Easing::Linear)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── oscillate ─────────────────────────────────────────────────────────

    #[test]
    fn restart_ramps_then_jumps_back() {
        let looping = linear(RepeatMode::Restart);
        assert!(approx(oscillate(&looping, ms(0)), 0.0));
        assert!(approx(oscillate(&looping, ms(250)), 0.25));
        assert!(approx(oscillate(&looping, ms(999)), 0.999));
        assert!(approx(oscillate(&looping, ms(1000)), 0.0));
        assert!(approx(oscillate(&looping, ms(1500)), 0.5));
    }

    #[test]
    fn reverse_is_a_triangle_with_double_period() {
        let looping = linear(RepeatMode::Reverse);
        assert!(approx(oscillate(&looping, ms(500)), 0.5));
        assert!(approx(oscillate(&looping, ms(1000)), 1.0));
        assert!(approx(oscillate(&looping, ms(1250)), 0.75));
        assert!(approx(oscillate(&looping, ms(2000)), 0.0));
        assert!(approx(oscillate(&looping, ms(2500)), 0.5));
    }

    #[test]
    fn oscillate_stays_in_unit_range_with_easing() {
        let looping = LoopSpec::default();
        for step in 0..200 {
            let p = oscillate(&looping, ms(step * 37));
            assert!((0.0..=1.0).contains(&p), "step {step}: {p}");
        }
    }

    #[test]
    fn zero_duration_loop_is_pinned() {
        let looping = LoopSpec::new(Duration::ZERO, RepeatMode::Restart);
        assert_eq!(oscillate(&looping, ms(1234)), 1.0);
    }

    // ── effect / state ────────────────────────────────────────────────────

    #[test]
    fn default_effect_has_fill_only() {
        let phase = ShimmerEffect::default().phase(ms(100));
        assert!(phase.fill_progress.is_some());
        assert!(phase.border_progress.is_none());
    }

    #[test]
    fn fill_and_border_clock_independently() {
        let effect = ShimmerEffect {
            fill: Some(FillShimmer {
                loop_spec: linear(RepeatMode::Reverse),
                ..FillShimmer::default()
            }),
            border: Some(BorderShimmer {
                loop_spec: linear(RepeatMode::Restart),
                ..BorderShimmer::new(vec![Color::amber()])
            }),
        };
        let phase = effect.phase(ms(1500));
        assert!(approx(phase.fill_progress.unwrap(), 0.5));
        assert!(approx(phase.border_progress.unwrap(), 0.5));
        let phase = effect.phase(ms(1800));
        assert!(approx(phase.fill_progress.unwrap(), 0.2));
        assert!(approx(phase.border_progress.unwrap(), 0.8));
    }

    #[test]
    fn state_measures_from_origin() {
        let t0 = Instant::now();
        let state = ShimmerState::new(
            ShimmerEffect {
                fill: Some(FillShimmer {
                    loop_spec: linear(RepeatMode::Restart),
                    ..FillShimmer::default()
                }),
                border: None,
            },
            t0,
        );
        assert!(approx(state.phase_at(t0 + ms(300)).fill_progress.unwrap(), 0.3));
        // Instants before the origin read as the origin itself.
        assert_eq!(state.phase_at(t0).fill_progress, Some(0.0));
    }

    #[test]
    fn from_color_builds_alpha_ramp() {
        let f = FillShimmer::from_color(Color::from_rgb_hex(0x4CAF50));
        let alphas: Vec<f32> = f.colors.iter().map(|c| c.a).collect();
        assert!(approx(alphas[0], 0.9) && approx(alphas[1], 0.3) && approx(alphas[2], 0.9));
    }

    // ── bands ─────────────────────────────────────────────────────────────

    #[test]
    fn fill_band_trails_by_one_item() {
        let band = fill_band(100.0, 40.0, 0.5);
        assert_eq!(band.start, Vec2::splat(10.0));
        assert_eq!(band.end, Vec2::splat(50.0));
    }

    #[test]
    fn border_band_sweeps_whole_bar() {
        let band = border_band(200.0, 40.0, 1.0);
        assert_eq!(band.end, Vec2::splat(200.0));
        assert_eq!(band.translate(Vec2::new(5.0, 5.0)).start, Vec2::splat(165.0));
    }
}
