use std::time::Duration;

use super::easing::Easing;
use super::error::RatingError;
use super::interval::RatingInterval;

/// Which pointer gestures may change the rating.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GestureMode {
    /// Drag across the bar and tap on an item.
    #[default]
    DragAndPress,
    /// Tap only; drags are ignored.
    PressOnly,
    /// Read-only bar.
    None,
}

impl GestureMode {
    #[inline]
    pub fn allows_drag(self) -> bool {
        matches!(self, GestureMode::DragAndPress)
    }

    #[inline]
    pub fn allows_press(self) -> bool {
        !matches!(self, GestureMode::None)
    }
}

/// How the displayed rating follows a new target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RateChangeStrategy {
    /// Jump straight to the target.
    Instant,
    /// Interpolate from the displayed value to the target.
    Animated { easing: Easing, duration: Duration },
}

impl RateChangeStrategy {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, RateChangeStrategy::Animated { .. })
    }
}

impl Default for RateChangeStrategy {
    fn default() -> Self {
        RateChangeStrategy::Animated { easing: Easing::Linear, duration: Self::DEFAULT_DURATION }
    }
}

/// Validated rating-bar configuration.
///
/// Built through [`RatingBarConfig::builder`]; fields are read through the
/// getters and never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBarConfig {
    item_count: usize,
    item_extent: Option<f32>,
    spacing: f32,
    interval: RatingInterval,
    allow_zero: bool,
    gesture_mode: GestureMode,
    transition: RateChangeStrategy,
    animate_initial_value: bool,
}

impl Default for RatingBarConfig {
    fn default() -> Self {
        Self {
            item_count: 5,
            item_extent: None,
            spacing: 0.0,
            interval: RatingInterval::default(),
            allow_zero: false,
            gesture_mode: GestureMode::default(),
            transition: RateChangeStrategy::default(),
            animate_initial_value: true,
        }
    }
}

impl RatingBarConfig {
    pub fn builder() -> RatingBarConfigBuilder {
        RatingBarConfigBuilder::default()
    }

    /// Checks the invariants `build()` enforces.
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.item_count == 0 {
            return Err(RatingError::InvalidItemCount(self.item_count));
        }
        if let Some(extent) = self.item_extent {
            if !(extent.is_finite() && extent > 0.0) {
                return Err(RatingError::InvalidItemExtent(extent));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn item_extent(&self) -> Option<f32> {
        self.item_extent
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn interval(&self) -> RatingInterval {
        self.interval
    }

    #[inline]
    pub fn allow_zero(&self) -> bool {
        self.allow_zero
    }

    #[inline]
    pub fn gesture_mode(&self) -> GestureMode {
        self.gesture_mode
    }

    #[inline]
    pub fn transition(&self) -> RateChangeStrategy {
        self.transition
    }

    #[inline]
    pub fn animate_initial_value(&self) -> bool {
        self.animate_initial_value
    }

    /// Quantizes `raw` with this config's interval, zero rule and range.
    #[inline]
    pub fn quantize(&self, raw: f32) -> f32 {
        self.interval.quantize_in_range(raw, self.allow_zero, self.item_count)
    }
}

/// Builder for [`RatingBarConfig`].
#[derive(Debug, Clone, Default)]
pub struct RatingBarConfigBuilder {
    config: RatingBarConfig,
}

impl RatingBarConfigBuilder {
    pub fn item_count(mut self, n: usize) -> Self {
        self.config.item_count = n;
        self
    }

    /// Explicit square edge for every item. Without it the glyph's intrinsic
    /// size is used.
    pub fn item_extent(mut self, extent: f32) -> Self {
        self.config.item_extent = Some(extent);
        self
    }

    /// Gap between items. Negative values are treated as zero.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = if spacing.is_finite() { spacing.max(0.0) } else { 0.0 };
        self
    }

    pub fn interval(mut self, interval: RatingInterval) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn allow_zero(mut self, allow: bool) -> Self {
        self.config.allow_zero = allow;
        self
    }

    pub fn gesture_mode(mut self, mode: GestureMode) -> Self {
        self.config.gesture_mode = mode;
        self
    }

    pub fn transition(mut self, strategy: RateChangeStrategy) -> Self {
        self.config.transition = strategy;
        self
    }

    /// Whether an animated bar mounts at zero and animates to its first value.
    pub fn animate_initial_value(mut self, animate: bool) -> Self {
        self.config.animate_initial_value = animate;
        self
    }

    pub fn build(self) -> Result<RatingBarConfig, RatingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
