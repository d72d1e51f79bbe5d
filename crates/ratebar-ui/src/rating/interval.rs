/// Granularity a rating is snapped to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RatingInterval {
    /// Whole items only.
    Full,
    /// Whole or half items.
    #[default]
    Half,
    /// Any value in range.
    Unconstrained,
}

/// Raw ratings below this collapse to zero when zero is allowed.
const ZERO_SNAP_THRESHOLD: f32 = 0.1;
/// Floor applied before rounding up when zero is not reachable; makes `ceil`
/// yield at least one item for near-zero input.
const MIN_CLAIM: f32 = 0.001;

impl RatingInterval {
    /// Snaps `raw` to this interval.
    ///
    /// Any positive fraction of an item claims the whole item (`Full`) or the
    /// next half step (`Half`). Values already on a step are returned as-is.
    /// With zero allowed, stepped input below [`ZERO_SNAP_THRESHOLD`] snaps to
    /// `0`. Non-finite input is treated as `0`.
    pub fn quantize(self, raw: f32, allow_zero: bool) -> f32 {
        let raw = if raw.is_finite() { raw } else { 0.0 };
        if self != RatingInterval::Unconstrained && allow_zero && raw < ZERO_SNAP_THRESHOLD {
            return 0.0;
        }

        match self {
            RatingInterval::Unconstrained => raw,
            RatingInterval::Full => raw.max(MIN_CLAIM).ceil(),
            RatingInterval::Half => {
                let whole = raw.floor();
                let carry = raw - whole;
                let stepped = if carry == 0.0 || carry == 0.5 {
                    raw
                } else if carry < 0.5 {
                    whole + 0.5
                } else {
                    raw.max(MIN_CLAIM).ceil()
                };
                if !allow_zero && stepped <= 0.0 { 0.5 } else { stepped }
            }
        }
    }

    /// [`quantize`](Self::quantize) with input and output clamped to `[0, item_count]`.
    pub fn quantize_in_range(self, raw: f32, allow_zero: bool, item_count: usize) -> f32 {
        let max = item_count as f32;
        let clamped = if raw.is_finite() { raw.clamp(0.0, max) } else { 0.0 };
        if clamped != raw {
            log::trace!("rating {raw} out of range [0, {max}], clamped to {clamped}");
        }
        self.quantize(clamped, allow_zero).clamp(0.0, max)
    }
}

/// Free-function form of [`RatingInterval::quantize`].
#[inline]
pub fn quantize(raw: f32, interval: RatingInterval, allow_zero: bool) -> f32 {
    interval.quantize(raw, allow_zero)
}
