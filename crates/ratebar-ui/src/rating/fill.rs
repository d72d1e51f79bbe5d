use super::geometry::ItemLayout;
use super::shimmer::ShimmerPhase;

/// Draw extents for one rating value.
///
/// All positions are local to the bar's left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FillGeometry {
    /// Rating the extents were computed for, after clamping.
    pub rating: f32,
    pub item_extent: f32,
    /// Width of the region in which filled glyphs remain visible.
    pub filled_width: f32,
    /// Cut line: everything from here to `total_width` shows empty glyphs only.
    pub empty_region_start: f32,
    pub empty_region_width: f32,
    pub total_width: f32,
    /// Left edge of every item, `i · (extent + spacing)`.
    pub item_origins: Vec<f32>,
}

/// Computes the fill extents for `rating`.
///
/// The filled region covers whole items plus the gaps they consumed, then the
/// fractional part of the current item: `rating·w + floor(rating)·s`. It is
/// capped at the bar width so a full bar does not run past its last item.
pub fn compute_fill(rating: f32, item_count: usize, item_width: f32, spacing: f32) -> FillGeometry {
    let layout = ItemLayout::new(item_width, spacing, item_count);
    let max = item_count as f32;
    let rating = if rating.is_finite() { rating.clamp(0.0, max) } else { 0.0 };

    let total_width = layout.total_width();
    let filled_width =
        (rating * layout.extent + rating.floor() * layout.spacing).min(total_width);

    FillGeometry {
        rating,
        item_extent: layout.extent,
        filled_width,
        empty_region_start: filled_width,
        empty_region_width: (total_width - filled_width).max(0.0),
        total_width,
        item_origins: (0..item_count).map(|i| layout.item_origin(i)).collect(),
    }
}

impl ItemLayout {
    /// [`compute_fill`] for this layout.
    #[inline]
    pub fn fill(&self, rating: f32) -> FillGeometry {
        compute_fill(rating, self.item_count, self.extent, self.spacing)
    }
}

/// Everything a renderer needs for one frame of a rating bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingFrame {
    pub geometry: FillGeometry,
    pub shimmer: Option<ShimmerPhase>,
}
