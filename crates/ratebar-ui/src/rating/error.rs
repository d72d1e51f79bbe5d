use thiserror::Error;

/// Configuration errors rejected when a rating bar is built.
///
/// Out-of-range ratings and degenerate container sizes are not errors: they
/// are clamped where they occur.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// A bar needs at least one item.
    #[error("item count must be at least 1, got {0}")]
    InvalidItemCount(usize),

    /// An explicit item extent must be a positive, finite length.
    #[error("item extent must be a positive finite length, got {0}")]
    InvalidItemExtent(f32),
}
