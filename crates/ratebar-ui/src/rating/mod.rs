//! Rating engine: quantization, pointer mapping, fill geometry, motion and
//! shimmer.
//!
//! Everything here except [`motion`] is pure. The controller owns the only
//! mutable state and takes time as an argument, so the whole engine runs
//! without a window or a real clock.

pub mod composite;
pub mod config;
pub mod easing;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod interval;
pub mod motion;
pub mod shimmer;

pub use composite::RatingPaint;
pub use config::{GestureMode, RateChangeStrategy, RatingBarConfig, RatingBarConfigBuilder};
pub use easing::Easing;
pub use error::RatingError;
pub use fill::{compute_fill, FillGeometry, RatingFrame};
pub use geometry::{item_intervals, position_to_rating, resolve_layout, ItemLayout};
pub use interval::{quantize, RatingInterval};
pub use motion::{MotionState, RatingMotionController, TickStatus, TransitionId};
pub use shimmer::{
    oscillate, BorderShimmer, FillShimmer, GradientBand, LoopSpec, RepeatMode, ShimmerEffect,
    ShimmerPhase, ShimmerState,
};
