//! ratebar UI: the rating-bar widget on top of `ratebar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ratebar_ui::prelude::*;
//!
//! let config = RatingBarConfig::builder().item_count(5).spacing(4.0).build()?;
//! let mut root: Element = RatingBar::new(config, GlyphPair::stars(), 3.5)?
//!     .on_rating_change_finished(|v| log::info!("rated {v}"))
//!     .into();
//!
//! let mut scene = UiScene::new();
//! let mut clock = FrameClock::new();
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed };
//! let draw_list = scene.frame_ref(&mut root, viewport, &input, clock.tick());
//! // Pass draw_list to your renderer.
//! ```
//!
//! # Custom artwork
//!
//! Anything implementing [`GlyphSource`](glyph::GlyphSource) can be an item:
//! decoded bitmaps ([`BitmapGlyph`](glyph::BitmapGlyph)), SVG documents
//! ([`VectorGlyph`](glyph::VectorGlyph)) or painter closures
//! ([`PainterGlyph`](glyph::PainterGlyph)).

pub mod constraints;
pub mod event;
pub mod glyph;
pub mod painter;
pub mod rating;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to host a rating bar. Import this in your app code.
pub mod prelude {
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::glyph::{BitmapGlyph, GlyphPair, GlyphSource, PainterGlyph, VectorGlyph};
    pub use crate::painter::Painter;
    pub use crate::rating::{
        BorderShimmer, Easing, FillShimmer, GestureMode, LoopSpec, RateChangeStrategy,
        RatingBarConfig, RatingError, RatingFrame, RatingInterval, RepeatMode, ShimmerEffect,
    };
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::rating_bar::RatingBar;

    // Re-export the engine primitives everyone needs.
    pub use ratebar_engine::coords::{Rect, Vec2};
    pub use ratebar_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
    pub use ratebar_engine::scene::shapes::GlyphKey;
    pub use ratebar_engine::time::{FrameClock, FrameTime};
}
