//! Paint model shared between the widget layer and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, gradients)
//! - blend modes used by masked composites
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}

/// How a draw command combines with what is already in the current layer.
///
/// Only the Porter-Duff modes the rating composite relies on are modelled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// Source drawn over destination (normal painting).
    #[default]
    SrcOver,
    /// Source kept only where the destination already has coverage; the
    /// destination is replaced inside the source's area. Drawing a transparent
    /// rect with `SrcIn` clears that area of the layer.
    SrcIn,
}
