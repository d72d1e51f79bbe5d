//! ratebar engine crate.
//!
//! Renderer-agnostic primitives shared by the widget layer and by whatever
//! backend ends up turning a `DrawList` into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
