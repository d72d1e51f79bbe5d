//! Time subsystem.
//!
//! Frame timing without coupling to any runtime:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - `tick_at()` lets tests and headless hosts drive time explicitly

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
