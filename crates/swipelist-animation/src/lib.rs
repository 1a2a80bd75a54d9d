//! Animation support for SwipeList.
//!
//! Tweens are advanced by the host's frame loop; nothing here owns a timer or
//! a thread. Completed animations are reported back to the caller so it can
//! run follow-up work on the same loop.

mod animation;
mod property_animator;

pub use animation::*;
pub use property_animator::*;
