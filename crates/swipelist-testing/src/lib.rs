//! Testing utilities for SwipeList
//!
//! [`FakeList`] stands in for a laid-out list, [`RecordingListener`] captures
//! owner callbacks and [`GestureRobot`] drives pointer sequences and frames
//! against a controller built from both.

pub mod fake_list;
pub mod recording_listener;
pub mod robot;

pub use fake_list::*;
pub use recording_listener::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fake_list::FakeList;
    pub use crate::recording_listener::{RecordingListener, SwipeEvent};
    pub use crate::robot::GestureRobot;
}
