//! Foundation types for SwipeList: geometry, pointer input, velocity tracking
//! and platform gesture constants.

mod geometry;
mod pointer;
pub mod velocity_tracker;
pub mod view_configuration;

pub use geometry::*;
pub use pointer::*;
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};
pub use view_configuration::ViewConfiguration;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::pointer::{EventClock, PointerEvent, PointerEventKind, PointerId};
    pub use crate::velocity_tracker::{Velocity, VelocityTracker};
    pub use crate::view_configuration::ViewConfiguration;
}
