//! Swipe gestures for list rows.
//!
//! [`SwipeController`] turns raw pointer events on a list into per-row
//! horizontal swipes. A swipe that passes the touch slop resolves to an
//! action (reveal, dismiss or check); on release the distance and fling
//! rules decide whether it commits, and the controller animates the row and
//! reports the result to a [`SwipeListener`]. Dismissals that overlap in time
//! are reported as a single batch, highest row first.
//!
//! The hosting list implements [`ListContainer`] and [`ViewProperties`] and
//! calls [`SwipeController::on_frame`] once per frame to drive animations.

mod config;
mod controller;
mod coordinator;
mod error;
mod host;
mod row_state;
mod session;

pub use config::{Side, SwipeAction, SwipeConfig, SwipeMode};
pub use controller::SwipeController;
pub use error::SwipeError;
pub use host::{ListContainer, RowViews, ScrollState, SwipeListener, ViewId, ViewProperties};
pub use row_state::{RowState, RowStateTable};
pub use session::{CommitDecision, SessionState};

pub use swipelist_animation::Easing;
pub use swipelist_foundation::{
    Point, PointerEvent, PointerEventKind, Rect, Size, ViewConfiguration,
};

pub mod prelude {
    pub use crate::config::{Side, SwipeAction, SwipeConfig, SwipeMode};
    pub use crate::controller::SwipeController;
    pub use crate::host::{
        ListContainer, RowViews, ScrollState, SwipeListener, ViewId, ViewProperties,
    };
    pub use crate::session::SessionState;
    pub use swipelist_foundation::prelude::*;
}
