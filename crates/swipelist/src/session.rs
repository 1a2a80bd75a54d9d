//! Per-touch gesture state and the pure decision rules driving it.

use crate::config::{Side, SwipeAction, SwipeConfig};
use crate::host::RowViews;
use swipelist_foundation::{Point, VelocityTracker, ViewConfiguration};

/// State of one pointer-down..pointer-up sequence on a row.
pub(crate) struct Touch {
    pub row: usize,
    pub views: RowViews,
    pub origin: Point,
    pub down_time_millis: i64,
    /// Open state of the row when the pointer went down. Direction filtering
    /// and the live translation offset read this snapshot for the whole
    /// gesture.
    pub was_open: bool,
    pub open_side: Side,
    pub velocity: VelocityTracker,
    pub front_clickable: bool,
    pub moved_beyond_slop: bool,
    pub long_press_fired: bool,
}

#[derive(Default)]
pub(crate) enum Session {
    #[default]
    Idle,
    Armed(Touch),
    Swiping {
        touch: Touch,
        action: SwipeAction,
    },
}

impl Session {
    pub fn state(&self) -> SessionState {
        match self {
            Session::Idle => SessionState::Idle,
            Session::Armed(_) => SessionState::Armed,
            Session::Swiping { .. } => SessionState::Swiping,
        }
    }
}

/// Observable phase of the current touch session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No row under the pointer.
    Idle,
    /// A row is targeted but the drag has not passed the touch slop.
    Armed,
    /// The row follows the pointer.
    Swiping,
}

/// Action a swipe resolves to at the moment it passes the touch slop.
///
/// An open row can only be swiped closed. A closed row uses the binding for
/// the drag direction; anything but dismiss or check reveals.
pub(crate) fn resolve_action(was_open: bool, swiping_right: bool, config: &SwipeConfig) -> SwipeAction {
    if was_open {
        return SwipeAction::Reveal;
    }
    match config.action_for(swiping_right) {
        SwipeAction::Dismiss => SwipeAction::Dismiss,
        SwipeAction::Check => SwipeAction::Check,
        SwipeAction::None | SwipeAction::Reveal => SwipeAction::Reveal,
    }
}

/// Outcome of a released swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitDecision {
    /// The row changes state (opens, closes, toggles or is dismissed).
    pub swap: bool,
    /// Direction of the change; only meaningful with `swap`.
    pub swap_right: bool,
}

impl CommitDecision {
    pub const CANCEL: CommitDecision = CommitDecision {
        swap: false,
        swap_right: false,
    };
}

/// Applies the distance rule, then the fling rule.
///
/// `velocity_x` is the signed horizontal velocity, `allowed_velocity_x` its
/// magnitude after swipe-mode filtering and `velocity_y` the vertical
/// magnitude, all in px/second.
pub(crate) fn decide_commit(
    delta_x: f32,
    velocity_x: f32,
    allowed_velocity_x: f32,
    velocity_y: f32,
    view_width: f32,
    platform: &ViewConfiguration,
) -> CommitDecision {
    if delta_x.abs() > view_width / 2.0 {
        return CommitDecision {
            swap: true,
            swap_right: delta_x > 0.0,
        };
    }
    let flung = platform.min_fling_velocity <= allowed_velocity_x
        && allowed_velocity_x <= platform.max_fling_velocity
        && velocity_y < allowed_velocity_x;
    if flung {
        CommitDecision {
            swap: true,
            swap_right: velocity_x > 0.0,
        }
    } else {
        CommitDecision::CANCEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> ViewConfiguration {
        ViewConfiguration::default()
    }

    #[test]
    fn open_rows_always_reveal() {
        let config = SwipeConfig::default().with_action_left(SwipeAction::Dismiss);
        assert_eq!(resolve_action(true, false, &config), SwipeAction::Reveal);
        assert_eq!(resolve_action(false, false, &config), SwipeAction::Dismiss);
    }

    #[test]
    fn none_binding_falls_back_to_reveal() {
        let config = SwipeConfig::default()
            .with_action_right(SwipeAction::None)
            .with_action_left(SwipeAction::Check);
        assert_eq!(resolve_action(false, true, &config), SwipeAction::Reveal);
        assert_eq!(resolve_action(false, false, &config), SwipeAction::Check);
    }

    #[test]
    fn distance_rule_commits_past_half_width() {
        let decision = decide_commit(-241.0, 0.0, 0.0, 0.0, 480.0, &platform());
        assert_eq!(
            decision,
            CommitDecision {
                swap: true,
                swap_right: false
            }
        );
        assert_eq!(
            decide_commit(240.0, 0.0, 0.0, 0.0, 480.0, &platform()),
            CommitDecision::CANCEL
        );
    }

    #[test]
    fn fling_rule_uses_velocity_sign() {
        // Dragged left a little, then flicked right.
        let decision = decide_commit(-30.0, 1200.0, 1200.0, 10.0, 480.0, &platform());
        assert_eq!(
            decision,
            CommitDecision {
                swap: true,
                swap_right: true
            }
        );
    }

    #[test]
    fn fling_rule_rejects_vertical_and_out_of_range_velocities() {
        let p = platform();
        assert_eq!(
            decide_commit(30.0, 1200.0, 1200.0, 1300.0, 480.0, &p),
            CommitDecision::CANCEL
        );
        assert_eq!(
            decide_commit(30.0, 20.0, 20.0, 0.0, 480.0, &p),
            CommitDecision::CANCEL
        );
        assert_eq!(
            decide_commit(30.0, 9000.0, 9000.0, 0.0, 480.0, &p),
            CommitDecision::CANCEL
        );
        // Filtered to zero by the swipe mode.
        assert_eq!(
            decide_commit(30.0, 1200.0, 0.0, 0.0, 480.0, &p),
            CommitDecision::CANCEL
        );
    }
}
