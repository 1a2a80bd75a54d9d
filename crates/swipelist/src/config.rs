//! Controller configuration.
//!
//! Every setting may change at any time; a running gesture keeps reading the
//! live values, so changes take effect on the next pointer event.

use swipelist_animation::{AnimationSpec, Easing};
use swipelist_foundation::ViewConfiguration;

/// Directions in which a row may start a swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeMode {
    None,
    Left,
    Right,
    #[default]
    Both,
}

impl SwipeMode {
    /// Magnitude of `delta_x` that counts towards the touch slop for a row
    /// that is open (`row_open`) or closed. Movement the mode forbids reads
    /// as zero.
    pub fn filter_displacement(self, delta_x: f32, row_open: bool) -> f32 {
        let blocked = match self {
            SwipeMode::None => true,
            SwipeMode::Both => false,
            SwipeMode::Left if row_open => delta_x < 0.0,
            SwipeMode::Left => delta_x > 0.0,
            SwipeMode::Right if row_open => delta_x > 0.0,
            SwipeMode::Right => delta_x < 0.0,
        };
        if blocked {
            0.0
        } else {
            delta_x.abs()
        }
    }

    /// Release velocity magnitude. A closed row flung in a forbidden
    /// direction reads as not moving at all.
    pub fn filter_release_velocity(self, velocity_x: f32, row_open: bool) -> f32 {
        let blocked = !row_open
            && match self {
                SwipeMode::Left => velocity_x > 0.0,
                SwipeMode::Right => velocity_x < 0.0,
                SwipeMode::None | SwipeMode::Both => false,
            };
        if blocked {
            0.0
        } else {
            velocity_x.abs()
        }
    }
}

/// What a swipe does once it commits. Bound per direction in
/// [`SwipeConfig`] and also used as the resolved action of a running swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeAction {
    None,
    #[default]
    Reveal,
    Dismiss,
    Check,
}

/// Side a row is opened to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_right(right: bool) -> Self {
        if right {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn is_right(self) -> bool {
        self == Side::Right
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub swipe_mode: SwipeMode,
    pub action_left: SwipeAction,
    pub action_right: SwipeAction,
    pub open_on_long_press: bool,
    pub close_all_on_list_scroll: bool,
    /// Pixels of the front view left visible when opened to the left.
    pub offset_left: f32,
    /// Pixels of the front view left visible when opened to the right.
    pub offset_right: f32,
    /// `None` uses the platform's short animation time.
    pub animation_time_millis: Option<u64>,
    pub easing: Easing,
}

impl SwipeConfig {
    pub fn with_swipe_mode(mut self, mode: SwipeMode) -> Self {
        self.swipe_mode = mode;
        self
    }

    pub fn with_action_left(mut self, action: SwipeAction) -> Self {
        self.action_left = action;
        self
    }

    pub fn with_action_right(mut self, action: SwipeAction) -> Self {
        self.action_right = action;
        self
    }

    pub fn with_open_on_long_press(mut self, enabled: bool) -> Self {
        self.open_on_long_press = enabled;
        self
    }

    pub fn with_close_all_on_list_scroll(mut self, enabled: bool) -> Self {
        self.close_all_on_list_scroll = enabled;
        self
    }

    pub fn with_offsets(mut self, left: f32, right: f32) -> Self {
        self.offset_left = left;
        self.offset_right = right;
        self
    }

    /// Non-positive values fall back to the platform default.
    pub fn with_animation_time(mut self, millis: i64) -> Self {
        self.animation_time_millis = u64::try_from(millis).ok().filter(|m| *m > 0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Binding for a swipe in the given direction.
    pub fn action_for(&self, swiping_right: bool) -> SwipeAction {
        if swiping_right {
            self.action_right
        } else {
            self.action_left
        }
    }

    pub fn animation_millis(&self, platform: &ViewConfiguration) -> u64 {
        self.animation_time_millis
            .unwrap_or(platform.short_animation_millis)
    }

    pub fn animation_spec(&self, platform: &ViewConfiguration) -> AnimationSpec {
        AnimationSpec::tween(self.animation_millis(platform), self.easing)
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_mode: SwipeMode::Both,
            action_left: SwipeAction::Reveal,
            action_right: SwipeAction::Reveal,
            open_on_long_press: true,
            close_all_on_list_scroll: true,
            offset_left: 0.0,
            offset_right: 0.0,
            animation_time_millis: None,
            easing: Easing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_mode_blocks_everything() {
        assert_eq!(SwipeMode::None.filter_displacement(50.0, false), 0.0);
        assert_eq!(SwipeMode::None.filter_displacement(-50.0, true), 0.0);
    }

    #[test]
    fn left_mode_blocks_rightward_drag_on_closed_row() {
        assert_eq!(SwipeMode::Left.filter_displacement(40.0, false), 0.0);
        assert_eq!(SwipeMode::Left.filter_displacement(-40.0, false), 40.0);
        // An open-left row closes by moving right.
        assert_eq!(SwipeMode::Left.filter_displacement(40.0, true), 40.0);
        assert_eq!(SwipeMode::Left.filter_displacement(-40.0, true), 0.0);
    }

    #[test]
    fn right_mode_mirrors_left_mode() {
        assert_eq!(SwipeMode::Right.filter_displacement(-40.0, false), 0.0);
        assert_eq!(SwipeMode::Right.filter_displacement(40.0, false), 40.0);
        assert_eq!(SwipeMode::Right.filter_displacement(-40.0, true), 40.0);
        assert_eq!(SwipeMode::Right.filter_displacement(40.0, true), 0.0);
    }

    #[test]
    fn release_velocity_filter_only_applies_to_closed_rows() {
        assert_eq!(SwipeMode::Left.filter_release_velocity(900.0, false), 0.0);
        assert_eq!(SwipeMode::Left.filter_release_velocity(900.0, true), 900.0);
        assert_eq!(SwipeMode::Right.filter_release_velocity(-900.0, false), 0.0);
        assert_eq!(SwipeMode::Both.filter_release_velocity(-900.0, false), 900.0);
    }

    #[test]
    fn non_positive_animation_time_restores_platform_default() {
        let platform = ViewConfiguration::default();
        let config = SwipeConfig::default().with_animation_time(450);
        assert_eq!(config.animation_millis(&platform), 450);

        let config = config.with_animation_time(0);
        assert_eq!(config.animation_millis(&platform), platform.short_animation_millis);

        let config = config.with_animation_time(-20);
        assert_eq!(config.animation_millis(&platform), platform.short_animation_millis);
    }

    #[test]
    fn action_for_picks_direction_binding() {
        let config = SwipeConfig::default()
            .with_action_left(SwipeAction::Dismiss)
            .with_action_right(SwipeAction::Check);
        assert_eq!(config.action_for(false), SwipeAction::Dismiss);
        assert_eq!(config.action_for(true), SwipeAction::Check);
    }
}
