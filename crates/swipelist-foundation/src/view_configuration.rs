//! Platform gesture constants for touch handling.
//!
//! Values are in logical pixels and milliseconds and match common platform
//! conventions for a baseline density. Hosts running on dense screens should
//! scale the pixel values with [`ViewConfiguration::scaled`].

/// Distance a pointer must travel before a drag is recognised.
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum velocity (px/sec) for a release to count as a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum velocity (px/sec) accepted as a fling.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Duration of short UI animations.
pub const SHORT_ANIMATION_MILLIS: u64 = 200;

/// Hold duration before a press becomes a long press.
pub const LONG_PRESS_TIMEOUT_MILLIS: i64 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub short_animation_millis: u64,
    pub long_press_timeout_millis: i64,
}

impl ViewConfiguration {
    /// Scales the pixel-based thresholds by a display density factor.
    pub fn scaled(density: f32) -> Self {
        let base = Self::default();
        Self {
            touch_slop: base.touch_slop * density,
            min_fling_velocity: base.min_fling_velocity * density,
            max_fling_velocity: base.max_fling_velocity * density,
            ..base
        }
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            short_animation_millis: SHORT_ANIMATION_MILLIS,
            long_press_timeout_millis: LONG_PRESS_TIMEOUT_MILLIS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_keeps_time_values() {
        let config = ViewConfiguration::scaled(2.0);
        assert_eq!(config.touch_slop, 16.0);
        assert_eq!(config.max_fling_velocity, 16_000.0);
        assert_eq!(config.short_animation_millis, SHORT_ANIMATION_MILLIS);
        assert_eq!(config.long_press_timeout_millis, LONG_PRESS_TIMEOUT_MILLIS);
    }
}
