//! Robot-style driver for swipe gestures.
//!
//! The robot owns a controller over a [`FakeList`] and a virtual clock.
//! Every pointer event it sends is stamped with that clock and followed by a
//! frame, so animations started by one gesture keep running while the next
//! one is performed.
//!
//! ```
//! use swipelist_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::with_rows(5);
//! robot.swipe(2, -300.0);
//! robot.settle();
//! assert!(robot.controller().row_state(2).opened);
//! ```

use crate::fake_list::FakeList;
use crate::recording_listener::{RecordingListener, SwipeEvent};
use swipelist::{SwipeConfig, SwipeController};
use swipelist_foundation::{Point, PointerEvent, ViewConfiguration};

/// Interval between simulated frames and pointer samples.
pub const FRAME_MILLIS: i64 = 16;

/// Pause before a slow release; longer than the velocity tracker's
/// stop detection, so the release carries no fling.
pub const SETTLE_PAUSE_MILLIS: i64 = 60;

const MAX_SETTLE_FRAMES: usize = 500;

pub struct GestureRobot {
    controller: SwipeController<FakeList, RecordingListener>,
    now_millis: i64,
    pointer: Option<Point>,
}

impl GestureRobot {
    pub fn new(controller: SwipeController<FakeList, RecordingListener>) -> Self {
        Self {
            controller,
            now_millis: 1_000,
            pointer: None,
        }
    }

    pub fn with_rows(rows: usize) -> Self {
        Self::with_config(FakeList::new(rows), SwipeConfig::default())
    }

    pub fn with_config(list: FakeList, config: SwipeConfig) -> Self {
        Self::new(SwipeController::with_config(
            list,
            RecordingListener::new(),
            config,
            ViewConfiguration::default(),
        ))
    }

    pub fn controller(&self) -> &SwipeController<FakeList, RecordingListener> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<FakeList, RecordingListener> {
        &mut self.controller
    }

    pub fn list(&self) -> &FakeList {
        self.controller.host()
    }

    pub fn list_mut(&mut self) -> &mut FakeList {
        self.controller.host_mut()
    }

    pub fn events(&self) -> &[SwipeEvent] {
        self.controller.listener().events()
    }

    pub fn outcomes(&self) -> Vec<SwipeEvent> {
        self.controller.listener().outcomes()
    }

    pub fn now_millis(&self) -> i64 {
        self.now_millis
    }

    /// Presses the centre of `row`. Returns whether the controller consumed
    /// the event; rows that are not laid out are pressed below the list.
    pub fn press(&mut self, row: usize) -> bool {
        let point = self.list().row_center(row).unwrap_or(Point::new(
            1.0,
            self.list().row_height() * 1_000.0,
        ));
        self.press_at(point)
    }

    pub fn press_at(&mut self, point: Point) -> bool {
        self.pointer = Some(point);
        let event = PointerEvent::down(point.x, point.y, self.now_millis);
        self.controller.on_touch(&event)
    }

    /// Moves the pointer by `(dx, dy)` after one frame interval.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        let Some(point) = self.pointer else {
            return false;
        };
        self.advance_frames(FRAME_MILLIS);
        let point = Point::new(point.x + dx, point.y + dy);
        self.pointer = Some(point);
        let event = PointerEvent::moved(point.x, point.y, self.now_millis);
        self.controller.on_touch(&event)
    }

    /// Releases after `delay_millis`, optionally moving by `dx` on release.
    pub fn release_after(&mut self, delay_millis: i64, dx: f32) -> bool {
        let Some(point) = self.pointer.take() else {
            return false;
        };
        self.advance_frames(delay_millis);
        let event = PointerEvent::up(point.x + dx, point.y, self.now_millis);
        self.controller.on_touch(&event)
    }

    pub fn release(&mut self) -> bool {
        self.release_after(SETTLE_PAUSE_MILLIS, 0.0)
    }

    pub fn cancel(&mut self) -> bool {
        let Some(point) = self.pointer.take() else {
            return false;
        };
        let event = PointerEvent::down(point.x, point.y, self.now_millis).to_cancel();
        self.controller.on_touch(&event)
    }

    /// Drags `row` by `dx` in ten frames, pauses, then releases without fling.
    pub fn swipe(&mut self, row: usize, dx: f32) {
        self.press(row);
        let step = dx / 10.0;
        for _ in 0..10 {
            self.move_by(step, 0.0);
        }
        self.release();
    }

    /// Quick flick of `dx` over three frames, released while still moving.
    pub fn fling(&mut self, row: usize, dx: f32) {
        self.press(row);
        let step = dx / 4.0;
        for _ in 0..3 {
            self.move_by(step, 0.0);
        }
        self.release_after(FRAME_MILLIS, step);
    }

    pub fn tap(&mut self, row: usize) -> bool {
        self.press(row);
        self.release_after(50, 0.0)
    }

    pub fn tap_at(&mut self, point: Point) -> bool {
        self.press_at(point);
        self.release_after(50, 0.0)
    }

    /// Holds `row` for `hold_millis` while frames run, then releases.
    pub fn long_press(&mut self, row: usize, hold_millis: i64) -> bool {
        self.press(row);
        self.release_after(hold_millis, 0.0)
    }

    /// Runs frames for `millis` of virtual time.
    pub fn advance_frames(&mut self, millis: i64) {
        let target = self.now_millis + millis;
        while self.now_millis < target {
            self.now_millis = (self.now_millis + FRAME_MILLIS).min(target);
            self.frame();
        }
    }

    /// Runs frames until no animation is left.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.controller.is_animating() {
                return;
            }
            self.now_millis += FRAME_MILLIS;
            self.frame();
        }
        log::warn!("animations still running after {MAX_SETTLE_FRAMES} frames");
    }

    fn frame(&mut self) {
        self.controller.on_frame(self.now_millis as u64 * 1_000_000);
    }
}
