//! Seams between the controller and the widget hosting it.

use crate::config::Side;
use swipelist_foundation::{Point, PointerEvent, Rect};

/// Opaque handle of a view owned by the host.
pub type ViewId = u64;

/// Views making up one laid-out row. `parent` is the whole row; `front`
/// slides aside to reveal `back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowViews {
    pub parent: ViewId,
    pub front: ViewId,
    pub back: Option<ViewId>,
}

/// Scroll state reported by the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    TouchScroll,
    Fling,
}

/// The scrollable list the controller is attached to.
///
/// Child indices count laid-out children from the first visible row;
/// positions are adapter positions.
pub trait ListContainer {
    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> Option<RowViews>;

    /// Bounds of a child in list-local coordinates.
    fn child_hit_rect(&self, index: usize) -> Rect;

    /// Top-left corner of the list in screen coordinates.
    fn location_on_screen(&self) -> Point;

    fn first_visible_position(&self) -> usize;

    fn last_visible_position(&self) -> usize;

    fn position_for_view(&self, view: ViewId) -> Option<usize>;

    /// Zero until the list has been laid out.
    fn width(&self) -> f32;

    /// Number of rows the adapter reports.
    fn item_count(&self) -> usize;

    fn request_disallow_intercept_touch_event(&mut self, disallow: bool);

    /// Feeds an event to the list's own touch handling.
    fn dispatch_touch_event(&mut self, event: &PointerEvent);

    /// Releases the list's scroll/interaction lock after a swipe settles.
    fn reset_scrolling(&mut self);
}

/// Visual properties the controller animates.
pub trait ViewProperties {
    fn translation_x(&self, view: ViewId) -> f32;

    fn set_translation_x(&mut self, view: ViewId, value: f32);

    fn alpha(&self, view: ViewId) -> f32;

    fn set_alpha(&mut self, view: ViewId, value: f32);

    /// Current layout height.
    fn height(&self, view: ViewId) -> f32;

    fn set_height(&mut self, view: ViewId, value: f32);

    /// Whether `point` (screen coordinates) lands on `view` as currently drawn.
    fn hit_test(&self, view: ViewId, point: Point) -> bool;
}

/// Callbacks to the list owner. All methods default to no-ops.
#[allow(unused_variables)]
pub trait SwipeListener {
    fn on_opened(&mut self, row: usize, side: Side) {}

    fn on_closed(&mut self, row: usize, side: Side) {}

    fn on_click_front_view(&mut self, row: usize) {}

    fn on_click_back_view(&mut self, row: usize) {}

    /// Live horizontal translation of a swiping row.
    fn on_move(&mut self, row: usize, delta_x: f32) {}

    /// Rows removed by dismiss gestures, highest position first.
    fn on_dismiss(&mut self, rows: &[usize]) {}

    fn on_choice_changed(&mut self, row: usize, checked: bool) {}
}

impl SwipeListener for () {}
