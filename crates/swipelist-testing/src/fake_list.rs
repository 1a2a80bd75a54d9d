//! Headless list host.

use rustc_hash::FxHashMap;
use swipelist::{ListContainer, RowViews, ViewId, ViewProperties};
use swipelist_foundation::{Point, PointerEvent, PointerEventKind, Rect};

pub const DEFAULT_WIDTH: f32 = 480.0;
pub const DEFAULT_ROW_HEIGHT: f32 = 100.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewProps {
    pub translation_x: f32,
    pub alpha: f32,
    pub height: f32,
}

/// A vertically stacked list of fixed-height rows.
///
/// Row `n` owns views `3n` (parent), `3n + 1` (front) and `3n + 2` (back).
/// Only the rows that fit into the viewport starting at
/// `first_visible` are laid out. Calls the controller makes on the list are
/// recorded for assertions.
pub struct FakeList {
    width: f32,
    row_height: f32,
    viewport_height: f32,
    origin: Point,
    item_count: usize,
    first_visible: usize,
    with_back_views: bool,
    props: FxHashMap<ViewId, ViewProps>,
    pub disallow_intercept_calls: Vec<bool>,
    pub dispatched: Vec<PointerEventKind>,
    pub reset_scrolling_calls: usize,
}

impl FakeList {
    pub fn new(item_count: usize) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            origin: Point::ZERO,
            item_count,
            first_visible: 0,
            with_back_views: true,
            props: FxHashMap::default(),
            disallow_intercept_calls: Vec::new(),
            dispatched: Vec::new(),
            reset_scrolling_calls: 0,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn without_back_views(mut self) -> Self {
        self.with_back_views = false;
        self
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn scroll_to(&mut self, first_visible: usize) {
        self.first_visible = first_visible.min(self.item_count.saturating_sub(1));
    }

    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }

    /// Removes rows the way an owner reacting to a dismissal would.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        self.item_count = self.item_count.saturating_sub(rows.len());
    }

    pub fn visible_count(&self) -> usize {
        let fits = (self.viewport_height / self.row_height).floor() as usize;
        fits.min(self.item_count.saturating_sub(self.first_visible))
    }

    pub fn row_views(&self, row: usize) -> RowViews {
        let parent = row as ViewId * 3;
        RowViews {
            parent,
            front: parent + 1,
            back: self.with_back_views.then_some(parent + 2),
        }
    }

    /// Screen-space centre of a row, if it is laid out.
    pub fn row_center(&self, row: usize) -> Option<Point> {
        let index = row.checked_sub(self.first_visible)?;
        if index >= self.visible_count() {
            return None;
        }
        let rect = self.child_hit_rect(index);
        Some(Point::new(
            self.origin.x + rect.x + rect.width / 2.0,
            self.origin.y + rect.y + rect.height / 2.0,
        ))
    }

    pub fn props(&self, view: ViewId) -> ViewProps {
        self.props.get(&view).copied().unwrap_or(ViewProps {
            translation_x: 0.0,
            alpha: 1.0,
            height: self.row_height,
        })
    }

    fn props_mut(&mut self, view: ViewId) -> &mut ViewProps {
        let default = self.props(view);
        self.props.entry(view).or_insert(default)
    }

    fn row_of(view: ViewId) -> usize {
        (view / 3) as usize
    }
}

impl ListContainer for FakeList {
    fn child_count(&self) -> usize {
        self.visible_count()
    }

    fn child_at(&self, index: usize) -> Option<RowViews> {
        (index < self.visible_count()).then(|| self.row_views(self.first_visible + index))
    }

    fn child_hit_rect(&self, index: usize) -> Rect {
        Rect::new(0.0, index as f32 * self.row_height, self.width, self.row_height)
    }

    fn location_on_screen(&self) -> Point {
        self.origin
    }

    fn first_visible_position(&self) -> usize {
        self.first_visible
    }

    fn last_visible_position(&self) -> usize {
        (self.first_visible + self.visible_count()).saturating_sub(1)
    }

    fn position_for_view(&self, view: ViewId) -> Option<usize> {
        let row = Self::row_of(view);
        (row < self.item_count).then_some(row)
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn request_disallow_intercept_touch_event(&mut self, disallow: bool) {
        self.disallow_intercept_calls.push(disallow);
    }

    fn dispatch_touch_event(&mut self, event: &PointerEvent) {
        self.dispatched.push(event.kind);
    }

    fn reset_scrolling(&mut self) {
        self.reset_scrolling_calls += 1;
    }
}

impl ViewProperties for FakeList {
    fn translation_x(&self, view: ViewId) -> f32 {
        self.props(view).translation_x
    }

    fn set_translation_x(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).translation_x = value;
    }

    fn alpha(&self, view: ViewId) -> f32 {
        self.props(view).alpha
    }

    fn set_alpha(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).alpha = value;
    }

    fn height(&self, view: ViewId) -> f32 {
        self.props(view).height
    }

    fn set_height(&mut self, view: ViewId, value: f32) {
        self.props_mut(view).height = value;
    }

    fn hit_test(&self, view: ViewId, point: Point) -> bool {
        let row = Self::row_of(view);
        let Some(index) = row.checked_sub(self.first_visible) else {
            return false;
        };
        if index >= self.visible_count() {
            return false;
        }
        let parent = self.row_views(row).parent;
        let mut dx = self.translation_x(parent);
        if view != parent && view % 3 == 1 {
            dx += self.translation_x(view);
        }
        let local = point.relative_to(self.origin);
        self.child_hit_rect(index)
            .translate(dx, 0.0)
            .contains_point(local)
    }
}
