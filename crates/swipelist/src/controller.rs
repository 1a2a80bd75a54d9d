//! The swipe gesture controller.
//!
//! One controller serves one list. It is fed raw pointer events through
//! [`SwipeController::on_touch`] and frame ticks through
//! [`SwipeController::on_frame`]; both run on the host's UI loop, so the row
//! table, the running animations and the dismiss batch are never shared.

use crate::config::{Side, SwipeAction, SwipeConfig, SwipeMode};
use crate::coordinator::{
    shift_row, target_translation, Completion, DismissBatch, PendingDismissal, PropertyKey,
    ViewProperty,
};
use crate::error::SwipeError;
use crate::host::{ListContainer, RowViews, ScrollState, SwipeListener, ViewId, ViewProperties};
use crate::row_state::{RowState, RowStateTable};
use crate::session::{decide_commit, resolve_action, CommitDecision, Session, SessionState, Touch};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use swipelist_animation::{AnimationId, Easing, PropertyAnimator, Track};
use swipelist_foundation::{PointerEvent, PointerEventKind, VelocityTracker, ViewConfiguration};

/// Width used until the list reports a real one; keeps ratios finite.
const PLACEHOLDER_WIDTH: f32 = 1.0;

/// Height a dismissed row collapses to before it is reported.
const COLLAPSED_HEIGHT: f32 = 1.0;

pub struct SwipeController<H, L> {
    host: H,
    listener: L,
    config: SwipeConfig,
    platform: ViewConfiguration,
    rows: RowStateTable,
    session: Session,
    view_width: f32,
    paused: bool,
    intercept_disallowed: bool,
    animator: PropertyAnimator<PropertyKey>,
    completions: FxHashMap<AnimationId, Completion>,
    dismissals: DismissBatch,
}

impl<H, L> SwipeController<H, L>
where
    H: ListContainer + ViewProperties,
    L: SwipeListener,
{
    pub fn new(host: H, listener: L) -> Self {
        Self::with_config(host, listener, SwipeConfig::default(), ViewConfiguration::default())
    }

    pub fn with_config(
        host: H,
        listener: L,
        config: SwipeConfig,
        platform: ViewConfiguration,
    ) -> Self {
        let mut controller = Self {
            host,
            listener,
            config,
            platform,
            rows: RowStateTable::new(),
            session: Session::Idle,
            view_width: PLACEHOLDER_WIDTH,
            paused: false,
            intercept_disallowed: false,
            animator: PropertyAnimator::new(),
            completions: FxHashMap::default(),
            dismissals: DismissBatch::default(),
        };
        controller.reset_items();
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    pub fn set_swipe_mode(&mut self, mode: SwipeMode) {
        self.config.swipe_mode = mode;
    }

    pub fn set_swipe_action_left(&mut self, action: SwipeAction) {
        self.config.action_left = action;
    }

    pub fn set_swipe_action_right(&mut self, action: SwipeAction) {
        self.config.action_right = action;
    }

    pub fn set_open_on_long_press(&mut self, enabled: bool) {
        self.config.open_on_long_press = enabled;
    }

    pub fn set_close_all_on_list_scroll(&mut self, enabled: bool) {
        self.config.close_all_on_list_scroll = enabled;
    }

    pub fn set_offset_left(&mut self, offset: f32) {
        self.config.offset_left = offset;
    }

    pub fn set_offset_right(&mut self, offset: f32) {
        self.config.offset_right = offset;
    }

    /// Non-positive values restore the platform default.
    pub fn set_animation_time(&mut self, millis: i64) {
        self.config = self.config.with_animation_time(millis);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
    }

    pub fn animation_time_millis(&self) -> u64 {
        self.config.animation_millis(&self.platform)
    }

    /// A disabled controller ignores new pointer-downs so the list scrolls
    /// natively.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.paused = !enabled;
    }

    pub fn is_enabled(&self) -> bool {
        !self.paused
    }

    pub fn row_state(&self, row: usize) -> RowState {
        self.rows.get(row)
    }

    pub fn rows(&self) -> &RowStateTable {
        &self.rows
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Action of the running swipe, `SwipeAction::None` when not swiping.
    pub fn current_action(&self) -> SwipeAction {
        match &self.session {
            Session::Swiping { action, .. } => *action,
            _ => SwipeAction::None,
        }
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// Dismissals whose slide-out or collapse is still running.
    pub fn dismissals_in_flight(&self) -> usize {
        self.dismissals.in_flight()
    }

    /// Grows the row table to the adapter's current item count.
    pub fn reset_items(&mut self) {
        self.rows.grow_to(self.host.item_count());
    }

    /// Forgets the cached list width; the next event re-reads it.
    pub fn on_size_changed(&mut self) {
        self.view_width = PLACEHOLDER_WIDTH;
    }

    /// Handles a raw pointer event. Returns whether the controller consumed it.
    pub fn on_touch(&mut self, event: &PointerEvent) -> bool {
        self.refresh_width();
        let consumed = match event.kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up => self.pointer_up(event),
            PointerEventKind::Cancel => self.pointer_cancel(),
        };
        if consumed {
            event.consume();
        }
        consumed
    }

    /// Advances animations to `frame_time_nanos` and runs the follow-up work
    /// of every animation that finished. Also fires pending long presses,
    /// so pointer event times and frame times must share a clock.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        self.check_long_press((frame_time_nanos / 1_000_000) as i64);

        let host = &mut self.host;
        let finished = self.animator.advance(frame_time_nanos, |(view, property), value| {
            match property {
                ViewProperty::TranslationX => host.set_translation_x(view, value),
                ViewProperty::Alpha => host.set_alpha(view, value),
                ViewProperty::Height => host.set_height(view, value),
            }
        });

        for id in finished {
            if let Some(completion) = self.completions.remove(&id) {
                self.complete(completion);
            }
        }
    }

    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        self.set_enabled(state != ScrollState::TouchScroll);
        if self.config.close_all_on_list_scroll && state == ScrollState::TouchScroll {
            self.close_opened_items();
        }
        if state == ScrollState::Idle {
            self.host.reset_scrolling();
        }
    }

    /// Animates a closed row open to `side`. No-op for open rows and rows
    /// already animating a reveal.
    pub fn open_animate(&mut self, row: usize, side: Side) -> Result<(), SwipeError> {
        let state = self.checked_row(row)?;
        if state.opened || state.is_revealing() || state.dismissing {
            return Ok(());
        }
        let views = self.visible_row_views(row)?;
        self.animate_reveal(row, views.front, true, side.is_right());
        Ok(())
    }

    /// Animates an open row closed. No-op for closed rows and rows already
    /// animating a reveal.
    pub fn close_animate(&mut self, row: usize) -> Result<(), SwipeError> {
        let state = self.checked_row(row)?;
        if !state.opened || state.is_revealing() {
            return Ok(());
        }
        let views = self.visible_row_views(row)?;
        self.animate_reveal(row, views.front, true, false);
        Ok(())
    }

    /// Closes every open row that is currently laid out.
    pub fn close_opened_items(&mut self) {
        let first = self.host.first_visible_position();
        let last = self.host.last_visible_position();
        for row in first..=last.min(self.rows.len().saturating_sub(1)) {
            if !self.rows.is_open(row) {
                continue;
            }
            if let Err(err) = self.close_animate(row) {
                log::warn!("could not close row {row}: {err}");
            }
        }
    }

    fn refresh_width(&mut self) {
        if self.view_width < 2.0 {
            self.view_width = self.host.width().max(PLACEHOLDER_WIDTH);
        }
    }

    fn checked_row(&mut self, row: usize) -> Result<RowState, SwipeError> {
        self.reset_items();
        self.refresh_width();
        let count = self.rows.len();
        if row >= count {
            return Err(SwipeError::RowOutOfRange { row, count });
        }
        Ok(self.rows.get(row))
    }

    fn visible_row_views(&self, row: usize) -> Result<RowViews, SwipeError> {
        let first = self.host.first_visible_position();
        if row < first || row > self.host.last_visible_position() {
            return Err(SwipeError::RowNotVisible { row });
        }
        self.host
            .child_at(row - first)
            .ok_or(SwipeError::RowNotVisible { row })
    }

    fn open_translation(&self, side: Side) -> f32 {
        match side {
            Side::Right => self.view_width - self.config.offset_right,
            Side::Left => -self.view_width + self.config.offset_left,
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.paused {
            return false;
        }
        self.reset_items();
        self.session = match self.hit_test(event) {
            Some(touch) => Session::Armed(touch),
            None => Session::Idle,
        };
        self.host.dispatch_touch_event(event);
        true
    }

    fn hit_test(&self, event: &PointerEvent) -> Option<Touch> {
        let local = event.position.relative_to(self.host.location_on_screen());
        let index = (0..self.host.child_count())
            .find(|&index| self.host.child_hit_rect(index).contains_point(local))?;
        let views = self.host.child_at(index)?;
        let row = self.host.position_for_view(views.parent)?;
        let state = self.rows.get(row);
        if state.dismissing {
            log::debug!("row {row} is being dismissed; ignoring touch");
            return None;
        }

        let mut velocity = VelocityTracker::new();
        velocity.add_position(event.time_millis, event.position);
        Some(Touch {
            row,
            views,
            origin: event.position,
            down_time_millis: event.time_millis,
            was_open: state.opened,
            open_side: Side::from_right(state.opened_right),
            velocity,
            front_clickable: !state.opened,
            moved_beyond_slop: false,
            long_press_fired: false,
        })
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        if self.paused {
            return false;
        }
        let (mut touch, action) = match std::mem::take(&mut self.session) {
            Session::Idle => return false,
            Session::Armed(touch) => (touch, None),
            Session::Swiping { touch, action } => (touch, Some(action)),
        };

        touch.velocity.add_position(event.time_millis, event.position);
        let slop = self.platform.touch_slop;
        let delta_x = event.position.x - touch.origin.x;
        let delta_y = event.position.y - touch.origin.y;
        if delta_x.abs() > slop || delta_y.abs() > slop {
            touch.moved_beyond_slop = true;
        }

        let action = match action {
            Some(action) => action,
            None => {
                let allowed = self.config.swipe_mode.filter_displacement(delta_x, touch.was_open);
                if allowed <= slop {
                    self.session = Session::Armed(touch);
                    return false;
                }
                let action = resolve_action(touch.was_open, delta_x > 0.0, &self.config);
                self.begin_swipe(&touch, action, event);
                action
            }
        };

        let mut translation = delta_x;
        if touch.was_open {
            translation += self.open_translation(touch.open_side);
        }
        self.move_row(&touch, action, translation);
        self.session = Session::Swiping { touch, action };
        true
    }

    fn begin_swipe(&mut self, touch: &Touch, action: SwipeAction, event: &PointerEvent) {
        log::debug!("row {} swiping with {:?}", touch.row, action);
        self.host.request_disallow_intercept_touch_event(true);
        self.intercept_disallowed = true;
        self.host.dispatch_touch_event(&event.to_cancel());
    }

    fn move_row(&mut self, touch: &Touch, action: SwipeAction, delta_x: f32) {
        log::trace!("row {} moved to {delta_x}", touch.row);
        self.listener.on_move(touch.row, delta_x);
        if action == SwipeAction::Dismiss {
            let alpha = (1.0 - 2.0 * delta_x.abs() / self.view_width).clamp(0.0, 1.0);
            self.host.set_translation_x(touch.views.parent, delta_x);
            self.host.set_alpha(touch.views.parent, alpha);
        } else {
            self.host.set_translation_x(touch.views.front, delta_x);
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        match std::mem::take(&mut self.session) {
            Session::Idle => false,
            Session::Armed(touch) => self.tap(&touch, event),
            Session::Swiping { mut touch, action } => {
                touch.velocity.add_position(event.time_millis, event.position);
                let delta_x = event.position.x - touch.origin.x;
                let velocity = touch.velocity.velocity();
                let allowed_velocity_x = self
                    .config
                    .swipe_mode
                    .filter_release_velocity(velocity.x, touch.was_open);
                let decision = decide_commit(
                    delta_x,
                    velocity.x,
                    allowed_velocity_x,
                    velocity.y.abs(),
                    self.view_width,
                    &self.platform,
                );
                self.commit(&touch, action, decision);
                self.release_intercept();
                true
            }
        }
    }

    fn pointer_cancel(&mut self) -> bool {
        match std::mem::take(&mut self.session) {
            Session::Swiping { touch, action } => {
                self.commit(&touch, action, CommitDecision::CANCEL);
                self.release_intercept();
                true
            }
            Session::Armed(_) | Session::Idle => false,
        }
    }

    /// A release that never became a swipe. Closed rows forward the click;
    /// on open rows the front view closes the row and the back view clicks.
    fn tap(&mut self, touch: &Touch, event: &PointerEvent) -> bool {
        if touch.moved_beyond_slop || touch.long_press_fired {
            return false;
        }
        let row = touch.row;
        let on_front = self.host.hit_test(touch.views.front, event.position);
        if touch.front_clickable {
            if on_front {
                self.listener.on_click_front_view(row);
                return true;
            }
            return false;
        }
        if on_front {
            if let Err(err) = self.close_animate(row) {
                log::warn!("could not close tapped row {row}: {err}");
            }
            return true;
        }
        match touch.views.back {
            Some(back) if self.host.hit_test(back, event.position) => {
                self.listener.on_click_back_view(row);
                true
            }
            _ => false,
        }
    }

    fn release_intercept(&mut self) {
        if self.intercept_disallowed {
            self.intercept_disallowed = false;
            self.host.request_disallow_intercept_touch_event(false);
        }
    }

    fn commit(&mut self, touch: &Touch, action: SwipeAction, decision: CommitDecision) {
        log::debug!(
            "row {} released: {:?} swap={} right={}",
            touch.row,
            action,
            decision.swap,
            decision.swap_right
        );
        match action {
            SwipeAction::Reveal => self.animate_reveal(
                touch.row,
                touch.views.front,
                decision.swap,
                decision.swap_right,
            ),
            SwipeAction::Dismiss => self.animate_dismiss(
                touch.row,
                touch.views.parent,
                decision.swap,
                decision.swap_right,
            ),
            SwipeAction::Check => self.animate_check(touch.row, touch.views.front, decision.swap),
            SwipeAction::None => {}
        }
    }

    fn target_for(&self, row: usize, swap: bool, swap_right: bool) -> f32 {
        target_translation(
            self.rows.get(row),
            swap,
            swap_right,
            self.view_width,
            self.config.offset_left,
            self.config.offset_right,
        )
    }

    fn start(
        &mut self,
        tracks: SmallVec<[Track<PropertyKey>; 2]>,
        completion: Completion,
    ) -> AnimationId {
        let spec = self.config.animation_spec(&self.platform);
        let id = self.animator.animate(spec, tracks);
        self.completions.insert(id, completion);
        id
    }

    fn translation_track(&self, view: ViewId, to: f32) -> Track<PropertyKey> {
        Track::new(
            (view, ViewProperty::TranslationX),
            self.host.translation_x(view),
            to,
        )
    }

    fn animate_reveal(&mut self, row: usize, front: ViewId, swap: bool, swap_right: bool) {
        let target = self.target_for(row, swap, swap_right);
        let tracks = smallvec::smallvec![self.translation_track(front, target)];
        self.rows.get_mut(row).reveals_in_flight += 1;
        self.start(
            tracks,
            Completion::Reveal {
                row,
                swap,
                swap_right,
            },
        );
    }

    fn animate_check(&mut self, row: usize, front: ViewId, swap: bool) {
        let tracks = smallvec::smallvec![self.translation_track(front, 0.0)];
        self.start(tracks, Completion::Check { row, swap });
    }

    fn animate_dismiss(&mut self, row: usize, parent: ViewId, swap: bool, swap_right: bool) {
        let target = self.target_for(row, swap, swap_right);
        let alpha = if swap { 0.0 } else { 1.0 };
        if swap {
            self.dismissals.begin();
            self.rows.get_mut(row).dismissing = true;
        }
        let tracks = smallvec::smallvec![
            self.translation_track(parent, target),
            Track::new((parent, ViewProperty::Alpha), self.host.alpha(parent), alpha),
        ];
        self.start(
            tracks,
            Completion::DismissSlide {
                row,
                view: parent,
                swap,
            },
        );
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Reveal {
                row,
                swap,
                swap_right,
            } => self.finish_reveal(row, swap, swap_right),
            Completion::Check { row, swap } => {
                self.host.reset_scrolling();
                if swap {
                    let state = self.rows.get_mut(row);
                    state.checked = !state.checked;
                    let checked = state.checked;
                    self.listener.on_choice_changed(row, checked);
                }
            }
            Completion::DismissSlide { row, view, swap } => {
                if swap {
                    self.perform_dismiss(row, view);
                }
            }
            Completion::Collapse => self.finish_dismiss_animation(),
        }
    }

    fn finish_reveal(&mut self, row: usize, swap: bool, swap_right: bool) {
        self.host.reset_scrolling();
        let state = self.rows.get_mut(row);
        state.reveals_in_flight = state.reveals_in_flight.saturating_sub(1);
        if !swap {
            return;
        }
        state.opened = !state.opened;
        if state.opened {
            state.opened_right = swap_right;
            log::debug!("row {row} opened");
            self.listener.on_opened(row, Side::from_right(swap_right));
        } else {
            let side = Side::from_right(state.opened_right);
            log::debug!("row {row} closed");
            self.listener.on_closed(row, side);
        }
    }

    fn perform_dismiss(&mut self, row: usize, view: ViewId) {
        let original_height = self.host.height(view);
        let queued = self.dismissals.enqueue(PendingDismissal {
            row,
            view,
            original_height,
        });
        if !queued {
            log::warn!("row {row} is already pending dismissal; coalescing");
            self.finish_dismiss_animation();
            return;
        }
        let tracks = smallvec::smallvec![Track::new(
            (view, ViewProperty::Height),
            original_height,
            COLLAPSED_HEIGHT,
        )];
        self.start(tracks, Completion::Collapse);
    }

    fn finish_dismiss_animation(&mut self) {
        let Some(batch) = self.dismissals.finish_one() else {
            return;
        };
        if batch.is_empty() {
            return;
        }
        let positions: SmallVec<[usize; 4]> = batch.iter().map(|p| p.row).collect();
        log::debug!("dismissing rows {positions:?}");
        self.listener.on_dismiss(&positions);

        for pending in &batch {
            self.host.set_alpha(pending.view, 1.0);
            self.host.set_translation_x(pending.view, 0.0);
            self.host.set_height(pending.view, pending.original_height);
        }
        // Descending order keeps the remaining indices valid.
        for row in positions {
            self.rows.remove(row);
            self.completions
                .retain(|_, completion| completion.shift_for_removed_row(row));
            self.shift_session(row);
        }
    }

    /// Keeps the live touch pointing at the same row after `removed` left
    /// the table. A touch on the removed row itself is dropped.
    fn shift_session(&mut self, removed: usize) {
        let keep = match &mut self.session {
            Session::Idle => true,
            Session::Armed(touch) | Session::Swiping { touch, .. } => {
                shift_row(&mut touch.row, removed)
            }
        };
        if !keep {
            log::debug!("touch on dismissed row {removed} dropped");
            self.session = Session::Idle;
            self.release_intercept();
        }
    }

    fn check_long_press(&mut self, now_millis: i64) {
        if !self.config.open_on_long_press {
            return;
        }
        let Session::Armed(touch) = &mut self.session else {
            return;
        };
        if touch.long_press_fired || touch.moved_beyond_slop || !touch.front_clickable {
            return;
        }
        if now_millis - touch.down_time_millis < self.platform.long_press_timeout_millis {
            return;
        }
        touch.long_press_fired = true;
        let row = touch.row;
        log::debug!("row {row} long pressed");
        if let Err(err) = self.open_animate(row, Side::Left) {
            log::warn!("could not open long-pressed row {row}: {err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
