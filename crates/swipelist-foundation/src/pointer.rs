use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer event in screen coordinates.
///
/// Events can be consumed by a handler so that the hosting list can tell
/// whether the swipe controller claimed it. The flag is shared between
/// copies, mirroring how a single platform event is observed by several
/// handlers.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event time in milliseconds on the host's monotonic clock.
    pub time_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), time_millis)
    }

    pub fn moved(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), time_millis)
    }

    pub fn up(x: f32, y: f32, time_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), time_millis)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Builds the synthetic cancel sent to the list when a swipe takes over
    /// the gesture. The copy has its own consumption state.
    pub fn to_cancel(&self) -> Self {
        Self {
            id: self.id,
            kind: PointerEventKind::Cancel,
            position: self.position,
            time_millis: self.time_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Monotonic millisecond clock for stamping pointer events.
#[derive(Clone, Copy, Debug)]
pub struct EventClock {
    origin: Instant,
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }

    pub fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    pub fn event(&self, kind: PointerEventKind, position: Point) -> PointerEvent {
        PointerEvent::new(kind, position, self.now_millis())
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::down(1.0, 2.0, 0);
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn cancel_copy_has_independent_consumption() {
        let event = PointerEvent::moved(5.0, 6.0, 42).with_id(3);
        let cancel = event.to_cancel();
        cancel.consume();
        assert_eq!(cancel.kind, PointerEventKind::Cancel);
        assert_eq!(cancel.id, 3);
        assert_eq!(cancel.time_millis, 42);
        assert!(!event.is_consumed());
    }

    #[test]
    fn event_clock_is_monotonic() {
        let clock = EventClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }
}
