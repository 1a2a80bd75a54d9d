use swipelist::{Side, SwipeListener};

/// A callback received by [`RecordingListener`].
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeEvent {
    Opened { row: usize, side: Side },
    Closed { row: usize, side: Side },
    ClickFront(usize),
    ClickBack(usize),
    Move { row: usize, delta_x: f32 },
    Dismiss(Vec<usize>),
    ChoiceChanged { row: usize, checked: bool },
}

impl SwipeEvent {
    pub fn is_move(&self) -> bool {
        matches!(self, SwipeEvent::Move { .. })
    }
}

/// Records every callback in arrival order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Vec<SwipeEvent>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SwipeEvent] {
        &self.events
    }

    /// Recorded events other than live moves.
    pub fn outcomes(&self) -> Vec<SwipeEvent> {
        self.events.iter().filter(|e| !e.is_move()).cloned().collect()
    }

    pub fn moves(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SwipeEvent::Move { delta_x, .. } => Some(*delta_x),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SwipeListener for RecordingListener {
    fn on_opened(&mut self, row: usize, side: Side) {
        self.events.push(SwipeEvent::Opened { row, side });
    }

    fn on_closed(&mut self, row: usize, side: Side) {
        self.events.push(SwipeEvent::Closed { row, side });
    }

    fn on_click_front_view(&mut self, row: usize) {
        self.events.push(SwipeEvent::ClickFront(row));
    }

    fn on_click_back_view(&mut self, row: usize) {
        self.events.push(SwipeEvent::ClickBack(row));
    }

    fn on_move(&mut self, row: usize, delta_x: f32) {
        self.events.push(SwipeEvent::Move { row, delta_x });
    }

    fn on_dismiss(&mut self, rows: &[usize]) {
        log::debug!("recorded dismissal of {rows:?}");
        self.events.push(SwipeEvent::Dismiss(rows.to_vec()));
    }

    fn on_choice_changed(&mut self, row: usize, checked: bool) {
        self.events.push(SwipeEvent::ChoiceChanged { row, checked });
    }
}
