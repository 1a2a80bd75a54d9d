//! Animation targets, completion messages and the batched dismiss join.

use crate::host::ViewId;
use crate::row_state::RowState;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Property of a view driven by the animator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ViewProperty {
    TranslationX,
    Alpha,
    Height,
}

pub(crate) type PropertyKey = (ViewId, ViewProperty);

/// Follow-up work posted when an animation finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Completion {
    Reveal {
        row: usize,
        swap: bool,
        swap_right: bool,
    },
    Check {
        row: usize,
        swap: bool,
    },
    DismissSlide {
        row: usize,
        view: ViewId,
        swap: bool,
    },
    Collapse,
}

impl Completion {
    /// Re-indexes the completion after `removed` left the row table.
    /// Returns false if the completion belonged to the removed row.
    pub fn shift_for_removed_row(&mut self, removed: usize) -> bool {
        match self {
            Completion::Reveal { row, .. }
            | Completion::Check { row, .. }
            | Completion::DismissSlide { row, .. } => shift_row(row, removed),
            Completion::Collapse => true,
        }
    }
}

/// Moves `row` down past a removed row. Returns false if `row` is the
/// removed one.
pub(crate) fn shift_row(row: &mut usize, removed: usize) -> bool {
    match (*row).cmp(&removed) {
        Ordering::Less => true,
        Ordering::Equal => false,
        Ordering::Greater => {
            *row -= 1;
            true
        }
    }
}

/// Horizontal resting place of a row after a commit.
///
/// An open row that swaps, or a closed row that does not, returns to 0.
/// Otherwise the row rests on its open side, short of the full width by
/// that side's offset.
pub(crate) fn target_translation(
    state: RowState,
    swap: bool,
    swap_right: bool,
    view_width: f32,
    offset_left: f32,
    offset_right: f32,
) -> f32 {
    let open_right = match (state.opened, swap) {
        (true, false) => state.opened_right,
        (false, true) => swap_right,
        _ => return 0.0,
    };
    if open_right {
        view_width - offset_right
    } else {
        -view_width + offset_left
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PendingDismissal {
    pub row: usize,
    pub view: ViewId,
    pub original_height: f32,
}

/// Counting join over dismiss animations.
///
/// Every committed dismiss is counted from the start of its slide-out until
/// its collapse finishes. Rows are queued as their slide-out ends and the
/// whole queue is released, highest row first, only when the count drops
/// back to zero.
#[derive(Debug, Default)]
pub(crate) struct DismissBatch {
    pending: SmallVec<[PendingDismissal; 4]>,
    in_flight: usize,
}

impl DismissBatch {
    pub fn begin(&mut self) {
        self.in_flight += 1;
    }

    /// Queues a row. Returns false if the row is already queued.
    pub fn enqueue(&mut self, dismissal: PendingDismissal) -> bool {
        if self.pending.iter().any(|p| p.row == dismissal.row) {
            return false;
        }
        self.pending.push(dismissal);
        true
    }

    /// Ends one counted animation. Returns the sorted batch when it was the
    /// last one in flight.
    pub fn finish_one(&mut self) -> Option<SmallVec<[PendingDismissal; 4]>> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight > 0 {
            return None;
        }
        let mut batch = std::mem::take(&mut self.pending);
        batch.sort_by(|a, b| b.row.cmp(&a.row));
        Some(batch)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
