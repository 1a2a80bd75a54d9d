//! Frame-driven animation of scalar view properties.

use crate::animation::{AnimationSpec, Lerp};
use indexmap::IndexMap;
use smallvec::SmallVec;

pub type AnimationId = u64;

/// One property moving from `from` to `to`. `K` identifies the property,
/// typically a `(view, property)` pair owned by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track<K> {
    pub key: K,
    pub from: f32,
    pub to: f32,
}

impl<K> Track<K> {
    pub fn new(key: K, from: f32, to: f32) -> Self {
        Self { key, from, to }
    }
}

struct RunningAnimation<K> {
    tracks: SmallVec<[Track<K>; 2]>,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
}

/// Runs any number of concurrent tweens. Every tween latches its start time
/// on the first frame it sees, writes its interpolated values through the
/// `apply` callback on each frame, and is reported as finished on the frame
/// where it reaches its target. Completions are reported in start order.
pub struct PropertyAnimator<K> {
    next_id: AnimationId,
    running: IndexMap<AnimationId, RunningAnimation<K>>,
}

impl<K: Copy> PropertyAnimator<K> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            running: IndexMap::new(),
        }
    }

    /// Starts a tween that moves all `tracks` together and returns its id.
    pub fn animate(
        &mut self,
        spec: AnimationSpec,
        tracks: impl IntoIterator<Item = Track<K>>,
    ) -> AnimationId {
        let id = self.next_id;
        self.next_id += 1;
        let tracks: SmallVec<[Track<K>; 2]> = tracks.into_iter().collect();
        log::trace!(
            "animation {id} started: {} track(s) over {}ms",
            tracks.len(),
            spec.duration_millis
        );
        self.running.insert(
            id,
            RunningAnimation {
                tracks,
                spec,
                start_time_nanos: None,
            },
        );
        id
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.contains_key(&id)
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Advances every running tween to `frame_time_nanos`.
    pub fn advance(
        &mut self,
        frame_time_nanos: u64,
        mut apply: impl FnMut(K, f32),
    ) -> SmallVec<[AnimationId; 4]> {
        let mut finished = SmallVec::new();
        for (id, animation) in self.running.iter_mut() {
            let start = *animation.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start);
            let (progress, done) = animation.spec.progress(elapsed);
            for track in &animation.tracks {
                let value = if done {
                    track.to
                } else {
                    track.from.lerp(&track.to, progress)
                };
                apply(track.key, value);
            }
            if done {
                finished.push(*id);
            }
        }
        self.running.retain(|id, _| !finished.contains(id));
        finished
    }
}

impl<K: Copy> Default for PropertyAnimator<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn tween_latches_start_on_first_frame() {
        let mut animator = PropertyAnimator::new();
        let id = animator.animate(AnimationSpec::linear(100), [Track::new('a', 0.0, 10.0)]);

        let mut last = f32::NAN;
        let finished = animator.advance(1_000 * MS, |_, v| last = v);
        assert!(finished.is_empty());
        assert_eq!(last, 0.0);

        animator.advance(1_050 * MS, |_, v| last = v);
        assert!((last - 5.0).abs() < 1e-4);

        let finished = animator.advance(1_100 * MS, |_, v| last = v);
        assert_eq!(finished.as_slice(), &[id]);
        assert_eq!(last, 10.0);
        assert!(animator.is_idle());
    }

    #[test]
    fn grouped_tracks_finish_together() {
        let mut animator = PropertyAnimator::new();
        animator.animate(
            AnimationSpec::linear(10),
            [Track::new("x", 0.0, -300.0), Track::new("alpha", 1.0, 0.0)],
        );
        let mut values = Vec::new();
        animator.advance(0, |_, _| {});
        let finished = animator.advance(20 * MS, |key, v| values.push((key, v)));
        assert_eq!(finished.len(), 1);
        assert_eq!(values, vec![("x", -300.0), ("alpha", 0.0)]);
    }

    #[test]
    fn completions_keep_start_order() {
        let mut animator = PropertyAnimator::new();
        let first = animator.animate(AnimationSpec::linear(50), [Track::new(1, 0.0, 1.0)]);
        let second = animator.animate(AnimationSpec::linear(50), [Track::new(2, 0.0, 1.0)]);
        animator.advance(0, |_, _| {});
        let finished = animator.advance(50 * MS, |_, _| {});
        assert_eq!(finished.as_slice(), &[first, second]);
        assert!(!animator.is_running(first));
    }
}
