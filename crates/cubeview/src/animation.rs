use std::collections::VecDeque;

use cubepuzzle::Slice;
use web_time::Duration;

/// Kind of animated task.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationKind {
    /// Quarter turn of a slice.
    Slice {
        /// Slice to turn, in canonical form.
        slice: Slice,
        /// Whether to leave the turn off the undo stack.
        skip_history: bool,
    },
}

/// Queued animation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationTask {
    /// What to animate.
    pub kind: AnimationKind,
    /// Progress from 0.0 to 1.0, or `None` if the task has not started.
    pub phase: Option<f32>,
}

/// Result of advancing an [`AnimationQueue`] by one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Tick {
    /// The queue is empty.
    Idle,
    /// The task at the head of the queue started timing on this tick.
    Started(AnimationKind),
    /// The head task is in progress.
    InProgress {
        /// Task being animated.
        kind: AnimationKind,
        /// Progress from 0.0 to 1.0 (exclusive).
        phase: f32,
    },
    /// The head task finished and was removed from the queue. It must be
    /// committed now.
    Completed(AnimationKind),
}

/// FIFO queue of animations. Only the task at the head of the queue makes
/// progress.
#[derive(Debug, Default, Clone)]
pub struct AnimationQueue {
    queue: VecDeque<AnimationTask>,
    /// Time since the head task started.
    elapsed: Duration,
}

impl AnimationQueue {
    /// Adds a task to the back of the queue.
    pub fn push(&mut self, kind: AnimationKind) {
        self.queue.push_back(AnimationTask { kind, phase: None });
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
    /// Returns the number of queued tasks, including the one in progress.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the task at the head of the queue.
    pub fn current(&self) -> Option<&AnimationTask> {
        self.queue.front()
    }

    /// Returns all queued tasks, head first.
    pub fn iter(&self) -> impl Iterator<Item = &AnimationTask> {
        self.queue.iter()
    }

    /// Removes all tasks without committing them.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.elapsed = Duration::ZERO;
    }

    /// Steps the head task forward by `delta`, where each task takes
    /// `duration` in total.
    ///
    /// The first tick for each task only starts its timer. A zero `duration`
    /// completes the task on the tick after it starts.
    pub fn proceed(&mut self, delta: Duration, duration: Duration) -> Tick {
        let Some(head) = self.queue.front_mut() else {
            return Tick::Idle;
        };

        if head.phase.is_none() {
            head.phase = Some(0.0);
            self.elapsed = Duration::ZERO;
            return Tick::Started(head.kind);
        }

        self.elapsed += delta;
        let phase = if duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / duration.as_secs_f32()
        };

        if phase >= 1.0 {
            let kind = head.kind;
            self.queue.pop_front();
            self.elapsed = Duration::ZERO;
            Tick::Completed(kind)
        } else {
            head.phase = Some(phase);
            Tick::InProgress {
                kind: head.kind,
                phase,
            }
        }
    }
}
