//! Deterministic deferred-task queue.
//!
//! Tasks are plain payloads scheduled against a virtual clock. Nothing runs on
//! its own: the owner advances the clock and receives the payloads that came
//! due, in deadline order (FIFO for equal deadlines). This keeps fixed-delay
//! continuations cancellable and lets tests simulate time exactly.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<(Duration, TaskId), T>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: BTreeMap::new(),
        }
    }

    /// Virtual time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert((self.now + delay, id), payload);
        id
    }

    /// Cancel a pending task. Returns the payload if it had not fired yet.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let key = self.tasks.keys().find(|(_, tid)| *tid == id).copied()?;
        self.tasks.remove(&key)
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Time left until the earliest pending task, zero if one is already due.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Move the clock to `instant` (never backwards) and drain every task due
    /// at or before it.
    pub fn advance_to(&mut self, instant: Duration) -> Vec<T> {
        if instant > self.now {
            self.now = instant;
        }
        let mut due = Vec::new();
        while let Some(entry) = self.tasks.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.advance_to(self.now + elapsed)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
