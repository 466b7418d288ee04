//! Virtual timer queue driving every timed effect on the site.
//!
//! The site runs on a single cooperative event loop. Components never sleep;
//! they schedule a timer here, remember its [`TimerId`], and react when the
//! loop hands the id back to them. The clock is virtual: the host decides how
//! far to advance it (real time in [`crate::ui::runtime`], arbitrary jumps in
//! tests).

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::time::Duration;

/// Opaque handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Deadline-ordered set of pending timers plus the loop's current time.
///
/// Timers with equal deadlines fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    ordered: BTreeSet<(Duration, TimerId)>,
    deadlines: HashMap<TimerId, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the loop since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer `delay` from now.
    ///
    /// A zero delay is still deferred: the timer fires on the next drain,
    /// never inside the caller.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now.saturating_add(delay);
        self.ordered.insert((deadline, id));
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending timer. Returns `false` when it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.ordered.remove(&(deadline, id));
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.ordered.first().map(|(deadline, _)| *deadline)
    }

    /// Remove the earliest timer whose deadline is at or before `until`,
    /// moving the clock forward to that deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let &(deadline, id) = self.ordered.first()?;
        if deadline > until {
            return None;
        }
        self.ordered.remove(&(deadline, id));
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some(id)
    }

    /// Remove the earliest timer regardless of its deadline, moving the
    /// clock forward to it.
    pub fn pop_next(&mut self) -> Option<TimerId> {
        let deadline = self.next_deadline()?;
        self.pop_due(deadline)
    }

    /// Move the clock to `now`. The clock never moves backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

/// Cancel the timer held in `slot`, if any, and clear the slot.
pub fn cancel_slot(timers: &mut TimerQueue, slot: &mut Option<TimerId>) {
    if let Some(id) = slot.take() {
        timers.cancel(id);
    }
}

/// Take the timer in `slot` if it is `id`. Used by components to claim a
/// fired timer as their own.
pub fn claim(slot: &mut Option<TimerId>, id: TimerId) -> bool {
    if *slot == Some(id) {
        *slot = None;
        true
    } else {
        false
    }
}
