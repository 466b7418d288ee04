//! Timed step engine: walks an ordered list of dwell durations.
//!
//! Used for the carousel autoplay (looping, one step per confession) and
//! the intro (one-shot). A sequencer owns at most one pending timer; every
//! start cancels the previous run before scheduling anything.

use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerState {
    pub step_index: usize,
    /// Loop time at which the current step began.
    pub started_at: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The previous step's dwell elapsed and `step_index` is now showing.
    Advanced { step_index: usize },
    /// A one-shot run elapsed its last step.
    Finished,
}

#[derive(Debug)]
pub struct Sequencer {
    dwells: Vec<Duration>,
    looping: bool,
    state: Option<SequencerState>,
    pending: Option<TimerId>,
}

impl Sequencer {
    pub fn new(dwells: Vec<Duration>, looping: bool) -> Self {
        Self {
            dwells,
            looping,
            state: None,
            pending: None,
        }
    }

    /// `count` steps of the same dwell.
    pub fn uniform(count: usize, dwell: Duration, looping: bool) -> Self {
        Self::new(vec![dwell; count], looping)
    }

    pub fn start(&mut self, timers: &mut TimerQueue) {
        self.start_at(0, timers);
    }

    /// Begin a run at `step` (clamped to the last step). Any active run is
    /// cancelled first. No-op for an empty step list.
    pub fn start_at(&mut self, step: usize, timers: &mut TimerQueue) {
        self.cancel(timers);
        let Some(last) = self.dwells.len().checked_sub(1) else {
            return;
        };
        self.enter(step.min(last), timers);
    }

    /// Stop the run. Safe to call repeatedly and after the run finished.
    pub fn cancel(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.pending);
        self.state = None;
    }

    /// Handle a fired timer. Returns `None` when `id` is not ours.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> Option<SequencerEvent> {
        if !claim(&mut self.pending, id) {
            return None;
        }
        let state = self.state?;
        let next = state.step_index + 1;
        if next < self.dwells.len() {
            self.enter(next, timers);
            Some(SequencerEvent::Advanced { step_index: next })
        } else if self.looping {
            self.enter(0, timers);
            Some(SequencerEvent::Advanced { step_index: 0 })
        } else {
            self.state = None;
            Some(SequencerEvent::Finished)
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<SequencerState> {
        self.state
    }

    pub fn step_index(&self) -> Option<usize> {
        self.state.map(|s| s.step_index)
    }

    /// Time spent in the current step, measured on the loop clock.
    pub fn elapsed_in_step(&self, timers: &TimerQueue) -> Option<Duration> {
        self.state
            .map(|s| timers.now().saturating_sub(s.started_at))
    }

    pub fn len(&self) -> usize {
        self.dwells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dwells.is_empty()
    }

    fn enter(&mut self, step: usize, timers: &mut TimerQueue) {
        self.state = Some(SequencerState {
            step_index: step,
            started_at: timers.now(),
        });
        self.pending = Some(timers.schedule(self.dwells[step]));
    }
}
