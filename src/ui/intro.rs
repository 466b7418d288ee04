//! Intro played before the first page: a fixed run of timed parts.

use crate::timer::{TimerId, TimerQueue};
use crate::ui::sequencer::{Sequencer, SequencerEvent};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    PartChanged { part: usize },
    Completed,
}

pub struct IntroSequence {
    parts: Sequencer,
    completed: bool,
}

impl IntroSequence {
    pub fn new(part_dwells: Vec<Duration>) -> Self {
        Self {
            parts: Sequencer::new(part_dwells, false),
            completed: false,
        }
    }

    /// Begin at the first part. An intro without parts completes
    /// immediately and returns `true`.
    pub fn start(&mut self, timers: &mut TimerQueue) -> bool {
        if self.parts.is_empty() {
            self.completed = true;
            return true;
        }
        self.completed = false;
        self.parts.start(timers);
        false
    }

    /// Abandon the intro.
    pub fn skip(&mut self, timers: &mut TimerQueue) {
        self.parts.cancel(timers);
        self.completed = true;
    }

    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> Option<IntroEvent> {
        match self.parts.on_timer(id, timers)? {
            SequencerEvent::Advanced { step_index } => {
                tracing::debug!(part = step_index, "intro part");
                Some(IntroEvent::PartChanged { part: step_index })
            }
            SequencerEvent::Finished => {
                self.completed = true;
                Some(IntroEvent::Completed)
            }
        }
    }

    /// Part currently playing, `None` once finished or skipped.
    pub fn part(&self) -> Option<usize> {
        self.parts.step_index()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
