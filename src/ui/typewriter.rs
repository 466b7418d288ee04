//! Character-by-character text reveal.
//!
//! Progress is counted in Unicode scalar values (`char`s), so a reveal never
//! shows half of a multi-byte character. Each reveal publishes its state on a
//! `watch` channel; any number of observers (the rendered text, the quill)
//! can follow it independently.

use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypewriterState {
    pub source_text: Arc<str>,
    /// Number of chars of `source_text` currently shown.
    pub revealed_len: usize,
    pub active: bool,
}

impl TypewriterState {
    /// The revealed prefix of the source text.
    pub fn visible(&self) -> &str {
        match self.source_text.char_indices().nth(self.revealed_len) {
            Some((end, _)) => &self.source_text[..end],
            None => &self.source_text,
        }
    }

    pub fn total_len(&self) -> usize {
        self.source_text.chars().count()
    }

    pub fn is_complete(&self) -> bool {
        !self.active && self.revealed_len == self.total_len()
    }
}

/// Identifies one `reveal` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// One more char is visible.
    Progress { revealed_len: usize },
    /// The run finished; emitted exactly once per run.
    Done { handle: RevealHandle, revealed_len: usize },
}

pub struct Typewriter {
    total: usize,
    interval: Duration,
    generation: u64,
    pending: Option<TimerId>,
    state_tx: watch::Sender<TypewriterState>,
}

impl Typewriter {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(TypewriterState::default());
        Self {
            total: 0,
            interval: Duration::ZERO,
            generation: 0,
            pending: None,
            state_tx,
        }
    }

    /// Start revealing `text`, one char per `interval`.
    ///
    /// Any run still in flight is cancelled first and will never report
    /// `Done`. Empty text completes on a zero-delay timer.
    pub fn reveal(&mut self, text: &str, interval: Duration, timers: &mut TimerQueue) -> RevealHandle {
        cancel_slot(timers, &mut self.pending);
        self.generation += 1;
        self.total = text.chars().count();
        self.interval = interval;
        self.state_tx.send_replace(TypewriterState {
            source_text: Arc::from(text),
            revealed_len: 0,
            active: true,
        });

        let first = if self.total == 0 { Duration::ZERO } else { interval };
        self.pending = Some(timers.schedule(first));
        RevealHandle(self.generation)
    }

    /// Stop the current run, leaving the revealed prefix visible.
    pub fn cancel(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.pending);
        self.state_tx.send_if_modified(|state| {
            let was_active = state.active;
            state.active = false;
            was_active
        });
    }

    /// Cancel any run and show nothing.
    pub fn clear(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.pending);
        self.generation += 1;
        self.total = 0;
        self.state_tx.send_replace(TypewriterState::default());
    }

    /// Cancel only if `handle` is still the current run.
    pub fn cancel_run(&mut self, handle: RevealHandle, timers: &mut TimerQueue) {
        if handle == self.current_handle() {
            self.cancel(timers);
        }
    }

    /// Handle a fired timer. Returns `None` when `id` is not ours.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> Option<TypewriterEvent> {
        if !claim(&mut self.pending, id) {
            return None;
        }

        let total = self.total;
        let mut revealed_len = 0;
        self.state_tx.send_modify(|state| {
            if state.revealed_len < total {
                state.revealed_len += 1;
            }
            state.active = state.revealed_len < total;
            revealed_len = state.revealed_len;
        });

        if revealed_len < total {
            self.pending = Some(timers.schedule(self.interval));
            Some(TypewriterEvent::Progress { revealed_len })
        } else {
            Some(TypewriterEvent::Done {
                handle: self.current_handle(),
                revealed_len,
            })
        }
    }

    pub fn current_handle(&self) -> RevealHandle {
        RevealHandle(self.generation)
    }

    pub fn state(&self) -> TypewriterState {
        self.state_tx.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.state_tx.borrow().active
    }

    pub fn subscribe(&self) -> watch::Receiver<TypewriterState> {
        self.state_tx.subscribe()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}
