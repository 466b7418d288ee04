use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A change to `target` is in flight; further requests are dropped.
    Transitioning { target: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub current_index: usize,
    /// Number of confessions in the deck.
    pub len: usize,
    pub phase: Phase,
}

impl UiState for CarouselState {}

impl CarouselState {
    /// Idle at `start` (clamped into the deck).
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            current_index: start.min(len.saturating_sub(1)),
            len,
            phase: Phase::Idle,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { target } => Some(target),
            Phase::Idle => None,
        }
    }
}
