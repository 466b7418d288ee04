use super::intent::{CarouselIntent, Direction};
use super::reducer::CarouselReducer;
use super::state::CarouselState;
use crate::confessions::Confession;
use crate::config::TimingConfig;
use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use crate::ui::mvi::Reducer;
use crate::ui::sequencer::{Sequencer, SequencerEvent};
use crate::ui::typewriter::{Typewriter, TypewriterEvent};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub transition: Duration,
    pub jump_transition: Duration,
    pub dwell: Duration,
    pub text_interval: Duration,
    pub tagline_pause: Duration,
    pub tagline_interval: Duration,
}

impl From<&TimingConfig> for CarouselTiming {
    fn from(config: &TimingConfig) -> Self {
        Self {
            transition: config.transition(),
            jump_transition: config.jump_transition(),
            dwell: config.dwell(),
            text_interval: config.text_interval(),
            tagline_pause: config.tagline_pause(),
            tagline_interval: config.tagline_interval(),
        }
    }
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

/// Input adapter: swipes and dot taps map onto the same requests as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeNext,
    SwipePrev,
    Dot(usize),
}

/// What a fired timer did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Committed { index: usize },
    /// Autoplay dwell elapsed; `accepted` is false when a transition was
    /// already in flight.
    AutoAdvance { accepted: bool },
    TextProgress,
    TextDone,
    TaglineStarted,
    TaglineProgress,
    TaglineDone,
}

pub struct CarouselController {
    deck: Arc<[Confession]>,
    timing: CarouselTiming,
    state: CarouselState,
    autoplay: Sequencer,
    interacting: bool,
    mounted: bool,
    commit_timer: Option<TimerId>,
    tagline_pause: Option<TimerId>,
    text: Typewriter,
    tagline: Typewriter,
}

impl CarouselController {
    /// The carousel always opens on the first confession.
    pub fn new(deck: Arc<[Confession]>, timing: CarouselTiming) -> Self {
        let len = deck.len();
        Self {
            state: CarouselState::new(len, 0),
            autoplay: Sequencer::uniform(len, timing.dwell, true),
            deck,
            timing,
            interacting: false,
            mounted: false,
            commit_timer: None,
            tagline_pause: None,
            text: Typewriter::new(),
            tagline: Typewriter::new(),
        }
    }

    /// Start writing the current confession and start autoplay.
    pub fn mount(&mut self, timers: &mut TimerQueue) {
        self.mounted = true;
        self.show_current(timers);
    }

    /// Cancel every timer the carousel owns.
    pub fn unmount(&mut self, timers: &mut TimerQueue) {
        self.mounted = false;
        cancel_slot(timers, &mut self.commit_timer);
        cancel_slot(timers, &mut self.tagline_pause);
        self.autoplay.cancel(timers);
        self.text.cancel(timers);
        self.tagline.cancel(timers);
        self.state = CarouselState::new(self.state.len, self.state.current_index);
    }

    /// Step one card. Dropped (returns `false`) while a transition is in
    /// flight.
    pub fn request_advance(&mut self, direction: Direction, timers: &mut TimerQueue) -> bool {
        self.request(CarouselIntent::Advance(direction), self.timing.transition, timers)
    }

    /// Go to `index`. Dropped while transitioning, and rejected for the
    /// current index or one outside the deck.
    pub fn request_jump(&mut self, index: usize, timers: &mut TimerQueue) -> bool {
        self.request(CarouselIntent::Jump(index), self.timing.jump_transition, timers)
    }

    pub fn apply_gesture(&mut self, gesture: Gesture, timers: &mut TimerQueue) -> bool {
        match gesture {
            Gesture::SwipeNext => self.request_advance(Direction::Next, timers),
            Gesture::SwipePrev => self.request_advance(Direction::Prev, timers),
            Gesture::Dot(index) => self.request_jump(index, timers),
        }
    }

    /// The user started touching/dragging the deck: autoplay holds.
    pub fn begin_interaction(&mut self, timers: &mut TimerQueue) {
        self.interacting = true;
        self.autoplay.cancel(timers);
    }

    /// Interaction ended: autoplay restarts with a full dwell.
    pub fn end_interaction(&mut self, timers: &mut TimerQueue) {
        self.interacting = false;
        if self.mounted {
            self.autoplay.start_at(self.state.current_index, timers);
        }
    }

    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> Option<CarouselEvent> {
        if claim(&mut self.commit_timer, id) {
            return Some(self.commit(timers));
        }
        if claim(&mut self.tagline_pause, id) {
            if let Some(confession) = self.deck.get(self.state.current_index) {
                self.tagline
                    .reveal(&confession.tagline, self.timing.tagline_interval, timers);
            }
            return Some(CarouselEvent::TaglineStarted);
        }
        if let Some(event) = self.autoplay.on_timer(id, timers) {
            let accepted = match event {
                SequencerEvent::Advanced { .. } => self.request_advance(Direction::Next, timers),
                SequencerEvent::Finished => false,
            };
            return Some(CarouselEvent::AutoAdvance { accepted });
        }
        if let Some(event) = self.text.on_timer(id, timers) {
            return Some(match event {
                TypewriterEvent::Progress { .. } => CarouselEvent::TextProgress,
                TypewriterEvent::Done { .. } => {
                    self.tagline_pause = Some(timers.schedule(self.timing.tagline_pause));
                    CarouselEvent::TextDone
                }
            });
        }
        self.tagline.on_timer(id, timers).map(|event| match event {
            TypewriterEvent::Progress { .. } => CarouselEvent::TaglineProgress,
            TypewriterEvent::Done { .. } => CarouselEvent::TaglineDone,
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current(&self) -> Option<&Confession> {
        self.deck.get(self.state.current_index)
    }

    pub fn deck(&self) -> &Arc<[Confession]> {
        &self.deck
    }

    pub fn text(&self) -> &Typewriter {
        &self.text
    }

    pub fn tagline(&self) -> &Typewriter {
        &self.tagline
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    fn request(&mut self, intent: CarouselIntent, delay: Duration, timers: &mut TimerQueue) -> bool {
        if !CarouselReducer::apply(&mut self.state, intent) {
            tracing::debug!(?intent, state = ?self.state, "carousel request dropped");
            return false;
        }
        tracing::debug!(?intent, target = ?self.state.target(), "carousel transition started");
        self.commit_timer = Some(timers.schedule(delay));
        true
    }

    fn commit(&mut self, timers: &mut TimerQueue) -> CarouselEvent {
        self.state = CarouselReducer::reduce(self.state, CarouselIntent::Commit);
        tracing::debug!(index = self.state.current_index, "carousel committed");
        self.show_current(timers);
        CarouselEvent::Committed {
            index: self.state.current_index,
        }
    }

    /// Restart the reveal chain and the autoplay dwell for the current card.
    fn show_current(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.tagline_pause);
        self.tagline.clear(timers);
        let Some(confession) = self.deck.get(self.state.current_index) else {
            return;
        };
        self.text
            .reveal(&confession.text, self.timing.text_interval, timers);
        if !self.interacting {
            self.autoplay.start_at(self.state.current_index, timers);
        }
    }
}
