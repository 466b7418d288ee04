use super::{TimerOutcome, View};
use crate::confessions::Confession;
use crate::config::TimingConfig;
use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use crate::ui::carousel::{CarouselController, CarouselTiming};
use crate::ui::nav::Page;
use crate::ui::quill::{QuillPosition, QuillTracker};
use std::sync::Arc;
use std::time::Duration;

/// Draggable sticky note that doubles as the link to the nomination page.
///
/// A drag ends with a short grace period during which the pointer-up that
/// finished the drag is not taken as a click.
struct StickyNote {
    dragging: bool,
    release: Option<TimerId>,
    release_after: Duration,
}

pub struct HomeView {
    carousel: CarouselController,
    quill: QuillTracker,
    note: StickyNote,
}

impl HomeView {
    pub fn new(deck: Arc<[Confession]>, timing: &TimingConfig) -> Self {
        let carousel = CarouselController::new(deck, CarouselTiming::from(timing));
        let quill = QuillTracker::new(carousel.text().subscribe(), carousel.tagline().subscribe());
        Self {
            carousel,
            quill,
            note: StickyNote {
                dragging: false,
                release: None,
                release_after: timing.drag_release(),
            },
        }
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    pub fn quill(&self) -> Option<QuillPosition> {
        self.quill.position()
    }

    pub fn sticky_drag_start(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.note.release);
        self.note.dragging = true;
    }

    pub fn sticky_drag_end(&mut self, timers: &mut TimerQueue) {
        if !self.note.dragging {
            return;
        }
        cancel_slot(timers, &mut self.note.release);
        self.note.release = Some(timers.schedule(self.note.release_after));
    }

    /// Click on the note: nominate, unless it is being dragged.
    pub fn sticky_click(&self) -> Option<Page> {
        if self.note.dragging {
            tracing::debug!("sticky note click ignored during drag");
            return None;
        }
        Some(Page::Nomination)
    }

    pub fn is_note_dragging(&self) -> bool {
        self.note.dragging
    }
}

impl View for HomeView {
    fn page(&self) -> Page {
        Page::Home
    }

    fn mount(&mut self, timers: &mut TimerQueue) {
        self.carousel.mount(timers);
    }

    fn unmount(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.note.release);
        self.note.dragging = false;
        self.carousel.unmount(timers);
    }

    fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> TimerOutcome {
        if claim(&mut self.note.release, id) {
            self.note.dragging = false;
            return TimerOutcome::Handled;
        }
        match self.carousel.on_timer(id, timers) {
            Some(_) => TimerOutcome::Handled,
            None => TimerOutcome::Ignored,
        }
    }
}
