//! The four page views.
//!
//! Views are mounted by the site shell when their page becomes current and
//! unmounted, with every timer they own cancelled, when it stops being
//! current. Navigation requests flow back to the shell as return values.

mod home;
mod nomination;
mod partners;
mod waitlist;

pub use home::HomeView;
pub use nomination::{NominationField, NominationView, UnknownField};
pub use partners::PartnersView;
pub use waitlist::{suggest_domain, WaitlistView};

use crate::confessions::Confession;
use crate::config::Config;
use crate::timer::{TimerId, TimerQueue};
use crate::ui::nav::Page;
use std::sync::Arc;

/// What a view did with a fired timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Not one of this view's timers.
    Ignored,
    Handled,
    /// Handled, and the view wants to leave for `page`.
    Navigate(Page),
}

/// Result of pressing a form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was blank; nothing was handed off.
    Withheld,
    /// Handed off; the view returns home after the configured delay.
    Submitted,
    /// The form was already handed off.
    AlreadySubmitted,
}

pub trait View {
    fn page(&self) -> Page;
    fn mount(&mut self, timers: &mut TimerQueue);
    fn unmount(&mut self, timers: &mut TimerQueue);
    fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> TimerOutcome;
}

pub enum ActiveView {
    Home(HomeView),
    Waitlist(WaitlistView),
    Partners(PartnersView),
    Nomination(NominationView),
}

impl ActiveView {
    /// Fresh, unmounted view for `page`.
    pub fn build(page: Page, config: &Config, deck: &Arc<[Confession]>) -> Self {
        match page {
            Page::Home => ActiveView::Home(HomeView::new(Arc::clone(deck), &config.timing)),
            Page::Waitlist => ActiveView::Waitlist(WaitlistView::new(&config.forms)),
            Page::Partners => ActiveView::Partners(PartnersView::new(&config.partners)),
            Page::Nomination => ActiveView::Nomination(NominationView::new(&config.forms)),
        }
    }

    pub fn as_view(&self) -> &dyn View {
        match self {
            ActiveView::Home(view) => view,
            ActiveView::Waitlist(view) => view,
            ActiveView::Partners(view) => view,
            ActiveView::Nomination(view) => view,
        }
    }

    pub fn as_view_mut(&mut self) -> &mut dyn View {
        match self {
            ActiveView::Home(view) => view,
            ActiveView::Waitlist(view) => view,
            ActiveView::Partners(view) => view,
            ActiveView::Nomination(view) => view,
        }
    }
}
