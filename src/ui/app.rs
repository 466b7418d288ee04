use crate::confessions::Confession;
use crate::config::{Config, ConfigError};
use crate::submit::SubmissionHandler;
use crate::timer::{TimerId, TimerQueue};
use crate::ui::carousel::Gesture;
use crate::ui::events::HostEvent;
use crate::ui::intro::{IntroEvent, IntroSequence};
use crate::ui::nav::{AddressBar, AddressMap, NavigationStore, Page};
use crate::ui::quill::QuillPosition;
use crate::ui::views::{
    ActiveView, HomeView, NominationField, NominationView, PartnersView, SubmitOutcome,
    TimerOutcome, WaitlistView,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Renderable state of the whole site at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSnapshot {
    pub page: Page,
    pub address: String,
    pub elapsed_ms: u64,
    /// Intro part on screen; no view is mounted while this is set.
    pub intro_part: Option<usize>,
    pub view: Option<ViewSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewSnapshot {
    Home {
        index: usize,
        count: usize,
        transitioning: bool,
        author: String,
        text: String,
        tagline: String,
        quill: Option<QuillPosition>,
        autoplay: bool,
    },
    Waitlist {
        email: String,
        suggestion: Option<String>,
        submitted: bool,
    },
    Partners {
        logos: Vec<LogoSnapshot>,
    },
    Nomination {
        name: String,
        year: String,
        reason: String,
        submitted: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoSnapshot {
    pub name: String,
    pub revealed: bool,
}

/// Root of the site: owns the loop clock, navigation, the intro and the one
/// mounted view.
pub struct Site {
    config: Config,
    deck: Arc<[Confession]>,
    timers: TimerQueue,
    nav: NavigationStore,
    intro: Option<IntroSequence>,
    view: Option<ActiveView>,
    submissions: Box<dyn SubmissionHandler>,
}

impl Site {
    pub fn new(
        config: Config,
        address_bar: Box<dyn AddressBar>,
        submissions: Box<dyn SubmissionHandler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let routes = config.address_map()?;
        let deck = config.dataset();
        let mut site = Self {
            nav: NavigationStore::new(routes, address_bar),
            deck,
            timers: TimerQueue::new(),
            intro: None,
            view: None,
            submissions,
            config,
        };

        if site.config.intro.enabled {
            let mut intro = IntroSequence::new(site.config.intro.steps());
            if !intro.start(&mut site.timers) {
                site.intro = Some(intro);
            }
        }
        site.remount();
        tracing::info!(page = %site.current_page(), intro = site.intro.is_some(), "site started");
        Ok(site)
    }

    /// Apply one host event. Returns `false` when the event did not apply
    /// (wrong page, intro still playing, request dropped, nothing changed).
    pub fn handle(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Navigate(page) => self.navigate(page),
            HostEvent::AddressChanged(address) => {
                let changed = self.nav.enter_address(&address);
                if changed {
                    self.remount();
                }
                changed
            }
            HostEvent::Back => {
                let changed = self.nav.go_back();
                if changed {
                    self.remount();
                }
                changed
            }
            HostEvent::SkipIntro => match self.intro.take() {
                Some(mut intro) => {
                    intro.skip(&mut self.timers);
                    self.remount();
                    true
                }
                None => false,
            },
            HostEvent::Carousel(gesture) => match &mut self.view {
                Some(ActiveView::Home(home)) => {
                    home.carousel_mut().apply_gesture(gesture, &mut self.timers)
                }
                _ => false,
            },
            HostEvent::InteractionStart => match &mut self.view {
                Some(ActiveView::Home(home)) => {
                    home.carousel_mut().begin_interaction(&mut self.timers);
                    true
                }
                _ => false,
            },
            HostEvent::InteractionEnd => match &mut self.view {
                Some(ActiveView::Home(home)) => {
                    home.carousel_mut().end_interaction(&mut self.timers);
                    true
                }
                _ => false,
            },
            HostEvent::NoteDragStart => match &mut self.view {
                Some(ActiveView::Home(home)) => {
                    home.sticky_drag_start(&mut self.timers);
                    true
                }
                _ => false,
            },
            HostEvent::NoteDragEnd => match &mut self.view {
                Some(ActiveView::Home(home)) => {
                    home.sticky_drag_end(&mut self.timers);
                    true
                }
                _ => false,
            },
            HostEvent::NoteClick => {
                let target = match &self.view {
                    Some(ActiveView::Home(home)) => home.sticky_click(),
                    _ => None,
                };
                match target {
                    Some(page) => self.navigate(page),
                    None => false,
                }
            }
            HostEvent::SetEmail(text) => match &mut self.view {
                Some(ActiveView::Waitlist(form)) => {
                    form.set_email(&text, &mut self.timers);
                    true
                }
                _ => false,
            },
            HostEvent::AcceptSuggestion => match &mut self.view {
                Some(ActiveView::Waitlist(form)) => form.accept_suggestion(&mut self.timers),
                _ => false,
            },
            HostEvent::SetNominationField(field, text) => match &mut self.view {
                Some(ActiveView::Nomination(form)) => {
                    form.set_field(field, &text);
                    true
                }
                _ => false,
            },
            HostEvent::Submit => self.submit() == Some(SubmitOutcome::Submitted),
        }
    }

    /// In-app navigation. The previous view is unmounted, with all of its
    /// timers cancelled, before the new one mounts.
    pub fn navigate(&mut self, page: Page) -> bool {
        let changed = self.nav.navigate(page);
        if changed {
            self.remount();
        }
        changed
    }

    /// Submit whichever form is on screen. `None` when no form is.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        let handler = self.submissions.as_mut();
        match &mut self.view {
            Some(ActiveView::Waitlist(form)) => Some(form.submit(handler, &mut self.timers)),
            Some(ActiveView::Nomination(form)) => Some(form.submit(handler, &mut self.timers)),
            _ => None,
        }
    }

    /// Run every timer due at or before `at`, in deadline order.
    pub fn advance_to(&mut self, at: Duration) {
        while let Some(id) = self.timers.pop_due(at) {
            self.dispatch_timer(id);
        }
        self.timers.set_now(at);
    }

    pub fn advance(&mut self, by: Duration) {
        self.advance_to(self.timers.now().saturating_add(by));
    }

    /// Cancel everything; the site is inert afterwards.
    pub fn shutdown(&mut self) {
        if let Some(mut intro) = self.intro.take() {
            intro.skip(&mut self.timers);
        }
        if let Some(mut view) = self.view.take() {
            view.as_view_mut().unmount(&mut self.timers);
        }
        tracing::debug!(pending = self.timers.len(), "site shut down");
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn current_page(&self) -> Page {
        self.nav.current_page()
    }

    pub fn address(&self) -> String {
        self.nav.address()
    }

    pub fn routes(&self) -> &AddressMap {
        self.nav.routes()
    }

    pub fn navigation(&self) -> &NavigationStore {
        &self.nav
    }

    pub fn intro_part(&self) -> Option<usize> {
        self.intro.as_ref().and_then(|intro| intro.part())
    }

    /// Page of the mounted view, if any.
    pub fn mounted_page(&self) -> Option<Page> {
        self.view.as_ref().map(|view| view.as_view().page())
    }

    pub fn home(&self) -> Option<&HomeView> {
        match &self.view {
            Some(ActiveView::Home(view)) => Some(view),
            _ => None,
        }
    }

    pub fn waitlist(&self) -> Option<&WaitlistView> {
        match &self.view {
            Some(ActiveView::Waitlist(view)) => Some(view),
            _ => None,
        }
    }

    pub fn partners(&self) -> Option<&PartnersView> {
        match &self.view {
            Some(ActiveView::Partners(view)) => Some(view),
            _ => None,
        }
    }

    pub fn nomination(&self) -> Option<&NominationView> {
        match &self.view {
            Some(ActiveView::Nomination(view)) => Some(view),
            _ => None,
        }
    }

    /// Shorthand for the carousel gestures.
    pub fn gesture(&mut self, gesture: Gesture) -> bool {
        self.handle(HostEvent::Carousel(gesture))
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            page: self.current_page(),
            address: self.address(),
            elapsed_ms: self.now().as_millis() as u64,
            intro_part: self.intro_part(),
            view: self.view.as_ref().map(view_snapshot),
        }
    }

    fn remount(&mut self) {
        if self.intro.is_some() {
            return;
        }
        if let Some(mut old) = self.view.take() {
            old.as_view_mut().unmount(&mut self.timers);
        }
        let mut view = ActiveView::build(self.nav.current_page(), &self.config, &self.deck);
        view.as_view_mut().mount(&mut self.timers);
        self.view = Some(view);
    }

    fn dispatch_timer(&mut self, id: TimerId) {
        if let Some(intro) = &mut self.intro {
            match intro.on_timer(id, &mut self.timers) {
                Some(IntroEvent::Completed) => {
                    tracing::info!("intro completed");
                    self.intro = None;
                    self.remount();
                    return;
                }
                Some(IntroEvent::PartChanged { .. }) => return,
                None => {}
            }
        }

        let outcome = match &mut self.view {
            Some(view) => view.as_view_mut().on_timer(id, &mut self.timers),
            None => TimerOutcome::Ignored,
        };
        match outcome {
            TimerOutcome::Navigate(page) => {
                self.navigate(page);
            }
            TimerOutcome::Handled => {}
            TimerOutcome::Ignored => tracing::trace!(%id, "timer had no owner"),
        }
    }
}

fn view_snapshot(view: &ActiveView) -> ViewSnapshot {
    match view {
        ActiveView::Home(home) => {
            let carousel = home.carousel();
            let state = carousel.state();
            ViewSnapshot::Home {
                index: state.current_index,
                count: state.len,
                transitioning: state.is_transitioning(),
                author: carousel
                    .current()
                    .map(|c| c.author.clone())
                    .unwrap_or_default(),
                text: carousel.text().state().visible().to_string(),
                tagline: carousel.tagline().state().visible().to_string(),
                quill: home.quill(),
                autoplay: carousel.is_autoplaying(),
            }
        }
        ActiveView::Waitlist(form) => ViewSnapshot::Waitlist {
            email: form.displayed_email(),
            suggestion: form.suggestion().map(str::to_string),
            submitted: form.is_submitted(),
        },
        ActiveView::Partners(partners) => ViewSnapshot::Partners {
            logos: partners
                .logos()
                .map(|(name, revealed)| LogoSnapshot {
                    name: name.to_string(),
                    revealed,
                })
                .collect(),
        },
        ActiveView::Nomination(form) => ViewSnapshot::Nomination {
            name: form.field(NominationField::Name).to_string(),
            year: form.field(NominationField::Year).to_string(),
            reason: form.field(NominationField::Reason).to_string(),
            submitted: form.is_submitted(),
        },
    }
}
