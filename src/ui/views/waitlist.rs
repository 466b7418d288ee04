use super::{SubmitOutcome, TimerOutcome, View};
use crate::config::FormsConfig;
use crate::submit::{Submission, SubmissionHandler};
use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use crate::ui::nav::Page;
use crate::ui::typewriter::Typewriter;
use std::time::Duration;

const DOMAINS: &[(char, &str)] = &[
    ('a', "arizona.edu"),
    ('b', "berkeley.edu"),
    ('c', "columbia.edu"),
    ('d', "duke.edu"),
    ('e', "emory.edu"),
    ('f', "fsu.edu"),
    ('g', "gmail.com"),
    ('h', "harvard.edu"),
    ('i', "illinois.edu"),
    ('j', "jhu.edu"),
    ('k', "ku.edu"),
    ('l', "lsu.edu"),
    ('m', "mit.edu"),
    ('n', "northwestern.edu"),
    ('o', "osu.edu"),
    ('p', "princeton.edu"),
    ('r', "rice.edu"),
    ('s', "stanford.edu"),
    ('t', "tufts.edu"),
    ('u', "umich.edu"),
    ('v', "vanderbilt.edu"),
    ('w', "washington.edu"),
    ('y', "yahoo.com"),
];

/// Domain to offer when `email` ends in `@` followed by exactly one letter.
pub fn suggest_domain(email: &str) -> Option<&'static str> {
    let (_, after_at) = email.rsplit_once('@')?;
    let mut chars = after_at.chars();
    let letter = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    DOMAINS
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, domain)| *domain)
}

pub struct WaitlistView {
    email: String,
    suggestion: Option<&'static str>,
    /// Plays an accepted suggestion back character by character.
    writer: Typewriter,
    writer_interval: Duration,
    return_after: Duration,
    return_timer: Option<TimerId>,
    submitted: bool,
}

impl WaitlistView {
    pub fn new(forms: &FormsConfig) -> Self {
        Self {
            email: String::new(),
            suggestion: None,
            writer: Typewriter::new(),
            writer_interval: forms.suggestion_interval(),
            return_after: forms.return_home(),
            return_timer: None,
            submitted: false,
        }
    }

    /// Replace the field's text, as typed by the user.
    pub fn set_email(&mut self, text: &str, timers: &mut TimerQueue) {
        self.writer.clear(timers);
        self.email = text.to_string();
        self.suggestion = suggest_domain(&self.email);
    }

    /// Complete the address with the offered domain.
    pub fn accept_suggestion(&mut self, timers: &mut TimerQueue) -> bool {
        let Some(domain) = self.suggestion.take() else {
            return false;
        };
        let local = self
            .email
            .rsplit_once('@')
            .map(|(local, _)| local)
            .unwrap_or_default();
        self.email = format!("{}@{}", local, domain);
        self.writer.reveal(&self.email, self.writer_interval, timers);
        true
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn suggestion(&self) -> Option<&'static str> {
        self.suggestion
    }

    /// Text the field shows: the playback while it runs, the email otherwise.
    pub fn displayed_email(&self) -> String {
        if self.writer.is_active() {
            self.writer.state().visible().to_string()
        } else {
            self.email.clone()
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit(
        &mut self,
        handler: &mut dyn SubmissionHandler,
        timers: &mut TimerQueue,
    ) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        let email = self.email.trim();
        if email.is_empty() {
            tracing::debug!("waitlist submit withheld: email is blank");
            return SubmitOutcome::Withheld;
        }
        handler.submit(Submission::Waitlist {
            email: email.to_string(),
        });
        self.submitted = true;
        self.return_timer = Some(timers.schedule(self.return_after));
        tracing::info!("waitlist submission handed off");
        SubmitOutcome::Submitted
    }
}

impl View for WaitlistView {
    fn page(&self) -> Page {
        Page::Waitlist
    }

    fn mount(&mut self, _timers: &mut TimerQueue) {}

    fn unmount(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.return_timer);
        self.writer.cancel(timers);
    }

    fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> TimerOutcome {
        if claim(&mut self.return_timer, id) {
            return TimerOutcome::Navigate(Page::Home);
        }
        match self.writer.on_timer(id, timers) {
            Some(_) => TimerOutcome::Handled,
            None => TimerOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_only_for_single_letter_after_at() {
        assert_eq!(suggest_domain("sam@v"), Some("vanderbilt.edu"));
        assert_eq!(suggest_domain("sam@G"), Some("gmail.com"));
        assert_eq!(suggest_domain("sam@"), None);
        assert_eq!(suggest_domain("sam@va"), None);
        assert_eq!(suggest_domain("sam@x"), None);
        assert_eq!(suggest_domain("sam"), None);
    }

    #[test]
    fn accepted_suggestion_is_written_out() {
        let mut timers = TimerQueue::new();
        let mut view = WaitlistView::new(&FormsConfig::default());
        view.set_email("kim@m", &mut timers);
        assert_eq!(view.suggestion(), Some("mit.edu"));
        assert!(view.accept_suggestion(&mut timers));
        assert_eq!(view.email(), "kim@mit.edu");
        assert_eq!(view.displayed_email(), "");

        while let Some(id) = timers.pop_next() {
            assert_eq!(view.on_timer(id, &mut timers), TimerOutcome::Handled);
        }
        assert_eq!(view.displayed_email(), "kim@mit.edu");
        assert_eq!(view.suggestion(), None);
    }
}
