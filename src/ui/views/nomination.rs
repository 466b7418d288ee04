use super::{SubmitOutcome, TimerOutcome, View};
use crate::config::FormsConfig;
use crate::submit::{Submission, SubmissionHandler};
use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use crate::ui::nav::Page;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NominationField {
    Name,
    Year,
    Reason,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown nomination field '{0}' (expected name, year or reason)")]
pub struct UnknownField(pub String);

impl FromStr for NominationField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "year" => Ok(Self::Year),
            "reason" => Ok(Self::Reason),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Nominate a student. Only the name is required.
pub struct NominationView {
    name: String,
    year: String,
    reason: String,
    return_after: Duration,
    return_timer: Option<TimerId>,
    submitted: bool,
}

impl NominationView {
    pub fn new(forms: &FormsConfig) -> Self {
        Self {
            name: String::new(),
            year: String::new(),
            reason: String::new(),
            return_after: forms.return_home(),
            return_timer: None,
            submitted: false,
        }
    }

    pub fn set_field(&mut self, field: NominationField, text: &str) {
        let slot = match field {
            NominationField::Name => &mut self.name,
            NominationField::Year => &mut self.year,
            NominationField::Reason => &mut self.reason,
        };
        *slot = text.to_string();
    }

    pub fn field(&self, field: NominationField) -> &str {
        match field {
            NominationField::Name => &self.name,
            NominationField::Year => &self.year,
            NominationField::Reason => &self.reason,
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
        let name = self.name.trim();
        if name.is_empty() {
            tracing::debug!("nomination submit withheld: name is blank");
            return SubmitOutcome::Withheld;
        }
        handler.submit(Submission::Nomination {
            name: name.to_string(),
            year: self.year.trim().to_string(),
            reason: self.reason.trim().to_string(),
        });
        self.submitted = true;
        self.return_timer = Some(timers.schedule(self.return_after));
        tracing::info!("nomination handed off");
        SubmitOutcome::Submitted
    }
}

impl View for NominationView {
    fn page(&self) -> Page {
        Page::Nomination
    }

    fn mount(&mut self, _timers: &mut TimerQueue) {}

    fn unmount(&mut self, timers: &mut TimerQueue) {
        cancel_slot(timers, &mut self.return_timer);
    }

    fn on_timer(&mut self, id: TimerId, _timers: &mut TimerQueue) -> TimerOutcome {
        if claim(&mut self.return_timer, id) {
            TimerOutcome::Navigate(Page::Home)
        } else {
            TimerOutcome::Ignored
        }
    }
}
