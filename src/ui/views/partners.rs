use super::{TimerOutcome, View};
use crate::config::{PartnerLogo, PartnersConfig};
use crate::timer::{cancel_slot, claim, TimerId, TimerQueue};
use crate::ui::nav::Page;
use std::time::Duration;

struct LogoSlot {
    logo: PartnerLogo,
    revealed: bool,
    timer: Option<TimerId>,
}

/// Partner showcase: each logo is sketched in after its own delay.
pub struct PartnersView {
    slots: Vec<LogoSlot>,
}

impl PartnersView {
    pub fn new(config: &PartnersConfig) -> Self {
        let slots = config
            .logos
            .iter()
            .cloned()
            .map(|logo| LogoSlot {
                logo,
                revealed: false,
                timer: None,
            })
            .collect();
        Self { slots }
    }

    /// Logo names with their reveal state, in display order.
    pub fn logos(&self) -> impl Iterator<Item = (&str, bool)> {
        self.slots
            .iter()
            .map(|slot| (slot.logo.name.as_str(), slot.revealed))
    }

    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.revealed).count()
    }
}

impl View for PartnersView {
    fn page(&self) -> Page {
        Page::Partners
    }

    fn mount(&mut self, timers: &mut TimerQueue) {
        for slot in &mut self.slots {
            cancel_slot(timers, &mut slot.timer);
            slot.revealed = false;
            slot.timer = Some(timers.schedule(Duration::from_millis(slot.logo.delay_ms)));
        }
    }

    fn unmount(&mut self, timers: &mut TimerQueue) {
        for slot in &mut self.slots {
            cancel_slot(timers, &mut slot.timer);
        }
    }

    fn on_timer(&mut self, id: TimerId, _timers: &mut TimerQueue) -> TimerOutcome {
        match self.slots.iter_mut().find(|slot| slot.timer == Some(id)) {
            Some(slot) => {
                claim(&mut slot.timer, id);
                slot.revealed = true;
                tracing::debug!(logo = %slot.logo.name, "partner logo revealed");
                TimerOutcome::Handled
            }
            None => TimerOutcome::Ignored,
        }
    }
}
