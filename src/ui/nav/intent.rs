use super::page::Page;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// In-app navigation (button, form completion, sticky note).
    Navigate { target: Page },
    /// The host's address changed underneath us and was resolved to `page`.
    AddressChanged { page: Page },
}

impl Intent for NavIntent {}
