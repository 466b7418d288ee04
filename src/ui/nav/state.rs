use super::page::Page;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub current: Page,
    /// Page shown before the last change, if any.
    pub previous: Option<Page>,
}

impl UiState for NavState {}

impl NavState {
    pub fn new(current: Page) -> Self {
        Self {
            current,
            previous: None,
        }
    }
}
