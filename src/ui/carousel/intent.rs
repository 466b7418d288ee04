use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Step one card forward or back, wrapping at either end.
    Advance(Direction),
    /// Go straight to a card.
    Jump(usize),
    /// The transition delay elapsed.
    Commit,
}

impl Intent for CarouselIntent {}
