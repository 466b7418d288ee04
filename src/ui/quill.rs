//! Quill that follows whichever confession field is being written.

use crate::ui::typewriter::TypewriterState;
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuillField {
    Text,
    Tagline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuillPosition {
    pub field: QuillField,
    /// Caret offset in chars from the start of the field.
    pub caret: usize,
}

/// Observer of the text and tagline typewriters.
///
/// Reads the same published state the renderer reads; it never measures or
/// drives the reveal itself.
pub struct QuillTracker {
    text: watch::Receiver<TypewriterState>,
    tagline: watch::Receiver<TypewriterState>,
}

impl QuillTracker {
    pub fn new(
        text: watch::Receiver<TypewriterState>,
        tagline: watch::Receiver<TypewriterState>,
    ) -> Self {
        Self { text, tagline }
    }

    /// Where the quill sits, or `None` when nothing is being written.
    pub fn position(&self) -> Option<QuillPosition> {
        let text = self.text.borrow();
        if text.active {
            return Some(QuillPosition {
                field: QuillField::Text,
                caret: text.revealed_len,
            });
        }
        let tagline = self.tagline.borrow();
        tagline.active.then_some(QuillPosition {
            field: QuillField::Tagline,
            caret: tagline.revealed_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerQueue;
    use crate::ui::typewriter::Typewriter;
    use std::time::Duration;

    #[test]
    fn follows_text_then_tagline() {
        let mut timers = TimerQueue::new();
        let mut text = Typewriter::new();
        let mut tagline = Typewriter::new();
        let quill = QuillTracker::new(text.subscribe(), tagline.subscribe());
        assert_eq!(quill.position(), None);

        text.reveal("ab", Duration::from_millis(10), &mut timers);
        let id = timers.pop_next().unwrap();
        text.on_timer(id, &mut timers);
        assert_eq!(
            quill.position(),
            Some(QuillPosition {
                field: QuillField::Text,
                caret: 1
            })
        );

        let id = timers.pop_next().unwrap();
        text.on_timer(id, &mut timers);
        assert_eq!(quill.position(), None);

        tagline.reveal("x", Duration::from_millis(10), &mut timers);
        assert_eq!(
            quill.position(),
            Some(QuillPosition {
                field: QuillField::Tagline,
                caret: 0
            })
        );
    }
}
