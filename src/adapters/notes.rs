use crate::domain::ports::Notes;
use std::cell::RefCell;

/// Discards every note.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotes;

impl Notes for NoopNotes {
    fn note(&self, _message: &str) {}
}

/// Forwards notes to the `tracing` subscriber as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotes;

impl Notes for TracingNotes {
    fn note(&self, message: &str) {
        tracing::warn!("⚠️ {}", message);
    }
}

/// Keeps notes in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectedNotes {
    messages: RefCell<Vec<String>>,
}

impl CollectedNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Notes for CollectedNotes {
    fn note(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_notes_keep_order() {
        let notes = CollectedNotes::new();
        assert!(notes.is_empty());

        notes.note("first");
        notes.note("second");

        assert_eq!(notes.len(), 2);
        assert_eq!(notes.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_noop_notes_accepts_anything() {
        NoopNotes.note("ignored");
    }
}
