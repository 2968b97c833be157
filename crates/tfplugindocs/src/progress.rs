//! Progress reporting sink injected into every pipeline stage.
//!
//! Reporting has no effect on control flow. Stages call [`Progress::report`]
//! with a formatted, human-readable message and carry on.

/// Receiver for human-readable progress messages.
pub trait Progress {
    fn report(&self, message: &str);
}

impl<F> Progress for F
where
    F: Fn(&str),
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Emit progress messages as `tracing` info events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl Progress for TracingProgress {
    fn report(&self, message: &str) {
        tracing::info!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::Progress;

    /// Collects messages so tests can assert on what was reported.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingProgress {
        pub messages: RefCell<Vec<String>>,
    }

    impl RecordingProgress {
        pub(crate) fn contains(&self, needle: &str) -> bool {
            self.messages.borrow().iter().any(|m| m.contains(needle))
        }
    }

    impl Progress for RecordingProgress {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }
}
