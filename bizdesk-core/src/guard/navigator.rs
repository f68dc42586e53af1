//! Navigation side effects requested by guards

use std::sync::Mutex;

/// Performs history-replacing navigation.
///
/// A replace is fire-and-forget: once requested it takes effect and there is
/// no way to cancel it.
pub trait Navigator: Send + Sync {
    fn replace(&self, location: &str);
}

/// Captures the most recent replacement so a request handler can turn it
/// into a redirect response after the page logic ran.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    location: Mutex<Option<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the requested location, leaving the navigator empty
    pub fn take(&self) -> Option<String> {
        self.location.lock().unwrap_or_else(|e| e.into_inner()).take()
    }

    pub fn location(&self) -> Option<String> {
        self.location.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, location: &str) {
        *self.location.lock().unwrap_or_else(|e| e.into_inner()) = Some(location.to_string());
    }
}
