//! Application state definitions

use super::forms::ContactForm;
use super::progress::ProgressAnimation;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with banner animation
    Splash,
    #[default]
    Contact,
}

/// Everything the UI renders from
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub form: ContactForm,
    pub progress: ProgressAnimation,
    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// One-line message for the status bar
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let form = ContactForm::new();
        let progress = ProgressAnimation::new(form.step().progress());
        Self {
            current_view: View::default(),
            form,
            progress,
            error_queue: VecDeque::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Point the progress bar at the current step
    pub fn sync_progress(&mut self) {
        self.progress.retarget(self.form.step().progress());
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, Step};

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Contact);
        assert_eq!(state.form.step(), Step::Info);
        assert_eq!(state.progress.target(), 33);
        assert!(!state.has_errors());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error();
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_sync_progress_follows_step() {
        let mut state = AppState::default();
        state.form.set_field(FieldName::FirstName, "Ann");
        state.form.set_field(FieldName::LastName, "Lee");
        state.form.set_field(FieldName::Email, "ann@x.com");
        state.form.advance();
        state.sync_progress();
        assert_eq!(state.progress.target(), 66);
    }
}
