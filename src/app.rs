//! Application state and key handling

use crate::config::ContactConfig;
use crate::state::{
    Activation, Advance, AppState, FieldKind, Form, ProgressAnimation, SplashState, Step, View,
};
use crate::submit::{OutboxSubmitter, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where completed forms go
    submitter: Box<dyn Submitter>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create the app with the outbox configured by the user
    pub fn new(config: &ContactConfig) -> Self {
        let outbox = OutboxSubmitter::new(config.outbox_dir());
        tracing::info!(outbox = %outbox.dir().display(), "contact form ready");
        Self::with_submitter(Box::new(outbox), config.show_splash())
    }

    pub fn with_submitter(submitter: Box<dyn Submitter>, show_splash: bool) -> Self {
        let mut state = AppState::default();
        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            None
        };

        Self {
            state,
            submitter,
            quit: false,
            splash_state,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Contact;
        // Start the progress bar once the form is actually visible
        self.state.progress = ProgressAnimation::new(self.state.form.step().progress());
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Whether the screen needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.progress.is_animating()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.in_splash() {
            if let Some(ref mut splash) = self.splash_state {
                splash.skip();
            }
            self.finish_splash();
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.state.status_message = None;

        if self.state.form.step() == Step::Success {
            self.handle_success_key(key).await
        } else {
            self.handle_form_key(key).await
        }
    }

    async fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let activation = self.state.form.activate();
                self.apply_activation(activation).await;
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.form;
        let on_actions_row = form.is_actions_row_active();
        let focused_kind = form.focused_field().map(|f| f.kind());

        match key.code {
            // Keyboard shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let advance = form.advance();
                self.apply_activation(Activation::Advance(advance)).await;
            }
            KeyCode::Tab | KeyCode::Down => form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => form.prev_focus(),
            KeyCode::Esc => {
                let retreated = form.retreat();
                self.apply_activation(Activation::Retreat(retreated)).await;
            }
            KeyCode::Enter if on_actions_row => {
                let activation = form.activate();
                self.apply_activation(activation).await;
            }
            KeyCode::Enter if matches!(focused_kind, Some(FieldKind::Multiline)) => {
                form.push_char('\n');
            }
            KeyCode::Enter if form.is_last_field_focused() => {
                let activation = form.activate();
                self.apply_activation(activation).await;
            }
            KeyCode::Enter => form.next_focus(),
            KeyCode::Left | KeyCode::Right if on_actions_row => form.toggle_button(),
            KeyCode::Left => form.cycle_option(false),
            KeyCode::Right => form.cycle_option(true),
            KeyCode::Char(' ') if matches!(focused_kind, Some(FieldKind::Select(_))) => {
                form.cycle_option(true);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c);
            }
            KeyCode::Backspace => form.pop_char(),
            _ => {}
        }
        Ok(())
    }

    async fn apply_activation(&mut self, activation: Activation) {
        match activation {
            Activation::Advance(Advance::Submitted) => {
                self.state.sync_progress();
                self.submit().await;
            }
            Activation::Advance(Advance::Moved(_))
            | Activation::Retreat(true)
            | Activation::Reset(true) => self.state.sync_progress(),
            Activation::Advance(Advance::Rejected) => {
                let count = self.state.form.errors().len();
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.state.status_message = Some(format!("{count} {noun} attention"));
            }
            Activation::Advance(Advance::Ignored)
            | Activation::Retreat(false)
            | Activation::Reset(false) => {}
        }
    }

    async fn submit(&mut self) {
        match self.submitter.submit(self.state.form.details()).await {
            Ok(receipt) => {
                tracing::debug!(id = %receipt.id, "submission accepted");
                self.state.status_message = Some(format!("Saved to {}", receipt.path.display()));
            }
            Err(err) => {
                tracing::error!(error = %err, "submission failed");
                self.push_error(format!("Your message could not be saved: {err}"));
            }
        }
    }
}
