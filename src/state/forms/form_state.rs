//! Contact form controller: step transitions, field edits and focus

use super::details::ContactDetails;
use super::field::{cycle_option, FieldKind, FieldName};
use super::step::Step;
use super::validation::{validate_step, FieldErrors};

/// Trait for moving keyboard focus through a form
pub trait Form {
    fn focus_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);
    fn next_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus();
        self.set_focus((current + 1) % count);
    }
    fn prev_focus(&mut self) {
        let count = self.focus_count();
        let current = self.focus();
        if current == 0 {
            self.set_focus(count - 1);
        } else {
            self.set_focus(current - 1);
        }
    }
}

/// Result of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to an input step
    Moved(Step),
    /// Left `Message` for `Success`; the entered values are ready to send
    Submitted,
    /// Current step failed validation
    Rejected,
    /// Nothing to advance to
    Ignored,
}

/// Buttons on the actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Back,
    #[default]
    Primary,
}

/// What activating the selected button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Advance(Advance),
    Retreat(bool),
    Reset(bool),
}

/// Multi-step contact form state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    step: Step,
    details: ContactDetails,
    errors: FieldErrors,
    /// Index into the current step's fields; one past the end is the actions row
    focus_index: usize,
    selected_button: FormButton,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.details.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Store a value and drop any error recorded for that field
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.details.set(field, value);
        self.errors.remove(&field);
    }

    /// Validate `step` against the current values, replacing the error map
    pub fn validate_step(&mut self, step: Step) -> bool {
        self.errors = validate_step(step, &self.details);
        self.errors.is_empty()
    }

    /// Move to the next step if the current one validates
    pub fn advance(&mut self) -> Advance {
        let from = self.step;
        let Some(to) = from.next() else {
            return Advance::Ignored;
        };

        if !self.validate_step(from) {
            tracing::debug!(
                step = ?from,
                fields = ?self.errors.keys().map(|f| f.key()).collect::<Vec<_>>(),
                "step rejected"
            );
            self.focus_first_error();
            return Advance::Rejected;
        }

        self.enter_step(to);
        tracing::info!(from = ?from, to = ?to, "step advanced");
        if to.is_success() {
            Advance::Submitted
        } else {
            Advance::Moved(to)
        }
    }

    /// Go back one step without validating. Returns false when there is nowhere to go.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.enter_step(previous);
                true
            }
            None => false,
        }
    }

    /// Start over from `Success`. Returns false (and changes nothing) on any other step.
    pub fn reset(&mut self) -> bool {
        if !self.step.is_success() {
            return false;
        }
        self.details.clear();
        self.errors.clear();
        self.enter_step(Step::Info);
        true
    }

    fn enter_step(&mut self, step: Step) {
        self.step = step;
        self.focus_index = 0;
        self.selected_button = FormButton::Primary;
    }

    fn focus_first_error(&mut self) {
        if let Some(field) = self.errors.keys().next().copied() {
            self.focus_field(field);
        }
    }

    /// Field with keyboard focus, `None` on the actions row
    pub fn focused_field(&self) -> Option<FieldName> {
        self.step.fields().get(self.focus_index).copied()
    }

    pub fn is_actions_row_active(&self) -> bool {
        self.focused_field().is_none()
    }

    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = self.step.fields().iter().position(|f| *f == field) {
            self.focus_index = index;
        }
    }

    pub fn is_last_field_focused(&self) -> bool {
        self.focus_index + 1 == self.step.fields().len()
    }

    /// Whether the actions row shows a Back button
    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn selected_button(&self) -> FormButton {
        if self.can_go_back() {
            self.selected_button
        } else {
            FormButton::Primary
        }
    }

    /// Toggle between Back and the primary button
    pub fn toggle_button(&mut self) {
        if !self.can_go_back() {
            return;
        }
        self.selected_button = match self.selected_button {
            FormButton::Back => FormButton::Primary,
            FormButton::Primary => FormButton::Back,
        };
    }

    /// Run whatever the selected button stands for on this step
    pub fn activate(&mut self) -> Activation {
        if self.step.is_success() {
            return Activation::Reset(self.reset());
        }
        if self.is_actions_row_active() && self.selected_button() == FormButton::Back {
            return Activation::Retreat(self.retreat());
        }
        Activation::Advance(self.advance())
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Text if c == '\n' => {}
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.details.get(field).to_string();
                value.push(c);
                self.set_field(field, value);
            }
            FieldKind::Select(_) => {}
        }
    }

    /// Remove the last character of the focused text field
    pub fn pop_char(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.kind().is_select() {
            return;
        }
        let mut value = self.details.get(field).to_string();
        if value.pop().is_some() {
            self.set_field(field, value);
        }
    }

    /// Pick the next (or previous) option of the focused select field
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if let FieldKind::Select(options) = field.kind() {
            let value = cycle_option(options, self.details.get(field), forward);
            self.set_field(field, value);
        }
    }
}

impl Form for ContactForm {
    fn focus_count(&self) -> usize {
        self.step.fields().len() + 1 // fields + actions row
    }
    fn focus(&self) -> usize {
        self.focus_index
    }
    fn set_focus(&mut self, index: usize) {
        self.focus_index = index.min(self.focus_count() - 1);
    }
}
