//! Per-step validation rules
//!
//! Validation is a pure function of the step and the entered values so it can
//! be exercised without any controller or UI state.

use super::details::ContactDetails;
use super::field::FieldName;
use super::step::Step;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<FieldName, String>;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const COMPANY_REQUIRED: &str = "Company name is required";
pub const INDUSTRY_REQUIRED: &str = "Industry is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// One non-whitespace character. Whitespace follows the browser's rules:
/// U+FEFF counts, U+0085 does not.
const NON_SPACE: &str = r"(?:[^\s\x{FEFF}]|\x{85})";

/// `local@domain.tld` shape, no whitespace anywhere
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+$"))
        .expect("email pattern compiles")
});

fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Shape check only; the value is not trimmed first
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn require(errors: &mut FieldErrors, details: &ContactDetails, field: FieldName, message: &str) {
    if is_blank(details.get(field)) {
        errors.insert(field, message.to_string());
    }
}

/// Errors for the fields of `step`. An empty map means the step is valid.
pub fn validate_step(step: Step, details: &ContactDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        Step::Info => {
            require(&mut errors, details, FieldName::FirstName, FIRST_NAME_REQUIRED);
            require(&mut errors, details, FieldName::LastName, LAST_NAME_REQUIRED);
            if is_blank(&details.email) {
                errors.insert(FieldName::Email, EMAIL_REQUIRED.to_string());
            } else if !is_valid_email(&details.email) {
                errors.insert(FieldName::Email, EMAIL_INVALID.to_string());
            }
        }
        Step::Company => {
            require(&mut errors, details, FieldName::Company, COMPANY_REQUIRED);
            require(&mut errors, details, FieldName::Industry, INDUSTRY_REQUIRED);
        }
        Step::Message => {
            require(&mut errors, details, FieldName::Message, MESSAGE_REQUIRED);
        }
        Step::Success => {}
    }

    errors
}
