//! Contact form domain layer
//!
//! - `step`: the ordered steps and their transition table
//! - `field`: field catalogue and select options
//! - `details`: the entered values
//! - `validation`: pure per-step rules
//! - `form_state`: the controller tying them together

mod details;
mod field;
mod form_state;
mod step;
mod validation;

pub use details::ContactDetails;
pub use field::{option_label, FieldKind, FieldName};
pub use form_state::{Activation, Advance, ContactForm, Form, FormButton};
pub use step::Step;
