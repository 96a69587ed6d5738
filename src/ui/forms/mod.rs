//! Form rendering module
//!
//! - `field_renderer`: labelled inputs with validation messages
//! - `contact_form`: the multi-step contact form card

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
