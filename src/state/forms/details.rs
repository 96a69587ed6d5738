//! Field values entered into the contact form

use super::field::FieldName;
use serde::{Deserialize, Serialize};

/// Values of every contact form field. Empty string means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub employees: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Company => &self.company,
            FieldName::Industry => &self.industry,
            FieldName::Employees => &self.employees,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Company => &mut self.company,
            FieldName::Industry => &mut self.industry,
            FieldName::Employees => &mut self.employees,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
