//! Form field catalogue

use std::fmt;

/// Every input the contact form collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Company,
    Industry,
    Employees,
    Message,
}

/// A choice offered by a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Select(&'static [SelectOption]),
}

pub const INDUSTRY_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Select Industry",
    },
    SelectOption {
        value: "technology",
        label: "Technology",
    },
    SelectOption {
        value: "finance",
        label: "Finance",
    },
    SelectOption {
        value: "healthcare",
        label: "Healthcare",
    },
    SelectOption {
        value: "retail",
        label: "Retail",
    },
    SelectOption {
        value: "manufacturing",
        label: "Manufacturing",
    },
    SelectOption {
        value: "other",
        label: "Other",
    },
];

pub const EMPLOYEE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "",
        label: "Select Range",
    },
    SelectOption {
        value: "1-10",
        label: "1-10",
    },
    SelectOption {
        value: "11-50",
        label: "11-50",
    },
    SelectOption {
        value: "51-200",
        label: "51-200",
    },
    SelectOption {
        value: "201-500",
        label: "201-500",
    },
    SelectOption {
        value: "501+",
        label: "501+",
    },
];

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Company,
        FieldName::Industry,
        FieldName::Employees,
        FieldName::Message,
    ];

    /// camelCase key used in submissions and logs
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Company => "company",
            FieldName::Industry => "industry",
            FieldName::Employees => "employees",
            FieldName::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email Address",
            FieldName::Company => "Company Name",
            FieldName::Industry => "Industry",
            FieldName::Employees => "Number of Employees",
            FieldName::Message => "How can we help you?",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::Industry => FieldKind::Select(INDUSTRY_OPTIONS),
            FieldName::Employees => FieldKind::Select(EMPLOYEE_OPTIONS),
            FieldName::Message => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Multiline)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::Select(_))
    }
}

/// Label for a select value; unknown values are shown as-is
pub fn option_label(options: &'static [SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Value of the option after (or before) `value`, wrapping around.
/// An unknown value is treated as the placeholder.
pub fn cycle_option(options: &'static [SelectOption], value: &str, forward: bool) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let current = options.iter().position(|o| o.value == value).unwrap_or(0);
    let len = options.len();
    let index = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    options[index].value
}
