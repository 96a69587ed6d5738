//! Contact form steps and the transition table between them

use super::field::FieldName;

/// A stage of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Name and email
    #[default]
    Info,
    /// Company, industry and head count
    Company,
    /// Free-form enquiry text
    Message,
    /// Submitted; absorbing until the form is reset
    Success,
}

/// One row of the transition table
#[derive(Debug, Clone, Copy)]
struct StepLinks {
    step: Step,
    next: Option<Step>,
    previous: Option<Step>,
}

/// Ordered transition table. `previous` is only set where going back is allowed.
const TRANSITIONS: [StepLinks; 4] = [
    StepLinks {
        step: Step::Info,
        next: Some(Step::Company),
        previous: None,
    },
    StepLinks {
        step: Step::Company,
        next: Some(Step::Message),
        previous: Some(Step::Info),
    },
    StepLinks {
        step: Step::Message,
        next: Some(Step::Success),
        previous: Some(Step::Company),
    },
    StepLinks {
        step: Step::Success,
        next: None,
        previous: None,
    },
];

impl Step {
    /// All steps in form order
    #[cfg(test)]
    pub const ALL: [Step; 4] = [Step::Info, Step::Company, Step::Message, Step::Success];

    /// Number of steps that collect input (everything except `Success`)
    pub const INPUT_STEPS: u8 = 3;

    fn links(self) -> StepLinks {
        TRANSITIONS
            .iter()
            .copied()
            .find(|links| links.step == self)
            .unwrap_or(StepLinks {
                step: self,
                next: None,
                previous: None,
            })
    }

    /// Step reached by a successful advance
    pub fn next(self) -> Option<Step> {
        self.links().next
    }

    /// Step reached by going back
    pub fn previous(self) -> Option<Step> {
        self.links().previous
    }

    /// Fields shown (and validated) on this step, in display order
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            Step::Info => &[FieldName::FirstName, FieldName::LastName, FieldName::Email],
            Step::Company => &[FieldName::Company, FieldName::Industry, FieldName::Employees],
            Step::Message => &[FieldName::Message],
            Step::Success => &[],
        }
    }

    /// Header title, `None` on the success panel
    pub fn title(self) -> Option<&'static str> {
        match self {
            Step::Info => Some("Your Information"),
            Step::Company => Some("Company Details"),
            Step::Message => Some("Your Message"),
            Step::Success => None,
        }
    }

    /// 1-based position among the input steps
    pub fn number(self) -> Option<u8> {
        match self {
            Step::Info => Some(1),
            Step::Company => Some(2),
            Step::Message => Some(3),
            Step::Success => None,
        }
    }

    /// Progress bar fill in percent
    pub fn progress(self) -> u16 {
        match self {
            Step::Info => 33,
            Step::Company => 66,
            Step::Message | Step::Success => 100,
        }
    }

    /// Label of the button that moves the form forward
    pub fn primary_action(self) -> &'static str {
        match self {
            Step::Info | Step::Company => "Next",
            Step::Message => "Submit",
            Step::Success => "Start Over",
        }
    }

    pub fn is_success(self) -> bool {
        self == Step::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod transitions {
        use super::*;

        #[test]
        fn test_every_step_has_exactly_one_row() {
            for step in Step::ALL {
                let rows = TRANSITIONS.iter().filter(|l| l.step == step).count();
                assert_eq!(rows, 1, "{step:?}");
            }
        }

        #[test]
        fn test_next_follows_form_order() {
            assert_eq!(Step::Info.next(), Some(Step::Company));
            assert_eq!(Step::Company.next(), Some(Step::Message));
            assert_eq!(Step::Message.next(), Some(Step::Success));
            assert_eq!(Step::Success.next(), None);
        }

        #[test]
        fn test_previous_only_from_middle_steps() {
            assert_eq!(Step::Info.previous(), None);
            assert_eq!(Step::Company.previous(), Some(Step::Info));
            assert_eq!(Step::Message.previous(), Some(Step::Company));
            assert_eq!(Step::Success.previous(), None);
        }

        #[test]
        fn test_next_then_previous_returns_for_input_steps() {
            for step in [Step::Info, Step::Company] {
                let next = step.next().unwrap();
                assert_eq!(next.previous(), Some(step));
            }
        }

        #[test]
        fn test_default_is_info() {
            assert_eq!(Step::default(), Step::Info);
        }
    }

    mod presentation {
        use super::*;

        #[test]
        fn test_titles() {
            assert_eq!(Step::Info.title(), Some("Your Information"));
            assert_eq!(Step::Company.title(), Some("Company Details"));
            assert_eq!(Step::Message.title(), Some("Your Message"));
            assert_eq!(Step::Success.title(), None);
        }

        #[test]
        fn test_numbers_cover_input_steps() {
            let numbered: Vec<u8> = Step::ALL.iter().filter_map(|s| s.number()).collect();
            assert_eq!(numbered, vec![1, 2, 3]);
            assert_eq!(numbered.len(), Step::INPUT_STEPS as usize);
        }

        #[test]
        fn test_progress_is_monotonic() {
            let progress: Vec<u16> = Step::ALL.iter().map(|s| s.progress()).collect();
            assert_eq!(progress, vec![33, 66, 100, 100]);
        }

        #[test]
        fn test_primary_action_labels() {
            assert_eq!(Step::Info.primary_action(), "Next");
            assert_eq!(Step::Company.primary_action(), "Next");
            assert_eq!(Step::Message.primary_action(), "Submit");
            assert_eq!(Step::Success.primary_action(), "Start Over");
        }

        #[test]
        fn test_each_field_belongs_to_one_step() {
            for field in FieldName::ALL {
                let owners = Step::ALL
                    .iter()
                    .filter(|s| s.fields().contains(&field))
                    .count();
                assert_eq!(owners, 1, "{field:?}");
            }
        }

        #[test]
        fn test_success_has_no_fields() {
            assert!(Step::Success.fields().is_empty());
            assert!(Step::Success.is_success());
            assert!(!Step::Message.is_success());
        }
    }
}
