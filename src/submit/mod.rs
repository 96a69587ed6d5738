//! Submission sink for completed contact forms

mod outbox;
mod traits;

pub use outbox::{OutboxSubmitter, SubmissionReceipt, SubmitError};
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
