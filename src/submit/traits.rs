//! Trait abstraction for the submission sink to enable mocking in tests

use super::outbox::{SubmissionReceipt, SubmitError};
use crate::state::ContactDetails;
use async_trait::async_trait;

/// Receives a completed contact form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the entered values
    async fn submit(&self, details: &ContactDetails) -> Result<SubmissionReceipt, SubmitError>;
}
