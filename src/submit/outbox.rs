//! File-based outbox for completed contact forms
//!
//! Every submission becomes one pretty-printed JSON file named after its
//! timestamp and id, so a separate process can pick them up and send them on.

use super::traits::Submitter;
use crate::state::ContactDetails;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while handing a submission over
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to create outbox directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write submission {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A completed contact form as written to the outbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub details: ContactDetails,
}

impl Submission {
    pub fn new(details: ContactDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            details,
        }
    }

    /// `<yyyymmddThhmmss>-<id>.json`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            self.submitted_at.format("%Y%m%dT%H%M%S"),
            self.id
        )
    }
}

/// Where a submission ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub path: PathBuf,
}

/// Writes submissions into a directory
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    dir: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Submitter for OutboxSubmitter {
    async fn submit(&self, details: &ContactDetails) -> Result<SubmissionReceipt, SubmitError> {
        let submission = Submission::new(details.clone());
        let content = serde_json::to_string_pretty(&submission)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| SubmitError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.dir.join(submission.file_name());
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| SubmitError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!(id = %submission.id, path = %path.display(), "submission written");
        Ok(SubmissionReceipt {
            id: submission.id,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use tokio_test::assert_ok;

    fn temp_outbox(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("consultpro-contact-{name}-{}", Uuid::new_v4()))
    }

    fn sample_details() -> ContactDetails {
        let mut details = ContactDetails::default();
        details.set(FieldName::FirstName, "Ann");
        details.set(FieldName::LastName, "Lee");
        details.set(FieldName::Email, "ann@x.com");
        details.set(FieldName::Company, "Acme");
        details.set(FieldName::Industry, "finance");
        details.set(FieldName::Message, "Hello");
        details
    }

    #[test]
    fn test_file_name_contains_id() {
        let submission = Submission::new(ContactDetails::default());
        let name = submission.file_name();
        assert!(name.ends_with(&format!("-{}.json", submission.id)));
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = Submission::new(sample_details());
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("submittedAt").is_some());
        assert_eq!(json["details"]["firstName"], "Ann");
        assert_eq!(json["details"]["employees"], "");
    }

    #[tokio::test]
    async fn test_submit_writes_json_file() {
        let dir = temp_outbox("write");
        let outbox = OutboxSubmitter::new(&dir);

        let receipt = assert_ok!(outbox.submit(&sample_details()).await);
        assert!(receipt.path.starts_with(&dir));

        let content = std::fs::read_to_string(&receipt.path).unwrap();
        let parsed: Submission = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.id, receipt.id);
        assert_eq!(parsed.details, sample_details());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_each_submission_gets_its_own_file() {
        let dir = temp_outbox("unique");
        let outbox = OutboxSubmitter::new(&dir);

        let first = outbox.submit(&sample_details()).await.unwrap();
        let second = outbox.submit(&sample_details()).await.unwrap();
        assert_ne!(first.path, second.path);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_unwritable_outbox_reports_error() {
        let blocker = temp_outbox("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let outbox = OutboxSubmitter::new(blocker.join("outbox"));

        let err = outbox.submit(&sample_details()).await.unwrap_err();
        assert!(matches!(err, SubmitError::CreateDir { .. }));
        assert!(err.to_string().contains("outbox"));

        std::fs::remove_file(&blocker).ok();
    }
}
