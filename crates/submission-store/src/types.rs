//! Submission receipt types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a successfully submitted registration.
///
/// Written once, on success only. Its presence is the only signal the
/// application ever reads back; the field contents are kept for the record
/// and never flow back into a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub full_name: String,
    pub discord_user: String,
    pub email: String,
    pub motivation: String,
    pub bootcamps: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(
        full_name: impl Into<String>,
        discord_user: impl Into<String>,
        email: impl Into<String>,
        motivation: impl Into<String>,
        bootcamps: Vec<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            discord_user: discord_user.into(),
            email: email.into(),
            motivation: motivation.into(),
            bootcamps,
            submitted_at: Utc::now(),
        }
    }
}
