#[cfg(feature = "network")]
use chrono::{DateTime, Utc};
#[cfg(feature = "network")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form-relay endpoint the feedback is posted to. The relay forwards the
/// payload to the maintainer; nothing is stored locally.
pub const RELAY_URL: &str = "https://api.web3forms.com/submit";

#[cfg(feature = "network")]
const SUBJECT: &str = "New Feedback - Attendance Calculator";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Feedback {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(FeedbackError::MissingField);
        }
        Ok(())
    }
}

/// Wire format expected by the web3forms relay.
#[cfg(feature = "network")]
#[derive(Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: &'static str,
    sent_at: DateTime<Utc>,
}

#[cfg(feature = "network")]
#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("No feedback access key configured (set feedback_access_key in config.toml)")]
    MissingAccessKey,
    #[error("This build was compiled without network support")]
    Disabled,
    #[cfg(feature = "network")]
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Failed to send: {0}")]
    Rejected(String),
}

/// Post the feedback to the relay. Blocking with a 10s timeout; the one-off
/// call is not worth an async runtime.
#[cfg(feature = "network")]
pub fn submit(access_key: &str, feedback: &Feedback) -> Result<(), FeedbackError> {
    feedback.validate()?;
    if access_key.is_empty() {
        return Err(FeedbackError::MissingAccessKey);
    }

    let payload = RelayPayload {
        access_key,
        name: &feedback.name,
        email: &feedback.email,
        message: &feedback.message,
        subject: SUBJECT,
        sent_at: Utc::now(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let response = client.post(RELAY_URL).json(&payload).send()?;
    let body: RelayResponse = response.json()?;

    if body.success {
        Ok(())
    } else if body.message.is_empty() {
        Err(FeedbackError::Rejected("Please try again.".to_string()))
    } else {
        Err(FeedbackError::Rejected(body.message))
    }
}

#[cfg(not(feature = "network"))]
pub fn submit(access_key: &str, feedback: &Feedback) -> Result<(), FeedbackError> {
    feedback.validate()?;
    if access_key.is_empty() {
        return Err(FeedbackError::MissingAccessKey);
    }
    Err(FeedbackError::Disabled)
}
