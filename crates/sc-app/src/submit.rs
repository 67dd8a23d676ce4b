//! Remote submission client.
//!
//! One blocking POST per submission, default agent timeouts, no retry. The
//! response body is never read; any HTTP ok-class status counts as success
//! and everything else is a failure the user may retry manually.

use sc_record::SubmissionPayload;
use thiserror::Error;

/// Echo endpoint the form ships against; no real persistence contract.
pub const DEFAULT_ENDPOINT: &str = "https://httpbin.org/post";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("submission rejected with HTTP status {code}")]
    Status { code: u16 },

    #[error("network error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone)]
pub struct SubmitClient {
    endpoint: String,
}

impl Default for SubmitClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SubmitClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform the single submission request.
    pub fn post(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        let body = payload.to_json()?;
        match ureq::post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, _)) => Err(SubmitError::Status { code }),
            Err(err) => Err(SubmitError::Transport(err.to_string())),
        }
    }
}
