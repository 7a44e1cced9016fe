use reqwest::StatusCode;
use thiserror::Error;

use crate::report::ServiceErrorBody;
use crate::response::ValidationResponse;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Connect failures, timeouts and body read errors, straight from the transport.
    #[error("request to validation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. The reply is kept verbatim.
    #[error("validation service returned {status}")]
    Status {
        status: StatusCode,
        response: Box<ValidationResponse>,
    },

    #[error("failed to decode validation response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ValidationError {
    /// HTTP status of the reply, if the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// The untouched reply behind a [`ValidationError::Status`].
    pub fn response(&self) -> Option<&ValidationResponse> {
        match self {
            Self::Status { response, .. } => Some(&**response),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_connect())
    }

    /// The `error` message the service puts in its body when its handler fails.
    pub fn service_message(&self) -> Option<String> {
        self.response()
            .and_then(|response| response.json::<ServiceErrorBody>().ok())
            .map(|body| body.error)
    }
}
