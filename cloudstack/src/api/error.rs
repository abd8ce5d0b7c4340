use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("CloudStack API error {error_code} (CSExceptionErrorCode: {cs_error_code}): {message}")]
    ServerError {
        status: u16,
        error_code: i32,
        cs_error_code: i32,
        message: String,
    },

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Response to {command} is not valid JSON: {source}")]
    InvalidJson {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode response to {command}: {source}")]
    DecodeError {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The job did not finish before the poll deadline. Its outcome is
    /// unknown; `partial` holds the submission response so the caller can
    /// keep polling with `job_id`.
    #[error("Timeout while waiting for async job {job_id} to finish")]
    AsyncTimeout {
        job_id: String,
        partial: Box<serde_json::Value>,
    },

    #[error("Async job {job_id} failed with code {error_code}: {message}")]
    AsyncJobFailed {
        job_id: String,
        error_code: i32,
        message: String,
    },

    #[error("Waiting for async job {job_id} was cancelled")]
    Cancelled { job_id: String },

    #[error("No match found for {entity} {term}")]
    NotFound { entity: &'static str, term: String },

    #[error("Could not find an exact match for {entity} {term} among {count} results")]
    Ambiguous {
        entity: &'static str,
        term: String,
        count: usize,
    },

    #[error("Request hook rejected parameters: {0}")]
    Hook(String),
}

impl ApiError {
    pub fn is_async_timeout(&self) -> bool {
        matches!(self, Self::AsyncTimeout { .. })
    }

    /// Job id carried by async-job related errors
    pub fn job_id(&self) -> Option<&str> {
        match self {
            Self::AsyncTimeout { job_id, .. }
            | Self::AsyncJobFailed { job_id, .. }
            | Self::Cancelled { job_id } => Some(job_id),
            _ => None,
        }
    }

    /// Decode the submission response kept by an [`ApiError::AsyncTimeout`].
    pub fn partial_response<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            Self::AsyncTimeout { partial, .. } => {
                serde_json::from_value(partial.as_ref().clone()).ok()
            }
            _ => None,
        }
    }
}
