//! API error types

use std::time::Duration;

use super::JiraErrorDetail;

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status code the operation does not accept.
    #[error("HTTP {status} (expected {expected}): {message}")]
    Status {
        /// Status code the operation requires.
        expected: u16,
        /// Status code the server actually returned.
        status: u16,
        /// Error message.
        message: String,
        /// Raw response body.
        body: String,
        /// Structured error information from Jira, if the body carried any.
        detail: Option<Box<JiraErrorDetail>>,
    },

    /// Network error during an API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure raised by a transport implementation other than reqwest.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse an API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new status mismatch error, extracting Jira error detail
    /// from the body when present.
    pub fn status(expected: u16, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let detail = JiraErrorDetail::from_body(&body);
        let message = detail
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unexpected response status".to_string());
        Self::Status {
            expected,
            status,
            message,
            body,
            detail: detail.map(Box::new),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is a status mismatch error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the Jira error detail if available.
    pub fn jira_detail(&self) -> Option<&JiraErrorDetail> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Returns the raw response body if this error captured one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::Parse { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_extracts_detail() {
        let err = ApiError::status(200, 400, r#"{"errorMessages":["bad jql"],"errors":{}}"#);
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.jira_detail().unwrap().error_messages, vec!["bad jql"]);
        assert_eq!(err.to_string(), "HTTP 400 (expected 200): bad jql");
    }

    #[test]
    fn status_keeps_undecodable_body() {
        let err = ApiError::status(201, 502, "<html>gateway</html>");
        assert!(err.jira_detail().is_none());
        assert_eq!(err.response_body(), Some("<html>gateway</html>"));
    }
}
