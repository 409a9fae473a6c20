//! Error handling for the API module.

use crate::logging::LogLevel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Build an `Http` error from a non-success response, pulling the
    /// human-readable message out of the body where possible.
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = message_from_body(&body).unwrap_or(body);

        ApiError::Http { status, message }
    }

    /// The message shown to the user for this failure.
    ///
    /// Preference order: the server's error detail, then the transport
    /// error's own message, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Http { .. } => "Unknown error occurred".to_string(),
            ApiError::Reqwest(e) => {
                let msg = e.to_string();
                if msg.trim().is_empty() {
                    "Unknown error occurred".to_string()
                } else {
                    msg
                }
            }
        }
    }

    /// Classify the failure for activity-log display.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Temporary server-side issues
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Warn,
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            // Client-side mistakes (bad token id, bad address)
            ApiError::Http { .. } => LogLevel::Error,
            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

/// Probe an error body for the FastAPI-style `detail` field, then `message`.
/// Returns `None` when the body is not JSON or carries neither field.
fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for field in ["detail", "message"] {
        if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// FastAPI error bodies carry the message under "detail".
    fn detail_field_is_preferred() {
        let body = r#"{"detail": "insufficient funds", "message": "other"}"#;
        assert_eq!(
            message_from_body(body),
            Some("insufficient funds".to_string())
        );
    }

    #[test]
    fn message_field_is_second_choice() {
        let body = r#"{"message": "token does not exist"}"#;
        assert_eq!(
            message_from_body(body),
            Some("token does not exist".to_string())
        );
    }

    #[test]
    /// Non-JSON bodies (HTML error pages, plain text) yield no message.
    fn non_json_body_yields_none() {
        assert_eq!(message_from_body("<html>502 Bad Gateway</html>"), None);
        assert_eq!(message_from_body(""), None);
    }

    #[test]
    fn user_message_tiers() {
        let err = ApiError::Http {
            status: 500,
            message: "insufficient funds".to_string(),
        };
        assert_eq!(err.user_message(), "insufficient funds");

        let err = ApiError::Http {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Unknown error occurred");
    }

    #[test]
    fn rate_limits_and_server_errors_are_warnings() {
        let err = ApiError::Http {
            status: 429,
            message: String::new(),
        };
        assert_eq!(err.log_level(), LogLevel::Warn);

        let err = ApiError::Http {
            status: 503,
            message: String::new(),
        };
        assert_eq!(err.log_level(), LogLevel::Warn);

        let err = ApiError::Http {
            status: 404,
            message: String::new(),
        };
        assert_eq!(err.log_level(), LogLevel::Error);
    }
}
