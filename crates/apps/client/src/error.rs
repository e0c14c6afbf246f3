use reqwest::StatusCode;
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str = "The search process failed.";
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        /// The `message` field of the error body, when there was one.
        message: Option<String>,
    },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// What to show the user: the server's message verbatim, else a generic text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Status { .. } => GENERIC_FAILURE_MESSAGE.to_owned(),
            Self::Transport(_) | Self::Url(_) => UNKNOWN_FAILURE_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_used_verbatim() {
        let error = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("Error generating upload URL".to_owned()),
        };
        assert_eq!(error.user_message(), "Error generating upload URL");
        assert!(!error.is_not_found());
    }

    #[test]
    fn status_without_message_falls_back() {
        let error = ClientError::Status {
            status: StatusCode::FORBIDDEN,
            message: None,
        };
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn not_found_is_recognised() {
        let error = ClientError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("No match found in the collection.".to_owned()),
        };
        assert!(error.is_not_found());
    }

    #[test]
    fn bad_url_is_unknown_failure() {
        let error = ClientError::from(url::Url::parse("not a url").expect_err("url is invalid"));
        assert_eq!(error.user_message(), UNKNOWN_FAILURE_MESSAGE);
    }
}
