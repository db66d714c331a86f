use thiserror::Error;

const VALIDATION_MESSAGE: &str = "Please enter a place name";
const REQUEST_FAILED_MESSAGE: &str =
    "Failed to get response. Make sure the backend server is running.";

/// User-facing failures. The `Display` text is exactly what the form shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("{}", REQUEST_FAILED_MESSAGE)]
    Request,
}

impl FormError {
    pub fn message(&self) -> &'static str {
        match self {
            FormError::Validation => VALIDATION_MESSAGE,
            FormError::Request => REQUEST_FAILED_MESSAGE,
        }
    }
}

/// Underlying cause of a failed tourism request. Logged, never displayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Server error: {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::Validation.to_string(), "Please enter a place name");
        assert_eq!(
            FormError::Request.to_string(),
            "Failed to get response. Make sure the backend server is running."
        );
    }

    #[test]
    fn test_message_matches_display() {
        for error in [FormError::Validation, FormError::Request] {
            assert_eq!(error.message(), error.to_string());
        }
    }

    #[test]
    fn test_request_error_keeps_status_code() {
        assert_eq!(RequestError::Status(503).to_string(), "Server error: 503");
    }
}
