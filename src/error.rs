//! Error Types
//!
//! Failures of backend calls, as seen by the screens.

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted)
    Transport(String),
    /// The server answered with a non-success status
    Status { status: u16, message: Option<String> },
    /// The response body was not what we expected
    Decode(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Status { status, .. } => write!(f, "HTTP error! Status: {}", status),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_hides_server_message() {
        let err = ApiError::Status { status: 400, message: Some("bad geometry".to_string()) };
        assert_eq!(err.to_string(), "HTTP error! Status: 400");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_display_is_raw_reason() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
        assert!(err.is_transport());
    }
}
