use thiserror::Error;

/// eventboard error types
#[derive(Error, Debug)]
pub enum EventboardError {
    /// Backend configuration missing or malformed
    #[error("config error: {0}")]
    Config(String),

    /// HTTP transport failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request (non-2xx)
    #[error("backend error: {status}: {detail}")]
    Backend { status: u16, detail: String },

    /// No record matched an exactly-one query
    #[error("event not found: {0}")]
    EventNotFound(String),
}

/// Result type alias for eventboard
pub type Result<T> = std::result::Result<T, EventboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EventboardError::Config("EVENTBOARD_URL not set".into());
        assert_eq!(err.to_string(), "config error: EVENTBOARD_URL not set");
    }

    #[test]
    fn test_backend_error_display() {
        let err = EventboardError::Backend {
            status: 404,
            detail: "relation does not exist".into(),
        };
        assert_eq!(err.to_string(), "backend error: 404: relation does not exist");
    }

    #[test]
    fn test_event_not_found_display() {
        let err = EventboardError::EventNotFound("evt-42".into());
        assert!(err.to_string().contains("evt-42"));
    }
}
