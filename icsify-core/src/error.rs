//! Error types for icsify.

use thiserror::Error;

/// Errors that can occur while resolving times or building calendar files.
#[derive(Error, Debug)]
pub enum IcsifyError {
    #[error(
        "Invalid time '{0}'. Expected HH:MM, HH:MM-HH:MM, morning, evening, tbd or all day"
    )]
    InvalidTimeFormat(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid timezone '{}': control characters and quotes are not allowed", .0.escape_debug())]
    InvalidTimezone(String),

    /// `index` is 0-based; the message uses 1-based numbering for display.
    #[error("Event {} is invalid: {reason}", .index + 1)]
    InvalidEventData { index: usize, reason: String },

    #[error("No events to export")]
    EmptyBatch,

    #[error("Invalid event JSON: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icsify operations.
pub type IcsifyResult<T> = Result<T, IcsifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_event_data_uses_one_based_position() {
        let err = IcsifyError::InvalidEventData {
            index: 2,
            reason: "title is required".to_string(),
        };
        assert_eq!(err.to_string(), "Event 3 is invalid: title is required");
    }
}
