//! Error types for the desktop window manager
//!
//! Window operations themselves are total (unknown ids are no-ops), so
//! errors only appear where untyped input crosses into the crate: layout
//! and direction names coming from the page, and configuration overrides.

/// Errors that can occur at the desktop's input boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A snap layout name did not match any known layout
    UnknownLayout(String),

    /// A resize direction did not match one of the eight handles
    UnknownResizeDirection(String),

    /// A configuration value is outside its valid range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLayout(name) => write!(f, "unknown snap layout: {}", name),
            Self::UnknownResizeDirection(dir) => {
                write!(f, "unknown resize direction: {}", dir)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::UnknownLayout("top".to_string());
        assert_eq!(err.to_string(), "unknown snap layout: top");

        let err = DesktopError::UnknownResizeDirection("up".to_string());
        assert_eq!(err.to_string(), "unknown resize direction: up");

        let err = DesktopError::InvalidConfig {
            field: "snap_margin",
            reason: "must not be negative",
        };
        assert_eq!(
            err.to_string(),
            "invalid config 'snap_margin': must not be negative"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: DesktopError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
