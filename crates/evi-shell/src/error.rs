//! Error types for the host shell

use evi_desktop::DesktopError;

/// Errors surfaced by shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The operation needs a logged-in session
    NotAuthenticated,

    /// The authenticator rejected the credentials
    InvalidCredentials,

    /// No module is registered for the category
    UnknownModule(String),

    /// The desktop rejected an input
    Desktop(DesktopError),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "no active session"),
            Self::InvalidCredentials => write!(f, "invalid username or password"),
            Self::UnknownModule(category) => write!(f, "unknown module: {}", category),
            Self::Desktop(err) => write!(f, "desktop error: {}", err),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Desktop(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DesktopError> for ShellError {
    fn from(err: DesktopError) -> Self {
        Self::Desktop(err)
    }
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
