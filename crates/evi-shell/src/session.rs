//! Login gate
//!
//! Credential checking lives outside this crate; the shell only needs an
//! [`Authenticator`] that turns a username and password into a token.

use crate::error::ShellResult;

/// Opaque token issued by the authenticator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Credential check supplied by the host
pub trait Authenticator {
    /// Issue a token for valid credentials, or fail with
    /// [`ShellError::InvalidCredentials`](crate::ShellError::InvalidCredentials)
    fn authenticate(&self, username: &str, password: &str) -> ShellResult<SessionToken>;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn authenticate(&self, username: &str, password: &str) -> ShellResult<SessionToken> {
        (**self).authenticate(username, password)
    }
}

/// A logged-in user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user: String,
    token: SessionToken,
}

impl Session {
    pub fn new(user: impl Into<String>, token: SessionToken) -> Self {
        Self {
            user: user.into(),
            token,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}
