//! Identity provider port used by the session store.

use async_trait::async_trait;
use gcms_domain::{LoginCredentials, RegisterData, User};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Credentials or registration data were refused
    #[error("Identity provider rejected the request: {0}")]
    Rejected(String),

    /// The provider could not be reached
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Turns sign-in and registration input into a [`User`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, IdentityError>;

    async fn register(&self, data: &RegisterData) -> Result<User, IdentityError>;
}
