//! Local identity provider.
//!
//! Accepts every sign-in and registration without contacting a server.

use async_trait::async_trait;
use gcms_domain::{LoginCredentials, RegisterData, User};

use crate::ports::outbound::{IdentityError, IdentityPort};

/// Builds users locally; the password is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalIdentityProvider;

#[async_trait]
impl IdentityPort for LocalIdentityProvider {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, IdentityError> {
        Ok(User::from_email(credentials.email.clone()))
    }

    async fn register(&self, data: &RegisterData) -> Result<User, IdentityError> {
        Ok(User::from_registration(data))
    }
}
