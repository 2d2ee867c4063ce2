//! User entity - the signed-in account behind a session

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::email_local_part;
use crate::error::DomainError;
use crate::UserId;

/// Company recorded for users who sign in without registering
pub const PLACEHOLDER_COMPANY: &str = "My Company";

/// Account role. Only ordinary users exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::User => f.write_str("user"),
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            _ => Err(DomainError::parse(format!("Unknown user role: '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Display name
    pub name: String,
    pub company: String,
    pub role: UserRole,
}

impl User {
    /// Builds the user for a sign-in that only supplied an email.
    ///
    /// The display name is the email's local part and the company is
    /// [`PLACEHOLDER_COMPANY`].
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email_local_part(&email).to_string();
        Self {
            id: UserId::new(),
            email,
            name,
            company: PLACEHOLDER_COMPANY.to_string(),
            role: UserRole::User,
        }
    }

    /// Builds the user for a registration, taking every field as supplied.
    pub fn from_registration(data: &RegisterData) -> Self {
        Self {
            id: UserId::new(),
            email: data.email.clone(),
            name: data.name.clone(),
            company: data.company.clone(),
            role: UserRole::User,
        }
    }
}

/// Sign-in form input
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form input
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub name: String,
    pub company: String,
    pub password: String,
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("company", &self.company)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_derives_name_from_local_part() {
        let user = User::from_email("a@b.com");
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.company, PLACEHOLDER_COMPANY);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_from_registration_copies_fields() {
        let data = RegisterData {
            email: "pm@acme.com".to_string(),
            name: "Pat Morgan".to_string(),
            company: "Acme Federal".to_string(),
            password: "hunter2".to_string(),
        };
        let user = User::from_registration(&data);
        assert_eq!(user.email, "pm@acme.com");
        assert_eq!(user.name, "Pat Morgan");
        assert_eq!(user.company, "Acme Federal");
    }

    #[test]
    fn test_each_user_gets_a_fresh_id() {
        assert_ne!(User::from_email("a@b.com").id, User::from_email("a@b.com").id);
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = LoginCredentials::new("a@b.com", "s3cret");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("a@b.com"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), r#""user""#);
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
    }
}
