//! User identity and the authentication seam.
//!
//! The backend that would normally verify credentials does not exist yet, so
//! the [`Authenticator`] trait marks the boundary and [`MockAuthenticator`]
//! stands in behind it. Everything above the trait treats authentication as
//! fallible even though the mock never fails.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access role assigned to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "Super Admin"),
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credentials rejected by the backend
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Backend unreachable or misbehaving
    #[error("Authentication backend unavailable: {0}")]
    Unavailable(String),
}

/// Credential verification boundary.
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Stand-in authenticator with no real credential check.
///
/// Accepts any email/password pair. The role is `Admin` when the email
/// contains the substring "admin" (case-sensitive), otherwise `User`. The id
/// is derived deterministically from the email so repeated logins produce the
/// same identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        let role = if email.contains("admin") { Role::Admin } else { Role::User };

        Ok(Identity {
            id: derive_id(email),
            email: email.to_string(),
            role,
            name: display_name(email),
        })
    }
}

/// Stable id derived from the email address.
fn derive_id(email: &str) -> String {
    let mut hasher = DefaultHasher::new();
    email.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Display name derived from the email local part.
fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    if local.is_empty() {
        email.to_string()
    } else {
        local.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_email_gets_admin_role() {
        let identity = MockAuthenticator.authenticate("admin@example.com", "pw").unwrap();
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_admin_substring_anywhere_in_email() {
        let identity = MockAuthenticator.authenticate("the.admin.guy@corp.io", "pw").unwrap();
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_plain_email_gets_user_role() {
        let identity = MockAuthenticator.authenticate("alice@example.com", "pw").unwrap();
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn test_admin_match_is_case_sensitive() {
        let identity = MockAuthenticator.authenticate("Admin@example.com", "pw").unwrap();
        assert_eq!(identity.role, Role::User);
    }

    #[test]
    fn test_identity_is_deterministic() {
        let a = MockAuthenticator.authenticate("bob@example.com", "first").unwrap();
        let b = MockAuthenticator.authenticate("bob@example.com", "second").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_name_from_local_part() {
        let identity = MockAuthenticator.authenticate("carol@example.com", "pw").unwrap();
        assert_eq!(identity.name, "carol");
    }

    #[test]
    fn test_role_serializes_screaming_snake() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"SUPER_ADMIN\"");
    }
}
