//! Access gate for protected views.
//!
//! A pure decision over the current identity and an optional allowed-role
//! set. The gate holds no state of its own; session state is its only input.

use crate::auth::{Identity, Role};

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The requested view may render.
    Render,
    /// No identity: send the user to the login view.
    RedirectLogin,
    /// Identity present but role not allowed: send to the dashboard.
    RedirectDashboard,
}

/// Decide whether a protected view may render.
///
/// `allowed` of `None` means any authenticated user is accepted.
pub fn check(identity: Option<&Identity>, allowed: Option<&[Role]>) -> GateDecision {
    let Some(identity) = identity else {
        return GateDecision::RedirectLogin;
    };

    match allowed {
        Some(roles) if !roles.contains(&identity.role) => GateDecision::RedirectDashboard,
        _ => GateDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".to_string(),
            email: "test@example.com".to_string(),
            role,
            name: "test".to_string(),
        }
    }

    #[test]
    fn test_no_identity_always_redirects_to_login() {
        assert_eq!(check(None, None), GateDecision::RedirectLogin);
        assert_eq!(
            check(None, Some(&[Role::SuperAdmin, Role::Admin])),
            GateDecision::RedirectLogin
        );
    }

    #[test]
    fn test_role_outside_allowed_set_redirects_to_dashboard() {
        let user = identity(Role::User);
        assert_eq!(
            check(Some(&user), Some(&[Role::SuperAdmin, Role::Admin])),
            GateDecision::RedirectDashboard
        );
    }

    #[test]
    fn test_role_inside_allowed_set_renders() {
        let admin = identity(Role::Admin);
        assert_eq!(
            check(Some(&admin), Some(&[Role::SuperAdmin, Role::Admin])),
            GateDecision::Render
        );
    }

    #[test]
    fn test_no_role_set_renders_any_authenticated_user() {
        let user = identity(Role::User);
        assert_eq!(check(Some(&user), None), GateDecision::Render);
    }
}
