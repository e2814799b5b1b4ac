use super::role::Role;
use super::session::SessionUser;

/// Landing area for each role after sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dashboard {
    Customer,
    SupportPortal,
    Admin,
}

impl From<Role> for Dashboard {
    fn from(role: Role) -> Self {
        match role {
            Role::Customer => Dashboard::Customer,
            Role::Support => Dashboard::SupportPortal,
            Role::Admin => Dashboard::Admin,
        }
    }
}

/// Outcome of checking a session against a protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Where the dashboard entry point sends a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRoute {
    Show(Dashboard),
    RedirectToLogin,
}

pub fn resolve_dashboard(user: Option<&SessionUser>) -> DashboardRoute {
    match user {
        Some(user) => DashboardRoute::Show(Dashboard::from(user.role)),
        None => DashboardRoute::RedirectToLogin,
    }
}

/// Admits any signed-in user when `allowed_roles` is `None`, otherwise only
/// the listed roles. Signed-in users outside the list go back to their
/// dashboard.
pub fn authorize(user: Option<&SessionUser>, allowed_roles: Option<&[Role]>) -> AccessDecision {
    let Some(user) = user else {
        return AccessDecision::RedirectToLogin;
    };
    match allowed_roles {
        Some(roles) if !roles.contains(&user.role) => AccessDecision::RedirectToDashboard,
        _ => AccessDecision::Granted,
    }
}
