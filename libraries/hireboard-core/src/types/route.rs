//! Navigation destinations and per-route access requirements

use serde::{Deserialize, Serialize};

use super::user::Role;

/// Named destinations the client itself redirects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    /// `/login`
    Login,
    /// `/applicant/dashboard`
    ApplicantDashboard,
    /// `/recruiter/dashboard`
    RecruiterDashboard,
}

impl RouteName {
    /// Path of the destination
    pub fn path(&self) -> &'static str {
        match self {
            RouteName::Login => "/login",
            RouteName::ApplicantDashboard => "/applicant/dashboard",
            RouteName::RecruiterDashboard => "/recruiter/dashboard",
        }
    }
}

/// Access requirements attached to a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    /// Only signed-in users may enter
    pub requires_auth: bool,
    /// Only users with this role may enter
    pub role: Option<Role>,
}

impl RouteRequirements {
    /// A route anyone may open
    pub fn public() -> Self {
        Self::default()
    }

    /// A route that needs any signed-in user
    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            role: None,
        }
    }

    /// A route that needs a signed-in user with `role`
    pub fn for_role(role: Role) -> Self {
        Self {
            requires_auth: true,
            role: Some(role),
        }
    }
}
