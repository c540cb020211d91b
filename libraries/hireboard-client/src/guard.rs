//! Route guard enforcing authentication and role requirements.

use crate::session::Session;
use hireboard_core::{Role, RouteName, RouteRequirements};
use std::sync::Arc;
use tracing::debug;

/// Outcome of guarding a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteName),
}

/// Decide a transition from the session's authentication and role.
///
/// Rules are checked in order; the first match wins:
/// 1. auth required, no session: login
/// 2. recruiter route, not a recruiter: applicant dashboard
/// 3. applicant route, not an applicant: recruiter dashboard
pub fn evaluate(to: &RouteRequirements, authenticated: bool, role: Option<Role>) -> GuardDecision {
    if to.requires_auth && !authenticated {
        return GuardDecision::Redirect(RouteName::Login);
    }

    match to.role {
        Some(Role::Recruiter) if role != Some(Role::Recruiter) => {
            GuardDecision::Redirect(RouteName::ApplicantDashboard)
        }
        Some(Role::Applicant) if role != Some(Role::Applicant) => {
            GuardDecision::Redirect(RouteName::RecruiterDashboard)
        }
        _ => GuardDecision::Allow,
    }
}

/// Runs before every route transition.
///
/// No route is evaluated before session restoration has finished; racing
/// transitions share the single restoration attempt.
#[derive(Clone, Debug)]
pub struct NavigationGuard {
    session: Arc<Session>,
}

impl NavigationGuard {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    pub async fn before_each(&self, to: &RouteRequirements) -> GuardDecision {
        if !self.session.initialized() {
            self.session.restore_auth().await;
        }

        let state = self.session.snapshot().await;
        let decision = evaluate(to, state.is_authenticated(), state.role());
        debug!(?to, ?decision, "Route guarded");
        decision
    }
}
