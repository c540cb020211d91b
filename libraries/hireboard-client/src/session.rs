//! Session state: the signed-in user, their token and session restoration.
//!
//! A session is either anonymous (no token) or authenticated (token, and a
//! user once it has been fetched). The persisted access token is the only
//! authentication signal until `/auth/me/` confirms it.

use crate::api::ApiClient;
use crate::error::Result;
use hireboard_core::{
    ErrorPayload, LoginCredentials, Navigator, ProfileUpdate, Role, RouteName, SignupForm,
    SignupRequest, TokenPair, User,
};
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, error, info, warn};

const LOGIN_PATH: &str = "/auth/login/";
const ME_PATH: &str = "/auth/me/";
const SIGNUP_PATH: &str = "/auth/signup/";
const PROFILE_UPDATE_PATH: &str = "/auth/me/update/";
const DELETE_ACCOUNT_PATH: &str = "/auth/me/delete/";

/// Message returned by [`Session::signup`] when the failure carried no body.
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Signup failed. Please try again.";

/// Point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Authentication store for the current user.
///
/// Hold one per application in an `Arc`; the navigation guard and the UI share
/// it.
pub struct Session {
    api: ApiClient,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionState>,
    restored: OnceCell<()>,
}

impl Session {
    /// Create a session, picking up any token already persisted.
    pub fn new(api: ApiClient, navigator: Arc<dyn Navigator>) -> Self {
        let token = api.tokens().access_token();
        Self {
            api,
            navigator,
            state: RwLock::new(SessionState { user: None, token }),
            restored: OnceCell::new(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Whether [`Session::restore_auth`] has completed. Never reverts.
    pub fn initialized(&self) -> bool {
        self.restored.initialized()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn is_recruiter(&self) -> bool {
        self.state.read().await.role() == Some(Role::Recruiter)
    }

    pub async fn is_applicant(&self) -> bool {
        self.state.read().await.role() == Some(Role::Applicant)
    }

    /// Validate the persisted token and load the user, once per session.
    ///
    /// Concurrent callers wait on the same attempt; later calls return
    /// immediately. With no token the session stays anonymous. If the backend
    /// rejects the token, persisted tokens and user are cleared.
    pub async fn restore_auth(&self) {
        self.restored.get_or_init(|| self.restore()).await;
    }

    async fn restore(&self) {
        if self.state.read().await.token.is_none() {
            debug!("No persisted token, session stays anonymous");
            return;
        }

        match self.api.get_json::<User>(ME_PATH).await {
            Ok(user) => {
                info!(username = %user.username, role = %user.role, "Session restored");
                self.state.write().await.user = Some(user);
            }
            Err(e) => {
                error!(error = %e, "Failed to restore session");
                self.clear_credentials().await;
            }
        }
    }

    /// Log in with username and password.
    ///
    /// On success both tokens are persisted, the user is fetched and the token
    /// pair is returned. On failure the session is unchanged and the backend's
    /// error is returned.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair> {
        debug!(username = %credentials.username, "Attempting login");

        let tokens: TokenPair = match self.api.post_json(LOGIN_PATH, credentials).await {
            Ok(tokens) => tokens,
            Err(e) => {
                error!(error = %e, "Login failed");
                return Err(e);
            }
        };

        self.api.tokens().save(&tokens)?;
        self.state.write().await.token = Some(tokens.access.clone());
        info!(username = %credentials.username, "Login successful");

        self.fetch_user().await;
        Ok(tokens)
    }

    /// Reload the current user. Does nothing without a token; logs out when
    /// the backend refuses.
    pub async fn fetch_user(&self) {
        if self.state.read().await.token.is_none() {
            return;
        }

        match self.api.get_json::<User>(ME_PATH).await {
            Ok(user) => {
                debug!(username = %user.username, "Fetched current user");
                self.state.write().await.user = Some(user);
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch user");
                self.logout().await;
            }
        }
    }

    /// Create an account.
    ///
    /// Only the fields of [`SignupRequest`] are sent. Failures yield the
    /// backend's payload, or [`SIGNUP_FALLBACK_MESSAGE`] when there is none.
    pub async fn signup(
        &self,
        form: &SignupForm,
    ) -> std::result::Result<serde_json::Value, ErrorPayload> {
        let request = SignupRequest::from(form);

        match self.api.post_json(SIGNUP_PATH, &request).await {
            Ok(created) => {
                info!(username = %request.username, "Signup successful");
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Signup failed");
                Err(e.payload_or(SIGNUP_FALLBACK_MESSAGE))
            }
        }
    }

    /// Update the signed-in user's profile and reload the user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        if let Err(e) = self.api.patch(PROFILE_UPDATE_PATH, update).await {
            error!(error = %e, "Profile update failed");
            return Err(e);
        }

        self.fetch_user().await;
        Ok(())
    }

    /// Permanently delete the signed-in account, then log out.
    ///
    /// On failure the session is left as it was and the error is returned.
    pub async fn delete_account(&self) -> Result<()> {
        if let Err(e) = self.api.delete(DELETE_ACCOUNT_PATH).await {
            error!(error = %e, "Account deletion failed");
            return Err(e);
        }

        info!("Account deleted");
        self.logout().await;
        Ok(())
    }

    /// Forget the token and user, wipe persisted tokens and go to login.
    pub async fn logout(&self) {
        self.clear_credentials().await;
        info!("Logged out");
        self.navigator.navigate(RouteName::Login);
    }

    async fn clear_credentials(&self) {
        {
            let mut state = self.state.write().await;
            state.token = None;
            state.user = None;
        }

        if let Err(e) = self.api.tokens().clear() {
            warn!(error = %e, "Failed to clear persisted tokens");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.api.base_url())
            .field("initialized", &self.initialized())
            .finish_non_exhaustive()
    }
}
