//! Hireboard Client
//!
//! HTTP client library for the Hireboard job board API.
//!
//! # Features
//!
//! - **API client**: bearer token attached to every request from the token store
//! - **Session**: login, signup, logout and one-shot session restoration
//! - **Navigation guard**: authentication and role checks before every route
//! - **Resources**: recruiter jobs, public job search, applications, applicant review
//!
//! # Example
//!
//! ```ignore
//! use hireboard_client::{AppContext, ClientConfig};
//! use hireboard_core::{LoginCredentials, Role, RouteRequirements};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load()?;
//!     let app = AppContext::new(&config, navigator, prompt)?;
//!
//!     // Restore a persisted session before routing
//!     let decision = app
//!         .guard()
//!         .before_each(&RouteRequirements::for_role(Role::Recruiter))
//!         .await;
//!
//!     // Log in
//!     app.session()
//!         .login(&LoginCredentials::new("recruiter", "password"))
//!         .await?;
//!
//!     // Load the recruiter's jobs
//!     let jobs = app.jobs();
//!     jobs.fetch_recruiter_jobs().await;
//!     println!("{} jobs", jobs.state().jobs.len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod context;
mod error;
mod guard;
mod resources;
mod session;
mod storage;

pub use api::ApiClient;
pub use config::{ApiSettings, ClientConfig, StorageSettings, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use context::AppContext;
pub use error::{ClientError, Result};
pub use guard::{evaluate, GuardDecision, NavigationGuard};
pub use resources::{
    Applications, ApplicationsState, DeleteOutcome, Jobs, JobsState, Recruiter, RecruiterState,
    DELETE_CONFIRMATION,
};
pub use session::{Session, SessionState, SIGNUP_FALLBACK_MESSAGE};
pub use storage::{FileStorage, MemoryStorage, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
