//! Application context wiring the client, the session and the resources.

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::guard::NavigationGuard;
use crate::resources::{Applications, Jobs, Recruiter};
use crate::session::Session;
use crate::storage::{FileStorage, MemoryStorage, TokenStore};
use hireboard_core::{KeyValueStorage, Navigator, Prompt};
use std::sync::Arc;
use tracing::info;

/// Everything the UI needs, created once at startup.
///
/// The session is shared by every guard handed out; resources are created
/// fresh per call and own their state.
#[derive(Clone)]
pub struct AppContext {
    api: ApiClient,
    session: Arc<Session>,
    prompt: Arc<dyn Prompt>,
}

impl AppContext {
    /// Build the context from configuration.
    ///
    /// Tokens persist to `storage.token_file` when set, otherwise they live in
    /// memory.
    pub fn new(
        config: &ClientConfig,
        navigator: Arc<dyn Navigator>,
        prompt: Arc<dyn Prompt>,
    ) -> Result<Self> {
        config.validate()?;

        let storage: Arc<dyn KeyValueStorage> = match &config.storage.token_file {
            Some(path) => Arc::new(FileStorage::open(path)?),
            None => Arc::new(MemoryStorage::new()),
        };

        let api = ApiClient::new(&config.api, TokenStore::new(storage))?;
        info!(base_url = %api.base_url(), "Hireboard client ready");

        Ok(Self::with_api(api, navigator, prompt))
    }

    /// Build the context around an existing API client.
    pub fn with_api(api: ApiClient, navigator: Arc<dyn Navigator>, prompt: Arc<dyn Prompt>) -> Self {
        let session = Arc::new(Session::new(api.clone(), navigator));
        Self {
            api,
            session,
            prompt,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(Arc::clone(&self.session))
    }

    pub fn jobs(&self) -> Jobs {
        Jobs::new(self.api.clone(), Arc::clone(&self.prompt))
    }

    pub fn applications(&self) -> Applications {
        Applications::new(self.api.clone())
    }

    pub fn recruiter(&self) -> Recruiter {
        Recruiter::new(self.api.clone())
    }
}
