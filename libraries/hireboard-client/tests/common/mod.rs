//! Shared fixtures for client integration tests.
#![allow(dead_code)]

use hireboard_client::{ApiClient, ApiSettings, AppContext, TokenStore};
use hireboard_core::{Navigator, Prompt, RouteName, TokenPair};
use mockall::mock;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::MockServer;

mock! {
    pub Navigator {}
    impl Navigator for Navigator {
        fn navigate(&self, route: RouteName);
    }
}

mock! {
    pub Prompt {}
    impl Prompt for Prompt {
        fn confirm(&self, message: &str) -> bool;
        fn alert(&self, message: &str);
    }
}

/// API client pointed at the mock server with an empty token store.
pub fn api_for(server: &MockServer) -> ApiClient {
    api_with_tokens(server, TokenStore::in_memory())
}

pub fn api_with_tokens(server: &MockServer, tokens: TokenStore) -> ApiClient {
    let settings = ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    };
    ApiClient::new(&settings, tokens).unwrap()
}

/// Token store already holding an access/refresh pair.
pub fn stored_tokens(access: &str, refresh: &str) -> TokenStore {
    let tokens = TokenStore::in_memory();
    tokens
        .save(&TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        })
        .unwrap();
    tokens
}

pub fn context(api: ApiClient, navigator: MockNavigator, prompt: MockPrompt) -> AppContext {
    AppContext::with_api(api, Arc::new(navigator), Arc::new(prompt))
}

pub fn user_json(username: &str, role: &str) -> Value {
    json!({
        "id": 1,
        "username": username,
        "email": format!("{username}@example.com"),
        "role": role,
        "full_name": "Test User",
        "phone": null,
        "linkedin_url": null,
        "github_url": null,
        "about": null,
        "skills": [],
        "portfolio_url": null
    })
}

pub fn job_json(job_id: &str, title: &str, is_active: bool, created_at: &str) -> Value {
    json!({
        "job_id": job_id,
        "title": title,
        "description": "Build things",
        "keywords": ["rust"],
        "location": "Remote",
        "experience_required": "2 years",
        "salary_min": null,
        "salary_max": null,
        "is_active": is_active,
        "created_at": created_at,
        "applicant_count": 0,
        "company_name": "Acme",
        "requirements": ""
    })
}

pub const JOB_A: &str = "11111111-1111-4111-8111-111111111111";
pub const JOB_B: &str = "22222222-2222-4222-8222-222222222222";
pub const JOB_C: &str = "33333333-3333-4333-8333-333333333333";
pub const JOB_D: &str = "44444444-4444-4444-8444-444444444444";
