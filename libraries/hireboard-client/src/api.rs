//! Configured HTTP client with bearer-token injection.

use crate::config::ApiSettings;
use crate::error::{ClientError, Result};
use crate::storage::TokenStore;
use hireboard_core::ErrorPayload;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Shared client for the Hireboard REST API.
///
/// Every request built through [`ApiClient::request`] reads the current access
/// token from the [`TokenStore`] and, when one is present, sends it as
/// `Authorization: Bearer <token>`. Without a token the request goes out
/// unauthenticated. Nothing is retried and no response is intercepted.
///
/// Cloning is cheap; clones share the connection pool and the token store.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
    tokens: TokenStore,
}

impl ApiClient {
    /// Create a new client with the given settings and token store.
    pub fn new(settings: &ApiSettings, tokens: TokenStore) -> Result<Self> {
        // Validate URL
        if settings.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .user_agent(format!("Hireboard/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            tokens,
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store consulted on every request.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request to `path`, attaching the bearer token if one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let token = self.tokens.access_token();
        debug!(method = %method, url = %url, authenticated = token.is_some(), "API request");

        let builder = self.http.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn non-success statuses into [`ClientError::Api`].
    pub async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let payload = ErrorPayload::from_body(&body);
        warn!(
            status = status.as_u16(),
            error = %payload.as_ref().map(ErrorPayload::message).unwrap_or_default(),
            "API request rejected"
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            payload,
        })
    }

    /// Send a request and decode the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// `GET path` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    /// `GET path?query` and decode the JSON body.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// `POST path` with a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `PATCH path` with a JSON body, ignoring the response body.
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
            .map(|_| ())
    }

    /// `PATCH path` without a body, ignoring the response body.
    pub async fn patch_empty(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::PATCH, path))
            .await
            .map(|_| ())
    }

    /// `DELETE path`, ignoring the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.request(Method::DELETE, path))
            .await
            .map(|_| ())
    }
}
