//! HTTP layer shared by every endpoint group
//!
//! Centralizes the two cross-cutting request concerns: attaching the bearer
//! token persisted in the session store, and the single piece of error policy
//! in the system, where an authorization failure while the viewer is inside
//! the admin area clears the persisted credentials and forces navigation to
//! the login page. Everything else passes through to the caller unmodified; this
//! layer performs no retries and no backoff.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{multipart, Client, Method};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::routing::Navigator;
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};

const CLIENT_INFO: &str = concat!("financeclinics-rust/", env!("CARGO_PKG_VERSION"));

/// Error body shape used by the API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Shared request plumbing for the endpoint groups
pub(crate) struct Http {
    base_url: String,
    client: Client,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    options: ClientOptions,
}

impl Http {
    pub(crate) fn new(
        base_url: &str,
        client: Client,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        options: ClientOptions,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            store,
            navigator,
            options,
        }
    }

    pub(crate) fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub(crate) fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Create a GET request for an API path
    pub(crate) fn get(&self, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, path, Method::GET)
    }

    /// Create a POST request for an API path
    pub(crate) fn post(&self, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, path, Method::POST)
    }

    /// Create a PUT request for an API path
    pub(crate) fn put(&self, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, path, Method::PUT)
    }

    /// Create a DELETE request for an API path
    pub(crate) fn delete(&self, path: &str) -> FetchBuilder<'_> {
        FetchBuilder::new(self, path, Method::DELETE)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Apply the 401 policy: viewing an admin route (login page excluded)
    /// drops the persisted credential pair and forces the login page.
    fn handle_unauthorized(&self) {
        let path = self.navigator.current_path();
        let in_admin = path.starts_with(&self.options.admin_prefix)
            && !path.starts_with(&self.options.login_path);

        if in_admin {
            self.store.remove(TOKEN_KEY);
            self.store.remove(USER_KEY);
            tracing::warn!(from = %path, "authorization failure in admin area, forcing login");
            self.navigator.go_to(&self.options.login_path);
        }
    }
}

/// Helper for building and executing HTTP requests
pub(crate) struct FetchBuilder<'a> {
    http: &'a Http,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    form: Option<multipart::Form>,
}

impl<'a> FetchBuilder<'a> {
    fn new(http: &'a Http, path: &str, method: Method) -> Self {
        Self {
            http,
            url: http.endpoint(path),
            method,
            headers: HeaderMap::new(),
            query_params: Vec::new(),
            body: None,
            form: None,
        }
    }

    /// Append a query parameter to the request
    pub(crate) fn query_param(mut self, name: &str, value: &str) -> Self {
        self.query_params.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a JSON body to the request
    pub(crate) fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert("Content-Type", HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// Add a multipart form body to the request
    pub(crate) fn multipart(mut self, form: multipart::Form) -> Self {
        self.form = Some(form);
        self
    }

    async fn run(self) -> Result<reqwest::Response, Error> {
        let http = self.http;

        let mut url = Url::parse(&self.url)?;
        if !self.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query_params {
                pairs.append_pair(name, value);
            }
        }

        let mut req = http.client.request(self.method, url.as_str());
        req = req.headers(self.headers);
        req = req.header("X-Client-Info", CLIENT_INFO);

        // A persisted token rides on every request; no token, no header.
        if let Some(token) = http.store.get(TOKEN_KEY) {
            req = req.bearer_auth(token);
        }

        if let Some(body) = self.body {
            req = req.body(body);
        }
        if let Some(form) = self.form {
            req = req.multipart(form);
        }

        let response = req.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            http.handle_unauthorized();
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or(text);

        Err(Error::api(status.as_u16(), message))
    }

    /// Execute the request and parse the response as JSON
    pub(crate) async fn execute<T: DeserializeOwned>(self) -> Result<T, Error> {
        let response = self.run().await?;
        Ok(response.json::<T>().await?)
    }

    /// Execute the request, discarding the response body
    pub(crate) async fn execute_empty(self) -> Result<(), Error> {
        self.run().await?;
        Ok(())
    }

    /// Execute the request and return the response body untouched
    pub(crate) async fn execute_bytes(self) -> Result<Vec<u8>, Error> {
        let response = self.run().await?;
        Ok(response.bytes().await?.to_vec())
    }
}
