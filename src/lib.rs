//! FinanceClinics Rust Client Library
//!
//! A Rust client for the FinanceClinics content API, covering the public
//! marketing surface (pages, services, blog, contact) and the authenticated
//! admin area (leads, users, settings, MIS report templates with file
//! import/export).

pub mod admin;
pub mod auth;
pub mod blog;
pub mod config;
pub mod error;
pub mod guard;
pub mod leads;
pub mod mis;
pub mod pages;
pub mod routing;
pub mod services;
pub mod settings;
pub mod store;

mod fetch;

use reqwest::Client;
use std::sync::Arc;

use crate::admin::AdminClient;
use crate::auth::Auth;
use crate::blog::BlogClient;
use crate::config::{ClientOptions, API_URL_ENV, DEFAULT_API_URL};
use crate::fetch::Http;
use crate::leads::LeadsClient;
use crate::mis::MisClient;
use crate::pages::PagesClient;
use crate::routing::{Navigator, NoopNavigator};
use crate::services::ServicesClient;
use crate::settings::SettingsClient;
use crate::store::{MemoryStore, SessionStore};

/// The main entry point for the FinanceClinics client
pub struct FinanceClinics {
    /// The base URL of the API
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
    http: Arc<Http>,
    auth: Auth,
}

impl FinanceClinics {
    /// Create a new client against the given API base URL
    ///
    /// Sessions live in memory only and the viewer is treated as outside the
    /// admin area; use [`FinanceClinics::new_with_parts`] to plug in a
    /// persistent store and a navigator.
    ///
    /// # Example
    ///
    /// ```
    /// use financeclinics_client::FinanceClinics;
    ///
    /// let client = FinanceClinics::new("http://localhost:5000/api");
    /// ```
    pub fn new(api_url: &str) -> Self {
        Self::new_with_options(api_url, ClientOptions::default())
    }

    /// Create a new client with custom options
    pub fn new_with_options(api_url: &str, options: ClientOptions) -> Self {
        Self::new_with_parts(
            api_url,
            options,
            Arc::new(MemoryStore::new()),
            Arc::new(NoopNavigator),
        )
    }

    /// Create a new client with a session store and navigator of your choosing
    ///
    /// The store carries the persisted token/user pair across restarts; the
    /// navigator tells the HTTP layer where the viewer is so the admin-area
    /// 401 policy can apply.
    pub fn new_with_parts(
        api_url: &str,
        options: ClientOptions,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let http_client = match options.request_timeout {
            Some(timeout) => Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            None => Client::new(),
        };

        let http = Arc::new(Http::new(
            api_url,
            http_client.clone(),
            store,
            navigator,
            options.clone(),
        ));
        let auth = Auth::new(http.clone());

        Self {
            url: api_url.to_string(),
            http_client,
            options,
            http,
            auth,
        }
    }

    /// Create a new client from the environment
    ///
    /// Reads the base URL from `FINANCECLINICS_API_URL`, falling back to the
    /// development server default.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&api_url)
    }

    /// Get a reference to the auth client for sign-in and session state
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Get a client for page content
    pub fn pages(&self) -> PagesClient {
        PagesClient::new(self.http.clone())
    }

    /// Get a client for service offerings
    pub fn services(&self) -> ServicesClient {
        ServicesClient::new(self.http.clone())
    }

    /// Get a client for blog content
    pub fn blog(&self) -> BlogClient {
        BlogClient::new(self.http.clone())
    }

    /// Get a client for contact-form leads
    pub fn leads(&self) -> LeadsClient {
        LeadsClient::new(self.http.clone())
    }

    /// Get a client for the admin dashboard and user management
    pub fn admin(&self) -> AdminClient {
        AdminClient::new(self.http.clone())
    }

    /// Get a client for site settings
    pub fn settings(&self) -> SettingsClient {
        SettingsClient::new(self.http.clone())
    }

    /// Get a client for MIS report templates
    pub fn mis(&self) -> MisClient {
        MisClient::new(self.http.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::SessionView;
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::guard::{GuardState, RouteGuard};
    pub use crate::routing::{Navigator, NoopNavigator, RoutePath};
    pub use crate::store::{FileStore, MemoryStore, SessionStore};
    pub use crate::FinanceClinics;
}
