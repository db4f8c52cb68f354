//! Configuration options for the FinanceClinics client

use std::time::Duration;

/// Environment variable consulted by [`crate::FinanceClinics::from_env`]
pub const API_URL_ENV: &str = "FINANCECLINICS_API_URL";

/// Base URL used when the environment does not supply one
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Configuration options for the FinanceClinics client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Route prefix of the admin area
    pub admin_prefix: String,

    /// Route of the admin login page
    pub login_path: String,

    /// Role string that marks a user as an administrator
    pub admin_role: String,

    /// Optional request timeout applied to the underlying HTTP client
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_string(),
            login_path: "/admin/login".to_string(),
            admin_role: "admin".to_string(),
            request_timeout: None,
        }
    }
}

impl ClientOptions {
    /// Set the admin area route prefix
    pub fn with_admin_prefix(mut self, value: &str) -> Self {
        self.admin_prefix = value.to_string();
        self
    }

    /// Set the admin login page route
    pub fn with_login_path(mut self, value: &str) -> Self {
        self.login_path = value.to_string();
        self
    }

    /// Set the role string that marks a user as an administrator
    pub fn with_admin_role(mut self, value: &str) -> Self {
        self.admin_role = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
