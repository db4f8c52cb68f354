//! Types for authentication and user accounts

use serde::{Deserialize, Serialize};

/// An admin user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user ID
    pub id: i64,

    /// The user's email address
    pub email: String,

    /// The user's display name
    pub name: String,

    /// The user's role; `"admin"` grants access to the admin area
    pub role: String,

    /// Whether the account is active
    pub is_active: bool,

    /// The last sign-in time
    #[serde(default)]
    pub last_login: Option<String>,

    /// The creation time
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response to a successful sign-in or sign-up
///
/// There is no refresh flow: the access token is the whole credential, and
/// expiry is only ever observed as a 401.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The bearer token to present on subsequent requests
    pub access_token: String,

    /// The signed-in user
    pub user: User,
}
