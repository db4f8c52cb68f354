//! In-memory session state

use super::types::User;

/// Mutable session state held by the auth client and mirrored into the store
#[derive(Debug)]
pub(crate) struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

/// Snapshot of the session's resolution, consumed by the route guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    /// Whether the initial session probe is still outstanding
    pub loading: bool,

    /// Whether a user is signed in
    pub authenticated: bool,
}
