//! Authentication and session management
//!
//! [`Auth`] is the single source of truth for "who is signed in". It keeps the
//! user, token, and loading flag under a lock, mirrors the token/user pair
//! into the session store so a session survives a restart, and exposes the
//! sign-in, sign-up, and sign-out operations. The persisted pair and the
//! in-memory mirror are kept consistent: any divergence (a 401 while a token
//! is set) resolves to signed-out through the fetch layer's policy or the
//! initialization probe.

mod session;
mod types;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::Error;
use crate::fetch::Http;
use crate::store::{TOKEN_KEY, USER_KEY};

pub use session::SessionView;
pub use types::*;

use session::AuthState;

#[derive(Debug, serde::Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Client for authentication and the current session
pub struct Auth {
    http: Arc<Http>,
    state: Arc<RwLock<AuthState>>,
}

impl Auth {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        // The persisted token is visible immediately; the user it belongs to
        // is only trusted once the server confirms it in `initialize`.
        let token = http.store().get(TOKEN_KEY);

        Self {
            http,
            state: Arc::new(RwLock::new(AuthState {
                user: None,
                token,
                loading: true,
            })),
        }
    }

    /// Validate any persisted token against the server
    ///
    /// Call once at startup. On success the stored session becomes live; on
    /// any failure both the persisted and in-memory pair are cleared and the
    /// viewer is anonymous. Either way the loading flag clears. No retries.
    pub async fn initialize(&self) {
        let token = self.http.store().get(TOKEN_KEY);

        if let Some(token) = token {
            match self.http.get("/auth/me").execute::<UserEnvelope>().await {
                Ok(envelope) => {
                    let mut state = self.state.write().unwrap();
                    state.user = Some(envelope.user);
                    state.token = Some(token);
                    tracing::debug!("restored persisted session");
                }
                Err(err) => {
                    tracing::debug!(%err, "persisted token rejected, starting anonymous");
                    self.clear_session();
                }
            }
        }

        self.state.write().unwrap().loading = false;
    }

    /// Sign in with email and password
    ///
    /// On success the returned token and user are persisted and become the
    /// current session. Errors propagate unchanged for the caller to present.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, Error> {
        let mut body = HashMap::new();
        body.insert("email".to_string(), email.to_string());
        body.insert("password".to_string(), password.to_string());

        let response = self
            .http
            .post("/auth/login")
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        self.store_session(&response);
        tracing::debug!(email, "signed in");

        Ok(response.user)
    }

    /// Register a new account; same session contract as [`Auth::login`]
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, Error> {
        let mut body = HashMap::new();
        body.insert("name".to_string(), name.to_string());
        body.insert("email".to_string(), email.to_string());
        body.insert("password".to_string(), password.to_string());

        let response = self
            .http
            .post("/auth/signup")
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        self.store_session(&response);
        tracing::debug!(email, "signed up");

        Ok(response.user)
    }

    /// Sign out
    ///
    /// The local session is cleared before the server is notified, so signing
    /// out always succeeds locally; the server call is best-effort and its
    /// failure is discarded.
    pub async fn logout(&self) {
        self.clear_session();
        tracing::debug!("signed out");

        let _ = self.http.post("/auth/logout").execute_empty().await;
    }

    /// Change the current user's password
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), Error> {
        let mut body = HashMap::new();
        body.insert("current_password".to_string(), current.to_string());
        body.insert("new_password".to_string(), new.to_string());

        self.http
            .post("/auth/change-password")
            .json(&body)?
            .execute_empty()
            .await
    }

    /// Whether the initial session probe is still outstanding
    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().loading
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap().user.is_some()
    }

    /// Whether the signed-in user has the admin role
    pub fn is_admin(&self) -> bool {
        let state = self.state.read().unwrap();
        state
            .user
            .as_ref()
            .map(|user| user.role == self.http.options().admin_role)
            .unwrap_or(false)
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.state.read().unwrap().user.clone()
    }

    /// The current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.state.read().unwrap().token.clone()
    }

    /// Snapshot of the session's resolution for the route guard
    pub fn session_view(&self) -> SessionView {
        let state = self.state.read().unwrap();
        SessionView {
            loading: state.loading,
            authenticated: state.user.is_some(),
        }
    }

    fn store_session(&self, response: &AuthResponse) {
        let store = self.http.store();
        store.set(TOKEN_KEY, &response.access_token);
        if let Ok(raw) = serde_json::to_string(&response.user) {
            store.set(USER_KEY, &raw);
        }

        let mut state = self.state.write().unwrap();
        state.user = Some(response.user.clone());
        state.token = Some(response.access_token.clone());
    }

    fn clear_session(&self) {
        let store = self.http.store();
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);

        let mut state = self.state.write().unwrap();
        state.user = None;
        state.token = None;
    }
}
