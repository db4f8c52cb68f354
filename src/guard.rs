//! Route guard for admin routes
//!
//! A three-state machine gating protected content: while the session probe is
//! outstanding the guard reports [`GuardState::Loading`] and issues no
//! redirect; once the session resolves it latches either `Authenticated` or
//! `Unauthenticated`; the transition out of `Loading` happens exactly once
//! per guard. An unauthenticated resolution carries the originally requested
//! path so the login flow can return the viewer there; the return trip itself
//! is the embedder's job.

use crate::auth::SessionView;

/// Resolution of a guarded route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// The session probe is still outstanding; defer rendering
    Loading,

    /// A user is signed in; render the protected content
    Authenticated,

    /// Nobody is signed in; redirect to the login page
    Unauthenticated {
        /// The path the viewer originally requested
        from: String,
    },
}

/// Guard for one mount of a protected route
#[derive(Debug, Default)]
pub struct RouteGuard {
    resolved: Option<GuardState>,
}

impl RouteGuard {
    /// Create an unresolved guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the guard the current session snapshot
    ///
    /// Returns `Loading` until the snapshot reports the probe finished, then
    /// latches the resolution; later snapshots cannot change it.
    pub fn observe(&mut self, session: SessionView, requested_path: &str) -> GuardState {
        if let Some(resolved) = &self.resolved {
            return resolved.clone();
        }

        if session.loading {
            return GuardState::Loading;
        }

        let resolution = if session.authenticated {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated {
                from: requested_path.to_string(),
            }
        };

        tracing::debug!(?resolution, path = requested_path, "route guard resolved");
        self.resolved = Some(resolution.clone());
        resolution
    }

    /// Whether the guard has left the loading state
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}
