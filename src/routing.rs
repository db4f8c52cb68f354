//! Navigation port consumed by the HTTP layer's authorization policy
//!
//! The fetch layer never reads global navigation state. Embedders inject a
//! [`Navigator`] that answers "where is the viewer right now" and performs the
//! forced redirect to the login page when an admin request comes back 401.

use std::sync::Mutex;

/// Navigation port
pub trait Navigator: Send + Sync {
    /// The route the viewer is currently on, e.g. `/admin/leads`
    fn current_path(&self) -> String;

    /// Force navigation to the given route
    fn go_to(&self, path: &str);
}

/// Navigator for embedders without routing
///
/// Always reports the site root, so the 401 policy never clears credentials
/// or redirects; navigation requests are dropped.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn go_to(&self, _path: &str) {}
}

/// Explicitly tracked route for CLI/TUI embedders and tests
///
/// Holds the current path under a mutex; `go_to` replaces it, so after a
/// forced redirect `current_path` reports the login page.
#[derive(Debug)]
pub struct RoutePath {
    current: Mutex<String>,
}

impl RoutePath {
    /// Create a route tracker starting at the given path
    pub fn new(path: &str) -> Self {
        Self {
            current: Mutex::new(path.to_string()),
        }
    }

    /// Move the viewer to a new path without going through the navigation port
    pub fn set_path(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_string();
    }
}

impl Navigator for RoutePath {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn go_to(&self, path: &str) {
        self.set_path(path);
    }
}
