//! Admin dashboard and user management

mod types;

use serde::Deserialize;
use std::sync::Arc;

use crate::auth::User;
use crate::error::Error;
use crate::fetch::Http;

pub use types::*;

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Client for the admin dashboard and user management
#[derive(Clone)]
pub struct AdminClient {
    http: Arc<Http>,
}

impl AdminClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Fetch the dashboard aggregate
    pub async fn dashboard(&self) -> Result<Dashboard, Error> {
        self.http.get("/admin/dashboard").execute::<Dashboard>().await
    }

    /// List all admin users
    pub async fn users(&self) -> Result<Vec<User>, Error> {
        let list = self.http.get("/admin/users").execute::<UserList>().await?;
        Ok(list.users)
    }

    /// Create a new admin user
    pub async fn create_user(&self, user: &NewUser) -> Result<User, Error> {
        let envelope = self
            .http
            .post("/admin/users")
            .json(user)?
            .execute::<UserEnvelope>()
            .await?;
        Ok(envelope.user)
    }

    /// Update an admin user
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, Error> {
        let envelope = self
            .http
            .put(&format!("/admin/users/{}", id))
            .json(update)?
            .execute::<UserEnvelope>()
            .await?;
        Ok(envelope.user)
    }

    /// Activate a pending user account
    pub async fn approve_user(&self, id: i64) -> Result<User, Error> {
        let envelope = self
            .http
            .put(&format!("/admin/users/{}/approve", id))
            .execute::<UserEnvelope>()
            .await?;
        Ok(envelope.user)
    }

    /// Delete an admin user
    ///
    /// The server refuses to delete the account making the request.
    pub async fn delete_user(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/admin/users/{}", id))
            .execute_empty()
            .await
    }
}
