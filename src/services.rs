//! Advisory service offerings
//!
//! Same public/admin split as pages, plus a featured subset surfaced on the
//! home page.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

/// An advisory service offering
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    /// The service ID
    pub id: i64,

    /// The service title
    pub title: String,

    /// The public lookup key
    pub slug: String,

    /// Card-length summary
    pub short_description: Option<String>,

    /// Full description; omitted in list responses
    #[serde(default)]
    pub description: Option<String>,

    /// Icon identifier
    pub icon: Option<String>,

    /// Header image URL
    pub featured_image: Option<String>,

    /// Bullet-point feature list
    #[serde(default)]
    pub features: Vec<String>,

    /// SEO title override
    pub meta_title: Option<String>,

    /// SEO description
    pub meta_description: Option<String>,

    /// Whether the service appears in the featured listing
    pub is_featured: bool,

    /// Whether the service is publicly visible
    pub is_published: bool,

    /// Position in ordered listings
    pub sort_order: i64,

    /// Position in the featured listing
    pub display_order: i64,

    /// The creation time
    pub created_at: String,

    /// The update time
    pub updated_at: String,
}

/// Fields accepted when creating or updating a service
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ServiceList {
    services: Vec<Service>,
}

#[derive(Debug, Deserialize)]
struct ServiceEnvelope {
    service: Service,
}

/// Client for service offerings
#[derive(Clone)]
pub struct ServicesClient {
    http: Arc<Http>,
}

impl ServicesClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List all published services
    pub async fn all(&self) -> Result<Vec<Service>, Error> {
        let list = self.http.get("/services").execute::<ServiceList>().await?;
        Ok(list.services)
    }

    /// List the featured services
    pub async fn featured(&self) -> Result<Vec<Service>, Error> {
        let list = self
            .http
            .get("/services/featured")
            .execute::<ServiceList>()
            .await?;
        Ok(list.services)
    }

    /// Get a published service by slug
    pub async fn by_slug(&self, slug: &str) -> Result<Service, Error> {
        let envelope = self
            .http
            .get(&format!("/services/{}", slug))
            .execute::<ServiceEnvelope>()
            .await?;
        Ok(envelope.service)
    }

    /// List every service, published or not
    pub async fn admin_all(&self) -> Result<Vec<Service>, Error> {
        let list = self
            .http
            .get("/services/admin")
            .execute::<ServiceList>()
            .await?;
        Ok(list.services)
    }

    /// Get a service by ID
    pub async fn admin_get(&self, id: i64) -> Result<Service, Error> {
        let envelope = self
            .http
            .get(&format!("/services/admin/{}", id))
            .execute::<ServiceEnvelope>()
            .await?;
        Ok(envelope.service)
    }

    /// Create a new service
    pub async fn create(&self, input: &ServiceInput) -> Result<Service, Error> {
        let envelope = self
            .http
            .post("/services/admin")
            .json(input)?
            .execute::<ServiceEnvelope>()
            .await?;
        Ok(envelope.service)
    }

    /// Update an existing service
    pub async fn update(&self, id: i64, input: &ServiceInput) -> Result<Service, Error> {
        let envelope = self
            .http
            .put(&format!("/services/admin/{}", id))
            .json(input)?
            .execute::<ServiceEnvelope>()
            .await?;
        Ok(envelope.service)
    }

    /// Delete a service
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/services/admin/{}", id))
            .execute_empty()
            .await
    }
}
