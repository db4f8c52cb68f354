//! Static page content
//!
//! Public reads resolve pages by slug and only ever see published content;
//! the admin endpoints address pages by id and carry the full record. The
//! visibility split is enforced server-side.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

/// A static content page
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// The page ID
    pub id: i64,

    /// The page title
    pub title: String,

    /// The public lookup key
    pub slug: String,

    /// The page body; omitted in list responses
    #[serde(default)]
    pub content: Option<String>,

    /// SEO title override
    pub meta_title: Option<String>,

    /// SEO description
    pub meta_description: Option<String>,

    /// SEO keywords
    pub meta_keywords: Option<String>,

    /// Header image URL
    pub featured_image: Option<String>,

    /// Whether the page is publicly visible
    pub is_published: bool,

    /// Position in ordered listings
    pub sort_order: i64,

    /// The layout template the page renders with
    pub template: String,

    /// The creation time
    pub created_at: String,

    /// The update time
    pub updated_at: String,
}

/// Fields accepted when creating or updating a page
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageList {
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    page: Page,
}

/// Client for page content
#[derive(Clone)]
pub struct PagesClient {
    http: Arc<Http>,
}

impl PagesClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List all published pages
    pub async fn all(&self) -> Result<Vec<Page>, Error> {
        let list = self.http.get("/pages").execute::<PageList>().await?;
        Ok(list.pages)
    }

    /// Get a published page by slug
    pub async fn by_slug(&self, slug: &str) -> Result<Page, Error> {
        let envelope = self
            .http
            .get(&format!("/pages/{}", slug))
            .execute::<PageEnvelope>()
            .await?;
        Ok(envelope.page)
    }

    /// List every page, published or not
    pub async fn admin_all(&self) -> Result<Vec<Page>, Error> {
        let list = self.http.get("/pages/admin").execute::<PageList>().await?;
        Ok(list.pages)
    }

    /// Get a page by ID
    pub async fn admin_get(&self, id: i64) -> Result<Page, Error> {
        let envelope = self
            .http
            .get(&format!("/pages/admin/{}", id))
            .execute::<PageEnvelope>()
            .await?;
        Ok(envelope.page)
    }

    /// Create a new page
    pub async fn create(&self, input: &PageInput) -> Result<Page, Error> {
        let envelope = self
            .http
            .post("/pages/admin")
            .json(input)?
            .execute::<PageEnvelope>()
            .await?;
        Ok(envelope.page)
    }

    /// Update an existing page
    pub async fn update(&self, id: i64, input: &PageInput) -> Result<Page, Error> {
        let envelope = self
            .http
            .put(&format!("/pages/admin/{}", id))
            .json(input)?
            .execute::<PageEnvelope>()
            .await?;
        Ok(envelope.page)
    }

    /// Delete a page
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/pages/admin/{}", id))
            .execute_empty()
            .await
    }
}
