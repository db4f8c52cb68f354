//! Blog content and the accumulating feed
//!
//! The public listing is paginated; [`BlogFeed`] wraps it for load-more style
//! consumption, appending each fetched page and turning `has_more` off as
//! soon as the server hands back a short page.

mod types;

use serde::Deserialize;
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::Http;

pub use types::*;

#[derive(Debug, Deserialize)]
struct CategoryList {
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PostList {
    posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
struct PostEnvelope {
    post: BlogPost,
}

/// Client for blog content
#[derive(Clone)]
pub struct BlogClient {
    http: Arc<Http>,
}

impl BlogClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// List published posts, one page at a time
    pub async fn list(
        &self,
        page: u32,
        per_page: u32,
        category: Option<&str>,
    ) -> Result<PostPage, Error> {
        let mut request = self
            .http
            .get("/blog")
            .query_param("page", &page.to_string())
            .query_param("per_page", &per_page.to_string());

        if let Some(category) = category {
            request = request.query_param("category", category);
        }

        request.execute::<PostPage>().await
    }

    /// List the categories of published posts
    pub async fn categories(&self) -> Result<Vec<String>, Error> {
        let list = self
            .http
            .get("/blog/categories")
            .execute::<CategoryList>()
            .await?;
        Ok(list.categories)
    }

    /// List the most recently published posts
    pub async fn recent(&self, limit: u32) -> Result<Vec<BlogPost>, Error> {
        let list = self
            .http
            .get("/blog/recent")
            .query_param("limit", &limit.to_string())
            .execute::<PostList>()
            .await?;
        Ok(list.posts)
    }

    /// Get a published post by slug
    pub async fn by_slug(&self, slug: &str) -> Result<BlogPost, Error> {
        let envelope = self
            .http
            .get(&format!("/blog/{}", slug))
            .execute::<PostEnvelope>()
            .await?;
        Ok(envelope.post)
    }

    /// List every post, published or not
    pub async fn admin_list(&self, page: u32, per_page: u32) -> Result<PostPage, Error> {
        self.http
            .get("/blog/admin")
            .query_param("page", &page.to_string())
            .query_param("per_page", &per_page.to_string())
            .execute::<PostPage>()
            .await
    }

    /// Get a post by ID
    pub async fn admin_get(&self, id: i64) -> Result<BlogPost, Error> {
        let envelope = self
            .http
            .get(&format!("/blog/admin/{}", id))
            .execute::<PostEnvelope>()
            .await?;
        Ok(envelope.post)
    }

    /// Create a new post
    pub async fn create(&self, input: &PostInput) -> Result<BlogPost, Error> {
        let envelope = self
            .http
            .post("/blog/admin")
            .json(input)?
            .execute::<PostEnvelope>()
            .await?;
        Ok(envelope.post)
    }

    /// Update an existing post
    pub async fn update(&self, id: i64, input: &PostInput) -> Result<BlogPost, Error> {
        let envelope = self
            .http
            .put(&format!("/blog/admin/{}", id))
            .json(input)?
            .execute::<PostEnvelope>()
            .await?;
        Ok(envelope.post)
    }

    /// Delete a post
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.http
            .delete(&format!("/blog/admin/{}", id))
            .execute_empty()
            .await
    }

    /// Start an accumulating feed over the published listing
    pub fn feed(&self, per_page: u32, category: Option<&str>) -> BlogFeed {
        BlogFeed {
            client: self.clone(),
            category: category.map(str::to_string),
            per_page,
            next_page: 1,
            posts: Vec::new(),
            has_more: true,
        }
    }
}

/// Load-more pager over the published post listing
///
/// Each call to [`BlogFeed::load_more`] appends the next page's posts. A page
/// holding fewer than `per_page` posts marks the feed exhausted.
pub struct BlogFeed {
    client: BlogClient,
    category: Option<String>,
    per_page: u32,
    next_page: u32,
    posts: Vec<BlogPost>,
    has_more: bool,
}

impl BlogFeed {
    /// Fetch and append the next page, returning how many posts arrived
    pub async fn load_more(&mut self) -> Result<usize, Error> {
        if !self.has_more {
            return Ok(0);
        }

        let page = self
            .client
            .list(self.next_page, self.per_page, self.category.as_deref())
            .await?;

        let count = page.posts.len();
        self.has_more = count as u32 >= self.per_page;
        self.next_page += 1;
        self.posts.extend(page.posts);

        Ok(count)
    }

    /// The posts accumulated so far
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Whether another page may exist
    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
