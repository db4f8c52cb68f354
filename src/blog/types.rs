//! Types for blog content

use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    /// The post ID
    pub id: i64,

    /// The post title
    pub title: String,

    /// The public lookup key
    pub slug: String,

    /// Teaser shown in listings
    pub excerpt: Option<String>,

    /// The post body; omitted in list responses
    #[serde(default)]
    pub content: Option<String>,

    /// Header image URL
    pub featured_image: Option<String>,

    /// The post category
    pub category: Option<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// SEO title override
    pub meta_title: Option<String>,

    /// SEO description
    pub meta_description: Option<String>,

    /// Whether the post is publicly visible
    pub is_published: bool,

    /// When the post was published, if ever
    pub published_at: Option<String>,

    /// View counter, incremented server-side on public reads
    #[serde(default)]
    pub views: i64,

    /// The creation time
    pub created_at: String,

    /// The update time
    pub updated_at: String,

    /// Display name of the author
    #[serde(default)]
    pub author: Option<String>,
}

/// One page of posts with the server's pagination envelope
///
/// The admin listing omits `per_page` and the has-next/has-prev flags, so
/// those default when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPage {
    /// The posts on this page
    pub posts: Vec<BlogPost>,

    /// Total posts across all pages
    pub total: u64,

    /// Total number of pages
    pub pages: u64,

    /// The page this envelope holds
    pub current_page: u32,

    /// Page size the server applied
    #[serde(default)]
    pub per_page: u32,

    /// Whether a next page exists
    #[serde(default)]
    pub has_next: bool,

    /// Whether a previous page exists
    #[serde(default)]
    pub has_prev: bool,
}

/// Fields accepted when creating or updating a post
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}
