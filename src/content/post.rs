//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post from the pre-built content index
///
/// The body arrives fully rendered from the content pipeline; this crate
/// treats it as opaque HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-safe unique identifier
    pub slug: String,

    /// Post title
    pub title: String,

    /// Post description, used for previews and structured data
    pub description: String,

    /// Post tags, first tag doubles as the category badge
    #[serde(default)]
    pub tags: Vec<String>,

    /// Post author
    #[serde(default)]
    pub author: Option<String>,

    /// Publication instant
    pub published_at: DateTime<Utc>,

    /// Last updated instant
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Cover image
    #[serde(default)]
    pub image: Option<PostImage>,

    /// Table of contents extracted from the body
    #[serde(default)]
    pub toc: Vec<TocEntry>,

    /// Rendered HTML body
    #[serde(default)]
    pub content: String,

    /// URL path of the post page
    pub path: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, slug: String, published_at: DateTime<Utc>) -> Self {
        let path = format!("/blogs/{}", slug);
        Self {
            slug,
            title,
            description: String::new(),
            tags: Vec::new(),
            author: None,
            published_at,
            updated_at: None,
            image: None,
            toc: Vec::new(),
            content: String::new(),
            path,
        }
    }
}

/// Cover image of a post
///
/// The content pipeline emits either a bare path or a processed image
/// asset with dimensions and a blur placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostImage {
    /// Bare path, relative to the site root
    Path(String),

    /// Processed image asset
    Asset(ImageAsset),
}

/// A processed image asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Image source path or URL
    pub src: String,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Base64 blur placeholder
    #[serde(rename = "blurDataURL", default)]
    pub blur_data_url: Option<String>,
}

/// One entry of a post's table of contents
///
/// Depth is implicit in nesting; the renderer only distinguishes the
/// root list from everything below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor destination, usually "#some-heading"
    pub url: String,

    /// Display title
    pub title: String,

    /// Child entries
    #[serde(default)]
    pub items: Vec<TocEntry>,
}
