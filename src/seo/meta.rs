//! Page metadata derivation (Open Graph, Twitter card)

use serde::Serialize;

use super::image_urls;
use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{absolute_url, iso_instant};

/// Head metadata for a post page
///
/// Consumed by the page-rendering framework to populate document head
/// tags; serializes with the key names the framework expects.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(rename = "openGraph")]
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Open Graph block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub modified_time: String,
    pub images: Vec<OgImage>,
    pub authors: Vec<String>,
}

/// One Open Graph image entry
#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
}

/// Twitter card block
#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
}

/// Derive head metadata for a post
///
/// Pure function of the post and site metadata. Missing fields fall back
/// to site defaults: author, social banner, and the publish instant for
/// the modified time.
pub fn page_metadata(post: &Post, site: &SiteMetadata) -> PageMetadata {
    let published = iso_instant(&post.published_at);
    let modified = iso_instant(&post.updated_at.unwrap_or(post.published_at));

    let images: Vec<OgImage> = image_urls(post, site)
        .into_iter()
        .map(|url| OgImage { url })
        .collect();

    let authors = match &post.author {
        Some(author) => vec![author.clone()],
        None => vec![site.author.clone()],
    };

    PageMetadata {
        title: post.title.clone(),
        description: post.description.clone(),
        open_graph: OpenGraph {
            title: post.title.clone(),
            description: post.description.clone(),
            url: absolute_url(&site.url, &post.path),
            site_name: site.title.clone(),
            locale: "en_US".to_string(),
            kind: "article".to_string(),
            published_time: published,
            modified_time: modified,
            images: images.clone(),
            authors: if authors.is_empty() {
                vec![site.author.clone()]
            } else {
                authors
            },
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: post.title.clone(),
            description: post.description.clone(),
            images,
        },
    }
}
