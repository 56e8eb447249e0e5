//! SEO module - page metadata and JSON-LD structured data

pub mod meta;
pub mod schema;

use crate::config::SiteMetadata;
use crate::content::{Post, PostImage};
use crate::helpers::{absolute_url, ensure_absolute};

/// Social preview image URLs for a post
///
/// Falls back to the site social banner when the post has no image. Bare
/// paths are resolved against the site URL; processed assets contribute
/// their src as-is. Every entry is then normalized to an absolute URL.
pub fn image_urls(post: &Post, site: &SiteMetadata) -> Vec<String> {
    let raw = match &post.image {
        None => vec![site.social_banner.clone()],
        Some(PostImage::Path(src)) => vec![absolute_url(&site.url, src)],
        Some(PostImage::Asset(asset)) => vec![asset.src.clone()],
    };

    raw.into_iter()
        .map(|img| ensure_absolute(&site.url, &img))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageAsset;
    use chrono::{TimeZone, Utc};

    fn test_site() -> SiteMetadata {
        SiteMetadata {
            url: "https://example.com".to_string(),
            social_banner: "/banner.png".to_string(),
            ..SiteMetadata::default()
        }
    }

    fn test_post() -> Post {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Post::new("A".to_string(), "a".to_string(), date)
    }

    #[test]
    fn test_missing_image_falls_back_to_banner() {
        let urls = image_urls(&test_post(), &test_site());
        assert_eq!(urls, vec!["https://example.com/banner.png"]);
    }

    #[test]
    fn test_bare_path_is_prefixed() {
        let mut post = test_post();
        post.image = Some(PostImage::Path("/images/cover.png".to_string()));
        let urls = image_urls(&post, &test_site());
        assert_eq!(urls, vec!["https://example.com/images/cover.png"]);
    }

    #[test]
    fn test_asset_src_is_normalized() {
        let mut post = test_post();
        post.image = Some(PostImage::Asset(ImageAsset {
            src: "/static/cover.png".to_string(),
            width: 1200,
            height: 630,
            blur_data_url: None,
        }));
        let urls = image_urls(&post, &test_site());
        assert_eq!(urls, vec!["https://example.com/static/cover.png"]);
    }

    #[test]
    fn test_absolute_asset_src_passes_through() {
        let mut post = test_post();
        post.image = Some(PostImage::Asset(ImageAsset {
            src: "https://cdn.example.com/cover.png".to_string(),
            width: 1200,
            height: 630,
            blur_data_url: None,
        }));
        let urls = image_urls(&post, &test_site());
        assert_eq!(urls, vec!["https://cdn.example.com/cover.png"]);
    }
}
