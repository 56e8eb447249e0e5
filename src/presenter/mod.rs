//! Post page presenter
//!
//! Resolves a post by slug and produces the two page outputs: the head
//! metadata record and the rendered post document (JSON-LD script blocks,
//! hero section, table of contents, body).

mod toc;

use serde_json::Value;
use thiserror::Error;

pub use toc::render_toc;

use crate::config::SiteMetadata;
use crate::content::{Post, PostImage, PostRepository};
use crate::helpers::html_escape;
use crate::seo::{self, image_urls, meta::PageMetadata};

/// Errors surfaced by page generation
#[derive(Debug, Error)]
pub enum PresentError {
    /// No post matches the requested slug; the caller must short-circuit
    /// to a not-found response
    #[error("no post found for slug `{0}`")]
    NotFound(String),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Renders post pages from a read-only post collection
pub struct PostPresenter<'a, R: PostRepository> {
    site: &'a SiteMetadata,
    posts: &'a R,
}

impl<'a, R: PostRepository> PostPresenter<'a, R> {
    /// Create a presenter over a post collection
    pub fn new(site: &'a SiteMetadata, posts: &'a R) -> Self {
        Self { site, posts }
    }

    /// All slugs the build pipeline should pre-render
    pub fn static_slugs(&self) -> Vec<String> {
        self.posts.slugs()
    }

    /// Derive head metadata for the post matching `slug`
    pub fn page_metadata(&self, slug: &str) -> Result<PageMetadata, PresentError> {
        let post = self.lookup(slug)?;
        Ok(seo::meta::page_metadata(post, self.site))
    }

    /// Render the full post document for the post matching `slug`
    pub fn render(&self, slug: &str) -> Result<String, PresentError> {
        let post = self.lookup(slug)?;

        let mut html = String::new();
        html.push_str(&json_ld_script(&seo::schema::article(post, self.site))?);
        html.push_str(&json_ld_script(&seo::schema::faq(post, self.site))?);

        html.push_str("<article>");
        self.render_hero(post, &mut html);
        render_toc_panel(post, &mut html);
        html.push_str(&format!(
            r#"<div class="post-content">{}</div>"#,
            post.content
        ));
        html.push_str("</article>");

        tracing::debug!("Rendered post page: {}", slug);
        Ok(html)
    }

    fn lookup(&self, slug: &str) -> Result<&Post, PresentError> {
        self.posts
            .find(slug)
            .ok_or_else(|| PresentError::NotFound(slug.to_string()))
    }

    /// Hero section: category badge and title over a dimmed cover image
    fn render_hero(&self, post: &Post, out: &mut String) {
        out.push_str(r#"<div class="post-hero">"#);

        out.push_str(r#"<div class="post-hero-overlay">"#);
        if let Some(tag) = post.tags.first() {
            out.push_str(&format!(
                r#"<a class="post-tag" href="/categories/{}">{}</a>"#,
                slug::slugify(tag),
                html_escape(tag)
            ));
        }
        out.push_str(&format!("<h1>{}</h1>", html_escape(&post.title)));
        out.push_str("</div>");

        self.render_cover(post, out);
        out.push_str("</div>");
    }

    /// Cover image, falling back to the site banner for imageless posts
    fn render_cover(&self, post: &Post, out: &mut String) {
        let src = image_urls(post, self.site)
            .into_iter()
            .next()
            .unwrap_or_default();
        let alt = html_escape(&post.title);

        match &post.image {
            Some(PostImage::Asset(asset)) => {
                let blur = asset
                    .blur_data_url
                    .as_ref()
                    .map(|b| format!(r#" data-blur="{}""#, b))
                    .unwrap_or_default();
                out.push_str(&format!(
                    r#"<img class="post-cover" src="{}" alt="{}" width="{}" height="{}"{}>"#,
                    src, alt, asset.width, asset.height, blur
                ));
            }
            _ => {
                out.push_str(&format!(
                    r#"<img class="post-cover" src="{}" alt="{}">"#,
                    src, alt
                ));
            }
        }
    }
}

/// Serialize a JSON-LD document into its script tag
fn json_ld_script(doc: &Value) -> Result<String, serde_json::Error> {
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        serde_json::to_string(doc)?
    ))
}

/// Collapsible table-of-contents panel, open by default
fn render_toc_panel(post: &Post, out: &mut String) {
    out.push_str(r#"<details class="post-toc" open>"#);
    out.push_str("<summary>Table Of Content</summary>");
    out.push_str(&render_toc(&post.toc));
    out.push_str("</details>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ImageAsset, PostIndex, TocEntry};
    use chrono::{TimeZone, Utc};

    fn test_site() -> SiteMetadata {
        SiteMetadata {
            title: "Example Blog".to_string(),
            author: "Default".to_string(),
            url: "https://example.com".to_string(),
            social_banner: "/banner.png".to_string(),
            ..SiteMetadata::default()
        }
    }

    fn test_post() -> Post {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut post = Post::new("A Title".to_string(), "a".to_string(), date);
        post.description = "D".to_string();
        post.tags = vec!["Web Development".to_string()];
        post.toc = vec![TocEntry {
            url: "#intro".to_string(),
            title: "Intro".to_string(),
            items: vec![],
        }];
        post.content = "<p>body</p>".to_string();
        post
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let site = test_site();
        let index = PostIndex::new(vec![test_post()]);
        let presenter = PostPresenter::new(&site, &index);

        assert!(matches!(
            presenter.render("missing"),
            Err(PresentError::NotFound(ref slug)) if slug == "missing"
        ));
        assert!(presenter.page_metadata("missing").is_err());
    }

    #[test]
    fn test_render_emits_both_json_ld_blocks() {
        let site = test_site();
        let index = PostIndex::new(vec![test_post()]);
        let presenter = PostPresenter::new(&site, &index);

        let html = presenter.render("a").unwrap();
        assert_eq!(
            html.matches(r#"<script type="application/ld+json">"#).count(),
            2
        );
        assert!(html.contains(r#""@type":"NewsArticle""#));
        assert!(html.contains(r#""@type":"FAQPage""#));
    }

    #[test]
    fn test_render_hero_and_body() {
        let site = test_site();
        let index = PostIndex::new(vec![test_post()]);
        let presenter = PostPresenter::new(&site, &index);

        let html = presenter.render("a").unwrap();
        assert!(html.contains(r#"href="/categories/web-development""#));
        assert!(html.contains("<h1>A Title</h1>"));
        assert!(html.contains(r#"src="https://example.com/banner.png""#));
        assert!(html.contains(r#"<div class="post-content"><p>body</p></div>"#));
        assert!(html.contains("<summary>Table Of Content</summary>"));
        assert!(html.contains(r#"data-level="two""#));
    }

    #[test]
    fn test_render_cover_asset_dimensions() {
        let site = test_site();
        let mut post = test_post();
        post.image = Some(PostImage::Asset(ImageAsset {
            src: "/static/cover.png".to_string(),
            width: 1200,
            height: 630,
            blur_data_url: Some("data:image/webp;base64,xyz".to_string()),
        }));
        let index = PostIndex::new(vec![post]);
        let presenter = PostPresenter::new(&site, &index);

        let html = presenter.render("a").unwrap();
        assert!(html.contains(r#"width="1200" height="630""#));
        assert!(html.contains(r#"data-blur="data:image/webp;base64,xyz""#));
        assert!(html.contains(r#"src="https://example.com/static/cover.png""#));
    }

    #[test]
    fn test_static_slugs() {
        let site = test_site();
        let index = PostIndex::new(vec![test_post()]);
        let presenter = PostPresenter::new(&site, &index);
        assert_eq!(presenter.static_slugs(), vec!["a"]);
    }

    #[test]
    fn test_site_defaults_flow_through() {
        // Post with no author, image, or update time against site defaults.
        let site = test_site();
        let index = PostIndex::new(vec![test_post()]);
        let presenter = PostPresenter::new(&site, &index);

        let meta = presenter.page_metadata("a").unwrap();
        assert_eq!(meta.open_graph.authors, vec!["Default"]);

        let post = test_post();
        let doc = seo::schema::article(&post, &site);
        assert_eq!(doc["image"][0], "https://example.com/banner.png");
        let faq = seo::schema::faq(&post, &site);
        assert_eq!(faq["mainEntity"][1]["acceptedAnswer"]["text"], "Default");
    }
}
