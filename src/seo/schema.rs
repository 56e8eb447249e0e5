//! JSON-LD structured data derivation (NewsArticle, FAQPage)

use lazy_static::lazy_static;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::image_urls;
use crate::config::SiteMetadata;
use crate::content::Post;
use crate::helpers::{calendar_date, iso_instant};

lazy_static! {
    /// Hand-authored FAQ sets for cornerstone articles, keyed by slug
    ///
    /// A table hit replaces the derived question list wholesale. New
    /// cornerstone posts get an entry here; everything else falls back to
    /// the derived default triplet.
    static ref FAQ_OVERRIDES: HashMap<&'static str, [(&'static str, &'static str); 3]> = {
        let mut m = HashMap::new();
        m.insert(
            "revenge-saving-emergency-fund-2025",
            [
                (
                    "What is revenge saving?",
                    "Revenge saving happens when people aggressively save money after periods of heavy spending or financial regret, often driven by emotional rather than rational reasons.",
                ),
                (
                    "Why is revenge saving a problem?",
                    "It creates an unhealthy cycle of overspending followed by extreme saving, which can harm both your financial stability and mental health.",
                ),
                (
                    "How can I avoid revenge saving?",
                    "The best way is to build balanced habits\u{2014}set realistic budgets, automate savings, and allow for guilt-free spending within limits.",
                ),
            ],
        );
        m.insert(
            "digital-wellness-micro-habits-2025",
            [
                (
                    "What is digital wellness?",
                    "Digital wellness is the practice of using technology in a way that supports your mental, physical, and emotional health.",
                ),
                (
                    "Why is digital wellness important?",
                    "Without boundaries, technology can lead to stress, poor sleep, and reduced focus. Digital wellness helps restore balance.",
                ),
                (
                    "What are simple ways to improve digital wellness?",
                    "You can set screen time limits, use do-not-disturb during rest hours, and schedule offline activities to disconnect from devices.",
                ),
            ],
        );
        m.insert(
            "practical-ai-for-non-tech-founders-2025",
            [
                (
                    "Can non-technical founders use AI?",
                    "Yes, many AI tools are designed with no-code interfaces, making it possible for non-technical founders to leverage AI for their startups.",
                ),
                (
                    "What are the benefits of AI for startups?",
                    "AI can automate tasks, improve customer support, generate insights from data, and help scale businesses faster.",
                ),
                (
                    "Do I need coding skills to use AI?",
                    "Not always. Many platforms offer user-friendly dashboards and integrations that let founders apply AI without writing code.",
                ),
            ],
        );
        m
    };
}

/// Build the NewsArticle JSON-LD document for a post
pub fn article(post: &Post, site: &SiteMetadata) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": post.title,
        "description": post.description,
        "image": image_urls(post, site),
        "datePublished": iso_instant(&post.published_at),
        "dateModified": iso_instant(&post.updated_at.unwrap_or(post.published_at)),
        "author": [{
            "@type": "Person",
            "name": post.author.as_deref().unwrap_or(&site.author),
            "url": site.twitter,
        }],
    })
}

/// Build the FAQPage JSON-LD document for a post
///
/// Questions default to three entries derived from the post's own fields
/// unless the slug has a hand-authored set in the override table.
pub fn faq(post: &Post, site: &SiteMetadata) -> Value {
    let main_entity: Vec<Value> = faq_pairs(post, site)
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": main_entity,
    })
}

/// Question/answer pairs for a post's FAQ document
fn faq_pairs(post: &Post, site: &SiteMetadata) -> Vec<(String, String)> {
    if let Some(fixed) = FAQ_OVERRIDES.get(post.slug.as_str()) {
        return fixed
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect();
    }

    vec![
        (
            "What is this article about?".to_string(),
            post.description.clone(),
        ),
        (
            "Who is the author of this article?".to_string(),
            post.author.clone().unwrap_or_else(|| site.author.clone()),
        ),
        (
            "When was this article published?".to_string(),
            calendar_date(&post.published_at),
        ),
    ]
}
