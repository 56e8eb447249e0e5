//! Site metadata (_site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Process-wide site metadata
///
/// Read-only for the lifetime of the process. Every derivation in this
/// crate takes it as an explicit argument; there is no ambient global.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title, used as the Open Graph site name
    pub title: String,

    /// Site description
    pub description: String,

    /// Default author for posts without one
    pub author: String,

    /// Site language code
    pub language: String,

    /// Base URL of the site, without a trailing slash
    pub url: String,

    /// Default social preview image for posts without one
    pub social_banner: String,

    /// Social profile URL, used as the author URL in structured data
    pub twitter: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),
            url: "http://example.com".to_string(),
            social_banner: "/social-banner.png".to_string(),
            twitter: "https://twitter.com/example".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Load site metadata from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let site: SiteMetadata = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site metadata from {:?}", path.as_ref());
        Ok(site)
    }
}
