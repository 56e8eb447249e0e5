//! Post index - the read-only post collection driving page generation

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::Post;

/// Read-only access to the post collection
///
/// Content loading lives upstream; implementations only hand out the
/// already-built collection. Shared by all requests without locking since
/// nothing mutates it after startup.
pub trait PostRepository {
    /// All posts in the collection
    fn all(&self) -> &[Post];

    /// Find a post by exact slug match
    fn find(&self, slug: &str) -> Option<&Post> {
        self.all().iter().find(|p| p.slug == slug)
    }

    /// All valid slugs, for the build pipeline to pre-render
    fn slugs(&self) -> Vec<String> {
        self.all().iter().map(|p| p.slug.clone()).collect()
    }
}

/// In-memory post index backed by the pipeline's generated JSON file
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Create an index from an already-loaded collection
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load the index from a generated JSON file (an array of posts)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let posts: Vec<Post> = serde_json::from_str(&content)?;
        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path.as_ref());
        Ok(Self::new(posts))
    }
}

impl PostRepository for PostIndex {
    fn all(&self) -> &[Post] {
        &self.posts
    }
}
