//! The seed document: three ordered lists read once at startup.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// A string in both supported locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Localized {
    pub en: String,
    pub fr: String,
}

/// 1-based position into a list the store returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IndexRef {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTag {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAuthor {
    pub name: String,
    pub bio: Localized,
    /// Filename under the assets directory.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedBlogPost {
    pub title: Localized,
    pub excerpt: Localized,
    pub content: Localized,
    pub slug: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    /// Declared author. Not used for linking; posts always get the first author.
    #[serde(default)]
    pub author: Option<IndexRef>,
    #[serde(default)]
    pub tags: Vec<IndexRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub tags: Vec<SeedTag>,
    #[serde(default)]
    pub authors: Vec<SeedAuthor>,
    #[serde(default)]
    pub blog_posts: Vec<SeedBlogPost>,
}

impl SeedData {
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
