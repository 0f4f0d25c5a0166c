//! Collaborators the seed workflow writes through.
//!
//! The workflow only ever sees these traits; `crate::store::DatabaseStore`
//! is the production implementation.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use super::content_type::ContentType;
use super::data::Localized;
use crate::error::Result;

/// Address of one value in the persistent key/value store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub store_type: String,
    pub environment: String,
    pub name: String,
}

/// Persistent key/value settings that survive restarts.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>>;

    /// Insert or overwrite the value under `key`.
    async fn set(&self, key: &StateKey, value: Value) -> Result<()>;
}

/// Publication state requested when creating an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Draft,
    Published,
}

/// A stored entry, addressed by the identifier the store assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: i32,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub bio: Localized,
    /// Media id of the avatar.
    pub avatar: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: Localized,
    pub excerpt: Localized,
    pub content: Localized,
    pub slug: String,
    pub video_id: Option<String>,
    /// Media id of the cover image.
    pub cover_image: Option<i32>,
    pub author: Option<i32>,
    /// Tag ids in display order. Stores link a repeated id once.
    pub tags: Vec<i32>,
}

impl NewBlogPost {
    /// Tag ids to link, in display order, keeping only the first occurrence
    /// of a repeated id.
    pub fn linked_tags(&self) -> Vec<i32> {
        let mut seen = HashSet::new();
        self.tags
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// Field set of an entry to create; the variant fixes the content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntry {
    Tag(NewTag),
    Author(NewAuthor),
    BlogPost(NewBlogPost),
}

impl NewEntry {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Tag(_) => ContentType::Tag,
            Self::Author(_) => ContentType::Author,
            Self::BlogPost(_) => ContentType::BlogPost,
        }
    }

    /// Human-readable identification for log lines.
    pub fn label(&self) -> &str {
        match self {
            Self::Tag(tag) => &tag.slug,
            Self::Author(author) => &author.name,
            Self::BlogPost(post) => &post.slug,
        }
    }
}

/// Document-style storage for the seeded content types.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create(&self, entry: &NewEntry, status: Status) -> Result<Document>;

    /// Every entry of `content_type`, in the store's own order.
    async fn find_many(&self, content_type: ContentType) -> Result<Vec<Document>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    pub action: String,
    pub role_id: i32,
}

#[async_trait]
pub trait PermissionStore: Send + Sync {
    async fn find_role_by_type(&self, role_type: &str) -> Result<Option<Role>>;

    async fn create_permission(&self, action: String, role_id: i32) -> Result<Permission>;
}

/// An uploaded file tracked by the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub id: i32,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// A local file plus the metadata to record with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    pub path: PathBuf,
    /// Logical name used for lookups.
    pub name: String,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
    pub alternative_text: String,
    pub caption: String,
}

#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Asset whose logical name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>>;

    async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset>;
}
