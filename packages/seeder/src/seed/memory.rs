//! In-memory stores backing the seed workflow tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::content_type::ContentType;
use super::store::{
    ContentStore, Document, MediaAsset, MediaLibrary, MediaUpload, NewBlogPost, NewEntry,
    Permission, PermissionStore, Role, StateKey, StateStore, Status,
};
use crate::error::{Result, SeedError};

#[derive(Default)]
struct Inner {
    state: HashMap<StateKey, Value>,
    entries: Vec<(Document, NewEntry, Status)>,
    roles: Vec<(String, Role)>,
    permissions: Vec<Permission>,
    media: Vec<MediaAsset>,
    uploads: Vec<MediaUpload>,
}

pub struct MemoryStore {
    inner: Mutex<Inner>,
    failing_labels: HashSet<String>,
    failing_actions: HashSet<String>,
    fail_listing: bool,
    fail_uploads: bool,
    reverse_listing: bool,
}

impl MemoryStore {
    /// Empty store that already holds the public role.
    pub fn new() -> Self {
        let store = Self::without_public_role();
        store
            .inner
            .lock()
            .unwrap()
            .roles
            .push(("public".into(), Role { id: 1 }));
        store
    }

    pub fn without_public_role() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            failing_labels: HashSet::new(),
            failing_actions: HashSet::new(),
            fail_listing: false,
            fail_uploads: false,
            reverse_listing: false,
        }
    }

    /// Make creation of the entry labelled `label` fail.
    pub fn failing_on(mut self, label: &str) -> Self {
        self.failing_labels.insert(label.to_string());
        self
    }

    /// Make granting the qualified `action` fail.
    pub fn failing_permission(mut self, action: &str) -> Self {
        self.failing_actions.insert(action.to_string());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn failing_uploads(mut self) -> Self {
        self.fail_uploads = true;
        self
    }

    /// List entries newest first instead of in creation order.
    pub fn listing_newest_first(mut self) -> Self {
        self.reverse_listing = true;
        self
    }

    /// Register an asset as if it had been uploaded earlier.
    pub fn with_media(self, name: &str) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let id = inner.media.len() as i32 + 1;
            inner.media.push(MediaAsset {
                id,
                name: name.to_string(),
                mime: "image/png".into(),
                size: 0,
            });
        }
        self
    }

    pub fn entries(&self, content_type: ContentType) -> Vec<(Document, NewEntry)> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .iter()
            .filter(|(doc, _, _)| doc.content_type == content_type)
            .map(|(doc, entry, _)| (doc.clone(), entry.clone()))
            .collect()
    }

    pub fn statuses(&self) -> Vec<Status> {
        let inner = self.inner.lock().unwrap();
        inner.entries.iter().map(|(_, _, status)| *status).collect()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn permissions(&self) -> Vec<Permission> {
        self.inner.lock().unwrap().permissions.clone()
    }

    pub fn uploads(&self) -> Vec<MediaUpload> {
        self.inner.lock().unwrap().uploads.clone()
    }

    pub fn state(&self, key: &StateKey) -> Option<Value> {
        self.inner.lock().unwrap().state.get(key).cloned()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>> {
        Ok(self.state(key))
    }

    async fn set(&self, key: &StateKey, value: Value) -> Result<()> {
        self.inner
            .lock()
            .unwrap()
            .state
            .insert(key.clone(), value);
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn create(&self, entry: &NewEntry, status: Status) -> Result<Document> {
        if self.failing_labels.contains(entry.label()) {
            return Err(SeedError::Store(format!(
                "duplicate value for {}",
                entry.label()
            )));
        }

        let mut inner = self.inner.lock().unwrap();
        let content_type = entry.content_type();
        let id = inner
            .entries
            .iter()
            .filter(|(doc, _, _)| doc.content_type == content_type)
            .count() as i32
            + 1;
        let document = Document { id, content_type };
        // Repeated tag ids collapse into one link, as in the database.
        let stored = match entry {
            NewEntry::BlogPost(post) => NewEntry::BlogPost(NewBlogPost {
                tags: post.linked_tags(),
                ..post.clone()
            }),
            other => other.clone(),
        };
        inner.entries.push((document.clone(), stored, status));
        Ok(document)
    }

    async fn find_many(&self, content_type: ContentType) -> Result<Vec<Document>> {
        if self.fail_listing {
            return Err(SeedError::Store("connection reset".into()));
        }

        let mut documents: Vec<Document> = self
            .entries(content_type)
            .into_iter()
            .map(|(doc, _)| doc)
            .collect();
        if self.reverse_listing {
            documents.reverse();
        }
        Ok(documents)
    }
}

#[async_trait]
impl PermissionStore for MemoryStore {
    async fn find_role_by_type(&self, role_type: &str) -> Result<Option<Role>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .roles
            .iter()
            .find(|(ty, _)| ty == role_type)
            .map(|(_, role)| role.clone()))
    }

    async fn create_permission(&self, action: String, role_id: i32) -> Result<Permission> {
        if self.failing_actions.contains(&action) {
            return Err(SeedError::Store(format!("cannot grant {action}")));
        }

        let mut inner = self.inner.lock().unwrap();
        let permission = Permission { action, role_id };
        inner.permissions.push(permission.clone());
        Ok(permission)
    }
}

#[async_trait]
impl MediaLibrary for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.media.iter().find(|m| m.name == name).cloned())
    }

    async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset> {
        if self.fail_uploads {
            return Err(SeedError::Store("upload rejected".into()));
        }

        let mut inner = self.inner.lock().unwrap();
        let asset = MediaAsset {
            id: inner.media.len() as i32 + 1,
            name: upload.name.clone(),
            mime: upload.mime.clone(),
            size: upload.size,
        };
        inner.media.push(asset.clone());
        inner.uploads.push(upload);
        Ok(asset)
    }
}
