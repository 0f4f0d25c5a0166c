use std::sync::Arc;

use tracing::{debug, info};

use super::SeedContext;
use super::content_type::ContentType;
use super::data::{IndexRef, SeedAuthor, SeedBlogPost, SeedData, SeedTag};
use super::entries::create_entry;
use super::media::MediaResolver;
use super::permissions::{PUBLIC_GRANTS, set_public_permissions};
use super::store::{
    ContentStore, Document, NewAuthor, NewBlogPost, NewEntry, NewTag, PermissionStore,
};
use crate::error::Result;

/// Entries created by one import, plus the ones that were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub tags: usize,
    pub authors: usize,
    pub blog_posts: usize,
    pub failed: usize,
}

impl ImportReport {
    fn record(&mut self, created: Option<Document>) {
        let Some(document) = created else {
            self.failed += 1;
            return;
        };
        match document.content_type {
            ContentType::Tag => self.tags += 1,
            ContentType::Author => self.authors += 1,
            ContentType::BlogPost => self.blog_posts += 1,
        }
    }
}

/// Writes a seed document into the stores, one phase at a time.
pub struct SeedImporter {
    content: Arc<dyn ContentStore>,
    permissions: Arc<dyn PermissionStore>,
    media: MediaResolver,
}

impl SeedImporter {
    pub fn new(ctx: &SeedContext) -> Self {
        Self {
            content: ctx.content.clone(),
            permissions: ctx.permissions.clone(),
            media: MediaResolver::new(ctx.media.clone(), ctx.assets_dir.clone()),
        }
    }

    /// Run every phase in order. Failures of single entries or assets are
    /// logged and counted; anything else aborts the import, leaving what was
    /// already written in place.
    pub async fn import(&self, data: &SeedData) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        set_public_permissions(&*self.permissions, PUBLIC_GRANTS).await?;

        for tag in &data.tags {
            report.record(self.import_tag(tag).await);
        }

        for author in &data.authors {
            let created = self.import_author(author).await?;
            report.record(created);
        }

        // Posts link to what the store now holds, not to the create results
        // above, so ids and order are exactly what the store reports.
        let tags = self.content.find_many(ContentType::Tag).await?;
        let authors = self.content.find_many(ContentType::Author).await?;
        debug!(
            tags = tags.len(),
            authors = authors.len(),
            "Loaded link targets"
        );

        for post in &data.blog_posts {
            let created = self.import_blog_post(post, &tags, &authors).await?;
            report.record(created);
        }

        info!(
            tags = report.tags,
            authors = report.authors,
            blog_posts = report.blog_posts,
            failed = report.failed,
            "Seed import finished"
        );
        Ok(report)
    }

    async fn import_tag(&self, tag: &SeedTag) -> Option<Document> {
        let entry = NewEntry::Tag(NewTag {
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        });
        create_entry(&*self.content, entry).await
    }

    async fn import_author(&self, author: &SeedAuthor) -> Result<Option<Document>> {
        let avatar = self.media.resolve(author.avatar.as_deref()).await?;
        let entry = NewEntry::Author(NewAuthor {
            name: author.name.clone(),
            bio: author.bio.clone(),
            avatar: avatar.map(|asset| asset.id),
        });
        Ok(create_entry(&*self.content, entry).await)
    }

    async fn import_blog_post(
        &self,
        post: &SeedBlogPost,
        tags: &[Document],
        authors: &[Document],
    ) -> Result<Option<Document>> {
        let cover = self.media.resolve(post.cover_image.as_deref()).await?;

        // Every post is linked to the first author the store lists.
        let author = authors.first().map(|doc| doc.id);
        if let Some(declared) = post.author.filter(|r| r.index != 1) {
            debug!(
                slug = %post.slug,
                declared = declared.index,
                "Ignoring declared author, linking first author"
            );
        }

        let entry = NewEntry::BlogPost(NewBlogPost {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            slug: post.slug.clone(),
            video_id: post.video_id.clone(),
            cover_image: cover.map(|asset| asset.id),
            author,
            tags: resolve_indices(&post.tags, tags),
        });
        Ok(create_entry(&*self.content, entry).await)
    }
}

/// Map 1-based positions onto `targets`, dropping positions with no entry.
fn resolve_indices(refs: &[IndexRef], targets: &[Document]) -> Vec<i32> {
    refs.iter()
        .filter_map(|r| r.index.checked_sub(1).and_then(|i| targets.get(i)))
        .map(|doc| doc.id)
        .collect()
}
