use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use super::DatabaseStore;
use crate::entity::{author, blog_post, blog_post_tag, tag};
use crate::error::Result;
use crate::seed::content_type::ContentType;
use crate::seed::store::{
    ContentStore, Document, NewAuthor, NewBlogPost, NewEntry, NewTag, Status,
};

impl DatabaseStore {
    async fn insert_tag(&self, new: &NewTag, published_at: Option<DateTime<Utc>>) -> Result<i32> {
        let model = tag::ActiveModel {
            name: Set(new.name.clone()),
            slug: Set(new.slug.clone()),
            published_at: Set(published_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.id)
    }

    async fn insert_author(
        &self,
        new: &NewAuthor,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<i32> {
        let model = author::ActiveModel {
            name: Set(new.name.clone()),
            bio_en: Set(new.bio.en.clone()),
            bio_fr: Set(new.bio.fr.clone()),
            avatar_id: Set(new.avatar),
            published_at: Set(published_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.id)
    }

    /// The post and its tag links are written in one transaction.
    async fn insert_blog_post(
        &self,
        new: &NewBlogPost,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<i32> {
        let txn = self.db.begin().await?;

        let post = blog_post::ActiveModel {
            slug: Set(new.slug.clone()),
            title_en: Set(new.title.en.clone()),
            title_fr: Set(new.title.fr.clone()),
            excerpt_en: Set(new.excerpt.en.clone()),
            excerpt_fr: Set(new.excerpt.fr.clone()),
            content_en: Set(new.content.en.clone()),
            content_fr: Set(new.content.fr.clone()),
            video_id: Set(new.video_id.clone()),
            cover_image_id: Set(new.cover_image),
            author_id: Set(new.author),
            published_at: Set(published_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for link in tag_links(post.id, new) {
            blog_post_tag::Entity::insert(link)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(post.id)
    }
}

/// Join rows for a post, positioned from 0 in display order.
fn tag_links(post_id: i32, post: &NewBlogPost) -> Vec<blog_post_tag::ActiveModel> {
    post.linked_tags()
        .into_iter()
        .enumerate()
        .map(|(position, tag_id)| blog_post_tag::ActiveModel {
            blog_post_id: Set(post_id),
            tag_id: Set(tag_id),
            position: Set(position as i32),
        })
        .collect()
}

#[async_trait]
impl ContentStore for DatabaseStore {
    async fn create(&self, entry: &NewEntry, status: Status) -> Result<Document> {
        let published_at = match status {
            Status::Published => Some(Utc::now()),
            Status::Draft => None,
        };

        let id = match entry {
            NewEntry::Tag(new) => self.insert_tag(new, published_at).await?,
            NewEntry::Author(new) => self.insert_author(new, published_at).await?,
            NewEntry::BlogPost(new) => self.insert_blog_post(new, published_at).await?,
        };

        Ok(Document {
            id,
            content_type: entry.content_type(),
        })
    }

    async fn find_many(&self, content_type: ContentType) -> Result<Vec<Document>> {
        let ids: Vec<i32> = match content_type {
            ContentType::Tag => tag::Entity::find()
                .order_by_asc(tag::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect(),
            ContentType::Author => author::Entity::find()
                .order_by_asc(author::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect(),
            ContentType::BlogPost => blog_post::Entity::find()
                .order_by_asc(blog_post::Column::Id)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| m.id)
                .collect(),
        };

        Ok(ids
            .into_iter()
            .map(|id| Document { id, content_type })
            .collect())
    }
}
