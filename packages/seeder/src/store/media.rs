use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::DatabaseStore;
use crate::entity::media;
use crate::error::Result;
use crate::seed::store::{MediaAsset, MediaLibrary, MediaUpload};

impl From<media::Model> for MediaAsset {
    fn from(model: media::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            mime: model.mime,
            size: model.size as u64,
        }
    }
}

#[async_trait]
impl MediaLibrary for DatabaseStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>> {
        let found = media::Entity::find()
            .filter(media::Column::Name.eq(name))
            .order_by_asc(media::Column::Id)
            .one(&self.db)
            .await?;

        Ok(found.map(MediaAsset::from))
    }

    async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset> {
        let data = tokio::fs::read(&upload.path).await?;
        let hash = self.blobs.put(&data).await?;

        let model = media::ActiveModel {
            name: Set(upload.name),
            file_name: Set(upload.file_name),
            alternative_text: Set(Some(upload.alternative_text)),
            caption: Set(Some(upload.caption)),
            mime: Set(upload.mime),
            size: Set(data.len() as i64),
            hash: Set(hash.to_hex()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }
}
