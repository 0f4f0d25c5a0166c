use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::store::{MediaAsset, MediaLibrary, MediaUpload};
use crate::error::Result;
use crate::utils::filename::{media_name, validate_flat_filename};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Turns filenames from the seed document into media assets, uploading each
/// file from the assets directory at most once.
#[derive(Clone)]
pub struct MediaResolver {
    library: Arc<dyn MediaLibrary>,
    assets_dir: PathBuf,
}

impl MediaResolver {
    pub fn new(library: Arc<dyn MediaLibrary>, assets_dir: PathBuf) -> Self {
        Self {
            library,
            assets_dir,
        }
    }

    /// Resolve `file_name` to an existing or freshly uploaded asset.
    ///
    /// Unusable names, missing files and failed uploads yield `Ok(None)` so
    /// the owning entry is still created, just without this media.
    pub async fn resolve(&self, file_name: Option<&str>) -> Result<Option<MediaAsset>> {
        let Some(file_name) = file_name else {
            return Ok(None);
        };

        let file_name = match validate_flat_filename(file_name) {
            Ok(name) => name,
            Err(e) => {
                warn!(file_name, reason = e.message(), "Refusing seed asset");
                return Ok(None);
            }
        };

        let name = media_name(file_name);
        if let Some(existing) = self.library.find_by_name(name).await? {
            debug!(name, id = existing.id, "Reusing uploaded media");
            return Ok(Some(existing));
        }

        let path = self.assets_dir.join(file_name);
        let size = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => {
                warn!(path = %path.display(), "Seed asset is not a file");
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Seed asset not found");
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read seed asset");
                return Ok(None);
            }
        };

        let mime = match mime_guess::from_path(&path).first() {
            Some(mime) => mime.to_string(),
            None => {
                warn!(file_name, "Unrecognized media type, uploading as {FALLBACK_MIME}");
                FALLBACK_MIME.to_string()
            }
        };

        let upload = MediaUpload {
            path,
            name: name.to_string(),
            file_name: file_name.to_string(),
            mime,
            size,
            alternative_text: format!("An image uploaded for {name}"),
            caption: name.to_string(),
        };

        match self.library.upload(upload).await {
            Ok(asset) => {
                info!(name, id = asset.id, size, "Uploaded seed media");
                Ok(Some(asset))
            }
            Err(e) => {
                error!(file_name, error = %e, "Failed to upload seed media");
                Ok(None)
            }
        }
    }
}
