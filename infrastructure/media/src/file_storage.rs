use std::path::{Path, PathBuf};

use async_trait::async_trait;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::image::RecipeImage;
use business::domain::recipe::services::ImageStorage;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Stores recipe images under a media root that the HTTP layer serves
/// as `/media`.
///
/// File names are content hashes, so an existing file already holds the
/// same bytes and is left alone.
pub struct FileSystemImageStorage {
    root: PathBuf,
}

impl FileSystemImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn write_atomically(&self, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        let partial = target.with_extension("partial");
        let mut file = fs::File::create(&partial).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        fs::rename(&partial, target).await
    }
}

#[async_trait]
impl ImageStorage for FileSystemImageStorage {
    async fn store(&self, image: &RecipeImage) -> Result<(), RecipeError> {
        let target = self.root.join(&image.path);

        if fs::try_exists(&target).await.unwrap_or(false) {
            tracing::debug!("Image {} already stored", image.path);
            return Ok(());
        }

        self.write_atomically(&target, &image.bytes)
            .await
            .map_err(|e| {
                tracing::error!("Failed to store image {}: {}", target.display(), e);
                RecipeError::ImageStorage
            })?;

        tracing::info!("Stored image {} ({} bytes)", image.path, image.bytes.len());
        Ok(())
    }
}
