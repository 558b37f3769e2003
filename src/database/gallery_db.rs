use std::{collections::HashMap, path::PathBuf};

use crate::{
    data_types::gallery::{caption_from_file_name, is_image_file, GalleryImage},
    error::{Error, Result},
    logvbln,
};

/// Images dropped into the gallery folder, captioned by `captions.json`.
pub struct GalleryDB {
    gallery_dir: PathBuf,
    captions_file: PathBuf,
}

impl GalleryDB {
    const CC: &str = "GalleryDB";

    pub fn new(gallery_dir: impl Into<PathBuf>, captions_file: impl Into<PathBuf>) -> Self {
        Self {
            gallery_dir: gallery_dir.into(),
            captions_file: captions_file.into(),
        }
    }

    pub async fn list(&self, base_url: &str) -> Result<Vec<GalleryImage>> {
        let mut entries = tokio::fs::read_dir(&self.gallery_dir)
            .await
            .map_err(|_| Error::GalleryNotFound)?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if is_image_file(name) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();

        let mut captions = self.captions().await;
        logvbln!("Listing {} gallery images", files.len());

        Ok(files
            .into_iter()
            .map(|file| {
                let caption = captions
                    .remove(&file)
                    .unwrap_or_else(|| caption_from_file_name(&file));
                GalleryImage::new(base_url, &file, caption)
            })
            .collect())
    }

    // A missing or malformed captions file just means no custom captions.
    async fn captions(&self) -> HashMap<String, String> {
        match tokio::fs::read_to_string(&self.captions_file).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => HashMap::new(),
        }
    }
}
