use async_trait::async_trait;
use modtac_core::{ModtacResult, Source};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::natural::natural_cmp;

/// Raster formats served by the gallery, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Body of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryResponse {
    pub images: Vec<String>,
}

pub fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Filters, orders and encodes raw directory entry names into image URLs.
pub fn image_urls<I, S>(names: I, url_prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut images: Vec<String> = names
        .into_iter()
        .filter(|name| is_image(name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();
    images.sort_by(|a, b| natural_cmp(a, b));

    let prefix = url_prefix.trim_end_matches('/');
    images
        .iter()
        .map(|name| format!("{}/{}", prefix, urlencoding::encode(name)))
        .collect()
}

/// Image listing backed by a directory on disk. The directory is re-read on
/// every request.
#[derive(Debug, Clone)]
pub struct DirectoryGallery {
    dir: PathBuf,
    url_prefix: String,
}

impl DirectoryGallery {
    pub fn new(dir: impl AsRef<Path>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn file_names(&self) -> ModtacResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!("Skipping non UTF-8 file name {:?}", raw),
            }
        }
        Ok(names)
    }
}

#[async_trait]
impl Source<String> for DirectoryGallery {
    async fn list(&self) -> ModtacResult<Vec<String>> {
        let names = self.file_names().await?;
        let images = image_urls(&names, &self.url_prefix);
        tracing::debug!(
            "Listed {} images out of {} entries in {}",
            images.len(),
            names.len(),
            self.dir.display()
        );
        Ok(images)
    }
}

/// Lists images, treating any source failure as an empty gallery.
pub async fn list_or_empty<S>(source: &S) -> GalleryResponse
where
    S: Source<String> + ?Sized,
{
    match source.list().await {
        Ok(images) => GalleryResponse { images },
        Err(e) => {
            tracing::warn!("Gallery listing failed, serving empty list: {}", e);
            GalleryResponse::default()
        }
    }
}
