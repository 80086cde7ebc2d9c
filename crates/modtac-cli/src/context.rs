use modtac_core::{AppConfig, ModtacResult};
use modtac_domain::{loop_span_for, Item, Viewport};
use modtac_gallery::DirectoryGallery;
use std::path::{Path, PathBuf};

/// Settings shared by every subcommand.
pub struct CliContext {
    pub config: AppConfig,
}

impl CliContext {
    /// An explicit config path must parse; otherwise the user config is used
    /// when present and defaults when not.
    pub fn load(config_path: Option<&Path>) -> ModtacResult<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load(),
        };
        tracing::debug!(?config, "loaded configuration");
        Ok(Self { config })
    }

    pub fn gallery(&self, dir: Option<PathBuf>, prefix: Option<String>) -> DirectoryGallery {
        let gallery = &self.config.gallery;
        DirectoryGallery::new(
            dir.unwrap_or_else(|| gallery.dir.clone()),
            prefix.unwrap_or_else(|| gallery.url_prefix.clone()),
        )
    }

    pub fn loop_span(&self, viewport: Viewport) -> f64 {
        let layout = &self.config.layout;
        loop_span_for(viewport.height, layout.height_vh, layout.min_canvas_viewports)
    }

    /// Placeholder items pointing into the configured gallery prefix.
    pub fn placeholder_items(&self, count: usize) -> Vec<Item> {
        let prefix = self.config.gallery.url_prefix.trim_end_matches('/');
        (1..=count)
            .map(|n| Item::new(format!("{}/{:02}.jpg", prefix, n), format!("Frame {:02}", n)))
            .collect()
    }
}

/// Caption derived from the last path segment of an image URL.
pub fn label_for(url: &str) -> String {
    let name = url.rsplit('/').next().unwrap_or(url);
    name.rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(name)
        .to_string()
}
