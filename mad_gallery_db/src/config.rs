// Gallery configuration, loaded from JSON.
//
// Every field has a default, so `{}` is a valid config and a missing config
// file is equivalent to `GalleryConfig::default()`. The host owns the config
// and hands it to `Dataset` construction by reference.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::types::Convention;

/// Default placeholder image template; `{id}` is replaced by the record id.
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://picsum.photos/seed/{id}/800/450.webp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Deployment sub-path prefixed to title-derived image paths, e.g.
    /// `/my-site/`. Normalized on use to start and end with `/`.
    pub base_path: String,
    /// Image directory name, without slashes.
    pub image_dir: String,
    /// Placeholder image URL template containing `{id}`.
    pub placeholder_url: String,
    /// Sub-entry layout of the source document.
    pub convention: Convention,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            base_path: "/".to_string(),
            image_dir: "mad_imgs".to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            convention: Convention::default(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let json = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// `base_path` with exactly one leading and one trailing slash.
    pub fn normalized_base(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// `image_dir` with surrounding slashes removed.
    pub fn image_subdir(&self) -> &str {
        self.image_dir.trim_matches('/')
    }

    pub fn placeholder_for(&self, id: &str) -> String {
        self.placeholder_url.replace("{id}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(GalleryConfig::from_json("{}").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let json = include_str!("../../data/gallery_config.json");
        assert_eq!(GalleryConfig::from_json(json).unwrap(), GalleryConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let config =
            GalleryConfig::from_json(r#"{"base_path": "/JingMAD-website/", "convention": "a"}"#)
                .unwrap();
        assert_eq!(config.base_path, "/JingMAD-website/");
        assert_eq!(config.convention, Convention::A);
        assert_eq!(config.image_dir, "mad_imgs");
    }

    #[test]
    fn bad_json_is_config_error() {
        assert!(matches!(
            GalleryConfig::from_json(r#"{"convention": "z"}"#),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GalleryConfig::load(Path::new("/nonexistent/gallery.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }

    #[test]
    fn base_normalization() {
        let mut config = GalleryConfig::default();
        for (raw, expected) in [
            ("/", "/"),
            ("", "/"),
            ("site", "/site/"),
            ("/site", "/site/"),
            ("site/", "/site/"),
            ("//a/b//", "/a/b/"),
        ] {
            config.base_path = raw.to_string();
            assert_eq!(config.normalized_base(), expected, "base {raw:?}");
        }
    }

    #[test]
    fn placeholder_substitutes_id() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.placeholder_for("mad_x"),
            "https://picsum.photos/seed/mad_x/800/450.webp"
        );
    }
}
