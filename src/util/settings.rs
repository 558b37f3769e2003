use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

const SETTINGS_FILE: &str = "settings.toml";
const SETTINGS_ENV: &str = "RADHA_SETTINGS";

/// Site settings, read from `settings.toml` in the working directory
/// (or the file named by `RADHA_SETTINGS`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Static site root; gallery images live under `images/gallery`
    pub public_dir: PathBuf,
    /// Where the flat-file records are written
    pub data_dir: PathBuf,
    pub rates_file: PathBuf,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            data_dir: PathBuf::from("data"),
            rates_file: PathBuf::from("config/rates.toml"),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = std::env::current_dir()?.join(SETTINGS_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::NotFound(path.to_path_buf()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// Default layout below `root`
    pub fn rooted_at(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            public_dir: root.join(defaults.public_dir),
            data_dir: root.join(defaults.data_dir),
            rates_file: root.join(defaults.rates_file),
            verbose: defaults.verbose,
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join("images")
    }

    pub fn gallery_dir(&self) -> PathBuf {
        self.images_dir().join("gallery")
    }

    pub fn captions_file(&self) -> PathBuf {
        self.gallery_dir().join("captions.json")
    }

    pub fn reviews_file(&self) -> PathBuf {
        self.data_dir.join("reviews.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = Settings::from_toml_str("data_dir = \"/var/lib/radha\"").unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/radha"));
        assert_eq!(settings.public_dir, PathBuf::from("public"));
        assert_eq!(
            settings.reviews_file(),
            PathBuf::from("/var/lib/radha/reviews.json")
        );
    }

    #[test]
    fn gallery_paths_derive_from_public_dir() {
        let settings = Settings::rooted_at(Path::new("/srv/site"));

        assert_eq!(
            settings.captions_file(),
            PathBuf::from("/srv/site/public/images/gallery/captions.json")
        );
    }

    #[test]
    fn malformed_settings_are_rejected() {
        assert!(Settings::from_toml_str("verbose = \"maybe\"").is_err());
    }
}
