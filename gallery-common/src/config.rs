use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Image shown when a gallery has no images or an image fails to load
pub const DEFAULT_PLACEHOLDER: &str =
    "https://res.cloudinary.com/ds4h9nepa/image/upload/v1746474294/471ca7ac-e965-4d65-8644-c5067629d0d4_qxcwld.jpg";

/// Width / height of the thumbnail frame
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

static GLOBAL_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Gallery configuration is already installed")]
    AlreadyInstalled,
}

/// User-facing text used by the gallery widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryLabels {
    /// Heading above the thumbnail
    pub heading: String,
    /// Word used in alt text, e.g. "Image" in "Apollo 11 - Image 2"
    pub image: String,
    /// Accessible name of the full-screen viewer
    pub viewer: String,
    /// Accessible label of the previous button
    pub previous: String,
    /// Accessible label of the next button
    pub next: String,
}

impl Default for GalleryLabels {
    fn default() -> Self {
        Self {
            heading: "Mission gallery".to_string(),
            image: "Image".to_string(),
            viewer: "Image viewer".to_string(),
            previous: "Previous image".to_string(),
            next: "Next image".to_string(),
        }
    }
}

/// Gallery configuration (YAML), installed once at startup.
///
/// Every field is optional in the file; missing fields take the built-in
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Fallback image reference
    pub default_image: String,
    /// Thumbnail frame ratio (width / height)
    pub aspect_ratio: f64,
    pub labels: GalleryLabels,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_PLACEHOLDER.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            labels: GalleryLabels::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_image.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_image must not be empty".to_string(),
            ));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "aspect_ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }

    /// Install this configuration as the process-wide one.
    ///
    /// Must run before the first call to [`GalleryConfig::global`]; once a
    /// configuration has been installed or read it cannot be replaced.
    pub fn install(self) -> Result<(), ConfigError> {
        self.validate()?;
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        info!("Gallery configuration installed");
        Ok(())
    }

    /// The installed configuration, or the built-in defaults if none was installed.
    pub fn global() -> &'static GalleryConfig {
        GLOBAL_CONFIG.get_or_init(GalleryConfig::default)
    }
}
