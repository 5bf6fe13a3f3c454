//! Sprite manifest format
//!
//! A manifest is a small JSON document describing how to build one sprite:
//! its declared size and where its pixels come from.
//!
//! ```json
//! {
//!   "name": "ship",
//!   "size": [5, 3],
//!   "source": { "type": "text", "path": "ship.txt", "mode": "rgb" }
//! }
//! ```

use pixvox_core::{Color, TextMode};
use serde::{Deserialize, Serialize};

/// Current manifest schema version
pub const MANIFEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    MANIFEST_VERSION
}

/// Sprite manifest - describes one sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteManifest {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Human-readable name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Declared sprite size (width, height)
    pub size: [usize; 2],

    /// Where the pixels come from
    pub source: SpriteSource,
}

/// Pixel source for a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpriteSource {
    /// Every pixel the same color
    Solid { color: Color },

    /// A text resource, one character per pixel
    Text {
        path: String,
        #[serde(default)]
        mode: TextMode,
    },

    /// An encoded image resource
    Image {
        path: String,
        /// Replace the declared size with the image size
        #[serde(default)]
        fit_to_image: bool,
    },
}

impl SpriteSource {
    /// Resource the pixels are read from, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Solid { .. } => None,
            Self::Text { path, .. } | Self::Image { path, .. } => Some(path),
        }
    }
}

impl SpriteManifest {
    /// Create a new manifest
    pub fn new(name: impl Into<String>, size: [usize; 2], source: SpriteSource) -> Self {
        Self {
            version: MANIFEST_VERSION,
            name: name.into(),
            description: String::new(),
            size,
            source,
        }
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.version > MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion(self.version));
        }
        if self.name.is_empty() {
            return Err(ManifestError::MissingField("name".to_string()));
        }
        if self.source.path().is_some_and(str::is_empty) {
            return Err(ManifestError::MissingField("source.path".to_string()));
        }
        Ok(())
    }
}

/// Manifest errors
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unsupported manifest version: {0}")]
    UnsupportedVersion(u32),
}
