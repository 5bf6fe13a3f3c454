//! Sprite loading and export
//!
//! [`SpriteLoader`] turns manifests and images held in a [`ResourceStore`]
//! into sprites, and writes sprites back out as PNG.

use crate::manifest::{ManifestError, SpriteManifest, SpriteSource};
use crate::resource::{ResourceError, ResourceStore};
use image::ImageFormat;
use pixvox_core::Sprite;
use std::io::Cursor;
use thiserror::Error;
use tracing::debug;

/// Loader errors
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(#[from] ManifestError),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Loads sprites from a resource store
pub struct SpriteLoader<S> {
    store: S,
}

impl<S: ResourceStore> SpriteLoader<S> {
    /// Create a new loader
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load and validate a manifest
    pub fn load_manifest(&self, name: &str) -> Result<SpriteManifest, LoaderError> {
        let content = self.store.load_text(name)?;
        let manifest: SpriteManifest = serde_json::from_str(&content)?;

        manifest.validate()?;

        debug!(manifest = name, sprite = %manifest.name, "Loaded manifest");
        Ok(manifest)
    }

    /// Save a manifest as pretty-printed JSON
    pub fn save_manifest(
        &mut self,
        manifest: &SpriteManifest,
        name: &str,
    ) -> Result<(), LoaderError> {
        let json = serde_json::to_string_pretty(manifest)?;
        self.store.save_text(name, &json)?;
        Ok(())
    }

    /// Build the sprite a manifest describes
    pub fn load_sprite(&self, manifest: &SpriteManifest) -> Result<Sprite, LoaderError> {
        let mut sprite = Sprite::new(manifest.size);

        match &manifest.source {
            SpriteSource::Solid { color } => sprite.generate(*color),
            SpriteSource::Text { path, mode } => {
                let text = self.store.load_text(path)?;
                sprite.generate_from_string(&text, *mode);
            }
            SpriteSource::Image { path, fit_to_image } => {
                let bytes = self.store.load_bytes(path)?;
                let image = image::load_from_memory(&bytes)?;
                sprite.generate_from_image(&image, *fit_to_image);
            }
        }

        debug!(
            sprite = %manifest.name,
            width = sprite.width(),
            height = sprite.height(),
            pixels = sprite.cell_count(),
            "Built sprite"
        );
        Ok(sprite)
    }

    /// Load a manifest and build its sprite
    pub fn load(&self, name: &str) -> Result<Sprite, LoaderError> {
        let manifest = self.load_manifest(name)?;
        self.load_sprite(&manifest)
    }

    /// Load an encoded image as a sprite the size of the image
    pub fn load_image(&self, name: &str) -> Result<Sprite, LoaderError> {
        let bytes = self.store.load_bytes(name)?;
        let image = image::load_from_memory(&bytes)?;

        let mut sprite = Sprite::new([0, 0]);
        sprite.generate_from_image(&image, true);

        debug!(image = name, width = sprite.width(), height = sprite.height(), "Loaded image");
        Ok(sprite)
    }

    /// Encode a sprite as PNG and save it
    pub fn save_png(&mut self, sprite: &Sprite, name: &str) -> Result<(), LoaderError> {
        let bytes = encode_png(sprite)?;
        self.store.save_bytes(name, &bytes)?;
        Ok(())
    }
}

/// Encode a sprite as PNG bytes
pub fn encode_png(sprite: &Sprite) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    sprite
        .to_rgba_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
