//! PixVox IO - Resource storage and sprite loading
//!
//! Sprites are described by JSON manifests and built from text or image
//! resources. Everything goes through a [`ResourceStore`], so the same
//! loader works against the file system or an in-memory map.

pub mod loader;
pub mod manifest;
pub mod resource;

pub use loader::{encode_png, LoaderError, SpriteLoader};
pub use manifest::{ManifestError, SpriteManifest, SpriteSource, MANIFEST_VERSION};
pub use resource::{FileStore, MemoryStore, ResourceError, ResourceStore, StoreConfig};
