//! Named resource storage
//!
//! Sprites are loaded from and saved to named resources. A resource is an
//! opaque blob of bytes; [`FileStore`] maps names onto files below a root
//! directory and [`MemoryStore`] keeps everything in a map.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Resource errors
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource too large: {name} is {size} bytes (limit {limit})")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("Resource {name} is not valid UTF-8: {source}")]
    Encoding {
        name: String,
        source: std::str::Utf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can load and save named resources
pub trait ResourceStore {
    /// Read the whole resource
    fn load_bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError>;

    /// Write the whole resource, creating it if it does not exist
    fn save_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), ResourceError>;

    /// Read a resource as lines of text
    ///
    /// Every line of the result ends with `\n`, including the last one, and
    /// `\r\n` line endings are normalised.
    fn load_text(&self, name: &str) -> Result<String, ResourceError> {
        let bytes = self.load_bytes(name)?;
        let text = std::str::from_utf8(&bytes).map_err(|source| ResourceError::Encoding {
            name: name.to_string(),
            source,
        })?;

        let mut content = String::with_capacity(text.len() + 1);
        for line in text.lines() {
            content.push_str(line);
            content.push('\n');
        }
        Ok(content)
    }

    /// Write text to a resource
    fn save_text(&mut self, name: &str, text: &str) -> Result<(), ResourceError> {
        self.save_bytes(name, text.as_bytes())
    }
}

/// File store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory resource names are resolved against
    pub root: PathBuf,
    /// Maximum resource size in bytes
    pub max_file_size: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: 64 * 1024 * 1024, // 64MB
        }
    }
}

/// Resource store backed by the file system
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Create a new file store
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a file store rooted at a directory with default limits
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig {
            root: root.into(),
            ..Default::default()
        })
    }

    /// Get configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path a resource name resolves to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.config.root.join(name)
    }
}

impl ResourceStore for FileStore {
    fn load_bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.path_for(name);

        let size = std::fs::metadata(&path)?.len();
        if size > self.config.max_file_size {
            return Err(ResourceError::TooLarge {
                name: name.to_string(),
                size,
                limit: self.config.max_file_size,
            });
        }

        let data = std::fs::read(&path)?;
        debug!(path = %path.display(), bytes = data.len(), "Loaded resource");
        Ok(data)
    }

    fn save_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), ResourceError> {
        let path = self.path_for(name);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, data)?;

        debug!(path = %path.display(), bytes = data.len(), "Saved resource");
        Ok(())
    }
}

/// Resource store that keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource
    pub fn with_resource(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(name.into(), data.into());
        self
    }

    /// Get a resource without copying it
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.resources.get(name).map(|data| data.as_slice())
    }

    /// Number of stored resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceStore for MemoryStore {
    fn load_bytes(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        self.get(name)
            .map(|data| data.to_vec())
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn save_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), ResourceError> {
        self.resources.insert(name.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_text_gains_final_newline() {
        let store = MemoryStore::new().with_resource("art.txt", "rg\nb");
        assert_eq!(store.load_text("art.txt").unwrap(), "rg\nb\n");
    }

    #[test]
    fn test_text_normalises_crlf() {
        let store = MemoryStore::new().with_resource("art.txt", "r \r\n g\r\n");
        assert_eq!(store.load_text("art.txt").unwrap(), "r \n g\n");
    }

    #[test]
    fn test_empty_text() {
        let store = MemoryStore::new().with_resource("empty.txt", "");
        assert_eq!(store.load_text("empty.txt").unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8() {
        let store = MemoryStore::new().with_resource("bin", vec![0xFFu8, 0xFE]);
        let result = store.load_text("bin");
        assert!(matches!(result, Err(ResourceError::Encoding { .. })));
    }

    #[test]
    fn test_memory_store_missing() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load_bytes("nope"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::rooted(temp_dir.path());

        store.save_text("sprites/ship.txt", " r \nrgr").unwrap();
        assert!(temp_dir.path().join("sprites/ship.txt").exists());
        assert_eq!(store.load_text("sprites/ship.txt").unwrap(), " r \nrgr\n");
    }

    #[test]
    fn test_file_store_overwrite_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::rooted(temp_dir.path());

        store.save_text("note.txt", "a long first version").unwrap();
        store.save_text("note.txt", "short").unwrap();
        assert_eq!(store.load_bytes("note.txt").unwrap(), b"short");
    }

    #[test]
    fn test_file_store_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::rooted(temp_dir.path());

        let result = store.load_bytes("missing.png");
        assert!(matches!(
            result,
            Err(ResourceError::Io(ref err)) if err.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_file_store_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("big.txt"), [b'x'; 32]).unwrap();

        let store = FileStore::new(StoreConfig {
            root: temp_dir.path().to_path_buf(),
            max_file_size: 16,
        });

        let result = store.load_bytes("big.txt");
        assert!(matches!(
            result,
            Err(ResourceError::TooLarge {
                size: 32,
                limit: 16,
                ..
            })
        ));
    }
}
