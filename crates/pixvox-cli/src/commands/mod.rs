//! Subcommands and their shared argument helpers

pub mod census;
pub mod render;
pub mod stamp;

use pixvox_io::FileStore;
use std::path::Path;

/// Parse a `WIDTHxHEIGHT` board size
pub fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;

    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    let height = height
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid height '{}': {}", height, e))?;

    Ok((width, height))
}

/// Parse an `X,Y` offset
pub fn parse_offset(s: &str) -> Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;

    let x = x
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid x offset '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid y offset '{}': {}", y, e))?;

    Ok((x, y))
}

/// Store rooted at a manifest's directory, plus the manifest's name inside it
///
/// Source paths inside the manifest resolve against the same directory.
pub fn manifest_store(
    manifest: &Path,
) -> Result<(FileStore, String), Box<dyn std::error::Error>> {
    let root = manifest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = manifest
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid manifest path: {}", manifest.display()))?;

    Ok((FileStore::rooted(root), name.to_string()))
}

/// Resource name for a path given on the command line
pub fn path_name(path: &Path) -> Result<&str, Box<dyn std::error::Error>> {
    path.to_str()
        .ok_or_else(|| format!("path is not valid UTF-8: {}", path.display()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("32x16"), Ok((32, 16)));
        assert_eq!(parse_size("4X 2"), Ok((4, 2)));
        assert!(parse_size("32").is_err());
        assert!(parse_size("-1x2").is_err());
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("3,4"), Ok((3, 4)));
        assert_eq!(parse_offset("-2, 7"), Ok((-2, 7)));
        assert!(parse_offset("3;4").is_err());
        assert!(parse_offset("a,1").is_err());
    }

    #[test]
    fn test_manifest_store() {
        let (store, name) = manifest_store(Path::new("assets/ships/fighter.json")).unwrap();
        assert_eq!(name, "fighter.json");
        assert_eq!(store.config().root, Path::new("assets/ships"));

        let (store, name) = manifest_store(Path::new("fighter.json")).unwrap();
        assert_eq!(name, "fighter.json");
        assert_eq!(store.config().root, Path::new("."));
    }
}
