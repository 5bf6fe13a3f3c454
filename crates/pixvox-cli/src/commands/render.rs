//! Render command

use super::{manifest_store, path_name};
use pixvox_io::{FileStore, SpriteLoader};
use std::path::Path;
use tracing::info;

pub fn run(manifest: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!("Rendering sprite from {}", manifest.display());

    let (store, name) = manifest_store(manifest)?;
    let loader = SpriteLoader::new(store);
    let manifest = loader.load_manifest(&name)?;
    let sprite = loader.load_sprite(&manifest)?;

    info!(
        "Built '{}' ({}x{}, {} pixels)",
        manifest.name,
        sprite.width(),
        sprite.height(),
        sprite.cell_count()
    );

    let mut writer = SpriteLoader::new(FileStore::rooted("."));
    writer.save_png(&sprite, path_name(output)?)?;

    println!("Sprite written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_text_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("ship.json");
        std::fs::write(
            &manifest,
            r#"{
                "name": "ship",
                "size": [3, 2],
                "source": { "type": "text", "path": "ship.txt", "mode": "rgb" }
            }"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("ship.txt"), "rgb\nbgr").unwrap();

        let output = temp_dir.path().join("out/ship.png");
        run(&manifest, &output).unwrap();

        let loader = SpriteLoader::new(FileStore::rooted(temp_dir.path()));
        let sprite = loader.load_image("out/ship.png").unwrap();
        assert_eq!(sprite.size, [3, 2]);
        assert_eq!(sprite.cell_count(), 6);
    }
}
