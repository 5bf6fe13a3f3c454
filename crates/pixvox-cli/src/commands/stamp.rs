//! Stamp command

use super::{manifest_store, path_name};
use pixvox_core::{Color, Sprite};
use pixvox_io::{FileStore, SpriteLoader};
use std::path::Path;
use tracing::info;

pub fn run(
    manifest: &Path,
    board: (usize, usize),
    background: Color,
    at: (i64, i64),
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let (store, name) = manifest_store(manifest)?;
    let sprite = SpriteLoader::new(store).load(&name)?;

    let canvas = stamp(&sprite, board, background, at);

    let mut writer = SpriteLoader::new(FileStore::rooted("."));
    writer.save_png(&canvas, path_name(output)?)?;

    println!("Board written to {}", output.display());
    Ok(())
}

/// Draw a sprite onto a fresh solid board
pub fn stamp(
    sprite: &Sprite,
    board: (usize, usize),
    background: Color,
    at: (i64, i64),
) -> Sprite {
    let (width, height) = board;
    let mut rows = vec![vec![background; width]; height];

    let drawn = sprite.draw_on_board(at.0, at.1, &mut rows);
    info!(
        "Stamped {} of {} pixels at ({}, {})",
        drawn,
        sprite.cell_count(),
        at.0,
        at.1
    );

    let mut canvas = Sprite::new([width, height]);
    canvas.generate_from_sprite(&rows, false);
    canvas
}
