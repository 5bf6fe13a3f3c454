//! Census command

use super::path_name;
use pixvox_core::{Color, Sprite};
use pixvox_io::{FileStore, SpriteLoader};
use std::path::Path;
use tracing::info;

pub fn run(image: &Path, top: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Counting colors in {}", image.display());

    let loader = SpriteLoader::new(FileStore::rooted("."));
    let sprite = loader.load_image(path_name(image)?)?;
    let ranked = ranked_colors(&sprite);

    println!(
        "{} ({}x{}): {} pixels, {} distinct colors",
        image.display(),
        sprite.width(),
        sprite.height(),
        sprite.cell_count(),
        ranked.len()
    );
    println!();

    let shown = top.unwrap_or(ranked.len());
    for (color, count) in ranked.iter().take(shown) {
        println!("  {}  {:>8}", color, count);
    }
    if shown < ranked.len() {
        println!("  ... {} more", ranked.len() - shown);
    }

    Ok(())
}

/// Colors ordered by how often they occur, most frequent first
///
/// Ties are broken by channel values so the output is stable.
pub fn ranked_colors(sprite: &Sprite) -> Vec<(Color, usize)> {
    let mut ranked: Vec<_> = sprite.colors().into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_array().cmp(&b.0.to_array()))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_colors() {
        let mut sprite = Sprite::new([3, 2]);
        sprite.generate(Color::WHITE);
        sprite.set_pixel(0, 0, Color::RED);
        sprite.set_pixel(1, 0, Color::BLUE);
        sprite.set_pixel(2, 0, Color::BLUE);

        let ranked = ranked_colors(&sprite);
        assert_eq!(
            ranked,
            vec![(Color::WHITE, 3), (Color::BLUE, 2), (Color::RED, 1)]
        );
    }

    #[test]
    fn test_ranked_ties_are_stable() {
        let mut sprite = Sprite::new([2, 1]);
        sprite.generate_from_string("rg", 1);

        let ranked = ranked_colors(&sprite);
        assert_eq!(ranked, vec![(Color::GREEN, 1), (Color::RED, 1)]);
    }
}
