//! Two-dimensional sprites
//!
//! A [`Sprite`] is a [`Grid`] with a width and a height. On top of the grid
//! operations it can be populated from text, from any grid of color samples
//! and from raster images, and it can be drawn onto a larger board.

use crate::color::{Color, ColorSample};
use crate::grid::Grid;
use crate::raster::RasterSource;
use serde::{Deserialize, Serialize};

/// A 2D grid of colors, indexed `[x, y]`
pub type Sprite = Grid<2>;

/// How characters are turned into colors by [`Sprite::generate_from_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Whitespace is black, everything else is white
    #[default]
    Binary,
    /// `r`, `g` and `b` pick red, green and blue; whitespace is black, everything else white
    Rgb,
}

impl TextMode {
    /// Color for a single character
    pub fn color_for(self, ch: char) -> Color {
        match (self, ch) {
            (_, ' ' | '\t') => Color::BLACK,
            (TextMode::Rgb, 'r') => Color::RED,
            (TextMode::Rgb, 'g') => Color::GREEN,
            (TextMode::Rgb, 'b') => Color::BLUE,
            _ => Color::WHITE,
        }
    }
}

/// Numeric mode: zero or less is binary, one or more is RGB
impl From<i32> for TextMode {
    fn from(mode: i32) -> Self {
        if mode <= 0 {
            TextMode::Binary
        } else {
            TextMode::Rgb
        }
    }
}

impl Grid<2> {
    /// Declared width
    pub fn width(&self) -> usize {
        self.size[0]
    }

    /// Declared height
    pub fn height(&self) -> usize {
        self.size[1]
    }

    /// Populate the sprite from lines of text, one character per pixel
    ///
    /// Lines and characters beyond the declared size are dropped. A line
    /// shorter than the width leaves the rest of its row unpopulated rather
    /// than padded, so [`row_len`](Self::row_len) reports the line length.
    pub fn generate_from_string(&mut self, text: &str, mode: impl Into<TextMode>) {
        let mode = mode.into();
        let [width, height] = self.size;
        self.allocate();

        for (y, line) in text.split('\n').take(height).enumerate() {
            for (x, ch) in line.chars().take(width).enumerate() {
                self.place([x, y], mode.color_for(ch));
            }
        }
    }

    /// Populate the sprite from rows of color samples
    ///
    /// With `overwrite_own_size` the size becomes (length of the first row,
    /// number of rows) before copying. Samples outside the size are dropped.
    pub fn generate_from_sprite<S>(&mut self, rows: &[Vec<S>], overwrite_own_size: bool)
    where
        S: ColorSample,
    {
        if overwrite_own_size {
            let width = rows.first().map_or(0, Vec::len);
            self.size = [width, rows.len()];
        }

        let [width, height] = self.size;
        self.allocate();

        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, sample) in row.iter().take(width).enumerate() {
                let color = Color::from_premultiplied_rgba16(sample.premultiplied_rgba16());
                self.place([x, y], color);
            }
        }
    }

    /// Populate the sprite from a raster image
    ///
    /// Same size and clipping rules as [`generate_from_sprite`](Self::generate_from_sprite),
    /// with the image dimensions as the source size.
    pub fn generate_from_image<I>(&mut self, image: &I, overwrite_own_size: bool)
    where
        I: RasterSource + ?Sized,
    {
        let (image_width, image_height) = image.dimensions();
        if overwrite_own_size {
            self.size = [image_width, image_height];
        }

        let [width, height] = self.size;
        self.allocate();

        for y in 0..image_height.min(height) {
            for x in 0..image_width.min(width) {
                let color = Color::from_premultiplied_rgba16(image.sample_at(x, y));
                self.place([x, y], color);
            }
        }
    }

    /// Copy every pixel onto a board of rows, shifted by an offset
    ///
    /// Pixels that land outside the board (negative, past the last row, or
    /// past the end of their row) are dropped. Returns the number of board
    /// cells written.
    pub fn draw_on_board(&self, offset_x: i64, offset_y: i64, board: &mut [Vec<Color>]) -> usize {
        let mut drawn = 0;

        for ([x, y], color) in self.iter() {
            let Some(row) = shift(y, offset_y).and_then(|by| board.get_mut(by)) else {
                continue;
            };

            if let Some(cell) = shift(x, offset_x).and_then(|bx| row.get_mut(bx)) {
                *cell = color;
                drawn += 1;
            }
        }

        drawn
    }

    /// Get the color at `(x, y)`, `None` outside the sprite
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.get([x, y])
    }

    /// Overwrite the color at `(x, y)`, returns false outside the sprite
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        self.set([x, y], color)
    }

    /// Number of populated pixels in row `y`
    pub fn row_len(&self, y: usize) -> usize {
        (0..self.extent()[0])
            .take_while(|&x| self.get_pixel(x, y).is_some())
            .count()
    }

    /// Copy the pixels into a board of rows
    ///
    /// Unpopulated pixels become [`Color::TRANSPARENT`].
    pub fn to_board(&self) -> Vec<Vec<Color>> {
        let [width, height] = self.extent();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| self.get_pixel(x, y).unwrap_or(Color::TRANSPARENT))
                    .collect()
            })
            .collect()
    }
}

/// Move a sprite coordinate onto the board, `None` if it ends up negative
fn shift(coord: usize, offset: i64) -> Option<usize> {
    let shifted = i64::try_from(coord).ok()?.checked_add(offset)?;
    usize::try_from(shifted).ok()
}
