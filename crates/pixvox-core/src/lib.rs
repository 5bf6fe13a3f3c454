//! PixVox Core - Pixel and voxel grid containers
//!
//! Sprites are fixed-size grids of RGBA colors. A [`Sprite`] has two
//! dimensions and a [`VoxelSprite`] has three; both are aliases of the same
//! generic [`Grid`], so bounds checks, generation and the color census are
//! shared.
//!
//! # Usage
//!
//! ```text
//! Grid::new(size) → generate / generate_from_* → get / set / colors / draw_on_board
//! ```
//!
//! Reading or writing outside a grid is never an error: reads return `None`
//! and writes return `false`.

pub mod color;
pub mod grid;
pub mod raster;
pub mod sprite;
pub mod voxel;

// Re-export commonly used types
pub use color::{Color, ColorParseError, ColorSample};
pub use grid::Grid;
pub use raster::{RasterSource, Rgba16Image};
pub use sprite::{Sprite, TextMode};
pub use voxel::VoxelSprite;
