//! N-dimensional color grid
//!
//! [`Grid`] is the storage shared by [`Sprite`](crate::Sprite) (two
//! dimensions) and [`VoxelSprite`](crate::VoxelSprite) (three dimensions).
//!
//! Cells live in a single flat buffer with x varying fastest, then y, then z.
//! The layout (the *extent*) is captured every time the grid is generated, so
//! changing [`Grid::size`] afterwards only affects the next generation call.
//!
//! A generation call may leave some cells unpopulated, for example when a
//! line of source text is shorter than the declared width. Unpopulated cells
//! behave exactly like cells outside the grid: reads miss, writes are refused
//! and they are left out of the color census.

use crate::color::Color;
use std::collections::HashMap;

/// Fixed-size grid of colors with `N` dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    /// Declared size, one entry per dimension (width, height, depth)
    pub size: [usize; N],
    /// Size the cell buffer was laid out with
    extent: [usize; N],
    /// Flat cell buffer, `None` for cells generation did not produce
    cells: Vec<Option<Color>>,
    /// Whether any generation call has run yet
    generated: bool,
}

impl<const N: usize> Grid<N> {
    /// Create an empty grid with a declared size
    ///
    /// The grid holds no cells until one of the `generate` calls runs.
    pub fn new(size: [usize; N]) -> Self {
        Self {
            size,
            extent: [0; N],
            cells: Vec::new(),
            generated: false,
        }
    }

    /// Get the size the cells were generated with
    pub fn extent(&self) -> [usize; N] {
        self.extent
    }

    /// Check if a generation call has populated this grid
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Fill the whole grid with one color
    pub fn generate(&mut self, color: Color) {
        self.allocate();
        self.cells.fill(Some(color));
    }

    /// Get the color at a position, `None` if there is no cell there
    pub fn get(&self, coords: [usize; N]) -> Option<Color> {
        self.index(coords).and_then(|idx| self.cells[idx])
    }

    /// Overwrite the color at a position
    ///
    /// Returns false (and changes nothing) if there is no cell there.
    pub fn set(&mut self, coords: [usize; N], color: Color) -> bool {
        match self.index(coords).map(|idx| &mut self.cells[idx]) {
            Some(Some(cell)) => {
                *cell = color;
                true
            }
            _ => false,
        }
    }

    /// Count how many cells hold each distinct color
    pub fn colors(&self) -> HashMap<Color, usize> {
        let mut census = HashMap::new();
        for color in self.cells.iter().flatten() {
            *census.entry(*color).or_insert(0) += 1;
        }
        census
    }

    /// Number of populated cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over populated cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = ([usize; N], Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|color| (self.coords_of(idx), color)))
    }

    /// Discard the current cells and lay out an unpopulated buffer for `size`
    pub(crate) fn allocate(&mut self) {
        self.extent = self.size;
        self.cells = vec![None; self.extent.iter().product()];
        self.generated = true;
    }

    /// Populate a cell during generation, ignoring positions outside the extent
    pub(crate) fn place(&mut self, coords: [usize; N], color: Color) {
        if let Some(idx) = self.index(coords) {
            self.cells[idx] = Some(color);
        }
    }

    /// Flat buffer index of a position, `None` outside the extent
    fn index(&self, coords: [usize; N]) -> Option<usize> {
        let mut idx = 0;
        let mut stride = 1;
        for (coord, extent) in coords.iter().zip(self.extent.iter()) {
            if coord >= extent {
                return None;
            }
            idx += coord * stride;
            stride *= extent;
        }
        Some(idx)
    }

    /// Position of a flat buffer index
    fn coords_of(&self, mut idx: usize) -> [usize; N] {
        let mut coords = [0; N];
        for (coord, extent) in coords.iter_mut().zip(self.extent.iter()) {
            *coord = idx % extent;
            idx /= extent;
        }
        coords
    }
}
