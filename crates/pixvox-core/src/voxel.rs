//! Three-dimensional voxel sprites

use crate::color::Color;
use crate::grid::Grid;

/// A 3D grid of colors, indexed `[x, y, z]`
pub type VoxelSprite = Grid<3>;

impl Grid<3> {
    /// Declared depth
    pub fn depth(&self) -> usize {
        self.size[2]
    }

    /// Get the color at `(x, y, z)`, `None` outside the voxel sprite
    pub fn get_voxel(&self, x: usize, y: usize, z: usize) -> Option<Color> {
        self.get([x, y, z])
    }

    /// Overwrite the color at `(x, y, z)`, returns false outside the voxel sprite
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, color: Color) -> bool {
        self.set([x, y, z], color)
    }
}
