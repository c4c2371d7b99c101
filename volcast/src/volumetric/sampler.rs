use super::{Voxel, VoxelGrid};

/// Sampling of a grid at fractional lateral position.
///
/// Depth `z` is always an exact slice index.
pub trait Sampler {
    fn sample(&self, grid: &VoxelGrid, x: f32, y: f32, z: usize) -> Voxel;
}

/// Nearest voxel on integral positions, average of the four lateral neighbours otherwise.
///
/// The average is unweighted, position inside the cell does not matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct LateralSampler;

impl Sampler for LateralSampler {
    fn sample(&self, grid: &VoxelGrid, x: f32, y: f32, z: usize) -> Voxel {
        if x.fract() == 0.0 && y.fract() == 0.0 {
            return grid.voxel(x as usize, y as usize, z);
        }

        let x_lo = x.floor() as usize;
        let y_lo = y.floor() as usize;
        let x_hi = usize::min(x.ceil() as usize, grid.width() - 1);
        let y_hi = usize::min(y.ceil() as usize, grid.height() - 1);

        let sum = grid.voxel(x_lo, y_lo, z)
            + grid.voxel(x_hi, y_lo, z)
            + grid.voxel(x_hi, y_hi, z)
            + grid.voxel(x_lo, y_hi, z);

        sum / 4.0
    }
}
