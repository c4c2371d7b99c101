pub mod parse;
mod sampler;
mod vol_builder;
mod voxel;
mod voxel_grid;

pub use sampler::{LateralSampler, Sampler};
pub use vol_builder::DataSource;
pub use voxel::Voxel;
pub use voxel_grid::VoxelGrid;

use std::path::Path;

use crate::error::LoadError;

/// Load grid from binary volume file
pub fn from_file<P>(path: P) -> Result<VoxelGrid, LoadError>
where
    P: AsRef<Path>,
{
    VoxelGrid::from_file(path)
}
