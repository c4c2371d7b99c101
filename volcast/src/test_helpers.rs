//! Module with helper functions
//! Saves repetition in unit and integration tests

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::volumetric::{Voxel, VoxelGrid};

/// Bytes of a volume file, header followed by `raw` samples.
/// `raw` is written as is, even if it does not match the dimensions.
pub fn volume_bytes(width: usize, height: usize, depth: usize, raw: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(6 + raw.len() * 2);
    for dim in [width, height, depth] {
        bytes.extend_from_slice(&(dim as u16).to_le_bytes());
    }
    for sample in raw {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Grid from normalized values, x fastest
pub fn grid_from_values(width: usize, height: usize, depth: usize, values: &[f32]) -> VoxelGrid {
    let voxels = values.iter().map(|&v| Voxel::new(v)).collect();
    VoxelGrid::from_voxels(width, height, depth, voxels).unwrap()
}

/// Grid with values repeating in a ramp, all in `<0;1>`
pub fn ramp_grid(width: usize, height: usize, depth: usize) -> VoxelGrid {
    let values: Vec<f32> = (0..width * height * depth)
        .map(|i| (i % 17) as f32 / 16.0)
        .collect();
    grid_from_values(width, height, depth, &values)
}

/// File in temp directory, removed on drop
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// `name` must be unique among tests
    pub fn with_bytes(name: &str, bytes: &[u8]) -> TempFile {
        let mut path = std::env::temp_dir();
        path.push(format!("volcast_{}_{name}.dat", std::process::id()));
        fs::write(&path, bytes).unwrap();
        TempFile { path }
    }

    pub fn with_volume(
        name: &str,
        width: usize,
        height: usize,
        depth: usize,
        raw: &[u16],
    ) -> TempFile {
        TempFile::with_bytes(name, &volume_bytes(width, height, depth, raw))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
