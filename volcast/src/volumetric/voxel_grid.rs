use std::path::Path;

use nalgebra::{point, vector, Point3, Vector3};

use super::{
    parse::{self, VolumeHeader},
    vol_builder::DataSource,
    Voxel,
};
use crate::{common::BoundBox, defaults, error::LoadError};

/// Regular grid of voxels
///
/// Samples are stored linearly, `x` fastest, then `y`, then `z`.
/// Grid is immutable once built; loading a new file produces a new grid.
pub struct VoxelGrid {
    width: usize,
    height: usize,
    depth: usize,
    voxels: Vec<Voxel>,
}

impl std::fmt::Debug for VoxelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("data len", &self.voxels.len())
            .finish()
    }
}

impl Default for VoxelGrid {
    /// Degenerate 1x1x1 grid
    fn default() -> Self {
        VoxelGrid {
            width: 1,
            height: 1,
            depth: 1,
            voxels: vec![Voxel::ZERO],
        }
    }
}

impl VoxelGrid {
    /// Load grid from binary volume file
    pub fn from_file<P>(path: P) -> Result<VoxelGrid, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let ds = DataSource::from_file(path)?;
        let grid = VoxelGrid::from_bytes(ds.get_slice()).map_err(|e| {
            log::warn!("Error loading file {}: {e}", path.display());
            e
        })?;

        log::info!(
            "Loaded volume {} with dimensions {} x {} x {}",
            path.display(),
            grid.width,
            grid.height,
            grid.depth
        );
        Ok(grid)
    }

    /// Build grid from in-memory volume file
    pub fn from_bytes(bytes: &[u8]) -> Result<VoxelGrid, LoadError> {
        let (header, voxels) = parse::parse_volume(bytes)?;
        let VolumeHeader {
            width,
            height,
            depth,
        } = header;

        Ok(VoxelGrid {
            width,
            height,
            depth,
            voxels,
        })
    }

    /// Build grid from normalized voxels
    pub fn from_voxels(
        width: usize,
        height: usize,
        depth: usize,
        voxels: Vec<Voxel>,
    ) -> Result<VoxelGrid, LoadError> {
        let header = VolumeHeader {
            width,
            height,
            depth,
        };
        header.validate()?;

        if voxels.len() != header.size() {
            return Err(LoadError::SizeMismatch {
                expected: header.size(),
                actual: voxels.len(),
            });
        }

        Ok(VoxelGrid {
            width,
            height,
            depth,
            voxels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of voxels
    pub fn size(&self) -> usize {
        self.voxels.len()
    }

    pub fn get_size(&self) -> Vector3<usize> {
        vector![self.width, self.height, self.depth]
    }

    fn get_3d_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.width + z * self.width * self.height
    }

    /// # Panics
    /// Coordinates outside of the grid are a bug in the caller.
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> Voxel {
        assert!(
            x < self.width && y < self.height && z < self.depth,
            "voxel index ({x}, {y}, {z}) out of bounds {}x{}x{}",
            self.width,
            self.height,
            self.depth
        );
        self.voxels[self.get_3d_index(x, y, z)]
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// `round(depth / 5)`, at least 1
    pub fn default_sample_step(&self) -> usize {
        let step = (self.depth as f32 / defaults::SAMPLE_STEP_DIVISOR).round() as usize;
        step.max(1)
    }

    /// Box spanning voxel centers, `<0; dim - 1>` on every axis
    pub fn bound_box(&self) -> BoundBox {
        let dims = self.get_size().map(|v| (v - 1) as f32);
        BoundBox::from_position_dims(point![0.0, 0.0, 0.0], dims)
    }

    /// Box covered by the voxels, `<-0.5; dim - 0.5>` on every axis
    ///
    /// Unlike [`VoxelGrid::bound_box`] it keeps a thickness of one voxel on axes of size 1.
    pub fn extent_box(&self) -> BoundBox {
        let dims = self.get_size().map(|v| v as f32);
        BoundBox::from_position_dims(point![-0.5, -0.5, -0.5], dims)
    }

    pub fn centroid(&self) -> Point3<f32> {
        self.bound_box().center()
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn default_is_single_voxel() {
        let grid = VoxelGrid::default();
        assert_eq!(grid.get_size(), vector![1, 1, 1]);
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.voxel(0, 0, 0), Voxel::ZERO);
    }

    #[test]
    fn indexing_is_x_fastest() {
        let raw: Vec<u16> = (0..24).collect();
        let grid = VoxelGrid::from_bytes(&volume_bytes(2, 3, 4, &raw)).unwrap();

        for z in 0..4 {
            for y in 0..3 {
                for x in 0..2 {
                    let expected = parse::normalize((x + y * 2 + z * 6) as u16);
                    assert_eq!(grid.voxel(x, y, z), expected);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_panics() {
        let grid = ramp_grid(2, 2, 2);
        grid.voxel(0, 2, 0);
    }

    #[test]
    fn from_voxels_checks_size() {
        let res = VoxelGrid::from_voxels(2, 2, 2, vec![Voxel::ZERO; 7]);
        assert!(matches!(
            res,
            Err(LoadError::SizeMismatch {
                expected: 8,
                actual: 7
            })
        ));

        let res = VoxelGrid::from_voxels(0, 2, 2, vec![]);
        assert!(matches!(res, Err(LoadError::Format { .. })));
    }

    #[test]
    fn default_step() {
        let grid = |depth| VoxelGrid::from_voxels(1, 1, depth, vec![Voxel::ZERO; depth]).unwrap();
        assert_eq!(grid(100).default_sample_step(), 20);
        assert_eq!(grid(12).default_sample_step(), 2);
        assert_eq!(grid(13).default_sample_step(), 3);
        assert_eq!(grid(2).default_sample_step(), 1);
    }

    #[test]
    fn bound_box_spans_centers() {
        let grid = ramp_grid(4, 3, 2);
        let bbox = grid.bound_box();
        assert_eq!(bbox.lower, point![0.0, 0.0, 0.0]);
        assert_eq!(bbox.upper, point![3.0, 2.0, 1.0]);
        assert_eq!(grid.centroid(), point![1.5, 1.0, 0.5]);
    }

    #[test]
    fn extent_box_covers_voxels() {
        let grid = ramp_grid(4, 3, 1);
        let bbox = grid.extent_box();
        assert_eq!(bbox.lower, point![-0.5, -0.5, -0.5]);
        assert_eq!(bbox.upper, point![3.5, 2.5, 0.5]);
        assert_eq!(bbox.center(), grid.centroid());

        // flat along z, still one voxel thick
        assert_eq!(grid.bound_box().dims().z, 0.0);
        assert_eq!(bbox.dims().z, 1.0);
    }

    #[test]
    fn load_from_file() {
        let file = TempFile::with_volume("grid_load_from_file", 3, 2, 2, &[4095; 12]);
        let grid = VoxelGrid::from_file(file.path()).unwrap();
        assert_eq!(grid.size(), 12);
        assert!(grid.voxels().iter().all(|v| v.value() == 1.0));
    }
}
