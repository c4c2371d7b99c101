use crate::common::Ray;

mod viewing_plane;

pub use viewing_plane::ViewingPlane;

/// Source of rays, one per output pixel
pub trait Camera {
    fn get_resolution(&self) -> (usize, usize);

    /// Ray segment for pixel `[x, y]`
    fn get_ray(&self, x: usize, y: usize) -> Ray;
}
