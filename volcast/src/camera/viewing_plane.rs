use nalgebra::{vector, Point3, Vector3};

use super::Camera;
use crate::{common::Ray, defaults, volumetric::VoxelGrid};

/// Oblique viewing plane in front of the grid
///
/// Square quad centered on the grid centroid, pushed back against the view direction.
/// Side of the quad and its distance from the centroid both equal the grid diagonal,
/// so the whole grid is in view from any direction.
#[derive(Debug, Clone)]
pub struct ViewingPlane {
    corners: [Point3<f32>; 4], // [0,0], [1,0], [1,1], [0,1]
    pivot: Point3<f32>,
    view: Vector3<f32>, // normalized
    du: Vector3<f32>,   // Vector between two horizontally neighbouring pixels
    dv: Vector3<f32>,   // Vector between two vertically neighbouring pixels
    ray_length: f32,
    step_length: f32,
    resolution: (usize, usize),
}

impl ViewingPlane {
    /// Plane looking at `grid` along `view_direction`, `resolution` pixels wide and high
    pub fn new(
        grid: &VoxelGrid,
        view_direction: Vector3<f32>,
        resolution: (usize, usize),
    ) -> ViewingPlane {
        let view = view_direction.normalize();

        let bbox = grid.extent_box();
        let extent = f32::max(bbox.diagonal(), 1.0);
        let pivot = bbox.center() - view * extent;

        // up must not be parallel to view
        let up = if view.y.abs() < 0.99 {
            vector![0.0, 1.0, 0.0]
        } else {
            vector![1.0, 0.0, 0.0]
        };
        let x_axis = up.cross(&view).normalize();
        let y_axis = view.cross(&x_axis);

        let half_x = x_axis * (0.5 * extent);
        let half_y = y_axis * (0.5 * extent);
        let corners = [
            pivot - half_x - half_y,
            pivot + half_x - half_y,
            pivot + half_x + half_y,
            pivot - half_x + half_y,
        ];

        let (res_x, res_y) = resolution;
        let du = (corners[1] - corners[0]) / res_x.max(1) as f32;
        let dv = (corners[3] - corners[0]) / res_y.max(1) as f32;

        ViewingPlane {
            corners,
            pivot,
            view,
            du,
            dv,
            ray_length: 2.0 * extent,
            step_length: defaults::OBLIQUE_STEP_LENGTH,
            resolution,
        }
    }

    /// Plane with default view direction, resolution of the grid scaled by `scale`
    pub fn for_grid(grid: &VoxelGrid, scale: usize) -> ViewingPlane {
        let resolution = (grid.width() * scale, grid.height() * scale);
        ViewingPlane::new(grid, defaults::OBLIQUE_VIEW_DIRECTION, resolution)
    }

    /// Set distance between samples along rays, must be positive
    pub fn with_step_length(mut self, step_length: f32) -> ViewingPlane {
        assert!(step_length > 0.0, "step length must be positive");
        self.step_length = step_length;
        self
    }

    pub fn corners(&self) -> &[Point3<f32>; 4] {
        &self.corners
    }

    pub fn pivot(&self) -> Point3<f32> {
        self.pivot
    }

    pub fn view_direction(&self) -> Vector3<f32> {
        self.view
    }

    pub fn pixel_basis(&self) -> (Vector3<f32>, Vector3<f32>) {
        (self.du, self.dv)
    }

    pub fn step_length(&self) -> f32 {
        self.step_length
    }
}

impl Camera for ViewingPlane {
    fn get_resolution(&self) -> (usize, usize) {
        self.resolution
    }

    fn get_ray(&self, x: usize, y: usize) -> Ray {
        // pixel centers
        let start =
            self.corners[0] + self.du * (x as f32 + 0.5) + self.dv * (y as f32 + 0.5);
        Ray::new(start, self.view * self.ray_length)
    }
}
