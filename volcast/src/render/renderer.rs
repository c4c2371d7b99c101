use std::time::Instant;

use nalgebra::Point3;

use super::{compositing::RayAccumulator, RenderState};
use crate::{
    camera::{Camera, ViewingPlane},
    volumetric::{LateralSampler, Sampler, Voxel, VoxelGrid},
};

/// Ray caster
///
/// Produces single channel intensity images, values in `<0;1>`, row-major, y=0 first.
pub struct Renderer<S = LateralSampler>
where
    S: Sampler,
{
    sampler: S,
}

impl Default for Renderer<LateralSampler> {
    fn default() -> Self {
        Renderer::new()
    }
}

impl Renderer<LateralSampler> {
    pub fn new() -> Renderer<LateralSampler> {
        Renderer {
            sampler: LateralSampler,
        }
    }
}

impl<S> Renderer<S>
where
    S: Sampler,
{
    pub fn with_sampler(sampler: S) -> Renderer<S> {
        Renderer { sampler }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Render rays cast straight through depth
    ///
    /// Output is `width * scale` by `height * scale`.
    pub fn render(&self, grid: &VoxelGrid, state: &RenderState) -> Vec<f32> {
        let (out_w, out_h) = state.output_resolution(grid);
        let mut buffer = vec![0.0; out_w * out_h];
        self.render_to_buffer(grid, state, &mut buffer);
        buffer
    }

    /// # Panics
    /// Buffer length must match output resolution.
    pub fn render_to_buffer(&self, grid: &VoxelGrid, state: &RenderState, buffer: &mut [f32]) {
        let (out_w, out_h) = state.output_resolution(grid);
        assert_eq!(
            buffer.len(),
            out_w * out_h,
            "buffer does not match resolution {out_w}x{out_h}"
        );

        let start = Instant::now();
        let scale_f = state.scale().max(1) as f32;

        for (oy, row) in buffer.chunks_exact_mut(out_w).enumerate() {
            let y = oy as f32 / scale_f;
            for (ox, pixel) in row.iter_mut().enumerate() {
                let x = ox as f32 / scale_f;
                *pixel = self.cast_straight(grid, state, x, y);
            }
        }

        log::debug!(
            "Rendered {out_w}x{out_h} {:?} in {:?}",
            state.policy(),
            start.elapsed()
        );
    }

    /// Walk depth slices `0, step, 2*step, ..` at lateral position `[x, y]`
    fn cast_straight(&self, grid: &VoxelGrid, state: &RenderState, x: f32, y: f32) -> f32 {
        let depth = grid.depth();
        let depth_f = depth as f32;
        let mut acc = RayAccumulator::new(state.policy(), state.transparency());

        for z in (0..depth).step_by(state.sample_step().max(1)) {
            let voxel = self.sampler.sample(grid, x, y, z);
            if acc.push(voxel, z as f32 / depth_f).is_break() {
                break;
            }
        }

        acc.finish()
    }

    /// Render rays generated by an oblique viewing plane
    ///
    /// Pixels whose ray misses the grid are zero.
    /// Sampling rounds to the nearest voxel, sample step of `state` is not used,
    /// the plane defines distance between samples.
    pub fn render_oblique(
        &self,
        grid: &VoxelGrid,
        state: &RenderState,
        plane: &ViewingPlane,
    ) -> Vec<f32> {
        let start = Instant::now();
        let (out_w, out_h) = plane.get_resolution();
        let mut buffer = vec![0.0; out_w * out_h];

        for (oy, row) in buffer.chunks_exact_mut(out_w.max(1)).enumerate() {
            for (ox, pixel) in row.iter_mut().enumerate() {
                *pixel = cast_oblique(grid, state, plane, ox, oy);
            }
        }

        log::debug!(
            "Rendered oblique {out_w}x{out_h} {:?} in {:?}",
            state.policy(),
            start.elapsed()
        );
        buffer
    }
}

fn cast_oblique(
    grid: &VoxelGrid,
    state: &RenderState,
    plane: &ViewingPlane,
    ox: usize,
    oy: usize,
) -> f32 {
    let ray = plane.get_ray(ox, oy);
    let (entry, exit) = match grid.extent_box().intersect_segment(&ray) {
        Some(e) => e,
        None => return 0.0,
    };

    let segment = exit - entry;
    let length = segment.norm();
    let step_length = plane.step_length();
    let n_of_steps = (length / step_length) as usize + 1;
    let step = if length > 0.0 {
        segment * (step_length / length)
    } else {
        segment
    };

    let mut acc = RayAccumulator::new(state.policy(), state.transparency());
    let mut pos = entry;

    for i in 0..n_of_steps {
        let voxel = nearest_voxel(grid, pos);
        let travelled = (i as f32 * step_length) / length.max(step_length);
        if acc.push(voxel, travelled).is_break() {
            break;
        }
        pos += step;
    }

    acc.finish()
}

/// Voxel nearest to `pos`, `pos` must be inside the grid extent box
fn nearest_voxel(grid: &VoxelGrid, pos: Point3<f32>) -> Voxel {
    // outer faces of the extent box round half a voxel past the last index
    let index = |v: f32, dim: usize| (v.round().max(0.0) as usize).min(dim - 1);
    grid.voxel(
        index(pos.x, grid.width()),
        index(pos.y, grid.height()),
        index(pos.z, grid.depth()),
    )
}
