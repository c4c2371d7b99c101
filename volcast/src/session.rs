//! Currently opened dataset and its render settings
//!
//! Sits between the control surface (menus, sliders) and the renderer.

use std::path::Path;

use crate::{
    error::{LoadError, RenderStateError},
    render::{Policy, RenderState, Renderer},
    volumetric::VoxelGrid,
};

/// Loaded grid with render settings
///
/// A grid is only ever replaced as a whole, by a successful [`Session::open`].
#[derive(Default)]
pub struct Session {
    grid: Option<VoxelGrid>,
    state: RenderState,
    renderer: Renderer,
}

impl Session {
    /// Session without dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Load volume file
    ///
    /// On success the grid is replaced and settings reset to defaults of the new grid.
    /// On failure, previous grid and settings stay untouched.
    pub fn open<P>(&mut self, path: P) -> Result<(), LoadError>
    where
        P: AsRef<Path>,
    {
        let grid = VoxelGrid::from_file(path)?;
        self.set_grid(grid);
        Ok(())
    }

    /// Replace grid, reset settings
    pub fn set_grid(&mut self, grid: VoxelGrid) {
        self.state = RenderState::for_grid(&grid);
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&VoxelGrid> {
        self.grid.as_ref()
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn set_policy(&mut self, policy: Policy) {
        log::debug!("Set rendering technique {policy:?}");
        self.state.set_policy(policy);
    }

    /// Set sample step, clamped to depth of the grid
    pub fn set_sample_step(&mut self, sample_step: usize) -> Result<(), RenderStateError> {
        let step = match &self.grid {
            Some(grid) => sample_step.min(grid.depth()),
            None => sample_step,
        };
        log::debug!("Set sample distance {step}");
        self.state.set_sample_step(step)
    }

    pub fn set_transparency(&mut self, transparency: f32) -> Result<(), RenderStateError> {
        log::debug!("Set transparency {transparency}");
        self.state.set_transparency(transparency)
    }

    pub fn set_scale(&mut self, scale: usize) -> Result<(), RenderStateError> {
        log::debug!("Set scale factor {scale}");
        self.state.set_scale(scale)
    }

    /// Render current grid, `None` if nothing is loaded
    pub fn render(&self) -> Option<Vec<f32>> {
        self.grid
            .as_ref()
            .map(|grid| self.renderer.render(grid, &self.state))
    }

    /// Output resolution of [`Session::render`]
    pub fn output_resolution(&self) -> Option<(usize, usize)> {
        self.grid
            .as_ref()
            .map(|grid| self.state.output_resolution(grid))
    }
}
