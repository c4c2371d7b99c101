use crate::{defaults, error::RenderStateError, volumetric::VoxelGrid};

/// Reduction of samples along a ray into one pixel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Maximum intensity projection, brightest sample
    #[default]
    Mip,
    /// First non-zero sample
    FirstHit,
    /// Mean of visited samples
    Average,
    /// Depth weighted opacity sum, saturates at full opacity
    AlphaCompositing,
}

/// Settings consumed by the renderer
///
/// Passed into every render call, changing it never triggers rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    policy: Policy,
    sample_step: usize,
    transparency: f32,
    scale: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            policy: Policy::Mip,
            sample_step: 1,
            transparency: defaults::TRANSPARENCY,
            scale: defaults::SCALE,
        }
    }
}

impl RenderState {
    pub fn builder() -> RenderStateBuilder {
        RenderStateBuilder::default()
    }

    /// Defaults derived from a freshly loaded grid
    pub fn for_grid(grid: &VoxelGrid) -> RenderState {
        RenderState {
            sample_step: grid.default_sample_step(),
            ..Default::default()
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn sample_step(&self) -> usize {
        self.sample_step
    }

    pub fn transparency(&self) -> f32 {
        self.transparency
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    pub fn set_sample_step(&mut self, sample_step: usize) -> Result<(), RenderStateError> {
        self.sample_step = check_sample_step(sample_step)?;
        Ok(())
    }

    pub fn set_transparency(&mut self, transparency: f32) -> Result<(), RenderStateError> {
        self.transparency = check_transparency(transparency)?;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: usize) -> Result<(), RenderStateError> {
        self.scale = check_scale(scale)?;
        Ok(())
    }

    /// Output resolution for grid, zero scale counts as 1
    pub fn output_resolution(&self, grid: &VoxelGrid) -> (usize, usize) {
        let scale = self.scale.max(1);
        (grid.width() * scale, grid.height() * scale)
    }
}

fn check_sample_step(step: usize) -> Result<usize, RenderStateError> {
    if step == 0 {
        Err(RenderStateError::ZeroSampleStep)
    } else {
        Ok(step)
    }
}

fn check_transparency(transparency: f32) -> Result<f32, RenderStateError> {
    if transparency.is_finite() && transparency > 0.0 {
        Ok(transparency)
    } else {
        Err(RenderStateError::InvalidTransparency(transparency))
    }
}

fn check_scale(scale: usize) -> Result<usize, RenderStateError> {
    if scale == 0 {
        Err(RenderStateError::ZeroScale)
    } else {
        Ok(scale)
    }
}

#[derive(Debug, Default)]
pub struct RenderStateBuilder {
    state: RenderState,
}

impl RenderStateBuilder {
    pub fn policy(mut self, policy: Policy) -> Self {
        self.state.policy = policy;
        self
    }

    pub fn sample_step(mut self, sample_step: usize) -> Self {
        self.state.sample_step = sample_step;
        self
    }

    pub fn transparency(mut self, transparency: f32) -> Self {
        self.state.transparency = transparency;
        self
    }

    pub fn scale(mut self, scale: usize) -> Self {
        self.state.scale = scale;
        self
    }

    pub fn build(self) -> Result<RenderState, RenderStateError> {
        let state = self.state;
        check_sample_step(state.sample_step)?;
        check_transparency(state.transparency)?;
        check_scale(state.scale)?;
        Ok(state)
    }

    /// Skips validation, zero step or scale will be raised to 1 by the renderer
    pub fn build_unchecked(self) -> RenderState {
        self.state
    }
}
