pub use criterion::{criterion_group, criterion_main, Criterion};

pub use volcast::{
    render::{Policy, RenderState, Renderer},
    test_helpers::ramp_grid,
    ViewingPlane, VoxelGrid,
};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 128;
pub const DEPTH: usize = 128;

pub fn get_volume() -> VoxelGrid {
    ramp_grid(WIDTH, HEIGHT, DEPTH)
}

pub fn get_state(policy: Policy, scale: usize) -> RenderState {
    RenderState::builder()
        .policy(policy)
        .sample_step(1)
        .scale(scale)
        .build_unchecked()
}
