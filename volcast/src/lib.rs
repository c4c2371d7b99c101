//! Volume ray casting
//!
//! Loads regular grids of 16bit samples and projects them into single channel images
//! using one of the compositing policies in [`render::Policy`].

pub mod camera;
pub mod common;
pub mod defaults;
pub mod error;
pub mod render;
pub mod session;
pub mod test_helpers;
pub mod volumetric;

pub use camera::{Camera, ViewingPlane};
pub use error::{LoadError, RenderStateError};
pub use render::{Policy, RenderState, Renderer};
pub use session::Session;
pub use volumetric::{Voxel, VoxelGrid};
