//! Constants of the volume format and default render settings

use nalgebra::{vector, Vector3};

/// Largest accepted extent of any volume dimension
pub const MAX_DIMENSION: usize = 1000;

/// Maximum raw sample, 12 bit signal stored in 16 bits
pub const RAW_SAMPLE_MAX: f32 = 4095.0;

/// Header length in bytes, 3x u16
pub const HEADER_LEN: usize = 6;

/// Default sample step is `depth / SAMPLE_STEP_DIVISOR`
pub const SAMPLE_STEP_DIVISOR: f32 = 5.0;

pub const TRANSPARENCY: f32 = 0.2;

pub const SCALE: usize = 1;

/// Distance between samples along oblique rays, in voxels
pub const OBLIQUE_STEP_LENGTH: f32 = 1.0;

/// View direction of the oblique viewing plane, not normalized
pub const OBLIQUE_VIEW_DIRECTION: Vector3<f32> = vector![0.4, 0.3, 1.0];
