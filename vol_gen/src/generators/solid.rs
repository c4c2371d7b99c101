use nalgebra::{vector, Vector3};

use super::SampleGenerator;

const PAD: u32 = 5;

/// Generate solid volume
/// All samples are the same, except for an empty border
pub struct SolidGenerator {
    /// The sample value
    sample: u16,
    pad: u32,
    dims: Vector3<u32>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<u32>, sample: u16) -> SolidGenerator {
        // Small volumes would end up empty
        let pad = PAD.min(dims.min() / 4);
        SolidGenerator { sample, pad, dims }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        let pad_end = self.dims - vector![self.pad, self.pad, self.pad];
        if coords.x < self.pad
            || coords.y < self.pad
            || coords.z < self.pad
            || coords.x >= pad_end.x
            || coords.y >= pad_end.y
            || coords.z >= pad_end.z
        {
            0
        } else {
            self.sample
        }
    }
}
