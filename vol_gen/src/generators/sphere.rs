use nalgebra::{Point3, Vector3};

use super::SampleGenerator;

/// Ball centered in the volume, touching the nearest faces
pub struct SphereGenerator {
    center: Point3<f32>,
    radius: f32,
    sample: u16,
}

impl SphereGenerator {
    pub fn new(dims: Vector3<u32>, sample: u16) -> SphereGenerator {
        let dims_f = dims.cast::<f32>();
        let center = Point3::from((dims_f - Vector3::repeat(1.0)) / 2.0);
        let radius = dims_f.min() / 2.0;
        SphereGenerator {
            center,
            radius,
            sample,
        }
    }
}

impl SampleGenerator for SphereGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        let pos = Point3::from(coords.cast::<f32>());
        if (pos - self.center).magnitude() <= self.radius {
            self.sample
        } else {
            0
        }
    }
}
