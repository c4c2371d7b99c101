use nalgebra::{Point3, Vector3};

/// Ray segment, `origin` at `t = 0`, `origin + direction` at `t = 1`.
///
/// Main usecase is getting intersections with the volume ([`super::BoundBox::intersect_segment`]),
/// then walking the intersected part in steps.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
        Ray { origin, direction }
    }

    /// Segment between two points
    pub fn from_points(start: Point3<f32>, end: Point3<f32>) -> Ray {
        Ray {
            origin: start,
            direction: end - start,
        }
    }

    pub fn end(&self) -> Point3<f32> {
        self.origin + self.direction
    }

    /// Returns point at parameter `t`
    pub fn point_from_t(&self, t: f32) -> Point3<f32> {
        self.origin + t * self.direction
    }

    pub fn length(&self) -> f32 {
        self.direction.norm()
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn segment_ends() {
        let ray = Ray::from_points(point![1.0, 1.0, 1.0], point![3.0, 1.0, 1.0]);
        assert_eq!(ray.direction, vector![2.0, 0.0, 0.0]);
        assert_eq!(ray.end(), point![3.0, 1.0, 1.0]);
        assert_eq!(ray.point_from_t(0.5), point![2.0, 1.0, 1.0]);
        assert_eq!(ray.length(), 2.0);
    }
}
