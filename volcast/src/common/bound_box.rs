use nalgebra::{Point3, Vector3};

use super::Ray;

/// Points closer than this are one intersection
const HIT_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes spanning planes perpendicular to `self`
    pub fn free_axes(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }
}

/// Axis aligned box
#[derive(Debug, Clone, Copy)]
pub struct BoundBox {
    pub lower: Point3<f32>,
    pub upper: Point3<f32>,
}

impl BoundBox {
    pub fn new(lower: Point3<f32>, upper: Point3<f32>) -> BoundBox {
        BoundBox { lower, upper }
    }

    pub fn from_position_dims(position: Point3<f32>, dimensions: Vector3<f32>) -> BoundBox {
        BoundBox {
            lower: position,
            upper: position + dimensions,
        }
    }

    pub fn dims(&self) -> Vector3<f32> {
        self.upper - self.lower
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.lower, &self.upper)
    }

    /// Length of the main diagonal
    pub fn diagonal(&self) -> f32 {
        self.dims().norm()
    }

    /// Position is inside or on the boundary
    pub fn is_in(&self, pos: &Point3<f32>) -> bool {
        (0..3).all(|i| pos[i] >= self.lower[i] && pos[i] <= self.upper[i])
    }

    /// Both segment ends lie on the same outer side of some axis
    fn trivially_outside(&self, start: &Point3<f32>, end: &Point3<f32>) -> bool {
        (0..3).any(|i| {
            (start[i] < self.lower[i] && end[i] < self.lower[i])
                || (start[i] > self.upper[i] && end[i] > self.upper[i])
        })
    }

    /// Segment parameters of crossings with the two planes perpendicular to `axis`,
    /// kept only if the crossing lies on the box face.
    fn axis_hits(&self, ray: &Ray, axis: Axis) -> [Option<f32>; 2] {
        let a = axis.index();
        let (u, v) = axis.free_axes();
        let d = ray.direction[a];

        // Parallel to the planes, they are never crossed
        if d == 0.0 {
            return [None, None];
        }

        [self.lower[a], self.upper[a]].map(|plane| {
            let t = (plane - ray.origin[a]) / d;
            if !(0.0..=1.0).contains(&t) {
                return None;
            }
            let p = ray.point_from_t(t);
            let on_face = |i: usize| {
                p[i] >= self.lower[i] - HIT_EPSILON && p[i] <= self.upper[i] + HIT_EPSILON
            };
            (on_face(u) && on_face(v)).then(|| t)
        })
    }

    /// Entry and exit point of segment `ray` with the box.
    ///
    /// Returns `None` unless the segment crosses the boundary in two distinct points.
    /// Entry is the point nearer to the segment start.
    pub fn intersect_segment(&self, ray: &Ray) -> Option<(Point3<f32>, Point3<f32>)> {
        if self.trivially_outside(&ray.origin, &ray.end()) {
            return None;
        }

        let mut first: Option<(f32, Point3<f32>)> = None;
        let mut second: Option<(f32, Point3<f32>)> = None;

        let hits = Axis::ALL
            .into_iter()
            .flat_map(|axis| self.axis_hits(ray, axis))
            .flatten();

        for t in hits {
            let p = self.clamp(ray.point_from_t(t));
            match first {
                None => first = Some((t, p)),
                Some((_, entry)) => {
                    if (p - entry).norm() > HIT_EPSILON {
                        second = Some((t, p));
                        break;
                    }
                }
            }
        }

        let ((t0, p0), (t1, p1)) = (first?, second?);
        if t0 <= t1 {
            Some((p0, p1))
        } else {
            Some((p1, p0))
        }
    }

    fn clamp(&self, p: Point3<f32>) -> Point3<f32> {
        Point3::from(p.coords.sup(&self.lower.coords).inf(&self.upper.coords))
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;

    fn unit_box() -> BoundBox {
        BoundBox::new(point![0.0, 0.0, 0.0], point![4.0, 4.0, 4.0])
    }

    fn assert_close(a: Point3<f32>, b: Point3<f32>) {
        assert!((a - b).norm() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn straight_through() {
        let ray = Ray::from_points(point![1.0, 2.0, -3.0], point![1.0, 2.0, 7.0]);
        let (entry, exit) = unit_box().intersect_segment(&ray).unwrap();
        assert_close(entry, point![1.0, 2.0, 0.0]);
        assert_close(exit, point![1.0, 2.0, 4.0]);
    }

    #[test]
    fn reversed_direction_keeps_order() {
        let ray = Ray::from_points(point![1.0, 2.0, 7.0], point![1.0, 2.0, -3.0]);
        let (entry, exit) = unit_box().intersect_segment(&ray).unwrap();
        assert_close(entry, point![1.0, 2.0, 4.0]);
        assert_close(exit, point![1.0, 2.0, 0.0]);
    }

    #[test]
    fn oblique_through_two_faces() {
        let ray = Ray::from_points(point![-1.0, 1.0, 1.0], point![5.0, 4.0, 1.0]);
        let (entry, exit) = unit_box().intersect_segment(&ray).unwrap();
        assert_close(entry, point![0.0, 1.5, 1.0]);
        assert_close(exit, point![4.0, 3.5, 1.0]);
    }

    #[test]
    fn parallel_outside_misses() {
        // along x, outside in y
        let ray = Ray::new(point![-2.0, 6.0, 1.0], vector![10.0, 0.0, 0.0]);
        assert!(unit_box().intersect_segment(&ray).is_none());

        // along z, outside in x
        let ray = Ray::new(point![-0.5, 2.0, -2.0], vector![0.0, 0.0, 10.0]);
        assert!(unit_box().intersect_segment(&ray).is_none());
    }

    #[test]
    fn parallel_inside_hits() {
        let ray = Ray::new(point![-2.0, 3.0, 1.0], vector![10.0, 0.0, 0.0]);
        let (entry, exit) = unit_box().intersect_segment(&ray).unwrap();
        assert_close(entry, point![0.0, 3.0, 1.0]);
        assert_close(exit, point![4.0, 3.0, 1.0]);
    }

    #[test]
    fn diagonal_through_corners() {
        // Corners are hit by three planes at once, duplicates ignored
        let ray = Ray::from_points(point![-1.0, -1.0, -1.0], point![5.0, 5.0, 5.0]);
        let (entry, exit) = unit_box().intersect_segment(&ray).unwrap();
        assert_close(entry, point![0.0, 0.0, 0.0]);
        assert_close(exit, point![4.0, 4.0, 4.0]);
    }

    #[test]
    fn touching_edge_only() {
        // grazes the edge x=0 y=4, both planes report the same point
        let ray = Ray::from_points(point![-1.0, 3.0, 2.0], point![1.0, 5.0, 2.0]);
        assert!(unit_box().intersect_segment(&ray).is_none());
    }

    #[test]
    fn ending_inside_is_single_hit() {
        let ray = Ray::from_points(point![1.0, 1.0, -3.0], point![1.0, 1.0, 2.0]);
        assert!(unit_box().intersect_segment(&ray).is_none());
    }

    #[test]
    fn segment_too_short() {
        let ray = Ray::from_points(point![1.0, 1.0, -3.0], point![1.0, 1.0, -1.0]);
        assert!(unit_box().intersect_segment(&ray).is_none());
    }

    #[test]
    fn box_helpers() {
        let bbox = unit_box();
        assert_eq!(bbox.center(), point![2.0, 2.0, 2.0]);
        assert!((bbox.diagonal() - 48.0_f32.sqrt()).abs() < 1e-5);
        assert!(bbox.is_in(&point![4.0, 0.0, 2.0]));
        assert!(!bbox.is_in(&point![4.1, 0.0, 2.0]));
    }
}
