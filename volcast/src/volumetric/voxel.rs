use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// One normalized scalar sample of a volume.
///
/// Values coming from the loader are clamped to `<0;1>`.
/// Intermediate results of arithmetic (sums in averaging) may leave that range.
#[derive(Debug, Default, Clone, Copy)]
pub struct Voxel {
    value: f32,
}

impl Voxel {
    pub const ZERO: Voxel = Voxel { value: 0.0 };

    pub fn new(value: f32) -> Voxel {
        debug_assert!(value.is_finite(), "voxel value must be finite");
        Voxel { value }
    }

    /// Voxel from normalized value, clamped to `<0;1>`
    pub fn clamped(value: f32) -> Voxel {
        Voxel::new(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        debug_assert!(value.is_finite(), "voxel value must be finite");
        self.value = value;
    }
}

impl From<f32> for Voxel {
    fn from(value: f32) -> Self {
        Voxel::new(value)
    }
}

impl From<Voxel> for f32 {
    fn from(voxel: Voxel) -> Self {
        voxel.value
    }
}

// Ordering is total, so `Iterator::max` and friends work on voxels directly

impl PartialEq for Voxel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Voxel {}

impl PartialOrd for Voxel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Voxel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Add for Voxel {
    type Output = Voxel;

    fn add(self, rhs: Voxel) -> Voxel {
        Voxel::new(self.value + rhs.value)
    }
}

impl AddAssign for Voxel {
    fn add_assign(&mut self, rhs: Voxel) {
        self.value += rhs.value;
    }
}

impl Sub for Voxel {
    type Output = Voxel;

    fn sub(self, rhs: Voxel) -> Voxel {
        Voxel::new(self.value - rhs.value)
    }
}

impl SubAssign for Voxel {
    fn sub_assign(&mut self, rhs: Voxel) {
        self.value -= rhs.value;
    }
}

impl Mul<f32> for Voxel {
    type Output = Voxel;

    fn mul(self, rhs: f32) -> Voxel {
        Voxel::new(self.value * rhs)
    }
}

impl MulAssign<f32> for Voxel {
    fn mul_assign(&mut self, rhs: f32) {
        self.value *= rhs;
    }
}

impl Div<f32> for Voxel {
    type Output = Voxel;

    fn div(self, rhs: f32) -> Voxel {
        Voxel::new(self.value / rhs)
    }
}

impl DivAssign<f32> for Voxel {
    fn div_assign(&mut self, rhs: f32) {
        self.value /= rhs;
    }
}
