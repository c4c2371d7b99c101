use std::ops::ControlFlow;

use super::Policy;
use crate::volumetric::Voxel;

/// Running reduction of one ray
///
/// Samples are pushed front to back, `depth` is the position of the sample along the ray in `<0;1)`.
pub struct RayAccumulator {
    policy: Policy,
    transparency: f32,
    value: Voxel,
    alpha: f32,
    n_of_samples: usize,
}

impl RayAccumulator {
    pub fn new(policy: Policy, transparency: f32) -> RayAccumulator {
        RayAccumulator {
            policy,
            transparency,
            value: Voxel::ZERO,
            alpha: 0.0,
            n_of_samples: 0,
        }
    }

    /// Add sample, `Break` means the ray is done
    pub fn push(&mut self, voxel: Voxel, depth: f32) -> ControlFlow<()> {
        self.n_of_samples += 1;

        match self.policy {
            Policy::Mip => {
                self.value = self.value.max(voxel);
                ControlFlow::Continue(())
            }
            Policy::FirstHit => {
                if voxel.value() > 0.0 {
                    self.value = voxel;
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
            Policy::Average => {
                self.value += voxel;
                ControlFlow::Continue(())
            }
            Policy::AlphaCompositing => {
                // `depth` is a real fraction in <0;1>, nearer samples weigh more
                self.alpha += voxel.value() * (1.0 - depth) * self.transparency;
                if self.alpha > 1.0 {
                    self.alpha = 1.0;
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        }
    }

    pub fn n_of_samples(&self) -> usize {
        self.n_of_samples
    }

    /// Final pixel intensity
    pub fn finish(self) -> f32 {
        match self.policy {
            Policy::Mip | Policy::FirstHit => self.value.value(),
            Policy::Average => {
                if self.n_of_samples == 0 {
                    0.0
                } else {
                    (self.value / self.n_of_samples as f32).value()
                }
            }
            Policy::AlphaCompositing => self.alpha,
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn reduce(policy: Policy, values: &[f32]) -> (f32, usize) {
        let mut acc = RayAccumulator::new(policy, 0.5);
        let len = values.len() as f32;
        for (i, &v) in values.iter().enumerate() {
            if acc.push(Voxel::new(v), i as f32 / len).is_break() {
                break;
            }
        }
        let n = acc.n_of_samples();
        (acc.finish(), n)
    }

    #[test]
    fn mip_visits_all() {
        assert_eq!(reduce(Policy::Mip, &[0.1, 0.8, 0.3]), (0.8, 3));
    }

    #[test]
    fn first_hit_stops() {
        assert_eq!(reduce(Policy::FirstHit, &[0.0, 0.2, 0.9]), (0.2, 2));
        assert_eq!(reduce(Policy::FirstHit, &[0.0, 0.0]), (0.0, 2));
    }

    #[test]
    fn average_of_visited() {
        let (v, n) = reduce(Policy::Average, &[0.2, 0.4, 0.6]);
        assert!((v - 0.4).abs() < 1e-6);
        assert_eq!(n, 3);
        assert_eq!(reduce(Policy::Average, &[]), (0.0, 0));
    }

    #[test]
    fn alpha_saturates() {
        // 0.5 + 0.5 * 0.75 + clamp
        let (v, n) = reduce(Policy::AlphaCompositing, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(v, 1.0);
        assert_eq!(n, 3);

        let (v, n) = reduce(Policy::AlphaCompositing, &[0.4, 0.0]);
        assert!((v - 0.2).abs() < 1e-6);
        assert_eq!(n, 2);
    }
}
