use crate::NoiseGenerator3D;

// Height-dependent decay applied to raw 3D samples.
// factor = clamp(1 − max(0, y − threshold) / height, 0, 1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltitudeAttenuation {
    pub threshold: f64, // fixed offset above sea level
    pub height: f64,    // vertical extent of the generated world
}

impl AltitudeAttenuation {
    pub fn new(threshold: f64, height: f64) -> Self {
        Self { threshold, height }
    }

    // Factor in [0, 1], non-increasing in y above the threshold
    #[inline]
    pub fn factor(&self, y: f64) -> f64 {
        let excess = (y - self.threshold).max(0.0);
        if excess == 0.0 {
            return 1.0;
        }
        // height == 0 gives -inf here, clamped to 0
        (1.0 - excess / self.height).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn apply(&self, sample: f64, y: f64) -> f64 {
        sample * self.factor(y)
    }

    // Raw 3D sample at (x, y, z) scaled by the factor for y
    pub fn sample<N: NoiseGenerator3D>(&self, noise: &N, x: f64, y: f64, z: f64) -> f64 {
        self.apply(noise.get3(x, y, z), y)
    }
}

#[cfg(test)]
mod tests {
    use super::AltitudeAttenuation;
    use crate::NoiseGenerator3D;

    struct Constant(f64);

    impl NoiseGenerator3D for Constant {
        fn get3(&self, _x: f64, _y: f64, _z: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn full_strength_below_threshold() {
        let att = AltitudeAttenuation::new(10.0, 64.0);
        assert_eq!(att.factor(-5.0), 1.0);
        assert_eq!(att.factor(10.0), 1.0);
        assert_eq!(att.sample(&Constant(0.8), 1.0, 3.0, 2.0), 0.8);
    }

    #[test]
    fn decays_linearly_above_threshold() {
        let att = AltitudeAttenuation::new(10.0, 20.0);
        assert!((att.factor(15.0) - 0.75).abs() < 1e-12);
        assert!((att.factor(20.0) - 0.5).abs() < 1e-12);
        assert!((att.apply(-0.4, 20.0) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn clamps_at_zero_far_above() {
        let att = AltitudeAttenuation::new(10.0, 20.0);
        assert_eq!(att.factor(30.0), 0.0);
        assert_eq!(att.factor(1e9), 0.0);
    }

    #[test]
    fn zero_height_never_nan() {
        let att = AltitudeAttenuation::new(10.0, 0.0);
        assert_eq!(att.factor(5.0), 1.0);
        assert_eq!(att.factor(10.0), 1.0);
        assert_eq!(att.factor(10.5), 0.0);
    }

    #[test]
    fn non_increasing_above_threshold() {
        let att = AltitudeAttenuation::new(10.0, 48.0);
        let mut prev = att.factor(10.0);
        for step in 1..500 {
            let f = att.factor(10.0 + step as f64 * 0.25);
            assert!(f <= prev);
            prev = f;
        }
    }
}
