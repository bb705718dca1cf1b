use std::f64::consts::PI;

/// Timestamps are monotonic microseconds, as handed out by a frame clock.
pub type Micros = i64;

const BASE_DURATION_MS: f64 = 100.0;
const MS_PER_DEGREE: f64 = 3.0;

/// Eases the dial from its current rotation back to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringBack {
    from: f64,
    started_at: Micros,
    duration: Micros,
}

impl SpringBack {
    pub fn new(from: f64, started_at: Micros) -> Self {
        let duration_ms = MS_PER_DEGREE * from.max(0.0).trunc() + BASE_DURATION_MS;
        Self {
            from,
            started_at,
            duration: (duration_ms * 1000.0) as Micros,
        }
    }

    pub fn duration(&self) -> Micros {
        self.duration
    }

    fn progress(&self, now: Micros) -> f64 {
        ((now - self.started_at) as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    /// Rotation in degrees at `now`.
    pub fn value_at(&self, now: Micros) -> f64 {
        self.from * (1.0 - accelerate_decelerate(self.progress(now)))
    }

    pub fn is_finished(&self, now: Micros) -> bool {
        now - self.started_at >= self.duration
    }
}

/// Starts and ends slowly, fastest in the middle.
pub fn accelerate_decelerate(t: f64) -> f64 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_duration_grows_with_rotation() {
        assert_eq!(SpringBack::new(0.0, 0).duration(), 100_000);
        assert_eq!(SpringBack::new(60.0, 0).duration(), 280_000);
        assert_eq!(SpringBack::new(330.5, 0).duration(), 1_090_000);
    }

    #[test]
    fn test_interpolation_endpoints() {
        let anim = SpringBack::new(90.0, 1_000);
        assert!((anim.value_at(1_000) - 90.0).abs() < EPS);
        assert!((anim.value_at(0) - 90.0).abs() < EPS);

        let end = 1_000 + anim.duration();
        assert!(anim.value_at(end).abs() < EPS);
        assert!(anim.value_at(end + 50_000).abs() < EPS);
        assert!(anim.is_finished(end));
        assert!(!anim.is_finished(end - 1));
    }

    #[test]
    fn test_halfway_is_half() {
        let anim = SpringBack::new(120.0, 0);
        let half = anim.duration() / 2;
        assert!((anim.value_at(half) - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_return() {
        let anim = SpringBack::new(200.0, 0);
        let mut last = f64::MAX;
        for step in 0..=50 {
            let value = anim.value_at(anim.duration() * step / 50);
            assert!(value <= last);
            last = value;
        }
    }

    #[test]
    fn test_curve_shape() {
        assert!(accelerate_decelerate(0.0).abs() < EPS);
        assert!((accelerate_decelerate(1.0) - 1.0).abs() < EPS);
        // slow start
        assert!(accelerate_decelerate(0.1) < 0.1);
    }
}
