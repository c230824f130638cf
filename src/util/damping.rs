//! Damped scalar velocities shared by the pan and orbit models.
//!
//! Both models obey the same law each tick: multiply the velocity by a
//! deceleration factor, then snap it to exactly zero once its magnitude
//! falls to or below a snap threshold. The snap is what brings motion
//! to an actual rest instead of an asymptotic crawl.

/// Clamp `value` to `[min, max]` without panicking on inverted ranges.
///
/// Degenerate configuration (`min > max`) resolves to `min`, so motion
/// pins instead of crashing.
#[allow(clippy::manual_clamp)] // f32::clamp panics when min > max
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// A scalar velocity with multiplicative decay and a rest threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedScalar {
    value: f32,
    deceleration: f32,
    snap: f32,
}

impl DampedScalar {
    /// A resting scalar with the given decay factor and rest threshold.
    #[must_use]
    pub fn new(deceleration: f32, snap: f32) -> Self {
        Self {
            value: 0.0,
            deceleration,
            snap,
        }
    }

    /// Current velocity.
    #[must_use]
    pub fn get(self) -> f32 {
        self.value
    }

    /// `true` once the velocity has come to rest.
    #[must_use]
    pub fn at_rest(self) -> bool {
        self.value == 0.0
    }

    /// Replace the velocity outright (drag-style input).
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Accumulate an impulse, clamping the result to `[-limit, limit]`.
    ///
    /// A `limit` of zero pins the velocity regardless of how many
    /// impulses accumulate.
    pub fn impulse(&mut self, amount: f32, limit: f32) {
        self.value = clamp(self.value + amount, -limit, limit);
    }

    /// Apply one tick of decay, snapping to zero at the rest threshold.
    pub fn decay(&mut self) {
        self.value *= self.deceleration;
        if self.value.abs() <= self.snap {
            self.value = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_clamps_to_limit() {
        let mut v = DampedScalar::new(1.0, 0.0);
        v.impulse(5.0, 2.0);
        assert_eq!(v.get(), 2.0);
        v.impulse(-100.0, 2.0);
        assert_eq!(v.get(), -2.0);
    }

    #[test]
    fn zero_limit_pins_velocity() {
        let mut v = DampedScalar::new(1.0, 0.0);
        for _ in 0..10 {
            v.impulse(10.0, 0.0);
        }
        assert_eq!(v.get(), 0.0);
        assert!(v.at_rest());
    }

    #[test]
    fn decay_multiplies_then_snaps() {
        let mut v = DampedScalar::new(0.5, 1.0);
        v.set(4.0);

        v.decay();
        assert_eq!(v.get(), 2.0);

        v.decay();
        // 2.0 * 0.5 = 1.0 is at the threshold: snapped to rest.
        assert_eq!(v.get(), 0.0);
        assert!(v.at_rest());
    }

    #[test]
    fn magnitude_strictly_decreases_until_rest() {
        let mut v = DampedScalar::new(0.75, 0.1);
        v.set(2.0);

        let mut previous = v.get().abs();
        let mut ticks = 0;
        while !v.at_rest() {
            v.decay();
            assert!(v.get().abs() < previous || v.at_rest());
            previous = v.get().abs();
            ticks += 1;
            assert!(ticks < 100, "velocity never reached rest");
        }
        assert_eq!(v.get(), 0.0);
    }

    #[test]
    fn set_overwrites_rather_than_accumulates() {
        let mut v = DampedScalar::new(1.0, 0.0);
        v.set(3.0);
        v.set(-1.0);
        assert_eq!(v.get(), -1.0);
    }

    #[test]
    fn clamp_pins_on_inverted_range() {
        assert_eq!(clamp(0.0, 10.0, -10.0), 10.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-20.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(20.0, 0.0, 10.0), 10.0);
    }
}
