//! Fixed-rate exponential smoothing used for every animated panel property.
//!
//! Each call moves `current` a constant fraction of the way toward `target`:
//!
//!   `current += (target - current) * factor`
//!
//! The step is not scaled by frame time. One call is one step, so the
//! animation speed follows the host's tick rate.

/// Fraction of the remaining distance covered by one step.
pub const DEFAULT_SMOOTHING: f32 = 0.2;

/// Advance `current` one smoothing step toward `target`.
///
/// With `factor` in `(0, 1]` the result lies between `current` and `target`
/// (inclusive of `target` only when `factor == 1`), so repeated calls
/// converge without overshooting.
#[inline]
pub fn smooth(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_moves_a_fifth_of_the_way() {
        assert_eq!(smooth(0.0, 10.0, DEFAULT_SMOOTHING), 2.0);
        assert_eq!(smooth(10.0, 0.0, DEFAULT_SMOOTHING), 8.0);
    }

    #[test]
    fn test_step_at_target_is_stable() {
        assert_eq!(smooth(42.0, 42.0, DEFAULT_SMOOTHING), 42.0);
    }

    #[test]
    fn test_strict_convergence_without_overshoot() {
        let pairs = [
            (0.0_f32, 1.0_f32),
            (1.0, 0.0),
            (-50.0, 75.5),
            (300.0, 12.0),
            (0.5, 0.25),
        ];
        for (current, target) in pairs {
            let next = smooth(current, target, DEFAULT_SMOOTHING);
            assert!(
                (next - target).abs() < (current - target).abs(),
                "{current} -> {target} gave {next}"
            );
            // Stays on the same side of the target.
            assert_eq!((next - target).signum(), (current - target).signum());
        }
    }

    #[test]
    fn test_repeated_steps_converge() {
        let mut value = 0.0;
        for _ in 0..200 {
            value = smooth(value, 1.0, DEFAULT_SMOOTHING);
            assert!(value <= 1.0);
        }
        assert!((value - 1.0).abs() < 1e-5, "value = {value}");

        let mut value = 1.0;
        for _ in 0..200 {
            value = smooth(value, 0.0, DEFAULT_SMOOTHING);
            assert!(value >= 0.0);
        }
        assert!(value < 1e-5, "value = {value}");
    }

    #[test]
    fn test_full_factor_jumps_to_target() {
        assert_eq!(smooth(3.0, 9.0, 1.0), 9.0);
    }
}
