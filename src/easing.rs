//! Cubic Bézier timing curves.
//!
//! Same parametrisation as CSS `cubic-bezier(x1, y1, x2, y2)`: the curve runs
//! from (0, 0) to (1, 1) and maps linear progress to eased progress.

/// A timing curve with control points `(x1, y1)` and `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Curve used by the detail card transition: fast start, long soft landing.
pub const CARD_EASING: CubicBezier = CubicBezier::new(0.2, 0.8, 0.2, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// Creates a curve. `x1` and `x2` must lie in `0..=1` for the curve to be a function.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        // Bernstein form with endpoints fixed at 0 and 1.
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Finds the curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x`, clamped to `0..=1`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(CARD_EASING.ease(0.0), 0.0);
        assert_eq!(CARD_EASING.ease(1.0), 1.0);
        assert_eq!(CARD_EASING.ease(-3.0), 0.0);
        assert_eq!(CARD_EASING.ease(7.0), 1.0);
    }

    #[test]
    fn linear_curve_is_identity() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 1..10 {
            let x = i as f64 / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn card_easing_front_loads_progress() {
        assert!(CARD_EASING.ease(0.25) > 0.5);
        let mut previous = 0.0;
        for i in 1..=20 {
            let y = CARD_EASING.ease(i as f64 / 20.0);
            assert!(y >= previous);
            previous = y;
        }
    }
}
