//! Keyframed scalar and vector curves sampled by a time parameter.
//!
//! A [`TimedCurve`] is either a single constant value or a sorted list of
//! `(t, value)` keys. Sampling clamps to the first/last key outside the key
//! range and interpolates linearly in between.

use glam::Vec3;

/// Values that can be linearly interpolated between two curve keys.
pub trait Interpolate: Copy {
    /// Returns `self + (other - self) * t`.
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Key<T> {
    t: f32,
    value: T,
}

/// A read-only function of a time parameter. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedCurve<T> {
    keys: Vec<Key<T>>,
}

impl<T: Interpolate> TimedCurve<T> {
    /// A curve that returns `value` for every `t`.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Key { t: 0.0, value }],
        }
    }

    /// Builds a curve from `(t, value)` pairs, sorting them by `t`.
    ///
    /// Returns `None` for an empty key list or any non-finite key time.
    pub fn keys(keys: impl IntoIterator<Item = (f32, T)>) -> Option<Self> {
        let mut keys: Vec<Key<T>> = keys
            .into_iter()
            .map(|(t, value)| Key { t, value })
            .collect();
        if keys.is_empty() || keys.iter().any(|k| !k.t.is_finite()) {
            return None;
        }
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Some(Self { keys })
    }

    /// Samples the curve at `t`.
    ///
    /// NaN samples the first key.
    pub fn sample(&self, t: f32) -> T {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t.is_nan() || t <= first.t {
            return first.value;
        }
        if t >= last.t {
            return last.value;
        }
        // first.t < t < last.t, so 1 <= upper < len
        let upper = self.keys.partition_point(|k| k.t <= t).max(1);
        let a = self.keys[upper - 1];
        let b = self.keys[upper];
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.value;
        }
        a.value.interpolate(b.value, (t - a.t) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_curve_ignores_time() {
        let c = TimedCurve::constant(3.5_f32);
        assert_eq!(c.sample(-10.0), 3.5);
        assert_eq!(c.sample(0.5), 3.5);
        assert_eq!(c.sample(1e6), 3.5);
    }

    #[test]
    fn empty_keys_is_rejected() {
        assert!(TimedCurve::<f32>::keys(Vec::new()).is_none());
    }

    #[test]
    fn keys_are_sorted_on_construction() {
        let c = TimedCurve::keys([(1.0, 10.0_f32), (0.0, 0.0)]).unwrap();
        assert_eq!(c.sample(-1.0), 0.0);
        assert_eq!(c.sample(2.0), 10.0);
        assert!((c.sample(0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn non_finite_key_times_are_rejected() {
        // 0/0 at runtime yields a NaN with the sign bit set, which
        // total_cmp orders before every finite time
        let zero = std::hint::black_box(0.0_f32);
        let negative_nan = zero / zero;
        for bad in [negative_nan, -f32::NAN, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(
                TimedCurve::keys([(bad, 1.0_f32), (0.5, 2.0)]).is_none(),
                "accepted key time {bad}"
            );
        }
    }

    #[test]
    fn sample_interpolates_between_keys() {
        let c = TimedCurve::keys([(0.0, 0.0_f32), (1.0, 10.0)]).unwrap();
        assert!((c.sample(0.25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_outside_key_range() {
        let c = TimedCurve::keys([(0.2, 1.0_f32), (0.8, 3.0)]).unwrap();
        assert_eq!(c.sample(0.0), 1.0);
        assert_eq!(c.sample(5.0), 3.0);
    }

    #[test]
    fn sample_hits_interior_key_exactly() {
        let c = TimedCurve::keys([(0.0, 0.0_f32), (0.5, 4.0), (1.0, 0.0)]).unwrap();
        assert_eq!(c.sample(0.5), 4.0);
    }

    #[test]
    fn vector_curve_interpolates_componentwise() {
        let c = TimedCurve::keys([(0.0, Vec3::ZERO), (2.0, Vec3::new(2.0, 4.0, -6.0))]).unwrap();
        let v = c.sample(1.0);
        assert!((v - Vec3::new(1.0, 2.0, -3.0)).length() < 1e-6);
    }

    #[test]
    fn nan_samples_first_key() {
        let c = TimedCurve::keys([(0.0, 1.0_f32), (1.0, 2.0)]).unwrap();
        assert_eq!(c.sample(f32::NAN), 1.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample_stays_within_key_value_range(
                keys in prop::collection::vec((-10.0_f32..10.0, -100.0_f32..100.0), 1..8),
                t in -20.0_f32..20.0,
            ) {
                let lo = keys.iter().map(|k| k.1).fold(f32::INFINITY, f32::min);
                let hi = keys.iter().map(|k| k.1).fold(f32::NEG_INFINITY, f32::max);
                let c = TimedCurve::keys(keys).unwrap();
                let v = c.sample(t);
                prop_assert!(v >= lo - 1e-3 && v <= hi + 1e-3, "{v} outside [{lo}, {hi}]");
            }
        }
    }
}
