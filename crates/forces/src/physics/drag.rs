//! Per-axis velocity damping.

use glam::Vec3;

/// Scales each velocity axis by `max(0, 1 - strength.axis * dt)`.
///
/// With `strength * dt` in [0, 1] an axis only shrinks; above 1 the axis is
/// zeroed. Negative strength amplifies velocity.
pub fn apply(strength: Vec3, dt: f32, velocity: &mut Vec3) {
    let factor = (Vec3::ONE - strength * dt).max(Vec3::ZERO);
    *velocity *= factor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damps_each_axis_independently() {
        let mut v = Vec3::new(10.0, -10.0, 4.0);
        apply(Vec3::new(0.5, 0.25, 0.0), 1.0, &mut v);
        assert_eq!(v, Vec3::new(5.0, -7.5, 4.0));
    }

    #[test]
    fn strength_above_one_zeroes_axis() {
        let mut v = Vec3::new(3.0, 3.0, 3.0);
        apply(Vec3::new(2.0, 0.0, 0.0), 1.0, &mut v);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 3.0);
    }

    #[test]
    fn dt_scales_strength() {
        let mut v = Vec3::splat(8.0);
        apply(Vec3::splat(1.0), 0.25, &mut v);
        assert_eq!(v, Vec3::splat(6.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_increases_speed_per_axis(
                vx in -1e3_f32..1e3, vy in -1e3_f32..1e3, vz in -1e3_f32..1e3,
                sx in 0.0_f32..=1.0, sy in 0.0_f32..=1.0, sz in 0.0_f32..=1.0,
            ) {
                let before = Vec3::new(vx, vy, vz);
                let mut after = before;
                apply(Vec3::new(sx, sy, sz), 1.0, &mut after);
                for axis in 0..3 {
                    prop_assert!(after[axis].abs() <= before[axis].abs());
                    // sign never flips
                    prop_assert!(after[axis] * before[axis] >= 0.0);
                }
            }
        }
    }
}
