//! Evaluation of timed values against a descriptor's timing mode.

use crate::descriptor::{TimedValue, TimingType};
use particle_forces_core::curve::Interpolate;

/// Resolves a [`TimedValue`] for one particle.
///
/// `Constant` timing, or a value without a curve, returns the fallback.
/// Otherwise the curve is sampled at the normalized particle life, the
/// normalized layer life, or the elapsed particle life in seconds.
pub fn get_value<T: Interpolate>(
    timing: TimingType,
    particle_over_life: f32,
    layer_over_life: f32,
    particle_elapsed_life: f32,
    value: &TimedValue<T>,
) -> T {
    let Some(curve) = &value.curve else {
        return value.fallback;
    };
    match timing {
        TimingType::Constant => value.fallback,
        TimingType::OverParticleLife => curve.sample(particle_over_life),
        TimingType::OverLayerLife => curve.sample(layer_over_life),
        TimingType::SecondsOfParticleLife => curve.sample(particle_elapsed_life),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use particle_forces_core::curve::TimedCurve;

    fn ramp() -> TimedValue<f32> {
        // value == t on [0, 10]
        TimedValue::with_curve(TimedCurve::keys([(0.0, 0.0), (10.0, 10.0)]).unwrap(), -1.0)
    }

    #[test]
    fn constant_timing_uses_fallback() {
        assert_eq!(get_value(TimingType::Constant, 0.5, 0.5, 5.0, &ramp()), -1.0);
    }

    #[test]
    fn missing_curve_uses_fallback_for_every_timing() {
        let v = TimedValue::constant(3.0_f32);
        for timing in [
            TimingType::Constant,
            TimingType::OverParticleLife,
            TimingType::OverLayerLife,
            TimingType::SecondsOfParticleLife,
        ] {
            assert_eq!(get_value(timing, 0.2, 0.4, 6.0, &v), 3.0);
        }
    }

    #[test]
    fn over_particle_life_samples_particle_fraction() {
        let v = get_value(TimingType::OverParticleLife, 0.2, 0.4, 6.0, &ramp());
        assert!((v - 0.2).abs() < 1e-6, "expected 0.2, got {v}");
    }

    #[test]
    fn over_layer_life_samples_layer_fraction() {
        let v = get_value(TimingType::OverLayerLife, 0.2, 0.4, 6.0, &ramp());
        assert!((v - 0.4).abs() < 1e-6, "expected 0.4, got {v}");
    }

    #[test]
    fn seconds_of_particle_life_samples_absolute_seconds() {
        let v = get_value(TimingType::SecondsOfParticleLife, 0.2, 0.4, 6.0, &ramp());
        assert!((v - 6.0).abs() < 1e-6, "expected 6.0, got {v}");
    }

    #[test]
    fn vector_values_are_supported() {
        let v = TimedValue::with_curve(TimedCurve::constant(Vec3::X), Vec3::ZERO);
        assert_eq!(
            get_value(TimingType::OverParticleLife, 0.5, 0.0, 0.0, &v),
            Vec3::X
        );
    }
}
