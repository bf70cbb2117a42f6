//! Applying a layer's full force list to its particles for one tick.

use crate::acceleration::AccelerationForce;
use crate::apply::ForceFrame;
use crate::context::ForceContext;
use crate::descriptor::ForceDescriptor;
use glam::Vec3;
use particle_forces_core::particle::Particle;
use particle_forces_core::prng::{RandomSource, Xorshift64};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A descriptor together with its world-space origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedForce {
    pub descriptor: ForceDescriptor,
    pub origin: Vec3,
}

/// Per-tick inputs shared by every particle of a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub dt: f32,
    pub layer_over_life: f32,
    pub down: Vec3,
    /// Seed for the per-particle random streams of this tick.
    pub seed: u64,
}

/// The ordered forces attached to one particle layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerForces {
    pub accelerations: Vec<AccelerationForce>,
    pub forces: Vec<PlacedForce>,
}

impl LayerForces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a force placed at `origin` (builder pattern).
    pub fn with_force(mut self, descriptor: ForceDescriptor, origin: Vec3) -> Self {
        self.forces.push(PlacedForce { descriptor, origin });
        self
    }

    /// Appends a legacy acceleration (builder pattern).
    pub fn with_acceleration(mut self, acceleration: AccelerationForce) -> Self {
        self.accelerations.push(acceleration);
        self
    }

    /// Applies accelerations, then every force in declaration order, to one
    /// particle. Stops as soon as a force kills the particle.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        ctx: &ForceContext,
        particle: &mut Particle,
        prev_position: Vec3,
        tick: &Tick,
        rng: &mut R,
    ) {
        for acceleration in &self.accelerations {
            acceleration.apply(particle, tick.layer_over_life, tick.dt);
        }
        for placed in &self.forces {
            if particle.is_dead() {
                return;
            }
            let frame = ForceFrame {
                dt: tick.dt,
                particle_over_life: particle.over_life(),
                layer_over_life: tick.layer_over_life,
                down: tick.down,
                prev_position,
                force_origin: placed.origin,
            };
            ctx.apply_force(&placed.descriptor, particle, &frame, rng);
        }
    }

    /// Applies the layer to every particle in order.
    ///
    /// `prev_positions[i]` is the start-of-tick position of `particles[i]`;
    /// extra entries on either side are ignored. Each particle draws from its
    /// own stream seeded by `(tick.seed, id)`.
    pub fn apply_all(
        &self,
        ctx: &ForceContext,
        particles: &mut [Particle],
        prev_positions: &[Vec3],
        tick: &Tick,
    ) {
        for (particle, &prev) in particles.iter_mut().zip(prev_positions) {
            let mut rng = Xorshift64::for_stream(tick.seed, u64::from(particle.id));
            self.apply(ctx, particle, prev, tick, &mut rng);
        }
    }

    /// Parallel [`apply_all`](Self::apply_all). Produces the same result as
    /// the sequential version regardless of thread count.
    #[cfg(feature = "parallel")]
    pub fn par_apply_all(
        &self,
        ctx: &ForceContext,
        particles: &mut [Particle],
        prev_positions: &[Vec3],
        tick: &Tick,
    ) {
        particles
            .par_iter_mut()
            .zip(prev_positions.par_iter())
            .for_each(|(particle, &prev)| {
                let mut rng = Xorshift64::for_stream(tick.seed, u64::from(particle.id));
                self.apply(ctx, particle, prev, tick, &mut rng);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        BlockedCollision, ForceKind, ForceShape, PlaneCollisionParams, TimedValue, WindParams,
    };
    use particle_forces_core::config::TableConfig;

    fn ctx() -> ForceContext {
        ForceContext::new(&TableConfig {
            noise_width: 32,
            noise_height: 32,
            direction_count: 128,
            seed: Some(3),
        })
        .unwrap()
    }

    fn tick() -> Tick {
        Tick {
            dt: 0.05,
            layer_over_life: 0.4,
            down: Vec3::NEG_Z,
            seed: 99,
        }
    }

    fn gravity(power: f32) -> ForceDescriptor {
        ForceDescriptor::new(ForceKind::Gravity {
            power: TimedValue::constant(power),
        })
    }

    fn killing_floor() -> ForceDescriptor {
        ForceDescriptor::new(ForceKind::PlaneCollision(PlaneCollisionParams {
            normal: Vec3::Z,
            reflection_percent: 0,
            on_blocked: BlockedCollision::Kill,
            ..PlaneCollisionParams::default()
        }))
    }

    #[test]
    fn accelerations_run_before_forces() {
        let layer = LayerForces::new()
            .with_force(
                ForceDescriptor::new(ForceKind::Drag {
                    strength: TimedValue::constant(Vec3::splat(10.0)),
                }),
                Vec3::ZERO,
            )
            .with_acceleration(AccelerationForce::constant(Vec3::new(20.0, 0.0, 0.0)));
        let mut p = Particle::new(0, Vec3::ZERO, Vec3::ZERO, 1.0);
        layer.apply(&ctx(), &mut p, Vec3::ZERO, &tick(), &mut Xorshift64::new(1));
        // (0 + 20 * 0.05) * (1 - 10 * 0.05)
        assert!((p.velocity.x - 0.5).abs() < 1e-6, "{}", p.velocity);
    }

    #[test]
    fn dead_particle_skips_remaining_forces() {
        let layer = LayerForces::new()
            .with_force(killing_floor(), Vec3::ZERO)
            .with_force(gravity(100.0), Vec3::ZERO);
        let mut p = Particle::new(0, Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -5.0), 2.0);
        layer.apply(&ctx(), &mut p, Vec3::new(0.0, 0.0, 1.0), &tick(), &mut Xorshift64::new(1));
        assert!(p.is_dead());
        assert_eq!(p.velocity, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn force_origin_comes_from_placement() {
        let origin = Vec3::new(100.0, 0.0, 0.0);
        let vortex = ForceDescriptor::new(ForceKind::Lorentz {
            axis: Vec3::Z,
            power: TimedValue::constant(1.0),
        })
        .with_shape(ForceShape::Sphere { radius: 1.0 });
        let layer = LayerForces::new()
            .with_force(gravity(10.0).with_shape(ForceShape::Sphere { radius: 1.0 }), origin)
            .with_force(vortex, origin);

        let mut near = Particle::new(0, origin + Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, 1.0);
        let mut far = Particle::new(1, Vec3::ZERO, Vec3::ZERO, 1.0);
        let (near_prev, far_prev) = (near.position, far.position);
        layer.apply(&ctx(), &mut near, near_prev, &tick(), &mut Xorshift64::new(1));
        layer.apply(&ctx(), &mut far, far_prev, &tick(), &mut Xorshift64::new(1));
        // gravity everywhere, the vortex only near its origin
        assert!((near.velocity - Vec3::new(0.0, -0.05, -0.5)).length() < 1e-6, "{}", near.velocity);
        assert_eq!(far.velocity, Vec3::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn apply_all_ignores_unpaired_particles() {
        let layer = LayerForces::new().with_force(gravity(10.0), Vec3::ZERO);
        let mut particles = vec![Particle::new(0, Vec3::ZERO, Vec3::ZERO, 1.0); 3];
        layer.apply_all(&ctx(), &mut particles, &[Vec3::ZERO; 2], &tick());
        assert_eq!(particles[1].velocity, Vec3::new(0.0, 0.0, -0.5));
        assert_eq!(particles[2].velocity, Vec3::ZERO);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let ctx = ctx();
        let layer = LayerForces::new()
            .with_force(
                ForceDescriptor::new(ForceKind::Wind(WindParams {
                    turbulence: TimedValue::constant(2.0),
                    frequency: 1.5,
                    backward_turbulence_probability: 40,
                    ..WindParams::default()
                })),
                Vec3::ZERO,
            )
            .with_force(
                ForceDescriptor::new(ForceKind::PlaneCollision(PlaneCollisionParams {
                    normal: Vec3::Z,
                    reflection_percent: 60,
                    reflection_chaos_degrees: 25.0,
                    randomize_reflection_force: true,
                    reflection_force_min: 0.5,
                    reflection_force_max: 1.5,
                    ..PlaneCollisionParams::default()
                })),
                Vec3::ZERO,
            )
            .with_force(gravity(9.8), Vec3::ZERO);

        let prev: Vec<Vec3> = (0..500)
            .map(|i| Vec3::new(i as f32 * 0.1, 0.0, 0.5 + (i % 7) as f32 * 0.1))
            .collect();
        let spawn: Vec<Particle> = prev
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut particle = Particle::new(i as u32, p - Vec3::Z, Vec3::new(0.0, 1.0, -20.0), 3.0);
                particle.life = (i % 5) as f32 * 0.5;
                particle
            })
            .collect();

        let mut seq = spawn.clone();
        let mut par = spawn;
        layer.apply_all(&ctx, &mut seq, &prev, &tick());
        layer.par_apply_all(&ctx, &mut par, &prev, &tick());
        assert_eq!(seq, par);
    }
}
