//! Force descriptors: the per-force configuration read by the kernel.
//!
//! A [`ForceDescriptor`] holds the fields every force shares (activation,
//! spatial range, timing mode) and a [`ForceKind`] carrying only the
//! parameters its physics routine uses.

use glam::Vec3;
use particle_forces_core::curve::{Interpolate, TimedCurve};

/// Spatial region in which a force has effect, centered on the force origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceShape {
    /// Axis-aligned box with the given half extents.
    Box { half_size: Vec3 },
    /// Sphere with the given radius.
    Sphere { radius: f32 },
}

impl ForceShape {
    /// Squared sphere radius; zero for boxes.
    pub fn radius_squared(&self) -> f32 {
        match self {
            ForceShape::Sphere { radius } => radius * radius,
            ForceShape::Box { .. } => 0.0,
        }
    }
}

impl Default for ForceShape {
    fn default() -> Self {
        ForceShape::Box {
            half_size: Vec3::ONE,
        }
    }
}

/// Which time parameter a force's curves are sampled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingType {
    /// Ignore curves and use the fallback value.
    #[default]
    Constant,
    /// Normalized particle life in [0, 1].
    OverParticleLife,
    /// Normalized layer life in [0, 1].
    OverLayerLife,
    /// Elapsed particle life in seconds.
    SecondsOfParticleLife,
}

/// What a plane collision does with a particle it does not reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockedCollision {
    /// Mark the particle dead.
    Kill,
    /// Stop the particle where it is.
    #[default]
    ZeroVelocity,
}

/// A parameter that is either a constant or sampled from a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedValue<T> {
    pub curve: Option<TimedCurve<T>>,
    pub fallback: T,
}

impl<T: Interpolate> TimedValue<T> {
    /// A value with no curve.
    pub fn constant(value: T) -> Self {
        Self {
            curve: None,
            fallback: value,
        }
    }

    /// A curve with a fallback used under [`TimingType::Constant`].
    pub fn with_curve(curve: TimedCurve<T>, fallback: T) -> Self {
        Self {
            curve: Some(curve),
            fallback,
        }
    }
}

/// Wind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindParams {
    /// Push direction.
    pub direction: Vec3,
    pub power: TimedValue<f32>,
    /// Strength of the positional turbulence.
    pub turbulence: TimedValue<f32>,
    /// Noise sampling frequency for the wind strength modulation; zero disables it.
    pub frequency: f32,
    /// Noise sampling frequency for turbulence.
    pub turbulence_frequency: f32,
    /// Share of particles, in percent, whose turbulence may push against the wind.
    pub backward_turbulence_probability: u32,
    /// Added to the modulation noise to form the wind multiplier.
    pub bias: f32,
}

impl Default for WindParams {
    fn default() -> Self {
        Self {
            direction: Vec3::X,
            power: TimedValue::constant(1.0),
            turbulence: TimedValue::constant(0.0),
            frequency: 0.0,
            turbulence_frequency: 1.0,
            backward_turbulence_probability: 0,
            bias: 1.0,
        }
    }
}

/// Point gravity parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGravityParams {
    pub power: TimedValue<f32>,
    /// Radius of the inner well around the origin.
    pub radius: f32,
    /// Target a per-particle point on the well's surface instead of its center.
    pub use_random_points_on_sphere: bool,
    /// Kill particles that reach the well instead of pinning them to its surface.
    pub kill_on_reach: bool,
}

impl Default for PointGravityParams {
    fn default() -> Self {
        Self {
            power: TimedValue::constant(1.0),
            radius: 1.0,
            use_random_points_on_sphere: false,
            kill_on_reach: false,
        }
    }
}

/// Plane collision parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneCollisionParams {
    /// Plane normal; normalized before use.
    pub normal: Vec3,
    /// Multiplier on the reflected velocity.
    pub power: TimedValue<f32>,
    /// Particles slower than this are not reflected.
    pub velocity_threshold: f32,
    /// Chance, in percent, that a crossing particle is reflected.
    pub reflection_percent: u32,
    /// Maximum random rotation of the reflected velocity about each axis, in degrees.
    pub reflection_chaos_degrees: f32,
    /// Reflect along the plane normal instead of mirroring the velocity.
    pub normal_as_reflection_vector: bool,
    /// Additionally scale the reflected velocity by a random factor in
    /// `[reflection_force_min, reflection_force_max)`.
    pub randomize_reflection_force: bool,
    pub reflection_force_min: f32,
    pub reflection_force_max: f32,
    pub on_blocked: BlockedCollision,
}

impl Default for PlaneCollisionParams {
    fn default() -> Self {
        Self {
            normal: Vec3::Y,
            power: TimedValue::constant(1.0),
            velocity_threshold: 0.1,
            reflection_percent: 100,
            reflection_chaos_degrees: 0.0,
            normal_as_reflection_vector: false,
            randomize_reflection_force: false,
            reflection_force_min: 1.0,
            reflection_force_max: 1.0,
            on_blocked: BlockedCollision::ZeroVelocity,
        }
    }
}

/// The physics a descriptor applies, with that physics' parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ForceKind {
    /// Per-axis velocity damping.
    Drag { strength: TimedValue<Vec3> },
    /// Vortex around `axis` through the force origin.
    Lorentz { axis: Vec3, power: TimedValue<f32> },
    /// Uniform acceleration along the caller's down vector. Ignores shape.
    Gravity { power: TimedValue<f32> },
    Wind(WindParams),
    PointGravity(PointGravityParams),
    PlaneCollision(PlaneCollisionParams),
}

/// One force attached to a particle layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceDescriptor {
    /// Diagnostic name.
    pub name: String,
    pub is_active: bool,
    pub shape: ForceShape,
    /// When set, the shape is ignored and the force applies everywhere.
    pub is_infinity_range: bool,
    pub timing: TimingType,
    pub kind: ForceKind,
}

impl ForceDescriptor {
    /// An active, unnamed, infinite-range force with constant timing.
    pub fn new(kind: ForceKind) -> Self {
        Self {
            name: String::new(),
            is_active: true,
            shape: ForceShape::default(),
            is_infinity_range: true,
            timing: TimingType::Constant,
            kind,
        }
    }

    /// Sets the diagnostic name (builder pattern).
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Restricts the force to `shape` (builder pattern).
    pub fn with_shape(mut self, shape: ForceShape) -> Self {
        self.shape = shape;
        self.is_infinity_range = false;
        self
    }

    /// Sets the timing mode (builder pattern).
    pub fn with_timing(mut self, timing: TimingType) -> Self {
        self.timing = timing;
        self
    }

    /// Enables or disables the force (builder pattern).
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Short label of the kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ForceKind::Drag { .. } => "drag",
            ForceKind::Lorentz { .. } => "lorentz",
            ForceKind::Gravity { .. } => "gravity",
            ForceKind::Wind(_) => "wind",
            ForceKind::PointGravity(_) => "point_gravity",
            ForceKind::PlaneCollision(_) => "plane_collision",
        }
    }

    /// The kind, followed by the quoted name when one is set.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.kind_name().to_owned()
        } else {
            format!("{} '{}'", self.kind_name(), self.name)
        }
    }
}
