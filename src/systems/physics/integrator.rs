use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{IntegratorMode, OrientationConfig, PhysicsConfig};
use crate::properties::{paths, PropertyStore};
use crate::utils::{is_finite_vector, GRAVITY, GROUND_CONTACT_EPSILON, MIN_INERTIA, MIN_MASS};

/// Horizontal speed below which ground friction is not applied (m/s).
const FRICTION_MIN_SPEED: f64 = 0.01;

/// Result of one integration step.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationOutcome {
    /// State written back to the store.
    Advanced,
    /// The step produced a non-finite state; nothing was written.
    Frozen,
}

/// Terminal pipeline stage: clears the accumulators before the subsystems run
/// and integrates them afterwards.
#[derive(Debug, Clone)]
pub struct PhysicsIntegrator {
    mode: IntegratorMode,
    physics: PhysicsConfig,
    control: OrientationConfig,
}

/// Kinematic state produced by one step, validated before write-back.
struct Step {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    acceleration: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
    angular_velocity: Vector3<f64>,
    angular_acceleration: Vector3<f64>,
    on_ground: bool,
}

impl PhysicsIntegrator {
    pub fn new(mode: IntegratorMode, physics: PhysicsConfig, control: Option<OrientationConfig>) -> Self {
        Self {
            mode,
            physics,
            control: control.unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> IntegratorMode {
        self.mode
    }

    /// Zeroes the force/torque accumulators and every force-breakdown property.
    pub fn clear_accumulators(&self, store: &mut PropertyStore) {
        store.write(paths::physics::FORCE, Vector3::zeros());
        store.write(paths::physics::TORQUE, Vector3::zeros());
        for prop in paths::forces::ALL {
            store.write(prop, Vector3::zeros());
        }
    }

    /// Integrates the accumulated force and torque over `dt`.
    pub fn integrate(&self, store: &mut PropertyStore, dt: f64) -> IntegrationOutcome {
        let step = self.step(store, dt);

        let finite = is_finite_vector(&step.position)
            && is_finite_vector(&step.velocity)
            && is_finite_vector(&step.angular_velocity)
            && step.orientation.coords.iter().all(|c| c.is_finite());
        if !finite {
            return IntegrationOutcome::Frozen;
        }

        store.write(paths::position::POSITION, step.position);
        store.write(paths::velocity::VELOCITY, step.velocity);
        store.write(paths::velocity::AIRSPEED, step.velocity.norm());
        store.write(paths::physics::ACCELERATION, step.acceleration);
        store.write(paths::orientation::ORIENTATION, step.orientation);
        store.write(paths::velocity::ANGULAR, step.angular_velocity);
        store.write(paths::physics::ANGULAR_ACCELERATION, step.angular_acceleration);
        store.write(paths::physics::ON_GROUND, step.on_ground);

        IntegrationOutcome::Advanced
    }

    fn step(&self, store: &PropertyStore, dt: f64) -> Step {
        let p = &self.physics;
        let mass = store.read(paths::physics::MASS, p.mass).max(MIN_MASS);
        let mut force = store.read(paths::physics::FORCE, Vector3::zeros());
        let mut position = store.read(paths::position::POSITION, Vector3::zeros());
        let mut velocity = store.read(paths::velocity::VELOCITY, Vector3::zeros());

        let on_ground = position.y <= p.min_altitude + GROUND_CONTACT_EPSILON;
        let horizontal = Vector3::new(velocity.x, 0.0, velocity.z);
        if on_ground {
            force += self.ground_friction(&horizontal, mass);
        }

        let acceleration = force / mass;
        velocity += acceleration * dt;

        // Friction can stop the aircraft but never push it backwards.
        if on_ground && Vector3::new(velocity.x, 0.0, velocity.z).dot(&horizontal) < 0.0 {
            velocity.x = 0.0;
            velocity.z = 0.0;
        }
        velocity = self.limit_velocity(velocity);

        position += velocity * dt;
        if position.y < p.min_altitude {
            position.y = p.min_altitude;
            velocity.y = velocity.y.max(0.0);
        }

        let orientation = store.read(paths::orientation::ORIENTATION, UnitQuaternion::identity());
        let angular_velocity = store.read(paths::velocity::ANGULAR, Vector3::zeros());

        let (orientation, angular_velocity, angular_acceleration) = match self.mode {
            IntegratorMode::RigidBody => {
                self.rotate_rigid_body(store, orientation, angular_velocity, dt)
            }
            IntegratorMode::Direct => self.rotate_direct(store, orientation, dt),
        };

        Step {
            position,
            velocity,
            acceleration,
            orientation,
            angular_velocity,
            angular_acceleration,
            on_ground,
        }
    }

    /// `mu * m * g` opposing horizontal motion.
    fn ground_friction(&self, horizontal: &Vector3<f64>, mass: f64) -> Vector3<f64> {
        let speed = horizontal.norm();
        if speed <= FRICTION_MIN_SPEED {
            return Vector3::zeros();
        }

        -horizontal / speed * (self.physics.ground_friction * mass * GRAVITY)
    }

    fn limit_velocity(&self, mut velocity: Vector3<f64>) -> Vector3<f64> {
        velocity.y = velocity.y.min(self.physics.max_climb_rate);
        let speed = velocity.norm();
        if speed > self.physics.max_speed {
            velocity *= self.physics.max_speed / speed;
        }
        velocity
    }

    /// Torque → body rates → attitude, renormalized every step.
    fn rotate_rigid_body(
        &self,
        store: &PropertyStore,
        orientation: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
        dt: f64,
    ) -> (UnitQuaternion<f64>, Vector3<f64>, Vector3<f64>) {
        let torque = store.read(paths::physics::TORQUE, Vector3::zeros());
        let inertia = store
            .read(paths::physics::INERTIA, self.physics.inertia)
            .map(|i| i.max(MIN_INERTIA));

        let angular_acceleration = torque.component_div(&inertia);
        let mut omega = angular_velocity + angular_acceleration * dt;
        let rate = omega.norm();
        if rate > self.physics.max_angular_velocity {
            omega *= self.physics.max_angular_velocity / rate;
        }

        let mut next = orientation * UnitQuaternion::from_scaled_axis(omega * dt);
        next.renormalize();

        (next, omega, angular_acceleration)
    }

    /// Attitude straight from control deflection × configured rate: pitch
    /// about the body right axis, roll about the nose, yaw about world up.
    fn rotate_direct(
        &self,
        store: &PropertyStore,
        orientation: UnitQuaternion<f64>,
        dt: f64,
    ) -> (UnitQuaternion<f64>, Vector3<f64>, Vector3<f64>) {
        let c = &self.control;
        let pitch = store.read(paths::input::PITCH, 0.0).clamp(-1.0, 1.0);
        let yaw = store.read(paths::input::YAW, 0.0).clamp(-1.0, 1.0);
        let roll = store.read(paths::input::ROLL, 0.0).clamp(-1.0, 1.0);

        let rates = Vector3::new(-pitch * c.pitch_rate, yaw * c.yaw_rate, -roll * c.roll_rate);

        let pitch_step = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), rates.x * dt);
        let roll_step = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), rates.z * dt);
        let yaw_step = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), rates.y * dt);

        let mut next = yaw_step * orientation * pitch_step * roll_step;
        next.renormalize();

        (next, rates, Vector3::zeros())
    }
}
