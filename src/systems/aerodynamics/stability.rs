use nalgebra::Vector3;

use super::AerodynamicSampler;
use crate::components::StabilityConfig;
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::AIRSPEED_EPSILON;

/// Weathercock and self-righting moments with rate damping.
///
/// Angles are expressed as rotations about the body torque axes: pitch uses
/// `-alpha`, yaw and roll use `-beta`, so `-k * angle` always restores.
#[derive(Debug, Clone)]
pub struct StabilitySubsystem {
    config: StabilityConfig,
}

impl StabilitySubsystem {
    pub fn new(config: StabilityConfig) -> Self {
        Self { config }
    }

    /// Restoring torque (body frame) for the given air data and body rates.
    pub fn restoring_torque(
        &self,
        alpha: f64,
        beta: f64,
        airspeed: f64,
        dynamic_pressure: f64,
        angular_velocity: &Vector3<f64>,
    ) -> Vector3<f64> {
        let c = &self.config;
        let limit = c.max_angle;
        let rate_scale =
            c.reference_length / (2.0 * airspeed.max(c.min_airspeed).max(AIRSPEED_EPSILON));
        let scale = dynamic_pressure * c.reference_area * c.reference_length * c.moment_scale;

        let pitch_angle = (-alpha).clamp(-limit, limit);
        let yaw_angle = (-beta).clamp(-limit, limit);
        let roll_angle = (-beta).clamp(-limit, limit);

        Vector3::new(
            -c.pitch_stability * pitch_angle - c.pitch_damping * angular_velocity.x * rate_scale,
            -c.yaw_stability * yaw_angle - c.yaw_damping * angular_velocity.y * rate_scale,
            -c.roll_stability * roll_angle - c.roll_damping * angular_velocity.z * rate_scale,
        ) * scale
    }
}

impl FlightSubsystem for StabilitySubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Stability
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let air = AerodynamicSampler::sample(store);
        if air.airspeed < self.config.min_airspeed
            || air.forward_speed.abs() < self.config.min_airspeed
        {
            return;
        }

        let angular_velocity = store.read(paths::velocity::ANGULAR, Vector3::zeros());
        let torque = self.restoring_torque(
            air.alpha,
            air.beta,
            air.airspeed,
            air.dynamic_pressure,
            &angular_velocity,
        );

        store.write(paths::forces::STABILITY_TORQUE, torque);
        store.accumulate(paths::physics::TORQUE, torque);
    }
}
