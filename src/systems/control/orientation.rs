use nalgebra::Vector3;

use crate::components::OrientationConfig;
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};

/// Pilot control torque plus airspeed-scaled rate damping.
///
/// Sign convention (body torque axes, x pitch / y yaw / z roll):
/// +pitch input is nose up (-X), +yaw input is nose right (+Y),
/// +roll input is right wing down (-Z).
#[derive(Debug, Clone)]
pub struct OrientationSubsystem {
    config: OrientationConfig,
}

impl OrientationSubsystem {
    pub fn new(config: OrientationConfig) -> Self {
        Self { config }
    }

    /// Control effectiveness at `airspeed`, clamped to the configured band.
    pub fn authority(&self, airspeed: f64) -> f64 {
        (airspeed / self.config.control_ref_speed)
            .clamp(self.config.min_control_scale, self.config.max_control_scale)
    }

    pub fn control_torque(
        &self,
        pitch: f64,
        yaw: f64,
        roll: f64,
        airspeed: f64,
        angular_velocity: &Vector3<f64>,
    ) -> Vector3<f64> {
        let c = &self.config;
        let authority = self.authority(airspeed);

        let command = Vector3::new(
            -pitch.clamp(-1.0, 1.0) * c.pitch_rate,
            yaw.clamp(-1.0, 1.0) * c.yaw_rate,
            -roll.clamp(-1.0, 1.0) * c.roll_rate,
        ) * (authority * c.torque_multiplier);

        let damping = -angular_velocity * (c.damping_factor * authority);

        command + damping
    }
}

impl FlightSubsystem for OrientationSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Orientation
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let torque = self.control_torque(
            store.read(paths::input::PITCH, 0.0),
            store.read(paths::input::YAW, 0.0),
            store.read(paths::input::ROLL, 0.0),
            store.read(paths::velocity::AIRSPEED, 0.0),
            &store.read(paths::velocity::ANGULAR, Vector3::zeros()),
        );

        store.write(paths::forces::CONTROL_TORQUE, torque);
        store.accumulate(paths::physics::TORQUE, torque);
    }
}
