use serde::{Deserialize, Serialize};

use super::AircraftState;
use crate::properties::{paths, PropertyStore};
use crate::systems::aerodynamics::AerodynamicSampler;
use crate::utils::{attitude_angles, rad_to_deg, METERS_TO_FEET, MPS_TO_KNOTS};

/// Instrument readout for HUDs, logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub altitude_ft: f64,
    pub airspeed_kt: f64,
    pub vertical_speed_fps: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub heading_deg: f64,
    pub alpha_deg: f64,
    pub n1: f64,
    pub fuel_quantity: f64,
    pub thrust: f64,
    pub engine_running: bool,
    pub on_ground: bool,
}

impl FlightTelemetry {
    /// Writes the instrument properties for `state` into `store`.
    pub fn publish(store: &mut PropertyStore, state: &AircraftState) {
        let (pitch, roll, heading) = attitude_angles(&state.orientation);
        let air = AerodynamicSampler::sample(store);

        store.write(paths::aero::ALPHA, air.alpha);
        store.write(paths::aero::BETA, air.beta);
        store.write(paths::aero::DYNAMIC_PRESSURE, air.dynamic_pressure);

        store.write(paths::telemetry::ALTITUDE_FT, state.position.y * METERS_TO_FEET);
        store.write(paths::telemetry::AIRSPEED_KT, state.airspeed * MPS_TO_KNOTS);
        store.write(
            paths::telemetry::VERTICAL_SPEED_FPS,
            state.velocity.y * METERS_TO_FEET,
        );
        store.write(paths::telemetry::PITCH_DEG, rad_to_deg(pitch));
        store.write(paths::telemetry::ROLL_DEG, rad_to_deg(roll));
        store.write(paths::telemetry::HEADING_DEG, rad_to_deg(heading));
    }

    /// Snapshot of the published instruments. Absent subsystems read as zero.
    pub fn from_store(store: &PropertyStore) -> Self {
        Self {
            altitude_ft: store.read(paths::telemetry::ALTITUDE_FT, 0.0),
            airspeed_kt: store.read(paths::telemetry::AIRSPEED_KT, 0.0),
            vertical_speed_fps: store.read(paths::telemetry::VERTICAL_SPEED_FPS, 0.0),
            pitch_deg: store.read(paths::telemetry::PITCH_DEG, 0.0),
            roll_deg: store.read(paths::telemetry::ROLL_DEG, 0.0),
            heading_deg: store.read(paths::telemetry::HEADING_DEG, 0.0),
            alpha_deg: rad_to_deg(store.read(paths::aero::ALPHA, 0.0)),
            n1: store.read(paths::engine::N1, 0.0),
            fuel_quantity: store.read(paths::fuel::QUANTITY, 0.0),
            thrust: store.read(paths::engine::THRUST, 0.0),
            engine_running: store.read(paths::engine::RUNNING, false),
            on_ground: store.read(paths::physics::ON_GROUND, false),
        }
    }
}
