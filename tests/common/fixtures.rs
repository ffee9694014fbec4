use flightsim::components::{
    AircraftConfig, AircraftInstance, ControlInput, EngineConfig, FuelConfig, SpawnConfig,
};
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const TEST_DT: f64 = 1.0 / 120.0;

/// Gravity only: no engine, no aerodynamics, no control torques.
pub fn ballistic_config() -> AircraftConfig {
    let mut config = AircraftConfig::cessna_172();
    config.name = "ballistic".to_string();
    config.engine = None;
    config.fuel = None;
    config.thrust = None;
    config.lift = None;
    config.drag = None;
    config.stability = None;
    config.orientation = None;
    config.spawn = SpawnConfig {
        position: Vector3::new(0.0, 1000.0, 0.0),
        airspeed: 50.0,
        heading_deg: 0.0,
    };
    config.physics.max_speed = 1000.0;
    config.physics.max_climb_rate = 1000.0;
    config
}

/// Cessna preset spawned just above the ground.
pub fn low_altitude_config(altitude: f64) -> AircraftConfig {
    let mut config = AircraftConfig::cessna_172();
    config.spawn.position = Vector3::new(0.0, altitude, 0.0);
    config
}

/// Cessna preset with a nearly empty tank.
pub fn short_fuel_config(initial: f64) -> AircraftConfig {
    let mut config = AircraftConfig::cessna_172();
    config.fuel = Some(FuelConfig {
        capacity: 150.0,
        initial,
    });
    config.engine = Some(EngineConfig {
        fuel_flow_idle: 0.01,
        fuel_flow_max: 0.05,
        ..config.engine.clone().unwrap_or_default()
    });
    config
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Full-range control input drawn from `rng`.
pub fn random_controls(rng: &mut ChaCha8Rng) -> ControlInput {
    ControlInput::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(0.0..=1.0),
    )
}

/// Runs `ticks` fixed steps with constant controls.
pub fn run_ticks(aircraft: &mut AircraftInstance, ticks: usize, controls: &ControlInput) {
    for _ in 0..ticks {
        aircraft.update(TEST_DT, controls);
    }
}
