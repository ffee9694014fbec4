use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::env;
use std::path::PathBuf;

use flightsim::components::{AircraftInstance, AircraftPreset, AircraftSource, ControlInput};
use flightsim::resources::{FixedStepClock, SimulationSettings};

const FRAME_DT: f64 = 1.0 / 60.0;

/// Usage: flightsim_headless [cessna172|trainer|<config.yaml|json>] [seconds] [throttle]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Building the log plugin installs the global tracing subscriber.
    App::new().add_plugins(LogPlugin::default());

    let args: Vec<String> = env::args().skip(1).collect();
    let source = match args.first().map(String::as_str) {
        None | Some("cessna172") => AircraftSource::Preset(AircraftPreset::Cessna172),
        Some("trainer") => AircraftSource::Preset(AircraftPreset::Trainer),
        Some(path) => AircraftSource::File(PathBuf::from(path)),
    };
    let duration: f64 = match args.get(1) {
        Some(s) => s.parse()?,
        None => 60.0,
    };
    let throttle: f64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 0.75,
    };

    let mut aircraft = AircraftInstance::from_source(source)?;
    let controls = ControlInput::try_new(0.0, 0.0, 0.0, throttle)?;
    let mut clock = FixedStepClock::from_settings(&SimulationSettings::default());
    let dt = clock.timestep();

    let mut next_report = 0.0;
    while clock.elapsed() < duration {
        for _ in 0..clock.advance(FRAME_DT) {
            aircraft.update(dt, &controls);
        }

        if clock.elapsed() >= next_report {
            let t = aircraft.telemetry();
            info!(
                "t={:>6.1}s alt={:>7.0}ft kias={:>5.1} vs={:>6.1}fps pitch={:>5.1} roll={:>5.1} hdg={:>5.1} n1={:>5.1} fuel={:>6.1}kg",
                clock.elapsed(),
                t.altitude_ft,
                t.airspeed_kt,
                t.vertical_speed_fps,
                t.pitch_deg,
                t.roll_deg,
                t.heading_deg,
                t.n1,
                t.fuel_quantity,
            );
            next_report += 1.0;
        }
    }

    info!(
        "Finished {} ticks for '{}'",
        aircraft.ticks(),
        aircraft.name()
    );
    Ok(())
}
