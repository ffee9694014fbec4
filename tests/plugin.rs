mod common;

use bevy::prelude::*;
use flightsim::{
    components::{AircraftInstance, AircraftPreset, AircraftSource, ControlInput},
    properties::paths,
    resources::SimulationSettings,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::time::Duration;

use crate::common::{assert_state_valid, TestAppBuilder};

#[test]
fn test_spawns_every_source() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Cessna172))
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Trainer))
        .build();

    let mut names: Vec<String> = app
        .query_all::<Name>()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    names.sort();

    assert_eq!(names, vec!["Cessna172".to_string(), "Trainer".to_string()]);
    assert_eq!(app.query_all::<AircraftInstance>().len(), 2);
}

#[test]
fn test_bad_source_spawns_nothing() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::File(PathBuf::from("does/not/exist.yaml")))
        .build();

    assert!(app.query_all::<AircraftInstance>().is_empty());
}

#[test]
fn test_fixed_ticks_advance_aircraft() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Cessna172))
        .build();
    let start = *app
        .query_single::<AircraftInstance>()
        .expect("aircraft")
        .current_state();
    let ticks_before = app.query_single::<AircraftInstance>().expect("aircraft").ticks();

    app.run_fixed_ticks(120);

    let aircraft = app.query_single::<AircraftInstance>().expect("aircraft");
    assert_eq!(aircraft.ticks(), ticks_before + 120);
    assert_ne!(aircraft.position(), start.position);
    assert_state_valid(aircraft.current_state());
}

#[test]
fn test_control_input_reaches_store() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Cessna172))
        .build();

    *app.query_single_mut::<ControlInput>().expect("controls") =
        ControlInput::new(0.0, 0.0, 0.0, 0.9);
    app.run_fixed_ticks(1);

    let aircraft = app.query_single::<AircraftInstance>().expect("aircraft");
    assert_eq!(aircraft.store().read(paths::input::THROTTLE, 0.0), 0.9);
}

#[test]
fn test_terrain_contact_after_tick() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Cessna172))
        .with_flat_terrain(600.0)
        .build();

    app.run_fixed_ticks(1);

    let aircraft = app.query_single::<AircraftInstance>().expect("aircraft");
    assert_eq!(aircraft.position().y, 600.0);
    assert!(aircraft.velocity().y >= 0.0);
    assert!(aircraft.store().read(paths::physics::ON_GROUND, false));
}

#[test]
fn test_transform_follows_interpolated_pose() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(AircraftSource::Preset(AircraftPreset::Cessna172))
        .build();

    app.run_fixed_ticks(10);
    app.run_frame();

    let (low, high) = {
        let aircraft = app.query_single::<AircraftInstance>().expect("aircraft");
        let a = aircraft.previous_state().position.z as f32;
        let b = aircraft.current_state().position.z as f32;
        (a.min(b), a.max(b))
    };
    let transform = app.query_single::<Transform>().expect("transform");
    assert!(transform.translation.z >= low - 1e-3 && transform.translation.z <= high + 1e-3);
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let app = TestAppBuilder::new()
        .with_settings(SimulationSettings {
            timestep: -1.0,
            max_substeps: 4,
        })
        .build();

    let settings = app.app.world().resource::<SimulationSettings>();
    assert_eq!(*settings, SimulationSettings::default());

    let fixed = app.app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep(), Duration::from_secs_f64(settings.timestep));
}
