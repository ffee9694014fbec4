use bevy::prelude::*;
use std::time::Duration;

use crate::resources::SimulationSettings;
use crate::systems::{flight_physics_system, sync_transform_system, terrain_contact_system};

/// Flight simulation stages within one fixed tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Dynamics,
    Contact,
}

/// Runs aircraft dynamics on bevy's fixed clock and interpolates poses for
/// rendering.
#[derive(Default)]
pub struct FlightPhysicsPlugin {
    pub settings: SimulationSettings,
}

impl FlightPhysicsPlugin {
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    fn limit_substeps(settings: Res<SimulationSettings>, mut time: ResMut<Time<Virtual>>) {
        let max_delta = settings.timestep * settings.max_substeps as f64;
        time.set_max_delta(Duration::from_secs_f64(max_delta));
    }
}

impl Plugin for FlightPhysicsPlugin {
    fn build(&self, app: &mut App) {
        let settings = match self.settings.clone().validated() {
            Ok(settings) => settings,
            Err(e) => {
                error!("Invalid simulation settings: {}. Using defaults", e);
                SimulationSettings::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_seconds(settings.timestep))
            .insert_resource(settings);

        app.configure_sets(FixedUpdate, (FlightSet::Dynamics, FlightSet::Contact).chain());

        app.add_systems(Startup, Self::limit_substeps)
            .add_systems(
                FixedUpdate,
                (
                    flight_physics_system.in_set(FlightSet::Dynamics),
                    terrain_contact_system.in_set(FlightSet::Contact),
                ),
            )
            .add_systems(Update, sync_transform_system);
    }
}
