use bevy::prelude::*;

use crate::components::{AircraftInstance, AircraftSource, ControlInput};

/// Spawns one aircraft entity per source at startup.
///
/// A source that fails to load or validate is logged and skipped.
pub struct AircraftPlugin {
    sources: Vec<AircraftSource>,
}

#[derive(Resource, Clone)]
struct PendingAircraft(Vec<AircraftSource>);

impl AircraftPlugin {
    pub fn new(sources: Vec<AircraftSource>) -> Self {
        Self { sources }
    }

    pub fn single(source: AircraftSource) -> Self {
        Self::new(vec![source])
    }

    fn spawn_aircraft(mut commands: Commands, pending: Res<PendingAircraft>) {
        for source in pending.0.iter().cloned() {
            match AircraftInstance::from_source(source) {
                Ok(instance) => {
                    let transform = instance.render_pose(1.0).to_transform();
                    let name = Name::new(instance.name().to_string());
                    commands.spawn((instance, ControlInput::default(), transform, name));
                }
                Err(e) => error!("Failed to spawn aircraft: {}", e),
            }
        }
        commands.remove_resource::<PendingAircraft>();
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PendingAircraft(self.sources.clone()))
            .add_systems(Startup, Self::spawn_aircraft);
    }
}
