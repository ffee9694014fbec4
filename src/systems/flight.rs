use bevy::prelude::*;

use crate::components::{AircraftInstance, ControlInput};
use crate::resources::TerrainResource;

/// Advances every aircraft by one fixed tick.
///
/// Aircraft share no state, so instances run in parallel; subsystems inside
/// one instance stay sequential.
pub fn flight_physics_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut AircraftInstance, &ControlInput)>,
) {
    let dt = time.timestep().as_secs_f64();

    query
        .par_iter_mut()
        .for_each(|(mut aircraft, controls)| aircraft.update(dt, controls));
}

/// Post-tick ground collision pass against the terrain resource, if any.
pub fn terrain_contact_system(
    terrain: Option<Res<TerrainResource>>,
    mut query: Query<&mut AircraftInstance>,
) {
    let Some(terrain) = terrain else {
        return;
    };

    for mut aircraft in &mut query {
        aircraft.apply_terrain_contact(terrain.0.as_ref());
    }
}

/// Writes the interpolated pose into each aircraft's `Transform`.
pub fn sync_transform_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(&AircraftInstance, &mut Transform)>,
) {
    let alpha = time.overstep_fraction_f64();

    for (aircraft, mut transform) in &mut query {
        *transform = aircraft.render_pose(alpha).to_transform();
    }
}
