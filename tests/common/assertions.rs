use approx::assert_relative_eq;
use flightsim::components::AircraftState;
use nalgebra::UnitQuaternion;

/// Every component of the state is finite.
#[track_caller]
pub fn assert_state_valid(state: &AircraftState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(
        state.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        state.angular_velocity
    );
    assert!(state.airspeed.is_finite(), "Airspeed is not finite");
    assert_unit_orientation(&state.orientation);
}

#[track_caller]
pub fn assert_unit_orientation(q: &UnitQuaternion<f64>) {
    assert_relative_eq!(q.quaternion().norm(), 1.0, epsilon = 1e-9);
}
