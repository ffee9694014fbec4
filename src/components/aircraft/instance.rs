use bevy::prelude::*;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};

use super::{AircraftState, ControlInput, FlightTelemetry, Pose};
use crate::components::{AircraftConfig, AircraftSource};
use crate::properties::{paths, PropertyStore};
use crate::resources::TerrainHeightProvider;
use crate::systems::{IntegrationOutcome, PhysicsIntegrator, Subsystem, SubsystemKind};
use crate::utils::{is_finite_vector, SimError};

/// One simulated aircraft: its property store, its ordered subsystems, the
/// integrator, and the previous/current state pair used for interpolation.
///
/// The store is authoritative during a tick; `current` and `previous` are
/// snapshots taken at tick boundaries.
#[derive(Component, Debug)]
pub struct AircraftInstance {
    config: AircraftConfig,
    store: PropertyStore,
    subsystems: Vec<Subsystem>,
    integrator: PhysicsIntegrator,
    current: AircraftState,
    previous: AircraftState,
    ticks: u64,
}

impl AircraftInstance {
    /// Builds an aircraft, clamping out-of-range configuration values first.
    pub fn new(config: AircraftConfig) -> Self {
        let config = config.validated();
        let subsystems = config
            .enabled_subsystems()
            .into_iter()
            .filter_map(|kind| Subsystem::build(kind, &config))
            .collect();
        let integrator = PhysicsIntegrator::new(
            config.integrator,
            config.physics.clone(),
            config.orientation.clone(),
        );
        let state = AircraftState::from_spawn(&config.spawn);

        let mut instance = Self {
            config,
            store: PropertyStore::new(),
            subsystems,
            integrator,
            current: state,
            previous: state,
            ticks: 0,
        };
        instance.initialize();
        instance
    }

    /// Loads, validates and builds an aircraft. Fails instead of spawning a
    /// half-configured aircraft.
    pub fn from_source(source: AircraftSource) -> Result<Self, SimError> {
        let config = AircraftConfig::new(source)?;

        let spawn = &config.spawn;
        if !is_finite_vector(&spawn.position) || !spawn.heading_deg.is_finite() {
            return Err(SimError::SpawnError(format!(
                "{}: non-finite spawn state",
                config.name
            )));
        }

        let instance = Self::new(config);
        info!(
            "Spawned aircraft '{}' with subsystems [{}]",
            instance.name(),
            instance
                .subsystem_kinds()
                .iter()
                .map(SubsystemKind::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(instance)
    }

    fn initialize(&mut self) {
        let store = &mut self.store;
        store.write(paths::physics::MASS, self.config.physics.mass);
        store.write(paths::physics::INERTIA, self.config.physics.inertia);
        store.write(paths::physics::ON_GROUND, false);
        self.current.write_to(store);
        ControlInput::default().write_to(store);
        self.integrator.clear_accumulators(store);

        for subsystem in &mut self.subsystems {
            subsystem.initialize(store);
        }

        FlightTelemetry::publish(&mut self.store, &self.current);
    }

    /// Advances the aircraft by one fixed tick.
    ///
    /// Order: snapshot previous, write controls, clear accumulators, run every
    /// subsystem, integrate. A tick whose integration is non-finite is
    /// discarded and the aircraft holds its previous state.
    pub fn update(&mut self, dt: f64, controls: &ControlInput) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }

        self.previous = self.current;
        controls.clamped().write_to(&mut self.store);
        self.integrator.clear_accumulators(&mut self.store);

        for subsystem in &mut self.subsystems {
            subsystem.update(&mut self.store, dt);
        }

        match self.integrator.integrate(&mut self.store, dt) {
            IntegrationOutcome::Advanced => {
                self.current = AircraftState::read_from(&self.store);
            }
            IntegrationOutcome::Frozen => {
                warn!(
                    "{}: non-finite state at tick {}, holding previous state",
                    self.config.name, self.ticks
                );
                self.current = self.previous;
                self.current.write_to(&mut self.store);
            }
        }

        self.ticks += 1;
        FlightTelemetry::publish(&mut self.store, &self.current);
    }

    /// Clamps the aircraft onto `terrain` after a tick. Returns true on contact.
    pub fn apply_terrain_contact(&mut self, terrain: &dyn TerrainHeightProvider) -> bool {
        let position = self.current.position;
        let Some(ground) = terrain.height_at(position.x, position.z) else {
            return false;
        };
        if position.y >= ground {
            return false;
        }

        for state in [&mut self.current, &mut self.previous] {
            if state.position.y < ground {
                state.position.y = ground;
                state.velocity.y = state.velocity.y.max(0.0);
                state.airspeed = state.velocity.norm();
            }
        }

        self.current.write_to(&mut self.store);
        self.store.write(paths::physics::ON_GROUND, true);
        true
    }

    /// Replaces both state snapshots, e.g. for a reset.
    pub fn set_state(&mut self, state: AircraftState) {
        self.current = state;
        self.previous = state;
        self.current.write_to(&mut self.store);
    }

    /// Interpolated pose; never mutates simulation state.
    pub fn render_pose(&self, alpha: f64) -> Pose {
        Pose::interpolate(&self.previous, &self.current, alpha)
    }

    /// `view_projection * model` for the interpolated pose.
    pub fn render_matrix(&self, view_projection: &Matrix4<f64>, alpha: f64) -> Matrix4<f64> {
        view_projection * self.render_pose(alpha).to_matrix()
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        FlightTelemetry::from_store(&self.store)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Mutable store access for instruments and tests. Writes to state
    /// properties take effect on the next tick.
    pub fn store_mut(&mut self) -> &mut PropertyStore {
        &mut self.store
    }

    pub fn subsystem_kinds(&self) -> Vec<SubsystemKind> {
        self.subsystems.iter().map(Subsystem::kind).collect()
    }

    pub fn current_state(&self) -> &AircraftState {
        &self.current
    }

    pub fn previous_state(&self) -> &AircraftState {
        &self.previous
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn position(&self) -> Vector3<f64> {
        self.current.position
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.current.orientation
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.current.velocity
    }

    pub fn airspeed(&self) -> f64 {
        self.current.airspeed
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.current.forward()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.current.up()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.current.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AircraftPreset, IntegratorMode};
    use crate::resources::FlatTerrain;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 120.0;

    #[test]
    fn test_spawn_seeds_store() {
        let aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        let store = aircraft.store();

        assert_eq!(store.read(paths::position::POSITION, Vector3::zeros()).y, 500.0);
        assert_relative_eq!(store.read(paths::velocity::AIRSPEED, 0.0), 55.0);
        assert_eq!(store.read(paths::engine::N1, 0.0), 20.0);
        assert_eq!(store.read(paths::fuel::QUANTITY, 0.0), 120.0);
        assert!(store.read(paths::atmosphere::DENSITY, 0.0) < 1.225);
        assert_eq!(aircraft.current_state(), aircraft.previous_state());
    }

    #[test]
    fn test_update_shifts_previous() {
        let mut aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        let before = *aircraft.current_state();

        aircraft.update(DT, &ControlInput::new(0.0, 0.0, 0.0, 0.5));

        assert_eq!(*aircraft.previous_state(), before);
        assert_ne!(*aircraft.current_state(), before);
        assert_eq!(aircraft.ticks(), 1);
    }

    #[test]
    fn test_invalid_dt_is_ignored() {
        let mut aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        let before = *aircraft.current_state();

        aircraft.update(0.0, &ControlInput::default());
        aircraft.update(f64::NAN, &ControlInput::default());

        assert_eq!(*aircraft.current_state(), before);
        assert_eq!(aircraft.ticks(), 0);
    }

    #[test]
    fn test_non_finite_tick_freezes() {
        let mut aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        aircraft.update(DT, &ControlInput::default());
        let before = *aircraft.current_state();

        aircraft
            .store_mut()
            .write(paths::velocity::VELOCITY, Vector3::new(f64::NAN, 0.0, 0.0));
        aircraft.update(DT, &ControlInput::default());

        assert_eq!(*aircraft.current_state(), before);
        assert_eq!(
            aircraft.store().read(paths::position::POSITION, Vector3::zeros()),
            before.position
        );
    }

    #[test]
    fn test_terrain_contact_clamps_both_states() {
        let mut aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        let mut state = *aircraft.current_state();
        state.position.y = 10.0;
        state.velocity.y = -5.0;
        aircraft.set_state(state);

        assert!(aircraft.apply_terrain_contact(&FlatTerrain::new(20.0)));

        assert_eq!(aircraft.position().y, 20.0);
        assert_eq!(aircraft.velocity().y, 0.0);
        assert_eq!(aircraft.previous_state().position.y, 20.0);
        assert!(aircraft.store().read(paths::physics::ON_GROUND, false));

        assert!(!aircraft.apply_terrain_contact(&FlatTerrain::new(0.0)));
    }

    #[test]
    fn test_direct_integrator_build() {
        let aircraft = AircraftInstance::from_source(AircraftSource::Preset(AircraftPreset::Trainer))
            .unwrap();

        assert_eq!(aircraft.config().integrator, IntegratorMode::Direct);
        assert!(!aircraft.subsystem_kinds().contains(&SubsystemKind::Orientation));
    }

    #[test]
    fn test_non_finite_spawn_is_rejected() {
        let mut config = AircraftConfig::cessna_172();
        config.spawn.position.x = f64::INFINITY;

        let result = AircraftInstance::from_source(AircraftSource::Inline(Box::new(config)));
        assert!(matches!(result, Err(SimError::SpawnError(_))));
    }

    #[test]
    fn test_unvalidated_config_is_clamped_on_build() {
        let mut config = AircraftConfig::cessna_172();
        config.spawn.airspeed = 0.0;
        if let Some(orientation) = config.orientation.as_mut() {
            orientation.control_ref_speed = 0.0;
        }
        if let Some(lift) = config.lift.as_mut() {
            lift.post_stall_margin = 0.0;
        }

        let mut aircraft = AircraftInstance::new(config);
        for _ in 0..120 {
            aircraft.update(DT, &ControlInput::default());
        }

        let torque = aircraft
            .store()
            .read(paths::forces::CONTROL_TORQUE, Vector3::zeros());
        assert!(torque.iter().all(|t| t.is_finite()));
        assert!(aircraft.position().y < 500.0);
        assert!(aircraft.velocity().y < 0.0);
        assert_eq!(aircraft.ticks(), 120);
    }

    #[test]
    fn test_render_matrix_translates() {
        let aircraft = AircraftInstance::new(AircraftConfig::cessna_172());
        let m = aircraft.render_matrix(&Matrix4::identity(), 1.0);
        assert_eq!(m[(1, 3)], 500.0);
    }
}
