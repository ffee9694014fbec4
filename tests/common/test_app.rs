use bevy::prelude::*;
use flightsim::{
    components::AircraftSource,
    plugins::{AircraftPlugin, FlightPhysicsPlugin},
    resources::{SimulationSettings, TerrainResource},
};

/// Builder for a headless test application.
pub struct TestAppBuilder {
    sources: Vec<AircraftSource>,
    settings: SimulationSettings,
    terrain: Option<f64>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            settings: SimulationSettings::default(),
            terrain: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aircraft(mut self, source: AircraftSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_settings(mut self, settings: SimulationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_flat_terrain(mut self, height: f64) -> Self {
        self.terrain = Some(height);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPhysicsPlugin::new(self.settings))
            .add_plugins(AircraftPlugin::new(self.sources));

        if let Some(height) = self.terrain {
            app.insert_resource(TerrainResource::flat(height));
        }

        // Runs startup and spawns the aircraft.
        app.update();

        TestApp { app }
    }
}

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs `ticks` fixed steps directly, independent of wall time.
    pub fn run_fixed_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
