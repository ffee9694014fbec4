mod integrator;

pub use integrator::{IntegrationOutcome, PhysicsIntegrator};
