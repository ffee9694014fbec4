use nalgebra::Vector3;

use super::AerodynamicSampler;
use crate::components::{DragConfig, StallProfile};
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::AIRSPEED_EPSILON;

/// Parasitic, induced and stall drag opposing the relative airflow.
#[derive(Debug, Clone)]
pub struct DragSubsystem {
    config: DragConfig,
    /// Present when a lift curve is configured; shares its stall thresholds.
    stall: Option<StallProfile>,
}

impl DragSubsystem {
    pub fn new(config: DragConfig, stall: Option<StallProfile>) -> Self {
        Self { config, stall }
    }

    /// `cd0 + k * cl² + stall_drag * stall_fraction(alpha)`.
    pub fn drag_coefficient(&self, cl: f64, alpha: f64) -> f64 {
        let stall_fraction = self
            .stall
            .map_or(0.0, |profile| profile.stall_fraction(alpha));

        self.config.cd0
            + self.config.induced_drag_factor * cl * cl
            + self.config.stall_drag * stall_fraction
    }
}

impl FlightSubsystem for DragSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Drag
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let air = AerodynamicSampler::sample(store);
        if air.airspeed < AIRSPEED_EPSILON {
            store.write(paths::aero::CD, self.config.cd0);
            return;
        }

        let cl = store.read(paths::aero::CL, 0.0);
        let cd = self.drag_coefficient(cl, air.alpha);
        let drag: Vector3<f64> =
            air.airflow_direction() * (cd * air.dynamic_pressure * self.config.frontal_area);

        store.write(paths::aero::CD, cd);
        store.write(paths::forces::DRAG, drag);
        store.accumulate(paths::physics::FORCE, drag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_drag_opposes_velocity() {
        let mut drag = DragSubsystem::new(DragConfig::default(), None);
        let mut store = PropertyStore::new();
        store.write(paths::velocity::VELOCITY, Vector3::new(30.0, -10.0, 40.0));

        drag.update(&mut store, 1.0 / 120.0);

        let force = store.read(paths::physics::FORCE, Vector3::zeros());
        let velocity = Vector3::new(30.0, -10.0, 40.0);
        assert_relative_eq!(force.normalize().dot(&velocity.normalize()), -1.0, epsilon = 1e-12);

        let expected = 0.03 * 0.5 * 1.225 * velocity.norm_squared() * 16.2;
        assert_relative_eq!(force.norm(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_induced_drag_uses_published_cl() {
        let drag = DragSubsystem::new(
            DragConfig {
                cd0: 0.02,
                induced_drag_factor: 0.1,
                ..Default::default()
            },
            None,
        );
        assert_relative_eq!(drag.drag_coefficient(0.5, 0.0), 0.02 + 0.1 * 0.25);
    }

    #[test]
    fn test_stall_drag_shares_lift_thresholds() {
        let profile = StallProfile {
            stall_alpha: 0.2,
            post_stall_alpha: 0.3,
            negative_stall_alpha: -0.2,
            negative_post_stall_alpha: -0.3,
        };
        let drag = DragSubsystem::new(DragConfig::default(), Some(profile));

        assert_relative_eq!(drag.drag_coefficient(0.0, 0.1), 0.03);
        assert_relative_eq!(drag.drag_coefficient(0.0, 0.25), 0.03 + 0.15, epsilon = 1e-12);
        assert_relative_eq!(drag.drag_coefficient(0.0, 0.5), 0.03 + 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_no_drag_without_airflow() {
        let mut drag = DragSubsystem::new(DragConfig::default(), None);
        let mut store = PropertyStore::new();

        drag.update(&mut store, 1.0 / 120.0);
        assert!(!store.has(paths::physics::FORCE));
    }
}
