use std::f64::consts::FRAC_PI_2;

use super::AerodynamicSampler;
use crate::components::{LiftConfig, LiftModel, StallProfile};
use crate::properties::{paths, PropertyStore};
use crate::systems::{FlightSubsystem, SubsystemKind};
use crate::utils::lerp;

/// Below this airspeed lift is not computed at all (m/s).
const MIN_LIFT_AIRSPEED: f64 = 1.0;

/// Lift along the body up axis from the forward-airflow dynamic pressure.
#[derive(Debug, Clone)]
pub struct LiftSubsystem {
    config: LiftConfig,
    profile: StallProfile,
}

impl LiftSubsystem {
    pub fn new(config: LiftConfig) -> Self {
        let profile = config.stall_profile();
        Self { config, profile }
    }

    pub fn stall_profile(&self) -> &StallProfile {
        &self.profile
    }

    /// Lift coefficient at angle of attack `alpha` (rad).
    pub fn lift_coefficient(&self, alpha: f64) -> f64 {
        match self.config.model {
            LiftModel::Constant => self.config.coefficient,
            LiftModel::Curve => self.curve(alpha),
        }
    }

    fn curve(&self, alpha: f64) -> f64 {
        let c = &self.config;
        let p = &self.profile;
        let linear = |a: f64| (c.cl0 + c.cl_alpha * a).clamp(c.cl_min, c.cl_max);

        if alpha > p.stall_alpha {
            post_stall(
                alpha,
                p.stall_alpha,
                p.post_stall_alpha,
                linear(p.stall_alpha),
                c.post_stall_cl_ratio,
            )
        } else if alpha < p.negative_stall_alpha {
            -post_stall(
                -alpha,
                -p.negative_stall_alpha,
                -p.negative_post_stall_alpha,
                -linear(p.negative_stall_alpha),
                c.post_stall_cl_ratio,
            )
        } else {
            linear(alpha)
        }
    }
}

/// Falloff on the positive side; the negative side is mirrored by the caller.
///
/// Linear from `peak` at stall to `peak * ratio` at post-stall, then tapering
/// to zero at 90°.
fn post_stall(alpha: f64, stall: f64, post: f64, peak: f64, ratio: f64) -> f64 {
    let stalled = peak * ratio;
    if alpha <= post {
        return lerp(peak, stalled, (alpha - stall) / (post - stall));
    }

    let span = FRAC_PI_2 - post;
    if span <= f64::EPSILON {
        return stalled;
    }
    stalled * ((FRAC_PI_2 - alpha) / span).clamp(0.0, 1.0)
}

impl FlightSubsystem for LiftSubsystem {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Lift
    }

    fn update(&mut self, store: &mut PropertyStore, _dt: f64) {
        let air = AerodynamicSampler::sample(store);

        if air.airspeed < MIN_LIFT_AIRSPEED || air.forward_speed < self.config.min_forward_speed {
            store.write(paths::aero::CL, 0.0);
            return;
        }

        let cl = self.lift_coefficient(air.alpha);
        let lift = air.up * (cl * air.forward_dynamic_pressure() * self.config.wing_area);

        store.write(paths::aero::CL, cl);
        store.write(paths::forces::LIFT, lift);
        store.accumulate(paths::physics::FORCE, lift);
    }
}
