use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{at_least, within};
use crate::utils::MIN_REFERENCE;

/// How the Lift subsystem derives its lift coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftModel {
    /// Fixed coefficient, independent of angle of attack.
    Constant,
    /// Linear lift slope up to stall with a post-stall falloff.
    #[default]
    Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    pub model: LiftModel,
    /// Lift coefficient used by the constant model.
    pub coefficient: f64,
    /// Lift coefficient at zero angle of attack.
    pub cl0: f64,
    /// Lift slope (1/rad).
    pub cl_alpha: f64,
    pub cl_max: f64,
    pub cl_min: f64,
    /// Positive stall angle (rad). Derived from the slope when absent.
    pub stall_alpha: Option<f64>,
    /// Angle where post-stall falloff ends (rad). Derived from `post_stall_margin` when absent.
    pub post_stall_alpha: Option<f64>,
    /// Minimum separation between stall and post-stall angles (rad).
    pub post_stall_margin: f64,
    /// Fraction of peak lift left once fully stalled.
    pub post_stall_cl_ratio: f64,
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Lift is skipped below this forward speed (m/s).
    pub min_forward_speed: f64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            model: LiftModel::Curve,
            coefficient: 0.4,
            cl0: 0.3,
            cl_alpha: 5.0,
            cl_max: 1.6,
            cl_min: -1.2,
            stall_alpha: None,
            post_stall_alpha: None,
            post_stall_margin: 0.1,
            post_stall_cl_ratio: 0.5,
            wing_area: 16.2,
            min_forward_speed: 0.1,
        }
    }
}

impl LiftConfig {
    pub fn validated(mut self) -> Self {
        self.cl_alpha = at_least("lift.cl_alpha", self.cl_alpha, 0.1);
        self.cl_max = at_least("lift.cl_max", self.cl_max, self.cl0 + 0.1);
        if !(self.cl_min <= self.cl0 - 0.1) {
            warn!(
                "lift.cl_min {} must sit below cl0 {}, clamping",
                self.cl_min, self.cl0
            );
            self.cl_min = self.cl0 - 0.1;
        }
        if let Some(stall) = self.stall_alpha {
            if !(stall > 0.0) {
                warn!("lift.stall_alpha {stall} is not positive, deriving from lift slope");
                self.stall_alpha = None;
            }
        }
        self.post_stall_margin = at_least("lift.post_stall_margin", self.post_stall_margin, 0.01);
        self.post_stall_cl_ratio =
            within("lift.post_stall_cl_ratio", self.post_stall_cl_ratio, 0.0, 1.0);
        self.wing_area = at_least("lift.wing_area", self.wing_area, MIN_REFERENCE);
        self.min_forward_speed = at_least("lift.min_forward_speed", self.min_forward_speed, 0.0);
        self
    }

    /// Stall thresholds shared by the lift curve and stall drag.
    pub fn stall_profile(&self) -> StallProfile {
        let stall = self
            .stall_alpha
            .unwrap_or((self.cl_max - self.cl0) / self.cl_alpha);
        let post = self
            .post_stall_alpha
            .unwrap_or(stall + self.post_stall_margin)
            .max(stall + self.post_stall_margin);

        let negative_stall = (self.cl_min - self.cl0) / self.cl_alpha;
        let negative_post = negative_stall - (post - stall);

        StallProfile {
            stall_alpha: stall,
            post_stall_alpha: post,
            negative_stall_alpha: negative_stall,
            negative_post_stall_alpha: negative_post,
        }
    }
}

/// Angle-of-attack thresholds for stall onset and full stall, both signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallProfile {
    pub stall_alpha: f64,
    pub post_stall_alpha: f64,
    pub negative_stall_alpha: f64,
    pub negative_post_stall_alpha: f64,
}

impl StallProfile {
    /// 0 inside the attached-flow region, ramping to 1 at the post-stall angle.
    pub fn stall_fraction(&self, alpha: f64) -> f64 {
        if alpha > self.stall_alpha {
            ((alpha - self.stall_alpha) / (self.post_stall_alpha - self.stall_alpha)).min(1.0)
        } else if alpha < self.negative_stall_alpha {
            ((self.negative_stall_alpha - alpha)
                / (self.negative_stall_alpha - self.negative_post_stall_alpha))
                .min(1.0)
        } else {
            0.0
        }
    }
}

/// Parasitic, induced and stall drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub cd0: f64,
    /// Induced drag factor `k` in `cd0 + k * cl^2`.
    pub induced_drag_factor: f64,
    /// Extra drag coefficient once fully stalled.
    pub stall_drag: f64,
    /// Reference area (m²).
    pub frontal_area: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            cd0: 0.03,
            induced_drag_factor: 0.05,
            stall_drag: 0.3,
            frontal_area: 16.2,
        }
    }
}

impl DragConfig {
    pub fn validated(mut self) -> Self {
        self.cd0 = at_least("drag.cd0", self.cd0, 0.0);
        self.induced_drag_factor = at_least("drag.induced_drag_factor", self.induced_drag_factor, 0.0);
        self.stall_drag = at_least("drag.stall_drag", self.stall_drag, 0.0);
        self.frontal_area = at_least("drag.frontal_area", self.frontal_area, MIN_REFERENCE);
        self
    }
}

/// Static stability and rate damping about the three torque axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    pub pitch_stability: f64,
    pub yaw_stability: f64,
    pub roll_stability: f64,
    pub pitch_damping: f64,
    pub yaw_damping: f64,
    pub roll_damping: f64,
    /// Reference area (m²).
    pub reference_area: f64,
    /// Reference length (m).
    pub reference_length: f64,
    pub moment_scale: f64,
    /// No restoring moment below this airspeed (m/s).
    pub min_airspeed: f64,
    /// Symmetric clamp on the angles fed to the restoring terms (rad).
    pub max_angle: f64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            pitch_stability: 1.0,
            yaw_stability: 0.5,
            roll_stability: 0.1,
            pitch_damping: 12.0,
            yaw_damping: 8.0,
            roll_damping: 6.0,
            reference_area: 16.2,
            reference_length: 1.5,
            moment_scale: 0.2,
            min_airspeed: 5.0,
            max_angle: 0.5,
        }
    }
}

impl StabilityConfig {
    pub fn validated(mut self) -> Self {
        self.reference_area = at_least("stability.reference_area", self.reference_area, MIN_REFERENCE);
        self.reference_length =
            at_least("stability.reference_length", self.reference_length, MIN_REFERENCE);
        self.moment_scale = at_least("stability.moment_scale", self.moment_scale, 0.0);
        self.min_airspeed = at_least("stability.min_airspeed", self.min_airspeed, 0.0);
        self.max_angle = at_least("stability.max_angle", self.max_angle, 0.0);
        self
    }
}
