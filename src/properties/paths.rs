//! Canonical property paths shared by the aircraft subsystems.

use nalgebra::{UnitQuaternion, Vector3};

use super::TypedProperty;

pub mod input {
    use super::*;

    pub const PITCH: TypedProperty<f64> = TypedProperty::new("input/pitch");
    pub const ROLL: TypedProperty<f64> = TypedProperty::new("input/roll");
    pub const YAW: TypedProperty<f64> = TypedProperty::new("input/yaw");
    pub const THROTTLE: TypedProperty<f64> = TypedProperty::new("input/throttle");
    pub const BRAKE: TypedProperty<bool> = TypedProperty::new("input/brake");
    pub const GEAR_TOGGLE: TypedProperty<bool> = TypedProperty::new("input/gear-toggle");
    pub const FLAPS_TOGGLE: TypedProperty<bool> = TypedProperty::new("input/flaps-toggle");
}

pub mod position {
    use super::*;

    pub const POSITION: TypedProperty<Vector3<f64>> = TypedProperty::new("position");
}

pub mod orientation {
    use super::*;

    pub const ORIENTATION: TypedProperty<UnitQuaternion<f64>> = TypedProperty::new("orientation");
}

pub mod velocity {
    use super::*;

    /// World-frame linear velocity.
    pub const VELOCITY: TypedProperty<Vector3<f64>> = TypedProperty::new("velocity");
    /// Body-frame angular velocity (x pitch, y yaw, z roll).
    pub const ANGULAR: TypedProperty<Vector3<f64>> = TypedProperty::new("velocity/angular");
    pub const AIRSPEED: TypedProperty<f64> = TypedProperty::new("velocity/airspeed");
}

pub mod engine {
    use super::*;

    pub const N1: TypedProperty<f64> = TypedProperty::new("engine/n1");
    pub const THRUST: TypedProperty<f64> = TypedProperty::new("engine/thrust");
    pub const POWER: TypedProperty<f64> = TypedProperty::new("engine/power");
    pub const FUEL_FLOW: TypedProperty<f64> = TypedProperty::new("engine/fuel-flow");
    pub const RUNNING: TypedProperty<bool> = TypedProperty::new("engine/running");
}

pub mod fuel {
    use super::*;

    pub const QUANTITY: TypedProperty<f64> = TypedProperty::new("fuel/quantity");
    pub const CAPACITY: TypedProperty<f64> = TypedProperty::new("fuel/capacity");
}

pub mod atmosphere {
    use super::*;

    pub const DENSITY: TypedProperty<f64> = TypedProperty::new("atmosphere/density");
    pub const TEMPERATURE: TypedProperty<f64> = TypedProperty::new("atmosphere/temperature");
    pub const PRESSURE: TypedProperty<f64> = TypedProperty::new("atmosphere/pressure");
    pub const WIND: TypedProperty<Vector3<f64>> = TypedProperty::new("atmosphere/wind");
}

pub mod physics {
    use super::*;

    /// World-frame force accumulator.
    pub const FORCE: TypedProperty<Vector3<f64>> = TypedProperty::new("physics/force");
    /// Body-frame torque accumulator.
    pub const TORQUE: TypedProperty<Vector3<f64>> = TypedProperty::new("physics/torque");
    pub const MASS: TypedProperty<f64> = TypedProperty::new("physics/mass");
    pub const INERTIA: TypedProperty<Vector3<f64>> = TypedProperty::new("physics/inertia");
    pub const ACCELERATION: TypedProperty<Vector3<f64>> =
        TypedProperty::new("physics/acceleration");
    pub const ANGULAR_ACCELERATION: TypedProperty<Vector3<f64>> =
        TypedProperty::new("physics/angular-acceleration");
    pub const ON_GROUND: TypedProperty<bool> = TypedProperty::new("physics/on-ground");
}

/// Per-contributor force breakdown. Instrumentation only, never read by the
/// integrator.
pub mod forces {
    use super::*;

    pub const GRAVITY: TypedProperty<Vector3<f64>> = TypedProperty::new("forces/gravity");
    pub const THRUST: TypedProperty<Vector3<f64>> = TypedProperty::new("forces/thrust");
    pub const LIFT: TypedProperty<Vector3<f64>> = TypedProperty::new("forces/lift");
    pub const DRAG: TypedProperty<Vector3<f64>> = TypedProperty::new("forces/drag");
    pub const CONTROL_TORQUE: TypedProperty<Vector3<f64>> =
        TypedProperty::new("forces/control-torque");
    pub const STABILITY_TORQUE: TypedProperty<Vector3<f64>> =
        TypedProperty::new("forces/stability-torque");

    pub const ALL: [TypedProperty<Vector3<f64>>; 6] = [
        GRAVITY,
        THRUST,
        LIFT,
        DRAG,
        CONTROL_TORQUE,
        STABILITY_TORQUE,
    ];
}

pub mod aero {
    use super::*;

    pub const CL: TypedProperty<f64> = TypedProperty::new("aero/cl");
    pub const CD: TypedProperty<f64> = TypedProperty::new("aero/cd");
    pub const ALPHA: TypedProperty<f64> = TypedProperty::new("aero/alpha");
    pub const BETA: TypedProperty<f64> = TypedProperty::new("aero/beta");
    pub const DYNAMIC_PRESSURE: TypedProperty<f64> = TypedProperty::new("aero/qbar");
}

pub mod telemetry {
    use super::*;

    pub const ALTITUDE_FT: TypedProperty<f64> = TypedProperty::new("telemetry/altitude-ft");
    pub const AIRSPEED_KT: TypedProperty<f64> = TypedProperty::new("telemetry/airspeed-kt");
    pub const VERTICAL_SPEED_FPS: TypedProperty<f64> =
        TypedProperty::new("telemetry/vertical-speed-fps");
    pub const PITCH_DEG: TypedProperty<f64> = TypedProperty::new("telemetry/pitch-deg");
    pub const ROLL_DEG: TypedProperty<f64> = TypedProperty::new("telemetry/roll-deg");
    pub const HEADING_DEG: TypedProperty<f64> = TypedProperty::new("telemetry/heading-deg");
}
