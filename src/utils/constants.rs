pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const DENSITY_SCALE_HEIGHT: f64 = 8500.0; // m
pub const AIR_GAS_CONSTANT: f64 = 287.05; // J/(kg·K)
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const ISA_LAPSE_RATE: f64 = 0.0065; // K/m
pub const ISA_TROPOPAUSE: f64 = 11000.0; // m

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Fixed physics timestep
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

// Guards applied at configuration load time
pub const MIN_MASS: f64 = 1.0; // kg
pub const MIN_INERTIA: f64 = 1.0; // kg·m^2
pub const MIN_REFERENCE: f64 = 0.01; // m or m^2

// Numerical degeneracy thresholds
pub const AIRSPEED_EPSILON: f64 = 1e-3; // m/s
pub const VECTOR_EPSILON: f64 = 1e-6;
pub const GROUND_CONTACT_EPSILON: f64 = 0.1; // m

// Unit conversions
pub const METERS_TO_FEET: f64 = 3.280_84;
pub const MPS_TO_KNOTS: f64 = 1.943_844;
