//! Fixed-timestep aircraft flight dynamics.
//!
//! Each aircraft owns a [`properties::PropertyStore`] and an ordered list of
//! force subsystems that communicate only through it. Forces and torques are
//! accumulated once per tick and integrated into rigid-body motion; the
//! previous/current state pair supports interpolated rendering.

pub mod components;
pub mod plugins;
pub mod properties;
pub mod resources;
pub mod systems;
pub mod utils;
