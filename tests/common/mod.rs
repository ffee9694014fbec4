#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_state_valid, assert_unit_orientation};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
