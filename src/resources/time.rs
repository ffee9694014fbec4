use bevy::prelude::*;

use super::SimulationSettings;

/// Wall-clock accumulator that drains into fixed physics steps.
///
/// Mirrors what `Time<Fixed>` does inside a bevy `App` for drivers that run the
/// simulation without one.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    timestep: f64,
    max_substeps: u32,
    accumulator: f64,
    paused: bool,
    elapsed: f64,
    ticks: u64,
}

impl FixedStepClock {
    pub fn new(timestep: f64, max_substeps: u32) -> Self {
        Self {
            timestep: if timestep > 0.0 { timestep } else { crate::utils::DEFAULT_TIMESTEP },
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            paused: false,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self::new(settings.timestep, settings.max_substeps)
    }

    /// Adds one frame of wall time and returns how many fixed steps to run.
    ///
    /// At most `max_substeps` steps are returned; whole steps beyond that are
    /// dropped so a slow frame cannot snowball.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        if self.paused || !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }

        self.accumulator += frame_dt;
        let available = (self.accumulator / self.timestep).floor() as u64;
        let steps = available.min(self.max_substeps as u64) as u32;

        self.accumulator -= steps as f64 * self.timestep;
        if available > steps as u64 {
            debug!(
                "dropping {} fixed steps after a long frame",
                available - steps as u64
            );
            self.accumulator %= self.timestep;
        }

        self.ticks += steps as u64;
        self.elapsed += steps as f64 * self.timestep;
        steps
    }

    /// Fraction of the next step already accumulated, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.timestep).clamp(0.0, 1.0)
    }

    /// Pausing discards any partially accumulated step.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if paused {
            self.accumulator = 0.0;
        }
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
    }

    pub fn resume(&mut self) {
        self.set_paused(false);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Simulated seconds drained so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::from_settings(&SimulationSettings::default())
    }
}
