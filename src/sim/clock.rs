//! Wall-clock sampling into simulation steps
//!
//! Variable mode hands the raw frame delta to the simulation, so motion and
//! spawn cadence follow the real frame rate. Fixed mode runs whole fixed
//! steps out of an accumulator instead.

use serde::{Deserialize, Serialize};

use crate::settings::TimestepMode;

/// Simulation work for one rendered frame: run `count` ticks of `dt` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Steps {
    pub dt: f32,
    pub count: u32,
}

impl Steps {
    pub const NONE: Steps = Steps { dt: 0.0, count: 0 };

    /// Total simulated time covered by these steps
    pub fn total(&self) -> f32 {
        self.dt * self.count as f32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    mode: TimestepMode,
    /// Timestamp (seconds) of the previous sample
    last_time: f64,
    accumulator: f32,
}

impl SimClock {
    /// Clock whose first sample is measured from time zero
    pub fn new(mode: TimestepMode) -> Self {
        Self::starting_at(mode, 0.0)
    }

    pub fn starting_at(mode: TimestepMode, now: f64) -> Self {
        Self {
            mode,
            last_time: now,
            accumulator: 0.0,
        }
    }

    pub fn mode(&self) -> TimestepMode {
        self.mode
    }

    /// Take one wall-clock sample (seconds) and convert it into steps
    pub fn sample(&mut self, now: f64) -> Steps {
        // Clocks are monotonic; a backwards sample contributes nothing
        let frame_dt = ((now - self.last_time) as f32).max(0.0);
        self.last_time = now;

        match self.mode {
            TimestepMode::Variable => Steps {
                dt: frame_dt,
                count: 1,
            },
            TimestepMode::Fixed { dt, max_substeps } => {
                if dt <= 0.0 {
                    return Steps::NONE;
                }
                self.accumulator += frame_dt;

                let due = (self.accumulator / dt).floor() as u32;
                let count = due.min(max_substeps);
                self.accumulator -= dt * count as f32;
                if due > max_substeps {
                    log::trace!("Dropping {} fixed steps", due - max_substeps);
                    self.accumulator %= dt;
                }

                Steps { dt, count }
            }
        }
    }
}
