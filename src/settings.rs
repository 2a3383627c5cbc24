//! Session settings
//!
//! Hosts may hand these over as JSON; the native build uses the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEED, FIXED_DT, MAX_SUBSTEPS};

/// How wall-clock time is turned into simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TimestepMode {
    /// One tick per frame with the measured frame delta
    #[default]
    Variable,
    /// Whole ticks of `dt` seconds, at most `max_substeps` per frame
    Fixed { dt: f32, max_substeps: u32 },
}

impl TimestepMode {
    /// Fixed mode with the stock 60 Hz step
    pub fn fixed() -> Self {
        TimestepMode::Fixed {
            dt: FIXED_DT,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepMode::Variable => "variable",
            TimestepMode::Fixed { .. } => "fixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "variable" | "var" => Some(TimestepMode::Variable),
            "fixed" => Some(TimestepMode::fixed()),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// PRNG seed for the session
    pub seed: u32,
    /// Frame-to-tick conversion
    pub timestep: TimestepMode,
    /// Let the built-in autopilot drive
    pub idle_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            timestep: TimestepMode::Variable,
            idle_mode: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Settings for this platform. Native builds have no settings store.
    pub fn load() -> Self {
        log::info!("Using default settings");
        Self::default()
    }
}
