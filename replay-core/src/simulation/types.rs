// replay-core/src/simulation/types.rs

use serde::{Deserialize, Serialize};

use super::metrics::RunMetrics;

/// Starting cash balance when none is configured.
pub const DEFAULT_INITIAL_CASH: f64 = 10_000.0;

/// Trading decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Map a raw integer code to a signal: 1 is Buy, -1 is Sell, anything
    /// else is Hold. The fallback is deliberate, not an error.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Signal::Buy,
            -1 => Signal::Sell,
            _ => Signal::Hold,
        }
    }

    pub fn to_code(self) -> i32 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Hold => 0,
        }
    }
}

/// Simulation run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub initial_cash: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_cash: DEFAULT_INITIAL_CASH,
        }
    }
}

/// Result of one replay: the per-tick equity series plus a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Total equity after each tick's trade decision, index-aligned with
    /// the input series.
    pub equity_curve: Vec<f64>,
    pub metrics: RunMetrics,
}
