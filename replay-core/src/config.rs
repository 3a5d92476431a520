use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::simulation::DEFAULT_INITIAL_CASH;

#[derive(Debug, Clone, Deserialize)]
pub struct Simulation {
    pub initial_cash: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StrategyDefaults {
    pub short_period: usize,
    pub long_period: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub simulation: Simulation,
    pub strategy: StrategyDefaults,
}

impl Settings {
    /// Load settings from `config/<RUN_MODE>` when present, with built-in
    /// defaults otherwise. `REPLAY_INITIAL_CASH` overrides the configured
    /// starting balance.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("simulation.initial_cash", DEFAULT_INITIAL_CASH)?
            .set_default("strategy.short_period", 50_i64)?
            .set_default("strategy.long_period", 200_i64)?
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Ok(raw) = std::env::var("REPLAY_INITIAL_CASH") {
            let initial_cash: f64 = raw
                .parse()
                .map_err(|e| ConfigError::Message(format!("invalid REPLAY_INITIAL_CASH: {}", e)))?;
            builder = builder.set_override("simulation.initial_cash", initial_cash)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }
}
