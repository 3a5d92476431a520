pub mod account;
pub mod engine;
pub mod errors;
pub mod metrics;
pub mod types;

pub use account::Account;
pub use engine::ReplayEngine;
pub use errors::SimulationError;
pub use metrics::RunMetrics;
pub use types::{RunReport, Signal, SimulationConfig, DEFAULT_INITIAL_CASH};
