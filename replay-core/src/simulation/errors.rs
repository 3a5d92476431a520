use thiserror::Error;

/// Simulation layer error types
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Length mismatch: {ticks} ticks but {signals} signals")]
    LengthMismatch { ticks: usize, signals: usize },
}
