pub mod sma;

pub use sma::SmaCrossStrategy;

use crate::data::types::Tick;
use crate::simulation::Signal;

/// A signal generator fed one tick at a time, in series order.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// Decide on the signal for `tick`, given everything seen so far.
    fn on_tick(&mut self, tick: &Tick) -> Signal;

    /// Reset internal state for a fresh series.
    fn reset(&mut self) {
        // Default implementation does nothing
    }

    /// Produce the full index-aligned signal series for `ticks`.
    fn generate(&mut self, ticks: &[Tick]) -> Vec<Signal> {
        self.reset();
        ticks.iter().map(|tick| self.on_tick(tick)).collect()
    }
}
