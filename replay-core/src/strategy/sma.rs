// replay-core/src/strategy/sma.rs
// This is only an example strategy to exercise the engine, not trading advice.

use std::collections::VecDeque;

use crate::data::types::Tick;
use crate::simulation::Signal;

use super::Strategy;

/// Moving-average crossover: Buy when the short average crosses above the
/// long one, Sell when it crosses back below, Hold otherwise.
///
/// Signals fire only on the crossover transition, not while the state
/// persists, so a run of rising prices yields one Buy, not a Buy per tick.
pub struct SmaCrossStrategy {
    short_period: usize,
    long_period: usize,
    short_window: VecDeque<f64>,
    long_window: VecDeque<f64>,
    /// Whether the short average was above the long one at the previous
    /// tick. Starts false, so an initial short-above-long reading fires
    /// one Buy.
    short_above: bool,
}

impl SmaCrossStrategy {
    pub fn new(short_period: usize, long_period: usize) -> Self {
        Self {
            short_period,
            long_period,
            short_window: VecDeque::with_capacity(short_period),
            long_window: VecDeque::with_capacity(long_period),
            short_above: false,
        }
    }

    /// Push the close into both windows; once both are full, return the
    /// pair of averages.
    fn update_averages(&mut self, close: f64) -> Option<(f64, f64)> {
        self.short_window.push_back(close);
        self.long_window.push_back(close);

        if self.short_window.len() > self.short_period {
            self.short_window.pop_front();
        }
        if self.long_window.len() > self.long_period {
            self.long_window.pop_front();
        }

        if self.short_window.len() == self.short_period
            && self.long_window.len() == self.long_period
        {
            let short_ma = self.short_window.iter().sum::<f64>() / self.short_period as f64;
            let long_ma = self.long_window.iter().sum::<f64>() / self.long_period as f64;
            Some((short_ma, long_ma))
        } else {
            None
        }
    }
}

impl Strategy for SmaCrossStrategy {
    fn name(&self) -> &str {
        "sma-cross"
    }

    fn on_tick(&mut self, tick: &Tick) -> Signal {
        let Some((short_ma, long_ma)) = self.update_averages(tick.close) else {
            return Signal::Hold;
        };

        let now_above = short_ma > long_ma;
        let signal = match (self.short_above, now_above) {
            (false, true) => Signal::Buy,
            (true, false) => Signal::Sell,
            _ => Signal::Hold,
        };
        self.short_above = now_above;
        signal
    }

    fn reset(&mut self) {
        self.short_window.clear();
        self.long_window.clear();
        self.short_above = false;
    }
}
