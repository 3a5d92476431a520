// replay-core/src/simulation/engine.rs

use tracing::info;

use super::account::Account;
use super::errors::SimulationError;
use super::metrics::RunMetrics;
use super::types::{RunReport, Signal, SimulationConfig};
use crate::data::types::Tick;

/// Replays a signal series against a price series, one tick at a time.
///
/// The pass is strictly sequential: each step's valuation depends on the
/// account state left behind by the previous step, so there is nothing to
/// parallelize.
pub struct ReplayEngine {
    config: SimulationConfig,
}

impl ReplayEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run one simulation over index-aligned ticks and signals.
    ///
    /// Rejects mismatched lengths up front; everything past that point is
    /// total. Rejected trades are absorbed inside [`Account`] as no-ops,
    /// so the loop itself never fails.
    pub fn run(&self, ticks: &[Tick], signals: &[Signal]) -> Result<RunReport, SimulationError> {
        if ticks.len() != signals.len() {
            return Err(SimulationError::LengthMismatch {
                ticks: ticks.len(),
                signals: signals.len(),
            });
        }

        info!(
            ticks = ticks.len(),
            initial_cash = self.config.initial_cash,
            "Starting replay"
        );

        let mut account = Account::new(self.config.initial_cash);
        let mut equity_curve = Vec::with_capacity(ticks.len());

        for (tick, signal) in ticks.iter().zip(signals) {
            let price = tick.close;
            match signal {
                Signal::Buy => account.buy(price),
                Signal::Sell => account.sell(price),
                Signal::Hold => {}
            }
            equity_curve.push(account.total_value(price));
        }

        let metrics = RunMetrics::from_run(&equity_curve, &account);
        info!(
            fills = metrics.fills,
            final_equity = metrics.final_equity,
            "Replay completed"
        );

        Ok(RunReport {
            equity_curve,
            metrics,
        })
    }

    /// Run with raw integer signal codes as they arrive at the boundary:
    /// 1 buys, -1 sells, anything else holds.
    pub fn run_codes(&self, ticks: &[Tick], codes: &[i32]) -> Result<RunReport, SimulationError> {
        let signals: Vec<Signal> = codes.iter().map(|&c| Signal::from_code(c)).collect();
        self.run(ticks, &signals)
    }
}

impl Default for ReplayEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(close: f64) -> Tick {
        Tick {
            timestamp: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        let ticks: Vec<Tick> = (0..50).map(|i| tick(100.0 + i as f64)).collect();
        let signals = vec![Signal::Hold; 50];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();
        assert_eq!(report.equity_curve.len(), ticks.len());
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let ticks = vec![tick(100.0), tick(101.0)];
        let signals = vec![Signal::Buy];

        let err = ReplayEngine::default().run(&ticks, &signals).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::LengthMismatch {
                ticks: 2,
                signals: 1
            }
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let report = ReplayEngine::default().run(&[], &[]).unwrap();
        assert!(report.equity_curve.is_empty());
        assert_eq!(report.metrics.final_equity, 10_000.0);
    }

    #[test]
    fn test_single_buy() {
        // Buy one unit at 100: cash 9900, holdings 1, equity unchanged.
        let report = ReplayEngine::default()
            .run(&[tick(100.0)], &[Signal::Buy])
            .unwrap();

        assert_eq!(report.equity_curve, vec![10_000.0]);
        assert_eq!(report.metrics.fills, 1);
    }

    #[test]
    fn test_buy_then_sell_realizes_gain() {
        let ticks = vec![tick(100.0), tick(110.0)];
        let signals = vec![Signal::Buy, Signal::Sell];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();
        assert_eq!(report.equity_curve, vec![10_000.0, 10_010.0]);
        assert_eq!(report.metrics.fills, 2);
        assert!((report.metrics.total_return - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_buy_beyond_cash_is_rejected() {
        let report = ReplayEngine::default()
            .run(&[tick(20_000.0)], &[Signal::Buy])
            .unwrap();

        assert_eq!(report.equity_curve, vec![10_000.0]);
        assert_eq!(report.metrics.fills, 0);
        assert_eq!(report.metrics.rejected_buys, 1);
    }

    #[test]
    fn test_sell_with_no_holdings_is_rejected() {
        let report = ReplayEngine::default()
            .run(&[tick(50.0)], &[Signal::Sell])
            .unwrap();

        assert_eq!(report.equity_curve, vec![10_000.0]);
        assert_eq!(report.metrics.fills, 0);
        assert_eq!(report.metrics.rejected_sells, 1);
    }

    #[test]
    fn test_all_hold_keeps_equity_flat() {
        let ticks: Vec<Tick> = [100.0, 250.0, 3.0, 999.0].iter().map(|&c| tick(c)).collect();
        let signals = vec![Signal::Hold; ticks.len()];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();
        assert!(report.equity_curve.iter().all(|&v| v == 10_000.0));
        assert_eq!(report.metrics.fills, 0);
    }

    #[test]
    fn test_held_position_marks_to_each_close() {
        // Buy at 100, then hold while the price moves.
        let ticks: Vec<Tick> = [100.0, 120.0, 80.0].iter().map(|&c| tick(c)).collect();
        let signals = vec![Signal::Buy, Signal::Hold, Signal::Hold];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();
        assert_eq!(report.equity_curve, vec![10_000.0, 10_020.0, 9_980.0]);
    }

    #[test]
    fn test_rejected_buy_leaves_state_for_later_steps() {
        // Tick 0 is unaffordable; tick 1 is not. The rejection must not
        // disturb cash or holdings.
        let ticks = vec![tick(20_000.0), tick(100.0)];
        let signals = vec![Signal::Buy, Signal::Buy];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();
        assert_eq!(report.equity_curve, vec![10_000.0, 10_000.0]);
        assert_eq!(report.metrics.fills, 1);
        assert_eq!(report.metrics.rejected_buys, 1);
    }

    #[test]
    fn test_run_codes_maps_unknown_to_hold() {
        let ticks: Vec<Tick> = (0..4).map(|_| tick(100.0)).collect();
        let codes = [1, 7, -1, 0];

        let report = ReplayEngine::default().run_codes(&ticks, &codes).unwrap();
        // Buy, hold (unknown code), sell, hold.
        assert_eq!(report.metrics.fills, 2);
        assert_eq!(report.equity_curve, vec![10_000.0; 4]);
    }

    #[test]
    fn test_custom_initial_cash() {
        let engine = ReplayEngine::new(SimulationConfig { initial_cash: 50.0 });
        let report = engine.run(&[tick(100.0)], &[Signal::Buy]).unwrap();

        // 100 > 50: no fill.
        assert_eq!(report.equity_curve, vec![50.0]);
        assert_eq!(report.metrics.rejected_buys, 1);
    }

    #[test]
    fn test_equity_reconstructible_from_state() {
        // output[i] must equal cash_i + holdings_i * close_i with the
        // account replayed by hand.
        let ticks: Vec<Tick> = [10.0, 12.0, 11.0, 15.0, 9.0].iter().map(|&c| tick(c)).collect();
        let signals = [
            Signal::Buy,
            Signal::Buy,
            Signal::Sell,
            Signal::Hold,
            Signal::Sell,
        ];

        let report = ReplayEngine::default().run(&ticks, &signals).unwrap();

        let mut cash = 10_000.0_f64;
        let mut holdings = 0_u32;
        for (i, (tick, signal)) in ticks.iter().zip(&signals).enumerate() {
            match signal {
                Signal::Buy if cash >= tick.close => {
                    holdings += 1;
                    cash -= tick.close;
                }
                Signal::Sell if holdings > 0 => {
                    holdings -= 1;
                    cash += tick.close;
                }
                _ => {}
            }
            let expected = cash + holdings as f64 * tick.close;
            assert_eq!(report.equity_curve[i], expected);
        }
    }
}
