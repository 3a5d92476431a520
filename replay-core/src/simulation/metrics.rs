// replay-core/src/simulation/metrics.rs

use serde::{Deserialize, Serialize};

use super::account::Account;

/// Summary statistics for one replay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    pub final_equity: f64,
    /// Return relative to initial cash, as a fraction (0.05 = +5%).
    pub total_return: f64,
    /// Largest peak-to-trough decline over the equity series, as a
    /// fraction of the peak.
    pub max_drawdown: f64,
    pub fills: u32,
    pub rejected_buys: u32,
    pub rejected_sells: u32,
}

impl RunMetrics {
    /// Summarize an equity curve and the account that produced it.
    pub fn from_run(equity_curve: &[f64], account: &Account) -> Self {
        let final_equity = equity_curve.last().copied().unwrap_or(account.initial_cash());
        let initial = account.initial_cash();
        let total_return = if initial != 0.0 {
            (final_equity - initial) / initial
        } else {
            0.0
        };

        Self {
            final_equity,
            total_return,
            max_drawdown: max_drawdown(equity_curve),
            fills: account.fills(),
            rejected_buys: account.rejected_buys(),
            rejected_sells: account.rejected_sells(),
        }
    }
}

/// Largest peak-to-trough decline as a fraction of the peak. Zero for
/// empty, flat, or monotonically rising series.
fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;

    for &value in equity_curve {
        if value > peak {
            peak = value;
        }
        if peak > 0.0 {
            let drawdown = (peak - value) / peak;
            if drawdown > worst {
                worst = drawdown;
            }
        }
    }

    worst
}
