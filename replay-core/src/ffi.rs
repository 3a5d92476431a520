//! C ABI boundary for ctypes-style callers.
//!
//! Mirrors the raw-array calling convention: three caller-owned arrays of
//! one shared length, with the valuation series written into the output
//! buffer in place.

use std::slice;

use crate::data::types::Tick;
use crate::simulation::ReplayEngine;

/// Tick record with the exact C layout callers marshal:
/// `{ long long; double x4; int }`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawTick {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i32,
}

impl From<RawTick> for Tick {
    fn from(raw: RawTick) -> Self {
        Tick {
            timestamp: raw.timestamp,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
        }
    }
}

/// Replay `num_ticks` signals against `num_ticks` ticks, writing one equity
/// value per tick into `portfolio_history`.
///
/// Signal coding: 1 buys, -1 sells, anything else holds. Returns 0 on
/// success, nonzero without touching any buffer when a pointer is null or
/// the length is negative.
///
/// # Safety
///
/// `ticks`, `signals`, and `portfolio_history` must each point to
/// `num_ticks` valid, properly aligned elements, and `portfolio_history`
/// must be writable.
#[no_mangle]
pub unsafe extern "C" fn perform_backtest(
    ticks: *const RawTick,
    num_ticks: i32,
    signals: *const i32,
    portfolio_history: *mut f64,
) -> i32 {
    if ticks.is_null() || signals.is_null() || portfolio_history.is_null() || num_ticks < 0 {
        return 1;
    }

    let n = num_ticks as usize;
    let raw_ticks = slice::from_raw_parts(ticks, n);
    let codes = slice::from_raw_parts(signals, n);
    let output = slice::from_raw_parts_mut(portfolio_history, n);

    let ticks: Vec<Tick> = raw_ticks.iter().map(|&raw| raw.into()).collect();

    // Lengths agree by construction here, so the engine cannot fail.
    match ReplayEngine::default().run_codes(&ticks, codes) {
        Ok(report) => {
            output.copy_from_slice(&report.equity_curve);
            0
        }
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn raw_tick(close: f64) -> RawTick {
        RawTick {
            timestamp: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        }
    }

    #[test]
    fn test_perform_backtest_writes_equity_series() {
        let ticks = [raw_tick(100.0), raw_tick(110.0)];
        let signals = [1, -1];
        let mut output = [0.0_f64; 2];

        let status = unsafe {
            perform_backtest(
                ticks.as_ptr(),
                ticks.len() as i32,
                signals.as_ptr(),
                output.as_mut_ptr(),
            )
        };

        assert_eq!(status, 0);
        assert_eq!(output, [10_000.0, 10_010.0]);
    }

    #[test]
    fn test_perform_backtest_zero_length() {
        let ticks: [RawTick; 0] = [];
        let signals: [i32; 0] = [];
        let mut output: [f64; 0] = [];

        let status = unsafe {
            perform_backtest(ticks.as_ptr(), 0, signals.as_ptr(), output.as_mut_ptr())
        };
        assert_eq!(status, 0);
    }

    #[test]
    fn test_perform_backtest_rejects_null_and_negative() {
        let ticks = [raw_tick(100.0)];
        let signals = [0];
        let mut output = [0.0_f64; 1];

        unsafe {
            assert_eq!(
                perform_backtest(ptr::null(), 1, signals.as_ptr(), output.as_mut_ptr()),
                1
            );
            assert_eq!(
                perform_backtest(ticks.as_ptr(), 1, ptr::null(), output.as_mut_ptr()),
                1
            );
            assert_eq!(
                perform_backtest(ticks.as_ptr(), 1, signals.as_ptr(), ptr::null_mut()),
                1
            );
            assert_eq!(
                perform_backtest(ticks.as_ptr(), -1, signals.as_ptr(), output.as_mut_ptr()),
                1
            );
        }
        assert_eq!(output[0], 0.0);
    }

    #[test]
    fn test_unknown_codes_hold() {
        let ticks = [raw_tick(100.0), raw_tick(200.0)];
        let signals = [99, -99];
        let mut output = [0.0_f64; 2];

        let status = unsafe {
            perform_backtest(ticks.as_ptr(), 2, signals.as_ptr(), output.as_mut_ptr())
        };

        assert_eq!(status, 0);
        assert_eq!(output, [10_000.0, 10_000.0]);
    }
}
