use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A single OHLCV bar of historical price data.
///
/// The simulation only reads `close`; the remaining fields ride along for
/// strategies that want them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Unix timestamp in seconds. Assumed non-decreasing across a series;
    /// the engine does not enforce this.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i32,
}

impl Tick {
    /// Render the timestamp for log and report output.
    pub fn format_timestamp(&self) -> String {
        match DateTime::from_timestamp(self.timestamp, 0) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.timestamp.to_string(),
        }
    }
}
