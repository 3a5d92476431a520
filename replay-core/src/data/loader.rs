// =================================================================
// data/loader.rs - JSON tick and signal file loading
// =================================================================

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::types::Tick;

/// Data layer error types
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

fn read_file(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a tick series from a JSON file containing an array of OHLCV bars.
pub fn load_ticks(path: &Path) -> Result<Vec<Tick>, DataError> {
    let contents = read_file(path)?;
    let ticks: Vec<Tick> = serde_json::from_str(&contents).map_err(|e| DataError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Loaded {} ticks from {}", ticks.len(), path.display());
    Ok(ticks)
}

/// Load raw signal codes from a JSON file containing an array of integers.
///
/// The codes are not interpreted here; unrecognized values fall back to Hold
/// when the engine maps them.
pub fn load_signal_codes(path: &Path) -> Result<Vec<i32>, DataError> {
    let contents = read_file(path)?;
    let codes: Vec<i32> = serde_json::from_str(&contents).map_err(|e| DataError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    info!("Loaded {} signal codes from {}", codes.len(), path.display());
    Ok(codes)
}
