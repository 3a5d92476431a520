pub mod loader;
pub mod types;

pub use loader::{load_signal_codes, load_ticks, DataError};
pub use types::Tick;
