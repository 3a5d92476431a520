//! Single-asset, tick-by-tick trading simulator.
//!
//! Replays a signal series against a historical price series, applying a
//! one-unit buy/sell rule to a cash-and-holdings account and recording the
//! mark-to-market equity after every tick. Exposed both as a Rust API and
//! as a C ABI for raw-array callers.

pub mod config;
pub mod data;
pub mod ffi;
pub mod simulation;
pub mod strategy;
