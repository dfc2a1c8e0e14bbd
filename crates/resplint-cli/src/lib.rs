//! Command-line harness for the resplint analyzer.
//!
//! Reads JSON host models (see [`loader`]), applies `resplint.json`
//! settings (see [`config`]), analyzes files in parallel and prints the
//! diagnostics.

pub mod args;
pub mod config;
pub mod driver;
pub mod loader;
pub mod reporter;
