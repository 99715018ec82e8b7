//! Fuelroute CLI library.
//!
//! Command handlers, output format selection and logging setup for the
//! `fuelroute-cli` binary. Handlers return the text to print so they can be
//! tested without spawning the binary.

pub mod commands;
pub mod logging;
pub mod output;
