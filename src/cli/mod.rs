//! Command implementations behind the `gsweep` binary.

pub mod commands;
