//! Library half of the `vitrine` binary: configuration loading, the
//! execution context and the command implementations.

pub mod commands;
pub mod config;
pub mod context;
pub mod output;
