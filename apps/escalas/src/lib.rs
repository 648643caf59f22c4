//! # Escalas Library
//!
//! This library exposes the Escalas application modules for testing and
//! integration.
//!
//! The binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod terminal;

// Re-export escalas_core for convenience
pub use escalas_core;
