//! # Lizfacts Library
//!
//! This library exposes the lizfacts modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export lizfacts_core for convenience
pub use lizfacts_core;
