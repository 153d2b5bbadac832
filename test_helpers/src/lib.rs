//! Test helpers shared across crates.
//!
//! Provides a builder for flashed old input and a `figment::Jail` wrapper
//! for configuration tests.

pub mod figment;
pub mod session;
