//! marquee-relay library root.
//!
//! Configuration loading and logging setup live here so integration tests
//! can exercise them without going through the binary.

pub mod config;
pub mod logging;
