//! Shelfsort - Collection organizing automation tool
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod organize;
