//! Shared utilities for datacom
//!
//! This crate provides common functionality used across the workspace:
//! tracing setup and environment-backed configuration helpers.

pub mod config;
pub mod logging;

pub use config::env_value;
pub use logging::{LogFormat, init_tracing_with};
