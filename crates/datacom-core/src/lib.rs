//! Core types shared across the datacom workspace
//!
//! Every tool crate reports failures through the [`Error`] defined here.

pub mod error;

pub use error::{Error, Result};
