//! Tool management for the datacom agent
//!
//! This crate provides the [`Tool`] trait implemented by every agent tool,
//! the serializable [`ToolDefinition`] handed to an orchestrator, and the
//! [`ToolRegistry`] that dispatches calls by name.

pub mod definition;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use registry::ToolRegistry;
pub use tool::Tool;
