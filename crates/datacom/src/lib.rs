//! Data Commons statistics tools for LLM agents
//!
//! This crate wraps the public Data Commons REST API (v2) in a handful of
//! agent tools:
//!
//! - `get_dcid`: resolve a place name to its DCID
//! - `get_available_variables`: list statistical variables with data for places
//! - `get_population_count`: latest (or dated) `Count_Person` per place
//! - `get_observations`: values of arbitrary variables per place
//!
//! Each tool issues one GET, normalizes the nested
//! `variable -> entity -> facet -> observation` response by taking the
//! first facet's first observation, and returns a report plus raw data.
//! Failures come back as `{"status": "error", "error_message": ...}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use datacom::{DataCommonsClient, DataCommonsConfig, DatacomAgent};
//! use serde_json::json;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = DataCommonsConfig::builder().api_key("my-key").build()?;
//! let agent = DatacomAgent::standard(DataCommonsClient::new(config)?);
//!
//! let outcome = agent
//!     .call("get_population_count", json!({ "place_dcids": "geoId/06,geoId/48" }))
//!     .await?;
//! println!("{}", outcome["report"]);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod date;
pub mod error;
pub mod normalize;
pub mod report;
pub mod tools;

pub use agent::{DatacomAgent, Profile};
pub use api::{DataCommonsClient, ObservationRequest, Select};
pub use config::DataCommonsConfig;
pub use date::DateSelector;
pub use error::{DataCommonsError, Result};
pub use normalize::ObservationPoint;
pub use tools::{
    AvailableVariablesTool, DcidList, ObservationsTool, PopulationCountTool, ResolvePlaceTool,
    ToolOutcome,
};
