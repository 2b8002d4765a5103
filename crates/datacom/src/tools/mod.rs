//! Data Commons tools for LLM agents

pub mod observations;
pub mod outcome;
pub mod params;
pub mod population;
pub mod resolve;
pub mod variables;

pub use observations::ObservationsTool;
pub use outcome::ToolOutcome;
pub use params::DcidList;
pub use population::PopulationCountTool;
pub use resolve::ResolvePlaceTool;
pub use variables::AvailableVariablesTool;
