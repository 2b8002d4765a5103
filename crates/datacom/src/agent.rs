//! Agent declaration bundling the Data Commons tools
//!
//! The agent is a descriptor: name, description, instruction and a tool
//! registry. Driving an LLM with it is left to the orchestrator.

use datacom_core::Result;
use datacom_tools::{ToolDefinition, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;

use crate::api::DataCommonsClient;
use crate::config::{EXTENDED_VARIABLE_LIMIT, STANDARD_VARIABLE_LIMIT};
use crate::tools::{
    AvailableVariablesTool, ObservationsTool, PopulationCountTool, ResolvePlaceTool,
};

pub const AGENT_NAME: &str = "datcom_agent";

const DESCRIPTION: &str =
    "Agent to answer questions about public data about places using the Data Commons API.";

const INSTRUCTION: &str = "You are a helpful agent who can access Data Commons to provide \
information about places. You can help users find data about specific cities, states, and \
countries by first looking up their Data Commons IDs (DCIDs), retrieving available statistics \
for the place, and retrieving population counts.";

const EXTENDED_INSTRUCTION: &str = " When a user asks about a statistic other than population, \
use get_available_variables to find the variable DCID and get_observations to fetch its value.";

/// Which tool set the agent exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Place lookup, variable discovery (10 per place) and population
    Standard,
    /// Standard tools plus arbitrary observations; 30 variables per place
    Extended,
}

impl Profile {
    pub fn variable_limit(self) -> usize {
        match self {
            Self::Standard => STANDARD_VARIABLE_LIMIT,
            Self::Extended => EXTENDED_VARIABLE_LIMIT,
        }
    }
}

/// Data Commons agent descriptor
pub struct DatacomAgent {
    profile: Profile,
    instruction: String,
    tools: ToolRegistry,
}

impl DatacomAgent {
    /// Build the agent for `profile`, sharing `client` across its tools
    ///
    /// A variable limit set on the client's config overrides the profile's.
    pub fn new(client: DataCommonsClient, profile: Profile) -> Self {
        let limit = client.config().variable_limit_or(profile.variable_limit());

        let tools = ToolRegistry::new();
        tools.register(Arc::new(ResolvePlaceTool::new(client.clone())));
        tools.register(Arc::new(AvailableVariablesTool::with_limit(
            client.clone(),
            limit,
        )));
        tools.register(Arc::new(PopulationCountTool::new(client.clone())));

        let mut instruction = INSTRUCTION.to_string();
        if profile == Profile::Extended {
            tools.register(Arc::new(ObservationsTool::new(client)));
            instruction.push_str(EXTENDED_INSTRUCTION);
        }

        Self {
            profile,
            instruction,
            tools,
        }
    }

    pub fn standard(client: DataCommonsClient) -> Self {
        Self::new(client, Profile::Standard)
    }

    pub fn extended(client: DataCommonsClient) -> Self {
        Self::new(client, Profile::Extended)
    }

    pub fn name(&self) -> &str {
        AGENT_NAME
    }

    pub fn description(&self) -> &str {
        DESCRIPTION
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Definitions of the exposed tools, ordered by name
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.definitions()
    }

    /// Invoke a tool by name
    pub async fn call(&self, tool: &str, params: Value) -> Result<Value> {
        self.tools.call(tool, params).await
    }
}
