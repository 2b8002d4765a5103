//! Tool listing the statistical variables available for places

use async_trait::async_trait;
use datacom_core::Result as CoreResult;
use datacom_tools::{Tool, schema};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::{DataCommonsClient, ObservationRequest, Select};
use crate::config::STANDARD_VARIABLE_LIMIT;
use crate::normalize::variables_by_entity;
use crate::report::variables_report;
use crate::tools::outcome::ToolOutcome;
use crate::tools::params::{DcidList, parse_params};

#[derive(Debug, Deserialize)]
struct VariablesParams {
    place_dcids: DcidList,
}

/// Tool discovering which variables have data for each place
///
/// Only variable names are reported, capped per place.
pub struct AvailableVariablesTool {
    client: DataCommonsClient,
    limit: usize,
    description: String,
}

impl AvailableVariablesTool {
    pub const NAME: &'static str = "get_available_variables";

    /// Create the tool with the client's configured variable limit, falling
    /// back to the standard limit
    pub fn new(client: DataCommonsClient) -> Self {
        let limit = client.config().variable_limit_or(STANDARD_VARIABLE_LIMIT);
        Self::with_limit(client, limit)
    }

    pub fn with_limit(client: DataCommonsClient, limit: usize) -> Self {
        let description = format!(
            "Retrieve available statistical variables for one or more place DCIDs. \
             Results are limited to the first {limit} variables per place."
        );
        Self {
            client,
            limit,
            description,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub async fn run(&self, dcids: &DcidList) -> ToolOutcome {
        let request = ObservationRequest::new(dcids.as_slice().iter().cloned())
            .select(&Select::DISCOVERY);

        match self.client.observation(&request).await {
            Ok(response) => {
                let found = variables_by_entity(&response, dcids.as_slice(), self.limit);
                let report = variables_report(&found, self.limit);
                ToolOutcome::success(report, json!(found))
            }
            Err(err) => {
                tracing::warn!(dcids = %dcids, error = %err, "Variable discovery failed");
                ToolOutcome::error(format!("Error fetching variables for {dcids}: {err}"))
            }
        }
    }
}

#[async_trait]
impl Tool for AvailableVariablesTool {
    async fn execute(&self, params: Value) -> CoreResult<Value> {
        let params: VariablesParams = parse_params(params)?;

        tracing::info!(tool = Self::NAME, dcids = %params.place_dcids, "Executing tool");
        Ok(self.run(&params.place_dcids).await.into_value())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "place_dcids": schema::string_list(
                    "DCIDs of the places to query, comma-separated or as an array"
                )
            }),
            &["place_dcids"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataCommonsConfig;

    fn client() -> DataCommonsClient {
        let config = DataCommonsConfig::builder()
            .api_key("test_key")
            .variable_limit(30)
            .build()
            .unwrap();
        DataCommonsClient::new(config).unwrap()
    }

    #[test]
    fn test_default_limit_without_config() {
        let config = DataCommonsConfig::builder().api_key("test_key").build().unwrap();
        let tool = AvailableVariablesTool::new(DataCommonsClient::new(config).unwrap());
        assert_eq!(tool.limit(), STANDARD_VARIABLE_LIMIT);
    }

    #[test]
    fn test_tool_metadata() {
        let tool = AvailableVariablesTool::new(client());
        assert_eq!(tool.name(), "get_available_variables");
        assert_eq!(tool.limit(), 30);
        assert!(tool.description().contains("first 30 variables"));
        assert!(tool.input_schema()["properties"]["place_dcids"]["oneOf"].is_array());
    }

    #[test]
    fn test_with_limit_overrides_config() {
        let tool = AvailableVariablesTool::with_limit(client(), 10);
        assert_eq!(tool.limit(), 10);
    }

    #[tokio::test]
    async fn test_missing_dcids() {
        let tool = AvailableVariablesTool::new(client());
        let err = tool.execute(json!({ "place_dcids": "" })).await.unwrap_err();
        assert!(matches!(err, datacom_core::Error::InvalidParameters(_)));
    }
}
