//! Tool resolving a place name to its DCID

use async_trait::async_trait;
use datacom_core::Result as CoreResult;
use datacom_tools::{Tool, schema};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::DataCommonsClient;
use crate::error::DataCommonsError;
use crate::tools::outcome::ToolOutcome;
use crate::tools::params::parse_params;

#[derive(Debug, Deserialize)]
struct ResolveParams {
    place: String,
}

/// Tool resolving a place name to a Data Commons identifier
pub struct ResolvePlaceTool {
    client: DataCommonsClient,
}

impl ResolvePlaceTool {
    pub const NAME: &'static str = "get_dcid";

    pub fn new(client: DataCommonsClient) -> Self {
        Self { client }
    }

    /// Resolve `place`, folding failures into the outcome
    pub async fn run(&self, place: &str) -> ToolOutcome {
        match self.client.resolve_dcid(place).await {
            Ok(dcid) => ToolOutcome::success(
                format!("DCID for {place}: {dcid}"),
                json!({ "place": place, "dcid": dcid }),
            ),
            Err(err @ DataCommonsError::PlaceNotFound(_)) => {
                tracing::info!(place, "No DCID candidate");
                ToolOutcome::error(err.to_string())
            }
            Err(err) => {
                tracing::warn!(place, error = %err, "Place resolution failed");
                ToolOutcome::error(format!("Error fetching dcid for {place}: {err}"))
            }
        }
    }
}

#[async_trait]
impl Tool for ResolvePlaceTool {
    async fn execute(&self, params: Value) -> CoreResult<Value> {
        let params: ResolveParams = parse_params(params)?;
        let place = params.place.trim();
        if place.is_empty() {
            return Err(datacom_core::Error::InvalidParameters(
                "place must not be empty".to_string(),
            ));
        }

        tracing::info!(tool = Self::NAME, place, "Executing tool");
        Ok(self.run(place).await.into_value())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Retrieve the Data Commons ID (DCID) for a place such as a city, state or country. \
         Use the DCID with the other tools."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "place": schema::string("Name of the place, e.g. 'California' or 'Paris, France'")
            }),
            &["place"],
        )
    }
}
