//! Tool fetching observations for arbitrary variables

use async_trait::async_trait;
use datacom_core::Result as CoreResult;
use datacom_tools::{Tool, schema};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::{DataCommonsClient, ObservationRequest};
use crate::date::DateSelector;
use crate::normalize::latest_by_entity_variable;
use crate::report::observations_report;
use crate::tools::outcome::ToolOutcome;
use crate::tools::params::{DcidList, parse_params};

#[derive(Debug, Deserialize)]
struct ObservationsParams {
    place_dcids: DcidList,
    variable_dcids: DcidList,
    #[serde(default)]
    date: DateSelector,
}

/// Tool fetching values of several variables for several places
pub struct ObservationsTool {
    client: DataCommonsClient,
}

impl ObservationsTool {
    pub const NAME: &'static str = "get_observations";

    pub fn new(client: DataCommonsClient) -> Self {
        Self { client }
    }

    pub async fn run(
        &self,
        dcids: &DcidList,
        variable_dcids: &DcidList,
        date: DateSelector,
    ) -> ToolOutcome {
        let request = ObservationRequest::new(dcids.as_slice().iter().cloned())
            .variables(variable_dcids.as_slice().iter().cloned())
            .date(date);

        match self.client.observation(&request).await {
            Ok(response) => {
                let points = latest_by_entity_variable(&response);
                let report = observations_report(&points);
                ToolOutcome::success(report, json!(points))
            }
            Err(err) => {
                tracing::warn!(
                    dcids = %dcids,
                    variables = %variable_dcids,
                    error = %err,
                    "Observation query failed"
                );
                ToolOutcome::error(format!("Error fetching observations for {dcids}: {err}"))
            }
        }
    }
}

#[async_trait]
impl Tool for ObservationsTool {
    async fn execute(&self, params: Value) -> CoreResult<Value> {
        let params: ObservationsParams = parse_params(params)?;

        tracing::info!(
            tool = Self::NAME,
            dcids = %params.place_dcids,
            variables = %params.variable_dcids,
            date = %params.date,
            "Executing tool"
        );
        Ok(self
            .run(&params.place_dcids, &params.variable_dcids, params.date)
            .await
            .into_value())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Retrieve values of one or more statistical variables (e.g. Median_Age_Person) \
         for one or more place DCIDs. Use get_available_variables to discover variable DCIDs."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "place_dcids": schema::string_list(
                    "DCIDs of the places to query, comma-separated or as an array"
                ),
                "variable_dcids": schema::string_list(
                    "DCIDs of the statistical variables, comma-separated or as an array"
                ),
                "date": schema::string_with_default(
                    "Observation date: LATEST or a year such as '2020'",
                    "LATEST"
                )
            }),
            &["place_dcids", "variable_dcids"],
        )
    }
}
