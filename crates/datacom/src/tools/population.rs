//! Tool fetching population counts

use async_trait::async_trait;
use datacom_core::Result as CoreResult;
use datacom_tools::{Tool, schema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

use crate::api::{DataCommonsClient, ObservationRequest, variables};
use crate::date::DateSelector;
use crate::normalize::{EntityPoints, latest_by_entity};
use crate::report::population_report;
use crate::tools::outcome::ToolOutcome;
use crate::tools::params::{DcidList, parse_params};

#[derive(Debug, Deserialize)]
struct PopulationParams {
    place_dcids: DcidList,
    #[serde(default)]
    date: DateSelector,
}

/// Population entry in the tool's data payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationCount {
    pub population: Option<Value>,
    pub date: Option<String>,
}

fn to_counts(points: EntityPoints) -> BTreeMap<String, PopulationCount> {
    points
        .into_iter()
        .map(|(entity, point)| {
            (
                entity,
                PopulationCount {
                    population: point.value,
                    date: point.date,
                },
            )
        })
        .collect()
}

/// Tool fetching `Count_Person` for one or more places
pub struct PopulationCountTool {
    client: DataCommonsClient,
}

impl PopulationCountTool {
    pub const NAME: &'static str = "get_population_count";

    pub fn new(client: DataCommonsClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, dcids: &DcidList, date: DateSelector) -> ToolOutcome {
        let request = ObservationRequest::new(dcids.as_slice().iter().cloned())
            .variables([variables::COUNT_PERSON])
            .date(date);

        match self.client.observation(&request).await {
            Ok(response) => {
                let points = latest_by_entity(&response, variables::COUNT_PERSON);
                let report = population_report(&points);
                ToolOutcome::success(report, json!(to_counts(points)))
            }
            Err(err) => {
                tracing::warn!(dcids = %dcids, error = %err, "Population query failed");
                ToolOutcome::error(format!("Error fetching population for {dcids}: {err}"))
            }
        }
    }
}

#[async_trait]
impl Tool for PopulationCountTool {
    async fn execute(&self, params: Value) -> CoreResult<Value> {
        let params: PopulationParams = parse_params(params)?;

        tracing::info!(
            tool = Self::NAME,
            dcids = %params.place_dcids,
            date = %params.date,
            "Executing tool"
        );
        Ok(self.run(&params.place_dcids, params.date).await.into_value())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Retrieve the population count (Count_Person) for one or more place DCIDs, \
         either the latest available value or the value for a given year."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "place_dcids": schema::string_list(
                    "DCIDs of the places to query, comma-separated or as an array"
                ),
                "date": schema::string_with_default(
                    "Observation date: LATEST or a year such as '2020'",
                    "LATEST"
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
    use crate::normalize::ObservationPoint;

    fn tool() -> PopulationCountTool {
        let config = DataCommonsConfig::builder().api_key("test_key").build().unwrap();
        PopulationCountTool::new(DataCommonsClient::new(config).unwrap())
    }

    #[test]
    fn test_tool_metadata() {
        let tool = tool();
        assert_eq!(tool.name(), "get_population_count");
        assert_eq!(tool.input_schema()["properties"]["date"]["default"], "LATEST");
    }

    #[test]
    fn test_to_counts() {
        let mut points = EntityPoints::new();
        points.insert(
            "geoId/06".to_string(),
            ObservationPoint {
                value: Some(json!(39_029_342)),
                date: Some("2022".to_string()),
            },
        );

        let counts = to_counts(points);
        assert_eq!(
            json!(counts),
            json!({ "geoId/06": { "population": 39_029_342, "date": "2022" } })
        );
    }

    #[tokio::test]
    async fn test_invalid_date() {
        let err = tool()
            .execute(json!({ "place_dcids": "geoId/06", "date": "last year" }))
            .await
            .unwrap_err();
        assert!(matches!(err, datacom_core::Error::InvalidParameters(_)));
    }
}
