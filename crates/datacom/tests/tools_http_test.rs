use datacom::{DataCommonsClient, DataCommonsConfig, DatacomAgent};
use httpmock::prelude::*;
use serde_json::{Value, json};

const API_KEY: &str = "test_key";

fn client_for(base_url: String) -> DataCommonsClient {
    let config = DataCommonsConfig::builder()
        .api_key(API_KEY)
        .base_url(base_url)
        .build()
        .unwrap();
    DataCommonsClient::new(config).unwrap()
}

fn standard(server: &MockServer) -> DatacomAgent {
    DatacomAgent::standard(client_for(server.url("/v2")))
}

fn observations(entries: Value) -> Value {
    json!({ "observations": entries })
}

#[tokio::test]
async fn test_get_dcid_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/resolve")
                .query_param("key", API_KEY)
                .query_param("nodes", "California")
                .query_param("property", "<-description->dcid");
            then.status(200).json_body(json!({
                "entities": [{
                    "node": "California",
                    "candidates": [{ "dcid": "geoId/06", "dominantType": "State" }]
                }]
            }));
        })
        .await;

    let out = standard(&server)
        .call("get_dcid", json!({ "place": "California" }))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(out["status"], "success");
    assert_eq!(out["report"], "DCID for California: geoId/06");
    assert_eq!(out["data"]["dcid"], "geoId/06");
}

#[tokio::test]
async fn test_get_dcid_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/resolve");
            then.status(200).json_body(json!({ "entities": [] }));
        })
        .await;

    let out = standard(&server)
        .call("get_dcid", json!({ "place": "Atlantis" }))
        .await
        .unwrap();

    assert_eq!(
        out,
        json!({ "status": "error", "error_message": "Could not find place data for 'Atlantis'" })
    );
}

#[tokio::test]
async fn test_population_count() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/observation")
                .query_param("key", API_KEY)
                .query_param("date", "2020")
                .query_param("entity.dcids", "geoId/06")
                .query_param("entity.dcids", "geoId/48")
                .query_param("variable.dcids", "Count_Person")
                .query_param("select", "value");
            then.status(200).json_body(json!({
                "byVariable": { "Count_Person": { "byEntity": {
                    "geoId/06": { "orderedFacets": [
                        observations(json!([{ "date": "2020", "value": 39_538_223 }])),
                        observations(json!([{ "date": "2020", "value": 39_501_653 }]))
                    ]},
                    "geoId/48": { "orderedFacets": [] }
                }}}
            }));
        })
        .await;

    let out = standard(&server)
        .call(
            "get_population_count",
            json!({ "place_dcids": "geoId/06, geoId/48", "date": "2020" }),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(out["status"], "success");
    assert_eq!(
        out["data"],
        json!({ "geoId/06": { "population": 39_538_223, "date": "2020" } })
    );
    assert_eq!(
        out["report"],
        "Population counts:\n\ngeoId/06: 39,538,223 (as of 2020)"
    );
}

#[tokio::test]
async fn test_population_count_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/observation")
                .query_param("date", "LATEST");
            then.status(200).json_body(json!({ "byVariable": {} }));
        })
        .await;

    let out = standard(&server)
        .call("get_population_count", json!({ "place_dcids": ["geoId/06"] }))
        .await
        .unwrap();

    assert_eq!(out["status"], "success");
    assert_eq!(out["data"], json!({}));
    assert!(
        out["report"]
            .as_str()
            .unwrap()
            .contains("No population data found for the requested places.")
    );
}

fn many_variables(count: usize) -> Value {
    let by_variable: serde_json::Map<String, Value> = (0..count)
        .map(|i| {
            (
                format!("Var_{i:02}"),
                json!({ "byEntity": { "country/USA": {} } }),
            )
        })
        .collect();
    json!({ "byVariable": by_variable })
}

#[tokio::test]
async fn test_available_variables_capped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/observation")
                .query_param("entity.dcids", "country/USA")
                .query_param("select", "entity")
                .query_param("select", "variable");
            then.status(200).json_body(many_variables(45));
        })
        .await;

    let standard_out = standard(&server)
        .call(
            "get_available_variables",
            json!({ "place_dcids": "country/USA,geoId/99" }),
        )
        .await
        .unwrap();
    assert_eq!(standard_out["status"], "success");
    assert_eq!(standard_out["data"]["country/USA"].as_array().unwrap().len(), 10);
    assert_eq!(standard_out["data"]["geoId/99"], json!([]));

    let report = standard_out["report"].as_str().unwrap();
    assert!(report.starts_with("Available variables (limited to first 10 per place):"));
    assert!(report.contains("No variables found for place geoId/99"));

    let extended = DatacomAgent::extended(client_for(server.url("/v2")));
    let extended_out = extended
        .call("get_available_variables", json!({ "place_dcids": "country/USA" }))
        .await
        .unwrap();
    assert_eq!(extended_out["data"]["country/USA"].as_array().unwrap().len(), 30);

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn test_available_variables_follow_response_order() {
    let variables: Vec<String> = (0..12)
        .rev()
        .map(|i| format!(r#""Z{i:02}": {{ "byEntity": {{ "country/USA": {{}} }} }}"#))
        .collect();
    let body = format!(r#"{{ "byVariable": {{ {} }} }}"#, variables.join(", "));

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/observation");
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;

    let out = standard(&server)
        .call("get_available_variables", json!({ "place_dcids": "country/USA" }))
        .await
        .unwrap();

    let expected: Vec<String> = (2..12).rev().map(|i| format!("Z{i:02}")).collect();
    assert_eq!(out["data"]["country/USA"], json!(expected));
}

#[tokio::test]
async fn test_observations_multi_variable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/observation")
                .query_param("variable.dcids", "Count_Person")
                .query_param("variable.dcids", "Median_Age_Person");
            then.status(200).json_body(json!({
                "byVariable": {
                    "Count_Person": { "byEntity": {
                        "geoId/06": { "orderedFacets": [observations(json!([{ "date": "2022", "value": 39_029_342 }]))] }
                    }},
                    "Median_Age_Person": { "byEntity": {
                        "geoId/06": { "orderedFacets": [observations(json!([{ "date": "2022", "value": 37.9 }]))] },
                        "geoId/48": { "orderedFacets": [observations(json!([]))] }
                    }}
                }
            }));
        })
        .await;

    let agent = DatacomAgent::extended(client_for(server.url("/v2")));
    let out = agent
        .call(
            "get_observations",
            json!({
                "place_dcids": ["geoId/06", "geoId/48"],
                "variable_dcids": "Count_Person,Median_Age_Person"
            }),
        )
        .await
        .unwrap();

    assert_eq!(out["status"], "success");
    assert_eq!(
        out["data"],
        json!({ "geoId/06": {
            "Count_Person": { "value": 39_029_342, "date": "2022" },
            "Median_Age_Person": { "value": 37.9, "date": "2022" }
        }})
    );
    let report = out["report"].as_str().unwrap();
    assert!(report.contains("  - Count_Person: 39,029,342 (as of 2022)"));
    assert!(!report.contains("geoId/48"));
}

#[tokio::test]
async fn test_http_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/observation");
            then.status(500).body("internal error");
        })
        .await;

    let out = standard(&server)
        .call("get_population_count", json!({ "place_dcids": "geoId/06,geoId/48" }))
        .await
        .unwrap();

    assert_eq!(out["status"], "error");
    let message = out["error_message"].as_str().unwrap();
    assert!(message.starts_with("Error fetching population for geoId/06,geoId/48:"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_observations_error_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/observation");
            then.status(503).body("unavailable");
        })
        .await;

    let agent = DatacomAgent::extended(client_for(server.url("/v2")));
    let out = agent
        .call(
            "get_observations",
            json!({ "place_dcids": "geoId/06,geoId/48", "variable_dcids": "Median_Age_Person" }),
        )
        .await
        .unwrap();

    assert_eq!(out["status"], "error");
    let message = out["error_message"].as_str().unwrap();
    assert!(message.starts_with("Error fetching observations for geoId/06,geoId/48: API returned 503"));
    assert!(!message.contains("Median_Age_Person"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on port 1
    let agent = DatacomAgent::standard(client_for("http://127.0.0.1:1/v2".to_string()));

    let out = agent
        .call("get_available_variables", json!({ "place_dcids": "geoId/06" }))
        .await
        .unwrap();

    assert_eq!(out["status"], "error");
    let message = out["error_message"].as_str().unwrap();
    assert!(message.contains("geoId/06"));
    assert!(!message.contains(API_KEY));

    let out = agent
        .call("get_dcid", json!({ "place": "California" }))
        .await
        .unwrap();
    assert_eq!(out["status"], "error");
    assert!(
        out["error_message"]
            .as_str()
            .unwrap()
            .starts_with("Error fetching dcid for California:")
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/observation");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let out = standard(&server)
        .call("get_population_count", json!({ "place_dcids": "geoId/06" }))
        .await
        .unwrap();

    assert_eq!(out["status"], "error");
    assert!(out["error_message"].as_str().unwrap().contains("JSON error"));
}
