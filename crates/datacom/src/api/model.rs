//! Typed records for Data Commons v2 responses
//!
//! Only the fields the tools read are modelled. Every collection defaults to
//! empty so a sparse response deserializes instead of failing. Keyed maps
//! keep the order the API sent them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /v2/observation`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationResponse {
    /// variable dcid -> per-entity data
    #[serde(default)]
    pub by_variable: IndexMap<String, VariableEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableEntry {
    /// entity dcid -> facets
    #[serde(default)]
    pub by_entity: IndexMap<String, EntityEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityEntry {
    /// Facets in the API's preference order; index 0 is authoritative
    #[serde(default)]
    pub ordered_facets: Vec<Facet>,
}

impl EntityEntry {
    /// First observation of the first facet, if both exist
    pub fn first_observation(&self) -> Option<&Observation> {
        match self.ordered_facets.as_slice() {
            [facet, ..] => facet.observations.first(),
            [] => None,
        }
    }
}

/// One provenance source of observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    #[serde(default)]
    pub facet_id: Option<String>,
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub obs_count: Option<u64>,
    #[serde(default)]
    pub earliest_date: Option<String>,
    #[serde(default)]
    pub latest_date: Option<String>,
}

/// A single dated data point
///
/// `value` keeps whatever JSON the API sent; no numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Response of `GET /v2/resolve`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub entities: Vec<ResolvedEntity>,
}

impl ResolveResponse {
    /// First candidate of the first resolved node
    pub fn first_dcid(&self) -> Option<&str> {
        self.entities
            .iter()
            .find_map(|entity| entity.candidates.first())
            .map(|candidate| candidate.dcid.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub dcid: String,
    #[serde(default)]
    pub dominant_type: Option<String>,
}
