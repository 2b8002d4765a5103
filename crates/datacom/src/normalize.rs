//! Observation response normalization
//!
//! Walks `variable -> entity -> orderedFacets[0] -> observations[0]` and
//! flattens the result. Missing or empty levels are skipped; nothing here
//! can fail.

use crate::api::model::{EntityEntry, ObservationResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value and date of the observation chosen for one (entity, variable) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub value: Option<Value>,
    pub date: Option<String>,
}

/// entity -> point, for a single variable
pub type EntityPoints = BTreeMap<String, ObservationPoint>;

/// entity -> variable -> point
pub type EntityVariablePoints = BTreeMap<String, BTreeMap<String, ObservationPoint>>;

fn point(entry: &EntityEntry) -> Option<ObservationPoint> {
    entry.first_observation().map(|obs| ObservationPoint {
        value: obs.value.clone(),
        date: obs.date.clone(),
    })
}

/// Latest point per entity for one variable
pub fn latest_by_entity(response: &ObservationResponse, variable: &str) -> EntityPoints {
    let Some(entry) = response.by_variable.get(variable) else {
        return EntityPoints::new();
    };

    entry
        .by_entity
        .iter()
        .filter_map(|(entity, data)| point(data).map(|p| (entity.clone(), p)))
        .collect()
}

/// Latest point per entity and variable, for every variable in the response
pub fn latest_by_entity_variable(response: &ObservationResponse) -> EntityVariablePoints {
    let mut result = EntityVariablePoints::new();

    for (variable, entry) in &response.by_variable {
        for (entity, data) in &entry.by_entity {
            if let Some(p) = point(data) {
                result
                    .entry(entity.clone())
                    .or_default()
                    .insert(variable.clone(), p);
            }
        }
    }

    result
}

/// Variables with data for each requested entity, at most `cap` per entity
///
/// Variables are taken in response order, so the cap keeps the first `cap`
/// the API listed. Every requested entity is present in the output, with an empty list when
/// the response has nothing for it. Entities the caller did not ask for are
/// ignored.
pub fn variables_by_entity(
    response: &ObservationResponse,
    entities: &[String],
    cap: usize,
) -> BTreeMap<String, Vec<String>> {
    let mut result: BTreeMap<String, Vec<String>> = entities
        .iter()
        .map(|entity| (entity.clone(), Vec::new()))
        .collect();

    for (variable, entry) in &response.by_variable {
        for entity in entry.by_entity.keys() {
            if let Some(found) = result.get_mut(entity) {
                found.push(variable.clone());
            }
        }
    }

    for found in result.values_mut() {
        found.truncate(cap);
    }

    result
}
