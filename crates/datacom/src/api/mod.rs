//! Data Commons API access

pub mod client;
pub mod model;
pub mod query;

pub use client::{DataCommonsClient, ObservationRequest, Select, variables};
pub use model::{
    Candidate, EntityEntry, Facet, Observation, ObservationResponse, ResolveResponse,
    ResolvedEntity, VariableEntry,
};
pub use query::QueryBuilder;
