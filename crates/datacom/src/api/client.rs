//! Data Commons REST API (v2) client
//!
//! API Key: free registration at https://apikeys.datacommons.org
//!
//! Every call issues exactly one GET and waits for it; there is no retry
//! and no caching.

use crate::api::model::{ObservationResponse, ResolveResponse};
use crate::api::query::QueryBuilder;
use crate::config::DataCommonsConfig;
use crate::date::DateSelector;
use crate::error::{DataCommonsError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Resolve property mapping a free-text description to a DCID
pub const DESCRIPTION_TO_DCID: &str = "<-description->dcid";

/// Statistical variable DCIDs
pub mod variables {
    /// Total population
    pub const COUNT_PERSON: &str = "Count_Person";
}

/// Fields the observation endpoint should return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Select {
    Entity,
    Variable,
    Value,
    Date,
}

impl Select {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Variable => "variable",
            Self::Value => "value",
            Self::Date => "date",
        }
    }

    /// Discovery only: which variables exist per entity
    pub const DISCOVERY: [Select; 2] = [Select::Entity, Select::Variable];

    /// Values with their dates
    pub const VALUES: [Select; 4] = [Select::Entity, Select::Variable, Select::Value, Select::Date];
}

/// Parameters of an observation query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationRequest {
    pub entities: Vec<String>,
    pub variables: Vec<String>,
    pub date: DateSelector,
    pub select: Vec<Select>,
}

impl ObservationRequest {
    /// Value query for `entities` with the latest date
    pub fn new<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            variables: Vec::new(),
            date: DateSelector::Latest,
            select: Select::VALUES.to_vec(),
        }
    }

    pub fn variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }

    pub fn date(mut self, date: DateSelector) -> Self {
        self.date = date;
        self
    }

    pub fn select(mut self, select: &[Select]) -> Self {
        self.select = select.to_vec();
        self
    }

    fn to_query(&self, api_key: &str) -> QueryBuilder {
        QueryBuilder::new()
            .param("key", api_key)
            .param("date", self.date.as_query_value())
            .params("entity.dcids", self.entities.iter().map(String::as_str))
            .params("variable.dcids", self.variables.iter().map(String::as_str))
            .params("select", self.select.iter().map(|s| s.as_str()))
    }
}

/// Data Commons API client
///
/// The credential is fixed at construction; clone the client to share it.
#[derive(Clone)]
pub struct DataCommonsClient {
    client: Client,
    config: Arc<DataCommonsConfig>,
}

impl DataCommonsClient {
    /// Create a new client from validated configuration
    pub fn new(config: DataCommonsConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment variable DATCOM_API_KEY
    pub fn from_env() -> Result<Self> {
        Self::new(DataCommonsConfig::from_env()?)
    }

    pub fn config(&self) -> &DataCommonsConfig {
        &self.config
    }

    /// Resolve a place description to candidate DCIDs
    pub async fn resolve(&self, place: &str) -> Result<ResolveResponse> {
        let url = QueryBuilder::new()
            .param("key", self.config.api_key.as_str())
            .param("nodes", place)
            .param("property", DESCRIPTION_TO_DCID)
            .build(&self.config.base_url, "resolve")?;

        tracing::debug!(place, "Resolving place");
        self.get_json(url).await
    }

    /// Resolve a place to its first candidate DCID
    pub async fn resolve_dcid(&self, place: &str) -> Result<String> {
        let response = self.resolve(place).await?;
        response
            .first_dcid()
            .map(str::to_string)
            .ok_or_else(|| DataCommonsError::PlaceNotFound(place.to_string()))
    }

    /// Fetch observations
    pub async fn observation(&self, request: &ObservationRequest) -> Result<ObservationResponse> {
        let url = request
            .to_query(&self.config.api_key)
            .build(&self.config.base_url, "observation")?;

        tracing::debug!(
            entities = request.entities.len(),
            variables = request.variables.len(),
            date = %request.date,
            "Fetching observations"
        );
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        // without_url keeps the API key out of error messages
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataCommonsError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataCommonsError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DataCommonsError::Http(e.without_url()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
