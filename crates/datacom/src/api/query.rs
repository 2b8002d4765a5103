//! Structured query-string assembly

use crate::error::Result;
use url::Url;

/// Ordered list of query parameters
///
/// List values become repeated parameters (`a=1&a=2`). Escaping happens in
/// [`QueryBuilder::build`]; values are stored raw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append one parameter per value under the same key
    pub fn params<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.pairs
            .extend(values.into_iter().map(|v| (key.to_string(), v.into())));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Join `endpoint` onto `base_url` and attach the encoded query
    pub fn build(&self, base_url: &str, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        ))?;

        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.pairs);
        }
        Ok(url)
    }
}
