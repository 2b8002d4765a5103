//! Shared tool parameter types

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Deserialize tool input, mapping failures to `InvalidParameters`
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> datacom_core::Result<T> {
    serde_json::from_value(params)
        .map_err(|e| datacom_core::Error::InvalidParameters(e.to_string()))
}

/// One or more DCIDs, given as `"a, b"` or `["a", "b"]`
///
/// Entries are trimmed and blanks dropped; at least one must remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcidList(Vec<String>);

impl DcidList {
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_items(raw.split(','))
    }

    fn from_items<I, S>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();

        (!ids.is_empty()).then_some(Self(ids))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for DcidList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl Serialize for DcidList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DcidList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Joined(String),
            Items(Vec<String>),
        }

        let list = match Raw::deserialize(deserializer)? {
            Raw::Joined(joined) => Self::parse(&joined),
            Raw::Items(items) => Self::from_items(items),
        };
        list.ok_or_else(|| serde::de::Error::custom("at least one DCID is required"))
    }
}
