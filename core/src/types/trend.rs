use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trend {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub url: Option<String>,
    pub query: Option<String>,
    pub promoted_content: Option<Value>,
    pub tweet_volume: Option<u64>,
}

/// A place trends can be requested for, keyed by WOEID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendLocation {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub woeid: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsResponse {
    #[serde(deserialize_with = "super::null_as_default")]
    pub trends: Vec<Trend>,
    pub as_of: Option<String>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub locations: Vec<TrendLocation>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    pub message: Option<String>,
    pub msg: Option<String>,
}

impl TrendsResponse {
    /// `message`, falling back to `msg`.
    pub fn status_message(&self) -> Option<&str> {
        super::first_message(&self.message, &self.msg)
    }
}
