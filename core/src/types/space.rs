use serde::{Deserialize, Serialize};

use super::User;

/// An audio space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    #[serde(alias = "space_id", deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub state: String,
    pub title: Option<String>,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub updated_at: Option<String>,
    pub scheduled_start: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub host_ids: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub speaker_ids: Vec<String>,
    pub creator_id: Option<String>,
    pub lang: Option<String>,
    pub is_ticketed: Option<bool>,
    pub participant_count: Option<u64>,
    pub subscriber_count: Option<u64>,
    pub creator: Option<User>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hosts: Vec<User>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub speakers: Vec<User>,
}

/// Response of `/twitter/space/detail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceDetail {
    #[serde(flatten)]
    pub space: Space,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl SpaceDetail {
    /// `message`, falling back to `msg`.
    pub fn status_message(&self) -> Option<&str> {
        super::first_message(&self.message, &self.msg)
    }
}
