use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    #[serde(alias = "community_id", deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub member_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moderator_count: u64,
    pub created_at: Option<String>,
    pub rules: Option<Vec<String>>,
    pub banner_image: Option<String>,
    pub profile_image: Option<String>,
}

/// Response of `/twitter/community/info`: the community fields inline,
/// next to the request status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityInfo {
    #[serde(flatten)]
    pub community: Community,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl CommunityInfo {
    /// `message`, falling back to `msg`.
    pub fn status_message(&self) -> Option<&str> {
        super::first_message(&self.message, &self.msg)
    }
}
