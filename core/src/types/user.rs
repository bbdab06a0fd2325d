use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user profile as returned by user, follower and member endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "type", deserialize_with = "super::null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_blue_verified: bool,
    pub verified_type: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_picture: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub followers: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub following: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub can_dm: bool,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub favourites_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub has_custom_timelines: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_translator: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub media_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub statuses_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub withheld_in_countries: Vec<String>,
    pub affiliates_highlighted_label: Option<Value>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub possibly_sensitive: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pinned_tweet_ids: Vec<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_automated: bool,
    pub automated_by: Option<String>,
    pub unavailable: Option<bool>,
    pub message: Option<String>,
    pub unavailable_reason: Option<String>,
    #[serde(rename = "profile_bio")]
    pub profile_bio: Option<ProfileBio>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileBio {
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub entities: ProfileBioEntities,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileBioEntities {
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: ProfileUrls,
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: ProfileUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUrls {
    #[serde(deserialize_with = "super::null_as_default")]
    pub urls: Vec<super::UrlEntity>,
}

/// Account-level "about" details from `/twitter/user_about`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAbout {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_blue_verified: bool,
    pub protected: Option<bool>,
    pub affiliates_highlighted_label: Option<Value>,
    pub about_profile: Option<Value>,
}

/// Whether `source` follows `target` and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowRelationship {
    #[serde(deserialize_with = "super::null_as_default")]
    pub following: bool,
    #[serde(deserialize_with = "super::null_as_default")]
    pub followed_by: bool,
}
