//! Domain DTOs for the twitterapi.io API.
//!
//! # Design
//! Records mirror the upstream JSON field names through serde renames and
//! decode leniently: fields the API is known to omit or null out are
//! `Option`s or fall back to `Default`. Nothing here is validated beyond
//! what deserialization enforces.

mod account;
mod community;
mod options;
mod space;
mod stream;
mod trend;
mod tweet;
mod user;

use serde::{Deserialize, Deserializer, Serialize};

pub use account::AccountInfo;
pub use community::{Community, CommunityInfo};
pub use options::{
    LatestTweetsOptions, MentionsQuery, PageOptions, QueryType, SearchOptions, DEFAULT_PAGE_SIZE,
};
pub use space::{Space, SpaceDetail};
pub use stream::{MonitorUserRequest, StreamResponse, StreamStatus};
pub use trend::{Trend, TrendLocation, TrendsResponse};
pub use tweet::{
    Article, ArticleResponse, Hashtag, Tweet, TweetEntities, UrlEntity, UserMention,
};
pub use user::{
    FollowRelationship, ProfileBio, ProfileBioEntities, ProfileUrls, User, UserAbout,
};

/// `{ data, status, msg }` wrapper used by single-record endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> ApiResponse<T> {
    /// `message`, falling back to `msg`.
    pub fn status_message(&self) -> Option<&str> {
        first_message(&self.message, &self.msg)
    }
}

/// Decode `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Upstream says `message` on some endpoints and `msg` on others, sometimes both.
pub(crate) fn first_message<'a>(
    message: &'a Option<String>,
    msg: &'a Option<String>,
) -> Option<&'a str> {
    [message, msg]
        .into_iter()
        .filter_map(|m| m.as_deref())
        .find(|m| !m.is_empty())
}
