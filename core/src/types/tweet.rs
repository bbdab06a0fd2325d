use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tweet {
    #[serde(rename = "type", deserialize_with = "super::null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub text: String,
    pub source: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub retweet_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub reply_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub quote_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub bookmark_count: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub created_at: String,
    pub lang: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_reply: bool,
    pub in_reply_to_id: Option<String>,
    pub conversation_id: Option<String>,
    pub display_text_range: Option<Vec<u32>>,
    pub in_reply_to_user_id: Option<String>,
    pub in_reply_to_username: Option<String>,
    pub author: Option<User>,
    pub entities: Option<TweetEntities>,
    #[serde(rename = "quoted_tweet")]
    pub quoted_tweet: Option<Value>,
    #[serde(rename = "retweeted_tweet")]
    pub retweeted_tweet: Option<Value>,
    pub is_limited_reply: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetEntities {
    #[serde(deserialize_with = "super::null_as_default")]
    pub hashtags: Vec<Hashtag>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub urls: Vec<UrlEntity>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_mentions: Vec<UserMention>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hashtag {
    #[serde(deserialize_with = "super::null_as_default")]
    pub indices: Vec<u32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlEntity {
    #[serde(deserialize_with = "super::null_as_default")]
    pub display_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expanded_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub indices: Vec<u32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMention {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id_str: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub screen_name: String,
}

/// Long-form article attached to a tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    pub preview_text: Option<String>,
    pub cover_media_img_url: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub contents: Vec<Value>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(
        rename = "likeCount",
        alias = "like_count",
        deserialize_with = "super::null_as_default"
    )]
    pub like_count: u64,
    #[serde(
        rename = "viewCount",
        alias = "view_count",
        deserialize_with = "super::null_as_default"
    )]
    pub view_count: u64,
    pub author: Option<User>,
}

/// Response of `/twitter/article`. The article sits at the top level or
/// under `data`, depending on the upstream deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleResponse {
    pub article: Option<Article>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    pub message: Option<String>,
    pub msg: Option<String>,
}

impl ArticleResponse {
    /// `message`, falling back to `msg`.
    pub fn status_message(&self) -> Option<&str> {
        super::first_message(&self.message, &self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tweet_with_author_and_entities() {
        let tweet: Tweet = serde_json::from_value(serde_json::json!({
            "type": "tweet",
            "id": "2004124313679548708",
            "text": "gm #ethereum",
            "likeCount": 12,
            "isReply": false,
            "createdAt": "Mon Jan 05 10:00:00 +0000 2026",
            "author": { "id": "295218901", "userName": "VitalikButerin" },
            "entities": { "hashtags": [{ "indices": [3, 12], "text": "ethereum" }] },
            "quoted_tweet": null
        }))
        .unwrap();
        assert_eq!(tweet.like_count, 12);
        assert_eq!(tweet.author.unwrap().user_name, "VitalikButerin");
        assert_eq!(tweet.entities.unwrap().hashtags[0].text, "ethereum");
        assert!(tweet.quoted_tweet.is_none());
    }
}
