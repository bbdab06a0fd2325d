//! Per-method option structs. Every field has a documented default so
//! callers only set what they need.

use strum::{AsRefStr, Display, EnumString};

/// Page size sent when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Cursor and page size for follower-style listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Opaque cursor from a previous page; `None` sends `cursor=`.
    pub cursor: Option<String>,
    /// Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: Option<u32>,
}

impl PageOptions {
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::default()
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn effective_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Arguments for `/twitter/user/latest_tweets`. One of `user_id` or
/// `user_name` must be set; `user_id` wins upstream when both are.
///
/// Whitespace-only values count as unset: they are dropped from the query,
/// so a request carrying only blank identifiers is rejected before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestTweetsOptions {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    /// Omitted from the query when absent or blank.
    pub cursor: Option<String>,
    /// Defaults to [`DEFAULT_PAGE_SIZE`].
    pub page_size: Option<u32>,
    /// Defaults to `false`.
    pub include_replies: Option<bool>,
}

impl LatestTweetsOptions {
    pub fn by_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn by_name(user_name: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            ..Self::default()
        }
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn include_replies(mut self, include_replies: bool) -> Self {
        self.include_replies = Some(include_replies);
        self
    }
}

/// Arguments for `/twitter/user/mentions`. Times are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionsQuery {
    pub user_name: String,
    pub since_time: i64,
    pub until_time: i64,
    /// Omitted from the query when absent or blank.
    pub cursor: Option<String>,
}

impl MentionsQuery {
    pub fn new(user_name: impl Into<String>, since_time: i64, until_time: i64) -> Self {
        Self {
            user_name: user_name.into(),
            since_time,
            until_time,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Result ordering for tweet search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum QueryType {
    #[default]
    Latest,
    Top,
}

/// Arguments shared by tweet and community search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Defaults to [`QueryType::Latest`].
    pub query_type: QueryType,
    /// `None` sends `cursor=`.
    pub cursor: Option<String>,
}

impl SearchOptions {
    pub fn top() -> Self {
        Self {
            query_type: QueryType::Top,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn query_type_wire_names() {
        assert_eq!(QueryType::default().as_ref(), "latest");
        assert_eq!(QueryType::Top.to_string(), "top");
        assert_eq!(QueryType::from_str("top").unwrap(), QueryType::Top);
    }

    #[test]
    fn page_size_defaults_to_200() {
        assert_eq!(PageOptions::default().effective_page_size(), 200);
        assert_eq!(PageOptions::after("c").page_size(50).effective_page_size(), 50);
    }
}
