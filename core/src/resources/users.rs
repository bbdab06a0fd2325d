//! `/twitter/user*` endpoints.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::envelope::PagedResult;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::{
    ApiResponse, FollowRelationship, LatestTweetsOptions, MentionsQuery, PageOptions, Tweet, User,
    UserAbout,
};

impl TwitterApiClient {
    pub fn build_user_profile_about(&self, user_name: &str) -> HttpRequest {
        self.get("/twitter/user_about", QueryParams::new().param("userName", user_name))
    }

    pub fn parse_user_profile_about(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<UserAbout>, ApiError> {
        self.parse_json(response)
    }

    pub fn build_user_info(&self, user_name: &str) -> HttpRequest {
        self.get("/twitter/user/info", QueryParams::new().param("userName", user_name))
    }

    /// The profile is unwrapped from the `data` field.
    pub fn parse_user_info(&self, response: HttpResponse) -> Result<User, ApiError> {
        self.parse_json::<ApiResponse<User>>(response).map(|r| r.data)
    }

    pub fn build_batch_user_info<S: AsRef<str>>(
        &self,
        user_ids: &[S],
    ) -> Result<HttpRequest, ApiError> {
        if user_ids.is_empty() {
            return Err(ApiError::missing("at least one user id"));
        }
        Ok(self.get(
            "/twitter/user/batch_info_by_ids",
            QueryParams::new().list("userIds", user_ids),
        ))
    }

    pub fn parse_batch_user_info(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["users"])
    }

    /// ## Errors
    ///
    /// `Configuration` when neither `user_id` nor `user_name` is set.
    pub fn build_user_latest_tweets(
        &self,
        options: &LatestTweetsOptions,
    ) -> Result<HttpRequest, ApiError> {
        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !has(&options.user_id) && !has(&options.user_name) {
            return Err(ApiError::missing("either user_id or user_name"));
        }
        let query = QueryParams::new()
            .optional("userId", options.user_id.as_deref())
            .optional("userName", options.user_name.as_deref())
            .optional("cursor", options.cursor.as_deref())
            .number("pageSize", options.page_size.unwrap_or(crate::types::DEFAULT_PAGE_SIZE))
            .number("includeReplies", options.include_replies.unwrap_or(false));
        Ok(self.get("/twitter/user/latest_tweets", query))
    }

    /// Accepts both the flat and the `{status, msg, data}` envelope.
    pub fn parse_user_latest_tweets(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_user_followers(&self, user_name: &str, options: &PageOptions) -> HttpRequest {
        self.get("/twitter/user/followers", paged_user_query(user_name, options))
    }

    pub fn parse_user_followers(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["followers"])
    }

    pub fn build_user_followings(&self, user_name: &str, options: &PageOptions) -> HttpRequest {
        self.get("/twitter/user/followings", paged_user_query(user_name, options))
    }

    pub fn parse_user_followings(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["followings"])
    }

    pub fn build_user_mentions(&self, query: &MentionsQuery) -> HttpRequest {
        let params = QueryParams::new()
            .param("userName", query.user_name.as_str())
            .number("sinceTime", query.since_time)
            .number("untilTime", query.until_time)
            .optional("cursor", query.cursor.as_deref());
        self.get("/twitter/user/mentions", params)
    }

    /// Accepts both the flat and the `{status, msg, data}` envelope.
    pub fn parse_user_mentions(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_check_follow_relationship(
        &self,
        source_user_name: &str,
        target_user_name: &str,
    ) -> HttpRequest {
        let query = QueryParams::new()
            .param("source_user_name", source_user_name)
            .param("target_user_name", target_user_name);
        self.get("/twitter/user/check_follow_relationship", query)
    }

    pub fn parse_check_follow_relationship(
        &self,
        response: HttpResponse,
    ) -> Result<ApiResponse<FollowRelationship>, ApiError> {
        self.parse_json(response)
    }

    pub fn build_search_users(&self, query: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/user/search", QueryParams::new().param("query", query).cursor(cursor))
    }

    pub fn parse_search_users(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["users"])
    }

    pub fn build_user_verified_followers(
        &self,
        user_id: &str,
        cursor: Option<&str>,
    ) -> HttpRequest {
        self.get(
            "/twitter/user/verifiedFollowers",
            QueryParams::new().param("user_id", user_id).cursor(cursor),
        )
    }

    pub fn parse_user_verified_followers(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["followers"])
    }
}

fn paged_user_query(user_name: &str, options: &PageOptions) -> QueryParams {
    QueryParams::new()
        .param("userName", user_name)
        .cursor(options.cursor.as_deref())
        .number("pageSize", options.effective_page_size())
}

/// User lookups, timelines and social graph.
#[derive(Debug)]
pub struct UsersApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> UsersApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_user_profile_about(
        &self,
        user_name: &str,
    ) -> Result<ApiResponse<UserAbout>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_profile_about(user_name)).await?;
        client.parse_user_profile_about(response)
    }

    pub async fn get_user_info(&self, user_name: &str) -> Result<User, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_info(user_name)).await?;
        client.parse_user_info(response)
    }

    pub async fn batch_get_user_info_by_ids<S: AsRef<str> + Sync>(
        &self,
        user_ids: &[S],
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_batch_user_info(user_ids)?).await?;
        client.parse_batch_user_info(response)
    }

    /// Fails with `Configuration` before any request when neither a user id
    /// nor a user name is given.
    pub async fn get_user_latest_tweets(
        &self,
        options: &LatestTweetsOptions,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_latest_tweets(options)?).await?;
        client.parse_user_latest_tweets(response)
    }

    pub async fn get_user_followers(
        &self,
        user_name: &str,
        options: &PageOptions,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_followers(user_name, options)).await?;
        client.parse_user_followers(response)
    }

    pub async fn get_user_followings(
        &self,
        user_name: &str,
        options: &PageOptions,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_followings(user_name, options)).await?;
        client.parse_user_followings(response)
    }

    pub async fn get_user_mentions(
        &self,
        query: &MentionsQuery,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_mentions(query)).await?;
        client.parse_user_mentions(response)
    }

    pub async fn check_follow_relationship(
        &self,
        source_user_name: &str,
        target_user_name: &str,
    ) -> Result<ApiResponse<FollowRelationship>, ApiError> {
        let client = self.api.client();
        let request = client.build_check_follow_relationship(source_user_name, target_user_name);
        let response = self.api.execute(request).await?;
        client.parse_check_follow_relationship(response)
    }

    pub async fn search_users(
        &self,
        query: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_search_users(query, cursor)).await?;
        client.parse_search_users(response)
    }

    pub async fn get_user_verified_followers(
        &self,
        user_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_user_verified_followers(user_id, cursor)).await?;
        client.parse_user_verified_followers(response)
    }
}
