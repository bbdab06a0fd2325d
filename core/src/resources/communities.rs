//! `/twitter/community/*` endpoints.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::envelope::PagedResult;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::{CommunityInfo, SearchOptions, Tweet, User};

use super::tweets::search_query;

impl TwitterApiClient {
    pub fn build_community_info(&self, community_id: &str) -> HttpRequest {
        self.get("/twitter/community/info", community_query(community_id))
    }

    pub fn parse_community_info(&self, response: HttpResponse) -> Result<CommunityInfo, ApiError> {
        self.parse_json(response)
    }

    pub fn build_community_members(&self, community_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/community/members", community_query(community_id).cursor(cursor))
    }

    pub fn parse_community_members(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["members"])
    }

    pub fn build_community_moderators(
        &self,
        community_id: &str,
        cursor: Option<&str>,
    ) -> HttpRequest {
        self.get("/twitter/community/moderators", community_query(community_id).cursor(cursor))
    }

    pub fn parse_community_moderators(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["moderators"])
    }

    pub fn build_community_tweets(&self, community_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/community/tweets", community_query(community_id).cursor(cursor))
    }

    pub fn parse_community_tweets(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_search_community_tweets(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> HttpRequest {
        self.get("/twitter/community/search", search_query(query, options))
    }

    pub fn parse_search_community_tweets(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }
}

fn community_query(community_id: &str) -> QueryParams {
    QueryParams::new().param("community_id", community_id)
}

/// Community metadata, membership and timelines.
#[derive(Debug)]
pub struct CommunitiesApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> CommunitiesApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_community_info(&self, community_id: &str) -> Result<CommunityInfo, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_community_info(community_id)).await?;
        client.parse_community_info(response)
    }

    pub async fn get_community_members(
        &self,
        community_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_community_members(community_id, cursor)).await?;
        client.parse_community_members(response)
    }

    pub async fn get_community_moderators(
        &self,
        community_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_community_moderators(community_id, cursor)).await?;
        client.parse_community_moderators(response)
    }

    pub async fn get_community_tweets(
        &self,
        community_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_community_tweets(community_id, cursor)).await?;
        client.parse_community_tweets(response)
    }

    pub async fn search_community_tweets(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_search_community_tweets(query, options)).await?;
        client.parse_search_community_tweets(response)
    }
}
