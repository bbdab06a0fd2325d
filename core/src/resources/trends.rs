//! `/twitter/trends`.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::TrendsResponse;

impl TwitterApiClient {
    /// `woeid` is a Where-On-Earth id; `1` is worldwide.
    pub fn build_trends(&self, woeid: i64) -> HttpRequest {
        self.get("/twitter/trends", QueryParams::new().number("woeid", woeid))
    }

    pub fn parse_trends(&self, response: HttpResponse) -> Result<TrendsResponse, ApiError> {
        self.parse_json(response)
    }
}

#[derive(Debug)]
pub struct TrendsApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> TrendsApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_trends(&self, woeid: i64) -> Result<TrendsResponse, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_trends(woeid)).await?;
        client.parse_trends(response)
    }
}
