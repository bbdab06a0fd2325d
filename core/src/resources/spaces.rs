//! `/twitter/space/detail`.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::SpaceDetail;

impl TwitterApiClient {
    pub fn build_space_detail(&self, space_id: &str) -> HttpRequest {
        self.get("/twitter/space/detail", QueryParams::new().param("space_id", space_id))
    }

    pub fn parse_space_detail(&self, response: HttpResponse) -> Result<SpaceDetail, ApiError> {
        self.parse_json(response)
    }
}

#[derive(Debug)]
pub struct SpacesApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> SpacesApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_space_detail(&self, space_id: &str) -> Result<SpaceDetail, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_space_detail(space_id)).await?;
        client.parse_space_detail(response)
    }
}
