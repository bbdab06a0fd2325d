//! `/oapi/x_user_stream/*`: registers accounts for tweet monitoring.
//! Delivery of the monitored tweets happens elsewhere.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{MonitorUserRequest, StreamResponse};

impl TwitterApiClient {
    pub fn build_add_user_to_monitor(&self, x_user_name: &str) -> Result<HttpRequest, ApiError> {
        self.post_json(
            "/oapi/x_user_stream/add_user_to_monitor_tweet",
            &MonitorUserRequest {
                x_user_name: x_user_name.to_string(),
            },
        )
    }

    pub fn build_remove_user_from_monitor(
        &self,
        x_user_name: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.post_json(
            "/oapi/x_user_stream/remove_user_from_monitor_tweet",
            &MonitorUserRequest {
                x_user_name: x_user_name.to_string(),
            },
        )
    }

    pub fn parse_stream_response(
        &self,
        response: HttpResponse,
    ) -> Result<StreamResponse, ApiError> {
        self.parse_json(response)
    }
}

#[derive(Debug)]
pub struct StreamApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> StreamApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn add_user_to_monitor(&self, x_user_name: &str) -> Result<StreamResponse, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_add_user_to_monitor(x_user_name)?).await?;
        client.parse_stream_response(response)
    }

    pub async fn remove_user_from_monitor(
        &self,
        x_user_name: &str,
    ) -> Result<StreamResponse, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_remove_user_from_monitor(x_user_name)?).await?;
        client.parse_stream_response(response)
    }
}
