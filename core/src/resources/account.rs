//! `/oapi/my/info`.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::AccountInfo;

impl TwitterApiClient {
    pub fn build_my_account_info(&self) -> HttpRequest {
        self.get("/oapi/my/info", QueryParams::new())
    }

    pub fn parse_my_account_info(&self, response: HttpResponse) -> Result<AccountInfo, ApiError> {
        self.parse_json(response)
    }
}

#[derive(Debug)]
pub struct AccountApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> AccountApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    /// Credit balance of the account that owns the API key.
    pub async fn get_my_account_info(&self) -> Result<AccountInfo, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_my_account_info()).await?;
        client.parse_my_account_info(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn account_info_round_trip() {
        let client = TwitterApiClient::new(ClientConfig::new("k"));
        let req = client.build_my_account_info();
        assert_eq!(req.url, "https://api.twitterapi.io/oapi/my/info");
        assert_eq!(req.header("x-api-key"), Some("k"));

        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"recharge_credits":1200,"total_bonus_credits":30}"#.to_string(),
        };
        let info = client.parse_my_account_info(response).unwrap();
        assert_eq!(info.recharge_credits, 1200);
        assert_eq!(info.total_bonus_credits, 30);
    }

    #[test]
    fn missing_credit_fields_default_to_zero() {
        let client = TwitterApiClient::new(ClientConfig::new("k"));
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "{}".to_string(),
        };
        assert_eq!(client.parse_my_account_info(response).unwrap().recharge_credits, 0);
    }
}
