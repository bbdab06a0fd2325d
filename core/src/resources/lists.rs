//! `/twitter/list/*` endpoints.

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::envelope::PagedResult;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::User;

impl TwitterApiClient {
    pub fn build_list_followers(&self, list_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/list/followers", list_query(list_id, cursor))
    }

    pub fn parse_list_followers(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["followers"])
    }

    pub fn build_list_members(&self, list_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/list/members", list_query(list_id, cursor))
    }

    pub fn parse_list_members(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["members"])
    }
}

fn list_query(list_id: &str, cursor: Option<&str>) -> QueryParams {
    QueryParams::new().param("list_id", list_id).cursor(cursor)
}

#[derive(Debug)]
pub struct ListsApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> ListsApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_list_followers(
        &self,
        list_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_list_followers(list_id, cursor)).await?;
        client.parse_list_followers(response)
    }

    pub async fn get_list_members(
        &self,
        list_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_list_members(list_id, cursor)).await?;
        client.parse_list_members(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> TwitterApiClient {
        TwitterApiClient::new(ClientConfig::new("k"))
    }

    #[test]
    fn followers_request() {
        let req = client().build_list_followers("952969346518720512", None);
        assert_eq!(
            req.url,
            "https://api.twitterapi.io/twitter/list/followers?list_id=952969346518720512&cursor="
        );
    }

    #[test]
    fn members_request_with_cursor() {
        let req = client().build_list_members("1", Some("abc"));
        assert_eq!(req.url, "https://api.twitterapi.io/twitter/list/members?list_id=1&cursor=abc");
    }

    #[test]
    fn members_page_uses_msg_as_message() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{
                "members": [{ "id": "1" }],
                "has_next_page": false,
                "next_cursor": "",
                "status": "success",
                "msg": "done"
            }"#
            .to_string(),
        };
        let page = client().parse_list_members(response).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.message.as_deref(), Some("done"));
        assert_eq!(page.next_page_cursor(), None);
    }
}
