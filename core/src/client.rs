//! Stateless HTTP request builder and response parser for the twitterapi.io API.
//!
//! # Design
//! `TwitterApiClient` holds only the immutable credentials and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`; the per-resource pairs live in `crate::resources`.
//! Executing the round-trip is left to a `Transport`, keeping this layer
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::envelope::{self, PagedResult};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, API_KEY_HEADER};
use crate::query::QueryParams;

/// Synchronous, stateless client for the twitterapi.io API.
#[derive(Debug, Clone)]
pub struct TwitterApiClient {
    config: ClientConfig,
}

impl TwitterApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` with the given query. An empty query adds no `?`.
    pub(crate) fn get(&self, path: &str, query: QueryParams) -> HttpRequest {
        let url = if query.is_empty() {
            format!("{}{path}", self.config.base_url())
        } else {
            format!("{}{path}?{}", self.config.base_url(), query.encode())
        };
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: self.headers(&[]),
            body: None,
        }
    }

    /// POST `body` as JSON to `path`.
    pub(crate) fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.config.base_url()),
            headers: self.headers(&[("Content-Type", "application/json")]),
            body: Some(body),
        })
    }

    /// The fixed API-key header followed by any caller-supplied headers.
    fn headers(&self, extra: &[(&str, &str)]) -> Vec<(String, String)> {
        std::iter::once((API_KEY_HEADER, self.config.api_key()))
            .chain(extra.iter().copied())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Decode a 2xx body as `T` without further validation.
    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Decode a 2xx list body and normalize its envelope. `list_keys` names
    /// the field(s) that may hold the list, in preference order.
    pub fn parse_page<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
        list_keys: &[&str],
    ) -> Result<PagedResult<T>, ApiError> {
        let value: serde_json::Value = self.parse_json(response)?;
        envelope::normalize(value, list_keys).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx status codes to `HttpError` carrying the reason phrase.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let status_text = reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
        .to_string();
    Err(ApiError::HttpError {
        status: response.status,
        status_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TwitterApiClient {
        let config = ClientConfig::builder("test-key")
            .base_url("http://localhost:3000")
            .build()
            .unwrap();
        TwitterApiClient::new(config)
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn get_without_query_has_no_question_mark() {
        let req = client().get("/oapi/my/info", QueryParams::new());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/oapi/my/info");
        assert!(req.body.is_none());
    }

    #[test]
    fn every_request_carries_the_api_key() {
        let req = client().get("/twitter/trends", QueryParams::new().number("woeid", 1));
        assert_eq!(
            req.headers,
            vec![("X-API-Key".to_string(), "test-key".to_string())]
        );
        assert_eq!(req.url, "http://localhost:3000/twitter/trends?woeid=1");
    }

    #[test]
    fn post_json_adds_content_type_after_api_key() {
        let req = client()
            .post_json(
                "/oapi/x_user_stream/add_user_to_monitor_tweet",
                &serde_json::json!({"x_user_name": "a"}),
            )
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.headers,
            vec![
                ("X-API-Key".to_string(), "test-key".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ]
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"x_user_name":"a"}"#));
    }

    #[test]
    fn non_2xx_carries_reason_phrase() {
        let err = client()
            .parse_json::<serde_json::Value>(response(401, r#"{"error":"bad key"}"#))
            .unwrap_err();
        match err {
            ApiError::HttpError { status, status_text } => {
                assert_eq!(status, 401);
                assert_eq!(status_text, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn server_errors_are_not_distinguished() {
        let err = client().parse_json::<serde_json::Value>(response(503, "")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn malformed_body_is_a_deserialization_error() {
        let err = client().parse_json::<serde_json::Value>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_page_normalizes_wrapped_bodies() {
        let body = r#"{
            "status": "success",
            "msg": "ok",
            "data": { "tweets": [{ "id": "1" }], "has_next_page": true, "next_cursor": "c2" }
        }"#;
        let page: PagedResult<crate::Tweet> =
            client().parse_page(response(200, body), &["tweets"]).unwrap();
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.next_cursor, "c2");
        assert_eq!(page.message.as_deref(), Some("ok"));
    }
}
