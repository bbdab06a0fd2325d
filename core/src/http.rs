//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `TwitterApiClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network; a `Transport` (or any host code) is
//! responsible for executing the round-trip in between.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! async tasks without lifetime concerns.

use strum::{AsRefStr, Display};

/// Name of the header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP method for a request. The upstream API only uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a query parameter, decoded. `None` when the parameter is absent.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let parsed = url::Url::parse(&self.url).ok()?;
        parsed
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// passed to `TwitterApiClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: vec![(API_KEY_HEADER.to_string(), "k".to_string())],
            body: None,
        }
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_ref(), "POST");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request("https://api.twitterapi.io/oapi/my/info");
        assert_eq!(req.header("x-api-key"), Some("k"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn query_param_distinguishes_empty_from_absent() {
        let req = request("https://api.twitterapi.io/twitter/search?query=rust+lang&cursor=");
        assert_eq!(req.query_param("query").as_deref(), Some("rust lang"));
        assert_eq!(req.query_param("cursor").as_deref(), Some(""));
        assert_eq!(req.query_param("pageSize"), None);
    }

    #[test]
    fn success_covers_2xx_only() {
        let ok = HttpResponse { status: 204, headers: Vec::new(), body: String::new() };
        let redirect = HttpResponse { status: 302, headers: Vec::new(), body: String::new() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }
}
