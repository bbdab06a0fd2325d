//! Async facade: the stateless client plus a transport.
//!
//! [`TwitterApi`] is cheap to clone and safe to share across tasks; every
//! call is an independent request with no ordering between concurrent calls.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{instrument, Span};

use crate::client::TwitterApiClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::resources::{
    AccountApi, CommunitiesApi, ListsApi, SpacesApi, StreamApi, TrendsApi, TweetsApi, UsersApi,
};
use crate::transport::{ReqwestTransport, Transport};

/// Entry point for calling the API.
///
/// ## Examples
///
/// ```rust,ignore
/// use twitterapi_core::{ClientConfig, LatestTweetsOptions, TwitterApi};
///
/// let api = TwitterApi::new(ClientConfig::from_env()?)?;
/// let page = api
///     .users()
///     .get_user_latest_tweets(&LatestTweetsOptions::by_name("VitalikButerin"))
///     .await?;
/// for tweet in &page.items {
///     println!("{}", tweet.text);
/// }
/// ```
pub struct TwitterApi<T = ReqwestTransport> {
    client: TwitterApiClient,
    transport: Arc<T>,
    cancel: Option<CancellationToken>,
}

impl<T> Clone for TwitterApi<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
            cancel: self.cancel.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TwitterApi<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterApi")
            .field("config", self.client.config())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl TwitterApi<ReqwestTransport> {
    /// Client backed by `reqwest`, honouring the configured timeout.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> TwitterApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: TwitterApiClient::new(config),
            transport: Arc::new(transport),
            cancel: None,
        }
    }

    /// A view of this client whose calls abort with `ApiError::Cancelled`
    /// once `token` fires. The transport is shared with `self`.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    /// The underlying request builder / response parser.
    pub fn client(&self) -> &TwitterApiClient {
        &self.client
    }

    /// Send one request. Non-2xx responses are returned, not raised.
    #[instrument(
        name = "twitterapi_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = %request.url,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("request cancelled");
                    return Err(ApiError::Cancelled);
                }
                result = self.transport.send(request) => result?,
            },
            None => self.transport.send(request).await?,
        };
        Span::current().record("http.status_code", response.status);
        if !response.is_success() {
            tracing::warn!(status = response.status, "non-success response");
        }
        Ok(response)
    }

    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi::new(self)
    }

    pub fn tweets(&self) -> TweetsApi<'_, T> {
        TweetsApi::new(self)
    }

    pub fn communities(&self) -> CommunitiesApi<'_, T> {
        CommunitiesApi::new(self)
    }

    pub fn lists(&self) -> ListsApi<'_, T> {
        ListsApi::new(self)
    }

    pub fn trends(&self) -> TrendsApi<'_, T> {
        TrendsApi::new(self)
    }

    pub fn spaces(&self) -> SpacesApi<'_, T> {
        SpacesApi::new(self)
    }

    pub fn stream(&self) -> StreamApi<'_, T> {
        StreamApi::new(self)
    }

    pub fn account(&self) -> AccountApi<'_, T> {
        AccountApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::types::LatestTweetsOptions;

    /// Counts calls and answers every request with the same canned response.
    struct SpyTransport {
        calls: AtomicUsize,
        status: u16,
        body: &'static str,
    }

    impl SpyTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                status,
                body,
            }
        }
    }

    #[async_trait]
    impl Transport for SpyTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.to_string(),
            })
        }
    }

    fn api(transport: SpyTransport) -> TwitterApi<SpyTransport> {
        TwitterApi::with_transport(ClientConfig::new("k"), transport)
    }

    #[tokio::test]
    async fn argument_errors_never_reach_the_transport() {
        let api = api(SpyTransport::new(200, "{}"));

        let err = api
            .users()
            .get_user_latest_tweets(&LatestTweetsOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));

        let err = api.tweets().get_tweets_by_ids::<&str>(&[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));

        assert_eq!(api.transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn clones_share_the_transport() {
        let api = api(SpyTransport::new(200, r#"{"recharge_credits":5,"total_bonus_credits":0}"#));
        let other = api.clone();

        api.account().get_my_account_info().await.unwrap();
        other.account().get_my_account_info().await.unwrap();

        assert_eq!(api.transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn cancelled_token_aborts_the_call() {
        let api = api(SpyTransport::new(200, "{}"));
        let token = CancellationToken::new();
        let cancellable = api.with_cancellation(token.clone());
        token.cancel();

        let err = cancellable.account().get_my_account_info().await.unwrap_err();
        assert!(matches!(err, ApiError::Cancelled));

        // The original view is unaffected.
        let info = api.account().get_my_account_info().await;
        assert!(!matches!(info, Err(ApiError::Cancelled)));
    }

    #[tokio::test]
    async fn non_success_is_returned_then_mapped() {
        let api = api(SpyTransport::new(503, "upstream down"));

        let response = api.execute(api.client().build_my_account_info()).await.unwrap();
        assert_eq!(response.status, 503);

        let err = api.account().get_my_account_info().await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn requests_are_traced() {
        let api = api(SpyTransport::new(500, ""));

        let _ = api.trends().get_trends(1).await;

        assert!(logs_contain("twitterapi_request"));
        assert!(logs_contain("/twitter/trends?woeid=1"));
        assert!(logs_contain("non-success response"));
    }

    #[test]
    fn debug_redacts_the_key() {
        let api = TwitterApi::with_transport(ClientConfig::new("secret-key"), SpyTransport::new(200, "{}"));
        let rendered = format!("{api:?}");
        assert!(rendered.contains("TwitterApi"));
        assert!(!rendered.contains("secret-key"));
    }
}
