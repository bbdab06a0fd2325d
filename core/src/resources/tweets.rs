//! `/twitter/tweet/*`, `/twitter/article` and `/twitter/search`.

use serde_json::Value;

use crate::api::TwitterApi;
use crate::client::TwitterApiClient;
use crate::envelope::PagedResult;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::{ArticleResponse, SearchOptions, Tweet, User};

impl TwitterApiClient {
    pub fn build_tweets_by_ids<S: AsRef<str>>(
        &self,
        tweet_ids: &[S],
    ) -> Result<HttpRequest, ApiError> {
        if tweet_ids.is_empty() {
            return Err(ApiError::missing("at least one tweet id"));
        }
        Ok(self.get("/twitter/tweet/by_ids", QueryParams::new().list("tweet_ids", tweet_ids)))
    }

    pub fn parse_tweets_by_ids(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_tweet_replies(&self, tweet_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/tweet/replies", tweet_query(tweet_id).cursor(cursor))
    }

    pub fn parse_tweet_replies(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets", "replies"])
    }

    pub fn build_tweet_quotations(&self, tweet_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/tweet/quotations", tweet_query(tweet_id).cursor(cursor))
    }

    pub fn parse_tweet_quotations(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_tweet_retweeters(&self, tweet_id: &str, cursor: Option<&str>) -> HttpRequest {
        self.get("/twitter/tweet/retweeters", tweet_query(tweet_id).cursor(cursor))
    }

    pub fn parse_tweet_retweeters(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<User>, ApiError> {
        self.parse_page(response, &["users", "retweeters"])
    }

    pub fn build_tweet_thread_context(&self, tweet_id: &str) -> HttpRequest {
        self.get("/twitter/tweet/thread_context", tweet_query(tweet_id))
    }

    pub fn parse_tweet_thread_context(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }

    pub fn build_article(&self, article_id: &str) -> HttpRequest {
        self.get("/twitter/article", QueryParams::new().param("article_id", article_id))
    }

    /// Reads `article` from the top level, or from `data` when the response
    /// is wrapped.
    pub fn parse_article(&self, response: HttpResponse) -> Result<ArticleResponse, ApiError> {
        let mut value: Value = self.parse_json(response)?;
        let decode = |v: Value| {
            serde_json::from_value::<ArticleResponse>(v)
                .map_err(|e| ApiError::DeserializationError(e.to_string()))
        };
        let inner = value.as_object_mut().and_then(|o| o.remove("data"));
        let mut outer = decode(value)?;
        if outer.article.is_none() {
            if let Some(data @ Value::Object(_)) = inner {
                let data = decode(data)?;
                outer.article = data.article;
                if !data.status.is_empty() {
                    outer.status = data.status;
                }
                outer.message = data.message.or(outer.message);
                outer.msg = data.msg.or(outer.msg);
            }
        }
        Ok(outer)
    }

    pub fn build_search_tweets(&self, query: &str, options: &SearchOptions) -> HttpRequest {
        self.get("/twitter/search", search_query(query, options))
    }

    pub fn parse_search_tweets(
        &self,
        response: HttpResponse,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        self.parse_page(response, &["tweets"])
    }
}

fn tweet_query(tweet_id: &str) -> QueryParams {
    QueryParams::new().param("tweet_id", tweet_id)
}

pub(crate) fn search_query(query: &str, options: &SearchOptions) -> QueryParams {
    QueryParams::new()
        .param("query", query)
        .param("queryType", options.query_type.as_ref())
        .cursor(options.cursor.as_deref())
}

/// Tweet lookups, conversations and search.
#[derive(Debug)]
pub struct TweetsApi<'a, T> {
    api: &'a TwitterApi<T>,
}

impl<'a, T: Transport> TweetsApi<'a, T> {
    pub(crate) fn new(api: &'a TwitterApi<T>) -> Self {
        Self { api }
    }

    pub async fn get_tweets_by_ids<S: AsRef<str> + Sync>(
        &self,
        tweet_ids: &[S],
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_tweets_by_ids(tweet_ids)?).await?;
        client.parse_tweets_by_ids(response)
    }

    pub async fn get_tweet_replies(
        &self,
        tweet_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_tweet_replies(tweet_id, cursor)).await?;
        client.parse_tweet_replies(response)
    }

    pub async fn get_tweet_quotations(
        &self,
        tweet_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_tweet_quotations(tweet_id, cursor)).await?;
        client.parse_tweet_quotations(response)
    }

    pub async fn get_tweet_retweeters(
        &self,
        tweet_id: &str,
        cursor: Option<&str>,
    ) -> Result<PagedResult<User>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_tweet_retweeters(tweet_id, cursor)).await?;
        client.parse_tweet_retweeters(response)
    }

    pub async fn get_tweet_thread_context(
        &self,
        tweet_id: &str,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_tweet_thread_context(tweet_id)).await?;
        client.parse_tweet_thread_context(response)
    }

    pub async fn get_article(&self, article_id: &str) -> Result<ArticleResponse, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_article(article_id)).await?;
        client.parse_article(response)
    }

    pub async fn search_tweets(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<PagedResult<Tweet>, ApiError> {
        let client = self.api.client();
        let response = self.api.execute(client.build_search_tweets(query, options)).await?;
        client.parse_search_tweets(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::types::QueryType;

    const BASE_URL: &str = "http://localhost:3000";

    fn client() -> TwitterApiClient {
        TwitterApiClient::new(ClientConfig::builder("k").base_url(BASE_URL).build().unwrap())
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn by_ids_is_comma_joined() {
        let ids = vec!["2004124313679548708".to_string(), "1907121732860911954".to_string()];
        let req = client().build_tweets_by_ids(&ids).unwrap();
        assert_eq!(
            req.url,
            format!("{BASE_URL}/twitter/tweet/by_ids?tweet_ids=2004124313679548708%2C1907121732860911954")
        );
    }

    #[test]
    fn by_ids_rejects_empty_batch() {
        let err = client().build_tweets_by_ids::<&str>(&[]).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn cursor_endpoints_send_empty_cursor() {
        let c = client();
        for req in [
            c.build_tweet_replies("1", None),
            c.build_tweet_quotations("1", None),
            c.build_tweet_retweeters("1", None),
        ] {
            assert_eq!(req.query_param("tweet_id").as_deref(), Some("1"));
            assert_eq!(req.query_param("cursor").as_deref(), Some(""), "{}", req.url);
        }
    }

    #[test]
    fn thread_context_and_article_have_no_cursor() {
        let req = client().build_tweet_thread_context("1");
        assert_eq!(req.url, format!("{BASE_URL}/twitter/tweet/thread_context?tweet_id=1"));
        let req = client().build_article("99");
        assert_eq!(req.url, format!("{BASE_URL}/twitter/article?article_id=99"));
    }

    #[test]
    fn search_defaults_to_latest() {
        let req = client().build_search_tweets("rust", &SearchOptions::default());
        assert_eq!(req.url, format!("{BASE_URL}/twitter/search?query=rust&queryType=latest&cursor="));

        let options = SearchOptions {
            query_type: QueryType::Top,
            cursor: Some("s2".to_string()),
        };
        let req = client().build_search_tweets("rust", &options);
        assert_eq!(req.url, format!("{BASE_URL}/twitter/search?query=rust&queryType=top&cursor=s2"));
    }

    #[test]
    fn retweeters_accept_either_list_key() {
        let page = client()
            .parse_tweet_retweeters(ok(
                r#"{"users":[{"id":"u1"}],"has_next_page":false,"next_cursor":"","status":"success"}"#,
            ))
            .unwrap();
        assert_eq!(page.items[0].id, "u1");

        let page = client()
            .parse_tweet_retweeters(ok(r#"{"status":"success","data":{"retweeters":[{"id":"u2"}]}}"#))
            .unwrap();
        assert_eq!(page.items[0].id, "u2");
    }

    #[test]
    fn article_at_top_level() {
        let article = client()
            .parse_article(ok(r#"{"article":{"title":"Hello"},"status":"success","msg":"ok"}"#))
            .unwrap();
        assert_eq!(article.article.unwrap().title, "Hello");
        assert_eq!(article.status, "success");
    }

    #[test]
    fn article_under_data() {
        let article = client()
            .parse_article(ok(
                r#"{"status":"success","msg":"outer","data":{"article":{"title":"Wrapped","likeCount":3}}}"#,
            ))
            .unwrap();
        let inner = article.article.as_ref().unwrap();
        assert_eq!(inner.title, "Wrapped");
        assert_eq!(inner.like_count, 3);
        assert_eq!(article.status, "success");
        assert_eq!(article.status_message(), Some("outer"));
    }

    #[test]
    fn null_counts_do_not_fail_the_page() {
        let body = r#"{
            "tweets": [
                { "id": "1", "text": "first", "viewCount": 10 },
                {
                    "id": "2",
                    "text": null,
                    "viewCount": null,
                    "likeCount": null,
                    "entities": { "hashtags": null }
                }
            ],
            "has_next_page": false,
            "next_cursor": null
        }"#;
        let page = client().parse_search_tweets(ok(body)).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].view_count, 10);
        assert_eq!(page.items[1].view_count, 0);
        assert_eq!(page.items[1].text, "");
        assert!(page.items[1].entities.as_ref().unwrap().hashtags.is_empty());
    }

    #[test]
    fn wrapped_article_reads_message_then_msg() {
        let article = client()
            .parse_article(ok(r#"{
                "status": "success",
                "message": "outer",
                "msg": "ignored",
                "data": { "article": { "title": null } }
            }"#))
            .unwrap();
        assert_eq!(article.article.as_ref().unwrap().title, "");
        assert_eq!(article.status_message(), Some("outer"));
    }
}
