//! In-process stand-in for the twitterapi.io API.
//!
//! Serves canned fixtures for every endpoint the client knows, rejects
//! requests without the configured `X-API-Key`, pages list endpoints two
//! items then one, and keeps the stream-monitor registry in memory. The
//! timeline endpoint answers in the wrapped `{status, msg, data}` envelope,
//! the rest answer flat, so both client paths are exercised.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Key accepted by [`app`] when no other is configured.
pub const DEFAULT_API_KEY: &str = "test-key";

/// Cursor handed out on the first page of every listing.
pub const SECOND_PAGE_CURSOR: &str = "cursor-page-2";

pub type Monitored = Arc<RwLock<HashSet<String>>>;

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    monitored: Monitored,
}

type Params = Query<HashMap<String, String>>;

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        monitored: Arc::new(RwLock::new(HashSet::new())),
    };
    Router::new()
        .route("/oapi/my/info", get(my_info))
        .route("/twitter/user_about", get(user_about))
        .route("/twitter/user/info", get(user_info))
        .route("/twitter/user/batch_info_by_ids", get(batch_user_info))
        .route("/twitter/user/latest_tweets", get(latest_tweets))
        .route("/twitter/user/followers", get(|q: Params| users_page(q, "followers")))
        .route("/twitter/user/followings", get(|q: Params| users_page(q, "followings")))
        .route("/twitter/user/verifiedFollowers", get(|q: Params| users_page(q, "followers")))
        .route("/twitter/user/search", get(|q: Params| users_page(q, "users")))
        .route("/twitter/user/mentions", get(mentions))
        .route("/twitter/user/check_follow_relationship", get(follow_relationship))
        .route("/twitter/tweet/by_ids", get(tweets_by_ids))
        .route("/twitter/tweet/replies", get(|q: Params| tweets_page(q)))
        .route("/twitter/tweet/quotations", get(|q: Params| tweets_page(q)))
        .route("/twitter/tweet/retweeters", get(|q: Params| users_page(q, "users")))
        .route("/twitter/tweet/thread_context", get(|q: Params| tweets_page(q)))
        .route("/twitter/article", get(article))
        .route("/twitter/search", get(|q: Params| tweets_page(q)))
        .route("/twitter/community/info", get(community_info))
        .route("/twitter/community/members", get(|q: Params| users_page(q, "members")))
        .route("/twitter/community/moderators", get(|q: Params| users_page(q, "moderators")))
        .route("/twitter/community/tweets", get(|q: Params| tweets_page(q)))
        .route("/twitter/community/search", get(|q: Params| tweets_page(q)))
        .route("/twitter/list/followers", get(|q: Params| users_page(q, "followers")))
        .route("/twitter/list/members", get(|q: Params| users_page(q, "members")))
        .route("/twitter/trends", get(trends))
        .route("/twitter/space/detail", get(space_detail))
        .route("/oapi/x_user_stream/add_user_to_monitor_tweet", post(add_monitor))
        .route("/oapi/x_user_stream/remove_user_from_monitor_tweet", post(remove_monitor))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_key(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_key(api_key)).await
}

async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());
    if presented != Some(&*state.api_key) {
        tracing::debug!(path = %request.uri().path(), "rejecting request without a valid api key");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, StatusCode> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)
}

pub fn user_json(id: &str, user_name: &str) -> Value {
    json!({
        "type": "user",
        "id": id,
        "userName": user_name,
        "name": user_name,
        "url": format!("https://x.com/{user_name}"),
        "isBlueVerified": false,
        "verifiedType": null,
        "followers": 10,
        "following": 5,
        "withheldInCountries": [],
        "pinnedTweetIds": []
    })
}

pub fn tweet_json(id: &str) -> Value {
    json!({
        "type": "tweet",
        "id": id,
        "url": format!("https://x.com/i/status/{id}"),
        "text": format!("tweet {id}"),
        "likeCount": 1,
        "isReply": false,
        "createdAt": "Tue Dec 30 12:00:00 +0000 2025",
        "author": user_json("1", "author"),
        "entities": { "hashtags": [], "urls": [], "user_mentions": [] }
    })
}

/// `(ids, has_next_page, next_cursor)` for the page a cursor selects.
fn page_for(cursor: Option<&String>) -> (Vec<&'static str>, bool, &'static str) {
    match cursor.map(String::as_str) {
        Some(SECOND_PAGE_CURSOR) => (vec!["3"], false, ""),
        _ => (vec!["1", "2"], true, SECOND_PAGE_CURSOR),
    }
}

async fn my_info() -> Json<Value> {
    Json(json!({ "recharge_credits": 1000, "total_bonus_credits": 50 }))
}

async fn user_about(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let user_name = required(&params, "userName")?;
    Ok(Json(json!({
        "data": { "id": "42", "userName": user_name, "name": user_name, "isBlueVerified": true },
        "status": "success",
        "msg": "success"
    })))
}

async fn user_info(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let user_name = required(&params, "userName")?;
    Ok(Json(json!({
        "data": user_json("42", user_name),
        "status": "success",
        "msg": "success"
    })))
}

async fn batch_user_info(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let ids = required(&params, "userIds")?;
    let users: Vec<Value> = ids.split(',').map(|id| user_json(id, &format!("user{id}"))).collect();
    Ok(Json(json!({ "users": users, "status": "success", "msg": "success" })))
}

async fn latest_tweets(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    if !params.contains_key("userId") && !params.contains_key("userName") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let (ids, has_next, next) = page_for(params.get("cursor"));
    let tweets: Vec<Value> = ids.into_iter().map(tweet_json).collect();
    Ok(Json(json!({
        "status": "success",
        "msg": "success",
        "data": {
            "pin_tweet": null,
            "tweets": tweets,
            "has_next_page": has_next,
            "next_cursor": next
        }
    })))
}

async fn mentions(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    required(&params, "userName")?;
    for key in ["sinceTime", "untilTime"] {
        required(&params, key)?
            .parse::<i64>()
            .map_err(|_| StatusCode::BAD_REQUEST)?;
    }
    tweets_page(Query(params)).await
}

async fn tweets_page(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let (ids, has_next, next) = page_for(params.get("cursor"));
    let tweets: Vec<Value> = ids.into_iter().map(tweet_json).collect();
    Ok(Json(json!({
        "tweets": tweets,
        "has_next_page": has_next,
        "next_cursor": next,
        "status": "success",
        "msg": "success"
    })))
}

async fn users_page(Query(params): Params, key: &'static str) -> Result<Json<Value>, StatusCode> {
    let (ids, has_next, next) = page_for(params.get("cursor"));
    let users: Vec<Value> = ids.into_iter().map(|id| user_json(id, &format!("user{id}"))).collect();
    let mut body = json!({
        "has_next_page": has_next,
        "next_cursor": next,
        "status": "success",
        "msg": "success"
    });
    body[key] = Value::Array(users);
    Ok(Json(body))
}

async fn follow_relationship(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let source = required(&params, "source_user_name")?;
    let target = required(&params, "target_user_name")?;
    Ok(Json(json!({
        "data": { "following": source != target, "followed_by": false },
        "status": "success",
        "message": "success"
    })))
}

async fn tweets_by_ids(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let ids = required(&params, "tweet_ids")?;
    let tweets: Vec<Value> = ids.split(',').map(tweet_json).collect();
    Ok(Json(json!({ "tweets": tweets, "status": "success", "msg": "success" })))
}

async fn article(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let id = required(&params, "article_id")?;
    Ok(Json(json!({
        "status": "success",
        "msg": "success",
        "data": {
            "article": {
                "title": format!("article {id}"),
                "preview_text": "preview",
                "contents": [{ "text": "body" }],
                "likeCount": 7,
                "viewCount": 70
            }
        }
    })))
}

async fn community_info(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let id = required(&params, "community_id")?;
    Ok(Json(json!({
        "id": id,
        "name": "Mock Community",
        "description": "fixtures",
        "member_count": 3,
        "moderator_count": 1,
        "rules": ["be kind"],
        "status": "success",
        "msg": "success"
    })))
}

async fn trends(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let woeid: i64 = required(&params, "woeid")?
        .parse()
        .map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(Json(json!({
        "trends": [
            {
                "name": "#rustlang",
                "url": "https://x.com/search?q=%23rustlang",
                "query": "%23rustlang",
                "tweet_volume": 1200
            },
            { "name": "axum", "url": "https://x.com/search?q=axum", "query": "axum" }
        ],
        "as_of": "2026-01-01T00:00:00Z",
        "created_at": "2026-01-01T00:00:00Z",
        "locations": [{ "name": "Somewhere", "woeid": woeid }],
        "status": "success"
    })))
}

async fn space_detail(Query(params): Params) -> Result<Json<Value>, StatusCode> {
    let id = required(&params, "space_id")?;
    Ok(Json(json!({
        "id": id,
        "state": "Ended",
        "title": "Mock space",
        "host_ids": ["1"],
        "participant_count": 12,
        "hosts": [user_json("1", "host")],
        "status": "success",
        "msg": "success"
    })))
}

#[derive(Deserialize)]
pub struct MonitorUser {
    pub x_user_name: String,
}

async fn add_monitor(State(state): State<AppState>, Json(input): Json<MonitorUser>) -> Json<Value> {
    let added = state.monitored.write().await.insert(input.x_user_name.clone());
    Json(if added {
        json!({ "status": "success", "msg": format!("monitoring {}", input.x_user_name) })
    } else {
        json!({ "status": "error", "msg": format!("{} is already monitored", input.x_user_name) })
    })
}

async fn remove_monitor(State(state): State<AppState>, Json(input): Json<MonitorUser>) -> Json<Value> {
    let removed = state.monitored.write().await.remove(&input.x_user_name);
    Json(if removed {
        json!({ "status": "success", "msg": format!("stopped monitoring {}", input.x_user_name) })
    } else {
        json!({ "status": "error", "msg": format!("{} is not monitored", input.x_user_name) })
    })
}
