//! Response-envelope normalization for list endpoints.
//!
//! # Design
//! The upstream API returns list payloads in two shapes:
//!
//! - flat: `{ "tweets": [...], "has_next_page": true, "next_cursor": "..", "status": ".." }`
//! - wrapped: `{ "status": "..", "msg": "..", "data": { "tweets": [...], ... } }`
//!
//! A discriminated parse step turns the decoded JSON into a [`RawEnvelope`]
//! and the `From` conversion produces the canonical [`PagedResult`]. The
//! normalization is best-effort: a payload with no list anywhere becomes an
//! empty page rather than an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status reported when neither envelope level carries one.
pub const DEFAULT_STATUS: &str = "success";

/// Canonical page shape every list-returning method converges to.
///
/// `items` is always present, empty when the upstream omitted the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub has_next_page: bool,
    pub next_cursor: String,
    pub status: String,
    pub message: Option<String>,
}

impl<T> PagedResult<T> {
    /// Cursor for the following page, `None` on the last page.
    pub fn next_page_cursor(&self) -> Option<&str> {
        if self.has_next_page && !self.next_cursor.is_empty() {
            Some(&self.next_cursor)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            has_next_page: false,
            next_cursor: String::new(),
            status: DEFAULT_STATUS.to_string(),
            message: None,
        }
    }
}

/// Page fields found at one envelope level. `items` is `None` when no
/// candidate key held an array at that level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageBody<T> {
    pub items: Option<Vec<T>>,
    pub has_next_page: Option<bool>,
    pub next_cursor: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// The two response shapes a list endpoint may return.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEnvelope<T> {
    Flat(PageBody<T>),
    Wrapped {
        status: Option<String>,
        message: Option<String>,
        data: Option<PageBody<T>>,
    },
}

impl<T: DeserializeOwned> RawEnvelope<T> {
    /// Classify a decoded response. `list_keys` are tried in order; the first
    /// key holding an array is the list.
    ///
    /// ## Errors
    ///
    /// Fails only when a list array is found but its elements do not decode
    /// as `T`.
    pub fn from_value(value: Value, list_keys: &[&str]) -> Result<Self, serde_json::Error> {
        let Value::Object(mut outer) = value else {
            tracing::debug!("list response is not an object, treating as empty");
            return Ok(RawEnvelope::Wrapped {
                status: None,
                message: None,
                data: None,
            });
        };

        if find_list(&outer, list_keys).is_some() {
            tracing::debug!("flat list envelope");
            // A flat page passes through as-is, an explicit empty status included.
            let status = outer.get("status").and_then(Value::as_str).map(str::to_string);
            let mut body = PageBody::from_object(outer, list_keys)?;
            body.status = status;
            return Ok(RawEnvelope::Flat(body));
        }

        let data = match outer.remove("data") {
            Some(Value::Object(inner)) => Some(PageBody::from_object(inner, list_keys)?),
            _ => None,
        };
        tracing::debug!(has_data = data.is_some(), "wrapped list envelope");
        Ok(RawEnvelope::Wrapped {
            status: string_field(&outer, "status"),
            message: message_field(&outer),
            data,
        })
    }
}

impl<T: DeserializeOwned> PageBody<T> {
    fn from_object(
        mut object: Map<String, Value>,
        list_keys: &[&str],
    ) -> Result<Self, serde_json::Error> {
        let items = match find_list(&object, list_keys) {
            Some(key) => {
                let list = object.remove(key).unwrap_or(Value::Array(Vec::new()));
                Some(serde_json::from_value(list)?)
            }
            None => None,
        };
        Ok(Self {
            items,
            has_next_page: object.get("has_next_page").and_then(Value::as_bool),
            next_cursor: string_field(&object, "next_cursor"),
            status: string_field(&object, "status"),
            message: message_field(&object),
        })
    }
}

impl<T> From<RawEnvelope<T>> for PagedResult<T> {
    fn from(envelope: RawEnvelope<T>) -> Self {
        match envelope {
            RawEnvelope::Flat(body) => PagedResult {
                items: body.items.unwrap_or_default(),
                has_next_page: body.has_next_page.unwrap_or(false),
                next_cursor: body.next_cursor.unwrap_or_default(),
                status: body.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
                message: body.message,
            },
            RawEnvelope::Wrapped {
                status,
                message,
                data:
                    Some(PageBody {
                        items: Some(items),
                        has_next_page,
                        next_cursor,
                        status: inner_status,
                        message: inner_message,
                    }),
            } => PagedResult {
                items,
                has_next_page: has_next_page.unwrap_or(false),
                next_cursor: next_cursor.unwrap_or_default(),
                status: inner_status
                    .or(status)
                    .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
                message: inner_message.or(message),
            },
            RawEnvelope::Wrapped { status, message, data } => {
                tracing::warn!(?status, "list envelope carried no list, returning an empty page");
                let (inner_status, inner_message) = data
                    .map(|d| (d.status, d.message))
                    .unwrap_or_default();
                PagedResult {
                    items: Vec::new(),
                    has_next_page: false,
                    next_cursor: String::new(),
                    status: status
                        .or(inner_status)
                        .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
                    message: message.or(inner_message),
                }
            }
        }
    }
}

/// Decode and normalize in one step.
pub fn normalize<T: DeserializeOwned>(
    value: Value,
    list_keys: &[&str],
) -> Result<PagedResult<T>, serde_json::Error> {
    RawEnvelope::from_value(value, list_keys).map(PagedResult::from)
}

fn find_list<'a>(object: &Map<String, Value>, list_keys: &[&'a str]) -> Option<&'a str> {
    list_keys
        .iter()
        .copied()
        .find(|key| matches!(object.get(*key), Some(Value::Array(_))))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// Some endpoints say `message`, others `msg`.
fn message_field(object: &Map<String, Value>) -> Option<String> {
    string_field(object, "message").or_else(|| string_field(object, "msg"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tweets(value: Value) -> PagedResult<Value> {
        normalize(value, &["tweets"]).unwrap()
    }

    #[test]
    fn flat_envelope_passes_through() {
        let page = tweets(json!({
            "tweets": [{"id": "t1"}, {"id": "t2"}],
            "has_next_page": true,
            "next_cursor": "abc",
            "status": "success"
        }));
        assert_eq!(page.items, vec![json!({"id": "t1"}), json!({"id": "t2"})]);
        assert!(page.has_next_page);
        assert_eq!(page.next_cursor, "abc");
        assert_eq!(page.status, "success");
        assert_eq!(page.message, None);
    }

    #[test]
    fn flat_envelope_defaults_missing_paging_fields() {
        let page = tweets(json!({ "tweets": [] }));
        assert!(!page.has_next_page);
        assert_eq!(page.next_cursor, "");
        assert_eq!(page.status, DEFAULT_STATUS);
    }

    #[test]
    fn flat_envelope_keeps_explicit_empty_status() {
        let page = tweets(json!({ "tweets": [], "status": "" }));
        assert_eq!(page.status, "");
    }

    #[test]
    fn null_cursor_becomes_empty() {
        let page = tweets(json!({ "tweets": [], "has_next_page": false, "next_cursor": null }));
        assert_eq!(page.next_cursor, "");
    }

    #[test]
    fn inner_status_and_message_win() {
        let page = tweets(json!({
            "status": "success",
            "msg": "outer",
            "data": {
                "tweets": [{"id": "t1"}],
                "status": "partial",
                "message": "inner"
            }
        }));
        assert_eq!(page.status, "partial");
        assert_eq!(page.message.as_deref(), Some("inner"));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn wrapped_envelope_falls_back_to_outer_status() {
        let page = tweets(json!({
            "status": "success",
            "msg": "ok",
            "data": { "tweets": [{"id": "t1"}], "has_next_page": true, "next_cursor": "n2" }
        }));
        assert_eq!(page.status, "success");
        assert_eq!(page.message.as_deref(), Some("ok"));
        assert_eq!(page.next_page_cursor(), Some("n2"));
    }

    #[test]
    fn data_without_list_yields_empty_page() {
        let page = tweets(json!({
            "status": "error",
            "msg": "user suspended",
            "data": { "unavailable": true }
        }));
        assert!(page.is_empty());
        assert!(!page.has_next_page);
        assert_eq!(page.next_cursor, "");
        assert_eq!(page.status, "error");
        assert_eq!(page.message.as_deref(), Some("user suspended"));
    }

    #[test]
    fn no_list_anywhere_yields_empty_page() {
        let page = tweets(json!({ "status": "error", "message": "not found" }));
        assert!(page.items.is_empty());
        assert_eq!(page.status, "error");
        assert_eq!(page.message.as_deref(), Some("not found"));
    }

    #[test]
    fn status_found_only_inside_data() {
        let page = tweets(json!({ "data": { "status": "error", "tweets": null } }));
        assert!(page.items.is_empty());
        assert_eq!(page.status, "error");
    }

    #[test]
    fn non_object_response_is_empty() {
        let page = tweets(json!("unexpected"));
        assert_eq!(page, PagedResult::default());
    }

    #[test]
    fn later_candidate_keys_are_tried() {
        let page: PagedResult<Value> =
            normalize(json!({ "retweeters": [{"id": "u1"}] }), &["users", "retweeters"]).unwrap();
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn msg_is_read_when_message_is_absent() {
        let page = tweets(json!({ "tweets": [], "status": "success", "msg": "fine" }));
        assert_eq!(page.message.as_deref(), Some("fine"));
    }

    #[test]
    fn undecodable_items_are_an_error() {
        let result: Result<PagedResult<u32>, _> = normalize(json!({ "tweets": ["x"] }), &["tweets"]);
        assert!(result.is_err());
    }

    #[test]
    fn classifies_shapes_explicitly() {
        let flat: RawEnvelope<Value> = RawEnvelope::from_value(json!({ "tweets": [] }), &["tweets"]).unwrap();
        assert!(matches!(flat, RawEnvelope::Flat(_)));

        let body = json!({ "status": "success", "data": { "tweets": [] } });
        let wrapped: RawEnvelope<Value> = RawEnvelope::from_value(body, &["tweets"]).unwrap();
        assert!(matches!(wrapped, RawEnvelope::Wrapped { data: Some(_), .. }));
    }

    #[test]
    fn next_page_cursor_requires_has_next_page() {
        let page = PagedResult::<Value> {
            next_cursor: "dangling".to_string(),
            ..PagedResult::default()
        };
        assert_eq!(page.next_page_cursor(), None);
    }
}
