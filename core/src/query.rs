//! Query-string construction shared by every resource method.
//!
//! Optional parameters are dropped when absent or blank. Cursors are the
//! exception: most cursor-bearing endpoints always send `cursor`, empty when
//! the caller has none, so [`QueryParams::cursor`] appends unconditionally.

use std::fmt::Display;

use url::form_urlencoded;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Append only when `value` is present and not blank.
    pub fn optional(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => self.param(key, v),
            _ => self,
        }
    }

    /// Always append `cursor`, sending an empty value when none is given.
    pub fn cursor(self, cursor: Option<&str>) -> Self {
        self.param("cursor", cursor.unwrap_or_default())
    }

    /// Decimal rendering of numbers and booleans.
    pub fn number(self, key: &'static str, value: impl Display) -> Self {
        self.param(key, value.to_string())
    }

    /// Comma-joined list, e.g. a batch of tweet ids.
    pub fn list<S: AsRef<str>>(self, key: &'static str, values: &[S]) -> Self {
        let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.param(key, joined)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` rendering, spaces as `+`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
