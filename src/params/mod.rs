//! Wire parameter building for Bot API requests.
//!
//! Every request struct in the catalog flattens itself into a [`Params`]
//! map before hitting the transport. Absence of a key means "unset" on
//! the wire; there is no null.

use crate::errors::{ResponseError, TelegramResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// A string-keyed map of pre-stringified wire fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field unconditionally (required fields)
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Set a string field only when it is non-empty
    pub fn add_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.add(key, value);
        }
    }

    /// Set an integer field only when it is non-zero.
    ///
    /// Zero is indistinguishable from "unset" through this helper; fields
    /// where zero is a legitimate value use [`Params::add_opt_int`]
    /// instead.
    pub fn add_non_zero_int(&mut self, key: &str, value: i64) {
        if value != 0 {
            self.add(key, value.to_string());
        }
    }

    /// Set a float field only when it is non-zero, fixed 6-decimal format
    pub fn add_non_zero_float(&mut self, key: &str, value: f64) {
        if value != 0.0 {
            self.add(key, format!("{:.6}", value));
        }
    }

    /// Set an optional integer field when present, zero included
    pub fn add_opt_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(v) = value {
            self.add(key, v.to_string());
        }
    }

    /// Set a boolean field; false is never serialized
    pub fn add_bool(&mut self, key: &str, value: bool) {
        if value {
            self.add(key, "true");
        }
    }

    /// JSON-encode and set a field; `None` is silently skipped.
    /// Encoding failures propagate.
    pub fn add_json<T: Serialize>(&mut self, key: &str, value: Option<&T>) -> TelegramResult<()> {
        if let Some(v) = value {
            let encoded = serde_json::to_string(v).map_err(ResponseError::from)?;
            self.add(key, encoded);
        }
        Ok(())
    }

    /// Try each candidate in order and store the first non-default one.
    ///
    /// Integers are default at zero, strings when empty, JSON values when
    /// null. Returns whether a candidate was stored.
    pub fn add_first_non_default(
        &mut self,
        key: &str,
        candidates: &[Candidate<'_>],
    ) -> TelegramResult<bool> {
        for candidate in candidates {
            match candidate {
                Candidate::Int(v) => {
                    if *v != 0 {
                        self.add(key, v.to_string());
                        return Ok(true);
                    }
                }
                Candidate::Str(v) => {
                    if !v.is_empty() {
                        self.add(key, *v);
                        return Ok(true);
                    }
                }
                Candidate::Json(v) => {
                    if !v.is_null() {
                        let encoded = serde_json::to_string(v).map_err(ResponseError::from)?;
                        self.add(key, encoded);
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether a field is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One alternative for [`Params::add_first_non_default`]
#[derive(Debug, Clone)]
pub enum Candidate<'a> {
    /// Integer candidate; default at zero
    Int(i64),
    /// String candidate; default when empty
    Str(&'a str),
    /// Anything else, JSON-encoded; default when null
    Json(&'a serde_json::Value),
}

/// Normalize a username by prepending `@` when missing.
///
/// Pure; callers use the returned value.
pub fn ensure_at_prefix(username: &str) -> String {
    if username.starts_with('@') {
        username.to_string()
    } else {
        format!("@{}", username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_non_empty() {
        let mut params = Params::new();
        params.add_non_empty("text", "hi");
        params.add_non_empty("caption", "");

        assert_eq!(params.get("text"), Some("hi"));
        assert!(!params.contains_key("caption"));
    }

    #[test]
    fn test_non_zero_helpers() {
        let mut params = Params::new();
        params.add_non_zero_int("offset", 0);
        params.add_non_zero_int("limit", 42);
        params.add_non_zero_float("latitude", 0.0);
        params.add_non_zero_float("longitude", 0.1);

        assert!(!params.contains_key("offset"));
        assert_eq!(params.get("limit"), Some("42"));
        assert!(!params.contains_key("latitude"));
        assert_eq!(params.get("longitude"), Some("0.100000"));
    }

    #[test]
    fn test_add_opt_int_sends_explicit_zero() {
        let mut params = Params::new();
        params.add_opt_int("reply_to_message_id", Some(0));
        params.add_opt_int("message_thread_id", None);

        assert_eq!(params.get("reply_to_message_id"), Some("0"));
        assert!(!params.contains_key("message_thread_id"));
    }

    #[test]
    fn test_add_bool() {
        let mut params = Params::new();
        params.add_bool("disable_notification", true);
        params.add_bool("protect_content", false);

        assert_eq!(params.get("disable_notification"), Some("true"));
        assert!(!params.contains_key("protect_content"));
    }

    #[test]
    fn test_add_json() {
        #[derive(Serialize)]
        struct Markup {
            force_reply: bool,
        }

        let mut params = Params::new();
        params
            .add_json("reply_markup", Some(&Markup { force_reply: true }))
            .unwrap();
        params.add_json::<Markup>("other", None).unwrap();

        assert_eq!(params.get("reply_markup"), Some(r#"{"force_reply":true}"#));
        assert!(!params.contains_key("other"));
    }

    #[test]
    fn test_first_non_default_picks_leftmost() {
        let mut params = Params::new();
        params
            .add_first_non_default(
                "chat_id",
                &[Candidate::Int(0), Candidate::Str(""), Candidate::Str("bob")],
            )
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("bob"));

        let mut params = Params::new();
        params
            .add_first_non_default(
                "chat_id",
                &[Candidate::Int(42), Candidate::Str(""), Candidate::Str("bob")],
            )
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("42"));
    }

    #[test]
    fn test_first_non_default_all_default() {
        let mut params = Params::new();
        let stored = params
            .add_first_non_default("chat_id", &[Candidate::Int(0), Candidate::Str("")])
            .unwrap();
        assert!(!stored);
        assert!(params.is_empty());
    }

    #[test]
    fn test_ensure_at_prefix() {
        assert_eq!(ensure_at_prefix("channel"), "@channel");
        assert_eq!(ensure_at_prefix("@channel"), "@channel");
    }
}
