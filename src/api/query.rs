//! Query-string construction.
//!
//! Keys are emitted in sorted order and values in insertion order, using
//! form escaping (space becomes `+`). Lists of identifiers are repeated
//! (`id=1&id=2`); free-text lists are comma-joined (`expand=a,b`).

use std::collections::BTreeMap;
use std::fmt::Display;

/// An ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single value.
    pub fn add(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Append one `key=value` pair per item.
    pub fn add_repeated<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.add(key, value);
        }
        self
    }

    /// Append the items comma-joined under one key. Empty lists are skipped.
    pub fn add_joined<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.add(key, joined);
        }
        self
    }

    /// Append a string unless it is empty.
    pub fn add_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.add(key, value);
        }
        self
    }

    /// Append an integer unless it is zero.
    pub fn add_non_zero(&mut self, key: &str, value: i64) -> &mut Self {
        if value != 0 {
            self.add(key, value);
        }
        self
    }

    /// Append a boolean. Always emitted, `false` included.
    pub fn add_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.add(key, value)
    }

    /// Append `startAt` and `maxResults`.
    pub fn add_page(&mut self, start_at: i64, max_results: i64) -> &mut Self {
        self.add("startAt", start_at).add("maxResults", max_results)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values recorded under `key`, in insertion order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    /// Encode as `k=v&k=v`, sorted by key.
    pub fn encode(&self) -> String {
        self.values
            .iter()
            .flat_map(|(key, values)| {
                let key = escape(key);
                values
                    .iter()
                    .map(move |value| format!("{}={}", key, escape(value)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Form-escape a query component.
fn escape(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Append an encoded query to `path`, if there is one.
pub fn with_query(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_sorted() {
        let mut query = QueryParams::new();
        query.add("startAt", 0).add("maxResults", 50).add("expand", "x");
        assert_eq!(query.encode(), "expand=x&maxResults=50&startAt=0");
    }

    #[test]
    fn test_repeated_values_keep_order() {
        let mut query = QueryParams::new();
        query.add_repeated("contextId", [10002, 10001]);
        assert_eq!(query.encode(), "contextId=10002&contextId=10001");
    }

    #[test]
    fn test_joined_values() {
        let mut query = QueryParams::new();
        query.add_joined("expand", ["names", "schema"]);
        assert_eq!(query.encode(), "expand=names%2Cschema");
        assert_eq!(query.get("expand").unwrap(), ["names,schema"]);
    }

    #[test]
    fn test_empty_joined_is_omitted() {
        let mut query = QueryParams::new();
        query.add_joined("expand", Vec::<String>::new());
        assert!(query.is_empty());
    }

    #[test]
    fn test_zero_and_empty_are_omitted() {
        let mut query = QueryParams::new();
        query.add_non_zero("since", 0).add_non_empty("query", "");
        assert!(query.is_empty());
    }

    #[test]
    fn test_false_booleans_are_emitted() {
        let mut query = QueryParams::new();
        query.add_bool("onlyDefault", false);
        assert_eq!(query.encode(), "onlyDefault=false");
    }

    #[test]
    fn test_escaping_matches_form_encoding() {
        let mut query = QueryParams::new();
        query.add("queryString", "Default Screen & co");
        assert_eq!(query.encode(), "queryString=Default+Screen+%26+co");
    }

    #[test]
    fn test_with_query() {
        let mut query = QueryParams::new();
        assert_eq!(with_query("rest/api/3/field", &query), "rest/api/3/field");
        query.add("type", "custom");
        assert_eq!(
            with_query("rest/api/3/field", &query),
            "rest/api/3/field?type=custom"
        );
    }
}
