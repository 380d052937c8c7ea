//! Bracket-style query strings (`states[]=1&states[]=2&salary=80000`).
//!
//! Keys are emitted in alphabetical order and array items keep their
//! insertion order, which is what the jobs endpoint expects.

use url::form_urlencoded;

use crate::ActiveFilters;

/// One `key=value` pair; array items are written as `key[]=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub array: bool,
    pub value: String,
}

impl QueryPair {
    pub fn scalar(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            array: false,
            value: value.to_string(),
        }
    }

    pub fn item(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            array: true,
            value: value.to_string(),
        }
    }
}

fn component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Serializes pairs, sorting by key. The sort is stable so array order survives.
pub fn encode(mut pairs: Vec<QueryPair>) -> String {
    pairs.sort_by(|a, b| a.key.cmp(&b.key));
    pairs
        .iter()
        .map(|pair| {
            format!(
                "{}{}={}",
                component(&pair.key),
                if pair.array { "[]" } else { "" },
                component(&pair.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a raw query string, with or without the leading `?`.
pub fn decode(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// First value of a scalar parameter.
pub fn param(query: &str, key: &str) -> Option<String> {
    decode(query)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Parameters sent to the jobs endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub employer_name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub custom_board_id: Option<String>,
    pub filters: ActiveFilters,
}

impl SearchParams {
    /// Reads the search from a page URL. Filter keys go through the prune rule.
    pub fn from_query(query: &str) -> Self {
        let pairs = decode(query);
        let scalar = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            employer_name: scalar("employerName"),
            offset: scalar("offset").and_then(|v| v.parse().ok()),
            limit: scalar("limit").and_then(|v| v.parse().ok()),
            custom_board_id: scalar("customBoardId"),
            filters: ActiveFilters::from_pairs(
                pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ),
        }
    }

    pub fn to_query(&self) -> String {
        let mut pairs = self.filters.query_pairs();
        if let Some(name) = self.employer_name.as_deref().filter(|n| !n.is_empty()) {
            pairs.push(QueryPair::scalar("employerName", name));
        }
        if let Some(id) = self.custom_board_id.as_deref().filter(|id| !id.is_empty()) {
            pairs.push(QueryPair::scalar("customBoardId", id));
        }
        if let Some(offset) = self.offset {
            pairs.push(QueryPair::scalar("offset", offset));
        }
        if let Some(limit) = self.limit {
            pairs.push(QueryPair::scalar("limit", limit));
        }
        encode(pairs)
    }
}
