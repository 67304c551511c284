//! Query predicate resolution.
//!
//! Turns an optional DSL query string into a concrete predicate. Absent or
//! blank input resolves to match-all; anything else must be a JSON object
//! containing exactly one recognized predicate.

use serde_json::{json, Map, Value};

use crate::errors::ClientError;

/// Query predicate kinds the resolver accepts.
///
/// Process-wide and read-only; built once, never mutated, safe for
/// concurrent reads. Parsing never consults the store.
const RECOGNIZED_KINDS: &[&str] = &[
    "match_all",
    "match",
    "match_phrase",
    "match_phrase_prefix",
    "multi_match",
    "term",
    "terms",
    "range",
    "exists",
    "prefix",
    "wildcard",
    "regexp",
    "fuzzy",
    "ids",
    "bool",
    "query_string",
    "simple_query_string",
    "rank_feature",
    "nested",
];

/// A single resolved query predicate in the store's DSL vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPredicate {
    kind: String,
    body: Value,
}

impl QueryPredicate {
    /// The match-everything predicate used when no query is given.
    pub fn match_all() -> Self {
        Self {
            kind: "match_all".to_string(),
            body: json!({}),
        }
    }

    /// The predicate kind, e.g. "term" or "match_all".
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether this predicate matches every document.
    pub fn is_match_all(&self) -> bool {
        self.kind == "match_all"
    }

    /// The predicate as a DSL document.
    ///
    /// Round-trips: resolving the serialized form yields an equal predicate.
    pub fn to_value(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(self.kind.clone(), self.body.clone());
        Value::Object(doc)
    }
}

/// Resolve an optional DSL query string into a predicate.
///
/// `None` and blank strings resolve to match-all. Anything else must parse
/// as a JSON object with exactly one top-level key naming a recognized
/// predicate kind; zero keys, multiple keys, non-object JSON, or an
/// unrecognized kind all fail with a query parse error rather than guessing.
pub fn resolve_query(query: Option<&str>) -> Result<QueryPredicate, ClientError> {
    let text = match query {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(QueryPredicate::match_all()),
    };

    let value: Value = serde_json::from_str(text)
        .map_err(|e| ClientError::query_parse(format!("Query is not valid JSON: {}", e)))?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ClientError::query_parse(format!(
                "Query must be a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };

    if object.len() > 1 {
        let kinds: Vec<&str> = object.keys().map(String::as_str).collect();
        return Err(ClientError::query_parse(format!(
            "Query must contain exactly one top-level predicate, found {}: {}",
            object.len(),
            kinds.join(", ")
        )));
    }

    match object.into_iter().next() {
        None => Err(ClientError::query_parse(
            "Query contains no predicate".to_string(),
        )),
        Some((kind, _)) if !RECOGNIZED_KINDS.contains(&kind.as_str()) => Err(
            ClientError::query_parse(format!("Unrecognized query predicate: {}", kind)),
        ),
        Some((kind, body)) => Ok(QueryPredicate { kind, body }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
