//! Elasticsearch clause values.
//!
//! Clauses are typed in Rust and serialized to the exact JSON the search
//! backend expects:
//! - `Term`       → `{"term": {"<field>": <value>}}`
//! - `MultiMatch` → `{"multi_match": {"query": "...", "operator": "and", "fields": [...]}}`

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value carried by an exact-match `term` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermValue {
    Integer(i64),
    Text(String),
    Boolean(bool),
}

impl Serialize for TermValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TermValue::Integer(n) => serializer.serialize_i64(*n),
            TermValue::Text(s) => serializer.serialize_str(s),
            TermValue::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<i64> for TermValue {
    fn from(value: i64) -> Self {
        TermValue::Integer(value)
    }
}

impl From<bool> for TermValue {
    fn from(value: bool) -> Self {
        TermValue::Boolean(value)
    }
}

impl From<String> for TermValue {
    fn from(value: String) -> Self {
        TermValue::Text(value)
    }
}

impl From<&str> for TermValue {
    fn from(value: &str) -> Self {
        TermValue::Text(value.to_string())
    }
}

/// Match operator for `multi_match` clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    /// Every term of the query string must match.
    And,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
        }
    }
}

/// One atomic filter condition in the backend query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Term {
        field: &'static str,
        value: TermValue,
    },
    MultiMatch {
        query: String,
        fields: &'static [&'static str],
        operator: Option<MatchOperator>,
    },
}

impl Clause {
    pub fn term(field: &'static str, value: impl Into<TermValue>) -> Self {
        Clause::Term {
            field,
            value: value.into(),
        }
    }

    pub fn multi_match(query: impl Into<String>, fields: &'static [&'static str]) -> Self {
        Clause::MultiMatch {
            query: query.into(),
            fields,
            operator: None,
        }
    }

    pub fn with_operator(self, operator: MatchOperator) -> Self {
        match self {
            Clause::MultiMatch { query, fields, .. } => Clause::MultiMatch {
                query,
                fields,
                operator: Some(operator),
            },
            term => term,
        }
    }

    /// Name of the clause type on the wire (`term`, `multi_match`).
    pub fn kind(&self) -> &'static str {
        match self {
            Clause::Term { .. } => "term",
            Clause::MultiMatch { .. } => "multi_match",
        }
    }

    /// Fields this clause targets.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Clause::Term { field, .. } => vec![*field],
            Clause::MultiMatch { fields, .. } => fields.to_vec(),
        }
    }
}

struct TermBody<'a> {
    field: &'static str,
    value: &'a TermValue,
}

impl Serialize for TermBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, self.value)?;
        map.end()
    }
}

struct MultiMatchBody<'a> {
    query: &'a str,
    fields: &'static [&'static str],
    operator: Option<MatchOperator>,
}

impl Serialize for MultiMatchBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.operator.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("query", self.query)?;
        if let Some(operator) = self.operator {
            map.serialize_entry("operator", operator.as_str())?;
        }
        map.serialize_entry("fields", self.fields)?;
        map.end()
    }
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Clause::Term { field, value } => {
                map.serialize_entry(
                    self.kind(),
                    &TermBody {
                        field: *field,
                        value,
                    },
                )?;
            }
            Clause::MultiMatch {
                query,
                fields,
                operator,
            } => {
                map.serialize_entry(
                    self.kind(),
                    &MultiMatchBody {
                        query,
                        fields: *fields,
                        operator: *operator,
                    },
                )?;
            }
        }
        map.end()
    }
}
