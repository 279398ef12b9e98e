//! Targeting specifications.
//!
//! A spec is a JSON object of filter groups, e.g.
//! `{"geo_locations":{"countries":["US"]},"age_min":18,"genders":[1]}`.
//! Groups are ANDed; values inside a group are ORed. We never interpret the
//! filters; we only pass them through (minified) and flatten them into
//! table columns for comparison.
//!
//! Flattening rules:
//! - `geo_locations` is lifted: each of its keys becomes a column of its own
//!   (`countries`, `regions`, ...). If the top level already has a key with
//!   that name, the geo column keeps its dotted name instead.
//! - Any other nested object becomes dotted columns (`exclusions.interests`).
//! - Each column collapses to [`Cell::Scalar`] when every list entry agrees,
//!   else stays a [`Cell::List`] (order kept). Empty lists stay lists.

use std::{fmt, fs, path::Path};

use serde_json::{Map, Value};

use crate::config::consts::GEO_GROUP;
use crate::error::{ReachError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct TargetingSpec {
    root: Map<String, Value>,
}

impl TargetingSpec {
    pub fn parse(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ReachError::InvalidSpec(format!(
                "expected a JSON object, got {}",
                kind_name(&other)
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReachError::io(path, e))?;
        Self::parse(&text)
    }

    /// Compact JSON, as sent in the `targeting_spec` query field.
    pub fn minify(&self) -> String {
        // Map<String, Value> serialization cannot fail
        serde_json::to_string(&self.root).unwrap_or_default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Flatten into ordered `(column, cell)` pairs.
    pub fn flatten(&self) -> Vec<(String, Cell)> {
        let mut cols = Vec::with_capacity(self.root.len());
        for (key, val) in &self.root {
            match val {
                Value::Object(group) if key == GEO_GROUP => {
                    for (gk, gv) in group {
                        let name = if self.root.contains_key(gk) {
                            join!(GEO_GROUP, ".", gk)
                        } else {
                            gk.clone()
                        };
                        push_flat(&mut cols, name, gv);
                    }
                }
                _ => push_flat(&mut cols, key.clone(), val),
            }
        }
        cols
    }
}

fn push_flat(cols: &mut Vec<(String, Cell)>, name: String, val: &Value) {
    match val {
        Value::Object(inner) if !inner.is_empty() => {
            for (k, v) in inner {
                push_flat(cols, join!(&name, ".", k), v);
            }
        }
        _ => cols.push((name, Cell::collapse(val))),
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One table cell: a single agreed value or the full list.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Scalar(Value),
    List(Vec<Value>),
}

impl Cell {
    pub fn collapse(val: &Value) -> Cell {
        match val {
            Value::Array(items) => match items.split_first() {
                Some((first, rest)) if rest.iter().all(|v| v == first) => {
                    Cell::Scalar(first.clone())
                }
                _ => Cell::List(items.clone()),
            },
            other => Cell::Scalar(other.clone()),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Cell::List(_))
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Scalar(Value::from(n))
    }
}

// Strings print bare; everything else as compact JSON.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Scalar(Value::String(s)) => f.write_str(s),
            Cell::Scalar(v) => write!(f, "{v}"),
            Cell::List(items) => write!(f, "{}", Value::Array(items.clone())),
        }
    }
}
