//! Reach-estimate wire shapes: the query we send and the row we build from
//! what comes back.
//!
//! Success body: `{"data":{"users":180000000,"estimate_ready":true}}`
//! Failure body: `{"error":{"message":"Invalid parameter","code":100,...}}`

use serde_json::{Map, Value};

use crate::config::{ApiOptions, Credentials};
use crate::config::consts::ESTIMATE_COLUMN;
use crate::core::net::Response;
use crate::error::{ReachError, Result};
use super::targeting::{Cell, TargetingSpec};

/// Fully-resolved GET: endpoint + ordered query pairs.
#[derive(Clone, PartialEq, Eq)]
pub struct ReachQuery {
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

impl ReachQuery {
    pub fn build(spec: &TargetingSpec, creds: &Credentials, api: &ApiOptions) -> Self {
        Self {
            url: api.endpoint_url(creds.account_id()),
            params: pairs![
                "access_token" => creds.access_token(),
                "currency" => api.currency,
                "optimize_for" => api.optimize_for,
                "targeting_spec" => spec.minify(),
            ],
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

// Keeps the token out of logs and panics
impl std::fmt::Debug for ReachQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| if *k == "access_token" { (*k, "<redacted>") } else { (*k, v.as_str()) })
            .collect();
        f.debug_struct("ReachQuery").field("url", &self.url).field("params", &shown).finish()
    }
}

/// One flattened spec joined with its estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub columns: Vec<(String, Cell)>,
    pub users: u64,
}

impl ResultRow {
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.columns.iter().find(|(n, _)| n == column).map(|(_, c)| c)
    }

    /// JSON object: spec columns in order, then `users`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::with_capacity(self.columns.len() + 1);
        for (name, cell) in &self.columns {
            obj.insert(name.clone(), cell_value(cell));
        }
        obj.insert(s!(ESTIMATE_COLUMN), Value::from(self.users));
        Value::Object(obj)
    }
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Scalar(v) => v.clone(),
        Cell::List(items) => Value::Array(items.clone()),
    }
}

/// Pull `data.users` out of a response body.
pub fn extract_estimate(response: &Response) -> Result<u64> {
    let body: Value = serde_json::from_str(&response.body)?;
    let users = body
        .get("data")
        .and_then(|d| d.get("users"))
        .and_then(Value::as_u64);

    match users {
        Some(n) if response.is_success() => Ok(n),
        _ => Err(ReachError::MissingEstimate {
            status: response.status,
            api_message: api_error_message(&body),
        }),
    }
}

fn api_error_message(body: &Value) -> Option<String> {
    let err = body.get("error")?;
    match err.get("message").and_then(Value::as_str) {
        Some(m) => Some(s!(m)),
        None => Some(err.to_string()),
    }
}

/// Spec + its response → one row. Fails (no row) if the estimate is missing.
///
/// The estimate owns the `users` column; a spec field flattened to that
/// name is renamed `spec.users`.
pub fn process(spec: &TargetingSpec, response: &Response) -> Result<ResultRow> {
    let users = extract_estimate(response)?;
    let mut columns = spec.flatten();
    for (name, _) in &mut columns {
        if name == ESTIMATE_COLUMN {
            *name = join!("spec.", ESTIMATE_COLUMN);
        }
    }
    Ok(ResultRow { columns, users })
}
