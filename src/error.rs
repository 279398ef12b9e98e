// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = ReachError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ReachError {
    #[error("config: {0}")]
    Config(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid targeting spec: {0}")]
    InvalidSpec(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport: {0}")]
    Transport(String),

    /// The body had no `data.users`. Covers API error objects
    /// (bad spec, auth, rate limited) as well as any other unexpected shape.
    #[error("response (HTTP {status}) has no data.users{}", suffix(.api_message))]
    MissingEstimate {
        status: u16,
        api_message: Option<String>,
    },

    #[error("usage: {0}")]
    Usage(String),
}

fn suffix(api_message: &Option<String>) -> String {
    match api_message {
        Some(m) => format!(": {m}"),
        None => s!(),
    }
}

impl ReachError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReachError::Io { path: path.into(), source }
    }
}
