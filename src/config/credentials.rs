// src/config/credentials.rs
//
// Account credentials + the config file that carries them.
//
// File shape (JSON):
//   { "access_token": "...", "ad_account_id": "1234", "api_version": "v3.2" }
// `api_version` and `base_url` are optional overrides for ApiOptions.

use std::{fmt, fs, path::Path};

use serde::Deserialize;

use crate::config::consts::ACCOUNT_PREFIX;
use crate::error::{ReachError, Result};

#[derive(Clone, Deserialize)]
pub struct ConfigFile {
    pub access_token: String,
    pub ad_account_id: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReachError::io(path, e))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Validated credentials. Read-only once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    account_id: String,
}

impl Credentials {
    /// Rejects an empty token or account id; adds `act_` to the id when absent.
    pub fn new(access_token: &str, ad_account_id: &str) -> Result<Self> {
        let token = access_token.trim();
        if token.is_empty() {
            return Err(ReachError::Config(s!("access_token is empty")));
        }
        let id = ad_account_id.trim();
        let bare = id.strip_prefix(ACCOUNT_PREFIX).unwrap_or(id);
        if bare.is_empty() {
            return Err(ReachError::Config(s!("ad_account_id is empty")));
        }
        Ok(Self {
            access_token: s!(token),
            account_id: join!(ACCOUNT_PREFIX, bare),
        })
    }

    pub fn from_file(file: &ConfigFile) -> Result<Self> {
        Self::new(&file.access_token, &file.ad_account_id)
    }

    pub fn access_token(&self) -> &str { &self.access_token }

    /// Always `act_`-prefixed.
    pub fn account_id(&self) -> &str { &self.account_id }
}

// Token stays out of Debug output (and so out of logs and error reports)
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}
