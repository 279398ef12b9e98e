// src/core/net.rs

// HTTP GET seam. One blocking request per call, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Raw response: status + body, nothing interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform a GET with query pairs. The real one is
/// `HttpTransport`; tests plug in fakes.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<Response> {
        (**self).get(url, query)
    }
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<Response> {
        let resp = self.client.get(url).query(query).send()?;
        let status = resp.status().as_u16();
        // Non-2xx bodies still carry the API's error object; keep them
        let body = resp.text()?;
        Ok(Response { status, body })
    }
}
