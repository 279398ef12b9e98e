// src/client.rs
//
// The requester: throttle, then one GET per targeting spec.
// Sequential by construction (`&mut self`), so at most one request in flight.

use std::time::Duration;

use crate::config::{ApiOptions, Credentials, RateOptions};
use crate::core::{HttpTransport, RateLimiter, Response, Transport};
use crate::error::Result;
use crate::specs::{process, ReachQuery, ResultRow, TargetingSpec};

pub struct ReachClient<T: Transport = HttpTransport> {
    creds: Credentials,
    api: ApiOptions,
    limiter: RateLimiter,
    transport: T,
}

impl ReachClient<HttpTransport> {
    pub fn new(creds: Credentials, api: ApiOptions, rate: &RateOptions) -> Result<Self> {
        Ok(Self::with_transport(creds, api, RateLimiter::from_options(rate), HttpTransport::new()?))
    }
}

impl<T: Transport> ReachClient<T> {
    pub fn with_transport(creds: Credentials, api: ApiOptions, limiter: RateLimiter, transport: T) -> Self {
        Self { creds, api, limiter, transport }
    }

    pub fn query_for(&self, spec: &TargetingSpec) -> ReachQuery {
        ReachQuery::build(spec, &self.creds, &self.api)
    }

    /// Wait on the throttle, then GET. The response comes back raw; transport
    /// errors propagate untouched.
    pub fn request(&mut self, spec: &TargetingSpec) -> Result<Response> {
        let query = self.query_for(spec);

        let waited = self.limiter.acquire();
        if waited > Duration::ZERO {
            logd!("throttle: waited {} ms", waited.as_millis());
        }

        logd!("GET {}", query.url);
        let resp = self.transport.get(&query.url, &query.params)?;
        logd!("HTTP {} ({} bytes)", resp.status, resp.body.len());
        Ok(resp)
    }

    /// `request` + `process` in one go.
    pub fn estimate(&mut self, spec: &TargetingSpec) -> Result<ResultRow> {
        let resp = self.request(spec)?;
        process(spec, &resp)
    }
}
