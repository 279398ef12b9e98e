// src/core/throttle.rs
//
// Token bucket, blocking. The bucket starts empty so even the first call
// waits one refill interval; with 1 request per window that is exactly a
// fixed pause before every request.

use std::{thread, time::{Duration, Instant}};

use crate::config::RateOptions;

#[derive(Debug)]
pub struct RateLimiter {
    capacity: f64,
    /// tokens per second; None → unlimited
    rate: Option<f64>,
    tokens: f64,
    last: Instant,
}

impl RateLimiter {
    /// `requests` calls per `window`. A zero window disables limiting.
    pub fn per_window(requests: u32, window: Duration) -> Self {
        let capacity = requests.max(1) as f64;
        let rate = if window.is_zero() {
            None
        } else {
            Some(capacity / window.as_secs_f64())
        };
        Self { capacity, rate, tokens: 0.0, last: Instant::now() }
    }

    pub fn from_options(opts: &RateOptions) -> Self {
        Self::per_window(opts.requests, opts.window)
    }

    pub fn unlimited() -> Self {
        Self::per_window(1, Duration::ZERO)
    }

    /// Time until the next token, without taking it.
    pub fn wait_time(&mut self) -> Duration {
        let Some(rate) = self.rate else { return Duration::ZERO };
        self.refill(Instant::now());
        if self.tokens >= 1.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64((1.0 - self.tokens) / rate).unwrap_or(Duration::MAX)
        }
    }

    /// Block until a token is available, take it, return how long we slept.
    pub fn acquire(&mut self) -> Duration {
        if self.rate.is_none() {
            return Duration::ZERO;
        }
        let wait = self.wait_time();
        if !wait.is_zero() {
            thread::sleep(wait);
            self.refill(Instant::now());
        }
        // sleep() never undershoots; the clamp only absorbs float error
        self.tokens = (self.tokens - 1.0).max(0.0);
        wait
    }

    fn refill(&mut self, now: Instant) {
        if let Some(rate) = self.rate {
            let dt = now.saturating_duration_since(self.last).as_secs_f64();
            self.tokens = (self.tokens + dt * rate).min(self.capacity);
        }
        self.last = now;
    }
}
