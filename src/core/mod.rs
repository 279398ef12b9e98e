// src/core/mod.rs

pub mod net;
pub mod throttle;

pub use net::{HttpTransport, Response, Transport};
pub use throttle::RateLimiter;
