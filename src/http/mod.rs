//! HTTP module
//!
//! Provides the transport the API façade is built on.
//!
//! # Features
//!
//! - **Transport trait**: GET/POST with flat query or form parameters
//! - **Cookie jar**: Session cookies set by login are kept and resent
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod params;
mod rate_limit;
mod transport;

pub use client::HttpClient;
pub use params::{ParamValue, Params};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;

#[cfg(test)]
mod tests;
