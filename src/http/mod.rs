//! HTTP module
//!
//! The authenticated session used for every call to the ratings API.
//!
//! # Features
//!
//! - **Session**: one reqwest client bound to a base URL and credentials
//! - **Automatic Retries**: explicit `RetryPolicy` with configurable backoff
//! - **Rate Limiting**: optional token bucket rate limiter using governor

mod rate_limit;
mod retry;
mod session;

pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use retry::RetryPolicy;
pub use session::Session;
