//! Authenticated session for the ratings API
//!
//! A session owns one reqwest client (and its connection pool), the base URL
//! resolved from the connection config, and the credentials attached to
//! every request. Requests go through the retry policy and the optional
//! rate limiter.

use super::rate_limit::RateLimiter;
use super::retry::RetryPolicy;
use crate::auth::AuthConfig;
use crate::config::{ConnectionConfig, HookConfig};
use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams};
use reqwest::{Client, Response, StatusCode};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A live, reusable connection to the ratings API
pub struct Session {
    id: u64,
    client: Client,
    base_url: String,
    auth: AuthConfig,
    retry: RetryPolicy,
    timeout: Duration,
    rate_limiter: Option<RateLimiter>,
}

impl Session {
    /// Open a session for a resolved connection
    ///
    /// Fails with a configuration error when the connection has no host.
    /// Credentials are attached but not checked; a bad login surfaces on the
    /// first request.
    pub fn open(connection: &ConnectionConfig, config: &HookConfig) -> Result<Self> {
        let base_url = connection.base_url()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        let auth = AuthConfig::from_connection(connection);

        debug!(
            session_id = id,
            conn_id = %connection.conn_id,
            base_url = %base_url,
            auth = auth.kind(),
            "Opened session"
        );

        Ok(Self {
            id,
            client,
            base_url,
            auth,
            retry: config.retry.clone(),
            timeout: config.timeout,
            rate_limiter: config.rate_limit.as_ref().map(RateLimiter::new),
        })
    }

    /// Process-unique identifier of this session
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Base URL (`scheme://host:port`)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to each request
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Retry policy applied to each request
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Full URL for an endpoint path such as `/ratings`
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{base}/{endpoint}")
    }

    /// GET a URL and decode the body as JSON, retrying per the retry policy
    pub async fn get_json(&self, url: &str, query: &QueryParams) -> Result<JsonValue> {
        let max_retries = self.retry.max_retries;
        let mut attempt = 0;

        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            match self.send(url, query).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < max_retries && self.retry.should_retry(&err) => {
                    let delay = self.retry.delay_for(&err, attempt);
                    warn!(
                        "Request to {} failed ({}), attempt {}/{}, retrying in {:?}",
                        url,
                        err,
                        attempt + 1,
                        max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Send a single GET request
    async fn send(&self, url: &str, query: &QueryParams) -> Result<JsonValue> {
        let mut req = self.client.get(url).timeout(self.timeout);
        if !query.is_empty() {
            req = req.query(query);
        }
        req = self.auth.apply(req);

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            if let Some(retry_after) = extract_retry_after(&response) {
                return Err(Error::RateLimited {
                    retry_after_seconds: retry_after,
                });
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let text = response.text().await?;
        debug!(session_id = self.id, "Request succeeded: GET {}", url);

        serde_json::from_str(&text)
            .map_err(|e| Error::decode(format!("Response from {url} is not valid JSON: {e}")))
    }

    /// Release the session and its pooled connections
    pub fn close(self) {
        debug!(session_id = self.id, base_url = %self.base_url, "Closed session");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .field("retry", &self.retry)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Extract retry-after header value (seconds)
fn extract_retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
