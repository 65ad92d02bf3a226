//! Authentication
//!
//! The ratings API uses HTTP Basic authentication when the connection
//! carries a login. Credentials are attached to each request and never
//! validated up front.

use crate::config::ConnectionConfig;
use crate::types::OptionStringExt;
use reqwest::RequestBuilder;

/// Authentication applied to every request of a session
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password (may be absent)
        password: Option<String>,
    },
}

impl AuthConfig {
    /// Derive authentication from a connection: Basic when a login is set
    pub fn from_connection(connection: &ConnectionConfig) -> Self {
        match connection.login.clone().none_if_empty() {
            Some(username) => Self::Basic {
                username,
                password: connection.password.clone(),
            },
            None => Self::None,
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => req.basic_auth(username, password.as_ref()),
        }
    }

    /// Short name of the auth type, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::Basic { .. } => "basic",
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => write!(f, "None"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}
