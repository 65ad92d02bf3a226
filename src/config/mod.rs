//! Configuration module
//!
//! Connection settings for the remote ratings API and per-hook behaviour.
//!
//! # Overview
//!
//! - `ConnectionConfig` - host, scheme, port and credentials for one connection
//! - `HookConfig` - retry, timeout, rate limit and pagination settings
//! - `ConnectionStore` - where connection settings are resolved from, keyed
//!   by connection identifier (in-memory, environment, YAML file)

mod store;
mod types;

pub use store::{ConnectionStore, EnvStore, FileStore, MemoryStore, DEFAULT_ENV_PREFIX};
pub use types::{
    ConnectionConfig, HookConfig, HookConfigBuilder, DEFAULT_CONN_ID, DEFAULT_PORT,
    DEFAULT_SCHEME,
};
