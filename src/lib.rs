//! # MovieLens Hook
//!
//! A paginated, retry-aware client for the MovieLens ratings API.
//!
//! ## Features
//!
//! - **One Reusable Session**: opened lazily, reused across calls, released on close or drop
//! - **Transparent Pagination**: offset/limit pages walked until the reported total
//! - **Lazy Records**: ratings are streamed one at a time, never buffered beyond a page
//! - **Explicit Retries**: configurable retry count and backoff per page request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use movielens_hook::{ConnectionConfig, MemoryStore, MovielensHook, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = MemoryStore::new().with_connection(
//!         ConnectionConfig::new("movielens", "localhost")
//!             .with_login("airflow", Some("airflow".to_string())),
//!     );
//!     let mut hook = MovielensHook::with_conn_id(store, "movielens");
//!
//!     let mut ratings = hook.get_ratings_for_month(2019, 1, 100).await?;
//!     while let Some(rating) = ratings.next().await {
//!         println!("{}", rating?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MovielensHook                         │
//! │  get_conn() → Session   close()   get_ratings*() → Stream   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────────┬─────────────┴───┬──────────────┬────────────┐
//! │    Config     │      HTTP       │   Paginate   │   Dates    │
//! ├───────────────┼─────────────────┼──────────────┼────────────┤
//! │ Memory store  │ Session         │ Offset/limit │ Month      │
//! │ Env store     │ Basic auth      │ Total count  │ windows    │
//! │ File store    │ Retry, backoff  │ Safety caps  │            │
//! │               │ Rate limit      │              │            │
//! └───────────────┴─────────────────┴──────────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the hook
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection and hook configuration
pub mod config;

/// Authentication
pub mod auth;

/// HTTP session with retry and rate limiting
pub mod http;

/// Offset/limit pagination
pub mod pagination;

/// Month date windows
pub mod dates;

/// The hook itself
pub mod hook;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{ConnectionConfig, ConnectionStore, EnvStore, FileStore, HookConfig, MemoryStore};
pub use hook::{MovielensHook, DEFAULT_BATCH_SIZE, RATINGS_ENDPOINT};
pub use http::{RetryPolicy, Session};
pub use pagination::{RecordStream, StopCondition, TerminationPolicy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
