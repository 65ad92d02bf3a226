//! MovieLens hook
//!
//! Owns one lazily-created [`Session`] to the ratings API and exposes the
//! rating queries on top of it.
//!
//! # Lifecycle
//!
//! The session is opened on the first call that needs it, reused by every
//! later call, and released by [`MovielensHook::close`] or when the hook is
//! dropped. After a close the next call resolves the connection from the
//! store again and opens a fresh session.
//!
//! Record streams borrow the hook, so a hook cannot be closed while one of
//! its streams is still alive.

use crate::config::{ConnectionStore, HookConfig};
use crate::dates;
use crate::error::Result;
use crate::http::Session;
use crate::pagination::{paginate, OffsetPaginator, RecordStream};
use crate::types::QueryParams;
use tracing::{debug, info};

/// Endpoint serving ratings
pub const RATINGS_ENDPOINT: &str = "/ratings";

/// Default number of records per page
pub const DEFAULT_BATCH_SIZE: u32 = 100;

/// Client for the MovieLens ratings API
pub struct MovielensHook {
    config: HookConfig,
    store: Box<dyn ConnectionStore>,
    session: Option<Session>,
}

impl MovielensHook {
    /// Create a hook resolving its connection from `store`
    ///
    /// Nothing is resolved or opened until the first request.
    pub fn new(store: impl ConnectionStore + 'static, config: HookConfig) -> Self {
        Self {
            config,
            store: Box::new(store),
            session: None,
        }
    }

    /// Create a hook for a connection identifier with default settings
    pub fn with_conn_id(
        store: impl ConnectionStore + 'static,
        conn_id: impl Into<String>,
    ) -> Self {
        Self::new(store, HookConfig::new(conn_id))
    }

    /// Connection identifier
    pub fn conn_id(&self) -> &str {
        &self.config.conn_id
    }

    /// Hook configuration
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Check if a session is currently open
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, opening one first if needed
    ///
    /// Opening resolves the connection from the store, checks the host and
    /// builds the base URL. A missing host fails here, before any request.
    pub async fn get_conn(&mut self) -> Result<&Session> {
        let session = match self.session.take() {
            Some(session) => session,
            None => self.connect().await?,
        };
        Ok(self.session.insert(session))
    }

    async fn connect(&self) -> Result<Session> {
        let connection = self.store.get_connection(&self.config.conn_id).await?;
        let session = Session::open(&connection, &self.config)?;
        info!(
            conn_id = %self.config.conn_id,
            base_url = %session.base_url(),
            "Connected to ratings API"
        );
        Ok(session)
    }

    /// Release the open session, if any
    ///
    /// Calling this without an open session does nothing.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(conn_id = %self.config.conn_id, "Closing session");
            session.close();
        }
    }

    /// Stream ratings between two dates
    ///
    /// Dates are passed to the API as-is and should be `YYYY-MM-DD`; a
    /// missing date leaves that side of the window open.
    pub async fn get_ratings(
        &mut self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        batch_size: u32,
    ) -> Result<RecordStream<'_>> {
        let mut params = QueryParams::new();
        if let Some(start_date) = start_date {
            params.insert("start_date".to_string(), start_date.to_string());
        }
        if let Some(end_date) = end_date {
            params.insert("end_date".to_string(), end_date.to_string());
        }

        self.get_with_pagination(RATINGS_ENDPOINT, params, batch_size)
            .await
    }

    /// Stream the ratings of one calendar month
    pub async fn get_ratings_for_month(
        &mut self,
        year: i32,
        month: u32,
        batch_size: u32,
    ) -> Result<RecordStream<'_>> {
        let (start_date, end_date) = dates::month_window(year, month)?;
        self.get_ratings(Some(&start_date), Some(&end_date), batch_size)
            .await
    }

    /// Stream records from any paginated endpoint of the API
    pub async fn get_with_pagination(
        &mut self,
        endpoint: &str,
        params: QueryParams,
        batch_size: u32,
    ) -> Result<RecordStream<'_>> {
        let paginator =
            OffsetPaginator::new(batch_size)?.with_termination(self.config.termination);
        let session = self.get_conn().await?;
        Ok(paginate(session, endpoint, params, paginator))
    }
}

impl Drop for MovielensHook {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for MovielensHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovielensHook")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
