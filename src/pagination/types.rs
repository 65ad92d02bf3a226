//! Pagination types
//!
//! Cursor, page payload and the rules deciding when to stop.

use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams, Record};
use serde::Deserialize;
use tracing::warn;

/// Query parameter carrying the offset
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

// ============================================================================
// Cursor
// ============================================================================

/// Tracks pagination progress
///
/// `total` stays `None` until the first page arrives, so a fresh cursor
/// always has more to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Offset of the next page
    pub offset: u64,
    /// Total record count reported by the server
    pub total: Option<u64>,
    /// Pages fetched so far
    pub pages_fetched: u32,
}

impl PaginationCursor {
    /// Create a cursor at offset 0 with an unknown total
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if another page should be requested
    pub fn has_more(&self) -> bool {
        match self.total {
            None => true,
            Some(total) => self.offset < total,
        }
    }

    /// Record a fetched page: store the reported total and advance the offset
    pub fn advance(&mut self, batch_size: u32, total: u64) {
        self.offset += u64::from(batch_size);
        self.total = Some(total);
        self.pages_fetched += 1;
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of the ratings API response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Records in server order
    pub result: Vec<Record>,
    /// Total number of records across all pages
    pub total: u64,
}

impl Page {
    /// Decode a page from a JSON response body
    pub fn from_json(body: JsonValue) -> Result<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| Error::decode(format!("Expected a JSON object, got: {body}")))?;

        for field in ["result", "total"] {
            if !object.contains_key(field) {
                return Err(Error::decode(format!(
                    "Response is missing the '{field}' field"
                )));
            }
        }

        serde_json::from_value(body)
            .map_err(|e| Error::decode(format!("Unexpected page shape: {e}")))
    }
}

// ============================================================================
// Termination
// ============================================================================

/// What ends pagination besides reaching the reported total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop only when offset reaches the reported total
    #[default]
    TotalCount,
    /// Also stop on a page with no records
    EmptyPage,
}

/// Termination rules for a paginated request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminationPolicy {
    /// Stop condition in addition to the total count
    pub stop_condition: StopCondition,
    /// Hard cap on the number of page requests
    pub max_pages: Option<u32>,
}

impl TerminationPolicy {
    /// Trust the server's total and stop on an empty page
    pub fn stop_on_empty_page() -> Self {
        Self {
            stop_condition: StopCondition::EmptyPage,
            max_pages: None,
        }
    }

    /// Cap the number of page requests
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Result of processing a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Request the next page
    Continue,
    /// Pagination is complete
    Stop,
}

impl StopResult {
    /// Check if we should continue
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

// ============================================================================
// Offset Paginator
// ============================================================================

/// Offset/limit pagination (e.g. `?offset=100&limit=100`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetPaginator {
    /// Number of records per page
    pub batch_size: u32,
    /// Termination rules
    pub termination: TerminationPolicy,
}

impl OffsetPaginator {
    /// Create a paginator using `offset`/`limit` parameters
    ///
    /// A batch size of zero could never advance the cursor and is rejected.
    pub fn new(batch_size: u32) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::invalid_argument(
                "batch_size",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            batch_size,
            termination: TerminationPolicy::default(),
        })
    }

    /// Set the termination policy
    #[must_use]
    pub fn with_termination(mut self, termination: TerminationPolicy) -> Self {
        self.termination = termination;
        self
    }

    /// Query for the page at the cursor: the caller's params plus offset and limit
    ///
    /// The caller's map is left untouched; pagination keys win on collision.
    pub fn request_params(&self, base: &QueryParams, cursor: &PaginationCursor) -> QueryParams {
        let mut params = base.clone();
        params.insert(OFFSET_PARAM.to_string(), cursor.offset.to_string());
        params.insert(LIMIT_PARAM.to_string(), self.batch_size.to_string());
        params
    }

    /// Advance the cursor past a page and decide whether to continue
    pub fn process_page(
        &self,
        records_count: usize,
        total: u64,
        cursor: &mut PaginationCursor,
    ) -> StopResult {
        cursor.advance(self.batch_size, total);

        if !cursor.has_more() {
            return StopResult::Stop;
        }

        if self.termination.stop_condition == StopCondition::EmptyPage && records_count == 0 {
            warn!(
                offset = cursor.offset,
                total, "Empty page before reaching the reported total, stopping"
            );
            return StopResult::Stop;
        }

        if let Some(max_pages) = self.termination.max_pages {
            if cursor.pages_fetched >= max_pages {
                warn!(
                    max_pages,
                    offset = cursor.offset,
                    total,
                    "Page limit reached before the reported total, stopping"
                );
                return StopResult::Stop;
            }
        }

        StopResult::Continue
    }
}
