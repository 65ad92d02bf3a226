//! Pagination module
//!
//! Offset/limit pagination over the ratings API.
//!
//! # Overview
//!
//! A request stream starts at offset 0 with an unknown total. Each page
//! response carries its records under `result` and the overall record count
//! under `total`; the cursor advances by the batch size after every page and
//! pagination ends once the offset reaches the total. Records are handed out
//! one at a time through a lazy [`RecordStream`].

mod stream;
mod types;

pub use stream::{paginate, RecordStream};
pub use types::{
    OffsetPaginator, Page, PaginationCursor, StopCondition, StopResult, TerminationPolicy,
    LIMIT_PARAM, OFFSET_PARAM,
};
