//! Lazy record stream over paginated GET requests

use super::types::{OffsetPaginator, Page, PaginationCursor};
use crate::error::Result;
use crate::http::Session;
use crate::types::{QueryParams, Record};
use futures::Stream;
use std::pin::Pin;
use tracing::debug;

/// Stream of records borrowed from a session
///
/// Ends after the last page, or right after yielding the first error.
pub type RecordStream<'a> = Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'a>>;

struct PageFetcher<'a> {
    session: &'a Session,
    url: String,
    params: QueryParams,
    paginator: OffsetPaginator,
    cursor: PaginationCursor,
    buffered: std::vec::IntoIter<Record>,
    done: bool,
}

impl PageFetcher<'_> {
    async fn fetch_next_page(&mut self) -> Result<()> {
        let query = self.paginator.request_params(&self.params, &self.cursor);
        debug!(
            url = %self.url,
            offset = self.cursor.offset,
            limit = self.paginator.batch_size,
            "Requesting page"
        );

        let body = self.session.get_json(&self.url, &query).await?;
        let page = Page::from_json(body)?;

        let records_count = page.result.len();
        let next = self
            .paginator
            .process_page(records_count, page.total, &mut self.cursor);

        debug!(
            "Page {}: fetched {} records (offset {}, total {})",
            self.cursor.pages_fetched, records_count, self.cursor.offset, page.total
        );

        self.done = next.should_stop();
        self.buffered = page.result.into_iter();
        Ok(())
    }
}

/// Fetch records from `endpoint`, walking offset/limit pages lazily
///
/// Each poll hands out the next record of the current page; the next page is
/// requested only once the current one is drained. A failed page yields its
/// error without any of its records and ends the stream.
pub fn paginate<'a>(
    session: &'a Session,
    endpoint: &str,
    params: QueryParams,
    paginator: OffsetPaginator,
) -> RecordStream<'a> {
    let fetcher = PageFetcher {
        session,
        url: session.url_for(endpoint),
        params,
        paginator,
        cursor: PaginationCursor::new(),
        buffered: Vec::new().into_iter(),
        done: false,
    };

    Box::pin(futures::stream::try_unfold(fetcher, |mut fetcher| async move {
        loop {
            if let Some(record) = fetcher.buffered.next() {
                return Ok(Some((record, fetcher)));
            }
            if fetcher.done {
                return Ok(None);
            }
            fetcher.fetch_next_page().await?;
        }
    }))
}
