//! Page fetcher: one bounded backend round-trip per page request.

use crate::backend::{BackendResult, Document, DocumentStore};
use crate::pagination::{Cursor, PageRequest};
use crate::query::{Clause, Direction, FIELD_CREATED_AT, Query};

/// Raw backend page before per-document decoding.
pub(crate) struct RawPage {
    pub documents: Vec<Document>,
    pub next_cursor: Option<Cursor>,
}

/// Runs one `createdAt desc` query bounded by the page request.
///
/// Cursor advancement is raw-count-based: the next cursor points at the last
/// raw document iff the backend returned a full page, regardless of how many
/// documents later survive decoding. A short or empty page is terminal.
pub(crate) fn fetch_raw_page<B>(
    backend: &B,
    collection: &str,
    clauses: Vec<Clause>,
    page: &PageRequest,
) -> BackendResult<RawPage>
where
    B: DocumentStore + ?Sized,
{
    let mut query = Query::collection(collection)
        .filter_all(clauses)
        .order_by(FIELD_CREATED_AT, Direction::Descending)
        .limit(page.page_size());
    if let Some(cursor) = page.cursor() {
        query = query.start_after(cursor.clone());
    }

    log::debug!(
        "Fetching page of {} from '{}' ({} clause(s), resuming: {})",
        page.page_size(),
        collection,
        query.clauses.len(),
        page.cursor().is_some(),
    );

    let documents = backend.run_query(&query)?;
    let next_cursor = if documents.len() == page.page_size() {
        documents.last().map(Cursor::from_document)
    } else {
        None
    };

    Ok(RawPage {
        documents,
        next_cursor,
    })
}

/// Decodes all documents of a page, skipping those that fail.
///
/// A malformed document is logged and dropped; it never fails the page and
/// never affects cursor advancement.
pub(crate) fn decode_documents<T>(
    documents: &[Document],
    decode: impl Fn(&Document) -> Result<T, serde_json::Error>,
) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| match decode(document) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("Skipping malformed document '{}': {err}", document.id);
                None
            }
        })
        .collect()
}
