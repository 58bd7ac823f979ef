//! Cursor-based pagination primitives shared by every paging repository.

use crate::backend::Document;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Opaque token referencing the last document of a fetched page.
///
/// Produced by the page fetcher and fed back into `start_after` to resume a
/// query where the previous page left off. Callers must not interpret the
/// contents; backend implementations may read the underlying document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn from_document(document: &Document) -> Self {
        Self(document.id.clone())
    }

    /// Document id the cursor points at. For backend implementations only.
    pub fn document_id(&self) -> &str {
        &self.0
    }
}

/// Ephemeral request for a single page, created per load call.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page_size: usize,
    cursor: Option<Cursor>,
}

impl PageRequest {
    /// Request for the first page. A zero page size is normalized up to 1.
    pub fn first(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            cursor: None,
        }
    }

    /// Request for the page following `cursor`.
    pub fn after(page_size: usize, cursor: Cursor) -> Self {
        Self {
            page_size: page_size.max(1),
            cursor: Some(cursor),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Read-only snapshot of one fetched page.
///
/// `next_cursor == None` signals exhaustion: a page shorter than the
/// requested size is always terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    /// Terminal empty page.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_cursor.is_none()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
