use crate::COMMUNITY_COLLECTION;
use crate::backend::{BackendResult, DocumentStore};
use crate::domain::post::Post;
use crate::pagination::Page;
use crate::repository::fetch::{decode_documents, fetch_raw_page};
use crate::repository::{DocumentRepository, PostListQuery, PostPageReader};

impl<B: DocumentStore + ?Sized> PostPageReader for DocumentRepository<'_, B> {
    fn list_posts(&self, query: &PostListQuery) -> BackendResult<Page<Post>> {
        let raw = fetch_raw_page(self.backend(), COMMUNITY_COLLECTION, Vec::new(), &query.page)?;
        let posts = decode_documents(&raw.documents, Post::from_document);

        Ok(Page {
            items: posts,
            next_cursor: raw.next_cursor,
        })
    }
}
