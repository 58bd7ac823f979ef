//! Community feed loads.

use crate::domain::post::Post;
use crate::pagination::{Cursor, Page, PageRequest};
use crate::repository::{PostListQuery, PostPageReader};
use crate::services::LoadResult;

/// Loads the first page of the community feed.
pub fn first_page<R>(repo: &R, page_size: usize) -> LoadResult<Page<Post>>
where
    R: PostPageReader + ?Sized,
{
    load(repo, &PostListQuery::new(PageRequest::first(page_size)))
}

/// Loads the page following `previous_cursor` of the community feed.
///
/// A `None` cursor means the feed is already exhausted; the terminal empty
/// page is returned without touching the repository.
pub fn next_page<R>(
    repo: &R,
    page_size: usize,
    previous_cursor: Option<Cursor>,
) -> LoadResult<Page<Post>>
where
    R: PostPageReader + ?Sized,
{
    let Some(cursor) = previous_cursor else {
        return Ok(Page::empty());
    };
    load(repo, &PostListQuery::new(PageRequest::after(page_size, cursor)))
}

fn load<R>(repo: &R, query: &PostListQuery) -> LoadResult<Page<Post>>
where
    R: PostPageReader + ?Sized,
{
    repo.list_posts(query).map_err(|err| {
        log::error!("Failed to load community page: {err}");
        err.into()
    })
}
