//! Pet listing loads for the browse and volunteer dashboard screens.

use crate::domain::filter::PetFilter;
use crate::domain::pet::Pet;
use crate::domain::types::{ShelterId, VolunteerId};
use crate::pagination::{Cursor, Page, PageRequest};
use crate::repository::{PetListQuery, PetPageReader, VolunteerPetListQuery};
use crate::services::LoadResult;

/// Loads the first page of the general pet listing.
pub fn first_page<R>(
    repo: &R,
    filter: PetFilter,
    page_size: usize,
    viewer: Option<ShelterId>,
) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    let mut query = PetListQuery::new(PageRequest::first(page_size)).filter(filter);
    query.viewer = viewer;
    load(repo, &query)
}

/// Loads the page following `previous_cursor` of the general pet listing.
///
/// A `None` cursor means the listing is already exhausted; the terminal
/// empty page is returned without touching the repository.
pub fn next_page<R>(
    repo: &R,
    filter: PetFilter,
    page_size: usize,
    viewer: Option<ShelterId>,
    previous_cursor: Option<Cursor>,
) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    let Some(cursor) = previous_cursor else {
        return Ok(Page::empty());
    };
    let mut query = PetListQuery::new(PageRequest::after(page_size, cursor)).filter(filter);
    query.viewer = viewer;
    load(repo, &query)
}

/// Loads the first page of one volunteer's own pets.
pub fn volunteer_first_page<R>(
    repo: &R,
    owner: Option<VolunteerId>,
    page_size: usize,
) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    let mut query = VolunteerPetListQuery::new(PageRequest::first(page_size));
    query.owner = owner;
    load_volunteer(repo, &query)
}

/// Loads the page following `previous_cursor` of one volunteer's own pets.
pub fn volunteer_next_page<R>(
    repo: &R,
    owner: Option<VolunteerId>,
    page_size: usize,
    previous_cursor: Option<Cursor>,
) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    let Some(cursor) = previous_cursor else {
        return Ok(Page::empty());
    };
    let mut query = VolunteerPetListQuery::new(PageRequest::after(page_size, cursor));
    query.owner = owner;
    load_volunteer(repo, &query)
}

fn load<R>(repo: &R, query: &PetListQuery) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    repo.list_pets(query).map_err(|err| {
        log::error!("Failed to load pet page: {err}");
        err.into()
    })
}

fn load_volunteer<R>(repo: &R, query: &VolunteerPetListQuery) -> LoadResult<Page<Pet>>
where
    R: PetPageReader + ?Sized,
{
    repo.list_volunteer_pets(query).map_err(|err| {
        log::error!("Failed to load volunteer pet page: {err}");
        err.into()
    })
}
