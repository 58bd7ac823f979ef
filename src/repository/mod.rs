//! Paging repositories over the document store.
//!
//! Each load call is one logical request: compile the filter, fetch one
//! cursor-bounded page, enrich it from the secondary collections, and hand
//! back an immutable [`Page`]. Errors cross this boundary raw as
//! [`BackendError`]; the services layer classifies them.

use crate::backend::{BackendResult, DocumentStore};
use crate::domain::filter::PetFilter;
use crate::domain::pet::Pet;
use crate::domain::post::Post;
use crate::domain::types::{ShelterId, VolunteerId};
use crate::pagination::{Page, PageRequest};

pub mod enrich;
pub(crate) mod fetch;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod pet;
pub mod post;

/// Query for the general pet listing.
#[derive(Debug, Clone, Default)]
pub struct PetListQuery {
    pub filter: PetFilter,
    pub page: PageRequest,
    /// Shelter whose favorites flag the page; absent for anonymous browsing.
    pub viewer: Option<ShelterId>,
}

impl PetListQuery {
    pub fn new(page: PageRequest) -> Self {
        Self {
            filter: PetFilter::default(),
            page,
            viewer: None,
        }
    }

    pub fn filter(mut self, filter: PetFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn viewer(mut self, viewer: ShelterId) -> Self {
        self.viewer = Some(viewer);
        self
    }
}

/// Query for the pets owned by one volunteer.
#[derive(Debug, Clone, Default)]
pub struct VolunteerPetListQuery {
    /// Scope owner. `None` short-circuits to an empty terminal page so an
    /// unscoped query can never leak other volunteers' listings.
    pub owner: Option<VolunteerId>,
    pub page: PageRequest,
}

impl VolunteerPetListQuery {
    pub fn new(page: PageRequest) -> Self {
        Self { owner: None, page }
    }

    pub fn owner(mut self, owner: VolunteerId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Query for the community post feed.
#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    pub page: PageRequest,
}

impl PostListQuery {
    pub fn new(page: PageRequest) -> Self {
        Self { page }
    }
}

pub trait PetPageReader {
    fn list_pets(&self, query: &PetListQuery) -> BackendResult<Page<Pet>>;
    fn list_volunteer_pets(&self, query: &VolunteerPetListQuery) -> BackendResult<Page<Pet>>;
}

pub trait PostPageReader {
    fn list_posts(&self, query: &PostListQuery) -> BackendResult<Page<Post>>;
}

/// Document-store implementation of the paging repositories.
pub struct DocumentRepository<'a, B: DocumentStore + ?Sized> {
    backend: &'a B,
}

impl<'a, B: DocumentStore + ?Sized> DocumentRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    pub(crate) fn backend(&self) -> &'a B {
        self.backend
    }
}
