use crate::PETS_COLLECTION;
use crate::backend::{BackendResult, DocumentStore};
use crate::domain::pet::Pet;
use crate::pagination::Page;
use crate::query::{Clause, FIELD_VOLUNTEER, compile_filter};
use crate::repository::enrich::enrich_pets;
use crate::repository::fetch::{decode_documents, fetch_raw_page};
use crate::repository::{DocumentRepository, PetListQuery, PetPageReader, VolunteerPetListQuery};

impl<B: DocumentStore + ?Sized> PetPageReader for DocumentRepository<'_, B> {
    fn list_pets(&self, query: &PetListQuery) -> BackendResult<Page<Pet>> {
        let clauses = compile_filter(&query.filter);
        let raw = fetch_raw_page(self.backend(), PETS_COLLECTION, clauses, &query.page)?;

        let mut pets = decode_documents(&raw.documents, Pet::from_document);
        enrich_pets(self.backend(), &mut pets, query.viewer.as_ref())?;

        Ok(Page {
            items: pets,
            next_cursor: raw.next_cursor,
        })
    }

    fn list_volunteer_pets(&self, query: &VolunteerPetListQuery) -> BackendResult<Page<Pet>> {
        // Without an owner there is nothing this query may legitimately
        // return; never fall through to an unscoped fetch.
        let Some(owner) = &query.owner else {
            return Ok(Page::empty());
        };

        let clauses = vec![Clause::eq(FIELD_VOLUNTEER, owner.to_owner_ref())];
        let raw = fetch_raw_page(self.backend(), PETS_COLLECTION, clauses, &query.page)?;

        let mut pets = decode_documents(&raw.documents, Pet::from_document);
        // The volunteer dashboard shows view counts only; favorites are a
        // shelter-side concept, so no viewer is passed.
        enrich_pets(self.backend(), &mut pets, None)?;

        Ok(Page {
            items: pets,
            next_cursor: raw.next_cursor,
        })
    }
}
