//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::backend::BackendResult;
use crate::domain::pet::Pet;
use crate::domain::post::Post;
use crate::pagination::Page;
use crate::repository::{
    PetListQuery, PetPageReader, PostListQuery, PostPageReader, VolunteerPetListQuery,
};

mock! {
    pub Repository {}

    impl PetPageReader for Repository {
        fn list_pets(&self, query: &PetListQuery) -> BackendResult<Page<Pet>>;
        fn list_volunteer_pets(&self, query: &VolunteerPetListQuery) -> BackendResult<Page<Pet>>;
    }

    impl PostPageReader for Repository {
        fn list_posts(&self, query: &PostListQuery) -> BackendResult<Page<Post>>;
    }
}
