use serde_json::Map;

use pawhaven_core::backend::{BackendError, Document};
use pawhaven_core::domain::filter::PetFilter;
use pawhaven_core::domain::pet::Pet;
use pawhaven_core::domain::post::Post;
use pawhaven_core::domain::types::VolunteerId;
use pawhaven_core::pagination::{Cursor, Page};
use pawhaven_core::repository::mock::MockRepository;
use pawhaven_core::services::{LoadError, community, pets};

fn cursor_for(document_id: &str) -> Cursor {
    Cursor::from_document(&Document::new(document_id, Map::new()))
}

#[test]
fn unavailable_backend_surfaces_as_network_error() {
    let mut repo = MockRepository::new();
    repo.expect_list_pets()
        .times(1)
        .returning(|_| Err(BackendError::Unavailable("service down".into())));

    let result = pets::first_page(&repo, PetFilter::new(), 10, None);

    let err = result.unwrap_err();
    assert_eq!(err, LoadError::Network);
    assert_eq!(err.message_key(), "error.network");
}

#[test]
fn backend_errors_map_onto_the_full_taxonomy() {
    let cases: Vec<(fn() -> BackendError, LoadError)> = vec![
        (
            || BackendError::PermissionDenied("read denied".into()),
            LoadError::AccessDenied,
        ),
        (
            || BackendError::Unauthenticated("no session".into()),
            LoadError::AuthRequired,
        ),
        (
            || BackendError::Status {
                code: "resource-exhausted".into(),
                message: "quota".into(),
            },
            LoadError::Backend("resource-exhausted: quota".into()),
        ),
        (
            || BackendError::Transport(std::io::Error::other("connection reset")),
            LoadError::Network,
        ),
    ];

    for (raw, expected) in cases {
        let mut repo = MockRepository::new();
        repo.expect_list_pets().times(1).returning(move |_| Err(raw()));

        let err = pets::first_page(&repo, PetFilter::new(), 10, None).unwrap_err();
        assert_eq!(err, expected);
    }
}

#[test]
fn exhausted_listing_returns_terminal_page_without_a_repository_call() {
    // No expectations registered: any call would panic the mock.
    let repo = MockRepository::new();

    let page = pets::next_page(&repo, PetFilter::new(), 10, None, None).unwrap();

    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
}

#[test]
fn next_page_forwards_the_previous_cursor() {
    let mut repo = MockRepository::new();
    repo.expect_list_pets()
        .times(1)
        .withf(|query| {
            query
                .page
                .cursor()
                .is_some_and(|cursor| cursor.document_id() == "pet-9")
        })
        .returning(|_| {
            Ok(Page {
                items: vec![Pet::default()],
                next_cursor: None,
            })
        });

    let page = pets::next_page(
        &repo,
        PetFilter::new(),
        10,
        None,
        Some(cursor_for("pet-9")),
    )
    .unwrap();

    assert_eq!(page.items.len(), 1);
}

#[test]
fn volunteer_loads_pass_the_owner_scope_through() {
    let mut repo = MockRepository::new();
    repo.expect_list_volunteer_pets()
        .times(1)
        .withf(|query| {
            query
                .owner
                .as_ref()
                .is_some_and(|owner| owner.as_str() == "v1")
        })
        .returning(|_| Ok(Page::empty()));

    let owner = VolunteerId::new("v1").unwrap();
    let page = pets::volunteer_first_page(&repo, Some(owner), 10).unwrap();

    assert!(page.items.is_empty());
}

#[test]
fn exhausted_volunteer_listing_is_terminal_without_a_call() {
    let repo = MockRepository::new();

    let owner = VolunteerId::new("v1").unwrap();
    let page = pets::volunteer_next_page(&repo, Some(owner), 10, None).unwrap();

    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
}

#[test]
fn community_pages_pass_through_and_terminate() {
    let mut repo = MockRepository::new();
    repo.expect_list_posts().times(1).returning(|_| {
        Ok(Page {
            items: vec![Post::default()],
            next_cursor: Some(cursor_for("post-5")),
        })
    });

    let page = community::first_page(&repo, 10).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.next_cursor.as_ref().map(Cursor::document_id),
        Some("post-5")
    );

    let terminal = community::next_page(&repo, 10, None).unwrap();
    assert!(terminal.items.is_empty());
}
