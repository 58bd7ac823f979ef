//! Data core for the PawHaven pet adoption platform.
//!
//! This crate implements the paginated fetch-and-enrich pipeline sitting
//! between the UI layer and a remote document store: cursor-based page
//! fetching, filter compilation into backend predicate clauses, and
//! secondary-collection enrichment (view counts, favorite flags) via batched
//! fan-out queries.
//!
//! The document store itself is an external collaborator behind the
//! [`backend::DocumentStore`] trait. The UI layer owns observable state,
//! caching, and retry; every load here is an explicit request in, explicit
//! result out.

pub mod backend;
pub mod domain;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod services;

/// Primary collection holding pet documents.
pub const PETS_COLLECTION: &str = "pets";
/// Primary collection holding community post documents.
pub const COMMUNITY_COLLECTION: &str = "community";
/// Secondary collection of per-view records keyed by `petId`.
pub const VIEWS_COLLECTION: &str = "views";
/// Secondary collection of favorite records keyed by `(petId, shelterId)`.
pub const FAVORITES_COLLECTION: &str = "favorites";
/// Collection the volunteer owner reference path points into.
pub const VOLUNTEERS_COLLECTION: &str = "volunteers";
