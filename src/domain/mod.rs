//! Domain entities exposed by the paging services.

pub mod filter;
pub mod pet;
pub mod post;
pub mod types;
