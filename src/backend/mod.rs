//! Contract for the remote document store.
//!
//! The store is an external collaborator (a Firestore-like service). This
//! crate only builds queries and consumes result snapshots; all indexing,
//! filtering, and consistency work happens on the backend's side. Timeouts
//! are the backend client's own; no extra layer is added here.

use serde_json::{Map, Value};

use crate::query::Query;

pub mod errors;

pub use errors::{BackendError, BackendResult};

/// One document snapshot returned by a query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Stable identifier assigned by the backend on creation.
    pub id: String,
    /// Decodable field map.
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Field map as a JSON object, for `serde` decoding.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// A collection-scoped document store.
///
/// Implementations must honor clause conjunction, `order_by`, `limit`, and
/// `start_after` resumption, and report failures through [`BackendError`]
/// without translating them; classification into user-facing categories is
/// the services layer's job.
pub trait DocumentStore {
    fn run_query(&self, query: &Query) -> BackendResult<Vec<Document>>;
}
