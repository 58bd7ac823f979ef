//! In-memory [`DocumentStore`] used by the integration tests.
//!
//! Evaluates the query model the way the remote backend does: conjunctive
//! clauses, strict null equality (a fee of `0` never matches `== null`),
//! ordering with insertion-order ties, `limit`, and `start_after`
//! resumption. Tracks per-collection query counts and supports injected
//! failures so tests can assert fan-out shape and fail-fast behavior.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use pawhaven_core::backend::{BackendError, BackendResult, Document, DocumentStore};
use pawhaven_core::query::{Clause, Direction, Query};

type FailureFactory = Box<dyn Fn() -> BackendError>;

#[derive(Default)]
pub struct InMemoryStore {
    collections: RefCell<HashMap<String, Vec<Document>>>,
    query_counts: RefCell<HashMap<String, usize>>,
    failures: RefCell<HashMap<String, FailureFactory>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document; insertion order is the backend tiebreak order.
    pub fn insert(&self, collection: &str, id: &str, fields: Value) {
        let Value::Object(fields) = fields else {
            panic!("document fields must be a JSON object");
        };
        self.collections
            .borrow_mut()
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id, fields));
    }

    /// Number of queries this store has served for `collection`.
    pub fn query_count(&self, collection: &str) -> usize {
        self.query_counts
            .borrow()
            .get(collection)
            .copied()
            .unwrap_or(0)
    }

    /// Total queries served across all collections.
    pub fn total_query_count(&self) -> usize {
        self.query_counts.borrow().values().sum()
    }

    /// Makes every subsequent query against `collection` fail.
    pub fn fail_collection(&self, collection: &str, factory: impl Fn() -> BackendError + 'static) {
        self.failures
            .borrow_mut()
            .insert(collection.to_string(), Box::new(factory));
    }
}

impl DocumentStore for InMemoryStore {
    fn run_query(&self, query: &Query) -> BackendResult<Vec<Document>> {
        *self
            .query_counts
            .borrow_mut()
            .entry(query.collection.clone())
            .or_insert(0) += 1;

        if let Some(factory) = self.failures.borrow().get(&query.collection) {
            return Err(factory());
        }

        let collections = self.collections.borrow();
        let mut documents: Vec<Document> = collections
            .get(&query.collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches_all(document, &query.clauses))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((field, direction)) = &query.order_by {
            // Stable sort keeps insertion order for ties.
            documents.sort_by(|a, b| {
                let ordering = compare_values(field_of(a, field), field_of(b, field));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(cursor) = &query.start_after {
            let position = documents
                .iter()
                .position(|document| document.id == cursor.document_id());
            if let Some(position) = position {
                documents.drain(..=position);
            }
        }

        if let Some(limit) = query.limit {
            documents.truncate(limit);
        }

        Ok(documents)
    }
}

fn field_of<'a>(document: &'a Document, field: &str) -> Option<&'a Value> {
    document.fields.get(field)
}

fn matches_all(document: &Document, clauses: &[Clause]) -> bool {
    clauses.iter().all(|clause| matches(document, clause))
}

fn matches(document: &Document, clause: &Clause) -> bool {
    match clause {
        Clause::Eq { field, value } => {
            // A missing field matches nothing, including equality with null.
            field_of(document, field).is_some_and(|actual| actual == value)
        }
        Clause::Lt { field, value } => compares(document, field, value, Ordering::is_lt),
        Clause::Gt { field, value } => compares(document, field, value, Ordering::is_gt),
        Clause::Between { field, lo, hi } => {
            compares(document, field, lo, Ordering::is_ge)
                && compares(document, field, hi, Ordering::is_le)
        }
        Clause::In { field, values } => {
            field_of(document, field).is_some_and(|actual| values.contains(actual))
        }
    }
}

fn compares(
    document: &Document,
    field: &str,
    bound: &Value,
    accept: impl Fn(Ordering) -> bool,
) -> bool {
    let Some(actual) = field_of(document, field) else {
        return false;
    };
    // Range predicates only apply to same-typed comparable values; a null
    // or mistyped field never matches.
    match (actual, bound) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).is_some_and(accept),
            _ => false,
        },
        (Value::String(a), Value::String(b)) => accept(a.as_str().cmp(b)),
        _ => false,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(a), Value::Number(b)) => {
                match (a.as_f64(), b.as_f64()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            _ => Ordering::Equal,
        },
    }
}
