//! Backend query model and the filter compiler.
//!
//! A [`Query`] is a collection-scoped, filtered, ordered, cursor-bounded
//! request built here and interpreted by a [`crate::backend::DocumentStore`]
//! implementation. Clauses are conjunctive and independent; whether a given
//! clause combination is servable (composite indexes) is a backend capability
//! requirement, not something the compiler validates.

use serde_json::Value;

use crate::domain::filter::{FeeRange, PetFilter, VaccinationStatus};
use crate::pagination::Cursor;

pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_VACCINATED: &str = "isVaccinated";
pub const FIELD_ADOPTION_FEE: &str = "adoptionFee";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_VOLUNTEER: &str = "volunteer";
pub const FIELD_PET_ID: &str = "petId";
pub const FIELD_SHELTER_ID: &str = "shelterId";

/// Adoption-fee boundaries (Rupiah) used by [`FeeRange`] compilation.
const FEE_MID_LOWER: i64 = 500_000;
const FEE_MID_UPPER: i64 = 1_000_000;

/// Maximum cardinality the backend accepts for an `In` clause.
pub const IN_CLAUSE_LIMIT: usize = 10;

/// A single backend predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Field equals value. Equality against `Value::Null` matches only a
    /// literal null field, never `0` or a missing field.
    Eq { field: String, value: Value },
    Lt { field: String, value: Value },
    Gt { field: String, value: Value },
    /// Inclusive at both ends.
    Between { field: String, lo: Value, hi: Value },
    /// Field value is a member of `values`. Backends cap the cardinality at
    /// [`IN_CLAUSE_LIMIT`].
    In { field: String, values: Vec<Value> },
}

impl Clause {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn lt(field: &str, value: impl Into<Value>) -> Self {
        Self::Lt {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn gt(field: &str, value: impl Into<Value>) -> Self {
        Self::Gt {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn between(field: &str, lo: impl Into<Value>, hi: impl Into<Value>) -> Self {
        Self::Between {
            field: field.to_string(),
            lo: lo.into(),
            hi: hi.into(),
        }
    }

    pub fn is_in(field: &str, values: Vec<Value>) -> Self {
        Self::In {
            field: field.to_string(),
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A fully assembled backend query. Built fresh for every round-trip; no
/// query object is ever shared across load calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub clauses: Vec<Clause>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
    pub start_after: Option<Cursor>,
}

impl Query {
    pub fn collection(name: &str) -> Self {
        Self {
            collection: name.to_string(),
            clauses: Vec::new(),
            order_by: None,
            limit: None,
            start_after: None,
        }
    }

    pub fn filter(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn filter_all(mut self, clauses: impl IntoIterator<Item = Clause>) -> Self {
        self.clauses.extend(clauses);
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn start_after(mut self, cursor: Cursor) -> Self {
        self.start_after = Some(cursor);
        self
    }
}

/// Compiles a sparse [`PetFilter`] into the conjunctive clause list applied
/// to the pets collection.
///
/// Exactly one clause is produced per populated field; an empty filter
/// compiles to an empty list. The base ordering (`createdAt` descending) is
/// applied by the page fetcher, not here.
pub fn compile_filter(filter: &PetFilter) -> Vec<Clause> {
    let mut clauses = Vec::new();

    if let Some(category) = &filter.category {
        clauses.push(Clause::eq(FIELD_CATEGORY, category.as_str()));
    }

    if let Some(gender) = &filter.gender {
        clauses.push(Clause::eq(FIELD_GENDER, gender.as_str()));
    }

    if let Some(vaccinated) = filter.vaccinated {
        let value = matches!(vaccinated, VaccinationStatus::Vaccinated);
        clauses.push(Clause::eq(FIELD_VACCINATED, value));
    }

    if let Some(fee_range) = filter.fee_range {
        clauses.push(match fee_range {
            // A free pet is stored with a literal null fee; a fee of 0 does
            // not match.
            FeeRange::Free => Clause::eq(FIELD_ADOPTION_FEE, Value::Null),
            FeeRange::Under500k => Clause::lt(FIELD_ADOPTION_FEE, FEE_MID_LOWER),
            FeeRange::Mid500kTo1M => {
                Clause::between(FIELD_ADOPTION_FEE, FEE_MID_LOWER, FEE_MID_UPPER)
            }
            FeeRange::Over1M => Clause::gt(FIELD_ADOPTION_FEE, FEE_MID_UPPER),
        });
    }

    clauses
}
