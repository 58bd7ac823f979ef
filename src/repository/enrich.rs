//! Secondary-attribute enricher.
//!
//! Augments a fetched page of pets with view counts and favorite flags read
//! from the secondary collections. Ids are partitioned into chunks of at
//! most [`IN_CLAUSE_LIMIT`] and one fan-out query is issued per chunk per
//! source. Any chunk failure fails the whole page: a page is only published
//! fully enriched, never with a partial or inconsistent tally.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::backend::{BackendResult, DocumentStore};
use crate::domain::pet::Pet;
use crate::domain::types::ShelterId;
use crate::query::{Clause, FIELD_PET_ID, FIELD_SHELTER_ID, IN_CLAUSE_LIMIT, Query};
use crate::{FAVORITES_COLLECTION, VIEWS_COLLECTION};

/// Sets `view_count` and `is_favorite` on every pet of a page.
///
/// Without a viewing shelter no favorites query is issued and every
/// `is_favorite` stays false. No other attribute is touched.
pub fn enrich_pets<B>(
    backend: &B,
    pets: &mut [Pet],
    viewer: Option<&ShelterId>,
) -> BackendResult<()>
where
    B: DocumentStore + ?Sized,
{
    if pets.is_empty() {
        return Ok(());
    }

    let ids: Vec<String> = pets.iter().map(|pet| pet.id.clone()).collect();
    let views = tally_views(backend, &ids)?;
    let favorites = match viewer {
        Some(viewer) => favorite_set(backend, &ids, viewer)?,
        None => HashSet::new(),
    };

    for pet in pets.iter_mut() {
        pet.view_count = views.get(&pet.id).copied().unwrap_or(0);
        pet.is_favorite = favorites.contains(&pet.id);
    }

    Ok(())
}

/// Tallies view records per pet id across all matching documents.
///
/// Repeat views by the same viewer each increment the count; pets without
/// records simply stay absent from the map (callers default to 0).
fn tally_views<B>(backend: &B, pet_ids: &[String]) -> BackendResult<HashMap<String, u64>>
where
    B: DocumentStore + ?Sized,
{
    let mut counts = HashMap::new();
    for chunk in pet_ids.chunks(IN_CLAUSE_LIMIT) {
        let query = Query::collection(VIEWS_COLLECTION)
            .filter(Clause::is_in(FIELD_PET_ID, id_values(chunk)));
        for document in backend.run_query(&query)? {
            if let Some(Value::String(pet_id)) = document.fields.get(FIELD_PET_ID) {
                *counts.entry(pet_id.clone()).or_insert(0) += 1;
            }
        }
    }
    Ok(counts)
}

/// Ids of the pets the viewing shelter currently favorites.
fn favorite_set<B>(
    backend: &B,
    pet_ids: &[String],
    viewer: &ShelterId,
) -> BackendResult<HashSet<String>>
where
    B: DocumentStore + ?Sized,
{
    let mut favorites = HashSet::new();
    for chunk in pet_ids.chunks(IN_CLAUSE_LIMIT) {
        let query = Query::collection(FAVORITES_COLLECTION)
            .filter(Clause::eq(FIELD_SHELTER_ID, viewer.as_str()))
            .filter(Clause::is_in(FIELD_PET_ID, id_values(chunk)));
        for document in backend.run_query(&query)? {
            if let Some(Value::String(pet_id)) = document.fields.get(FIELD_PET_ID) {
                favorites.insert(pet_id.clone());
            }
        }
    }
    Ok(favorites)
}

fn id_values(ids: &[String]) -> Vec<Value> {
    ids.iter().map(|id| Value::String(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_chunk_into_ceil_m_over_limit_groups() {
        for (m, expected_chunks) in [(0, 0), (1, 1), (10, 1), (11, 2), (25, 3), (30, 3)] {
            let ids: Vec<String> = (0..m).map(|i| format!("p{i}")).collect();
            let chunks: Vec<&[String]> = ids.chunks(IN_CLAUSE_LIMIT).collect();
            assert_eq!(chunks.len(), expected_chunks, "m = {m}");
            assert!(chunks.iter().all(|chunk| chunk.len() <= IN_CLAUSE_LIMIT));
            let total: usize = chunks.iter().map(|chunk| chunk.len()).sum();
            assert_eq!(total, m);
        }
    }
}
