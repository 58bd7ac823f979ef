use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::Document;

/// Cover photo plus the full gallery for one pet.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PetImage {
    pub cover_url: String,
    pub urls: Vec<String>,
}

/// A pet listed for adoption.
///
/// `view_count` and `is_favorite` are request-scoped: they are computed per
/// page load from the secondary `views` and `favorites` collections for the
/// viewer supplied at fetch time, never persisted on the pet document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Pet {
    /// Backend-assigned document id, injected after decoding.
    #[serde(skip_deserializing)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub age: u32,
    pub age_unit: String,
    pub color: String,
    pub size: String,
    pub breed: String,
    pub weight: f64,
    pub weight_unit: String,
    pub disabilities: Vec<String>,
    pub behaviours: Vec<String>,
    pub is_vaccinated: bool,
    /// `None` means the pet is free to adopt; `0` is a distinct, paid fee.
    pub adoption_fee: Option<i64>,
    /// Owner reference string, e.g. `volunteers/<id>`.
    pub volunteer: Option<String>,
    pub image: PetImage,
    pub created_at: DateTime<Utc>,
    #[serde(skip_deserializing)]
    pub view_count: u64,
    #[serde(skip_deserializing)]
    pub is_favorite: bool,
}

impl Pet {
    /// Decodes a document snapshot, then injects the backend-assigned id.
    pub fn from_document(document: &Document) -> Result<Self, serde_json::Error> {
        let mut pet: Pet = serde_json::from_value(document.to_value())?;
        pet.id = document.id.clone();
        Ok(pet)
    }
}
