//! User-supplied listing filters.
//!
//! Filter values arriving from the UI are closed enums carrying the exact
//! wire labels, so an unrecognized label is rejected at deserialization
//! instead of being silently ignored at query time.

use serde::{Deserialize, Serialize};

/// Vaccination filter option as presented in the UI.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VaccinationStatus {
    #[serde(rename = "Yes")]
    Vaccinated,
    #[serde(rename = "No")]
    NotVaccinated,
}

/// Adoption-fee bracket as presented in the UI (Rupiah).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeeRange {
    /// Fee stored as a literal null. A fee of `0` is not "Free".
    #[serde(rename = "Free")]
    Free,
    #[serde(rename = "< Rp 500rb")]
    Under500k,
    /// Inclusive at both ends.
    #[serde(rename = "Rp 500rb - 1jt")]
    Mid500kTo1M,
    #[serde(rename = "> Rp 1jt")]
    Over1M,
}

/// Sparse record of optional pet-listing predicates. An absent field means
/// no constraint on that attribute.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PetFilter {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub vaccinated: Option<VaccinationStatus>,
    pub fee_range: Option<FeeRange>,
}

impl PetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn vaccinated(mut self, vaccinated: VaccinationStatus) -> Self {
        self.vaccinated = Some(vaccinated);
        self
    }

    pub fn fee_range(mut self, fee_range: FeeRange) -> Self {
        self.fee_range = Some(fee_range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.gender.is_none()
            && self.vaccinated.is_none()
            && self.fee_range.is_none()
    }
}
