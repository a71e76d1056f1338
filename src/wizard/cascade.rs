use std::sync::Arc;

use tracing::debug;

use super::draft::{DensityTier, ListingDraft};
use crate::reference::ProvinceReference;

/// Recomputes the draft's derived fields whenever an upstream address
/// component changes. All transitions here are synchronous and pure apart
/// from the read-only reference lookup.
#[derive(Debug)]
pub struct CascadeResolver<R> {
    reference: Arc<R>,
}

impl<R: ProvinceReference> CascadeResolver<R> {
    pub fn new(reference: Arc<R>) -> Self {
        Self { reference }
    }

    /// Province selection invalidates the dependent district and subdistrict
    /// choices and re-derives the population density. A lookup miss clears
    /// the derived values instead of defaulting them: stale figures from a
    /// previous province must never survive the change.
    pub fn select_province(&self, draft: &mut ListingDraft, province: impl Into<String>) {
        draft.province = province.into();
        draft.district.clear();
        draft.subdistrict.clear();

        match self.reference.stats(&draft.province) {
            Some(stats) => {
                let density = stats.density();
                draft.population_density = Some(density);
                draft.density_tier = Some(DensityTier::from_density(density));
            }
            None => {
                debug!(province = %draft.province, "no reference record for province");
                draft.population_density = None;
                draft.density_tier = None;
            }
        }

        draft.recompose_address();
    }

    /// District selection invalidates the dependent subdistrict choice.
    pub fn select_district(&self, draft: &mut ListingDraft, district: impl Into<String>) {
        draft.district = district.into();
        draft.subdistrict.clear();
        draft.recompose_address();
    }

    pub fn select_subdistrict(&self, draft: &mut ListingDraft, subdistrict: impl Into<String>) {
        draft.subdistrict = subdistrict.into();
        draft.recompose_address();
    }

    pub fn set_street_address(&self, draft: &mut ListingDraft, street: impl Into<String>) {
        draft.street_address = street.into();
        draft.recompose_address();
    }

    pub fn set_zip_code(&self, draft: &mut ListingDraft, zip: impl Into<String>) {
        draft.zip_code = zip.into();
        draft.recompose_address();
    }
}
