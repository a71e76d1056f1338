use serde::{Deserialize, Serialize};

use super::draft::ListingDraft;

/// Every validatable field of the draft. Step definitions reference these
/// keys, so adding a field without wiring its rule fails to compile rather
/// than silently skipping validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    LandName,
    Description,
    Area,
    Price,
    ComposedAddress,
    Latitude,
    Longitude,
    Zoning,
    PopulationDensity,
    FloodRisk,
    DevelopmentPlans,
    Images,
}

impl FieldKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LandName => "Land Name",
            Self::Description => "Description",
            Self::Area => "Area",
            Self::Price => "Price",
            Self::ComposedAddress => "Address",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::Zoning => "Zoning",
            Self::PopulationDensity => "Population Density",
            Self::FloodRisk => "Flood Risk",
            Self::DevelopmentPlans => "Nearby Development Plans",
            Self::Images => "Images",
        }
    }
}

const MIN_DESCRIPTION_CHARS: usize = 10;

/// Evaluates one field against its declarative rule. Pure and synchronous;
/// a `Some` result is the user-facing message for the violation.
pub fn validate_field(draft: &ListingDraft, field: FieldKey) -> Option<String> {
    match field {
        FieldKey::LandName => {
            if draft.land_name.trim().is_empty() {
                Some("Land name is required".to_string())
            } else {
                None
            }
        }
        FieldKey::Description => {
            if draft.description.chars().count() < MIN_DESCRIPTION_CHARS {
                Some("Description must be at least 10 characters".to_string())
            } else {
                None
            }
        }
        FieldKey::Area => {
            if draft.area > 0.0 {
                None
            } else {
                Some("Area must be a positive number".to_string())
            }
        }
        FieldKey::Price => {
            if draft.price > 0.0 {
                None
            } else {
                Some("Price must be a positive number".to_string())
            }
        }
        FieldKey::ComposedAddress => {
            if draft.composed_address.is_empty() {
                Some("Address is required".to_string())
            } else {
                None
            }
        }
        FieldKey::Latitude => {
            if (-90.0..=90.0).contains(&draft.latitude) {
                None
            } else {
                Some("Latitude must be between -90 and 90".to_string())
            }
        }
        FieldKey::Longitude => {
            if (-180.0..=180.0).contains(&draft.longitude) {
                None
            } else {
                Some("Longitude must be between -180 and 180".to_string())
            }
        }
        // Optional free text.
        FieldKey::Zoning => None,
        FieldKey::PopulationDensity => match draft.population_density {
            Some(density) if density < 0.0 => {
                Some("Population density cannot be negative".to_string())
            }
            // An unset density is a cascade miss, not a user error.
            _ => None,
        },
        // Membership is guaranteed by the enum; `unknown` is a valid answer.
        FieldKey::FloodRisk => None,
        FieldKey::DevelopmentPlans => {
            let has_plan = draft
                .nearby_dev_plans
                .iter()
                .any(|plan| !plan.trim().is_empty());
            if has_plan {
                None
            } else {
                Some("At least one development plan is required".to_string())
            }
        }
        FieldKey::Images => None,
    }
}

/// Collects the violation messages for a field subset, in field order.
pub fn errors_for(draft: &ListingDraft, fields: &[FieldKey]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| validate_field(draft, *field))
        .collect()
}
