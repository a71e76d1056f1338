use serde::{Deserialize, Serialize};

use super::schema::FieldKey;

/// Identity of one wizard page. The pricing step only exists in the
/// blueprint variant that separates pricing from basic information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInformation,
    LocationDetails,
    DevelopmentPlans,
    Pricing,
}

impl WizardStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::LocationDetails => "Location Details",
            Self::DevelopmentPlans => "Development Plans",
            Self::Pricing => "Price Information",
        }
    }
}

/// Static definition of one wizard page: its identity, indicator copy, and
/// the field subset gating forward navigation out of it.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldKey],
}

const BASIC_INFO_FIELDS: &[FieldKey] = &[
    FieldKey::LandName,
    FieldKey::Description,
    FieldKey::Area,
    FieldKey::Price,
    FieldKey::Images,
];

const BASIC_INFO_FIELDS_WITHOUT_PRICE: &[FieldKey] = &[
    FieldKey::LandName,
    FieldKey::Description,
    FieldKey::Area,
    FieldKey::Images,
];

const LOCATION_FIELDS: &[FieldKey] = &[
    FieldKey::ComposedAddress,
    FieldKey::Latitude,
    FieldKey::Longitude,
    FieldKey::Zoning,
    FieldKey::PopulationDensity,
    FieldKey::FloodRisk,
];

const PLAN_FIELDS: &[FieldKey] = &[FieldKey::DevelopmentPlans];

const PRICING_FIELDS: &[FieldKey] = &[FieldKey::Price];

/// Ordered step table consumed by the wizard. The source project grew several
/// divergent copies of this wizard; both survive here as blueprint variants
/// over a single navigator.
#[derive(Debug, Clone)]
pub struct WizardBlueprint {
    steps: Vec<StepDefinition>,
}

impl WizardBlueprint {
    /// Three steps, price captured alongside the other basic details.
    pub fn standard() -> Self {
        Self {
            steps: vec![
                StepDefinition {
                    step: WizardStep::BasicInformation,
                    title: "Basic Information",
                    description: "Land details and images",
                    fields: BASIC_INFO_FIELDS,
                },
                StepDefinition {
                    step: WizardStep::LocationDetails,
                    title: "Location Details",
                    description: "Address and geographical information",
                    fields: LOCATION_FIELDS,
                },
                StepDefinition {
                    step: WizardStep::DevelopmentPlans,
                    title: "Development Plans",
                    description: "Nearby development information",
                    fields: PLAN_FIELDS,
                },
            ],
        }
    }

    /// Four steps, pricing split into its own final step with the forecast
    /// context. Jumping ahead to it is gated on all prior steps validating.
    pub fn with_pricing_step() -> Self {
        Self {
            steps: vec![
                StepDefinition {
                    step: WizardStep::BasicInformation,
                    title: "Basic Information",
                    description: "Land details and images",
                    fields: BASIC_INFO_FIELDS_WITHOUT_PRICE,
                },
                StepDefinition {
                    step: WizardStep::LocationDetails,
                    title: "Location Details",
                    description: "Address and geographical information",
                    fields: LOCATION_FIELDS,
                },
                StepDefinition {
                    step: WizardStep::DevelopmentPlans,
                    title: "Development Plans",
                    description: "Nearby development information",
                    fields: PLAN_FIELDS,
                },
                StepDefinition {
                    step: WizardStep::Pricing,
                    title: "Price Information",
                    description: "Set the price and review the forecast",
                    fields: PRICING_FIELDS,
                },
            ],
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn definition(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
