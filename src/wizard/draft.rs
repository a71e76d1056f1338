use serde::{Deserialize, Serialize};

/// Qualitative flood exposure for the parcel. `Unknown` is a legitimate
/// answer, not a missing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodRisk {
    Low,
    Medium,
    High,
    Unknown,
}

impl FloodRisk {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for FloodRisk {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Three-level bucket derived from population density (people per km²).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityTier {
    Low,
    Medium,
    High,
}

impl DensityTier {
    /// Thresholds: below 100 is low, 100 through 650 inclusive is medium,
    /// anything above is high.
    pub fn from_density(density: f64) -> Self {
        if density < 100.0 {
            Self::Low
        } else if density <= 650.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Binary image staged for upload alongside the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// The land listing under construction. Derived fields (`composed_address`,
/// `population_density`, `density_tier`) are only ever written by the cascade;
/// callers go through the wizard's setters rather than mutating fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub land_name: String,
    pub description: String,
    pub area: f64,
    pub price: f64,
    pub street_address: String,
    pub zip_code: String,
    pub province: String,
    pub district: String,
    pub subdistrict: String,
    pub composed_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoning: String,
    pub population_density: Option<f64>,
    pub density_tier: Option<DensityTier>,
    pub flood_risk: FloodRisk,
    pub nearby_dev_plans: Vec<String>,
    pub images: Vec<ImageAttachment>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            land_name: String::new(),
            description: String::new(),
            area: 0.0,
            price: 0.0,
            street_address: String::new(),
            zip_code: String::new(),
            province: String::new(),
            district: String::new(),
            subdistrict: String::new(),
            composed_address: String::new(),
            // Map picker opens centered on Bangkok until the user moves it.
            latitude: 13.7563,
            longitude: 100.5018,
            zoning: String::new(),
            population_density: None,
            density_tier: None,
            flood_risk: FloodRisk::Unknown,
            nearby_dev_plans: vec![String::new()],
            images: Vec::new(),
        }
    }
}

impl ListingDraft {
    /// Join of the non-empty address components, in fixed order, separated
    /// by ", ". Recomputed after every component change.
    pub(crate) fn recompose_address(&mut self) {
        let components = [
            self.street_address.as_str(),
            self.subdistrict.as_str(),
            self.district.as_str(),
            self.province.as_str(),
            self.zip_code.as_str(),
        ];
        self.composed_address = components
            .into_iter()
            .filter(|component| !component.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
    }

    pub fn set_plan(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.nearby_dev_plans.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn add_plan(&mut self) {
        self.nearby_dev_plans.push(String::new());
    }

    /// Removes a plan entry. The sequence is never left empty: removing the
    /// last entry resets it to a single blank entry.
    pub fn remove_plan(&mut self, index: usize) {
        if index < self.nearby_dev_plans.len() {
            self.nearby_dev_plans.remove(index);
        }
        if self.nearby_dev_plans.is_empty() {
            self.nearby_dev_plans.push(String::new());
        }
    }

    pub fn attach_image(&mut self, image: ImageAttachment) {
        self.images.push(image);
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Unit price shown on the pricing step once both inputs are usable.
    pub fn price_per_sqm(&self) -> Option<f64> {
        if self.price > 0.0 && self.area > 0.0 {
            Some(self.price / self.area)
        } else {
            None
        }
    }
}
