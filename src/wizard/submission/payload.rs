use chrono::Utc;

use crate::wizard::draft::ListingDraft;

/// One text part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPart {
    pub name: &'static str,
    pub value: String,
}

/// One binary part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Transport payload for `POST /admin/upload`, built from a frozen snapshot.
/// Serialization is pure; the gateway turns it into an actual multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPayload {
    pub fields: Vec<FieldPart>,
    pub images: Vec<ImagePart>,
}

impl ListingPayload {
    pub fn from_draft(snapshot: &ListingDraft) -> Self {
        let mut fields = vec![
            FieldPart {
                name: "land_name",
                value: snapshot.land_name.clone(),
            },
            FieldPart {
                name: "description",
                value: snapshot.description.clone(),
            },
            FieldPart {
                name: "area",
                value: snapshot.area.to_string(),
            },
            FieldPart {
                name: "price",
                value: snapshot.price.to_string(),
            },
            FieldPart {
                name: "address",
                value: snapshot.composed_address.clone(),
            },
            FieldPart {
                name: "latitude",
                value: snapshot.latitude.to_string(),
            },
            FieldPart {
                name: "longitude",
                value: snapshot.longitude.to_string(),
            },
            FieldPart {
                name: "flood_risk",
                value: snapshot.flood_risk.as_str().to_string(),
            },
            FieldPart {
                name: "uploaded_at",
                value: Utc::now().to_rfc3339(),
            },
        ];

        // Unset density renders as unavailable on the backend as well;
        // the part is omitted rather than sent as zero.
        if let Some(density) = snapshot.population_density {
            fields.push(FieldPart {
                name: "pop_density",
                value: density.to_string(),
            });
        }

        if !snapshot.zoning.trim().is_empty() {
            fields.push(FieldPart {
                name: "zoning",
                value: snapshot.zoning.clone(),
            });
        }

        for plan in &snapshot.nearby_dev_plans {
            if !plan.trim().is_empty() {
                fields.push(FieldPart {
                    name: "nearby_dev_plan[]",
                    value: plan.clone(),
                });
            }
        }

        let images = snapshot
            .images
            .iter()
            .map(|image| ImagePart {
                content_type: mime_guess::from_path(&image.file_name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string(),
                file_name: image.file_name.clone(),
                bytes: image.bytes.clone(),
            })
            .collect();

        Self { fields, images }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|part| part.name == name)
            .map(|part| part.value.as_str())
    }

    pub fn repeated(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|part| part.name == name)
            .map(|part| part.value.as_str())
            .collect()
    }
}
