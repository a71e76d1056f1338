use reqwest::multipart::{Form, Part};
use serde_json::Value;
use url::Url;

use super::payload::ListingPayload;

/// Identifier returned by the listings backend on a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedListing {
    pub id: String,
}

/// Transport-level failure. All variants are expected, recoverable
/// conditions surfaced to the user as a failure banner; the draft and
/// snapshot survive them.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("listing upload endpoint is invalid: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("upload failed with status {status}")]
    Status { status: u16 },
    #[error("network error during upload: {0}")]
    Network(String),
    #[error("malformed upload response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

/// Outbound seam to the listings backend. The pipeline is generic over this
/// trait so tests can exercise it with an in-memory double.
pub trait ListingsGateway: Send + Sync {
    fn create_listing(
        &self,
        payload: ListingPayload,
    ) -> impl std::future::Future<Output = Result<CreatedListing, TransportError>> + Send;
}

/// Production gateway posting the multipart body to `POST {base}/admin/upload`.
#[derive(Debug, Clone)]
pub struct HttpListingsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpListingsClient {
    pub fn new(base_url: &Url) -> Result<Self, TransportError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: base_url.join("/admin/upload")?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(payload: ListingPayload) -> Result<Form, TransportError> {
        let mut form = Form::new();
        for field in payload.fields {
            form = form.text(field.name, field.value);
        }
        for image in payload.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("images[]", part);
        }
        Ok(form)
    }
}

impl ListingsGateway for HttpListingsClient {
    async fn create_listing(
        &self,
        payload: ListingPayload,
    ) -> Result<CreatedListing, TransportError> {
        let form = Self::build_form(payload)?;
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| TransportError::InvalidResponse(err.to_string()))?;
        match body.get("id") {
            Some(Value::String(id)) => Ok(CreatedListing { id: id.clone() }),
            Some(Value::Number(id)) => Ok(CreatedListing { id: id.to_string() }),
            _ => Err(TransportError::InvalidResponse(
                "create response did not include a listing id".to_string(),
            )),
        }
    }
}
