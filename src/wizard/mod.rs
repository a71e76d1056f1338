//! The upload wizard engine: field store, geographic cascade, step
//! navigator, confirmation gate, and submission pipeline.

mod cascade;
pub mod draft;
pub mod schema;
mod session;
pub mod steps;
pub mod submission;

pub use cascade::CascadeResolver;
pub use draft::{DensityTier, FloodRisk, ImageAttachment, ListingDraft};
pub use schema::FieldKey;
pub use session::{
    ConfirmationSummary, StepState, StepView, SubmissionStatus, UploadWizard, WizardSession,
};
pub use steps::{StepDefinition, WizardBlueprint, WizardStep};
pub use submission::{
    CreatedListing, HttpListingsClient, ListingPayload, ListingsGateway, NavigationSink,
    RedirectTimer, SubmissionOutcome, SubmissionPipeline, TransportError,
};
