//! Submission pipeline: the only component permitted to perform network I/O.
//!
//! A confirmed snapshot is serialized into a multipart payload, posted to the
//! listings backend, and resolved to a single outcome. The pipeline is
//! single-flight; a duplicate `submit` while one is pending is a no-op.

mod gateway;
mod payload;
mod redirect;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

pub use gateway::{CreatedListing, HttpListingsClient, ListingsGateway, TransportError};
pub use payload::{FieldPart, ImagePart, ListingPayload};
pub use redirect::{schedule as schedule_redirect, NavigationSink, RedirectTimer, LISTINGS_ROUTE};

use crate::wizard::draft::ListingDraft;

/// Resolution of one submission attempt. `AlreadyInFlight` means no
/// transport request was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted(CreatedListing),
    Rejected { message: String },
    AlreadyInFlight,
}

/// Drives the asynchronous create request against the listings gateway.
#[derive(Debug)]
pub struct SubmissionPipeline<G> {
    gateway: Arc<G>,
    in_flight: AtomicBool,
    redirect_delay: Duration,
}

impl<G: ListingsGateway> SubmissionPipeline<G> {
    pub fn new(gateway: Arc<G>, redirect_delay: Duration) -> Self {
        Self {
            gateway,
            in_flight: AtomicBool::new(false),
            redirect_delay,
        }
    }

    /// Serializes the snapshot and issues the create request. Exactly one
    /// request is in flight at a time; once issued, a request cannot be
    /// aborted (accepted design constraint).
    pub async fn submit(&self, snapshot: &ListingDraft) -> SubmissionOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmissionOutcome::AlreadyInFlight;
        }

        let payload = ListingPayload::from_draft(snapshot);
        let result = self.gateway.create_listing(payload).await;
        self.in_flight.store(false, Ordering::Release);

        match result {
            Ok(created) => {
                info!(listing_id = %created.id, "listing accepted by backend");
                SubmissionOutcome::Accepted(created)
            }
            Err(err) => {
                warn!(error = %err, "listing upload rejected");
                SubmissionOutcome::Rejected {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Schedules the delayed navigation that follows a successful upload.
    pub fn schedule_redirect<N>(&self, sink: Arc<N>) -> RedirectTimer
    where
        N: NavigationSink + 'static,
    {
        redirect::schedule(sink, self.redirect_delay, LISTINGS_ROUTE)
    }
}
