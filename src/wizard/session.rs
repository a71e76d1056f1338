use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::cascade::CascadeResolver;
use super::draft::{FloodRisk, ImageAttachment, ListingDraft};
use super::schema;
use super::steps::{WizardBlueprint, WizardStep};
use super::submission::SubmissionOutcome;
use crate::reference::ProvinceReference;

/// Lifecycle of the one-shot submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Failure,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

/// Indicator state of one step relative to the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

/// Projection of one step for the progress indicator.
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub index: usize,
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
    pub state: StepState,
}

/// Projection of the frozen snapshot shown while the user reviews the
/// upload. Built from the snapshot, never from the live draft, so edits made
/// while the review is open do not alter what will be submitted.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationSummary {
    pub land_name: String,
    pub formatted_price: String,
    pub area_sqm: f64,
    pub flood_risk_label: &'static str,
    pub address: String,
    pub description: String,
    pub image_count: usize,
}

/// Runtime state of one wizard mount. Discarded on unmount or after the
/// post-success navigation fires.
#[derive(Debug, Clone)]
pub struct WizardSession {
    draft: ListingDraft,
    current_step: usize,
    step_errors: Vec<String>,
    submission: SubmissionStatus,
    status_message: Option<String>,
    pending_confirmation: bool,
    snapshot: Option<ListingDraft>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self {
            draft: ListingDraft::default(),
            current_step: 0,
            step_errors: Vec::new(),
            submission: SubmissionStatus::Idle,
            status_message: None,
            pending_confirmation: false,
            snapshot: None,
        }
    }
}

impl WizardSession {
    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_errors(&self) -> &[String] {
        &self.step_errors
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn is_pending_confirmation(&self) -> bool {
        self.pending_confirmation
    }

    pub fn snapshot(&self) -> Option<&ListingDraft> {
        self.snapshot.as_ref()
    }
}

/// The wizard engine: a blueprint-driven step navigator, the cascade
/// resolver, and the confirmation gate, all mutating disjoint slices of one
/// session. Every transition is synchronous; only the submission pipeline
/// suspends.
#[derive(Debug)]
pub struct UploadWizard<R> {
    blueprint: WizardBlueprint,
    resolver: CascadeResolver<R>,
    session: WizardSession,
}

impl<R: ProvinceReference> UploadWizard<R> {
    pub fn new(blueprint: WizardBlueprint, reference: Arc<R>) -> Self {
        Self {
            blueprint,
            resolver: CascadeResolver::new(reference),
            session: WizardSession::default(),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn blueprint(&self) -> &WizardBlueprint {
        &self.blueprint
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.session.draft
    }

    pub fn current_step(&self) -> usize {
        self.session.current_step
    }

    pub fn step_errors(&self) -> &[String] {
        &self.session.step_errors
    }

    // --- field setters -----------------------------------------------------

    pub fn set_land_name(&mut self, value: impl Into<String>) {
        self.session.draft.land_name = value.into();
        self.refresh_step_errors();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.session.draft.description = value.into();
        self.refresh_step_errors();
    }

    pub fn set_area(&mut self, value: f64) {
        self.session.draft.area = value;
        self.refresh_step_errors();
    }

    pub fn set_price(&mut self, value: f64) {
        self.session.draft.price = value;
        self.refresh_step_errors();
    }

    pub fn set_zoning(&mut self, value: impl Into<String>) {
        self.session.draft.zoning = value.into();
        self.refresh_step_errors();
    }

    pub fn set_flood_risk(&mut self, value: FloodRisk) {
        self.session.draft.flood_risk = value;
        self.refresh_step_errors();
    }

    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.session.draft.latitude = latitude;
        self.session.draft.longitude = longitude;
        self.refresh_step_errors();
    }

    pub fn set_street_address(&mut self, value: impl Into<String>) {
        self.resolver
            .set_street_address(&mut self.session.draft, value);
        self.refresh_step_errors();
    }

    pub fn set_zip_code(&mut self, value: impl Into<String>) {
        self.resolver.set_zip_code(&mut self.session.draft, value);
        self.refresh_step_errors();
    }

    pub fn select_province(&mut self, value: impl Into<String>) {
        self.resolver.select_province(&mut self.session.draft, value);
        self.refresh_step_errors();
    }

    pub fn select_district(&mut self, value: impl Into<String>) {
        self.resolver.select_district(&mut self.session.draft, value);
        self.refresh_step_errors();
    }

    pub fn select_subdistrict(&mut self, value: impl Into<String>) {
        self.resolver
            .select_subdistrict(&mut self.session.draft, value);
        self.refresh_step_errors();
    }

    pub fn set_plan(&mut self, index: usize, text: impl Into<String>) {
        self.session.draft.set_plan(index, text);
        self.refresh_step_errors();
    }

    pub fn add_plan(&mut self) {
        self.session.draft.add_plan();
        self.refresh_step_errors();
    }

    pub fn remove_plan(&mut self, index: usize) {
        self.session.draft.remove_plan(index);
        self.refresh_step_errors();
    }

    pub fn attach_image(&mut self, image: ImageAttachment) {
        self.session.draft.attach_image(image);
    }

    pub fn remove_image(&mut self, index: usize) {
        self.session.draft.remove_image(index);
    }

    // --- step navigation ---------------------------------------------------

    /// Advances to the next step if the active step's field subset validates.
    /// A rejection records the ordered message list and leaves the index
    /// unchanged; it is an expected user-input condition, never an error.
    pub fn next(&mut self) -> bool {
        let errors = self.errors_for_step(self.session.current_step);
        if errors.is_empty() {
            self.session.current_step =
                (self.session.current_step + 1).min(self.blueprint.last_index());
            self.session.step_errors.clear();
            true
        } else {
            self.session.step_errors = errors;
            false
        }
    }

    /// Moves back one step unconditionally and clears any recorded errors.
    pub fn previous(&mut self) {
        self.session.current_step = self.session.current_step.saturating_sub(1);
        self.session.step_errors.clear();
    }

    /// Jumps to an arbitrary step. Backward jumps always succeed; a forward
    /// jump requires every step below the target to validate, so a jump
    /// straight to pricing is gated on the whole form so far, not just the
    /// step being left.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.blueprint.len() {
            return false;
        }
        if index <= self.session.current_step {
            self.session.current_step = index;
            self.session.step_errors.clear();
            return true;
        }
        for intervening in 0..index {
            let errors = self.errors_for_step(intervening);
            if !errors.is_empty() {
                self.session.step_errors = errors;
                return false;
            }
        }
        self.session.current_step = index;
        self.session.step_errors.clear();
        true
    }

    pub fn is_last_step(&self) -> bool {
        self.session.current_step == self.blueprint.last_index()
    }

    fn errors_for_step(&self, index: usize) -> Vec<String> {
        match self.blueprint.definition(index) {
            Some(definition) => schema::errors_for(&self.session.draft, definition.fields),
            None => Vec::new(),
        }
    }

    /// Re-evaluates the displayed error list after an edit. Errors only
    /// appear once a gated transition has been rejected; afterwards they
    /// track the draft live until the list empties.
    fn refresh_step_errors(&mut self) {
        if !self.session.step_errors.is_empty() {
            self.session.step_errors = self.errors_for_step(self.session.current_step);
        }
    }

    // --- confirmation gate -------------------------------------------------

    /// Freezes a snapshot of the draft for review. Only meaningful on the
    /// final step; the whole form is validated so a stale earlier step can
    /// never slip through the gate.
    pub fn request_confirmation(&mut self) -> bool {
        if !self.is_last_step() {
            return false;
        }
        for index in 0..self.blueprint.len() {
            let errors = self.errors_for_step(index);
            if !errors.is_empty() {
                self.session.step_errors = errors;
                return false;
            }
        }
        self.session.snapshot = Some(self.session.draft.clone());
        self.session.pending_confirmation = true;
        true
    }

    /// Discards the pending snapshot and returns control to the form with no
    /// other side effects.
    pub fn cancel_confirmation(&mut self) {
        self.session.pending_confirmation = false;
        self.session.snapshot = None;
    }

    /// Resolves the pending review, yielding the frozen snapshot for the
    /// submission pipeline. The snapshot stays in the session so a failed
    /// submission can be retried without re-entering data.
    pub fn confirm(&mut self) -> Option<ListingDraft> {
        if !self.session.pending_confirmation {
            return None;
        }
        self.session.pending_confirmation = false;
        self.session.snapshot.clone()
    }

    pub fn confirmation_summary(&self) -> Option<ConfirmationSummary> {
        self.session.snapshot.as_ref().map(|snapshot| {
            ConfirmationSummary {
                land_name: snapshot.land_name.clone(),
                formatted_price: format_thb(snapshot.price),
                area_sqm: snapshot.area,
                flood_risk_label: snapshot.flood_risk.label(),
                address: snapshot.composed_address.clone(),
                description: snapshot.description.clone(),
                image_count: snapshot.images.len(),
            }
        })
    }

    // --- submission bookkeeping --------------------------------------------

    /// Marks the session as submitting. Returns false when a submission is
    /// already in flight so the caller can skip the duplicate attempt.
    pub fn begin_submission(&mut self) -> bool {
        if self.session.submission == SubmissionStatus::Submitting {
            return false;
        }
        self.session.submission = SubmissionStatus::Submitting;
        self.session.status_message = None;
        true
    }

    /// Applies the pipeline outcome to the session. On failure the snapshot
    /// and the current step are preserved so the user can retry or correct
    /// data; on success the session has reached its terminal state and the
    /// caller schedules the redirect.
    pub fn record_submission(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Accepted(created) => {
                info!(listing_id = %created.id, "land listing uploaded");
                self.session.submission = SubmissionStatus::Success;
                self.session.status_message =
                    Some("Land listing uploaded successfully".to_string());
            }
            SubmissionOutcome::Rejected { message } => {
                self.session.submission = SubmissionStatus::Failure;
                self.session.status_message = Some(message.clone());
            }
            SubmissionOutcome::AlreadyInFlight => {}
        }
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.session.submission
    }

    // --- projections -------------------------------------------------------

    pub fn step_views(&self) -> Vec<StepView> {
        self.blueprint
            .steps()
            .iter()
            .enumerate()
            .map(|(index, definition)| StepView {
                index,
                step: definition.step,
                title: definition.title,
                description: definition.description,
                state: if index < self.session.current_step {
                    StepState::Completed
                } else if index == self.session.current_step {
                    StepState::Active
                } else {
                    StepState::Upcoming
                },
            })
            .collect()
    }
}

/// Grouped THB amount for the review summary, e.g. `THB 2,400,000`.
fn format_thb(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if whole < 0 {
        format!("THB -{grouped}")
    } else {
        format!("THB {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_thb_groups_thousands() {
        assert_eq!(format_thb(0.0), "THB 0");
        assert_eq!(format_thb(950.0), "THB 950");
        assert_eq!(format_thb(2_400_000.0), "THB 2,400,000");
        assert_eq!(format_thb(12_345.6), "THB 12,346");
    }

    #[test]
    fn status_labels_are_stable() {
        assert_eq!(SubmissionStatus::Idle.label(), "Idle");
        assert_eq!(SubmissionStatus::Submitting.label(), "Submitting");
        assert_eq!(SubmissionStatus::Success.label(), "Success");
        assert_eq!(SubmissionStatus::Failure.label(), "Failure");
    }
}
