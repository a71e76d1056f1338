use std::sync::Arc;

use land_upload::reference::{ProvinceDirectory, ProvinceRecord};
use land_upload::wizard::{
    DensityTier, FloodRisk, ImageAttachment, StepState, UploadWizard, WizardBlueprint, WizardStep,
};

fn directory() -> Arc<ProvinceDirectory> {
    Arc::new(ProvinceDirectory::from_records(vec![
        ProvinceRecord {
            name_en: "Bangkok".to_string(),
            population: 8_000_000.0,
            area_km2: 1_500.0,
        },
        ProvinceRecord {
            name_en: "Chiang Mai".to_string(),
            population: 1_780_000.0,
            area_km2: 20_107.0,
        },
    ]))
}

fn standard_wizard() -> UploadWizard<ProvinceDirectory> {
    UploadWizard::new(WizardBlueprint::standard(), directory())
}

fn fill_basic_information(wizard: &mut UploadWizard<ProvinceDirectory>) {
    wizard.set_land_name("Riverside plot");
    wizard.set_description("Quiet riverside plot near the old market");
    wizard.set_area(420.0);
    wizard.set_price(2_400_000.0);
}

fn fill_location_details(wizard: &mut UploadWizard<ProvinceDirectory>) {
    wizard.set_street_address("51 Main St.");
    wizard.select_province("Bangkok");
    wizard.select_district("Bang Rak");
    wizard.select_subdistrict("Silom");
    wizard.set_zip_code("10500");
    wizard.set_flood_risk(FloodRisk::Low);
}

fn fill_development_plans(wizard: &mut UploadWizard<ProvinceDirectory>) {
    wizard.set_plan(0, "New BTS extension");
}

#[test]
fn rejected_next_reports_every_violation_in_step_order() {
    let mut wizard = standard_wizard();
    wizard.set_description("short");
    wizard.set_area(5.0);

    assert!(!wizard.next());
    assert_eq!(wizard.current_step(), 0);
    assert_eq!(
        wizard.step_errors(),
        &[
            "Land name is required".to_string(),
            "Description must be at least 10 characters".to_string(),
            "Price must be a positive number".to_string(),
        ]
    );
}

#[test]
fn next_advances_once_the_step_validates() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    assert!(wizard.next());
    assert_eq!(wizard.current_step(), 1);
    assert!(wizard.step_errors().is_empty());
}

#[test]
fn displayed_errors_track_edits_until_cleared() {
    let mut wizard = standard_wizard();
    assert!(!wizard.next());
    let initial = wizard.step_errors().len();
    assert!(initial >= 3);

    wizard.set_land_name("Riverside plot");
    assert_eq!(wizard.step_errors().len(), initial - 1);

    wizard.set_description("Quiet riverside plot near the old market");
    wizard.set_area(420.0);
    wizard.set_price(2_400_000.0);
    assert!(wizard.step_errors().is_empty());
    assert!(wizard.next());
}

#[test]
fn previous_is_unconditional_and_clears_errors() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    assert!(wizard.next());

    assert!(!wizard.next());
    assert!(!wizard.step_errors().is_empty());

    wizard.previous();
    assert_eq!(wizard.current_step(), 0);
    assert!(wizard.step_errors().is_empty());

    wizard.previous();
    assert_eq!(wizard.current_step(), 0, "clamped at the first step");
}

#[test]
fn backward_jumps_always_succeed() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    fill_location_details(&mut wizard);
    assert!(wizard.next());
    assert!(wizard.next());
    assert_eq!(wizard.current_step(), 2);

    assert!(wizard.jump_to(0));
    assert_eq!(wizard.current_step(), 0);
}

#[test]
fn forward_jump_is_gated_on_every_intervening_step() {
    let mut wizard = UploadWizard::new(WizardBlueprint::with_pricing_step(), directory());
    fill_basic_information(&mut wizard);

    // Location details are still blank, so pricing is out of reach.
    assert!(!wizard.jump_to(3));
    assert_eq!(wizard.current_step(), 0);
    assert!(wizard
        .step_errors()
        .iter()
        .any(|message| message.contains("Address")));

    fill_location_details(&mut wizard);
    fill_development_plans(&mut wizard);
    assert!(wizard.jump_to(3));
    assert_eq!(wizard.current_step(), 3);
}

#[test]
fn out_of_range_jump_is_rejected() {
    let mut wizard = standard_wizard();
    assert!(!wizard.jump_to(7));
    assert_eq!(wizard.current_step(), 0);
}

#[test]
fn province_selection_derives_density_and_invalidates_dependents() {
    let mut wizard = standard_wizard();
    wizard.select_province("Bangkok");
    wizard.select_district("Bang Rak");
    wizard.select_subdistrict("Silom");

    let density = wizard.draft().population_density.expect("density derived");
    assert!((density - 5_333.33).abs() < 0.01);
    assert_eq!(wizard.draft().density_tier, Some(DensityTier::High));

    wizard.select_province("Chiang Mai");
    assert!(wizard.draft().district.is_empty());
    assert!(wizard.draft().subdistrict.is_empty());
    assert_eq!(wizard.draft().density_tier, Some(DensityTier::Low));
}

#[test]
fn unknown_province_leaves_derived_fields_unset_without_error() {
    let mut wizard = standard_wizard();
    wizard.select_province("Bangkok");
    assert!(wizard.draft().population_density.is_some());

    wizard.select_province("");
    assert_eq!(wizard.draft().population_density, None);
    assert_eq!(wizard.draft().density_tier, None);
    assert!(wizard.step_errors().is_empty());
}

#[test]
fn composed_address_joins_non_empty_components_in_order() {
    let mut wizard = standard_wizard();
    wizard.set_zip_code("10500");
    assert_eq!(wizard.draft().composed_address, "10500");

    wizard.set_street_address("51 Main St.");
    wizard.select_province("Bangkok");
    wizard.select_district("Bang Rak");
    wizard.select_subdistrict("Silom");
    assert_eq!(
        wizard.draft().composed_address,
        "51 Main St., Silom, Bang Rak, Bangkok, 10500"
    );
}

#[test]
fn plans_never_collapse_to_an_empty_sequence() {
    let mut wizard = standard_wizard();
    wizard.set_plan(0, "New BTS extension");
    wizard.add_plan();
    wizard.set_plan(1, "Planned shopping mall");

    wizard.remove_plan(1);
    wizard.remove_plan(0);
    assert_eq!(wizard.draft().nearby_dev_plans, vec![String::new()]);
}

#[test]
fn confirmation_requires_the_final_step() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    assert!(!wizard.request_confirmation());
    assert!(!wizard.session().is_pending_confirmation());
}

#[test]
fn confirmation_freezes_a_snapshot_decoupled_from_live_edits() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    fill_location_details(&mut wizard);
    assert!(wizard.next());
    assert!(wizard.next());
    fill_development_plans(&mut wizard);

    assert!(wizard.request_confirmation());
    assert!(wizard.session().is_pending_confirmation());

    // Edits while the review is open must not leak into the snapshot.
    wizard.set_land_name("Renamed while reviewing");

    let snapshot = wizard.confirm().expect("snapshot yielded");
    assert_eq!(snapshot.land_name, "Riverside plot");
    assert!(!wizard.session().is_pending_confirmation());
    assert!(
        wizard.session().snapshot().is_some(),
        "snapshot retained for retry after a failed submission"
    );
}

#[test]
fn cancel_discards_the_snapshot_with_no_other_side_effects() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    fill_location_details(&mut wizard);
    assert!(wizard.next());
    assert!(wizard.next());
    fill_development_plans(&mut wizard);

    assert!(wizard.request_confirmation());
    wizard.cancel_confirmation();

    assert!(!wizard.session().is_pending_confirmation());
    assert!(wizard.session().snapshot().is_none());
    assert_eq!(wizard.current_step(), 2);
    assert!(wizard.confirm().is_none());
}

#[test]
fn incomplete_earlier_step_blocks_confirmation() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    fill_location_details(&mut wizard);
    assert!(wizard.next());
    assert!(wizard.next());

    // Development plans were never filled in.
    assert!(!wizard.request_confirmation());
    assert!(wizard
        .step_errors()
        .iter()
        .any(|message| message.contains("development plan")));
}

#[test]
fn confirmation_summary_projects_the_snapshot() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    fill_location_details(&mut wizard);
    wizard.attach_image(ImageAttachment::new("parcel.jpg", vec![0xff, 0xd8]));
    assert!(wizard.next());
    assert!(wizard.next());
    fill_development_plans(&mut wizard);
    assert!(wizard.request_confirmation());

    let summary = wizard.confirmation_summary().expect("summary available");
    assert_eq!(summary.land_name, "Riverside plot");
    assert_eq!(summary.formatted_price, "THB 2,400,000");
    assert_eq!(summary.flood_risk_label, "Low");
    assert_eq!(summary.address, "51 Main St., Silom, Bang Rak, Bangkok, 10500");
    assert_eq!(summary.image_count, 1);
}

#[test]
fn step_views_mirror_the_indicator_states() {
    let mut wizard = standard_wizard();
    fill_basic_information(&mut wizard);
    assert!(wizard.next());

    let views = wizard.step_views();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].state, StepState::Completed);
    assert_eq!(views[1].state, StepState::Active);
    assert_eq!(views[1].step, WizardStep::LocationDetails);
    assert_eq!(views[2].state, StepState::Upcoming);
    assert_eq!(views[2].description, "Nearby development information");
}
