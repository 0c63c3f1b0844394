//! Form flow: entry guard, payload ordering, submission state transitions.

mod common;

use common::{FakeTransport, Reply};
use journey_core::selection::Direction;
use journey_core::{
    AppState, Entry, FlowState, FormFlow, MemoryStore, NoEffects, Route, SchemaVariant,
    SubmissionClient, SubmitBlocked, SubmitError, ThemePriority,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn app_with(ids: &[&str]) -> AppState {
    let mut app = AppState::load(Box::new(Rc::new(MemoryStore::new())), Box::new(NoEffects));
    for id in ids {
        app.toggle(id);
    }
    app
}

fn fill_variant_a(flow: &mut FormFlow) {
    flow.edit(|f| {
        f.name = "Jane Doe".to_string();
        f.email = "jane@example.com".to_string();
        f.age_group = Some("45-54".to_string());
        f.extra_choice = Some("email".to_string());
        f.consent = true;
    });
}

fn fill_variant_b(flow: &mut FormFlow) {
    flow.edit(|f| {
        f.age_group = Some("55-64".to_string());
        f.time_since_menopause = Some("0-5".to_string());
        f.extra_choice = Some("phone".to_string());
        f.consent = true;
    });
}

#[test]
fn empty_selection_redirects_to_gallery() {
    let app = app_with(&[]);
    assert_eq!(FormFlow::enter(app.selection()), Entry::Redirect(Route::Gallery));
}

#[test]
fn non_empty_selection_renders() {
    let app = app_with(&["theme-2"]);
    assert_eq!(FormFlow::enter(app.selection()), Entry::Render);
}

#[test]
fn removing_last_theme_redirects_on_next_entry() {
    let mut app = app_with(&["theme-2"]);
    app.toggle("theme-2");
    assert_eq!(FormFlow::enter(app.selection()), Entry::Redirect(Route::Gallery));
}

#[test]
fn unknown_ids_alone_do_not_open_the_form() {
    let mut app = app_with(&["ghost"]);
    assert_eq!(app.selection().len(), 1);
    assert_eq!(FormFlow::enter(app.selection()), Entry::Redirect(Route::Gallery));

    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);
    assert_eq!(flow.begin_submit(&app), Err(SubmitBlocked::NoThemes));
    assert_eq!(flow.state(), &FlowState::Editing);

    app.toggle("theme-3");
    let payload = flow.begin_submit(&app).unwrap();
    assert_eq!(payload.themes.len(), 1);
    assert_eq!(payload.themes[0].id, "theme-3");
}

#[test]
fn invalid_fields_block_submission_and_stay_editing() {
    let app = app_with(&["theme-1"]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);
    flow.edit(|f| f.consent = false);

    assert_eq!(flow.begin_submit(&app), Err(SubmitBlocked::Invalid));
    assert_eq!(flow.state(), &FlowState::Editing);
    assert!(flow.field_error(journey_core::Field::Consent).is_some());
    assert_eq!(flow.report().len(), 1);
}

#[test]
fn errors_clear_as_fields_are_fixed_after_an_attempt() {
    let app = app_with(&["theme-1"]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    assert!(flow.field_error(journey_core::Field::Email).is_none());

    assert_eq!(flow.begin_submit(&app), Err(SubmitBlocked::Invalid));
    assert!(flow.field_error(journey_core::Field::Email).is_some());

    flow.edit(|f| f.email = "jane@example.com".to_string());
    assert!(flow.field_error(journey_core::Field::Email).is_none());
    assert!(flow.field_error(journey_core::Field::Name).is_some());
}

#[test]
fn submit_with_empty_selection_is_blocked() {
    let app = app_with(&[]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);
    assert_eq!(flow.begin_submit(&app), Err(SubmitBlocked::NoThemes));
}

#[test]
fn payload_themes_follow_selection_order() {
    let app = app_with(&["theme-1", "theme-3"]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);

    let payload = flow.begin_submit(&app).unwrap();
    let ids: Vec<&str> = payload.themes.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["theme-1", "theme-3"]);
    assert_eq!(payload.themes[1].title, "Relationships & Belonging");
    assert_eq!(payload.theme_priorities, None);
    assert_eq!(payload.age_group, "45-54");
    assert!(payload.consent);
    assert_eq!(flow.state(), &FlowState::Submitting);
}

#[test]
fn ranked_payload_after_move_down() {
    let mut app = app_with(&["theme-1", "theme-2"]);
    app.move_at(0, Direction::Down);

    let mut flow = FormFlow::new(SchemaVariant::OptionalContact);
    fill_variant_b(&mut flow);
    let payload = flow.begin_submit(&app).unwrap();

    let ids: Vec<&str> = payload.themes.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["theme-2", "theme-1"]);
    assert_eq!(
        payload.theme_priorities,
        Some(vec![
            ThemePriority { theme_id: "theme-2".to_string(), priority: 1 },
            ThemePriority { theme_id: "theme-1".to_string(), priority: 2 },
        ])
    );
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let app = app_with(&["theme-1"]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);
    flow.begin_submit(&app).unwrap();
    assert_eq!(flow.begin_submit(&app), Err(SubmitBlocked::InFlight));

    flow.edit(|f| f.name = "Changed".to_string());
    assert_eq!(flow.fields().name, "Jane Doe");
}

#[tokio::test]
async fn successful_submission_reaches_success() {
    let app = app_with(&["theme-1", "theme-3"]);
    let client = SubmissionClient::new(
        FakeTransport::new(Reply::Ok(200, r#"{"success":true}"#)),
        "https://relay.test/submit",
        Some("key-123".to_string()),
    );
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);

    let state = flow.submit(&app, &client).await.unwrap();
    assert_eq!(state, &FlowState::Success);
    assert_eq!(client.transport().calls(), 1);
}

#[tokio::test]
async fn failure_keeps_fields_and_allows_retry() {
    let app = app_with(&["theme-4"]);
    let failing = SubmissionClient::new(
        FakeTransport::new(Reply::Ok(500, "oops")),
        "https://relay.test/submit",
        Some("key-123".to_string()),
    );
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);

    let state = flow.submit(&app, &failing).await.unwrap().clone();
    assert!(matches!(state, FlowState::Error(SubmitError::Transport(_))));
    assert_eq!(flow.fields().email, "jane@example.com");
    assert_eq!(failing.transport().calls(), 1);

    let working = SubmissionClient::new(
        FakeTransport::new(Reply::Ok(200, r#"{"success":true}"#)),
        "https://relay.test/submit",
        Some("key-123".to_string()),
    );
    let state = flow.submit(&app, &working).await.unwrap();
    assert_eq!(state, &FlowState::Success);
}

#[tokio::test]
async fn missing_credential_surfaces_as_error_state() {
    let app = app_with(&["theme-4"]);
    let client = SubmissionClient::new(
        FakeTransport::new(Reply::Ok(200, r#"{"success":true}"#)),
        "https://relay.test/submit",
        None,
    );
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);

    let state = flow.submit(&app, &client).await.unwrap();
    assert_eq!(state, &FlowState::Error(SubmitError::MissingCredential));
    assert_eq!(client.transport().calls(), 0);
}

#[test]
fn editing_after_error_returns_to_editing() {
    let app = app_with(&["theme-4"]);
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    fill_variant_a(&mut flow);
    flow.begin_submit(&app).unwrap();
    flow.finish(Err(SubmitError::Rejected("nope".to_string())));
    assert!(matches!(flow.state(), FlowState::Error(_)));

    flow.edit(|f| f.name = "Janet".to_string());
    assert_eq!(flow.state(), &FlowState::Editing);
}

#[test]
fn finish_without_submission_is_ignored() {
    let mut flow = FormFlow::new(SchemaVariant::RequiredContact);
    flow.finish(Err(SubmitError::MissingCredential));
    assert_eq!(flow.state(), &FlowState::Editing);
}
