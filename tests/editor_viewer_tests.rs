//! Editor/viewer scenario tests
//!
//! The create-then-view flow end to end over the in-memory store, plus the
//! failure paths that must reach the caller instead of being swallowed.

use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use vivah::apps::ViewError;
use vivah::apps::profiles::{EditorOutcome, ProfileEditor, ProfileViewer, ViewerState};
use vivah::auth::{AuthUser, CurrentUser};
use vivah::store::{InMemoryProfileStore, StoreError};
use vivah::test_utils::FailingStore;

fn aditi() -> AuthUser {
	AuthUser {
		id: Uuid::new_v4(),
		email: "aditi@example.com".to_string(),
	}
}

fn minimal_submission() -> HashMap<String, Value> {
	HashMap::from([
		("fullName".to_string(), json!("Aditi")),
		("dateOfBirth".to_string(), json!("1995-01-01")),
		("gender".to_string(), json!("female")),
	])
}

#[tokio::test]
async fn create_then_view_renders_only_present_fields() {
	let owner = aditi();
	let store = Arc::new(InMemoryProfileStore::new());
	let identity = CurrentUser::authenticated(owner.clone());

	let editor = ProfileEditor::new(identity.clone(), Arc::clone(&store) as _);
	let viewer = ProfileViewer::new(identity, Arc::clone(&store) as _);

	// Before the first save the viewer offers creation.
	assert!(matches!(
		viewer.load().await.unwrap(),
		ViewerState::NotCreated
	));

	let outcome = editor.submit(minimal_submission()).await.unwrap();
	let EditorOutcome::Saved(saved) = outcome else {
		panic!("expected a saved profile");
	};
	assert_eq!(saved.full_name, "Aditi");

	let ViewerState::Loaded(detail) = viewer.load().await.unwrap() else {
		panic!("expected a loaded profile");
	};
	assert_eq!(detail.header().full_name, "Aditi");

	// Only sections with content render; no row is ever blank.
	let sections = detail.sections();
	let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
	assert_eq!(titles, vec!["Personal Details", "Lifestyle"]);
	let personal = &sections[0];
	assert!(personal.rows.iter().any(|r| r.label == "Gender" && r.value == "Female"));
	for section in &sections {
		for row in &section.rows {
			assert!(!row.value.is_empty());
		}
	}
}

#[tokio::test]
async fn missing_required_fields_block_submission_with_field_messages() {
	let store = Arc::new(InMemoryProfileStore::new());
	let editor = ProfileEditor::new(
		CurrentUser::authenticated(aditi()),
		Arc::clone(&store) as _,
	);

	let outcome = editor.submit(HashMap::new()).await.unwrap();
	let EditorOutcome::Invalid(errors) = outcome else {
		panic!("expected validation failure");
	};
	assert_eq!(errors["fullName"], vec!["Full name is required"]);
	assert_eq!(errors["dateOfBirth"], vec!["Date of birth is required"]);
	assert_eq!(errors["gender"], vec!["Gender is required"]);

	// Nothing was written.
	assert!(store.is_empty().await);
}

#[tokio::test]
async fn editor_prepopulates_the_form_from_the_existing_record() {
	let owner = aditi();
	let store = Arc::new(InMemoryProfileStore::new());
	let identity = CurrentUser::authenticated(owner);
	let editor = ProfileEditor::new(identity, Arc::clone(&store) as _);

	// First visit: empty form.
	let form = editor.load_form().await.unwrap();
	assert!(form.initial().is_empty());

	let mut data = minimal_submission();
	data.insert("city".to_string(), json!("Mumbai"));
	editor.submit(data).await.unwrap();

	// Second visit: pre-populated from the saved record.
	let form = editor.load_form().await.unwrap();
	assert_eq!(form.initial()["fullName"], json!("Aditi"));
	assert_eq!(form.initial()["city"], json!("Mumbai"));
}

#[tokio::test]
async fn store_failures_reach_the_caller() {
	let identity = CurrentUser::authenticated(aditi());
	let failing = Arc::new(FailingStore::unreachable());

	let viewer = ProfileViewer::new(identity.clone(), Arc::clone(&failing) as _);
	let err = viewer.load().await.unwrap_err();
	assert!(matches!(err, ViewError::Store(StoreError::Connection(_))));

	let editor = ProfileEditor::new(identity, failing as _);
	let err = editor.submit(minimal_submission()).await.unwrap_err();
	assert!(matches!(err, ViewError::Store(StoreError::Connection(_))));
}

#[tokio::test]
async fn anonymous_users_cannot_edit_or_view() {
	let store = Arc::new(InMemoryProfileStore::new());
	let identity = CurrentUser::anonymous();

	let editor = ProfileEditor::new(identity.clone(), Arc::clone(&store) as _);
	assert!(matches!(
		editor.submit(minimal_submission()).await.unwrap_err(),
		ViewError::NotSignedIn
	));

	let viewer = ProfileViewer::new(identity, store as _);
	assert!(matches!(
		viewer.load().await.unwrap_err(),
		ViewError::NotSignedIn
	));
}
