//! Profile editor and viewer components
//!
//! Both components receive their identity and store handles explicitly; no
//! ambient session state. Store failures are logged and propagated, so the
//! caller can always tell "no profile yet" from "the store did not answer".

use chrono::{Datelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use super::forms::{FieldErrors, ProfileForm};
use super::models::{Profile, wire};
use crate::apps::ViewError;
use crate::auth::CurrentUser;
use crate::store::ProfileStore;

/// Outcome of a profile form submission
#[derive(Debug)]
pub enum EditorOutcome {
	/// The profile was validated and written; the caller should leave edit
	/// mode
	Saved(Profile),
	/// Validation failed; messages are keyed by field for inline rendering
	Invalid(FieldErrors),
}

/// The profile editor component
///
/// Loads the owner's existing record to pre-populate the form, validates
/// submissions, and writes the merged record as a full replacement.
pub struct ProfileEditor {
	identity: CurrentUser,
	store: Arc<dyn ProfileStore>,
}

impl ProfileEditor {
	pub fn new(identity: CurrentUser, store: Arc<dyn ProfileStore>) -> Self {
		Self { identity, store }
	}

	/// Build the form, pre-populated from the existing profile when there is
	/// one
	///
	/// # Errors
	///
	/// [`ViewError::NotSignedIn`] without a signed-in user;
	/// [`ViewError::Store`] when the load fails (a missing record is not a
	/// failure).
	pub async fn load_form(&self) -> Result<ProfileForm, ViewError> {
		let user_id = self.identity.id().map_err(|_| ViewError::NotSignedIn)?;
		let existing = self.store.get(user_id).await.map_err(|e| {
			tracing::error!(error = %e, %user_id, "failed to load profile for editing");
			e
		})?;
		Ok(match existing {
			Some(profile) => ProfileForm::with_initial(&profile),
			None => ProfileForm::new(),
		})
	}

	/// Validate and save a submission
	///
	/// On success the stored document is `{submitted fields} ∪ {owner id,
	/// owner email, created_at = now, updated_at = now}`, a full
	/// replacement, so resubmitting refreshes both timestamps and drops any
	/// field the new submission left out.
	///
	/// # Errors
	///
	/// [`ViewError::NotSignedIn`] without a signed-in user;
	/// [`ViewError::Store`] when the write fails. Validation failure is an
	/// [`EditorOutcome::Invalid`], not an error.
	pub async fn submit(
		&self,
		data: HashMap<String, serde_json::Value>,
	) -> Result<EditorOutcome, ViewError> {
		let owner = self
			.identity
			.user()
			.map_err(|_| ViewError::NotSignedIn)?
			.clone();

		let mut form = ProfileForm::new();
		form.bind(data);
		let draft = match form.validate() {
			Ok(draft) => draft,
			Err(errors) => return Ok(EditorOutcome::Invalid(errors)),
		};

		let profile = draft.into_profile(&owner, Utc::now());
		self.store.put(owner.id, &profile).await.map_err(|e| {
			tracing::error!(error = %e, user_id = %owner.id, "failed to save profile");
			e
		})?;
		tracing::info!(user_id = %owner.id, "profile saved");
		Ok(EditorOutcome::Saved(profile))
	}
}

/// What the profile viewer found for the signed-in user
#[derive(Debug)]
pub enum ViewerState {
	/// No profile yet; the caller shows the create affordance
	NotCreated,
	Loaded(ProfileDetail),
}

/// The profile viewer component
pub struct ProfileViewer {
	identity: CurrentUser,
	store: Arc<dyn ProfileStore>,
}

impl ProfileViewer {
	pub fn new(identity: CurrentUser, store: Arc<dyn ProfileStore>) -> Self {
		Self { identity, store }
	}

	/// Load the signed-in user's profile for read-only display
	///
	/// # Errors
	///
	/// [`ViewError::NotSignedIn`] without a signed-in user;
	/// [`ViewError::Store`] when the load fails, distinct from
	/// [`ViewerState::NotCreated`], which is the success case with no record.
	pub async fn load(&self) -> Result<ViewerState, ViewError> {
		let user_id = self.identity.id().map_err(|_| ViewError::NotSignedIn)?;
		let profile = self.store.get(user_id).await.map_err(|e| {
			tracing::error!(error = %e, %user_id, "failed to load profile");
			e
		})?;
		Ok(match profile {
			Some(profile) => ViewerState::Loaded(ProfileDetail::new(profile)),
			None => ViewerState::NotCreated,
		})
	}
}

/// A loaded profile prepared for read-only rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
	profile: Profile,
	age: i32,
}

/// Header line of the profile page: name plus the short facts shown beside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeader {
	pub full_name: String,
	pub age: i32,
	pub height: Option<String>,
	/// "City, State", present only when both parts are
	pub location: Option<String>,
}

/// One titled group of read-only rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub title: &'static str,
	pub rows: Vec<Row>,
}

/// A single label/value display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub label: &'static str,
	pub value: String,
}

impl ProfileDetail {
	/// Prepare `profile` for display, deriving the age at the current year
	pub fn new(profile: Profile) -> Self {
		Self::at_year(profile, Utc::now().year())
	}

	/// Prepare `profile` for display with an explicit reference year
	pub fn at_year(profile: Profile, reference_year: i32) -> Self {
		let age = profile.age_in(reference_year);
		Self { profile, age }
	}

	pub fn profile(&self) -> &Profile {
		&self.profile
	}

	pub fn header(&self) -> ProfileHeader {
		ProfileHeader {
			full_name: self.profile.full_name.clone(),
			age: self.age,
			height: self.profile.height.map(|h| h.to_string()),
			location: match (&self.profile.city, &self.profile.state) {
				(Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
				_ => None,
			},
		}
	}

	/// The read-only field groups, in display order
	///
	/// Absent fields produce no row, and a group with no rows is dropped
	/// entirely rather than rendered as an empty box. Lifestyle always has at
	/// least the horoscope row, which reads "Not Required" when unset.
	pub fn sections(&self) -> Vec<Section> {
		let p = &self.profile;
		let mut sections = Vec::new();

		let mut push = |title: &'static str, rows: Vec<Option<Row>>| {
			let rows: Vec<Row> = rows.into_iter().flatten().collect();
			if !rows.is_empty() {
				sections.push(Section { title, rows });
			}
		};

		push(
			"Personal Details",
			vec![
				Some(row("Date of Birth", p.date_of_birth.format("%-d %B %Y"))),
				Some(row("Gender", humanize(&wire(&p.gender)))),
				p.marital_status
					.map(|v| row("Marital Status", humanize(&wire(&v)))),
				p.mother_tongue
					.map(|v| row("Mother Tongue", humanize(&wire(&v)))),
			],
		);
		push(
			"Location",
			vec![
				p.country.as_deref().map(|v| row("Country", v)),
				p.state.as_deref().map(|v| row("State", v)),
				p.city.as_deref().map(|v| row("City", v)),
			],
		);
		push(
			"Education & Career",
			vec![
				p.education.map(|v| row("Education", humanize(&wire(&v)))),
				p.occupation.as_deref().map(|v| row("Occupation", v)),
				p.income
					.map(|v| row("Annual Income", format!("{} Lakhs", wire(&v)))),
			],
		);
		push(
			"Family & Religion",
			vec![
				p.religion.map(|v| row("Religion", humanize(&wire(&v)))),
				p.caste.as_deref().map(|v| row("Caste", v)),
				p.family_type.map(|v| row("Family Type", humanize(&wire(&v)))),
				p.family_status
					.map(|v| row("Family Status", humanize(&wire(&v)))),
			],
		);
		push(
			"Lifestyle",
			vec![
				p.diet.map(|v| row("Diet", humanize(&wire(&v)))),
				p.smoking.map(|v| row("Smoking", humanize(&wire(&v)))),
				p.drinking.map(|v| row("Drinking", humanize(&wire(&v)))),
				Some(row(
					"Horoscope Match",
					if p.horoscope_match {
						"Required"
					} else {
						"Not Required"
					},
				)),
			],
		);
		push(
			"About Me",
			vec![p.about.as_deref().map(|v| row("About", v))],
		);

		sections
	}
}

fn row(label: &'static str, value: impl ToString) -> Row {
	Row {
		label,
		value: value.to_string(),
	}
}

/// Human-readable spelling of a wire value: hyphens become spaces and each
/// word is capitalized ("never-married" → "Never Married")
pub(crate) fn humanize(wire: &str) -> String {
	wire.split('-')
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
