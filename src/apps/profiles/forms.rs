//! Profile form binding and validation
//!
//! Binds raw submitted field data (string-keyed JSON values, exactly as the
//! form posts them) and validates it into a typed [`ProfileDraft`]. Full
//! name, date of birth and gender are required; every other field may be
//! present in any combination. Errors are collected per field so the form
//! can render them inline next to the offending input.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use super::models::{
	Diet, Education, FamilyStatus, FamilyType, Gender, Habit, Height, IncomeBand, MaritalStatus,
	MotherTongue, Profile, Religion,
};
use crate::auth::AuthUser;

/// Validation errors keyed by the wire name of the offending field
pub type FieldErrors = HashMap<String, Vec<String>>;

const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
const MSG_DOB_REQUIRED: &str = "Date of birth is required";
const MSG_GENDER_REQUIRED: &str = "Gender is required";
const MSG_INVALID_DATE: &str = "Enter a valid date";
const MSG_INVALID_CHOICE: &str = "Select a valid choice";

/// The validated content of a profile form, before identity metadata and
/// timestamps are attached
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
	pub full_name: String,
	pub date_of_birth: NaiveDate,
	pub gender: Gender,
	pub height: Option<Height>,
	pub marital_status: Option<MaritalStatus>,
	pub mother_tongue: Option<MotherTongue>,
	pub country: Option<String>,
	pub state: Option<String>,
	pub city: Option<String>,
	pub education: Option<Education>,
	pub occupation: Option<String>,
	pub income: Option<IncomeBand>,
	pub religion: Option<Religion>,
	pub caste: Option<String>,
	pub family_type: Option<FamilyType>,
	pub family_status: Option<FamilyStatus>,
	pub diet: Option<Diet>,
	pub smoking: Option<Habit>,
	pub drinking: Option<Habit>,
	pub horoscope_match: bool,
	pub about: Option<String>,
}

impl ProfileDraft {
	/// Attach the owner's identity and fresh timestamps, producing the full
	/// document that replaces whatever the store held before
	pub fn into_profile(self, owner: &AuthUser, now: DateTime<Utc>) -> Profile {
		Profile {
			full_name: self.full_name,
			date_of_birth: self.date_of_birth,
			gender: self.gender,
			height: self.height,
			marital_status: self.marital_status,
			mother_tongue: self.mother_tongue,
			country: self.country,
			state: self.state,
			city: self.city,
			education: self.education,
			occupation: self.occupation,
			income: self.income,
			religion: self.religion,
			caste: self.caste,
			family_type: self.family_type,
			family_status: self.family_status,
			diet: self.diet,
			smoking: self.smoking,
			drinking: self.drinking,
			horoscope_match: self.horoscope_match,
			about: self.about,
			user_id: owner.id,
			email: owner.email.clone(),
			created_at: now,
			updated_at: now,
		}
	}
}

/// The profile form: raw bound data, pre-population values and field errors
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use serde_json::json;
/// use vivah::apps::profiles::forms::ProfileForm;
///
/// let mut form = ProfileForm::new();
/// let mut data = HashMap::new();
/// data.insert("fullName".to_string(), json!("Aditi"));
/// data.insert("dateOfBirth".to_string(), json!("1995-01-01"));
/// data.insert("gender".to_string(), json!("female"));
/// form.bind(data);
///
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Default)]
pub struct ProfileForm {
	data: HashMap<String, Value>,
	initial: HashMap<String, Value>,
	errors: FieldErrors,
	is_bound: bool,
}

impl ProfileForm {
	/// Create an empty, unbound form
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a form pre-populated from an existing profile
	///
	/// Bookkeeping fields (owner id, email, timestamps) are injected on save,
	/// not edited, so they are stripped from the initial data.
	pub fn with_initial(profile: &Profile) -> Self {
		let mut initial = match serde_json::to_value(profile) {
			Ok(Value::Object(map)) => map.into_iter().collect::<HashMap<_, _>>(),
			_ => HashMap::new(),
		};
		for key in ["userId", "email", "createdAt", "updatedAt"] {
			initial.remove(key);
		}
		Self {
			initial,
			..Self::default()
		}
	}

	/// Bind submitted form data for validation
	pub fn bind(&mut self, data: HashMap<String, Value>) {
		self.data = data;
		self.is_bound = true;
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	/// Pre-population values for rendering the form
	pub fn initial(&self) -> &HashMap<String, Value> {
		&self.initial
	}

	/// Validate the bound data, storing field errors on failure
	///
	/// Returns `false` for an unbound form.
	pub fn is_valid(&mut self) -> bool {
		match self.validate() {
			Ok(_) => {
				self.errors.clear();
				true
			}
			Err(errors) => {
				self.errors = errors;
				false
			}
		}
	}

	/// Field errors recorded by the last [`is_valid`](Self::is_valid) call
	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	/// Validate the bound data into a typed draft
	///
	/// # Errors
	///
	/// Returns the per-field messages when any field fails validation, or a
	/// form-level message for an unbound form.
	pub fn validate(&self) -> Result<ProfileDraft, FieldErrors> {
		if !self.is_bound {
			let mut errors = FieldErrors::new();
			errors.insert("_all".to_string(), vec!["No data was submitted".to_string()]);
			return Err(errors);
		}

		let mut cleaner = Cleaner::new(&self.data);

		let full_name = cleaner.required_text("fullName", MSG_FULL_NAME_REQUIRED);
		let date_of_birth = cleaner.required_date("dateOfBirth", MSG_DOB_REQUIRED);
		let gender = cleaner.required_choice::<Gender>("gender", MSG_GENDER_REQUIRED);

		let height = cleaner.optional_choice("height");
		let marital_status = cleaner.optional_choice("maritalStatus");
		let mother_tongue = cleaner.optional_choice("motherTongue");
		let country = cleaner.optional_text("country");
		let state = cleaner.optional_text("state");
		let city = cleaner.optional_text("city");
		let education = cleaner.optional_choice("education");
		let occupation = cleaner.optional_text("occupation");
		let income = cleaner.optional_choice("income");
		let religion = cleaner.optional_choice("religion");
		let caste = cleaner.optional_text("caste");
		let family_type = cleaner.optional_choice("familyType");
		let family_status = cleaner.optional_choice("familyStatus");
		let diet = cleaner.optional_choice("diet");
		let smoking = cleaner.optional_choice("smoking");
		let drinking = cleaner.optional_choice("drinking");
		let horoscope_match = cleaner.checkbox("horoscopeMatch");
		let about = cleaner.optional_text("about");

		match (full_name, date_of_birth, gender) {
			(Some(full_name), Some(date_of_birth), Some(gender)) if cleaner.errors.is_empty() => {
				Ok(ProfileDraft {
					full_name,
					date_of_birth,
					gender,
					height,
					marital_status,
					mother_tongue,
					country,
					state,
					city,
					education,
					occupation,
					income,
					religion,
					caste,
					family_type,
					family_status,
					diet,
					smoking,
					drinking,
					horoscope_match,
					about,
				})
			}
			_ => Err(cleaner.errors),
		}
	}
}

/// Per-field cleaning over the raw bound data
struct Cleaner<'a> {
	data: &'a HashMap<String, Value>,
	errors: FieldErrors,
}

impl<'a> Cleaner<'a> {
	fn new(data: &'a HashMap<String, Value>) -> Self {
		Self {
			data,
			errors: FieldErrors::new(),
		}
	}

	fn add_error(&mut self, field: &str, message: &str) {
		self.errors
			.entry(field.to_string())
			.or_default()
			.push(message.to_string());
	}

	/// The trimmed string value for `field`, treating missing, null and
	/// blank values alike as absent
	fn present_str(&self, field: &str) -> Option<&str> {
		let value = self.data.get(field)?;
		let s = value.as_str()?.trim();
		if s.is_empty() { None } else { Some(s) }
	}

	fn required_text(&mut self, field: &str, required_message: &str) -> Option<String> {
		match self.present_str(field) {
			Some(s) => Some(s.to_string()),
			None => {
				self.add_error(field, required_message);
				None
			}
		}
	}

	fn optional_text(&mut self, field: &str) -> Option<String> {
		self.present_str(field).map(str::to_string)
	}

	fn required_date(&mut self, field: &str, required_message: &str) -> Option<NaiveDate> {
		let Some(raw) = self.present_str(field).map(str::to_string) else {
			self.add_error(field, required_message);
			return None;
		};
		match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
			Ok(date) => Some(date),
			Err(_) => {
				self.add_error(field, MSG_INVALID_DATE);
				None
			}
		}
	}

	fn required_choice<T: DeserializeOwned>(
		&mut self,
		field: &str,
		required_message: &str,
	) -> Option<T> {
		let Some(raw) = self.present_str(field).map(str::to_string) else {
			self.add_error(field, required_message);
			return None;
		};
		self.parse_choice(field, &raw)
	}

	fn optional_choice<T: DeserializeOwned>(&mut self, field: &str) -> Option<T> {
		let raw = self.present_str(field)?.to_string();
		self.parse_choice(field, &raw)
	}

	fn parse_choice<T: DeserializeOwned>(&mut self, field: &str, raw: &str) -> Option<T> {
		match serde_json::from_value(Value::String(raw.to_string())) {
			Ok(value) => Some(value),
			Err(_) => {
				self.add_error(field, MSG_INVALID_CHOICE);
				None
			}
		}
	}

	/// Checkbox semantics: only an explicit `true` counts as checked
	fn checkbox(&self, field: &str) -> bool {
		matches!(self.data.get(field), Some(Value::Bool(true)))
	}
}
