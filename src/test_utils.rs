//! Test utilities
//!
//! Fixture builders and boundary doubles shared by unit tests, integration
//! tests and doctests.

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::apps::profiles::models::{
	Diet, Education, FamilyStatus, FamilyType, Gender, Habit, Height, IncomeBand, MaritalStatus,
	MotherTongue, Profile, Religion,
};
use crate::auth::{AuthError, AuthUser, IdentityProvider};
use crate::store::{ProfileStore, StoreError, StoreResult};

/// Builder for profile fixtures
///
/// Starts from the three required fields plus a fresh owner id and fixed
/// timestamps; everything else is opt-in.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use vivah::apps::profiles::models::{Gender, Religion};
/// use vivah::test_utils::ProfileBuilder;
///
/// let profile = ProfileBuilder::new(
/// 	"Asha",
/// 	NaiveDate::from_ymd_opt(1998, 6, 1).unwrap(),
/// 	Gender::Female,
/// )
/// .religion(Religion::Hindu)
/// .city("Mumbai")
/// .build();
///
/// assert_eq!(profile.full_name, "Asha");
/// assert_eq!(profile.religion, Some(Religion::Hindu));
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
	profile: Profile,
}

impl ProfileBuilder {
	pub fn new(full_name: &str, date_of_birth: NaiveDate, gender: Gender) -> Self {
		let user_id = Uuid::new_v4();
		let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
		Self {
			profile: Profile {
				full_name: full_name.to_string(),
				date_of_birth,
				gender,
				height: None,
				marital_status: None,
				mother_tongue: None,
				country: None,
				state: None,
				city: None,
				education: None,
				occupation: None,
				income: None,
				religion: None,
				caste: None,
				family_type: None,
				family_status: None,
				diet: None,
				smoking: None,
				drinking: None,
				horoscope_match: false,
				about: None,
				user_id,
				email: format!("{}@example.com", full_name.to_lowercase()),
				created_at: created,
				updated_at: created,
			},
		}
	}

	pub fn user_id(mut self, user_id: Uuid) -> Self {
		self.profile.user_id = user_id;
		self
	}

	pub fn email(mut self, email: &str) -> Self {
		self.profile.email = email.to_string();
		self
	}

	pub fn height(mut self, height: Height) -> Self {
		self.profile.height = Some(height);
		self
	}

	pub fn marital_status(mut self, marital_status: MaritalStatus) -> Self {
		self.profile.marital_status = Some(marital_status);
		self
	}

	pub fn mother_tongue(mut self, mother_tongue: MotherTongue) -> Self {
		self.profile.mother_tongue = Some(mother_tongue);
		self
	}

	pub fn country(mut self, country: &str) -> Self {
		self.profile.country = Some(country.to_string());
		self
	}

	pub fn state(mut self, state: &str) -> Self {
		self.profile.state = Some(state.to_string());
		self
	}

	pub fn city(mut self, city: &str) -> Self {
		self.profile.city = Some(city.to_string());
		self
	}

	pub fn education(mut self, education: Education) -> Self {
		self.profile.education = Some(education);
		self
	}

	pub fn occupation(mut self, occupation: &str) -> Self {
		self.profile.occupation = Some(occupation.to_string());
		self
	}

	pub fn income(mut self, income: IncomeBand) -> Self {
		self.profile.income = Some(income);
		self
	}

	pub fn religion(mut self, religion: Religion) -> Self {
		self.profile.religion = Some(religion);
		self
	}

	pub fn caste(mut self, caste: &str) -> Self {
		self.profile.caste = Some(caste.to_string());
		self
	}

	pub fn family_type(mut self, family_type: FamilyType) -> Self {
		self.profile.family_type = Some(family_type);
		self
	}

	pub fn family_status(mut self, family_status: FamilyStatus) -> Self {
		self.profile.family_status = Some(family_status);
		self
	}

	pub fn diet(mut self, diet: Diet) -> Self {
		self.profile.diet = Some(diet);
		self
	}

	pub fn smoking(mut self, smoking: Habit) -> Self {
		self.profile.smoking = Some(smoking);
		self
	}

	pub fn drinking(mut self, drinking: Habit) -> Self {
		self.profile.drinking = Some(drinking);
		self
	}

	pub fn horoscope_match(mut self, required: bool) -> Self {
		self.profile.horoscope_match = required;
		self
	}

	pub fn about(mut self, about: &str) -> Self {
		self.profile.about = Some(about.to_string());
		self
	}

	pub fn build(self) -> Profile {
		self.profile
	}
}

/// Identity provider double with a fixed session state
#[derive(Debug, Clone)]
pub struct StaticIdentity {
	user: Option<AuthUser>,
}

impl StaticIdentity {
	pub fn signed_in(user: AuthUser) -> Self {
		Self { user: Some(user) }
	}

	pub fn signed_out() -> Self {
		Self { user: None }
	}
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
	fn current_user(&self) -> Option<AuthUser> {
		self.user.clone()
	}

	async fn logout(&self) -> Result<(), AuthError> {
		match self.user {
			Some(_) => Ok(()),
			None => Err(AuthError::NotAuthenticated),
		}
	}
}

/// Store double whose every operation fails with the configured error
pub struct FailingStore {
	error: StoreError,
}

impl FailingStore {
	pub fn new(error: StoreError) -> Self {
		Self { error }
	}

	/// A store that fails like an unreachable backend
	pub fn unreachable() -> Self {
		Self::new(StoreError::Connection("store unreachable".to_string()))
	}
}

#[async_trait]
impl ProfileStore for FailingStore {
	async fn get(&self, _user_id: Uuid) -> StoreResult<Option<Profile>> {
		Err(self.error.clone())
	}

	async fn put(&self, _user_id: Uuid, _profile: &Profile) -> StoreResult<()> {
		Err(self.error.clone())
	}

	async fn list(&self, _exclude: Uuid) -> StoreResult<Vec<Profile>> {
		Err(self.error.clone())
	}
}
