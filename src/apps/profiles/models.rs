//! Profile model and its closed-choice field types
//!
//! One profile document per user, keyed by the owner's user id. The wire
//! layout (field names and option values) matches the documents the external
//! store already holds, so existing records deserialize unchanged.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gender of the profile owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
	Male,
	Female,
}

/// Marital status choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
	NeverMarried,
	Divorced,
	Widowed,
	Separated,
}

/// Mother tongue choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotherTongue {
	Hindi,
	English,
	Tamil,
	Telugu,
	Marathi,
	Gujarati,
	Bengali,
	Kannada,
	Malayalam,
	Punjabi,
}

/// Highest-education choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
	HighSchool,
	Diploma,
	Bachelors,
	Masters,
	Phd,
	Professional,
}

/// Annual income band, in lakhs
///
/// Wire values are the band labels themselves ("0-3", "25+", ...), so the
/// variants carry explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBand {
	#[serde(rename = "0-3")]
	UpTo3,
	#[serde(rename = "3-5")]
	From3To5,
	#[serde(rename = "5-7")]
	From5To7,
	#[serde(rename = "7-10")]
	From7To10,
	#[serde(rename = "10-15")]
	From10To15,
	#[serde(rename = "15-20")]
	From15To20,
	#[serde(rename = "20-25")]
	From20To25,
	#[serde(rename = "25+")]
	Above25,
}

/// Religion choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Religion {
	Hindu,
	Muslim,
	Christian,
	Sikh,
	Buddhist,
	Jain,
	Other,
}

/// Family type choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyType {
	Nuclear,
	Joint,
}

/// Family status choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyStatus {
	MiddleClass,
	UpperMiddle,
	Rich,
	Affluent,
}

/// Diet choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
	Vegetarian,
	NonVegetarian,
	Vegan,
	JainVegetarian,
}

/// Smoking/drinking habit choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Habit {
	No,
	Occasionally,
	Yes,
}

/// Height in feet and inches, stored on the wire as `"<feet>ft<inches>in"`
///
/// # Examples
///
/// ```
/// use vivah::apps::profiles::models::Height;
///
/// let height: Height = "5ft4in".parse().unwrap();
/// assert_eq!(height, Height::new(5, 4).unwrap());
/// assert_eq!(height.to_string(), "5ft4in");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height {
	feet: u8,
	inches: u8,
}

/// Error returned when a height string does not look like `5ft6in`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("enter a height like 5ft6in")]
pub struct ParseHeightError;

impl Height {
	/// Build a height, rejecting an inch count of 12 or more
	pub fn new(feet: u8, inches: u8) -> Result<Self, ParseHeightError> {
		if inches >= 12 {
			return Err(ParseHeightError);
		}
		Ok(Self { feet, inches })
	}

	pub fn feet(&self) -> u8 {
		self.feet
	}

	pub fn inches(&self) -> u8 {
		self.inches
	}
}

impl fmt::Display for Height {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}ft{}in", self.feet, self.inches)
	}
}

impl FromStr for Height {
	type Err = ParseHeightError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let rest = s.strip_suffix("in").ok_or(ParseHeightError)?;
		let (feet, inches) = rest.split_once("ft").ok_or(ParseHeightError)?;
		let feet = feet.parse().map_err(|_| ParseHeightError)?;
		let inches = inches.parse().map_err(|_| ParseHeightError)?;
		Self::new(feet, inches)
	}
}

impl Serialize for Height {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Height {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

/// A user's matrimony profile, keyed in the store by `user_id`
///
/// `full_name`, `date_of_birth` and `gender` are the only required fields;
/// everything else is optional and omitted from the serialized document when
/// absent. Age is intentionally NOT a field: it is derived at display time
/// (see [`Profile::age_in`]), never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	pub full_name: String,
	pub date_of_birth: NaiveDate,
	pub gender: Gender,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub height: Option<Height>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub marital_status: Option<MaritalStatus>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mother_tongue: Option<MotherTongue>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub education: Option<Education>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub occupation: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub income: Option<IncomeBand>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub religion: Option<Religion>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub caste: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_type: Option<FamilyType>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_status: Option<FamilyStatus>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub diet: Option<Diet>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub smoking: Option<Habit>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub drinking: Option<Habit>,
	#[serde(default)]
	pub horoscope_match: bool,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub about: Option<String>,

	/// Owner's user id; also the document key in the store
	pub user_id: Uuid,
	pub email: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Profile {
	/// Age in whole years at `reference_year`
	///
	/// Year-granularity by contract: the birth month and day are ignored, so
	/// someone born in December counts a full year older from the following
	/// January 1st.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use vivah::test_utils::ProfileBuilder;
	/// use vivah::apps::profiles::models::Gender;
	///
	/// let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
	/// let profile = ProfileBuilder::new("Asha", dob, Gender::Female).build();
	/// assert_eq!(profile.age_in(2024), 24);
	/// ```
	pub fn age_in(&self, reference_year: i32) -> i32 {
		reference_year - self.date_of_birth.year()
	}
}

/// Wire spelling of a closed-choice value, as it appears in stored documents
pub(crate) fn wire<T: Serialize>(value: &T) -> String {
	match serde_json::to_value(value) {
		Ok(serde_json::Value::String(s)) => s,
		_ => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("4ft10in", 4, 10)]
	#[case("5ft0in", 5, 0)]
	#[case("6ft3in", 6, 3)]
	fn height_parses_wire_values(#[case] input: &str, #[case] feet: u8, #[case] inches: u8) {
		let height: Height = input.parse().unwrap();
		assert_eq!(height.feet(), feet);
		assert_eq!(height.inches(), inches);
		assert_eq!(height.to_string(), input);
	}

	#[rstest]
	#[case("5ft12in")]
	#[case("5'4\"")]
	#[case("170cm")]
	#[case("ft4in")]
	fn height_rejects_malformed_values(#[case] input: &str) {
		assert!(input.parse::<Height>().is_err());
	}

	#[test]
	fn choice_enums_serialize_to_documented_wire_values() {
		assert_eq!(wire(&MaritalStatus::NeverMarried), "never-married");
		assert_eq!(wire(&Education::HighSchool), "high-school");
		assert_eq!(wire(&Education::Phd), "phd");
		assert_eq!(wire(&IncomeBand::UpTo3), "0-3");
		assert_eq!(wire(&IncomeBand::Above25), "25+");
		assert_eq!(wire(&Diet::JainVegetarian), "jain-vegetarian");
		assert_eq!(wire(&FamilyStatus::UpperMiddle), "upper-middle");
		assert_eq!(wire(&Habit::Occasionally), "occasionally");
		assert_eq!(wire(&Religion::Hindu), "hindu");
	}

	#[test]
	fn unknown_choice_value_fails_to_deserialize() {
		let result: Result<Religion, _> = serde_json::from_value(serde_json::json!("pastafarian"));
		assert!(result.is_err());
	}

	#[test]
	fn age_ignores_month_and_day() {
		use crate::test_utils::ProfileBuilder;

		let june = ProfileBuilder::new(
			"A",
			NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
			Gender::Female,
		)
		.build();
		let december = ProfileBuilder::new(
			"B",
			NaiveDate::from_ymd_opt(2000, 12, 31).unwrap(),
			Gender::Male,
		)
		.build();

		// Both are 24 for the whole of 2024, even on 2024-01-01 when the
		// December birthday is still eleven months away.
		assert_eq!(june.age_in(2024), 24);
		assert_eq!(december.age_in(2024), 24);
	}

	#[test]
	fn document_omits_absent_fields_and_never_contains_age() {
		use crate::test_utils::ProfileBuilder;

		let profile = ProfileBuilder::new(
			"Aditi",
			NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
			Gender::Female,
		)
		.build();

		let doc = serde_json::to_value(&profile).unwrap();
		let doc = doc.as_object().unwrap();
		assert_eq!(doc["fullName"], "Aditi");
		assert_eq!(doc["dateOfBirth"], "1995-01-01");
		assert_eq!(doc["gender"], "female");
		assert!(!doc.contains_key("city"));
		assert!(!doc.contains_key("religion"));
		assert!(!doc.contains_key("age"));
	}

	#[test]
	fn document_round_trips_through_json() {
		use crate::test_utils::ProfileBuilder;

		let profile = ProfileBuilder::new(
			"Rohan",
			NaiveDate::from_ymd_opt(1992, 3, 9).unwrap(),
			Gender::Male,
		)
		.city("Mumbai")
		.state("Maharashtra")
		.religion(Religion::Hindu)
		.education(Education::Masters)
		.height(Height::new(5, 11).unwrap())
		.build();

		let json = serde_json::to_string(&profile).unwrap();
		let back: Profile = serde_json::from_str(&json).unwrap();
		assert_eq!(back, profile);
	}
}
