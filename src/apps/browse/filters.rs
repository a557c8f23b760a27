//! Browse filter criteria
//!
//! The filter panel submits six raw strings ([`FilterForm`]); the boundary
//! parses them once into typed [`FilterCriteria`] instead of re-interpreting
//! strings inside every predicate. An unset key imposes no constraint, and
//! the predicates are independent and conjunctive.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::BrowseEntry;
use crate::apps::profiles::models::{Education, MaritalStatus, Religion};

/// Raw filter panel state, exactly as submitted: six optional strings, blank
/// meaning unset
///
/// `Default` is the cleared panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterForm {
	pub age_min: String,
	pub age_max: String,
	pub religion: String,
	pub education: String,
	pub city: String,
	pub marital_status: String,
}

/// Parse errors keyed by the wire name of the offending filter field
pub type FilterErrors = HashMap<String, String>;

/// An age interval with optional bounds, inclusive on both ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeRange {
	pub min: Option<i32>,
	pub max: Option<i32>,
}

impl AgeRange {
	pub fn is_unbounded(&self) -> bool {
		self.min.is_none() && self.max.is_none()
	}

	pub fn contains(&self, age: i32) -> bool {
		self.min.map_or(true, |min| age >= min) && self.max.map_or(true, |max| age <= max)
	}
}

/// Typed, validated browse criteria
///
/// `Default` is the identity filter: every entry passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
	pub age: AgeRange,
	pub religion: Option<Religion>,
	pub education: Option<Education>,
	/// Case-insensitive substring match against the profile's city
	pub city: Option<String>,
	pub marital_status: Option<MaritalStatus>,
}

impl FilterCriteria {
	/// Parse the raw panel state, validating each set value at this boundary
	///
	/// Blank values mean unset. A non-blank value that does not parse (an
	/// age that is not a whole number, a choice that is not one of the
	/// options) is reported against its field rather than silently matching
	/// nothing.
	///
	/// # Examples
	///
	/// ```
	/// use vivah::apps::browse::{FilterCriteria, FilterForm};
	/// use vivah::apps::profiles::models::Religion;
	///
	/// let form = FilterForm {
	/// 	age_min: "25".to_string(),
	/// 	religion: "hindu".to_string(),
	/// 	..FilterForm::default()
	/// };
	/// let criteria = FilterCriteria::parse(&form).unwrap();
	/// assert_eq!(criteria.age.min, Some(25));
	/// assert_eq!(criteria.religion, Some(Religion::Hindu));
	/// assert_eq!(criteria.city, None);
	/// ```
	pub fn parse(form: &FilterForm) -> Result<Self, FilterErrors> {
		let mut errors = FilterErrors::new();

		let min = parse_age(&form.age_min, "ageMin", &mut errors);
		let max = parse_age(&form.age_max, "ageMax", &mut errors);
		let religion = parse_choice(&form.religion, "religion", &mut errors);
		let education = parse_choice(&form.education, "education", &mut errors);
		let marital_status = parse_choice(&form.marital_status, "maritalStatus", &mut errors);
		let city = match form.city.trim() {
			"" => None,
			needle => Some(needle.to_string()),
		};

		if errors.is_empty() {
			Ok(Self {
				age: AgeRange { min, max },
				religion,
				education,
				city,
				marital_status,
			})
		} else {
			Err(errors)
		}
	}

	/// Whether every key is unset, making this the identity filter
	pub fn is_empty(&self) -> bool {
		self.age.is_unbounded()
			&& self.religion.is_none()
			&& self.education.is_none()
			&& self.city.is_none()
			&& self.marital_status.is_none()
	}

	/// Whether `entry` satisfies every set predicate
	pub fn matches(&self, entry: &BrowseEntry) -> bool {
		let profile = &entry.profile;

		if !self.age.contains(entry.age) {
			return false;
		}
		if let Some(religion) = self.religion
			&& profile.religion != Some(religion)
		{
			return false;
		}
		if let Some(education) = self.education
			&& profile.education != Some(education)
		{
			return false;
		}
		if let Some(needle) = &self.city {
			let needle = needle.to_lowercase();
			let contains = profile
				.city
				.as_deref()
				.is_some_and(|city| city.to_lowercase().contains(&needle));
			if !contains {
				return false;
			}
		}
		if let Some(marital_status) = self.marital_status
			&& profile.marital_status != Some(marital_status)
		{
			return false;
		}

		true
	}

	/// Filter `entries`, keeping order
	///
	/// Always recomputed from the full loaded set; there is no incremental
	/// update to go wrong when criteria change.
	pub fn apply(&self, entries: &[BrowseEntry]) -> Vec<BrowseEntry> {
		entries
			.iter()
			.filter(|entry| self.matches(entry))
			.cloned()
			.collect()
	}
}

fn parse_age(raw: &str, field: &str, errors: &mut FilterErrors) -> Option<i32> {
	let raw = raw.trim();
	if raw.is_empty() {
		return None;
	}
	match raw.parse() {
		Ok(age) => Some(age),
		Err(_) => {
			errors.insert(field.to_string(), "Enter a whole number".to_string());
			None
		}
	}
}

fn parse_choice<T: serde::de::DeserializeOwned>(
	raw: &str,
	field: &str,
	errors: &mut FilterErrors,
) -> Option<T> {
	let raw = raw.trim();
	if raw.is_empty() {
		return None;
	}
	match serde_json::from_value(Value::String(raw.to_string())) {
		Ok(value) => Some(value),
		Err(_) => {
			errors.insert(field.to_string(), "Select a valid choice".to_string());
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::apps::profiles::models::Gender;
	use crate::test_utils::ProfileBuilder;
	use chrono::NaiveDate;
	use rstest::rstest;

	fn entry(name: &str, birth_year: i32, religion: Option<Religion>, city: Option<&str>) -> BrowseEntry {
		let mut builder = ProfileBuilder::new(
			name,
			NaiveDate::from_ymd_opt(birth_year, 6, 15).unwrap(),
			Gender::Female,
		);
		if let Some(religion) = religion {
			builder = builder.religion(religion);
		}
		if let Some(city) = city {
			builder = builder.city(city);
		}
		BrowseEntry::derive(builder.build(), 2026)
	}

	#[test]
	fn empty_criteria_is_the_identity() {
		let entries = vec![
			entry("A", 1998, Some(Religion::Hindu), Some("Mumbai")),
			entry("B", 1975, None, None),
		];

		let criteria = FilterCriteria::default();
		assert!(criteria.is_empty());
		assert_eq!(criteria.apply(&entries), entries);
	}

	#[test]
	fn parse_treats_blank_as_unset() {
		let form = FilterForm {
			age_min: "  ".to_string(),
			..FilterForm::default()
		};
		let criteria = FilterCriteria::parse(&form).unwrap();
		assert!(criteria.is_empty());
	}

	#[rstest]
	#[case("abc", "ageMin")]
	#[case("25.5", "ageMin")]
	fn non_numeric_age_is_a_boundary_error(#[case] raw: &str, #[case] field: &str) {
		let form = FilterForm {
			age_min: raw.to_string(),
			..FilterForm::default()
		};
		let errors = FilterCriteria::parse(&form).unwrap_err();
		assert_eq!(errors[field], "Enter a whole number");
	}

	#[test]
	fn unknown_choice_is_a_boundary_error() {
		let form = FilterForm {
			religion: "pastafarian".to_string(),
			..FilterForm::default()
		};
		let errors = FilterCriteria::parse(&form).unwrap_err();
		assert_eq!(errors["religion"], "Select a valid choice");
	}

	#[test]
	fn religion_matches_exactly() {
		let entries = vec![
			entry("A", 1998, Some(Religion::Hindu), None),
			entry("B", 1998, Some(Religion::Jain), None),
			entry("C", 1998, None, None),
		];

		let criteria = FilterCriteria {
			religion: Some(Religion::Hindu),
			..FilterCriteria::default()
		};
		let matched = criteria.apply(&entries);
		assert_eq!(matched.len(), 1);
		assert_eq!(matched[0].profile.religion, Some(Religion::Hindu));
	}

	#[rstest]
	#[case("mum", true)]
	#[case("MUMBAI", true)]
	#[case("bai", true)]
	#[case("pune", false)]
	fn city_matches_case_insensitive_substrings(#[case] needle: &str, #[case] expected: bool) {
		let entries = vec![entry("A", 1998, None, Some("Mumbai"))];
		let criteria = FilterCriteria {
			city: Some(needle.to_string()),
			..FilterCriteria::default()
		};
		assert_eq!(criteria.apply(&entries).len() == 1, expected);
	}

	#[test]
	fn profiles_without_a_city_fail_the_city_predicate() {
		let entries = vec![entry("A", 1998, None, None)];
		let criteria = FilterCriteria {
			city: Some("mumbai".to_string()),
			..FilterCriteria::default()
		};
		assert!(criteria.apply(&entries).is_empty());
	}

	#[test]
	fn age_bounds_are_inclusive() {
		let entries = vec![
			entry("A", 2001, None, None), // 25
			entry("B", 1991, None, None), // 35
			entry("C", 2004, None, None), // 22
			entry("D", 1985, None, None), // 41
		];
		let criteria = FilterCriteria {
			age: AgeRange {
				min: Some(25),
				max: Some(35),
			},
			..FilterCriteria::default()
		};
		let names: Vec<_> = criteria
			.apply(&entries)
			.into_iter()
			.map(|e| e.profile.full_name)
			.collect();
		assert_eq!(names, vec!["A", "B"]);
	}

	#[test]
	fn predicates_combine_conjunctively() {
		// Ages [22, 28, 31, 40, 26]; religions [hindu, hindu, muslim, hindu, hindu].
		let entries = vec![
			entry("A", 2004, Some(Religion::Hindu), None),
			entry("B", 1998, Some(Religion::Hindu), None),
			entry("C", 1995, Some(Religion::Muslim), None),
			entry("D", 1986, Some(Religion::Hindu), None),
			entry("E", 2000, Some(Religion::Hindu), None),
		];
		let criteria = FilterCriteria {
			age: AgeRange {
				min: Some(25),
				max: Some(35),
			},
			religion: Some(Religion::Hindu),
			..FilterCriteria::default()
		};

		let ages: Vec<_> = criteria.apply(&entries).into_iter().map(|e| e.age).collect();
		assert_eq!(ages, vec![28, 26]);
	}
}
