//! browse application
//!
//! The browse pipeline: load every other user's profile, derive the
//! display-time age, filter with the active criteria, and present the result
//! as cards.

pub mod filters;
pub mod views;

pub use filters::{AgeRange, FilterCriteria, FilterErrors, FilterForm};
pub use views::{BrowseDisplay, BrowseState, BrowseView, ProfileCard};

use crate::apps::profiles::models::Profile;

/// A loaded profile with its browse-time derived age
///
/// Age is derived here, at load time, and only here; it is never a field of
/// the stored document. Derivation is year-granular by contract:
/// `reference_year - birth_year`, no month/day adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseEntry {
	pub profile: Profile,
	pub age: i32,
}

impl BrowseEntry {
	/// Derive the entry for `profile` at `reference_year`
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use vivah::apps::browse::BrowseEntry;
	/// use vivah::apps::profiles::models::Gender;
	/// use vivah::test_utils::ProfileBuilder;
	///
	/// let profile = ProfileBuilder::new(
	/// 	"Asha",
	/// 	NaiveDate::from_ymd_opt(2000, 12, 31).unwrap(),
	/// 	Gender::Female,
	/// )
	/// .build();
	///
	/// // Year-granular: on 2024-01-01 this is already 24, one year "too old".
	/// let entry = BrowseEntry::derive(profile, 2024);
	/// assert_eq!(entry.age, 24);
	/// ```
	pub fn derive(profile: Profile, reference_year: i32) -> Self {
		let age = profile.age_in(reference_year);
		Self { profile, age }
	}
}
