//! Browse view component
//!
//! Owns the load → filter → present state machine. Loading fetches every
//! other user's profile once; filter changes only re-run the predicate chain
//! over the already-loaded set.

use chrono::{Datelike, Utc};
use std::sync::Arc;

use super::filters::FilterCriteria;
use super::BrowseEntry;
use crate::apps::profiles::models::{Profile, wire};
use crate::apps::profiles::views::humanize;
use crate::apps::ViewError;
use crate::auth::CurrentUser;
use crate::store::{ProfileStore, StoreError};

/// Lifecycle of the browse component
///
/// `Loaded` transitions to itself on every filter change; only an explicit
/// [`BrowseView::load`] talks to the store again.
#[derive(Debug)]
pub enum BrowseState {
	Idle,
	Loading,
	Loaded {
		/// The full loaded set, kept so filters recombine from scratch
		entries: Vec<BrowseEntry>,
		/// The subset satisfying the active criteria, in load order
		visible: Vec<BrowseEntry>,
	},
	LoadFailed(StoreError),
}

/// What the browse page should currently show
#[derive(Debug, PartialEq)]
pub enum BrowseDisplay<'a> {
	Idle,
	Loading,
	/// Loaded, but nothing satisfies the active criteria; distinct from
	/// `Loading`
	NoProfilesFound,
	Cards(Vec<ProfileCard>),
	Failed(&'a StoreError),
}

/// The browse component
pub struct BrowseView {
	identity: CurrentUser,
	store: Arc<dyn ProfileStore>,
	criteria: FilterCriteria,
	reference_year: Option<i32>,
	state: BrowseState,
}

impl BrowseView {
	pub fn new(identity: CurrentUser, store: Arc<dyn ProfileStore>) -> Self {
		Self {
			identity,
			store,
			criteria: FilterCriteria::default(),
			reference_year: None,
			state: BrowseState::Idle,
		}
	}

	/// Override the year used for age derivation (defaults to the current
	/// UTC year)
	pub fn with_reference_year(mut self, year: i32) -> Self {
		self.reference_year = Some(year);
		self
	}

	pub fn state(&self) -> &BrowseState {
		&self.state
	}

	pub fn criteria(&self) -> &FilterCriteria {
		&self.criteria
	}

	/// Fetch every profile except the signed-in user's and derive ages
	///
	/// # Errors
	///
	/// [`ViewError::NotSignedIn`] without a signed-in user;
	/// [`ViewError::Store`] when the store cannot answer; the state is left
	/// as `LoadFailed` so the page can say so instead of showing an empty
	/// result.
	pub async fn load(&mut self) -> Result<(), ViewError> {
		let user_id = self.identity.id().map_err(|_| ViewError::NotSignedIn)?;
		let reference_year = self.reference_year.unwrap_or_else(|| Utc::now().year());

		self.state = BrowseState::Loading;
		match self.store.list(user_id).await {
			Ok(profiles) => {
				let entries: Vec<BrowseEntry> = profiles
					.into_iter()
					.map(|profile| BrowseEntry::derive(profile, reference_year))
					.collect();
				tracing::debug!(count = entries.len(), "loaded browse profiles");
				let visible = self.criteria.apply(&entries);
				self.state = BrowseState::Loaded { entries, visible };
				Ok(())
			}
			Err(e) => {
				tracing::error!(error = %e, "failed to load browse profiles");
				self.state = BrowseState::LoadFailed(e.clone());
				Err(e.into())
			}
		}
	}

	/// Replace the active criteria and re-filter the loaded set
	///
	/// No fetch happens here; the visible subset is recombined from the full
	/// loaded set.
	pub fn set_criteria(&mut self, criteria: FilterCriteria) {
		self.criteria = criteria;
		self.refilter();
	}

	/// Reset every filter key, showing the full loaded set again
	pub fn clear_filters(&mut self) {
		self.set_criteria(FilterCriteria::default());
	}

	fn refilter(&mut self) {
		if let BrowseState::Loaded { entries, visible } = &mut self.state {
			*visible = self.criteria.apply(entries);
		}
	}

	/// The entries satisfying the active criteria; empty unless loaded
	pub fn visible(&self) -> &[BrowseEntry] {
		match &self.state {
			BrowseState::Loaded { visible, .. } => visible,
			_ => &[],
		}
	}

	/// What the page should show right now
	pub fn display(&self) -> BrowseDisplay<'_> {
		match &self.state {
			BrowseState::Idle => BrowseDisplay::Idle,
			BrowseState::Loading => BrowseDisplay::Loading,
			BrowseState::Loaded { visible, .. } if visible.is_empty() => {
				BrowseDisplay::NoProfilesFound
			}
			BrowseState::Loaded { visible, .. } => {
				BrowseDisplay::Cards(visible.iter().map(ProfileCard::from_entry).collect())
			}
			BrowseState::LoadFailed(e) => BrowseDisplay::Failed(e),
		}
	}
}

/// One browse result, flattened to display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
	pub full_name: String,
	pub age: i32,
	pub height: Option<String>,
	/// "City, State", present only when both parts are
	pub location: Option<String>,
	pub education: Option<String>,
	pub occupation: Option<String>,
	pub religion: Option<String>,
	pub marital_status: Option<String>,
	pub horoscope_match: bool,
	pub about: Option<String>,
}

impl ProfileCard {
	pub fn from_entry(entry: &BrowseEntry) -> Self {
		let p = &entry.profile;
		Self {
			full_name: p.full_name.clone(),
			age: entry.age,
			height: p.height.map(|h| h.to_string()),
			location: location_line(p),
			education: p.education.map(|v| humanize(&wire(&v))),
			occupation: p.occupation.clone(),
			religion: p.religion.map(|v| humanize(&wire(&v))),
			marital_status: p.marital_status.map(|v| humanize(&wire(&v))),
			horoscope_match: p.horoscope_match,
			about: p.about.clone(),
		}
	}
}

fn location_line(profile: &Profile) -> Option<String> {
	match (&profile.city, &profile.state) {
		(Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
		_ => None,
	}
}
