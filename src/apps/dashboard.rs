//! Dashboard shell and header
//!
//! The signed-in landing surface: a tab bar over the profile and browse
//! components, plus the header with the signed-in email and logout. Tab and
//! edit-mode state live here; the tab content components own their own
//! loading state.

use std::sync::Arc;

use crate::auth::{AuthError, IdentityProvider};
use crate::conf::Settings;

/// Dashboard tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
	Profile,
	Browse,
	Matches,
	Settings,
}

impl Tab {
	pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Browse, Tab::Matches, Tab::Settings];

	pub fn label(&self) -> &'static str {
		match self {
			Tab::Profile => "My Profile",
			Tab::Browse => "Browse Profiles",
			Tab::Matches => "My Matches",
			Tab::Settings => "Settings",
		}
	}
}

impl Default for Tab {
	fn default() -> Self {
		Tab::Profile
	}
}

/// What the dashboard body should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardContent {
	/// The read-only profile page with its edit affordance
	ProfileView,
	/// The profile form
	ProfileEditor,
	Browse,
	/// A not-yet-built tab
	ComingSoon { title: &'static str, message: &'static str },
}

/// Tab and edit-mode state machine for the signed-in shell
///
/// # Examples
///
/// ```
/// use vivah::apps::dashboard::{DashboardContent, DashboardView};
///
/// let mut dashboard = DashboardView::new();
/// assert_eq!(dashboard.content(), DashboardContent::ProfileView);
///
/// dashboard.start_editing();
/// assert_eq!(dashboard.content(), DashboardContent::ProfileEditor);
///
/// // Saving drops back to the read-only view.
/// dashboard.profile_saved();
/// assert_eq!(dashboard.content(), DashboardContent::ProfileView);
/// ```
#[derive(Debug, Default)]
pub struct DashboardView {
	active_tab: Tab,
	editing: bool,
}

impl DashboardView {
	/// Start on the profile tab, in view mode
	pub fn new() -> Self {
		Self::default()
	}

	pub fn active_tab(&self) -> Tab {
		self.active_tab
	}

	pub fn is_editing(&self) -> bool {
		self.editing
	}

	/// Switch tabs; always leaves edit mode
	pub fn select_tab(&mut self, tab: Tab) {
		self.active_tab = tab;
		self.editing = false;
	}

	/// Open the profile form (profile tab only; a no-op elsewhere)
	pub fn start_editing(&mut self) {
		if self.active_tab == Tab::Profile {
			self.editing = true;
		}
	}

	/// The editor finished; return to the read-only view
	pub fn profile_saved(&mut self) {
		self.editing = false;
	}

	pub fn content(&self) -> DashboardContent {
		match (self.active_tab, self.editing) {
			(Tab::Profile, true) => DashboardContent::ProfileEditor,
			(Tab::Profile, false) => DashboardContent::ProfileView,
			(Tab::Browse, _) => DashboardContent::Browse,
			(Tab::Matches, _) => DashboardContent::ComingSoon {
				title: "Coming Soon",
				message: "Matches feature will be available soon",
			},
			(Tab::Settings, _) => DashboardContent::ComingSoon {
				title: "Settings",
				message: "Settings panel coming soon",
			},
		}
	}
}

/// The page header: brand, signed-in email, logout
pub struct Header {
	settings: Settings,
	identity: Arc<dyn IdentityProvider>,
}

impl Header {
	pub fn new(settings: Settings, identity: Arc<dyn IdentityProvider>) -> Self {
		Self { settings, identity }
	}

	pub fn brand(&self) -> &str {
		&self.settings.app_name
	}

	/// Email shown next to the logout button, when signed in
	pub fn signed_in_email(&self) -> Option<String> {
		self.identity.current_user().map(|user| user.email)
	}

	/// End the session via the identity boundary
	///
	/// # Errors
	///
	/// Propagates the provider's failure after logging it; the caller decides
	/// whether to retry or ignore.
	pub async fn logout(&self) -> Result<(), AuthError> {
		self.identity.logout().await.map_err(|e| {
			tracing::error!(error = %e, "logout failed");
			e
		})
	}
}
