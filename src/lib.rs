//! # vivah-web
//!
//! A matrimony-profile application: users authenticate, create and edit a
//! personal profile, and browse other users' profiles with filtering.
//! Authentication and persistence are owned by external services; this crate
//! contains the view components, the form binding, and the browse/filter
//! pipeline that sit on top of them.
//!
//! ## Architecture
//!
//! - [`auth`]: identity boundary, the signed-in user and logout, consumed
//!   through an injected [`auth::IdentityProvider`] handle
//! - [`store`]: profile document store boundary, point read, full-replace
//!   write and the browse query, plus an in-memory backend for tests
//! - [`apps::profiles`]: the typed profile document, its form, and the
//!   editor/viewer components
//! - [`apps::browse`]: the browse pipeline of load, derive age, filter,
//!   present
//! - [`apps::dashboard`]: the signed-in shell with tabs, edit mode, header
//! - [`conf`]: environment-driven settings
//!
//! Components never swallow failures: store and identity errors are logged
//! via `tracing` where they happen and propagated to the caller, so an empty
//! page and a failed load are always distinguishable.

pub mod apps;
pub mod auth;
pub mod conf;
pub mod store;
pub mod test_utils;

pub use apps::ViewError;
pub use apps::browse::{BrowseDisplay, BrowseEntry, BrowseState, BrowseView, FilterCriteria, FilterForm};
pub use apps::dashboard::{DashboardView, Header, Tab};
pub use apps::profiles::{
	EditorOutcome, Profile, ProfileDetail, ProfileEditor, ProfileForm, ProfileViewer, ViewerState,
};
pub use auth::{AuthError, AuthUser, CurrentUser, IdentityProvider};
pub use conf::Settings;
pub use store::{InMemoryProfileStore, ProfileStore, StoreError};
