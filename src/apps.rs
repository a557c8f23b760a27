//! Application modules
//!
//! Each app owns one slice of the product: profile editing/viewing, browsing,
//! and the dashboard shell that ties them together.

pub mod browse;
pub mod dashboard;
pub mod profiles;

use crate::store::StoreError;

/// Error surface shared by the view components
///
/// Store failures are propagated, not swallowed: a component that returns
/// `Ok` with an empty/absent result really did get an answer from the store.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ViewError {
	#[error("no signed-in user")]
	NotSignedIn,
	#[error(transparent)]
	Store(#[from] StoreError),
}
