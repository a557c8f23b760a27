//! Profile store boundary
//!
//! Persistence is owned by an external document store. The components consume
//! it through [`ProfileStore`]: a point read and a full-replace write keyed by
//! the owner's user id, plus the one query the browse pipeline needs. The
//! in-memory backend in [`memory`] backs tests and local development.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::apps::profiles::models::Profile;

pub use memory::InMemoryProfileStore;

/// Errors surfaced by the profile store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("connection error: {0}")]
	Connection(String),
	#[error("execution error: {0}")]
	Execution(String),
	#[error("serialization error: {0}")]
	Serialization(String),
	#[error("backend error: {0}")]
	Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Contract of the external profile document store
///
/// One document per user; the document key IS the owner's user id, which is
/// what enforces the one-profile-per-user invariant on write.
#[async_trait]
pub trait ProfileStore: Send + Sync {
	/// Fetch the profile document keyed by `user_id`
	///
	/// Absence is not an error: `Ok(None)` means no profile exists yet,
	/// `Err(_)` means the store could not answer.
	async fn get(&self, user_id: Uuid) -> StoreResult<Option<Profile>>;

	/// Write `profile` as the full replacement of the document keyed by
	/// `user_id`
	///
	/// There is no merge at the store level; whatever was stored before is
	/// gone after a successful put.
	async fn put(&self, user_id: Uuid, profile: &Profile) -> StoreResult<()>;

	/// List every profile document except the one owned by `exclude`
	async fn list(&self, exclude: Uuid) -> StoreResult<Vec<Profile>>;
}
