//! In-memory profile store
//!
//! Backs the test suite and local development. A real deployment points the
//! components at a client for the external document store instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ProfileStore, StoreResult};
use crate::apps::profiles::models::Profile;

/// In-memory [`ProfileStore`] backend
///
/// Cloning is cheap and clones share the same underlying map.
///
/// # Examples
///
/// ```
/// use vivah::store::{InMemoryProfileStore, ProfileStore};
///
/// # tokio_test::block_on(async {
/// let store = InMemoryProfileStore::new();
/// let missing = store.get(uuid::Uuid::new_v4()).await.unwrap();
/// assert!(missing.is_none());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
	documents: Arc<Mutex<HashMap<Uuid, Profile>>>,
}

impl InMemoryProfileStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored documents
	pub async fn len(&self) -> usize {
		self.documents.lock().await.len()
	}

	/// Whether the store holds no documents
	pub async fn is_empty(&self) -> bool {
		self.documents.lock().await.is_empty()
	}
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
	async fn get(&self, user_id: Uuid) -> StoreResult<Option<Profile>> {
		let documents = self.documents.lock().await;
		Ok(documents.get(&user_id).cloned())
	}

	async fn put(&self, user_id: Uuid, profile: &Profile) -> StoreResult<()> {
		let mut documents = self.documents.lock().await;
		documents.insert(user_id, profile.clone());
		Ok(())
	}

	async fn list(&self, exclude: Uuid) -> StoreResult<Vec<Profile>> {
		let documents = self.documents.lock().await;
		Ok(documents
			.iter()
			.filter(|(id, _)| **id != exclude)
			.map(|(_, profile)| profile.clone())
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::apps::profiles::models::Gender;
	use crate::test_utils::ProfileBuilder;
	use chrono::NaiveDate;

	fn profile_for(name: &str) -> Profile {
		ProfileBuilder::new(
			name,
			NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
			Gender::Female,
		)
		.build()
	}

	#[tokio::test]
	async fn put_then_get_returns_the_document() {
		let store = InMemoryProfileStore::new();
		let profile = profile_for("Asha");

		store.put(profile.user_id, &profile).await.unwrap();
		let loaded = store.get(profile.user_id).await.unwrap().unwrap();
		assert_eq!(loaded, profile);
	}

	#[tokio::test]
	async fn put_replaces_the_whole_document() {
		let store = InMemoryProfileStore::new();
		let mut profile = profile_for("Asha");
		profile.city = Some("Pune".to_string());
		store.put(profile.user_id, &profile).await.unwrap();

		// A later submit without the optional field drops it entirely.
		profile.city = None;
		store.put(profile.user_id, &profile).await.unwrap();

		let loaded = store.get(profile.user_id).await.unwrap().unwrap();
		assert_eq!(loaded.city, None);
		assert_eq!(store.len().await, 1);
	}

	#[tokio::test]
	async fn list_excludes_the_given_owner() {
		let store = InMemoryProfileStore::new();
		let mine = profile_for("Asha");
		let other = profile_for("Meera");
		store.put(mine.user_id, &mine).await.unwrap();
		store.put(other.user_id, &other).await.unwrap();

		let listed = store.list(mine.user_id).await.unwrap();
		assert_eq!(listed.len(), 1);
		assert_eq!(listed[0].user_id, other.user_id);
	}

	#[tokio::test]
	async fn clones_share_the_same_documents() {
		let store = InMemoryProfileStore::new();
		let clone = store.clone();
		let profile = profile_for("Asha");

		store.put(profile.user_id, &profile).await.unwrap();
		assert!(clone.get(profile.user_id).await.unwrap().is_some());
	}
}
