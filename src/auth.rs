//! Identity boundary
//!
//! Authentication is owned by an external identity service. This module
//! defines the contract the view components consume, plus the [`CurrentUser`]
//! wrapper that is handed to each component explicitly instead of being read
//! from ambient context.

use async_trait::async_trait;
use uuid::Uuid;

/// Errors surfaced by the identity boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
	#[error("user is not authenticated")]
	NotAuthenticated,
	#[error("identity backend error: {0}")]
	Backend(String),
}

/// The identity issued by the external authentication service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
	pub id: Uuid,
	pub email: String,
}

/// Contract of the external identity service
///
/// `current_user` reflects the session state at the time of the call; the
/// components treat the returned identity as immutable for the rest of their
/// render cycle.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
	/// The signed-in identity, if any
	fn current_user(&self) -> Option<AuthUser>;

	/// End the current session
	async fn logout(&self) -> Result<(), AuthError>;
}

/// Wrapper around the possibly-absent signed-in identity
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use vivah::auth::{AuthUser, CurrentUser};
///
/// let user = AuthUser { id: Uuid::new_v4(), email: "asha@example.com".into() };
/// let current = CurrentUser::authenticated(user);
/// assert!(current.is_authenticated());
/// assert_eq!(current.email().unwrap(), "asha@example.com");
///
/// let anonymous = CurrentUser::anonymous();
/// assert!(anonymous.id().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
	user: Option<AuthUser>,
}

impl CurrentUser {
	/// Wrap an authenticated identity
	pub fn authenticated(user: AuthUser) -> Self {
		Self { user: Some(user) }
	}

	/// An unauthenticated (anonymous) identity
	pub fn anonymous() -> Self {
		Self { user: None }
	}

	/// Snapshot the provider's current session state
	pub fn from_provider(provider: &dyn IdentityProvider) -> Self {
		Self {
			user: provider.current_user(),
		}
	}

	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	/// The signed-in identity
	///
	/// # Errors
	///
	/// Returns [`AuthError::NotAuthenticated`] when anonymous.
	pub fn user(&self) -> Result<&AuthUser, AuthError> {
		self.user.as_ref().ok_or(AuthError::NotAuthenticated)
	}

	/// The signed-in user id
	///
	/// # Errors
	///
	/// Returns [`AuthError::NotAuthenticated`] when anonymous.
	pub fn id(&self) -> Result<Uuid, AuthError> {
		self.user().map(|u| u.id)
	}

	/// The signed-in email
	///
	/// # Errors
	///
	/// Returns [`AuthError::NotAuthenticated`] when anonymous.
	pub fn email(&self) -> Result<&str, AuthError> {
		self.user().map(|u| u.email.as_str())
	}
}
