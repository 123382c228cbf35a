use linkdeck_primitives::UserId;

use crate::error::{PersistenceError, Result};

/// Session collaborator: resolves the authenticated user.
///
/// Every gateway write asks the session first; without a valid session the
/// write fails [`PersistenceError::Unauthorized`] before anything reaches
/// the record store.
pub trait Session: Send + Sync {
	fn current_user(&self) -> Result<UserId>;
}

/// Session fixed to a single user, for tests and single-user embeddings.
pub struct StaticSession(UserId);

impl StaticSession {
	pub fn new(user: UserId) -> Self {
		Self(user)
	}
}

impl Session for StaticSession {
	fn current_user(&self) -> Result<UserId> {
		Ok(self.0.clone())
	}
}

/// Session with nobody signed in; every write fails `Unauthorized`.
pub struct SignedOut;

impl Session for SignedOut {
	fn current_user(&self) -> Result<UserId> {
		Err(PersistenceError::Unauthorized)
	}
}
