//! Error types for record-store writes.

use thiserror::Error;

/// Errors surfaced by record-store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
	/// No valid session. Propagated to the caller, which is expected to
	/// redirect to authentication; never retried automatically.
	#[error("unauthorized")]
	Unauthorized,
	/// The record store rejected the payload.
	#[error("validation failed: {0}")]
	Validation(String),
	/// No profile record exists for the user.
	#[error("store not found")]
	NotFound,
	/// Network or backing-store failure.
	#[error("backend error: {message}")]
	Backend {
		message: String,
		/// Whether a later retry may succeed.
		transient: bool,
	},
}

impl PersistenceError {
	/// Convenience constructor for a retryable backend failure.
	pub fn transient(message: impl Into<String>) -> Self {
		Self::Backend {
			message: message.into(),
			transient: true,
		}
	}

	/// HTTP-style status code for the failure class.
	pub fn status(&self) -> u16 {
		match self {
			Self::Unauthorized => 401,
			Self::Validation(_) => 400,
			Self::NotFound => 404,
			Self::Backend { .. } => 500,
		}
	}

	pub fn is_transient(&self) -> bool {
		matches!(self, Self::Backend { transient: true, .. })
	}
}

/// Result alias for gateway operations.
pub type Result<T, E = PersistenceError> = std::result::Result<T, E>;
