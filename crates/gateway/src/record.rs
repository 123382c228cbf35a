use async_trait::async_trait;
use linkdeck_primitives::{Profile, ProfileUpdate, UserId};

use crate::error::Result;

/// Backing record store for creator profiles.
///
/// `update` has replace-field semantics: every field present in the payload
/// overwrites the stored field whole (link collections are never diffed),
/// and the full updated record is returned. The operation is idempotent, so
/// a retried write of the same payload converges on the same record.
#[async_trait]
pub trait RecordStore: Send + Sync {
	/// Fetches the profile owned by `user`.
	async fn fetch(&self, user: &UserId) -> Result<Profile>;

	/// Applies a partial update and returns the updated record.
	async fn update(&self, user: &UserId, update: ProfileUpdate) -> Result<Profile>;
}
