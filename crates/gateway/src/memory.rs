//! In-memory collaborators.
//!
//! [`MemoryRecordStore`] backs tests and standalone embeddings. Scripted
//! failures mimic the backing store going away mid-session; the write log
//! lets tests assert exactly which payloads were transmitted.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use linkdeck_primitives::{Profile, ProfileUpdate, UserId};

use crate::error::{PersistenceError, Result};
use crate::record::RecordStore;
use crate::upload::{FileHost, ImageUpload, UploadError};

#[derive(Default)]
struct Inner {
	profiles: HashMap<UserId, Profile>,
	fail_next: VecDeque<PersistenceError>,
	writes: Vec<ProfileUpdate>,
}

/// Record store held entirely in memory.
#[derive(Default)]
pub struct MemoryRecordStore {
	inner: Mutex<Inner>,
}

impl MemoryRecordStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store seeded with one profile.
	pub fn with_profile(user: UserId, profile: Profile) -> Self {
		let store = Self::new();
		store.insert(user, profile);
		store
	}

	pub fn insert(&self, user: UserId, profile: Profile) {
		self.inner.lock().unwrap().profiles.insert(user, profile);
	}

	/// Scripts the next `update` call to fail with `error`.
	pub fn fail_next(&self, error: PersistenceError) {
		self.inner.lock().unwrap().fail_next.push_back(error);
	}

	/// Payloads of every successful write, oldest first.
	pub fn writes(&self) -> Vec<ProfileUpdate> {
		self.inner.lock().unwrap().writes.clone()
	}
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
	async fn fetch(&self, user: &UserId) -> Result<Profile> {
		self.inner
			.lock()
			.unwrap()
			.profiles
			.get(user)
			.cloned()
			.ok_or(PersistenceError::NotFound)
	}

	async fn update(&self, user: &UserId, update: ProfileUpdate) -> Result<Profile> {
		let mut inner = self.inner.lock().unwrap();
		if let Some(error) = inner.fail_next.pop_front() {
			return Err(error);
		}
		let profile = inner
			.profiles
			.get_mut(user)
			.ok_or(PersistenceError::NotFound)?;
		update.apply_to(profile);
		let updated = profile.clone();
		inner.writes.push(update);
		Ok(updated)
	}
}

/// File host that fabricates stable public URLs without storing anything.
pub struct MemoryFileHost {
	base: String,
}

impl MemoryFileHost {
	pub fn new() -> Self {
		Self {
			base: "https://files.linkdeck.test".into(),
		}
	}
}

impl Default for MemoryFileHost {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl FileHost for MemoryFileHost {
	async fn store(&self, image: ImageUpload) -> Result<String, UploadError> {
		Ok(format!("{}/{}", self.base, image.file_name))
	}
}
