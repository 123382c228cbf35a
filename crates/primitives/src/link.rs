use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Keyed;

/// Identifier for a custom link, generated client-side at creation time.
///
/// Ids are immutable for the life of the link and never reused within a
/// collection, so they stay valid addressing keys even when titles collide
/// or links are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(Uuid);

impl LinkId {
	/// Generates a fresh id.
	pub fn fresh() -> Self {
		Self(Uuid::new_v4())
	}
}

impl fmt::Display for LinkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// A connected social-network link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
	/// Network identifier, e.g. `instagram`. A network can only be
	/// connected once per profile.
	pub network: String,
	pub url: String,
}

impl SocialLink {
	pub fn new(network: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			network: network.into(),
			url: url.into(),
		}
	}
}

/// A user-defined link with a free-form title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
	pub id: LinkId,
	pub title: String,
	pub url: String,
	pub visible: bool,
}

impl CustomLink {
	/// Creates a visible link with a fresh id.
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			id: LinkId::fresh(),
			title: title.into(),
			url: url.into(),
			visible: true,
		}
	}
}

impl Keyed for SocialLink {
	type Key = str;

	fn key(&self) -> &str {
		&self.network
	}
}

impl Keyed for CustomLink {
	type Key = LinkId;

	fn key(&self) -> &LinkId {
		&self.id
	}
}
