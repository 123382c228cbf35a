use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::LinkCollection;
use crate::link::{CustomLink, SocialLink};

/// Owner of a profile record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

/// A creator's public store profile — the backing record this engine edits.
///
/// Field names serialize in camelCase to match the record contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	pub handle: String,
	#[serde(default)]
	pub display_name: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub bio: String,
	#[serde(default)]
	pub avatar_url: String,
	#[serde(default)]
	pub banner_url: String,
	#[serde(default)]
	pub theme: Theme,
	#[serde(default)]
	pub categories: Vec<String>,
	#[serde(default)]
	pub social: LinkCollection<SocialLink>,
	#[serde(default)]
	pub custom_links: LinkCollection<CustomLink>,
}

impl Profile {
	/// Creates the empty profile a new account starts from.
	pub fn new(handle: impl Into<String>) -> Self {
		Self {
			handle: handle.into(),
			display_name: String::new(),
			location: String::new(),
			bio: String::new(),
			avatar_url: String::new(),
			banner_url: String::new(),
			theme: Theme::default(),
			categories: Vec::new(),
			social: LinkCollection::new(),
			custom_links: LinkCollection::new(),
		}
	}
}

/// Partial update payload for the record store.
///
/// `None` fields are omitted from the serialized payload and left untouched
/// by the write; `Some` fields overwrite the stored field whole (collections
/// are replaced, never diffed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub banner_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub theme: Option<Theme>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub categories: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub social: Option<LinkCollection<SocialLink>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_links: Option<LinkCollection<CustomLink>>,
}

impl ProfileUpdate {
	/// Update carrying only the social collection.
	pub fn with_social(social: LinkCollection<SocialLink>) -> Self {
		Self {
			social: Some(social),
			..Self::default()
		}
	}

	/// Update carrying only the custom-link collection.
	pub fn with_custom_links(custom_links: LinkCollection<CustomLink>) -> Self {
		Self {
			custom_links: Some(custom_links),
			..Self::default()
		}
	}

	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Folds `newer` into `self`; newer `Some` fields win field-by-field.
	pub fn merge(&mut self, newer: ProfileUpdate) {
		merge_field(&mut self.display_name, newer.display_name);
		merge_field(&mut self.location, newer.location);
		merge_field(&mut self.bio, newer.bio);
		merge_field(&mut self.avatar_url, newer.avatar_url);
		merge_field(&mut self.banner_url, newer.banner_url);
		merge_field(&mut self.theme, newer.theme);
		merge_field(&mut self.categories, newer.categories);
		merge_field(&mut self.social, newer.social);
		merge_field(&mut self.custom_links, newer.custom_links);
	}

	/// Applies the update to a stored record with replace-field semantics.
	pub fn apply_to(&self, profile: &mut Profile) {
		apply_field(&mut profile.display_name, &self.display_name);
		apply_field(&mut profile.location, &self.location);
		apply_field(&mut profile.bio, &self.bio);
		apply_field(&mut profile.avatar_url, &self.avatar_url);
		apply_field(&mut profile.banner_url, &self.banner_url);
		apply_field(&mut profile.theme, &self.theme);
		apply_field(&mut profile.categories, &self.categories);
		apply_field(&mut profile.social, &self.social);
		apply_field(&mut profile.custom_links, &self.custom_links);
	}
}

fn merge_field<T>(current: &mut Option<T>, newer: Option<T>) {
	if newer.is_some() {
		*current = newer;
	}
}

fn apply_field<T: Clone>(target: &mut T, source: &Option<T>) {
	if let Some(value) = source {
		*target = value.clone();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::link::SocialLink;

	#[test]
	fn update_serializes_only_present_fields_in_camel_case() {
		let update = ProfileUpdate {
			display_name: Some("Ada".into()),
			custom_links: Some(LinkCollection::new()),
			..ProfileUpdate::default()
		};
		let json = serde_json::to_value(&update).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "displayName": "Ada", "customLinks": [] })
		);
	}

	#[test]
	fn merge_prefers_newer_fields_and_keeps_older_ones() {
		let mut pending = ProfileUpdate {
			bio: Some("first".into()),
			social: Some(vec![SocialLink::new("instagram", "https://instagram.com/a")].into()),
			..ProfileUpdate::default()
		};
		pending.merge(ProfileUpdate {
			bio: Some("second".into()),
			..ProfileUpdate::default()
		});
		assert_eq!(pending.bio.as_deref(), Some("second"));
		assert_eq!(pending.social.as_ref().map(LinkCollection::len), Some(1));
	}

	#[test]
	fn apply_replaces_whole_fields() {
		let mut profile = Profile::new("ada");
		profile.social = vec![
			SocialLink::new("instagram", "https://instagram.com/a"),
			SocialLink::new("youtube", "https://youtube.com/@a"),
		]
		.into();
		let update = ProfileUpdate::with_social(
			vec![SocialLink::new("tiktok", "https://tiktok.com/@a")].into(),
		);
		update.apply_to(&mut profile);
		assert_eq!(profile.social.len(), 1);
		assert_eq!(profile.social.get(0).unwrap().network, "tiktok");
	}

	#[test]
	fn profile_round_trips_through_json() {
		let mut profile = Profile::new("ada");
		profile.theme = Theme::Dark;
		profile.custom_links = profile
			.custom_links
			.add(crate::link::CustomLink::new("Shop", "https://shop.example.com"));
		let json = serde_json::to_string(&profile).unwrap();
		let back: Profile = serde_json::from_str(&json).unwrap();
		assert_eq!(back, profile);
	}
}
