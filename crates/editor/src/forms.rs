//! Form-level validation for link editors.
//!
//! Drafts carry raw user input. Validation trims, canonicalizes the URL,
//! and rejects with the field's inline message before any state changes.

use linkdeck_primitives::validate::{validate_link_url, validate_title};
use linkdeck_primitives::{SocialLink, ValidationError};

/// User input for creating or editing a custom link.
#[derive(Debug, Clone, Default)]
pub struct CustomLinkDraft {
	pub title: String,
	pub url: String,
}

impl CustomLinkDraft {
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
		}
	}

	/// Validates the draft, returning the trimmed title and canonical URL.
	///
	/// Title first, then URL, matching the order the form reports errors.
	pub fn validated(&self) -> Result<(String, String), ValidationError> {
		let title = self.title.trim();
		validate_title(title)?;
		let url = validate_link_url(&self.url)?;
		Ok((title.to_string(), url))
	}
}

/// User input for connecting a social network.
#[derive(Debug, Clone, Default)]
pub struct SocialLinkForm {
	pub network: String,
	pub url: String,
}

impl SocialLinkForm {
	pub fn new(network: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			network: network.into(),
			url: url.into(),
		}
	}

	/// Validates the form into a storable link.
	///
	/// Network identifiers are case-insensitive and stored lowercase.
	pub fn validated(&self) -> Result<SocialLink, ValidationError> {
		let network = self.network.trim().to_ascii_lowercase();
		if network.is_empty() {
			return Err(ValidationError::NetworkRequired);
		}
		let url = validate_link_url(&self.url)?;
		Ok(SocialLink { network, url })
	}
}
