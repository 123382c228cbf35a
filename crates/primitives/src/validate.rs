//! Field-level validation for profile edits.
//!
//! Limits mirror the public record contract. Failures are reported inline at
//! the input that caused them; a rejected mutation never touches any state.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::collection::CollectionError;
use crate::href;
use crate::profile::ProfileUpdate;

pub const MAX_DISPLAY_NAME: usize = 50;
pub const MAX_LOCATION: usize = 60;
pub const MAX_BIO: usize = 280;
pub const MAX_CATEGORIES: usize = 5;
pub const MAX_TITLE: usize = 100;
pub const HANDLE_LEN: RangeInclusive<usize> = 3..=30;

/// Handles that collide with routing or product surfaces.
pub const RESERVED_HANDLES: &[&str] = &[
	"admin",
	"api",
	"login",
	"signup",
	"dashboard",
	"linkdeck",
	"www",
	"auth",
	"signin",
	"signout",
];

/// A rejected field value, carrying the inline message for the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Title is required")]
	TitleRequired,
	#[error("Title must be at most {MAX_TITLE} characters")]
	TitleTooLong,
	#[error("URL is required")]
	UrlRequired,
	#[error("Please enter a valid URL")]
	InvalidUrl,
	#[error("Network is required")]
	NetworkRequired,
	#[error("Display name must be at most {MAX_DISPLAY_NAME} characters")]
	DisplayNameTooLong,
	#[error("Location must be at most {MAX_LOCATION} characters")]
	LocationTooLong,
	#[error("Bio must be at most {MAX_BIO} characters")]
	BioTooLong,
	#[error("Maximum {MAX_CATEGORIES} categories allowed")]
	TooManyCategories,
	#[error("Handle must be at least 3 characters")]
	HandleTooShort,
	#[error("Handle must be at most 30 characters")]
	HandleTooLong,
	#[error("Handle can only contain lowercase letters, numbers, and hyphens (not at start/end)")]
	HandleInvalid,
	#[error("`{0}` is reserved")]
	HandleReserved(String),
	#[error(transparent)]
	Collection(#[from] CollectionError),
}

/// Checks handle length, character set, and the reserved list.
pub fn validate_handle(handle: &str) -> Result<(), ValidationError> {
	let len = handle.chars().count();
	if len < *HANDLE_LEN.start() {
		return Err(ValidationError::HandleTooShort);
	}
	if len > *HANDLE_LEN.end() {
		return Err(ValidationError::HandleTooLong);
	}
	let valid_interior = handle
		.chars()
		.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
	let valid_edges = !handle.starts_with('-') && !handle.ends_with('-');
	if !valid_interior || !valid_edges {
		return Err(ValidationError::HandleInvalid);
	}
	if RESERVED_HANDLES.contains(&handle) {
		return Err(ValidationError::HandleReserved(handle.to_string()));
	}
	Ok(())
}

/// Checks a custom-link title. Expects already-trimmed input.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
	if title.is_empty() {
		return Err(ValidationError::TitleRequired);
	}
	if title.chars().count() > MAX_TITLE {
		return Err(ValidationError::TitleTooLong);
	}
	Ok(())
}

/// Canonicalizes a link URL and checks it parses, returning the normalized
/// form to store.
pub fn validate_link_url(raw: &str) -> Result<String, ValidationError> {
	if raw.trim().is_empty() {
		return Err(ValidationError::UrlRequired);
	}
	let normalized = href::normalize(raw);
	if !href::validate(&normalized) {
		return Err(ValidationError::InvalidUrl);
	}
	Ok(normalized)
}

/// Checks every present field of a partial update against its limit.
pub fn validate_update(update: &ProfileUpdate) -> Result<(), ValidationError> {
	if let Some(display_name) = &update.display_name
		&& display_name.chars().count() > MAX_DISPLAY_NAME
	{
		return Err(ValidationError::DisplayNameTooLong);
	}
	if let Some(location) = &update.location
		&& location.chars().count() > MAX_LOCATION
	{
		return Err(ValidationError::LocationTooLong);
	}
	if let Some(bio) = &update.bio
		&& bio.chars().count() > MAX_BIO
	{
		return Err(ValidationError::BioTooLong);
	}
	if let Some(categories) = &update.categories
		&& categories.len() > MAX_CATEGORIES
	{
		return Err(ValidationError::TooManyCategories);
	}
	// Image URLs may be cleared with an empty string; anything else must be
	// a well-formed absolute URL.
	for image_url in [&update.avatar_url, &update.banner_url].into_iter().flatten() {
		if !image_url.is_empty() && !href::validate(image_url) {
			return Err(ValidationError::InvalidUrl);
		}
	}
	if let Some(social) = &update.social {
		for link in social {
			if link.network.trim().is_empty() {
				return Err(ValidationError::NetworkRequired);
			}
			if !href::validate(&link.url) {
				return Err(ValidationError::InvalidUrl);
			}
		}
	}
	if let Some(custom_links) = &update.custom_links {
		for link in custom_links {
			validate_title(link.title.trim())?;
			if !href::validate(&link.url) {
				return Err(ValidationError::InvalidUrl);
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests;
