use super::*;
use crate::link::{CustomLink, SocialLink};

#[test]
fn handles_accept_lowercase_alnum_and_interior_hyphens() {
	assert_eq!(validate_handle("ada-lovelace"), Ok(()));
	assert_eq!(validate_handle("a1b"), Ok(()));
}

#[test]
fn handles_reject_bad_lengths() {
	assert_eq!(validate_handle("ab"), Err(ValidationError::HandleTooShort));
	let long = "a".repeat(31);
	assert_eq!(validate_handle(&long), Err(ValidationError::HandleTooLong));
}

#[test]
fn handles_reject_bad_characters_and_edge_hyphens() {
	for handle in ["Ada", "ada_l", "ada.l", "-ada", "ada-"] {
		assert_eq!(
			validate_handle(handle),
			Err(ValidationError::HandleInvalid),
			"{handle}"
		);
	}
}

#[test]
fn handles_reject_reserved_names() {
	assert_eq!(
		validate_handle("dashboard"),
		Err(ValidationError::HandleReserved("dashboard".into()))
	);
}

#[test]
fn titles_are_required_and_capped() {
	assert_eq!(validate_title(""), Err(ValidationError::TitleRequired));
	assert_eq!(validate_title("My shop"), Ok(()));
	let long = "x".repeat(101);
	assert_eq!(validate_title(&long), Err(ValidationError::TitleTooLong));
}

#[test]
fn link_urls_are_normalized_then_checked() {
	assert_eq!(
		validate_link_url("example.com/page").as_deref(),
		Ok("https://example.com/page")
	);
	assert_eq!(validate_link_url("   "), Err(ValidationError::UrlRequired));
	assert_eq!(
		validate_link_url("https://"),
		Err(ValidationError::InvalidUrl)
	);
}

#[test]
fn update_field_limits_are_enforced() {
	let too_long_bio = ProfileUpdate {
		bio: Some("b".repeat(281)),
		..ProfileUpdate::default()
	};
	assert_eq!(
		validate_update(&too_long_bio),
		Err(ValidationError::BioTooLong)
	);

	let too_many_categories = ProfileUpdate {
		categories: Some(vec!["music".into(); 6]),
		..ProfileUpdate::default()
	};
	assert_eq!(
		validate_update(&too_many_categories),
		Err(ValidationError::TooManyCategories)
	);
}

#[test]
fn update_image_urls_may_be_cleared_but_not_malformed() {
	let cleared = ProfileUpdate {
		avatar_url: Some(String::new()),
		..ProfileUpdate::default()
	};
	assert_eq!(validate_update(&cleared), Ok(()));

	let malformed = ProfileUpdate {
		banner_url: Some("not a url".into()),
		..ProfileUpdate::default()
	};
	assert_eq!(validate_update(&malformed), Err(ValidationError::InvalidUrl));
}

#[test]
fn update_checks_embedded_collections() {
	let nameless_network = ProfileUpdate::with_social(
		vec![SocialLink::new("  ", "https://example.com")].into(),
	);
	assert_eq!(
		validate_update(&nameless_network),
		Err(ValidationError::NetworkRequired)
	);

	let untitled_link = ProfileUpdate::with_custom_links(
		crate::collection::LinkCollection::<CustomLink>::new().add(CustomLink::new("", "https://example.com")),
	);
	assert_eq!(
		validate_update(&untitled_link),
		Err(ValidationError::TitleRequired)
	);
}
