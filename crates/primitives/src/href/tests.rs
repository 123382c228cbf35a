use proptest::prelude::*;

use super::{normalize, validate};

#[test]
fn bare_host_gets_https_prefix() {
	assert_eq!(normalize("example.com/page"), "https://example.com/page");
}

#[test]
fn protocol_relative_gets_https_scheme() {
	assert_eq!(normalize("//cdn.example.com/a"), "https://cdn.example.com/a");
}

#[test]
fn existing_http_schemes_pass_through() {
	assert_eq!(normalize("http://example.com"), "http://example.com");
	assert_eq!(normalize("https://example.com"), "https://example.com");
	assert_eq!(normalize("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
}

#[test]
fn whitelisted_schemes_pass_through() {
	assert_eq!(normalize("mailto:a@example.com"), "mailto:a@example.com");
	assert_eq!(normalize("tel:+15551234567"), "tel:+15551234567");
	assert_eq!(normalize("ftp://files.example.com"), "ftp://files.example.com");
	assert_eq!(normalize("ftps://files.example.com"), "ftps://files.example.com");
	assert_eq!(normalize("file:///tmp/a.txt"), "file:///tmp/a.txt");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
	assert_eq!(normalize("  example.com  "), "https://example.com");
	assert_eq!(normalize("\thttps://example.com\n"), "https://example.com");
}

#[test]
fn validate_rejects_empty_and_unparseable() {
	assert!(!validate(""));
	assert!(!validate("https://"));
	assert!(!validate("not a url at all"));
}

#[test]
fn validate_accepts_normalized_input() {
	assert!(validate(&normalize("example.com/page")));
	assert!(validate(&normalize("//cdn.example.com/a")));
	assert!(validate("mailto:a@example.com"));
}

proptest! {
	#[test]
	fn normalize_is_idempotent(raw in "[ ]{0,2}[a-z0-9.:/@-]{0,40}[ ]{0,2}") {
		let once = normalize(&raw);
		prop_assert_eq!(normalize(&once), once);
	}

	#[test]
	fn normalized_hosts_validate(host in "[a-z][a-z0-9]{0,10}\\.(com|io|dev)", path in "(/[a-z0-9]{1,8}){0,3}") {
		let normalized = normalize(&format!("{host}{path}"));
		prop_assert!(validate(&normalized));
	}
}
