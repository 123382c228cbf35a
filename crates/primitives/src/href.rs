//! URL canonicalization for user-entered link targets.
//!
//! Link forms accept loose input (`example.com/page`, `//cdn.example.com/a`)
//! and canonicalize it before validation and storage. Both functions are
//! total and idempotent: invalid input is passed through for [`validate`] to
//! reject rather than raising an error mid-keystroke.

use url::Url;

/// Non-HTTP schemes accepted verbatim without rewriting.
const PASSTHROUGH_SCHEMES: &[&str] = &[
	"mailto:",
	"tel:",
	"ftp:",
	"ftps:",
	"file:",
	"chrome-extension:",
];

/// Canonicalizes a user-entered URL string.
///
/// Trims surrounding whitespace, then:
/// - leaves values that already carry `http://`/`https://` or a whitelisted
///   scheme unchanged,
/// - completes protocol-relative `//host/...` values with `https:`,
/// - prefixes everything else with `https://`.
pub fn normalize(raw: &str) -> String {
	let trimmed = raw.trim();
	if has_http_scheme(trimmed) || has_passthrough_scheme(trimmed) {
		return trimmed.to_string();
	}
	if trimmed.starts_with("//") {
		return format!("https:{trimmed}");
	}
	format!("https://{trimmed}")
}

/// True when the string parses as a well-formed absolute URL.
///
/// Empty input is invalid. Validation expects already-normalized input;
/// bare hostnames without a scheme do not parse as absolute URLs.
pub fn validate(raw: &str) -> bool {
	!raw.is_empty() && Url::parse(raw).is_ok()
}

fn has_http_scheme(value: &str) -> bool {
	starts_with_ignore_case(value, "http://") || starts_with_ignore_case(value, "https://")
}

fn has_passthrough_scheme(value: &str) -> bool {
	PASSTHROUGH_SCHEMES
		.iter()
		.any(|scheme| starts_with_ignore_case(value, scheme))
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
	value
		.get(..prefix.len())
		.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests;
