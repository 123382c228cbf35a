//! Known social networks.
//!
//! The catalog feeds display labels and pickers. Unknown network ids remain
//! storable; the record contract accepts any network string.

/// A social network the product knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
	pub id: &'static str,
	pub label: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
	Platform { id: "instagram", label: "Instagram" },
	Platform { id: "youtube", label: "YouTube" },
	Platform { id: "tiktok", label: "TikTok" },
	Platform { id: "snapchat", label: "Snapchat" },
	Platform { id: "x", label: "X" },
	Platform { id: "facebook", label: "Facebook" },
	Platform { id: "twitch", label: "Twitch" },
	Platform { id: "linkedin", label: "LinkedIn" },
	Platform { id: "pinterest", label: "Pinterest" },
	Platform { id: "spotify", label: "Spotify" },
];

/// Looks up a network by its identifier.
pub fn lookup(network: &str) -> Option<&'static Platform> {
	PLATFORMS.iter().find(|platform| platform.id == network)
}

/// Display label for a network, falling back to the raw identifier.
pub fn display_label(network: &str) -> &str {
	lookup(network).map_or(network, |platform| platform.label)
}
