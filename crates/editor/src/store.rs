//! Canonical in-memory link state.

use linkdeck_primitives::{CustomLink, LinkCollection, SocialLink};
use tokio::sync::watch;

/// The two parallel ordered lists a profile owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileLinks {
	pub social: LinkCollection<SocialLink>,
	pub custom: LinkCollection<CustomLink>,
}

/// Single source of truth for the links shown while editing.
///
/// Mutations replace a whole collection value; the previous value stays
/// valid for rollback. The presentation layer subscribes to value changes
/// instead of sharing mutable state.
pub struct LinkStore {
	tx: watch::Sender<ProfileLinks>,
}

impl LinkStore {
	pub fn new(initial: ProfileLinks) -> Self {
		let (tx, _) = watch::channel(initial);
		Self { tx }
	}

	/// Current state, cloned out of the channel.
	pub fn snapshot(&self) -> ProfileLinks {
		self.tx.borrow().clone()
	}

	pub fn social(&self) -> LinkCollection<SocialLink> {
		self.tx.borrow().social.clone()
	}

	pub fn custom(&self) -> LinkCollection<CustomLink> {
		self.tx.borrow().custom.clone()
	}

	/// Receiver the presentation layer watches for re-renders.
	pub fn subscribe(&self) -> watch::Receiver<ProfileLinks> {
		self.tx.subscribe()
	}

	pub fn set_social(&self, social: LinkCollection<SocialLink>) {
		self.tx.send_modify(|links| links.social = social);
	}

	pub fn set_custom(&self, custom: LinkCollection<CustomLink>) {
		self.tx.send_modify(|links| links.custom = custom);
	}
}
