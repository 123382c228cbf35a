//! Ordered link collections.
//!
//! A [`LinkCollection`] is an ordered sequence owned by a single profile;
//! index position is display rank. Every mutation returns a new collection
//! value rather than editing in place, so the previous value stays intact
//! for optimistic rollback and subscribers never observe aliased state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::link::{CustomLink, SocialLink};

/// Types addressable by a stable key within a collection.
pub trait Keyed {
	/// Addressing key: the network for social links, the id for custom links.
	type Key: PartialEq + fmt::Display + ?Sized;

	fn key(&self) -> &Self::Key;
}

/// Errors from collection mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
	/// A link for the network is already connected.
	#[error("`{0}` is already connected")]
	DuplicateNetwork(String),
	/// No element matches the requested key.
	#[error("no matching link")]
	NotFound,
	/// A reorder index fell outside `[0, len)`.
	#[error("index {index} out of range for {len} links")]
	IndexOutOfRange { index: usize, len: usize },
}

/// An ordered, profile-owned sequence of links.
///
/// The collection is persisted whole on every write, never diffed, so a
/// value in hand is always a complete self-consistent ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCollection<T> {
	items: Vec<T>,
}

impl<T> Default for LinkCollection<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}

impl<T> LinkCollection<T> {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}
}

impl<T> From<Vec<T>> for LinkCollection<T> {
	fn from(items: Vec<T>) -> Self {
		Self { items }
	}
}

impl<'a, T> IntoIterator for &'a LinkCollection<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: Keyed> LinkCollection<T> {
	/// Index of the element addressed by `key`.
	pub fn position(&self, key: &T::Key) -> Option<usize> {
		self.items.iter().position(|item| item.key() == key)
	}

	/// The element addressed by `key`.
	pub fn find(&self, key: &T::Key) -> Option<&T> {
		self.items.iter().find(|item| item.key() == key)
	}

	pub fn contains_key(&self, key: &T::Key) -> bool {
		self.position(key).is_some()
	}
}

impl<T: Keyed + Clone> LinkCollection<T> {
	/// Replaces the element addressed by `key` with `replacement`, keeping
	/// its index.
	///
	/// A replacement whose key already addresses a *different* element is
	/// rejected, so an update can never smuggle in a duplicate network.
	pub fn update(&self, key: &T::Key, replacement: T) -> Result<Self, CollectionError> {
		let index = self.position(key).ok_or(CollectionError::NotFound)?;
		if replacement.key() != key && self.contains_key(replacement.key()) {
			return Err(CollectionError::DuplicateNetwork(
				replacement.key().to_string(),
			));
		}
		let mut items = self.items.clone();
		items[index] = replacement;
		Ok(Self { items })
	}

	/// Removes the element addressed by `key`, shifting later elements down.
	pub fn remove(&self, key: &T::Key) -> Result<Self, CollectionError> {
		let index = self.position(key).ok_or(CollectionError::NotFound)?;
		let mut items = self.items.clone();
		items.remove(index);
		Ok(Self { items })
	}

	/// Moves the element at `from` to `to`, shifting the elements between
	/// them by one position. This is a move, not a swap.
	pub fn reorder(&self, from: usize, to: usize) -> Result<Self, CollectionError> {
		let len = self.items.len();
		for index in [from, to] {
			if index >= len {
				return Err(CollectionError::IndexOutOfRange { index, len });
			}
		}
		let mut items = self.items.clone();
		let moved = items.remove(from);
		items.insert(to, moved);
		Ok(Self { items })
	}
}

impl LinkCollection<SocialLink> {
	/// Appends a newly connected network.
	pub fn add(&self, link: SocialLink) -> Result<Self, CollectionError> {
		if self.contains_key(link.key()) {
			return Err(CollectionError::DuplicateNetwork(link.network));
		}
		let mut items = self.items.clone();
		items.push(link);
		Ok(Self { items })
	}
}

impl LinkCollection<CustomLink> {
	/// Appends a custom link. Ids are freshly generated at creation time,
	/// so appending cannot collide.
	pub fn add(&self, link: CustomLink) -> Self {
		let mut items = self.items.clone();
		items.push(link);
		Self { items }
	}
}
