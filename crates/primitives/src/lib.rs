//! Core types for creator-profile editing: links, ordered collections, URL
//! canonicalization, and field validation.

/// Ordered link collections and their mutation operations.
pub mod collection;
/// URL canonicalization and validation for link targets.
pub mod href;
/// Social and custom link types.
pub mod link;
/// Static catalog of known social networks.
pub mod platform;
/// Profile record and partial-update payload types.
pub mod profile;
/// Field-level validation rules and limits.
pub mod validate;

pub use collection::{CollectionError, Keyed, LinkCollection};
pub use link::{CustomLink, LinkId, SocialLink};
pub use profile::{Profile, ProfileUpdate, Theme, UserId};
pub use validate::ValidationError;
