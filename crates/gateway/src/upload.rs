//! Image upload collaborator.
//!
//! Avatar and banner images go to an opaque file host that hands back a
//! public URL. The whitelist and size cap are enforced here, before the
//! host is consulted, so a rejected file never leaves the client.

use async_trait::async_trait;
use thiserror::Error;

/// Content types accepted for avatar and banner images.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Maximum accepted image size in bytes (2 MiB).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// An image queued for upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
	pub file_name: String,
	pub content_type: String,
	pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
	#[error("Invalid file type. Only JPG, PNG, and WebP are allowed.")]
	UnsupportedType,
	#[error("File too large. Maximum size is 2MB.")]
	TooLarge,
	#[error("upload failed: {0}")]
	Host(String),
}

/// Opaque file-storage collaborator returning a public URL.
#[async_trait]
pub trait FileHost: Send + Sync {
	async fn store(&self, image: ImageUpload) -> Result<String, UploadError>;
}

/// Checks the whitelist and size cap.
pub fn check_image(image: &ImageUpload) -> Result<(), UploadError> {
	if !ACCEPTED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
		return Err(UploadError::UnsupportedType);
	}
	if image.bytes.len() > MAX_IMAGE_BYTES {
		return Err(UploadError::TooLarge);
	}
	Ok(())
}
