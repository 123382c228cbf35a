//! Persistence gateway for creator-profile records.
//!
//! The gateway is the only component allowed to talk to the backing record
//! store. Editing surfaces hand it partial updates; it decides *when* the
//! write happens:
//!
//! ```text
//! ┌──────────────┐  save_debounced   ┌───────────────┐  update   ┌─────────────┐
//! │ Editor       │──────────────────▶│ ProfileWriter │──────────▶│ RecordStore │
//! │ (forms, d&d) │  immediate().save │  (coalescing) │           │ (external)  │
//! └──────────────┘──────────────────▶└───────────────┘           └─────────────┘
//!                                            │
//!                                            ▼ WriteOutcome events
//! ```
//!
//! Rapid-fire edits coalesce behind a quiet period; reorders are single
//! discrete gestures and skip the quiet period entirely.

/// Error types for persistence operations.
pub mod error;
/// In-memory collaborators for tests and standalone embeddings.
pub mod memory;
/// The record-update collaborator contract.
pub mod record;
/// Session collaborator contract.
pub mod session;
/// Image upload collaborator and validation.
pub mod upload;
/// Debounced and immediate profile writers.
pub mod writer;

pub use error::{PersistenceError, Result};
pub use memory::{MemoryFileHost, MemoryRecordStore};
pub use record::RecordStore;
pub use session::{Session, SignedOut, StaticSession};
pub use upload::{FileHost, ImageUpload, UploadError};
pub use writer::{DEBOUNCE_DELAY, ImmediateWriter, ProfileWriter, WriteOutcome};
