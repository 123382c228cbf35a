//! Profile editing engine.
//!
//! Holds the canonical in-memory link state, coordinates drag-reorder
//! gestures, and drives the persistence gateway:
//!
//! ```text
//! ┌─────────────┐    mutate     ┌───────────┐   subscribe   ┌──────────────┐
//! │ Editor ops  │──────────────▶│ LinkStore │──────────────▶│ Presentation │
//! │ (forms,d&d) │               └───────────┘               └──────────────┘
//! └─────┬───────┘
//!       │ save_debounced / immediate
//!       ▼
//! ┌───────────────┐   WriteOutcome / ReorderSettled   ┌───────────────┐
//! │ ProfileWriter │──────────────────────────────────▶│ ProfileEditor │
//! └───────────────┘          (event pump)             │   .handle()   │
//!                                                     └───────────────┘
//! ```
//!
//! Every mutation is optimistic: the store updates first, the write follows.
//! Reorder commits roll back on failure; debounced edits keep the optimistic
//! state and surface a transient notice instead.

/// The profile editor façade and its event pump.
pub mod editor;
/// Form-level validation for link editors.
pub mod forms;
/// User-visible notices raised by editing operations.
pub mod notice;
/// Drag-reorder coordination.
pub mod reorder;
/// Canonical in-memory link state.
pub mod store;

pub use editor::{EditorEvent, LinkList, ProfileEditor};
pub use forms::{CustomLinkDraft, SocialLinkForm};
pub use notice::{Notice, NoticeLevel};
pub use reorder::{DragEnd, DragPhase, GestureRejected, ReorderCoordinator, Settlement};
pub use store::{LinkStore, ProfileLinks};
