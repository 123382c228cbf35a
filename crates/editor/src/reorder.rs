//! Drag-reorder coordination.
//!
//! Gesture detection is toolkit territory; this machine owns everything
//! after it: order computation, the optimistic commit, and rollback.
//!
//! ```text
//!           begin              finish (moved)
//!   Idle ─────────▶ Dragging ────────────────▶ Committing
//!    ▲                 │                           │
//!    │   cancel /      │                settle(Ok) │ settle(Err)
//!    │   no move       ▼                           ▼
//!    └◀────────────────┴◀──────────────────── RollingBack
//!                          complete_rollback
//! ```
//!
//! At most one commit is in flight: `begin` while committing or rolling
//! back rejects the gesture, so overlapping optimistic states — whose
//! rollback targets would be ambiguous — can never arise.

use linkdeck_primitives::{CollectionError, Keyed, LinkCollection};
use thiserror::Error;
use tracing::debug;

/// Where the machine is in the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
	/// No gesture in progress.
	#[default]
	Idle,
	/// An element is being dragged. `target` is provisional and drives only
	/// the UI affordance; nothing persists until the drag ends.
	Dragging { origin: usize, target: usize },
	/// An immediate write for the reordered collection is in flight.
	Committing { generation: u64 },
	/// A failed commit is being undone.
	RollingBack,
}

/// Why a drag gesture was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GestureRejected {
	/// A previous reorder is still committing or rolling back.
	#[error("a reorder is still in flight")]
	Busy,
	/// A drag is already in progress.
	#[error("a drag is already in progress")]
	AlreadyDragging,
}

/// Outcome of ending a drag.
#[derive(Debug)]
pub enum DragEnd<T> {
	/// Drag ended where it began, or there was no drag: nothing to do.
	Unchanged,
	/// Apply `reordered` optimistically and issue the immediate write
	/// tagged with `generation`.
	Commit {
		generation: u64,
		reordered: LinkCollection<T>,
	},
}

/// Resolution of [`ReorderCoordinator::settle`].
#[derive(Debug)]
pub enum Settlement<T> {
	/// The optimistic state is now the confirmed state.
	Confirmed,
	/// Restore this pre-drag collection, then call
	/// [`ReorderCoordinator::complete_rollback`].
	RollBack(LinkCollection<T>),
	/// The settlement did not match the in-flight commit; ignored.
	Stale,
}

/// State machine for one list's drag-reorder lifecycle.
pub struct ReorderCoordinator<T> {
	phase: DragPhase,
	generation: u64,
	previous: Option<LinkCollection<T>>,
}

impl<T> Default for ReorderCoordinator<T> {
	fn default() -> Self {
		Self {
			phase: DragPhase::Idle,
			generation: 0,
			previous: None,
		}
	}
}

impl<T: Keyed + Clone> ReorderCoordinator<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> DragPhase {
		self.phase
	}

	pub fn is_idle(&self) -> bool {
		matches!(self.phase, DragPhase::Idle)
	}

	/// Starts a drag of the element at `origin`.
	pub fn begin(&mut self, origin: usize) -> Result<(), GestureRejected> {
		match self.phase {
			DragPhase::Idle => {
				self.phase = DragPhase::Dragging {
					origin,
					target: origin,
				};
				Ok(())
			}
			DragPhase::Dragging { .. } => Err(GestureRejected::AlreadyDragging),
			DragPhase::Committing { .. } | DragPhase::RollingBack => {
				debug!("drag rejected while a commit is in flight");
				Err(GestureRejected::Busy)
			}
		}
	}

	/// Updates the provisional target while dragging. Ignored otherwise.
	pub fn drag_to(&mut self, index: usize) {
		if let DragPhase::Dragging { origin, .. } = self.phase {
			self.phase = DragPhase::Dragging {
				origin,
				target: index,
			};
		}
	}

	/// Abandons the gesture without mutating or writing anything.
	pub fn cancel(&mut self) {
		if matches!(self.phase, DragPhase::Dragging { .. }) {
			self.phase = DragPhase::Idle;
		}
	}

	/// Ends the drag over the current provisional target.
	///
	/// Returns the reordered collection to apply optimistically, together
	/// with the generation its eventual settlement must carry. The pre-drag
	/// `current` is retained for rollback. Out-of-range indices abandon the
	/// gesture and surface the collection error.
	pub fn finish(&mut self, current: &LinkCollection<T>) -> Result<DragEnd<T>, CollectionError> {
		let DragPhase::Dragging { origin, target } = self.phase else {
			return Ok(DragEnd::Unchanged);
		};
		if origin == target {
			self.phase = DragPhase::Idle;
			return Ok(DragEnd::Unchanged);
		}
		let reordered = match current.reorder(origin, target) {
			Ok(reordered) => reordered,
			Err(err) => {
				self.phase = DragPhase::Idle;
				return Err(err);
			}
		};
		self.generation = self.generation.wrapping_add(1);
		self.previous = Some(current.clone());
		self.phase = DragPhase::Committing {
			generation: self.generation,
		};
		Ok(DragEnd::Commit {
			generation: self.generation,
			reordered,
		})
	}

	/// Resolves the in-flight commit.
	///
	/// Success confirms the optimistic state. Failure hands back the
	/// pre-drag collection for the caller to restore. Settlements carrying
	/// a generation other than the in-flight one are stale and ignored.
	pub fn settle(&mut self, generation: u64, success: bool) -> Settlement<T> {
		let DragPhase::Committing {
			generation: in_flight,
		} = self.phase
		else {
			debug!(generation, "settlement with no commit in flight");
			return Settlement::Stale;
		};
		if in_flight != generation {
			debug!(generation, in_flight, "stale reorder settlement ignored");
			return Settlement::Stale;
		}
		if success {
			self.phase = DragPhase::Idle;
			self.previous = None;
			return Settlement::Confirmed;
		}
		match self.previous.take() {
			Some(previous) => {
				self.phase = DragPhase::RollingBack;
				Settlement::RollBack(previous)
			}
			None => {
				self.phase = DragPhase::Idle;
				Settlement::Stale
			}
		}
	}

	/// Marks rollback restoration complete, returning to `Idle`.
	pub fn complete_rollback(&mut self) {
		if matches!(self.phase, DragPhase::RollingBack) {
			self.phase = DragPhase::Idle;
		}
	}
}
