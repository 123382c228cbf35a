//! Debounced and immediate profile writes.
//!
//! Form editing is rapid-fire: every mutation hands the writer the full
//! updated state, and only the latest coalesced payload may reach the
//! record store. A newer schedule supersedes the pending one; superseded
//! payloads are discarded, never transmitted. Reorders are single discrete
//! gestures and use [`ImmediateWriter`] instead, with no coalescing window.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use linkdeck_primitives::{Profile, ProfileUpdate, UserId};

use crate::error::Result;
use crate::record::RecordStore;
use crate::session::Session;

/// Quiet period between the last edit and the coalesced write.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(400);

/// Resolution of a scheduled debounced write, delivered on the outcome
/// channel. Immediate writes resolve inline at their call site instead.
#[derive(Debug)]
pub struct WriteOutcome {
	pub generation: u64,
	pub result: Result<Profile>,
}

/// A scheduled write that has not fired yet.
///
/// The payload lives in a take-once cell shared with the timer task: when a
/// newer schedule arrives first it cancels the task and reclaims the payload
/// for merging; when the timer fires first it consumes the payload, so a
/// later schedule starts from a fresh one instead of resending stale fields.
struct PendingWrite {
	cancel: CancellationToken,
	payload: Arc<Mutex<Option<ProfileUpdate>>>,
}

/// Coalescing writer for a single profile's edits.
///
/// Requires a running tokio runtime; debounced writes run on spawned tasks
/// and report back through the outcome channel handed out at construction.
pub struct ProfileWriter {
	records: Arc<dyn RecordStore>,
	session: Arc<dyn Session>,
	delay: Duration,
	generation: u64,
	pending: Option<PendingWrite>,
	outcome_tx: mpsc::UnboundedSender<WriteOutcome>,
}

impl ProfileWriter {
	pub fn new(
		records: Arc<dyn RecordStore>,
		session: Arc<dyn Session>,
	) -> (Self, mpsc::UnboundedReceiver<WriteOutcome>) {
		let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
		let writer = Self {
			records,
			session,
			delay: DEBOUNCE_DELAY,
			generation: 0,
			pending: None,
			outcome_tx,
		};
		(writer, outcome_rx)
	}

	/// Overrides the quiet period.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Schedules a coalesced write of `update` after the quiet period.
	///
	/// If a write is already pending, its payload is folded into this one
	/// field-by-field (newer fields win) and its timer is cancelled, so the
	/// eventual write carries the final state of everything edited inside
	/// the window. Returns the generation the outcome will carry.
	pub fn save_debounced(&mut self, update: ProfileUpdate) -> u64 {
		self.generation = self.generation.wrapping_add(1);
		let generation = self.generation;

		let mut payload = match self.pending.take() {
			Some(pending) => {
				pending.cancel.cancel();
				// Reclaim the payload unless the timer already consumed it.
				pending
					.payload
					.lock()
					.unwrap()
					.take()
					.unwrap_or_default()
			}
			None => ProfileUpdate::default(),
		};
		payload.merge(update);

		let cancel = CancellationToken::new();
		let shared = Arc::new(Mutex::new(Some(payload)));
		self.pending = Some(PendingWrite {
			cancel: cancel.clone(),
			payload: shared.clone(),
		});

		let records = self.records.clone();
		let session = self.session.clone();
		let delay = self.delay;
		let outcome_tx = self.outcome_tx.clone();
		tokio::spawn(async move {
			tokio::select! {
				_ = cancel.cancelled() => {
					debug!(generation, "debounced write superseded");
					return;
				}
				_ = sleep(delay) => {}
			}
			let Some(payload) = shared.lock().unwrap().take() else {
				return;
			};
			let result = write(records.as_ref(), session.as_ref(), payload).await;
			if let Err(err) = &result {
				warn!(generation, status = err.status(), %err, "debounced write failed");
			}
			let _ = outcome_tx.send(WriteOutcome { generation, result });
		});

		generation
	}

	/// Handle for writes that bypass the coalescing window.
	pub fn immediate(&self) -> ImmediateWriter {
		ImmediateWriter {
			records: self.records.clone(),
			session: self.session.clone(),
		}
	}
}

/// Cloneable handle issuing a write right away.
///
/// Used for reorder commits: a drag release is one discrete gesture whose
/// result must not be lost to coalescing with a later unrelated edit.
#[derive(Clone)]
pub struct ImmediateWriter {
	records: Arc<dyn RecordStore>,
	session: Arc<dyn Session>,
}

impl ImmediateWriter {
	pub async fn save(&self, update: ProfileUpdate) -> Result<Profile> {
		write(self.records.as_ref(), self.session.as_ref(), update).await
	}
}

async fn write(
	records: &dyn RecordStore,
	session: &dyn Session,
	update: ProfileUpdate,
) -> Result<Profile> {
	let user: UserId = session.current_user()?;
	records.update(&user, update).await
}

#[cfg(test)]
mod tests;
