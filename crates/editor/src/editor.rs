//! The profile editor façade.
//!
//! One [`ProfileEditor`] per editing session owns the link store, the
//! persistence writer, and one reorder coordinator per list. Operations are
//! synchronous: they validate, mutate the store, and schedule persistence.
//! Asynchronous resolutions (write outcomes, reorder settlements) come back
//! through [`ProfileEditor::next_event`] and are applied by
//! [`ProfileEditor::handle`].

use std::sync::Arc;
use std::time::Duration;

use linkdeck_gateway::{
	FileHost, ImageUpload, PersistenceError, ProfileWriter, RecordStore, Session, UploadError,
	WriteOutcome, upload,
};
use linkdeck_primitives::validate::{validate_link_url, validate_update};
use linkdeck_primitives::{
	CollectionError, CustomLink, LinkId, ProfileUpdate, SocialLink, ValidationError, platform,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::forms::{CustomLinkDraft, SocialLinkForm};
use crate::notice::Notice;
use crate::reorder::{DragEnd, GestureRejected, ReorderCoordinator, Settlement};
use crate::store::{LinkStore, ProfileLinks};

/// Which of the two parallel lists an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkList {
	Social,
	Custom,
}

/// Asynchronous resolutions the host pumps back into the editor.
#[derive(Debug)]
pub enum EditorEvent {
	/// A debounced write resolved.
	Write(WriteOutcome),
	/// A reorder commit resolved.
	ReorderSettled {
		list: LinkList,
		generation: u64,
		result: Result<(), PersistenceError>,
	},
}

/// Editing session over one profile's links and fields.
pub struct ProfileEditor {
	store: LinkStore,
	writer: ProfileWriter,
	files: Arc<dyn FileHost>,
	social_drag: ReorderCoordinator<SocialLink>,
	custom_drag: ReorderCoordinator<CustomLink>,
	write_rx: mpsc::UnboundedReceiver<WriteOutcome>,
	events_tx: mpsc::UnboundedSender<EditorEvent>,
	events_rx: mpsc::UnboundedReceiver<EditorEvent>,
	notices_tx: mpsc::UnboundedSender<Notice>,
	notices_rx: Option<mpsc::UnboundedReceiver<Notice>>,
}

impl ProfileEditor {
	pub fn new(
		records: Arc<dyn RecordStore>,
		session: Arc<dyn Session>,
		files: Arc<dyn FileHost>,
		initial: ProfileLinks,
	) -> Self {
		let (writer, write_rx) = ProfileWriter::new(records, session);
		let (events_tx, events_rx) = mpsc::unbounded_channel();
		let (notices_tx, notices_rx) = mpsc::unbounded_channel();
		Self {
			store: LinkStore::new(initial),
			writer,
			files,
			social_drag: ReorderCoordinator::new(),
			custom_drag: ReorderCoordinator::new(),
			write_rx,
			events_tx,
			events_rx,
			notices_tx,
			notices_rx: Some(notices_rx),
		}
	}

	/// Overrides the debounce quiet period.
	pub fn with_debounce(mut self, delay: Duration) -> Self {
		self.writer = self.writer.with_delay(delay);
		self
	}

	/// Current link state.
	pub fn links(&self) -> ProfileLinks {
		self.store.snapshot()
	}

	/// Receiver the presentation layer watches for re-renders.
	pub fn subscribe(&self) -> tokio::sync::watch::Receiver<ProfileLinks> {
		self.store.subscribe()
	}

	/// Takes the notice receiver. Subsequent calls return `None`.
	pub fn take_notices(&mut self) -> Option<mpsc::UnboundedReceiver<Notice>> {
		self.notices_rx.take()
	}

	// ---- social links -----------------------------------------------------

	/// Connects a network. The URL is canonicalized before storage; a
	/// network that is already connected is rejected inline.
	pub fn add_social_link(&mut self, form: &SocialLinkForm) -> Result<(), ValidationError> {
		let link = form.validated()?;
		let label = platform::display_label(&link.network).to_string();
		let social = self.store.social().add(link)?;
		self.store.set_social(social.clone());
		self.writer.save_debounced(ProfileUpdate::with_social(social));
		self.notify(Notice::info("Link added", format!("{label} has been added")));
		Ok(())
	}

	/// Replaces the URL of a connected network.
	pub fn update_social_link(&mut self, network: &str, url: &str) -> Result<(), ValidationError> {
		let url = validate_link_url(url)?;
		let current = self.store.social();
		let replacement = SocialLink::new(network, url);
		let social = current.update(network, replacement)?;
		self.store.set_social(social.clone());
		self.writer.save_debounced(ProfileUpdate::with_social(social));
		let label = platform::display_label(network).to_string();
		self.notify(Notice::info(
			"Link updated",
			format!("{label} has been updated"),
		));
		Ok(())
	}

	/// Disconnects a network. Deleting an absent network is a quiet no-op;
	/// delete is idempotent at this layer.
	pub fn remove_social_link(&mut self, network: &str) {
		let Ok(social) = self.store.social().remove(network) else {
			return;
		};
		self.store.set_social(social.clone());
		self.writer.save_debounced(ProfileUpdate::with_social(social));
		let label = platform::display_label(network).to_string();
		self.notify(Notice::info(
			"Link removed",
			format!("{label} has been removed"),
		));
	}

	// ---- custom links -----------------------------------------------------

	/// Adds a custom link and returns its fresh id.
	pub fn add_custom_link(&mut self, draft: &CustomLinkDraft) -> Result<LinkId, ValidationError> {
		let (title, url) = draft.validated()?;
		let link = CustomLink::new(title.clone(), url);
		let id = link.id;
		let custom = self.store.custom().add(link);
		self.store.set_custom(custom.clone());
		self.writer
			.save_debounced(ProfileUpdate::with_custom_links(custom));
		self.notify(Notice::info("Link added", format!("{title} has been added")));
		Ok(id)
	}

	/// Replaces the title and URL of an existing custom link. The id and
	/// visibility are preserved.
	pub fn update_custom_link(
		&mut self,
		id: LinkId,
		draft: &CustomLinkDraft,
	) -> Result<(), ValidationError> {
		let (title, url) = draft.validated()?;
		let current = self.store.custom();
		let existing = current.find(&id).ok_or(CollectionError::NotFound)?;
		let replacement = CustomLink {
			id,
			title: title.clone(),
			url,
			visible: existing.visible,
		};
		let custom = current.update(&id, replacement)?;
		self.store.set_custom(custom.clone());
		self.writer
			.save_debounced(ProfileUpdate::with_custom_links(custom));
		self.notify(Notice::info(
			"Link updated",
			format!("{title} has been updated"),
		));
		Ok(())
	}

	/// Deletes a custom link. Idempotent at this layer.
	pub fn remove_custom_link(&mut self, id: LinkId) {
		let Ok(custom) = self.store.custom().remove(&id) else {
			return;
		};
		self.store.set_custom(custom.clone());
		self.writer
			.save_debounced(ProfileUpdate::with_custom_links(custom));
		self.notify(Notice::info("Link removed", "Custom link has been removed"));
	}

	/// Shows or hides a custom link on the public page.
	pub fn set_custom_link_visible(
		&mut self,
		id: LinkId,
		visible: bool,
	) -> Result<(), ValidationError> {
		let current = self.store.custom();
		let existing = current.find(&id).ok_or(CollectionError::NotFound)?;
		let replacement = CustomLink {
			visible,
			..existing.clone()
		};
		let custom = current.update(&id, replacement)?;
		self.store.set_custom(custom.clone());
		self.writer
			.save_debounced(ProfileUpdate::with_custom_links(custom));
		Ok(())
	}

	// ---- reorder ----------------------------------------------------------

	pub fn begin_social_drag(&mut self, origin: usize) -> Result<(), GestureRejected> {
		self.social_drag.begin(origin)
	}

	pub fn social_drag_to(&mut self, index: usize) {
		self.social_drag.drag_to(index);
	}

	pub fn cancel_social_drag(&mut self) {
		self.social_drag.cancel();
	}

	/// Ends a social-list drag: applies the new order optimistically and
	/// issues the immediate write.
	pub fn finish_social_drag(&mut self) -> Result<(), ValidationError> {
		let current = self.store.social();
		match self.social_drag.finish(&current)? {
			DragEnd::Unchanged => Ok(()),
			DragEnd::Commit {
				generation,
				reordered,
			} => {
				self.store.set_social(reordered.clone());
				self.spawn_reorder_write(
					LinkList::Social,
					generation,
					ProfileUpdate::with_social(reordered),
				);
				Ok(())
			}
		}
	}

	pub fn begin_custom_drag(&mut self, origin: usize) -> Result<(), GestureRejected> {
		self.custom_drag.begin(origin)
	}

	pub fn custom_drag_to(&mut self, index: usize) {
		self.custom_drag.drag_to(index);
	}

	pub fn cancel_custom_drag(&mut self) {
		self.custom_drag.cancel();
	}

	/// Ends a custom-list drag: applies the new order optimistically and
	/// issues the immediate write.
	pub fn finish_custom_drag(&mut self) -> Result<(), ValidationError> {
		let current = self.store.custom();
		match self.custom_drag.finish(&current)? {
			DragEnd::Unchanged => Ok(()),
			DragEnd::Commit {
				generation,
				reordered,
			} => {
				self.store.set_custom(reordered.clone());
				self.spawn_reorder_write(
					LinkList::Custom,
					generation,
					ProfileUpdate::with_custom_links(reordered),
				);
				Ok(())
			}
		}
	}

	fn spawn_reorder_write(&self, list: LinkList, generation: u64, update: ProfileUpdate) {
		let writer = self.writer.immediate();
		let events = self.events_tx.clone();
		tokio::spawn(async move {
			let result = writer.save(update).await.map(drop);
			let _ = events.send(EditorEvent::ReorderSettled {
				list,
				generation,
				result,
			});
		});
	}

	// ---- profile fields ---------------------------------------------------

	/// Saves non-link profile fields (display name, bio, theme, …) after
	/// checking their limits.
	pub fn update_fields(&mut self, update: ProfileUpdate) -> Result<(), ValidationError> {
		validate_update(&update)?;
		self.writer.save_debounced(update);
		Ok(())
	}

	/// Uploads a new avatar and saves its public URL.
	pub async fn set_avatar(&mut self, image: ImageUpload) -> Result<String, UploadError> {
		let url = self.upload(image).await?;
		self.writer.save_debounced(ProfileUpdate {
			avatar_url: Some(url.clone()),
			..ProfileUpdate::default()
		});
		Ok(url)
	}

	/// Uploads a new banner and saves its public URL.
	pub async fn set_banner(&mut self, image: ImageUpload) -> Result<String, UploadError> {
		let url = self.upload(image).await?;
		self.writer.save_debounced(ProfileUpdate {
			banner_url: Some(url.clone()),
			..ProfileUpdate::default()
		});
		Ok(url)
	}

	async fn upload(&self, image: ImageUpload) -> Result<String, UploadError> {
		upload::check_image(&image)?;
		self.files.store(image).await
	}

	// ---- event pump -------------------------------------------------------

	/// Next asynchronous resolution. The host awaits this in its event loop
	/// and passes the result to [`handle`](Self::handle).
	pub async fn next_event(&mut self) -> EditorEvent {
		tokio::select! {
			Some(outcome) = self.write_rx.recv() => EditorEvent::Write(outcome),
			Some(event) = self.events_rx.recv() => event,
		}
	}

	/// Applies an asynchronous resolution.
	///
	/// Reorder settlements confirm or roll back the optimistic order.
	/// Debounced-write failures keep the optimistic state — the next edit
	/// retries implicitly — and surface a transient notice instead.
	/// `Unauthorized` is returned to the caller, which is expected to
	/// redirect to authentication; it is never retried here.
	pub fn handle(&mut self, event: EditorEvent) -> Result<(), PersistenceError> {
		match event {
			EditorEvent::Write(outcome) => self.handle_write(outcome),
			EditorEvent::ReorderSettled {
				list,
				generation,
				result,
			} => self.handle_reorder(list, generation, result),
		}
	}

	fn handle_write(&mut self, outcome: WriteOutcome) -> Result<(), PersistenceError> {
		match outcome.result {
			Ok(_) => {
				debug!(generation = outcome.generation, "write acknowledged");
				Ok(())
			}
			Err(PersistenceError::Unauthorized) => {
				self.notify(Notice::error("Signed out", "Please sign in again."));
				Err(PersistenceError::Unauthorized)
			}
			Err(err) => {
				warn!(generation = outcome.generation, %err, "keeping optimistic state");
				self.notify(Notice::error("Error", "Failed to save changes"));
				Ok(())
			}
		}
	}

	fn handle_reorder(
		&mut self,
		list: LinkList,
		generation: u64,
		result: Result<(), PersistenceError>,
	) -> Result<(), PersistenceError> {
		let success = result.is_ok();
		match list {
			LinkList::Social => match self.social_drag.settle(generation, success) {
				Settlement::Confirmed | Settlement::Stale => {}
				Settlement::RollBack(previous) => {
					self.store.set_social(previous);
					self.social_drag.complete_rollback();
					self.notify_reorder_failure();
				}
			},
			LinkList::Custom => match self.custom_drag.settle(generation, success) {
				Settlement::Confirmed | Settlement::Stale => {}
				Settlement::RollBack(previous) => {
					self.store.set_custom(previous);
					self.custom_drag.complete_rollback();
					self.notify_reorder_failure();
				}
			},
		}
		match result {
			Err(PersistenceError::Unauthorized) => Err(PersistenceError::Unauthorized),
			_ => Ok(()),
		}
	}

	fn notify_reorder_failure(&self) {
		self.notify(Notice::error(
			"Failed to reorder",
			"Could not save the new order. Please try again.",
		));
	}

	fn notify(&self, notice: Notice) {
		let _ = self.notices_tx.send(notice);
	}
}
