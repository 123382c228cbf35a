use std::sync::Arc;
use std::time::Duration;

use linkdeck_primitives::{LinkCollection, Profile, ProfileUpdate, SocialLink, UserId};

use super::*;
use crate::error::PersistenceError;
use crate::memory::MemoryRecordStore;
use crate::session::{SignedOut, StaticSession};

fn user() -> UserId {
	UserId::new("u1")
}

fn seeded_store() -> Arc<MemoryRecordStore> {
	Arc::new(MemoryRecordStore::with_profile(user(), Profile::new("ada")))
}

fn writer_with(
	store: Arc<MemoryRecordStore>,
) -> (ProfileWriter, mpsc::UnboundedReceiver<WriteOutcome>) {
	let session = Arc::new(StaticSession::new(user()));
	ProfileWriter::new(store, session)
}

fn social(networks: &[&str]) -> LinkCollection<SocialLink> {
	networks
		.iter()
		.map(|network| SocialLink::new(*network, format!("https://{network}.com/a")))
		.collect::<Vec<_>>()
		.into()
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn rapid_edits_coalesce_into_one_write_with_the_final_state() {
	let store = seeded_store();
	let (mut writer, mut outcomes) = writer_with(store.clone());

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	tokio::time::advance(Duration::from_millis(100)).await;
	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram", "youtube"])));
	tokio::time::advance(Duration::from_millis(100)).await;
	let generation =
		writer.save_debounced(ProfileUpdate::with_social(social(&["youtube", "instagram"])));

	let outcome = outcomes.recv().await.unwrap();
	assert_eq!(outcome.generation, generation);
	assert!(outcome.result.is_ok());

	let writes = store.writes();
	assert_eq!(writes.len(), 1, "superseded payloads must never transmit");
	assert_eq!(writes[0].social, Some(social(&["youtube", "instagram"])));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn writes_separated_by_a_quiet_period_both_transmit() {
	let store = seeded_store();
	let (mut writer, mut outcomes) = writer_with(store.clone());

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	outcomes.recv().await.unwrap();

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram", "youtube"])));
	outcomes.recv().await.unwrap();

	assert_eq!(store.writes().len(), 2);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn no_write_happens_before_the_quiet_period_elapses() {
	let store = seeded_store();
	let (mut writer, _outcomes) = writer_with(store.clone());

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	// Let the timer task register its sleep before moving the clock.
	tokio::task::yield_now().await;
	tokio::time::advance(Duration::from_millis(399)).await;
	tokio::task::yield_now().await;
	assert!(store.writes().is_empty());

	tokio::time::advance(Duration::from_millis(1)).await;
	tokio::task::yield_now().await;
	assert_eq!(store.writes().len(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn supersession_merges_edits_to_different_fields() {
	let store = seeded_store();
	let (mut writer, mut outcomes) = writer_with(store.clone());

	writer.save_debounced(ProfileUpdate {
		bio: Some("hello".into()),
		..ProfileUpdate::default()
	});
	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));

	let outcome = outcomes.recv().await.unwrap();
	let profile = outcome.result.unwrap();
	assert_eq!(profile.bio, "hello");
	assert_eq!(profile.social.len(), 1);
	assert_eq!(store.writes().len(), 1, "edits inside the window share one write");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_debounced_writes_report_on_the_outcome_channel() {
	let store = seeded_store();
	store.fail_next(PersistenceError::transient("backing store down"));
	let (mut writer, mut outcomes) = writer_with(store.clone());

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	let outcome = outcomes.recv().await.unwrap();
	let err = outcome.result.unwrap_err();
	assert!(err.is_transient());
	assert!(store.writes().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unauthorized_sessions_fail_before_reaching_the_record_store() {
	let store = seeded_store();
	let (mut writer, mut outcomes) =
		ProfileWriter::new(store.clone(), Arc::new(SignedOut));

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	let outcome = outcomes.recv().await.unwrap();
	assert_eq!(outcome.result.unwrap_err().status(), 401);
	assert!(store.writes().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn immediate_writes_skip_the_quiet_period() {
	let store = seeded_store();
	let (writer, _outcomes) = writer_with(store.clone());

	writer
		.immediate()
		.save(ProfileUpdate::with_social(social(&["youtube", "instagram"])))
		.await
		.unwrap();

	// No clock advance was needed.
	let writes = store.writes();
	assert_eq!(writes.len(), 1);
	assert_eq!(writes[0].social, Some(social(&["youtube", "instagram"])));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn a_shorter_delay_override_is_honored() {
	let store = seeded_store();
	let (writer, _outcomes) = writer_with(store.clone());
	let mut writer = writer.with_delay(Duration::from_millis(10));

	writer.save_debounced(ProfileUpdate::with_social(social(&["instagram"])));
	tokio::task::yield_now().await;
	tokio::time::advance(Duration::from_millis(10)).await;
	tokio::task::yield_now().await;
	assert_eq!(store.writes().len(), 1);
}
