use legol_session::{SessionStorage, SessionStore, TimelineItem, SESSION_FILE_NAME};
use legol_suggest::Role;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn file_roundtrip_reproduces_logical_state() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    let mut store = SessionStore::new();
    store.set_student_country("India");
    store.set_topic(Some("work authorization".to_string()));
    store.append_message(Role::User, "Can I work on campus with an F-1 visa?");
    store.append_message(Role::Assistant, "Yes, up to 20 hours per week.");
    storage.save(&store).await.expect("save");

    let restored = storage.load().await;
    assert_eq!(restored.messages(), store.messages());
    assert_eq!(restored.student_country(), "India");
    assert_eq!(restored.institution(), store.institution());
    assert_eq!(restored.topic(), Some("work authorization"));
    assert_eq!(restored.suggested_ids(), store.suggested_ids());
}

#[tokio::test]
async fn missing_record_loads_as_seeded_defaults() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    let store = storage.load().await;
    assert_eq!(store.message_count(), 1);
    assert_eq!(store.student_country(), legol_session::DEFAULT_STUDENT_COUNTRY);
}

#[tokio::test]
async fn corrupt_record_loads_as_seeded_defaults() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    tokio::fs::write(dir.path().join(SESSION_FILE_NAME), b"{not json")
        .await
        .expect("write corrupt record");

    let store = storage.load().await;
    assert_eq!(store.message_count(), 1);
    assert_eq!(
        store.suggested_ids().len(),
        legol_catalog::DEFAULT_SUGGESTED_IDS.len()
    );
}

#[tokio::test]
async fn timeline_cache_survives_the_roundtrip() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    let mut store = SessionStore::new();
    store.append_message(Role::User, "When is my biometrics appointment?");
    store.store_timeline(vec![TimelineItem {
        title: "Biometrics appointment".to_string(),
        description: "USCIS application support center visit".to_string(),
        related_documents: vec!["i-485".to_string()],
        due_date: None,
    }]);
    storage.save(&store).await.expect("save");

    let restored = storage.load().await;
    let items = restored.cached_timeline().expect("cache valid at same count");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Biometrics appointment");
}

#[tokio::test]
async fn restored_timeline_goes_stale_after_append() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    let mut store = SessionStore::new();
    store.store_timeline(vec![]);
    storage.save(&store).await.expect("save");

    let mut restored = storage.load().await;
    assert!(restored.cached_timeline().is_some());
    restored.append_message(Role::User, "one more question");
    assert!(restored.cached_timeline().is_none());
}

#[tokio::test]
async fn memory_backend_roundtrips_per_key() {
    let storage = SessionStorage::memory("memory_roundtrip");
    let other = SessionStorage::memory("memory_roundtrip_other");

    let mut store = SessionStore::new();
    store.append_message(Role::User, "lease agreement for my new apartment");
    storage.save(&store).await.expect("save");

    let restored = storage.load().await;
    assert_eq!(restored.messages(), store.messages());
    assert!(restored.suggested_ids().contains("lease-agreement"));

    let untouched = other.load().await;
    assert_eq!(untouched.message_count(), 1);
}

#[tokio::test]
async fn remove_drops_the_record() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let storage = SessionStorage::file(dir.path());

    let mut store = SessionStore::new();
    store.append_message(Role::User, "hello there");
    storage.save(&store).await.expect("save");
    storage.remove().await.expect("remove");

    let reloaded = storage.load().await;
    assert_eq!(reloaded.message_count(), 1);
}
