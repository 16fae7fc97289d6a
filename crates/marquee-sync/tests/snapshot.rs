mod common;

use common::StaticExport;
use marquee_sync::snapshot::{CURRENT_FILE, PREVIOUS_FILE};
use marquee_sync::{SnapshotStore, SyncError, fetch_and_check};

#[tokio::test]
async fn first_run_with_content_reports_new_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = StaticExport::new("Timestamp,Text,Color\n\n2020-12-01,Hello,green");

    assert!(fetch_and_check(&source, &store).await.unwrap());
    assert!(dir.path().join(CURRENT_FILE).exists());
    assert!(!dir.path().join(PREVIOUS_FILE).exists());
}

#[tokio::test]
async fn first_run_with_empty_export_reports_nothing_new() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = StaticExport::new("");

    assert!(!fetch_and_check(&source, &store).await.unwrap());
}

#[tokio::test]
async fn identical_snapshot_after_commit_reports_nothing_new() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = StaticExport::new("Timestamp,Text,Color\n\n2020-12-01,Hello,green");

    assert!(fetch_and_check(&source, &store).await.unwrap());
    store.commit().unwrap();
    assert!(!fetch_and_check(&source, &store).await.unwrap());

    source.set("Timestamp,Text,Color\n\n2020-12-01,Hello,green\n\n2020-12-02,Hi,red");
    assert!(fetch_and_check(&source, &store).await.unwrap());
}

#[tokio::test]
async fn commit_copies_current_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let body = "Timestamp,Text,Color\r\n\r\n2020-12-01,Hello,green\r\n";
    let source = StaticExport::new(body);

    fetch_and_check(&source, &store).await.unwrap();
    store.commit().unwrap();

    assert_eq!(store.read_previous().unwrap(), body.as_bytes());
    assert_eq!(std::fs::read(store.previous_path()).unwrap(), body.as_bytes());
}

#[tokio::test]
async fn failed_fetch_propagates_and_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = StaticExport::new("baseline");
    fetch_and_check(&source, &store).await.unwrap();
    store.commit().unwrap();

    let failing = StaticExport::failing(503);
    let err = fetch_and_check(&failing, &store).await.unwrap_err();

    assert!(matches!(err, SyncError::FetchStatus { status: 503, .. }));
    assert_eq!(store.read_previous().unwrap(), b"baseline");
}

#[tokio::test]
async fn non_utf8_export_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = StaticExport::new("");
    source.set_bytes(&[0x66, 0xff, 0xfe]);

    let err = fetch_and_check(&source, &store).await.unwrap_err();
    assert!(matches!(err, SyncError::Encoding(_)));
}

#[test]
fn state_dir_is_created_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("state").join("relay");
    let store = SnapshotStore::in_dir(&nested);

    store.write_current(b"x").unwrap();
    assert_eq!(store.read_current().unwrap(), b"x");
    assert!(store.has_new_data().unwrap());
}
