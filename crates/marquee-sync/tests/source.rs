use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use marquee_sync::{ExportSource, HttpExport, SnapshotStore, SyncError, fetch_and_check};

const EXPORT: &str = "Timestamp,Text,Color\n\n12/1/2020 10:00:00,Hello,green";

/// Serve a fixed export and a missing one on an ephemeral port.
async fn serve() -> String {
    let app = Router::new()
        .route("/pub/export.csv", get(|| async { EXPORT }))
        .route("/pub/gone.csv", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn http_export_returns_the_body() {
    let base = serve().await;
    let source = HttpExport::new(format!("{base}/pub/export.csv"));

    let body = source.fetch().await.unwrap();
    assert_eq!(body, EXPORT.as_bytes());
}

#[tokio::test]
async fn http_export_status_is_fatal() {
    let base = serve().await;
    let url = format!("{base}/pub/gone.csv");
    let source = HttpExport::new(url.clone());

    let err = source.fetch().await.unwrap_err();
    match err {
        SyncError::FetchStatus { url: failed, status } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_export_unreachable_is_a_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source = HttpExport::new(format!("http://{addr}/pub/export.csv"));

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SyncError::Fetch { .. }));
}

#[tokio::test]
async fn failed_fetch_leaves_no_current_snapshot() {
    let base = serve().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = HttpExport::new(format!("{base}/pub/gone.csv"));

    assert!(fetch_and_check(&source, &store).await.is_err());
    assert!(store.read_current().is_err());
}

#[tokio::test]
async fn first_http_fetch_is_new_data() {
    let base = serve().await;
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::in_dir(dir.path());
    let source = HttpExport::new(format!("{base}/pub/export.csv"));

    assert!(fetch_and_check(&source, &store).await.unwrap());
    store.commit().unwrap();
    assert!(!fetch_and_check(&source, &store).await.unwrap());
}
