use axum::Router;
use jotter_db::Db;
use tokio::net::TcpListener;

use crate::routes;

/// Build a test router backed by in-memory SQLite.
pub fn test_router() -> Router {
    let (router, _db) = test_router_with_db();
    router
}

/// Build a test router, also returning the db handle so tests can
/// assert directly against stored state.
pub fn test_router_with_db() -> (Router, Db) {
    let db = Db::open_in_memory().unwrap();
    (routes::build_router(db.clone()), db)
}

/// A running test server with base_url, db handle, and background task.
pub struct TestServer {
    pub base_url: String,
    pub db: Db,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let (app, db) = test_router_with_db();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        db,
        _handle: handle,
    }
}
