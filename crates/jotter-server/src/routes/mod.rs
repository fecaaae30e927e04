pub mod health;
pub mod notes;

use axum::Router;
use jotter_db::Db;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

pub fn build_router(db: Db) -> Router {
    let state = AppState { db };
    Router::new()
        .merge(notes::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
