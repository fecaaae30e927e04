use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use jotter_core::form::FormErrors;
use jotter_core::note::NoteDraft;
use jotter_db::DbError;
use tracing::error;

use super::AppState;
use crate::render;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes))
        .route("/new", get(new_note).post(create_note))
        .route("/{id}", get(show_note))
}

async fn list_notes(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    state
        .db
        .list_notes()
        .map(|notes| Html(render::note_list(&notes)))
        .map_err(to_error)
}

async fn show_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    state
        .db
        .get_note(id)
        .map(|note| Html(render::note_detail(&note)))
        .map_err(to_error)
}

async fn new_note() -> Html<String> {
    Html(render::note_form(&NoteDraft::default(), &FormErrors::default()))
}

async fn create_note(
    State(state): State<AppState>,
    Form(draft): Form<NoteDraft>,
) -> Result<Response, (StatusCode, Html<String>)> {
    match draft.validate() {
        Ok(valid) => {
            state.db.insert_note(&valid).map_err(to_error)?;
            Ok(Redirect::to("/").into_response())
        }
        // Invalid submissions re-render the form with the submitted
        // values; nothing is persisted.
        Err(errors) => Ok(Html(render::note_form(&draft, &errors)).into_response()),
    }
}

fn to_error(e: DbError) -> (StatusCode, Html<String>) {
    match e {
        DbError::NotFound(what) => (StatusCode::NOT_FOUND, Html(render::not_found(&what))),
        other => {
            error!("database error: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render::server_error()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::test_helpers::{test_router, test_router_with_db};

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn list_empty_returns_200() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("No notes yet."));
    }

    #[tokio::test]
    async fn detail_missing_returns_404() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn form_display_returns_200() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/new").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("name=\"title\""));
        assert!(body.contains("name=\"body\""));
    }

    #[tokio::test]
    async fn submit_valid_redirects_to_list() {
        let (app, db) = test_router_with_db();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/new")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=Groceries&body=Milk%2C+eggs"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");
        assert_eq!(db.count_notes().unwrap(), 1);
    }

    #[tokio::test]
    async fn submit_empty_title_rerenders_form() {
        let (app, db) = test_router_with_db();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/new")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("title=&body=still+here"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("This field is required."));
        // Submitted body value survives the round trip.
        assert!(body.contains("still here"));
        assert_eq!(db.count_notes().unwrap(), 0);
    }

    #[tokio::test]
    async fn detail_shows_title_and_body() {
        let (app, db) = test_router_with_db();
        let note = db
            .insert_note(&jotter_core::note::NoteDraft {
                title: "Groceries".into(),
                body: "Milk, eggs".into(),
            })
            .unwrap();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", note.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Groceries"));
        assert!(body.contains("Milk, eggs"));
    }
}
