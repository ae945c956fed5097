use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/entries",
            get(handlers::list_entries)
                .post(handlers::save_entries)
                .delete(handlers::delete_entries),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/recent", get(handlers::get_recent))
        .with_state(state)
}
