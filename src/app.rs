use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::{get, post}};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tally", get(handlers::get_tally))
        .route("/api/setup", post(handlers::setup))
        .route("/api/report", post(handlers::report))
        .route("/api/reset/record", post(handlers::reset_record))
        .route("/api/reset/all", post(handlers::reset_all))
        .with_state(state)
}
