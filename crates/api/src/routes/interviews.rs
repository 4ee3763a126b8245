use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the submission and listing routes.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/entrevistas",
        get(handlers::interviews::list_interviews).post(handlers::interviews::submit_interview),
    )
}
