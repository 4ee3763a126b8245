pub mod health;
pub mod interviews;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health          service + database health
/// /entrevistas     submit (POST), list newest-first (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(interviews::router())
}
