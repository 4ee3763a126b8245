//! Handlers for questionnaire submission and listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Form, Json};

use entrevistas_core::submission::{map_submission, RawSubmission};
use entrevistas_db::models::interview::Interview;
use entrevistas_db::repositories::InterviewRepo;

use crate::error::AppResult;
use crate::flash::{flash_redirect, FlashCategory};
use crate::response::ListResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /entrevistas
// ---------------------------------------------------------------------------

/// Accept a questionnaire submission.
///
/// The checkbox groups arrive as repeated field names, so the body is read
/// as raw pairs rather than a keyed struct; the mapper owns the
/// field-to-column translation.
pub async fn submit_interview(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let raw = RawSubmission::from_pairs(pairs);
    let mapped = map_submission(&raw)?;

    let stored = InterviewRepo::submit(&state.pool, &mapped).await?;

    tracing::info!(
        id = stored.id,
        nombre_contacto = %stored.nombre_contacto,
        "Submission accepted",
    );

    Ok(flash_redirect(
        FlashCategory::Success,
        "¡Información guardada con éxito!",
    ))
}

// ---------------------------------------------------------------------------
// GET /entrevistas
// ---------------------------------------------------------------------------

/// List every stored interview, newest first.
///
/// A store failure yields an empty collection plus an error flag instead
/// of a failed response; the form page renders the flag.
pub async fn list_interviews(State(state): State<AppState>) -> Json<ListResponse<Interview>> {
    match InterviewRepo::list_all(&state.pool).await {
        Ok(data) => {
            tracing::debug!(count = data.len(), "Interviews loaded");
            Json(ListResponse { data, error: None })
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load interviews");
            Json(ListResponse {
                data: Vec::new(),
                error: Some("No se pudieron cargar los datos de entrevistas.".to_string()),
            })
        }
    }
}
