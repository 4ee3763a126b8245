//! HTTP-level error handling for the submission flow.
//!
//! Every failure class surfaces to the browser as a flash redirect with a
//! stable, user-actionable message. Raw driver errors are logged, never
//! shown, and never carry credentials.

use axum::response::{IntoResponse, Response};

use entrevistas_core::error::CoreError;
use entrevistas_db::error::SubmitError;

use crate::flash::{flash_redirect, FlashCategory};

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A validation error from the submission mapper.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from the persistence gateway.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable user-facing message per failure class.
    fn user_message(&self) -> String {
        match self {
            AppError::Core(CoreError::MissingField { field }) => {
                format!("El campo {field} es obligatorio.")
            }
            AppError::Core(CoreError::MalformedDate { .. }) => {
                "La fecha de entrevista no es válida (formato AAAA-MM-DD).".to_string()
            }
            AppError::Core(CoreError::Validation(mensaje)) => mensaje.clone(),
            AppError::Submit(SubmitError::DuplicateContact(nombre)) => {
                format!("Error: El contacto \"{nombre}\" ya existe en la base de datos.")
            }
            AppError::Submit(SubmitError::ConnectionUnavailable(_)) => {
                "No se puede conectar a la base de datos. Por favor, inténtelo de nuevo más tarde."
                    .to_string()
            }
            AppError::Submit(SubmitError::SilentInsertFailure) => {
                "Error: La información no pudo ser guardada en la base de datos.".to_string()
            }
            AppError::Submit(SubmitError::Unknown(_)) => {
                "Ocurrió un error al guardar la información. Por favor, inténtelo de nuevo."
                    .to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(err) => {
                tracing::warn!(error = %err, "Submission rejected before persistence");
            }
            AppError::Submit(SubmitError::DuplicateContact(nombre)) => {
                tracing::warn!(nombre_contacto = %nombre, "Duplicate contact rejected");
            }
            AppError::Submit(err) => {
                tracing::error!(error = %err, "Store error during submission");
            }
        }

        flash_redirect(FlashCategory::Error, &self.user_message()).into_response()
    }
}
