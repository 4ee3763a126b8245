//! Flash-style redirects.
//!
//! The questionnaire is a plain HTML form; handler outcomes are reported
//! the way server-rendered apps do it: a `303 See Other` back to the form
//! page with a `flash` category and a human-readable `mensaje` in the
//! query string. The form page (external) renders both.

use axum::response::Redirect;
use serde::Serialize;

/// Message category the form page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Error,
}

#[derive(Serialize)]
struct FlashParams<'a> {
    flash: FlashCategory,
    mensaje: &'a str,
}

/// Query string carrying a flash message.
pub fn flash_query(category: FlashCategory, mensaje: &str) -> String {
    serde_urlencoded::to_string(FlashParams {
        flash: category,
        mensaje,
    })
    .unwrap_or_default()
}

/// Redirect to the form page carrying a flash message.
pub fn flash_redirect(category: FlashCategory, mensaje: &str) -> Redirect {
    Redirect::to(&format!("/?{}", flash_query(category, mensaje)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_category_serializes_lowercase() {
        let query = flash_query(FlashCategory::Success, "guardado");
        assert_eq!(query, "flash=success&mensaje=guardado");
    }

    #[test]
    fn message_is_url_encoded() {
        let query = flash_query(FlashCategory::Error, "ya existe en la base");
        assert_eq!(query, "flash=error&mensaje=ya+existe+en+la+base");
    }
}
