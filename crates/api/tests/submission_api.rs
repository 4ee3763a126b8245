//! Integration tests for the submission endpoint.
//!
//! Drives the full router with urlencoded form bodies, the way the
//! questionnaire page submits them, and verifies the flash redirect plus
//! what actually landed in the store.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, location, post_form};
use sqlx::PgPool;

const FULL_PAYLOAD: &str = "nombre_contacto=Ana+Ruiz\
    &cargo=Directora+de+Operaciones\
    &departamento=Finanzas\
    &fecha_entrevista=2024-06-15\
    &comentarios=Primera+ronda\
    &proceso_mas_largo=proceso_manual\
    &proceso_mas_largo=validacion_datos\
    &decision=reduccion_costos";

async fn list_data(pool: PgPool) -> serde_json::Value {
    let response = get(common::build_test_app(pool), "/entrevistas").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Success path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_redirects_with_success_flash(pool: PgPool) {
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", FULL_PAYLOAD).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert!(target.starts_with("/?flash=success"), "got {target}");

    let json = list_data(pool).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["nombre_contacto"], "Ana Ruiz");
    assert_eq!(json["data"][0]["departamento"], "Finanzas");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selected_checkboxes_map_to_their_columns(pool: PgPool) {
    post_form(common::build_test_app(pool.clone()), "/entrevistas", FULL_PAYLOAD).await;

    let json = list_data(pool).await;
    let row = &json["data"][0];

    assert_eq!(row["proceso_mas_largo_manual"], 1);
    assert_eq!(row["proceso_mas_largo_validacion_datos"], 1);
    assert_eq!(row["proceso_mas_largo_multiples_fuentes"], 0);
    assert_eq!(row["proceso_mas_largo_espera_reportes"], 0);
    assert_eq!(row["decision_reduccion_costos"], 1);
    assert_eq!(row["infraestructura_vulnerabilidades"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_checkbox_tokens_are_ignored(pool: PgPool) {
    let body = "nombre_contacto=Ana+Ruiz\
        &proceso_mas_largo=no_existe\
        &decision=reduccion_costos";
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?flash=success"));

    let json = list_data(pool).await;
    assert_eq!(json["data"][0]["decision_reduccion_costos"], 1);
    assert_eq!(json["data"][0]["proceso_mas_largo_manual"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn otro_department_stores_the_override(pool: PgPool) {
    let body = "nombre_contacto=Ana+Ruiz\
        &departamento=Otro\
        &otro_departamento=Logistica";
    post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;

    let json = list_data(pool).await;
    assert_eq!(json["data"][0]["departamento"], "Logistica");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_date_is_stored_as_null(pool: PgPool) {
    let body = "nombre_contacto=Ana+Ruiz&fecha_entrevista=";
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;
    assert!(location(&response).starts_with("/?flash=success"));

    let json = list_data(pool).await;
    assert!(json["data"][0]["fecha_entrevista"].is_null());
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_contact_name_flashes_error_and_stores_nothing(pool: PgPool) {
    let body = "cargo=Directora&departamento=Finanzas";
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/?flash=error"));

    let json = list_data(pool).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_date_flashes_error_and_stores_nothing(pool: PgPool) {
    let body = "nombre_contacto=Ana+Ruiz&fecha_entrevista=2024-13-40";
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;

    assert!(location(&response).starts_with("/?flash=error"));

    let json = list_data(pool).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Duplicates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn same_payload_twice_keeps_a_single_record(pool: PgPool) {
    let first = post_form(common::build_test_app(pool.clone()), "/entrevistas", FULL_PAYLOAD).await;
    assert!(location(&first).starts_with("/?flash=success"));

    let second = post_form(common::build_test_app(pool.clone()), "/entrevistas", FULL_PAYLOAD).await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert!(location(&second).starts_with("/?flash=error"));

    let json = list_data(pool).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_detection_is_case_insensitive(pool: PgPool) {
    post_form(common::build_test_app(pool.clone()), "/entrevistas", FULL_PAYLOAD).await;

    let body = "nombre_contacto=ANA+RUIZ";
    let response = post_form(common::build_test_app(pool.clone()), "/entrevistas", body).await;
    assert!(location(&response).starts_with("/?flash=error"));

    let json = list_data(pool).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
