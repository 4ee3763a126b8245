//! Gateway for the `datos_entrevista` table: duplicate-safe submission
//! and the recency-ordered listing.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use entrevistas_core::flags::flag_columns;
use entrevistas_core::submission::MappedSubmission;
use entrevistas_core::types::Timestamp;

use crate::error::SubmitError;
use crate::models::interview::Interview;

/// Scalar columns in select order; the flag columns are appended from the
/// group tables so the two can never drift apart.
const SCALAR_COLUMNS: &str =
    "id, nombre_contacto, cargo, departamento, fecha_entrevista, comentarios, fecha_registro";

fn select_columns() -> String {
    format!("{SCALAR_COLUMNS}, {}", flag_columns().join(", "))
}

/// A value bound positionally into the insert statement.
enum Bind<'a> {
    Text(&'a str),
    OptText(Option<&'a str>),
    Date(Option<NaiveDate>),
    Flag(i16),
    Stamp(Timestamp),
}

/// Column/value pairs for the insert, derived from the record: scalars
/// first, then every flag column in declaration order, then the
/// server-assigned registration timestamp.
fn insert_columns<'a>(
    input: &'a MappedSubmission,
    fecha_registro: Timestamp,
) -> Vec<(&'static str, Bind<'a>)> {
    let mut columns: Vec<(&'static str, Bind<'a>)> = vec![
        ("nombre_contacto", Bind::Text(&input.nombre_contacto)),
        ("cargo", Bind::OptText(input.cargo.as_deref())),
        ("departamento", Bind::OptText(input.departamento.as_deref())),
        ("fecha_entrevista", Bind::Date(input.fecha_entrevista)),
        ("comentarios", Bind::OptText(input.comentarios.as_deref())),
    ];
    for (column, value) in input.flags.entries() {
        columns.push((column, Bind::Flag(value)));
    }
    columns.push(("fecha_registro", Bind::Stamp(fecha_registro)));
    columns
}

/// Provides the submission gateway and the listing reader.
pub struct InterviewRepo;

impl InterviewRepo {
    /// Case-insensitive existence probe on the natural key.
    pub async fn exists_by_nombre(pool: &PgPool, nombre: &str) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM datos_entrevista WHERE LOWER(nombre_contacto) = LOWER($1)",
        )
        .bind(nombre)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// Persist a mapped submission, returning the stored row.
    ///
    /// Runs inside a transaction: the duplicate pre-check, the insert, and
    /// the commit share one connection, and dropping the transaction on
    /// any early-exit path rolls back and releases it. The pre-check gives
    /// the common duplicate a friendly answer; the unique index on
    /// `LOWER(nombre_contacto)` remains the authoritative guard, surfaced
    /// through [`SubmitError::classify`].
    ///
    /// `fecha_registro` is assigned here, never taken from the caller.
    pub async fn submit(
        pool: &PgPool,
        input: &MappedSubmission,
    ) -> Result<Interview, SubmitError> {
        let nombre = input.nombre_contacto.as_str();

        let mut tx = pool
            .begin()
            .await
            .map_err(|e| SubmitError::classify(nombre, e))?;

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM datos_entrevista WHERE LOWER(nombre_contacto) = LOWER($1)",
        )
        .bind(nombre)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| SubmitError::classify(nombre, e))?;

        if count > 0 {
            tracing::warn!(nombre_contacto = %nombre, "Duplicate contact, nothing written");
            return Err(SubmitError::DuplicateContact(nombre.to_string()));
        }

        let columns = insert_columns(input, Utc::now());
        let column_list = columns
            .iter()
            .map(|(column, _)| *column)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO datos_entrevista ({column_list}) VALUES ({placeholders}) RETURNING {}",
            select_columns()
        );

        let mut insert = sqlx::query_as::<_, Interview>(&query);
        for (_, value) in &columns {
            insert = match value {
                Bind::Text(v) => insert.bind(*v),
                Bind::OptText(v) => insert.bind(*v),
                Bind::Date(v) => insert.bind(*v),
                Bind::Flag(v) => insert.bind(*v),
                Bind::Stamp(v) => insert.bind(*v),
            };
        }

        let inserted = insert
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| SubmitError::classify(nombre, e))?;

        let Some(row) = inserted else {
            let _ = tx.rollback().await;
            tracing::error!(nombre_contacto = %nombre, "Insert affected no rows, rolled back");
            return Err(SubmitError::SilentInsertFailure);
        };

        tx.commit()
            .await
            .map_err(|e| SubmitError::classify(nombre, e))?;

        tracing::info!(id = row.id, nombre_contacto = %row.nombre_contacto, "Interview stored");
        Ok(row)
    }

    /// All interviews, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Interview>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM datos_entrevista ORDER BY fecha_registro DESC",
            select_columns()
        );
        sqlx::query_as::<_, Interview>(&query).fetch_all(pool).await
    }
}
