//! Form-to-record mapping.
//!
//! Transforms the raw fields of a questionnaire submission into a flat
//! record whose keys correspond 1:1 to `datos_entrevista` columns. The
//! mapping is a pure transform: errors are returned, never raised out of
//! band, and no store interaction happens here.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::flags::{FlagSet, CHECKBOX_GROUPS};

/// Sentinel the form sends when the department was typed into the
/// free-text override field instead of picked from the predefined list.
pub const DEPARTAMENTO_OTRO: &str = "Otro";

/// Calendar-date format accepted for `fecha_entrevista`.
const FECHA_FORMAT: &str = "%Y-%m-%d";

pub const FIELD_NOMBRE_CONTACTO: &str = "nombre_contacto";
pub const FIELD_CARGO: &str = "cargo";
pub const FIELD_DEPARTAMENTO: &str = "departamento";
pub const FIELD_OTRO_DEPARTAMENTO: &str = "otro_departamento";
pub const FIELD_FECHA_ENTREVISTA: &str = "fecha_entrevista";
pub const FIELD_COMENTARIOS: &str = "comentarios";

/// Raw form fields as delivered by an urlencoded body.
///
/// Repeated keys keep every value in submission order; that is how the
/// checkbox groups arrive.
#[derive(Debug, Default, Clone)]
pub struct RawSubmission {
    fields: HashMap<String, Vec<String>>,
}

impl RawSubmission {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_default().push(value);
        }
        Self { fields }
    }

    /// First value for a field, like a single-valued form lookup.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value submitted for a field (multi-select groups).
    pub fn list(&self, name: &str) -> &[String] {
        self.fields
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Flat record produced by the mapper.
///
/// The key set is fixed: the five scalar/date/comment columns plus every
/// flag column, regardless of which options were actually selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedSubmission {
    pub nombre_contacto: String,
    pub cargo: Option<String>,
    pub departamento: Option<String>,
    pub fecha_entrevista: Option<NaiveDate>,
    pub comentarios: Option<String>,
    pub flags: FlagSet,
}

/// Map a raw submission onto the destination column set.
///
/// `nombre_contacto` must be present and non-empty; this is checked before
/// any persistence attempt. Unknown checkbox tokens are ignored, since the
/// form vocabulary may drift ahead of the schema.
pub fn map_submission(raw: &RawSubmission) -> Result<MappedSubmission, CoreError> {
    let nombre_contacto = raw
        .scalar(FIELD_NOMBRE_CONTACTO)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(CoreError::MissingField {
            field: FIELD_NOMBRE_CONTACTO,
        })?
        .to_string();

    let cargo = non_empty(raw.scalar(FIELD_CARGO));
    let departamento = resolve_departamento(
        raw.scalar(FIELD_DEPARTAMENTO),
        raw.scalar(FIELD_OTRO_DEPARTAMENTO),
    );
    let fecha_entrevista = parse_fecha(raw.scalar(FIELD_FECHA_ENTREVISTA))?;
    let comentarios = non_empty(raw.scalar(FIELD_COMENTARIOS));

    let mut flags = FlagSet::all_zero();
    for group in CHECKBOX_GROUPS {
        for token in raw.list(group.field) {
            if let Some(column) = group.column_for(token) {
                flags.set(column);
            }
        }
    }

    Ok(MappedSubmission {
        nombre_contacto,
        cargo,
        departamento,
        fecha_entrevista,
        comentarios,
        flags,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// The resolved department never keeps the sentinel: `"Otro"` is replaced
/// by the free-text override, or by nothing when the override is empty.
fn resolve_departamento(departamento: Option<&str>, otro: Option<&str>) -> Option<String> {
    match departamento.map(str::trim) {
        Some(value) if value == DEPARTAMENTO_OTRO => non_empty(otro),
        other => non_empty(other),
    }
}

/// Empty or absent dates are an explicit "no date", not a parse error.
fn parse_fecha(value: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, FECHA_FORMAT)
            .map(Some)
            .map_err(|_| CoreError::MalformedDate {
                value: raw.to_string(),
            }),
    }
}
