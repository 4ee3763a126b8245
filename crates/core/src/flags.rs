//! Checkbox-group flag tables.
//!
//! Each multi-select form group carries a fixed vocabulary of option
//! tokens, and each token maps to exactly one SMALLINT column in
//! `datos_entrevista`. The tables are declared statically so the column
//! set the mapper produces never depends on which keys a client sends.

use crate::error::CoreError;

/// One multi-select form group: the form field it is submitted under and
/// its `(option token, destination column)` vocabulary.
#[derive(Debug)]
pub struct CheckboxGroup {
    pub field: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

impl CheckboxGroup {
    /// Destination column for an option token, if the token is known.
    pub fn column_for(&self, token: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, column)| *column)
    }
}

/// Causes of the longest process step.
pub const PROCESO_MAS_LARGO: CheckboxGroup = CheckboxGroup {
    field: "proceso_mas_largo",
    options: &[
        ("proceso_manual", "proceso_mas_largo_manual"),
        ("multiples_fuentes", "proceso_mas_largo_multiples_fuentes"),
        ("espera_reportes", "proceso_mas_largo_espera_reportes"),
        ("validacion_datos", "proceso_mas_largo_validacion_datos"),
    ],
};

/// Information-access challenges.
pub const DESAFIO_INFO: CheckboxGroup = CheckboxGroup {
    field: "desafio_info",
    options: &[
        ("desactualizada", "desafio_info_no_actualizada"),
        ("falta_acceso", "desafio_acceso_dificil"),
        ("datos_dispersos", "desafio_datos_dispersos"),
        ("falta_reporte", "desafio_falta_reporte"),
        ("dificil_generar_reporte", "desafio_dificil_generar_reporte"),
    ],
};

/// Infrastructure challenges.
pub const INFRAESTRUCTURA_DESAFIO: CheckboxGroup = CheckboxGroup {
    field: "infraestructura_desafio",
    options: &[
        ("dependencia_manual", "infraestructura_dependencia_manual"),
        ("falta_estandarizacion", "infraestructura_falta_estandarizacion"),
        ("vulnerabilidades", "infraestructura_vulnerabilidades"),
        ("poca_escalabilidad", "infraestructura_poca_escalabilidad"),
    ],
};

/// Decision drivers.
pub const DECISION: CheckboxGroup = CheckboxGroup {
    field: "decision",
    options: &[
        ("optimizacion_recursos", "decision_optimizacion_recursos"),
        ("reduccion_costos", "decision_reduccion_costos"),
        ("mejora_planificacion", "decision_mejora_planificacion"),
        ("identificacion_ineficiencias", "decision_identificacion_ineficiencias"),
    ],
};

/// Every group, in schema declaration order.
pub const CHECKBOX_GROUPS: &[&CheckboxGroup] = &[
    &PROCESO_MAS_LARGO,
    &DESAFIO_INFO,
    &INFRAESTRUCTURA_DESAFIO,
    &DECISION,
];

/// Every flag column across all groups, in declaration order.
pub fn flag_columns() -> Vec<&'static str> {
    CHECKBOX_GROUPS
        .iter()
        .flat_map(|group| group.options.iter().map(|(_, column)| *column))
        .collect()
}

/// Flag values for every checkbox column, in declaration order.
///
/// Always holds one entry per known column: absence of a checkbox
/// selection means 0, never a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSet {
    values: Vec<(&'static str, i16)>,
}

impl FlagSet {
    /// A flag set with every column initialized to 0.
    pub fn all_zero() -> Self {
        Self {
            values: flag_columns().into_iter().map(|column| (column, 0)).collect(),
        }
    }

    /// Mark a column as selected. Unknown columns are ignored.
    pub(crate) fn set(&mut self, column: &str) {
        if let Some(entry) = self.values.iter_mut().find(|(c, _)| *c == column) {
            entry.1 = 1;
        }
    }

    /// Value for a column, if the column is known.
    pub fn get(&self, column: &str) -> Option<i16> {
        self.values
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, value)| *value)
    }

    /// `(column, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i16)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Verify the static tables are internally consistent: distinct form
/// fields, no repeated token within a group, no column claimed by two
/// tokens. Run once at startup.
pub fn validate_groups() -> Result<(), CoreError> {
    let mut fields = Vec::new();
    let mut columns = Vec::new();

    for group in CHECKBOX_GROUPS {
        if fields.contains(&group.field) {
            return Err(CoreError::Validation(format!(
                "Checkbox group field '{}' is declared twice",
                group.field
            )));
        }
        fields.push(group.field);

        let mut tokens = Vec::new();
        for (token, column) in group.options {
            if tokens.contains(token) {
                return Err(CoreError::Validation(format!(
                    "Token '{token}' is declared twice in group '{}'",
                    group.field
                )));
            }
            tokens.push(token);

            if columns.contains(column) {
                return Err(CoreError::Validation(format!(
                    "Column '{column}' is claimed by more than one token"
                )));
            }
            columns.push(column);
        }
    }

    Ok(())
}
