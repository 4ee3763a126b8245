//! Row types for the `datos_entrevista` table.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use entrevistas_core::types::{DbId, Timestamp};

/// Full row from `datos_entrevista`.
///
/// Field names match column names exactly; the flag columns mirror the
/// group tables in `entrevistas_core::flags`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Interview {
    pub id: DbId,
    pub nombre_contacto: String,
    pub cargo: Option<String>,
    pub departamento: Option<String>,
    pub fecha_entrevista: Option<NaiveDate>,
    pub comentarios: Option<String>,
    pub fecha_registro: Timestamp,

    pub proceso_mas_largo_manual: i16,
    pub proceso_mas_largo_multiples_fuentes: i16,
    pub proceso_mas_largo_espera_reportes: i16,
    pub proceso_mas_largo_validacion_datos: i16,

    pub desafio_info_no_actualizada: i16,
    pub desafio_acceso_dificil: i16,
    pub desafio_datos_dispersos: i16,
    pub desafio_falta_reporte: i16,
    pub desafio_dificil_generar_reporte: i16,

    pub infraestructura_dependencia_manual: i16,
    pub infraestructura_falta_estandarizacion: i16,
    pub infraestructura_vulnerabilidades: i16,
    pub infraestructura_poca_escalabilidad: i16,

    pub decision_optimizacion_recursos: i16,
    pub decision_reduccion_costos: i16,
    pub decision_mejora_planificacion: i16,
    pub decision_identificacion_ineficiencias: i16,
}

impl Interview {
    /// Flag value by column name. `None` for unknown columns.
    pub fn flag(&self, column: &str) -> Option<i16> {
        let value = match column {
            "proceso_mas_largo_manual" => self.proceso_mas_largo_manual,
            "proceso_mas_largo_multiples_fuentes" => self.proceso_mas_largo_multiples_fuentes,
            "proceso_mas_largo_espera_reportes" => self.proceso_mas_largo_espera_reportes,
            "proceso_mas_largo_validacion_datos" => self.proceso_mas_largo_validacion_datos,
            "desafio_info_no_actualizada" => self.desafio_info_no_actualizada,
            "desafio_acceso_dificil" => self.desafio_acceso_dificil,
            "desafio_datos_dispersos" => self.desafio_datos_dispersos,
            "desafio_falta_reporte" => self.desafio_falta_reporte,
            "desafio_dificil_generar_reporte" => self.desafio_dificil_generar_reporte,
            "infraestructura_dependencia_manual" => self.infraestructura_dependencia_manual,
            "infraestructura_falta_estandarizacion" => self.infraestructura_falta_estandarizacion,
            "infraestructura_vulnerabilidades" => self.infraestructura_vulnerabilidades,
            "infraestructura_poca_escalabilidad" => self.infraestructura_poca_escalabilidad,
            "decision_optimizacion_recursos" => self.decision_optimizacion_recursos,
            "decision_reduccion_costos" => self.decision_reduccion_costos,
            "decision_mejora_planificacion" => self.decision_mejora_planificacion,
            "decision_identificacion_ineficiencias" => self.decision_identificacion_ineficiencias,
            _ => return None,
        };
        Some(value)
    }
}
