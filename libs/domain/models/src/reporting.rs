// [libs/domain/models/src/reporting.rs]
/*!
 * =================================================================
 * APARATO: EXECUTION REPORTING CONTRACTS (V6.1 - AUDIT SEAL)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: SELLADO DE SOLUCIONES Y MÉTRICAS DE CORRIDA
 *
 * # Mathematical Proof (Audit Immutability):
 * El reporte por par captura contadores y cronómetros tomados sobre la
 * corrida ya concluida; el agregado raíz se deriva de esos reportes sin
 * estado mutable compartido, por lo que la auditoría es reproducible.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Una colisión dorada verificada: el par de mitades de clave que
/// satisface la relación de doble cifrado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoldenSolution {
    /// Mitad de clave interior (preimagen de la fase de llenado).
    pub key_half_one: u64,
    /// Mitad de clave exterior (preimagen de la fase de sondeo).
    pub key_half_two: u64,
    /// Rango del par que confirmó la colisión.
    pub found_by_peer: usize,
    /// Marca de tiempo RFC-3339 de la detección.
    pub detected_at: String,
}

impl GoldenSolution {
    /// Sella una solución con la marca de tiempo actual.
    #[must_use]
    pub fn seal(key_half_one: u64, key_half_two: u64, found_by_peer: usize) -> Self {
        Self {
            key_half_one,
            key_half_two,
            found_by_peer,
            detected_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Reporte de ejecución de un único par, emitido al concluir su
/// participación en la búsqueda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerExecutionReport {
    /// Rango del par dentro del enjambre.
    pub peer_rank: usize,
    /// Soluciones doradas confirmadas localmente por este par.
    pub solutions: Vec<GoldenSolution>,
    /// Coincidencias de diccionario observadas (diagnóstico, incluye
    /// falsos positivos de clave reducida luego filtrados).
    pub candidate_hits: u64,
    /// Intercambios colectivos ejecutados por este par.
    pub exchange_count: u64,
    /// Suma de las ocupaciones relativas de lote previas a cada
    /// intercambio (se promedia en el agregado raíz).
    pub cumulative_buffer_occupancy: f64,
    /// Segundos acumulados en la fase de llenado.
    pub fill_seconds: f64,
    /// Segundos acumulados en la fase de sondeo.
    pub probe_seconds: f64,
    /// Segundos dentro de los colectivos de intercambio.
    pub communication_seconds: f64,
    /// Segundos de cómputo puro (total menos comunicación).
    pub compute_seconds: f64,
}

/// Agregado raíz de una corrida completa, listo para emisión como fila
/// estructurada y como línea JSON de telemetría.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackSummary {
    /// Bits de la mitad de clave buscada.
    pub bits_n: u64,
    /// Pares del enjambre.
    pub peer_count: usize,
    /// Factor de compresión empleado.
    pub compress_factor: u32,
    /// Cronómetros del par raíz (referencia de la corrida).
    pub compute_seconds: f64,
    /// Segundos dentro de los colectivos (par raíz).
    pub communication_seconds: f64,
    /// Segundos de llenado (par raíz).
    pub fill_seconds: f64,
    /// Segundos de sondeo (par raíz).
    pub probe_seconds: f64,
    /// Ocupación media de lotes en porcentaje, agregada sobre el enjambre.
    pub average_buffer_occupancy_percent: f64,
    /// Coincidencias de diccionario totales del enjambre.
    pub total_candidate_hits: u64,
    /// Soluciones doradas verificadas, en orden de rango.
    pub solutions: Vec<GoldenSolution>,
}

impl AttackSummary {
    /// Fila estructurada de estadísticas para post-procesamiento
    /// (`>>>n,P,factor,computo,comunicacion,llenado,sondeo,ocupacion`).
    #[must_use]
    pub fn structured_row(&self) -> String {
        format!(
            ">>>{},{},{},{:.12},{:.12},{:.12},{:.12},{:.12}",
            self.bits_n,
            self.peer_count,
            self.compress_factor,
            self.compute_seconds,
            self.communication_seconds,
            self.fill_seconds,
            self.probe_seconds,
            self.average_buffer_occupancy_percent,
        )
    }
}
