// [libs/domain/models/src/directives.rs]
/*!
 * =================================================================
 * APARATO: RUN DIRECTIVES & COMPRESSION PLAN (V6.0 - PRODUCTION MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CONTRATO DE CONFIGURACIÓN VALIDADA DE UNA CORRIDA
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Ratio de llenado de lote de la variante de producción (0.1% del
/// fragmento local). La variante ligera histórica empleaba 0.5%.
pub const DEFAULT_BATCH_FILL_RATIO: f64 = 0.001;

/// Tope de soluciones recolectadas por corrida.
pub const DEFAULT_MAX_RESULTS: usize = 16;

/// Directivas de mando validadas para una corrida del ataque.
///
/// El mismo valor se clona hacia cada par del enjambre: toda decisión
/// dependiente de configuración (p. ej. la salida temprana) es por
/// construcción idéntica en todos los pares, preservando el orden
/// uniforme de los colectivos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackDirectives {
    /// Bits de la mitad de clave bajo búsqueda (`mask = 2^n - 1`).
    pub bits_n: u64,
    /// Primer texto cifrado (palabra baja en los 32 bits inferiores).
    pub ciphertext_c0: u64,
    /// Segundo texto cifrado, con idéntica partición de palabras.
    pub ciphertext_c1: u64,
    /// Presupuesto de memoria de la corrida, en GiB.
    pub memory_budget_gib: f64,
    /// Número de pares del enjambre (potencia de dos).
    pub peer_count: usize,
    /// Retorno inmediato al confirmar la primera colisión dorada global.
    #[serde(default)]
    pub early_exit: bool,
    /// Fracción del fragmento local que dimensiona cada lote saliente.
    #[serde(default = "default_batch_fill_ratio")]
    pub batch_fill_ratio: f64,
    /// Tope de soluciones por corrida; superarlo es fatal.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_batch_fill_ratio() -> f64 {
    DEFAULT_BATCH_FILL_RATIO
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl AttackDirectives {
    /// Máscara de enumeración: `2^n - 1`.
    #[must_use]
    pub fn keyspace_mask(&self) -> u64 {
        (1u64 << self.bits_n) - 1
    }

    /// Cardinal del espacio de claves enumerado: `2^n`.
    #[must_use]
    pub fn keyspace_size(&self) -> u64 {
        1u64 << self.bits_n
    }
}

/// Plan de compresión de memoria derivado de las directivas.
///
/// Un factor mayor reduce el fragmento por ronda a costa de más rondas
/// de llenado/vaciado; el factor cero es la corrida sin compresión.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompressionPlan {
    /// Logaritmo en base 2 del número de rondas.
    pub compress_factor: u32,
    /// Rondas de la corrida: `2^compress_factor`.
    pub round_count: u64,
    /// Ranuras del fragmento local de cada par.
    pub local_slot_count: u64,
    /// Ranuras de la tabla lógica global (`local * P`, exacto).
    pub global_slot_count: u64,
    /// Capacidad de cada lote saliente, en pares clave/valor.
    pub batch_capacity: u64,
}
