// [libs/domain/models/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: ATTACK DOMAIN MODELS (V6.0 - PRODUCTION MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: DEFINICIÓN DE CONTRATOS SOBERANOS DEL ATAQUE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SERDE PARITY: Todos los contratos derivan Serialize/Deserialize
 *    para la emisión de telemetría JSON en modo producción.
 * 2. NOMINAL PRECISION: Nomenclatura nominal absoluta en todos los
 *    campos (k1 -> key_half_one).
 * 3. AUDIT IMMUTABILITY: El reporte por par sella el esfuerzo de una
 *    corrida con marcas de tiempo y contadores reproducibles.
 * =================================================================
 */

/// Directivas de corrida y plan de compresión de memoria.
pub mod directives;
/// Soluciones doradas y reportes de ejecución por par y agregados.
pub mod reporting;

pub use directives::{AttackDirectives, CompressionPlan};
pub use reporting::{AttackSummary, GoldenSolution, PeerExecutionReport};
