// [libs/domain/attack/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: GOLDEN CLAW ATTACK HUB (V11.0 - CLAW SOVEREIGN)
 * CLASIFICACIÓN: DOMAIN STRATEGY (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DEL ENCUENTRO EN EL MEDIO DISTRIBUIDO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PHASE DISCIPLINE: Cada ronda ejecuta llenado → drenaje →
 *    sondeo → drenaje → reinicio, con quiescencia no bloqueante entre
 *    la enumeración local y el vaciado de lotes residuales.
 * 2. ORACLE PURITY: f, g e is_good_pair son funciones puras sobre el
 *    cifrador; el motor distribuido computa contra ese valor.
 * 3. MEMORY COMPRESSION: El plan de compresión intercambia rondas por
 *    memoria, manteniendo el conjunto de soluciones invariante.
 * 4. GROUP ATOMICITY: Todo fallo de invariante aborta el enjambre.
 * =================================================================
 */

/// Motor por par: fases de llenado/sondeo y conductor de rondas.
pub mod engine;
/// Catálogo de fallos del ataque.
pub mod errors;
/// Oráculo puro del encuentro en el medio sobre SPECK-64/128.
pub mod oracle;
/// Dimensionado de fragmentos, lotes y factor de compresión.
pub mod sizing;
/// Lotes salientes por par destino con estadísticas de ocupación.
pub mod staging;

pub use engine::ClawEngine;
pub use errors::AttackFault;
pub use oracle::ClawOracle;
pub use sizing::{plan_compression, plan_with_factor};
pub use staging::StagingBuffers;
