// [apps/claw-hunter/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CLAW HUNTER LIBRARY HUB (V4.1 - ZENITH SHELL)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L5)
 * RESPONSABILIDAD: EXPORTACIÓN DEL LANZADOR PARA SHELL Y PRUEBAS
 * =================================================================
 */

/// Lanzador del enjambre: forja, ejecución, validación y agregado raíz.
pub mod launcher;

pub use launcher::{execute_distributed_attack, execute_distributed_attack_with_plan, AttackOutcome};
