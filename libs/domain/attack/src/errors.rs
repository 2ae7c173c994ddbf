// libs/domain/attack/src/errors.rs
// =================================================================
// APARATO: ATTACK ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL MOTOR DE COLISIÓN
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Fallos terminales del motor de encuentro en el medio.
///
/// La corrida es atómica a nivel de grupo: cualquier variante provoca
/// el aborto del enjambre completo, sin reintentos ni fallo parcial.
#[derive(Error, Debug)]
pub enum AttackFault {
    /// Violación de invariante del diccionario (saturación de fragmento
    /// o desbordamiento de sondeo).
    #[error("fallo de diccionario: {0}")]
    Dict(#[from] goldenclaw_core_dict::DictFault),

    /// Colapso del transporte colectivo del enjambre.
    #[error("fallo de transporte: {0}")]
    Transport(#[from] goldenclaw_infra_transport::TransportFault),

    /// La corrida confirmó más soluciones doradas que el tope
    /// configurado durante un único drenaje.
    #[error("desbordamiento de soluciones: se superó el tope de {max_results}")]
    SolutionOverflow {
        /// Tope de soluciones de las directivas.
        max_results: usize,
    },
}
