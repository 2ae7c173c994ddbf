// libs/infra/transport/src/errors.rs
// =================================================================
// APARATO: TRANSPORT ERRORS
// RESPONSABILIDAD: CATÁLOGO DE COLAPSOS DEL GRUPO DE PARES
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Fallos del transporte colectivo.
///
/// Toda variante es terminal para la corrida: el protocolo es atómico a
/// nivel de grupo y carece de semántica de fallo parcial.
#[derive(Error, Debug)]
pub enum TransportFault {
    /// El grupo fue abortado por algún par (análogo de un aborto
    /// colectivo): los pares bloqueados en un colectivo despiertan con
    /// esta variante en lugar de quedar en interbloqueo.
    #[error("grupo de pares colapsado: {reason}")]
    GroupCollapsed {
        /// Motivo declarado por el par que inició el aborto.
        reason: String,
    },

    /// El buffer entregado a un colectivo no respeta la geometría
    /// simétrica `P * longitud_de_bloque`.
    #[error("geometría de colectivo inválida: se esperaban {expected} palabras, llegaron {actual}")]
    CollectiveGeometry {
        /// Palabras u64 exigidas por la geometría del grupo.
        expected: usize,
        /// Palabras u64 realmente entregadas.
        actual: usize,
    },

    /// Un cerrojo de celda colectiva quedó envenenado por el pánico de
    /// otro hilo de par.
    #[error("celda colectiva envenenada por pánico de un par")]
    CellPoisoned,
}
