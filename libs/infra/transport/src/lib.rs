// [libs/infra/transport/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: PEER TRANSPORT MASTER HUB (V8.0 - LOCKSTEP SOVEREIGN)
 * CLASIFICACIÓN: INFRA TRANSPORT (ESTRATO L3)
 * RESPONSABILIDAD: CONTRATO COLECTIVO Y ARNÉS DE PARES EN PROCESO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CONTRACT FIRST: El trait 'PeerCollective' captura exactamente lo
 *    que el motor de colisión consume — rango, intercambio total en
 *    sitio, reducción por suma y barrera de quiescencia con sondeo.
 * 2. LOCKSTEP GUARANTEE: Cada colectivo es una barrera; la secuencia
 *    de colectivos es idéntica en todos los pares, sin emparejamientos
 *    ambiguos ni mensajes punto a punto.
 * 3. GROUP ATOMICITY: No hay reintentos ni fallo parcial — un colapso
 *    en cualquier par aborta el grupo completo.
 * =================================================================
 */

/// Contrato colectivo del grupo de pares.
pub mod collective;
/// Catálogo de fallos del transporte.
pub mod errors;
/// Arnés de producción: un hilo del SO por par, celdas de encuentro.
pub mod harness;

pub use collective::{PeerCollective, QuiescenceTicket};
pub use errors::TransportFault;
pub use harness::{PeerEndpoint, ThreadPeerGroup};
